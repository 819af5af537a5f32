use crate::llm::Turn;

/// Append-only log of the turns exchanged in one conversation.
///
/// Order is chronology and is sent verbatim to the API on every call.
/// The log grows without bound until [`Conversation::reset`].
#[derive(Debug, Clone, Default)]
pub struct Conversation {
    turns: Vec<Turn>,
}

impl Conversation {
    pub fn new() -> Self {
        Self { turns: Vec::new() }
    }

    /// Append a turn at the end of the log.
    pub fn append(&mut self, turn: Turn) {
        self.turns.push(turn);
    }

    /// Clear the log back to empty.
    pub fn reset(&mut self) {
        self.turns.clear();
    }

    /// Read-only view of the turns, oldest first.
    pub fn snapshot(&self) -> &[Turn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn last_turn(&self) -> Option<&Turn> {
        self.turns.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::Role;

    #[test]
    fn test_append_keeps_chronological_order() {
        let mut conversation = Conversation::new();
        conversation.append(Turn::user("Is a verbal agreement binding?"));
        conversation.append(Turn::model("It can be, depending on the contract."));
        conversation.append(Turn::user("What about in writing?"));

        let turns = conversation.snapshot();
        assert_eq!(turns.len(), 3);
        assert_eq!(turns[0].role, Role::User);
        assert_eq!(turns[1].role, Role::Model);
        assert_eq!(turns[2].text, "What about in writing?");
    }

    #[test]
    fn test_snapshot_includes_just_appended_turn() {
        let mut conversation = Conversation::new();
        conversation.append(Turn::user("hello"));

        assert_eq!(conversation.snapshot().last().unwrap().text, "hello");
        assert_eq!(conversation.last_turn().unwrap().role, Role::User);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut conversation = Conversation::new();
        conversation.append(Turn::user("hello"));
        conversation.append(Turn::model("hi"));
        conversation.reset();

        assert!(conversation.is_empty());
        assert_eq!(conversation.len(), 0);
        assert!(conversation.snapshot().is_empty());
        assert!(conversation.last_turn().is_none());
    }
}
