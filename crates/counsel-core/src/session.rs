use crate::context::Conversation;
use crate::format::{format_reply, Reply};
use crate::llm::{GenerativeClient, Turn};
use tokio::sync::Mutex;

/// Reply text substituted when the transport call fails. The caller still
/// receives a formatted reply and the transcript still gains a model turn.
pub const APOLOGY: &str =
    "I apologize, but I encountered an error while processing your request. Please try again later.";

/// One consultation conversation: a generative client plus the transcript
/// it has produced so far.
pub struct Session {
    llm: Box<dyn GenerativeClient>,
    conversation: Mutex<Conversation>,
}

impl Session {
    pub fn new(llm: Box<dyn GenerativeClient>) -> Self {
        Self {
            llm,
            conversation: Mutex::new(Conversation::new()),
        }
    }

    /// Submit a prompt and return the formatted reply.
    ///
    /// The user turn is committed before the network call, and a model turn
    /// is appended whether the call succeeds or not, so the transcript
    /// always holds a model turn for every user turn. The lock is held
    /// across the request; overlapping submits queue in arrival order.
    pub async fn submit(&self, prompt: impl Into<String>) -> Reply {
        let mut conversation = self.conversation.lock().await;
        conversation.append(Turn::user(prompt));

        let reply_text = match self.llm.generate(conversation.snapshot()).await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!("Transport call failed, substituting apology: {}", e);
                APOLOGY.to_string()
            }
        };

        conversation.append(Turn::model(reply_text.clone()));
        format_reply(&reply_text)
    }

    /// Clear the transcript back to an empty conversation.
    pub async fn reset(&self) {
        let mut conversation = self.conversation.lock().await;
        conversation.reset();
    }

    /// Owned copy of the transcript, oldest turn first.
    pub async fn history(&self) -> Vec<Turn> {
        let conversation = self.conversation.lock().await;
        conversation.snapshot().to_vec()
    }
}
