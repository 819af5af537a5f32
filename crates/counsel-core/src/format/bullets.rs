use regex::Regex;
use std::fmt;

const BULLET: &str = "• ";

/// Bullet-point rendering of a single model reply, one sentence per line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reply {
    lines: Vec<String>,
}

impl Reply {
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lines.join("\n\n"))
    }
}

/// Convert a raw block of prose into bullet lines.
///
/// Sentences are split at `.`, `!` or `?` followed by whitespace, and the
/// word after a literal `import` is wrapped in `**` markers.
pub fn format_reply(text: &str) -> Reply {
    let emphasis = Regex::new(r"\bimport\s+(\w+)").unwrap();

    let lines = split_sentences(text)
        .into_iter()
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            let emphasized = emphasis.replace_all(segment, "import **$1**");
            format!("{BULLET}{emphasized}")
        })
        .collect();

    Reply { lines }
}

/// Split on sentence terminators followed by whitespace, keeping the
/// terminator attached to the preceding segment. A heuristic, not a
/// tokenizer: abbreviations, decimals and quoted punctuation are not
/// special-cased.
fn split_sentences(text: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((_, ch)) = chars.next() {
        if matches!(ch, '.' | '!' | '?') {
            if let Some(&(next_idx, next_ch)) = chars.peek() {
                if next_ch.is_whitespace() {
                    segments.push(&text[start..next_idx]);
                    start = next_idx;
                }
            }
        }
    }
    if start < text.len() {
        segments.push(&text[start..]);
    }

    segments
}
