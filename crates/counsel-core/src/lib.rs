pub mod config;
pub mod context;
pub mod error;
pub mod format;
pub mod llm;
pub mod session;

// Re-export key types
pub use config::Settings;
pub use context::Conversation;
pub use error::CounselError;
pub use format::{format_reply, Reply};
pub use llm::{GeminiClient, GenerativeClient, Role, Turn};
pub use session::Session;
