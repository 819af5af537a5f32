use crate::error::CounselError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

/// One message in a conversation, attributed to the user or the model.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Turn {
    pub role: Role,
    pub text: String,
}

impl Turn {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
        }
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: Role::Model,
            text: text.into(),
        }
    }
}

/// The generative-language client trait. One request per prompt, no retry,
/// no streaming; the full reply text comes back in a single call.
#[async_trait::async_trait]
pub trait GenerativeClient: Send + Sync {
    /// Send the full ordered conversation and return the model's reply text.
    async fn generate(&self, conversation: &[Turn]) -> Result<String, CounselError>;
}
