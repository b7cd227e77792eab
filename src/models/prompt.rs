use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Outcome of one enhancement call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enhancement {
    pub enhanced_prompt: String,
    pub keywords: Vec<String>,
    pub success: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnhancedPrompt {
    pub id: String,
    pub original_prompt: String,
    pub enhanced_prompt: String,
    pub keywords: Vec<String>,
    pub session_id: String,
    pub created_at: DateTime<Utc>,
}

impl EnhancedPrompt {
    pub fn new(
        original_prompt: impl Into<String>,
        enhancement: Enhancement,
        session_id: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            original_prompt: original_prompt.into(),
            enhanced_prompt: enhancement.enhanced_prompt,
            keywords: enhancement.keywords,
            session_id: session_id.into(),
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageType {
    User,
    Ai,
    System,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub session_id: String,
    pub message_type: MessageType,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
    pub created_at: DateTime<Utc>,
}

impl ChatMessage {
    pub fn new(
        session_id: impl Into<String>,
        message_type: MessageType,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            session_id: session_id.into(),
            message_type,
            content: content.into(),
            keywords: None,
            created_at: Utc::now(),
        }
    }

    pub fn with_keywords(mut self, keywords: Vec<String>) -> Self {
        self.keywords = Some(keywords);
        self
    }
}
