use crate::{error::Result, models::TextGenerationRequest};
use async_trait::async_trait;

/// Upstream text-generation collaborator used by the prompt enhancer.
#[async_trait]
pub trait LanguageModel: Send + Sync {
    async fn complete(&self, request: TextGenerationRequest) -> Result<String>;
}
