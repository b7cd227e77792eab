use crate::{
    error::Result,
    models::{LogoInput, LogoPosition, RenderResult},
};
use async_trait::async_trait;

/// A generative image backend that can replace the procedural renderer.
#[async_trait]
pub trait PosterGenerator: Send + Sync {
    async fn generate(
        &self,
        enhanced_prompt: &str,
        logo: Option<&LogoInput>,
        position: Option<LogoPosition>,
    ) -> Result<RenderResult>;
}
