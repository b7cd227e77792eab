pub mod fallback;
pub mod keywords;
pub mod parser;
pub mod traits;

use crate::{
    config::EnhancerConfig,
    error::{OrDegrade, PosterError, Result},
    models::{Enhancement, TextGenerationRequest},
};
use std::sync::Arc;

pub use traits::LanguageModel;

pub const SYSTEM_INSTRUCTION: &str = r#"You are a professional poster design expert. Your task is to enhance user's brief poster descriptions into detailed, visually-oriented prompts suitable for AI image generation.

RULES:
1. Transform brief concepts into rich, detailed descriptions
2. Include specific visual elements: colors, typography, composition, style
3. Mention artistic styles, mood, and atmosphere
4. Describe layout, spacing, and visual hierarchy
5. Include specific details about backgrounds, borders, and decorative elements
6. Keep the enhanced prompt under 200 words but make it comprehensive
7. Focus on visual elements that would appear in a poster

EXAMPLE:
User: "jazz concert poster"
Enhanced: "A vintage-inspired jazz concert poster featuring bold Art Deco typography with gold and deep blue color scheme. Include silhouettes of jazz musicians playing saxophone and trumpet, with musical notes flowing dynamically across the composition. The background should have a subtle textured pattern reminiscent of 1920s aesthetic, with elegant borders and sophisticated layout perfect for a classy jazz venue."

After the enhanced prompt, extract 8-10 key visual keywords separated by commas."#;

pub fn user_message(user_prompt: &str) -> String {
    format!("Enhance this poster concept: {}", user_prompt)
}

/// Expands a short poster concept into a detailed description plus keywords.
///
/// Upstream failures never reach the caller: any error from the language
/// model, or a response with no usable prose, is answered by the
/// deterministic [`fallback::fallback`] enhancer, so `success` is always true.
#[derive(Clone)]
pub struct PromptEnhancementService {
    llm: Option<Arc<dyn LanguageModel>>,
    config: EnhancerConfig,
}

impl PromptEnhancementService {
    pub fn new(llm: Arc<dyn LanguageModel>, config: EnhancerConfig) -> Self {
        Self {
            llm: Some(llm),
            config,
        }
    }

    /// A service with no upstream model; every call uses the fallback enhancer.
    pub fn offline() -> Self {
        Self {
            llm: None,
            config: EnhancerConfig::default(),
        }
    }

    pub fn has_upstream(&self) -> bool {
        self.llm.is_some()
    }

    pub async fn enhance(&self, user_prompt: &str, session_id: &str) -> Enhancement {
        log::info!("Enhancing prompt for session {}", session_id);

        self.enhance_upstream(user_prompt)
            .await
            .or_degrade("prompt enhancement", || fallback::fallback(user_prompt))
    }

    async fn enhance_upstream(&self, user_prompt: &str) -> Result<Enhancement> {
        let llm = self
            .llm
            .as_ref()
            .ok_or_else(|| PosterError::Config("no language model configured".into()))?;

        let request = TextGenerationRequest::new(user_message(user_prompt))
            .with_system(SYSTEM_INSTRUCTION)
            .with_model(self.config.model_id.clone())
            .with_max_tokens(self.config.max_tokens)
            .with_temperature(self.config.temperature);

        let response = llm.complete(request).await?;
        let parsed = parser::parse(&response);

        if parsed.enhanced_prompt.trim().is_empty() {
            return Err(PosterError::Response(
                "response contained no enhanced prompt".into(),
            ));
        }

        log::debug!(
            "Upstream enhancement parsed with {} keywords",
            parsed.keywords.len()
        );

        Ok(Enhancement {
            enhanced_prompt: parsed.enhanced_prompt,
            keywords: parsed.keywords,
            success: true,
        })
    }
}
