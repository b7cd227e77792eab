use crate::{
    bedrock::BedrockClient,
    config::PosterConfig,
    enhance::PromptEnhancementService,
    error::{PosterError, Result},
    models::{ChatMessage, EnhancedPrompt, GeneratedPoster, MessageType, PosterRequest, RenderResult},
    poster::{PosterRenderer, PosterSynthesisService},
};
use std::sync::Arc;
use uuid::Uuid;

/// Wires prompt enhancement and poster synthesis together and produces the
/// records a persistence layer would store.
#[derive(Clone)]
pub struct PosterStudio {
    enhancer: PromptEnhancementService,
    synthesizer: PosterSynthesisService,
}

impl PosterStudio {
    pub fn new(enhancer: PromptEnhancementService, synthesizer: PosterSynthesisService) -> Self {
        Self {
            enhancer,
            synthesizer,
        }
    }

    /// Uses Bedrock for enhancement when AWS credentials are present,
    /// otherwise runs fully offline.
    pub async fn from_config(config: PosterConfig) -> Result<Self> {
        let enhancer = if config.bedrock.has_credentials() {
            let client = BedrockClient::new(config.bedrock.clone()).await?;
            PromptEnhancementService::new(Arc::new(client.text().clone()), config.enhancer.clone())
        } else {
            log::warn!("No AWS credentials configured, prompt enhancement runs offline");
            PromptEnhancementService::offline()
        };

        let synthesizer =
            PosterSynthesisService::new(PosterRenderer::with_system_fonts(), config.imagen);

        Ok(Self::new(enhancer, synthesizer))
    }

    pub fn enhancer(&self) -> &PromptEnhancementService {
        &self.enhancer
    }

    pub fn synthesizer(&self) -> &PosterSynthesisService {
        &self.synthesizer
    }

    /// Enhances a concept and returns the stored record plus the two chat
    /// messages (user, ai) describing the exchange.
    pub async fn enhance_prompt(
        &self,
        user_prompt: &str,
        session_id: Option<&str>,
    ) -> Result<(EnhancedPrompt, Vec<ChatMessage>)> {
        if user_prompt.trim().is_empty() {
            return Err(PosterError::Validation("user_prompt is required".into()));
        }

        let session_id = session_id
            .map(String::from)
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        let enhancement = self.enhancer.enhance(user_prompt, &session_id).await;
        let record = EnhancedPrompt::new(user_prompt, enhancement, session_id.clone());

        let messages = vec![
            ChatMessage::new(&session_id, MessageType::User, user_prompt),
            ChatMessage::new(&session_id, MessageType::Ai, &record.enhanced_prompt)
                .with_keywords(record.keywords.clone()),
        ];

        Ok((record, messages))
    }

    pub async fn generate_poster(&self, request: PosterRequest) -> Result<GeneratedPoster> {
        self.generate_poster_with_result(request)
            .await
            .map(|(poster, _)| poster)
    }

    /// Same as [`generate_poster`](Self::generate_poster) but also hands back
    /// the render result, whose `success` flag tells a real poster from the
    /// static placeholder.
    pub async fn generate_poster_with_result(
        &self,
        request: PosterRequest,
    ) -> Result<(GeneratedPoster, RenderResult)> {
        if request.enhanced_prompt.trim().is_empty() {
            return Err(PosterError::Validation("enhanced_prompt is required".into()));
        }
        if request.session_id.trim().is_empty() {
            return Err(PosterError::Validation("session_id is required".into()));
        }

        let result = self
            .synthesizer
            .synthesize(
                &request.enhanced_prompt,
                request.logo.as_ref(),
                request.logo_position,
            )
            .await;

        if !result.success {
            log::warn!(
                "Serving placeholder poster for session {}",
                request.session_id
            );
        }

        let poster = GeneratedPoster::from_render(request, result.clone());
        log::info!(
            "Poster {} generated ({}, {})",
            poster.id,
            poster.style,
            poster.dimensions
        );

        Ok((poster, result))
    }
}
