pub mod bedrock;
pub mod config;
pub mod enhance;
pub mod error;
pub mod logger;
pub mod models;
pub mod poster;
pub mod studio;

pub use bedrock::{BedrockClient, TextClient};
pub use config::{BedrockConfig, EnhancerConfig, ImagenConfig, PosterConfig};
pub use enhance::{LanguageModel, PromptEnhancementService};
pub use error::{OrDegrade, PosterError, Result};
pub use models::{
    ChatMessage, EnhancedPrompt, Enhancement, GeneratedPoster, LogoInput, LogoPosition,
    MessageType, ModelProvider, PosterRequest, PosterStyle, RenderResult, TextGenerationRequest,
};
pub use poster::{FontSet, PosterGenerator, PosterRenderer, PosterSynthesisService};
pub use studio::PosterStudio;
