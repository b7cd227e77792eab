use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelProvider {
    Amazon,
    Anthropic,
    Meta,
    Mistral,
}

impl ModelProvider {
    /// Infers the provider family from a Bedrock model id.
    pub fn from_model_id(model_id: &str) -> Option<Self> {
        match model_id {
            id if id.starts_with("amazon.titan") => Some(ModelProvider::Amazon),
            id if id.starts_with("anthropic.claude") => Some(ModelProvider::Anthropic),
            id if id.starts_with("meta.llama") => Some(ModelProvider::Meta),
            id if id.starts_with("mistral.") => Some(ModelProvider::Mistral),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TextGenerationRequest {
    pub system: Option<String>,
    pub prompt: String,
    pub max_tokens: Option<i32>,
    pub temperature: Option<f32>,
    pub model_id: Option<String>,
    pub provider: Option<ModelProvider>,
}

impl TextGenerationRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            system: None,
            prompt: prompt.into(),
            max_tokens: None,
            temperature: None,
            model_id: None,
            provider: None,
        }
    }

    pub fn with_system(mut self, system: impl Into<String>) -> Self {
        self.system = Some(system.into());
        self
    }

    pub fn with_model(mut self, model_id: impl Into<String>) -> Self {
        self.model_id = Some(model_id.into());
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: i32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }
}

#[derive(Serialize, Deserialize)]
pub struct AnthropicResponse {
    pub content: Vec<AnthropicContent>,
    pub stop_reason: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct AnthropicContent {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub text: String,
}

#[derive(Serialize, Deserialize)]
pub struct TitanTextResponse {
    pub results: Vec<TitanTextResult>,
}

#[derive(Serialize, Deserialize)]
pub struct TitanTextResult {
    #[serde(rename = "outputText")]
    pub output_text: String,
    #[serde(rename = "completionReason")]
    pub completion_reason: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct LlamaResponse {
    pub generation: String,
    pub stop_reason: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct MistralResponse {
    pub outputs: Vec<MistralOutput>,
}

#[derive(Serialize, Deserialize)]
pub struct MistralOutput {
    pub text: String,
    pub stop_reason: Option<String>,
}
