use crate::{
    enhance::LanguageModel,
    error::{PosterError, Result},
    models::{
        AnthropicResponse, LlamaResponse, MistralResponse, ModelProvider, TextGenerationRequest,
        TitanTextResponse,
    },
};
use async_trait::async_trait;
use aws_sdk_bedrockruntime::{error::ProvideErrorMetadata, primitives::Blob, Client};
use serde_json::json;

const DEFAULT_TEXT_MODEL: &str = "anthropic.claude-3-haiku-20240307-v1:0";

#[derive(Clone)]
pub struct TextClient {
    client: Client,
}

impl TextClient {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub async fn generate(&self, request: TextGenerationRequest) -> Result<String> {
        let model_id = request
            .model_id
            .clone()
            .unwrap_or_else(|| DEFAULT_TEXT_MODEL.to_string());
        let provider = resolve_provider(&request, &model_id)?;

        let request_payload = build_request_payload(&request, provider);
        let request_json = serde_json::to_string(&request_payload)
            .map_err(|e| PosterError::Serialization(e.to_string()))?;

        log::info!("Invoking model: {}", model_id);
        log::debug!("Text generation request payload: {}", request_json);

        let response = self
            .client
            .invoke_model()
            .model_id(&model_id)
            .content_type("application/json")
            .accept("application/json")
            .body(Blob::new(request_json.into_bytes()))
            .send()
            .await
            .map_err(|e| {
                log::error!("Bedrock text generation error: {:?}", e);

                if let Some(service_error) = e.as_service_error() {
                    PosterError::AwsService(format!(
                        "{} - {}",
                        service_error.code().unwrap_or("unknown"),
                        service_error.message().unwrap_or("no message")
                    ))
                } else {
                    PosterError::Aws(e.to_string())
                }
            })?;

        let response_bytes = response.body.into_inner();
        let body = String::from_utf8(response_bytes)
            .map_err(|e| PosterError::Response(e.to_string()))?;

        extract_text(&body, provider)
    }
}

#[async_trait]
impl LanguageModel for TextClient {
    async fn complete(&self, request: TextGenerationRequest) -> Result<String> {
        self.generate(request).await
    }
}

fn resolve_provider(request: &TextGenerationRequest, model_id: &str) -> Result<ModelProvider> {
    request
        .provider
        .or_else(|| ModelProvider::from_model_id(model_id))
        .ok_or_else(|| PosterError::Request(format!("Unsupported model ID: {}", model_id)))
}

fn build_request_payload(
    request: &TextGenerationRequest,
    provider: ModelProvider,
) -> serde_json::Value {
    let max_tokens = request.max_tokens.unwrap_or(512);
    let temperature = request.temperature.unwrap_or(0.7);

    // Only the Anthropic messages API has a dedicated system slot.
    let inline_prompt = match &request.system {
        Some(system) => format!("{}\n\n{}", system, request.prompt),
        None => request.prompt.clone(),
    };

    match provider {
        ModelProvider::Anthropic => {
            let mut payload = json!({
                "messages": [
                    {
                        "role": "user",
                        "content": request.prompt
                    }
                ],
                "max_tokens": max_tokens,
                "temperature": temperature,
                "anthropic_version": "bedrock-2023-05-31"
            });
            if let (Some(system), Some(obj)) = (&request.system, payload.as_object_mut()) {
                obj.insert("system".to_string(), json!(system));
            }
            payload
        }
        ModelProvider::Amazon => json!({
            "inputText": inline_prompt,
            "textGenerationConfig": {
                "maxTokenCount": max_tokens,
                "temperature": temperature,
                "topP": 0.9
            }
        }),
        ModelProvider::Meta => json!({
            "prompt": inline_prompt,
            "max_gen_len": max_tokens,
            "temperature": temperature,
            "top_p": 0.9
        }),
        ModelProvider::Mistral => json!({
            "prompt": inline_prompt,
            "max_tokens": max_tokens,
            "temperature": temperature,
            "top_p": 0.9
        }),
    }
}

fn extract_text(body: &str, provider: ModelProvider) -> Result<String> {
    let parse_error = |e: serde_json::Error| PosterError::Response(e.to_string());

    let text = match provider {
        ModelProvider::Anthropic => {
            let response: AnthropicResponse = serde_json::from_str(body).map_err(parse_error)?;
            response
                .content
                .into_iter()
                .filter(|block| block.kind == "text")
                .map(|block| block.text)
                .collect::<Vec<_>>()
                .join("")
        }
        ModelProvider::Amazon => {
            let response: TitanTextResponse = serde_json::from_str(body).map_err(parse_error)?;
            response
                .results
                .into_iter()
                .next()
                .map(|r| r.output_text)
                .unwrap_or_default()
        }
        ModelProvider::Meta => {
            let response: LlamaResponse = serde_json::from_str(body).map_err(parse_error)?;
            response.generation
        }
        ModelProvider::Mistral => {
            let response: MistralResponse = serde_json::from_str(body).map_err(parse_error)?;
            response
                .outputs
                .into_iter()
                .next()
                .map(|o| o.text)
                .unwrap_or_default()
        }
    };

    if text.trim().is_empty() {
        return Err(PosterError::Response("Model returned no text".into()));
    }

    Ok(text)
}
