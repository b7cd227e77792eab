pub mod text_client;

use crate::{config::BedrockConfig, error::Result};
use aws_config::BehaviorVersion;
use aws_sdk_bedrockruntime::Client;

pub use text_client::TextClient;

/// Entry point for the Bedrock runtime; only text generation is used here.
#[derive(Clone)]
pub struct BedrockClient {
    text_client: TextClient,
}

impl BedrockClient {
    pub async fn new(bedrock_config: BedrockConfig) -> Result<Self> {
        let region = bedrock_config
            .region
            .clone()
            .unwrap_or_else(|| "us-east-1".to_string());

        let aws_config = if let (Some(access_key), Some(secret_key)) =
            (&bedrock_config.access_key, &bedrock_config.secret_key)
        {
            aws_config::defaults(BehaviorVersion::latest())
                .credentials_provider(aws_sdk_bedrockruntime::config::Credentials::new(
                    access_key,
                    secret_key,
                    None,
                    None,
                    "posterforge",
                ))
                .region(aws_sdk_bedrockruntime::config::Region::new(region))
                .load()
                .await
        } else {
            aws_config::defaults(BehaviorVersion::latest())
                .region(aws_sdk_bedrockruntime::config::Region::new(region))
                .load()
                .await
        };

        let client = Client::new(&aws_config);
        log::debug!("Bedrock runtime client ready");

        Ok(Self {
            text_client: TextClient::new(client),
        })
    }

    pub fn text(&self) -> &TextClient {
        &self.text_client
    }
}
