use std::env;

pub const DEFAULT_ENHANCER_MODEL: &str = "anthropic.claude-3-haiku-20240307-v1:0";
const PLACEHOLDER_KEY: &str = "placeholder-key";

#[derive(Debug, Clone, Default)]
pub struct BedrockConfig {
    pub region: Option<String>,
    pub access_key: Option<String>,
    pub secret_key: Option<String>,
}

impl BedrockConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let region = env::var("AWS_REGION")
            .or_else(|_| env::var("AWS_DEFAULT_REGION"))
            .ok();
        let access_key = env::var("AWS_ACCESS_KEY_ID").ok();
        let secret_key = env::var("AWS_SECRET_ACCESS_KEY").ok();

        BedrockConfig {
            region,
            access_key,
            secret_key,
        }
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    pub fn with_credentials(
        mut self,
        access_key: impl Into<String>,
        secret_key: impl Into<String>,
    ) -> Self {
        self.access_key = Some(access_key.into());
        self.secret_key = Some(secret_key.into());
        self
    }

    pub fn has_credentials(&self) -> bool {
        matches!(
            (&self.access_key, &self.secret_key),
            (Some(a), Some(s)) if !a.is_empty() && !s.is_empty()
        )
    }
}

/// Settings for the upstream call made by the prompt enhancer.
#[derive(Debug, Clone)]
pub struct EnhancerConfig {
    pub model_id: String,
    pub max_tokens: i32,
    pub temperature: f32,
}

impl Default for EnhancerConfig {
    fn default() -> Self {
        EnhancerConfig {
            model_id: DEFAULT_ENHANCER_MODEL.to_string(),
            max_tokens: 300,
            temperature: 0.7,
        }
    }
}

impl EnhancerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let defaults = Self::default();
        let model_id = env::var("ENHANCER_MODEL_ID").unwrap_or(defaults.model_id);
        let max_tokens = env::var("ENHANCER_MAX_TOKENS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.max_tokens);

        EnhancerConfig {
            model_id,
            max_tokens,
            ..defaults
        }
    }

    pub fn with_model(mut self, model_id: impl Into<String>) -> Self {
        self.model_id = model_id.into();
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: i32) -> Self {
        self.max_tokens = max_tokens;
        self
    }
}

#[derive(Debug, Clone)]
pub struct ImagenConfig {
    pub service_account_key: Option<String>,
    pub project_id: Option<String>,
    pub region: String,
}

impl Default for ImagenConfig {
    fn default() -> Self {
        ImagenConfig {
            service_account_key: None,
            project_id: None,
            region: "us-central1".to_string(),
        }
    }
}

impl ImagenConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        ImagenConfig {
            service_account_key: env::var("GOOGLE_CLOUD_SERVICE_ACCOUNT_KEY").ok(),
            project_id: env::var("GOOGLE_CLOUD_PROJECT_ID").ok(),
            ..Self::default()
        }
    }

    pub fn with_credentials(
        mut self,
        service_account_key: impl Into<String>,
        project_id: impl Into<String>,
    ) -> Self {
        self.service_account_key = Some(service_account_key.into());
        self.project_id = Some(project_id.into());
        self
    }

    /// Whether a real image-generation backend may be used instead of the
    /// procedural renderer.
    pub fn has_credentials(&self) -> bool {
        match &self.service_account_key {
            Some(key) => !key.is_empty() && key != PLACEHOLDER_KEY,
            None => false,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct PosterConfig {
    pub bedrock: BedrockConfig,
    pub enhancer: EnhancerConfig,
    pub imagen: ImagenConfig,
}

impl PosterConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        PosterConfig {
            bedrock: BedrockConfig::from_env(),
            enhancer: EnhancerConfig::from_env(),
            imagen: ImagenConfig::from_env(),
        }
    }

    pub fn with_bedrock(mut self, config: BedrockConfig) -> Self {
        self.bedrock = config;
        self
    }

    pub fn with_enhancer(mut self, config: EnhancerConfig) -> Self {
        self.enhancer = config;
        self
    }

    pub fn with_imagen(mut self, config: ImagenConfig) -> Self {
        self.imagen = config;
        self
    }
}
