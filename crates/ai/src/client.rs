use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure at the model boundary. These are advisory-only: callers in this
/// crate collapse them to neutral values instead of surfacing them.
#[derive(Debug, Error)]
pub enum AiError {
    /// No client configured (missing API key, feature switched off by host).
    #[error("model unavailable")]
    Unavailable,

    #[error("transport failure: {0}")]
    Transport(String),

    #[error("invalid model response: {0}")]
    InvalidResponse(String),
}

/// One generation request to the hosted model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub prompt: String,
    /// Base64 image payload for multimodal calls (prescription photos). A
    /// data-URI prefix, if present, is the host's to strip.
    pub image_base64: Option<String>,
    /// Ask the model to reply with JSON only.
    pub json_response: bool,
}

impl GenerateRequest {
    pub fn text(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            image_base64: None,
            json_response: false,
        }
    }

    pub fn json(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            image_base64: None,
            json_response: true,
        }
    }

    pub fn with_image(mut self, image_base64: impl Into<String>) -> Self {
        self.image_base64 = Some(image_base64.into());
        self
    }
}

/// The hosted-model seam. Hosts adapt their HTTP client (Gemini, etc.)
/// behind this trait; tests substitute canned or failing responses.
pub trait ModelClient: Send + Sync {
    fn generate(&self, request: &GenerateRequest) -> Result<String, AiError>;
}
