use crate::error::SdkError;
use dotenv::dotenv;
use std::env;

pub const DEFAULT_BASE_URL: &str = "https://apieris.squareweb.app/v2";

/// Per-client configuration. The token and base URL are immutable once the
/// client is constructed.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub token: String,
    pub base_url: String,
    /// When enabled, failed requests surface the raw transport error instead
    /// of a classified [`crate::SdkError::Api`].
    pub debug: bool,
}

impl ClientConfig {
    pub fn new(token: impl Into<String>) -> Self {
        ClientConfig {
            token: token.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            debug: false,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Reads `STX_API_TOKEN`, `STX_API_BASE_URL` and `STX_SDK_DEBUG` from
    /// the environment (a `.env` file is honored).
    pub fn from_env() -> Result<Self, SdkError> {
        dotenv().ok();

        let token = env::var("STX_API_TOKEN")
            .map_err(|_| SdkError::invalid_request("STX_API_TOKEN is not set"))?;

        Ok(ClientConfig {
            token,
            base_url: env::var("STX_API_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            debug: env::var("STX_SDK_DEBUG")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
        })
    }
}
