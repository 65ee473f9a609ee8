//! Generation endpoint client
//!
//! [`GenerationClient`] implements the request/response contract:
//!
//! ```text
//! POST {base_url}/api/generate-logo
//! Content-Type: application/json
//!
//! {"prompt": "...", "color": "#rrggbb", "style": "minimalist"}
//!
//! 2xx  {"imageUrl": "..."}   -> Ok(LogoResponse)
//! else                        -> Err(ForgeError::Status)
//! ```

use std::future::Future;
use std::path::Path;

use logoforge_core::{EndpointConfig, ForgeError, ForgeResult, LogoRequest, LogoResponse};
use url::Url;

use crate::data_uri::DataUri;

// ============================================================================
// Generator Trait
// ============================================================================

/// Anything that can turn a form snapshot into an image URL
///
/// The desktop form and the CLI are generic over this so that tests can
/// substitute an in-memory generator.
pub trait LogoGenerator {
    /// Issue one generation request
    fn generate(
        &self,
        request: &LogoRequest,
    ) -> impl Future<Output = ForgeResult<LogoResponse>> + Send;
}

// ============================================================================
// HTTP Client
// ============================================================================

/// reqwest-backed client for the generation endpoint
#[derive(Debug, Clone)]
pub struct GenerationClient {
    http: reqwest::Client,
    base: Url,
    endpoint: Url,
}

impl GenerationClient {
    /// Build a client from endpoint settings
    pub fn new(config: &EndpointConfig) -> ForgeResult<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| ForgeError::internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base: config.base()?,
            endpoint: config.endpoint_url()?,
        })
    }

    /// URL requests are POSTed to
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Resolve an `imageUrl` from the endpoint into something a webview can load.
    ///
    /// Absolute and `data:` URLs pass through untouched; relative ones are
    /// resolved against the configured base URL.
    pub fn display_url(&self, image_url: &str) -> String {
        if DataUri::is_data_uri(image_url) {
            return image_url.to_string();
        }
        match self.base.join(image_url) {
            Ok(url) => url.to_string(),
            Err(_) => image_url.to_string(),
        }
    }

    /// Fetch the bytes behind an `imageUrl`
    pub async fn fetch_image(&self, image_url: &str) -> ForgeResult<Vec<u8>> {
        if DataUri::is_data_uri(image_url) {
            let uri = DataUri::parse(image_url)?;
            if !uri.is_png() {
                tracing::warn!("Inline image is {}, not image/png", uri.mime_type);
            }
            return Ok(uri.bytes);
        }

        let url = self
            .base
            .join(image_url)
            .map_err(|e| ForgeError::invalid_image_url(image_url, e.to_string()))?;

        tracing::debug!("Fetching image from {}", url);

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| ForgeError::Download(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ForgeError::Download(format!("HTTP {}", status.as_u16())));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ForgeError::Download(e.to_string()))?;

        Ok(bytes.to_vec())
    }

    /// Fetch an image and write it to `path`
    pub async fn save_image(&self, image_url: &str, path: &Path) -> ForgeResult<()> {
        let bytes = self.fetch_image(image_url).await?;
        tokio::fs::write(path, &bytes)
            .await
            .map_err(|e| ForgeError::FileWrite {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        tracing::info!("Saved {} bytes to {}", bytes.len(), path.display());
        Ok(())
    }
}

impl LogoGenerator for GenerationClient {
    async fn generate(&self, request: &LogoRequest) -> ForgeResult<LogoResponse> {
        tracing::debug!(
            style = request.style.as_str(),
            color = request.color.as_str(),
            "POST {}",
            self.endpoint
        );

        let response = self
            .http
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await
            .map_err(transport_error)?;

        // Any non-success status is a failure; the body is not inspected.
        let status = response.status();
        if !status.is_success() {
            return Err(ForgeError::Status(status.as_u16()));
        }

        let body = response.bytes().await.map_err(transport_error)?;
        let parsed: LogoResponse =
            serde_json::from_slice(&body).map_err(|e| ForgeError::malformed(e.to_string()))?;

        if parsed.image_url.trim().is_empty() {
            return Err(ForgeError::malformed("imageUrl is empty"));
        }

        Ok(parsed)
    }
}

fn transport_error(err: reqwest::Error) -> ForgeError {
    if err.is_timeout() {
        ForgeError::Timeout
    } else {
        ForgeError::transport(err.to_string())
    }
}

// ============================================================================
// Tests
// ============================================================================
