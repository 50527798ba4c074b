use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::providers::ProviderKey;

// ============================================================================
// Constants
// ============================================================================

const DEFAULT_GATEWAY_BASE: &str = "http://localhost:3030";
const GENERATE_PATH: &str = "/api/generate-image";
const APP_NAME: &str = "imgarena";
const REQUEST_TIMEOUT_SECS: u64 = 120;

// ============================================================================
// API Types - Request
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct GenerateImageRequest {
    pub prompt: String,
    pub provider: ProviderKey,
    #[serde(rename = "modelId")]
    pub model_id: String,
}

// ============================================================================
// API Types - Response
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct GenerateImageResponse {
    /// Base64-encoded image payload.
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub error: Option<ApiError>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiError {
    pub message: String,
    #[serde(default)]
    pub code: Option<u32>,
}

// ============================================================================
// Generation Gateway Client
// ============================================================================

/// Thin client for the generation gateway. The gateway owns provider
/// credentials, retries and timeouts; this side only ships a prompt and gets
/// a base64 image (or an error) back per provider.
#[derive(Clone)]
pub struct GenerationClient {
    client: Client,
    base_url: String,
}

impl PartialEq for GenerationClient {
    fn eq(&self, other: &Self) -> bool {
        self.base_url == other.base_url
    }
}

impl GenerationClient {
    pub fn new(base_url: Option<String>) -> Result<Self, String> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .pool_max_idle_per_host(10) // One in-flight request per provider
            .build()
            .map_err(|e| format!("Failed to build HTTP client: {}", e))?;

        Ok(Self {
            client,
            base_url: base_url.unwrap_or_else(|| DEFAULT_GATEWAY_BASE.to_string()),
        })
    }

    pub async fn generate_image(
        &self,
        provider: ProviderKey,
        model_id: String,
        prompt: String,
    ) -> Result<String, String> {
        let url = format!("{}{}", self.base_url, GENERATE_PATH);
        let request = GenerateImageRequest {
            prompt,
            provider,
            model_id,
        };

        let response = self
            .client
            .post(&url)
            .header("X-Title", APP_NAME)
            .json(&request)
            .send()
            .await
            .map_err(|e| format!("Request failed: {}", e))?;

        let status = response.status();
        let body: GenerateImageResponse = response
            .json()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e))?;

        if let Some(error) = body.error {
            return Err(error.message);
        }
        if !status.is_success() {
            return Err(format!("Request failed with status {}", status));
        }

        body.image
            .ok_or_else(|| "Response contained no image".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_wire_shape() {
        let request = GenerateImageRequest {
            prompt: "a cat".to_string(),
            provider: ProviderKey::Fal,
            model_id: "fal-ai/flux/schnell".to_string(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["prompt"], "a cat");
        assert_eq!(json["provider"], "fal");
        assert_eq!(json["modelId"], "fal-ai/flux/schnell");
    }

    #[test]
    fn test_parse_success_response() {
        let body = r#"{"image":"aGVsbG8="}"#;
        let response: GenerateImageResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.image.as_deref(), Some("aGVsbG8="));
        assert!(response.error.is_none());
    }

    #[test]
    fn test_parse_error_response() {
        let body = r#"{"error":{"message":"model overloaded","code":503}}"#;
        let response: GenerateImageResponse = serde_json::from_str(body).unwrap();
        assert!(response.image.is_none());
        let error = response.error.unwrap();
        assert_eq!(error.message, "model overloaded");
        assert_eq!(error.code, Some(503));
    }
}
