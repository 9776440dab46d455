//! HTTP client for the diagnosis backend.
//!
//! Two endpoints: multipart image upload for analysis, and a JSON
//! chatbot query by disease name. Failures are split into transport,
//! HTTP-status, and payload-shape errors so callers can phrase them
//! distinctly to the user.

use std::path::Path;
use std::time::Duration;

use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

use crate::core::config::Config;
use crate::core::model::AnalysisResult;

/// Fallback when an error body carries no `detail` field.
const UNKNOWN_ERROR_DETAIL: &str = "An unknown error occurred.";

/// Request failures, by where they happened.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Connect, timeout, or body I/O failure before an HTTP status.
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),
    /// Non-2xx response; `detail` echoes the server's message when the
    /// body carried one.
    #[error("{detail}")]
    Status { status: StatusCode, detail: String },
    /// 2xx response whose body does not match the expected shape.
    #[error("received an invalid response from the server: {0}")]
    InvalidPayload(String),
    /// The local image file could not be read.
    #[error("could not read image: {0}")]
    Image(#[from] std::io::Error),
    /// The request was cancelled by the user.
    #[error("request cancelled")]
    Cancelled,
}

pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client bound to the configured endpoint and timeout.
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(ApiError::Transport)?;
        Ok(Self {
            http,
            base_url: config.base_url.clone(),
        })
    }

    /// Upload a leaf image and return the backend's analysis.
    pub async fn analyze_image(&self, path: &Path) -> Result<AnalysisResult, ApiError> {
        let bytes = std::fs::read(path)?;
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("upload")
            .to_string();
        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name(file_name)
            .mime_str(image_mime(path))
            .map_err(ApiError::Transport)?;
        let form = reqwest::multipart::Form::new().part("file", part);

        let response = self
            .http
            .post(format!("{}/analyze_disease_from_image", self.base_url))
            .multipart(form)
            .send()
            .await
            .map_err(ApiError::Transport)?;
        let body = success_body(response).await?;
        serde_json::from_value(body).map_err(|e| ApiError::InvalidPayload(e.to_string()))
    }

    /// Ask the chatbot about a disease by name. A 2xx body with a
    /// missing or empty `chatbot_message` is an invalid response.
    pub async fn disease_info(&self, disease_name: &str) -> Result<String, ApiError> {
        let response = self
            .http
            .post(format!("{}/chatbot_disease_info", self.base_url))
            .json(&serde_json::json!({ "disease_name": disease_name }))
            .send()
            .await
            .map_err(ApiError::Transport)?;
        let body = success_body(response).await?;
        match body.get("chatbot_message").and_then(Value::as_str) {
            Some(msg) if !msg.is_empty() => Ok(msg.to_string()),
            _ => Err(ApiError::InvalidPayload(
                "missing chatbot_message".to_string(),
            )),
        }
    }
}

/// Parse a 2xx body as JSON; turn any other status into `ApiError::Status`
/// with the server-provided detail when present.
async fn success_body(response: reqwest::Response) -> Result<Value, ApiError> {
    let status = response.status();
    if status.is_success() {
        return response
            .json()
            .await
            .map_err(|e| ApiError::InvalidPayload(e.to_string()));
    }
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::Status {
        status,
        detail: error_detail(status, &body),
    })
}

/// Extract the `detail` field from an error body, falling back to a
/// generic message carrying the HTTP status.
fn error_detail(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("detail").and_then(Value::as_str).map(str::to_string))
        .unwrap_or_else(|| format!("{} (HTTP {})", UNKNOWN_ERROR_DETAIL, status.as_u16()))
}

/// MIME type from the file extension. The backend accepts PNG and JPEG;
/// anything else is sent as JPEG and left for the server to reject.
fn image_mime(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .as_deref()
    {
        Some("png") => "image/png",
        _ => "image/jpeg",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_detail_echoes_server_message() {
        let detail = error_detail(
            StatusCode::UNPROCESSABLE_ENTITY,
            r#"{"detail":"Unsupported file type."}"#,
        );
        assert_eq!(detail, "Unsupported file type.");
    }

    #[test]
    fn error_detail_falls_back_on_missing_field() {
        let detail = error_detail(StatusCode::INTERNAL_SERVER_ERROR, r#"{"message":"nope"}"#);
        assert!(detail.contains("An unknown error occurred."));
        assert!(detail.contains("500"));
    }

    #[test]
    fn error_detail_falls_back_on_non_json_body() {
        let detail = error_detail(StatusCode::BAD_GATEWAY, "<html>Bad Gateway</html>");
        assert!(detail.contains("502"));
    }

    #[test]
    fn image_mime_from_extension() {
        assert_eq!(image_mime(Path::new("leaf.PNG")), "image/png");
        assert_eq!(image_mime(Path::new("leaf.jpg")), "image/jpeg");
        assert_eq!(image_mime(Path::new("leaf.jpeg")), "image/jpeg");
        assert_eq!(image_mime(Path::new("leaf")), "image/jpeg");
    }
}
