use super::{AnalysisResult, AnalysisService, SelectedFile};
use crate::config::Config;
use crate::error::AnalysisError;
use reqwest::multipart::{Form, Part};
use std::time::Duration;
use tracing::debug;

const USER_AGENT: &str = concat!("hairstyle-advisor/", env!("CARGO_PKG_VERSION"));

/// HTTP client for `POST /analyze`.
pub struct AnalysisClient {
    client: reqwest::Client,
    endpoint: String,
}

impl AnalysisClient {
    pub fn new(config: &Config) -> Result<Self, AnalysisError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| AnalysisError::Request(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: format!("{}/analyze", config.service_url.trim_end_matches('/')),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn build_form(file: &SelectedFile) -> Result<Form, AnalysisError> {
        let part = Part::bytes(file.bytes().to_vec())
            .file_name(file.name.clone())
            .mime_str(&file.mime_type)
            .map_err(|e| AnalysisError::Request(format!("invalid MIME type: {}", e)))?;

        Ok(Form::new().part("file", part))
    }
}

impl AnalysisService for AnalysisClient {
    async fn analyze(&self, file: SelectedFile) -> Result<AnalysisResult, AnalysisError> {
        let form = Self::build_form(&file)?;
        debug!(
            file = %file.name,
            size = file.len(),
            endpoint = %self.endpoint,
            "sending photo for analysis"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AnalysisError::Status { status });
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| AnalysisError::MalformedPayload(e.to_string()))
    }
}
