//! HTTP adapter for the model inference backend.
//!
//! The pretrained model runs in a separate inference process; this client
//! forwards the enhanced prompt plus sampling parameters as JSON and
//! receives raw f32 samples back.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use music_core::{BackendError, GenerationParams, MusicBackend, SAMPLE_RATE};

#[derive(Serialize)]
struct BackendGenerateRequest<'a> {
    prompt: &'a str,
    #[serde(flatten)]
    params: &'a GenerationParams,
}

#[derive(Deserialize)]
struct BackendGenerateResponse {
    samples: Vec<f32>,
    sample_rate: u32,
}

#[derive(Debug, Clone)]
pub struct HttpBackendConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl HttpBackendConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_secs: 120,
        }
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

pub struct HttpBackend {
    client: Client,
    config: HttpBackendConfig,
}

impl HttpBackend {
    pub fn new(config: HttpBackendConfig) -> Result<Self, BackendError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| BackendError::Request(e.to_string()))?;

        Ok(Self { client, config })
    }

    fn generate_url(&self) -> String {
        format!("{}/generate", self.config.base_url.trim_end_matches('/'))
    }

    fn health_url(&self) -> String {
        format!("{}/health", self.config.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl MusicBackend for HttpBackend {
    async fn generate(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<Vec<f32>, BackendError> {
        debug!(url = %self.generate_url(), prompt_len = prompt.len(), "sending generate request");

        let response = self
            .client
            .post(self.generate_url())
            .json(&BackendGenerateRequest { prompt, params })
            .send()
            .await
            .map_err(|e| BackendError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(BackendError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let body: BackendGenerateResponse = response
            .json()
            .await
            .map_err(|e| BackendError::Malformed(e.to_string()))?;

        if body.sample_rate != SAMPLE_RATE {
            // Resampling is out of scope; surface the mismatch instead of
            // writing a WAV header that lies about the rate.
            warn!(
                got = body.sample_rate,
                expected = SAMPLE_RATE,
                "backend sample rate mismatch"
            );
            return Err(BackendError::Malformed(format!(
                "expected sample rate {SAMPLE_RATE}, got {}",
                body.sample_rate
            )));
        }

        Ok(body.samples)
    }

    async fn health_check(&self) -> bool {
        match self.client.get(self.health_url()).send().await {
            Ok(resp) => resp.status().is_success(),
            Err(e) => {
                warn!("backend health check failed: {e}");
                false
            }
        }
    }
}
