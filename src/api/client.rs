//! HTTP client for the remote price-prediction service
//!
//! The service exposes a single JSON endpoint: POST the vehicle attributes,
//! get back the estimated price (and an echo of the input).

use std::time::Duration;

use anyhow::Result;
use thiserror::Error;

use crate::config::TuiConfig;
use crate::state::{PredictionRequest, PredictionResponse};

/// Default prediction endpoint
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000/predict";

/// Everything that can go wrong with a single prediction request. Messages
/// are shown to the user verbatim in the error panel.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("could not reach the prediction service: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("prediction service returned HTTP {0}")]
    Status(u16),
    #[error("unexpected response from the prediction service: {0}")]
    Malformed(String),
}

/// Client for the prediction endpoint
pub struct PredictionClient {
    http: reqwest::Client,
    endpoint: String,
}

impl PredictionClient {
    /// Create a new client. The endpoint comes from the KARHBA_ENDPOINT env
    /// var, then the config file, then the default. Requests have no timeout
    /// unless one is configured, so a hung backend keeps a submission in
    /// flight indefinitely.
    pub fn new(config: &TuiConfig) -> Result<Self> {
        let endpoint = std::env::var("KARHBA_ENDPOINT")
            .ok()
            .or_else(|| config.endpoint.clone())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            http: builder.build()?,
            endpoint,
        })
    }

    /// The resolved endpoint URL
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub(super) async fn predict_inner(
        &self,
        request: &PredictionRequest,
    ) -> Result<PredictionResponse, ApiError> {
        tracing::debug!(endpoint = %self.endpoint, brand = %request.brand, "sending prediction request");

        let response = self.http.post(&self.endpoint).json(request).send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "prediction request rejected");
            return Err(ApiError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| ApiError::Malformed(e.to_string()))
    }
}
