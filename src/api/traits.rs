//! Trait abstraction for the prediction client to enable mocking in tests

use async_trait::async_trait;

use super::client::{ApiError, PredictionClient};
use crate::state::{PredictionRequest, PredictionResponse};

/// Trait for the prediction service, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PredictionApi: Send + Sync {
    /// Submit a vehicle snapshot and resolve to a price or an error
    async fn predict(&self, request: &PredictionRequest)
        -> Result<PredictionResponse, ApiError>;
}

#[async_trait]
impl PredictionApi for PredictionClient {
    async fn predict(
        &self,
        request: &PredictionRequest,
    ) -> Result<PredictionResponse, ApiError> {
        self.predict_inner(request).await
    }
}
