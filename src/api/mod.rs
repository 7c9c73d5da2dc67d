//! Client module for the prediction service

mod client;
mod traits;

pub use client::{ApiError, PredictionClient};
pub use traits::PredictionApi;

#[cfg(test)]
pub use traits::MockPredictionApi;
