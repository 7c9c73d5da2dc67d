//! Application state definitions

use serde::{Deserialize, Serialize};

use super::VehicleForm;

/// Immutable snapshot of the form, serialized as the request body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRequest {
    pub year: i64,
    pub brand: String,
    pub model: String,
    pub mileage: i64,
    pub cv: i64,
    pub fuel_type: String,
    pub transmission: String,
}

/// Successful response from the prediction endpoint. The echo of the
/// submitted fields is optional: only the price is needed for display.
#[derive(Debug, Clone, Deserialize)]
pub struct PredictionResponse {
    pub predicted_price: f64,
    #[serde(default)]
    pub input_data: Option<PredictionRequest>,
}

/// Outcome of the submission cycle, one variant at a time so a price and an
/// error can never be displayed together
#[derive(Debug, Clone, Default)]
pub enum Submission {
    #[default]
    Idle,
    Submitting,
    Success(PredictionResponse),
    Failure(String),
}

impl Submission {
    /// True while a request is in flight (submission is disabled)
    pub fn in_flight(&self) -> bool {
        matches!(self, Submission::Submitting)
    }

    pub fn price(&self) -> Option<f64> {
        match self {
            Submission::Success(response) => Some(response.predicted_price),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Submission::Failure(message) => Some(message),
            _ => None,
        }
    }
}

/// Main application state
#[derive(Default)]
pub struct AppState {
    pub form: VehicleForm,
    pub submission: Submission,
}

/// Format a predicted price for display: rounded, thousands-grouped, with
/// the dinar suffix (45231 -> "45,231 DT")
pub fn format_price(price: f64) -> String {
    let value = price.round() as i64;
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if value < 0 {
        format!("-{grouped} DT")
    } else {
        format!("{grouped} DT")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_submission_is_idle() {
        let state = AppState::default();
        assert!(matches!(state.submission, Submission::Idle));
        assert!(!state.submission.in_flight());
    }

    #[test]
    fn test_submission_accessors_are_exclusive() {
        let success = Submission::Success(PredictionResponse {
            predicted_price: 45231.0,
            input_data: None,
        });
        assert_eq!(success.price(), Some(45231.0));
        assert!(success.error().is_none());

        let failure = Submission::Failure("prediction service returned HTTP 500".to_string());
        assert!(failure.price().is_none());
        assert!(failure.error().unwrap().contains("500"));
    }

    #[test]
    fn test_format_price_groups_thousands() {
        assert_eq!(format_price(45231.0), "45,231 DT");
        assert_eq!(format_price(950.0), "950 DT");
        assert_eq!(format_price(1_250_000.0), "1,250,000 DT");
        assert_eq!(format_price(0.0), "0 DT");
    }

    #[test]
    fn test_format_price_rounds_fractions() {
        assert_eq!(format_price(45230.6), "45,231 DT");
    }

    #[test]
    fn test_response_tolerates_missing_echo() {
        let response: PredictionResponse =
            serde_json::from_str(r#"{"predicted_price": 12000}"#).unwrap();
        assert_eq!(response.predicted_price, 12000.0);
        assert!(response.input_data.is_none());
    }

    #[test]
    fn test_response_requires_price_field() {
        let result = serde_json::from_str::<PredictionResponse>(r#"{"input_data": null}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_response_parses_full_payload() {
        let payload = r#"{
            "predicted_price": 45231,
            "input_data": {
                "year": 2020, "brand": "Kia", "model": "Rio", "mileage": 85000,
                "cv": 5, "fuel_type": "Essence", "transmission": "Manuelle"
            }
        }"#;
        let response: PredictionResponse = serde_json::from_str(payload).unwrap();
        assert_eq!(response.predicted_price, 45231.0);
        assert_eq!(response.input_data.unwrap().brand, "Kia");
    }
}
