use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Reasons a payment request is refused before it reaches the bank.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Card number must contain only numeric characters")]
    CardNumberNotNumeric,

    #[error("Card number must be between 14 and 19 digits, got {0}")]
    CardNumberLength(usize),

    #[error("Invalid expiry date {0}, expected MM/yyyy")]
    InvalidExpiry(String),

    #[error("The card's expiry date {0} must be in the future")]
    ExpiryNotInFuture(String),

    #[error("Currency {0} is not supported, supported currencies: GBP, EUR, USD")]
    UnsupportedCurrency(String),

    #[error("CVV must contain only numeric characters")]
    CvvNotNumeric,

    #[error("CVV must be between 3 and 5 digits, got {0}")]
    CvvLength(usize),
}

#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Banking service unreachable: {0}")]
    BankUnavailable(#[from] reqwest::Error),

    #[error("Payment not found: {0}")]
    PaymentNotFound(String),
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
    pub error_code: String,
    pub timestamp: chrono::DateTime<Utc>,
    pub request_id: String,
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        match &self {
            // Merchants get a bare text body when the bank cannot be reached.
            GatewayError::BankUnavailable(err) => {
                tracing::error!(error = %err, "Banking service unreachable");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "Banking service unreachable",
                )
                    .into_response()
            }
            GatewayError::PaymentNotFound(id) => {
                tracing::debug!(payment_id = %id, "Payment not found");
                let body = ErrorResponse {
                    success: false,
                    error: self.to_string(),
                    error_code: "PAYMENT_NOT_FOUND".to_string(),
                    timestamp: Utc::now(),
                    request_id: Uuid::new_v4().to_string(),
                };
                (StatusCode::NOT_FOUND, Json(body)).into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        let response = GatewayError::PaymentNotFound("abc".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn validation_messages_name_the_field() {
        assert!(ValidationError::CardNumberLength(12)
            .to_string()
            .contains("between 14 and 19"));
        assert!(ValidationError::UnsupportedCurrency("JPY".into())
            .to_string()
            .contains("JPY"));
    }
}
