use super::payment::{mask_card_number, Currency, PaymentStatus};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Wire request for the acquiring bank. Only `services::validation` builds it.
#[derive(Clone, Serialize, PartialEq, Eq)]
pub struct BankPaymentRequest {
    pub(crate) card_number: String,
    pub(crate) expiry_date: String,
    pub(crate) currency: Currency,
    pub(crate) amount: i64,
    pub(crate) cvv: String,
}

impl BankPaymentRequest {
    pub fn card_number(&self) -> &str {
        &self.card_number
    }

    /// `MM/yyyy`
    pub fn expiry_date(&self) -> &str {
        &self.expiry_date
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn amount(&self) -> i64 {
        self.amount
    }

    pub fn cvv(&self) -> &str {
        &self.cvv
    }
}

impl fmt::Debug for BankPaymentRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BankPaymentRequest")
            .field("card_number", &mask_card_number(&self.card_number))
            .field("expiry_date", &self.expiry_date)
            .field("currency", &self.currency)
            .field("amount", &self.amount)
            .field("cvv", &"***")
            .finish()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BankPaymentResponse {
    pub authorized: Option<bool>,
    pub authorization_code: Option<String>,
    #[serde(rename = "errorMessage")]
    pub error_message: Option<String>,
}

impl BankPaymentResponse {
    pub fn payment_status(&self) -> PaymentStatus {
        match self.authorized {
            Some(true) => PaymentStatus::Authorized,
            Some(false) => PaymentStatus::Declined,
            None => PaymentStatus::Rejected,
        }
    }
}
