use crate::error::ValidationError;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Raw payment submission from a merchant.
#[derive(Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    #[serde(deserialize_with = "digits")]
    pub card_number: String,
    pub expiry_month: i32,
    pub expiry_year: i32,
    pub currency: String,
    pub amount: i64,
    #[serde(deserialize_with = "digits")]
    pub cvv: String,
}

impl fmt::Debug for PaymentRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaymentRequest")
            .field("card_number", &mask_card_number(&self.card_number))
            .field("expiry_month", &self.expiry_month)
            .field("expiry_year", &self.expiry_year)
            .field("currency", &self.currency)
            .field("amount", &self.amount)
            .field("cvv", &"***")
            .finish()
    }
}

/// Accepts either a JSON string or an integer. Strings keep leading zeros,
/// which matter for CVVs. Negative numbers pass through as text and fail
/// validation rather than deserialization.
fn digits<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Digits {
        Text(String),
        Number(u64),
        Signed(i64),
    }

    Ok(match Digits::deserialize(deserializer)? {
        Digits::Text(s) => s,
        Digits::Number(n) => n.to_string(),
        Digits::Signed(n) => n.to_string(),
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentStatus {
    Authorized,
    Declined,
    Rejected,
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PaymentStatus::Authorized => "Authorized",
            PaymentStatus::Declined => "Declined",
            PaymentStatus::Rejected => "Rejected",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Currency {
    GBP,
    EUR,
    USD,
}

pub const SUPPORTED_CURRENCIES: [Currency; 3] = [Currency::GBP, Currency::EUR, Currency::USD];

impl Currency {
    pub fn code(&self) -> &'static str {
        match self {
            Currency::GBP => "GBP",
            Currency::EUR => "EUR",
            Currency::USD => "USD",
        }
    }
}

impl FromStr for Currency {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SUPPORTED_CURRENCIES
            .into_iter()
            .find(|c| c.code() == s)
            .ok_or_else(|| ValidationError::UnsupportedCurrency(s.to_string()))
    }
}

/// Sanitized view of a submitted payment. Only the last four card digits
/// are kept; the CVV is never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRecord {
    pub id: Uuid,
    pub status: PaymentStatus,
    pub card_number_last_four: String,
    pub expiry_month: i32,
    pub expiry_year: i32,
    pub currency: String,
    pub amount: i64,
}

impl PaymentRecord {
    pub fn new(status: PaymentStatus, request: &PaymentRequest) -> Self {
        Self {
            id: Uuid::new_v4(),
            status,
            card_number_last_four: last_four(&request.card_number),
            expiry_month: request.expiry_month,
            expiry_year: request.expiry_year,
            currency: request.currency.clone(),
            amount: request.amount,
        }
    }

    pub fn rejected(request: &PaymentRequest) -> Self {
        Self::new(PaymentStatus::Rejected, request)
    }
}

pub fn last_four(card_number: &str) -> String {
    let chars: Vec<char> = card_number.chars().collect();
    let start = chars.len().saturating_sub(4);
    chars[start..].iter().collect()
}

pub fn mask_card_number(card_number: &str) -> String {
    let len = card_number.chars().count();
    if len > 4 {
        "*".repeat(len - 4) + &last_four(card_number)
    } else {
        "*".repeat(len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(card_number: &str) -> PaymentRequest {
        PaymentRequest {
            card_number: card_number.to_string(),
            expiry_month: 4,
            expiry_year: 2030,
            currency: "GBP".to_string(),
            amount: 100,
            cvv: "123".to_string(),
        }
    }

    #[test]
    fn record_keeps_only_last_four_digits() {
        let record = PaymentRecord::new(PaymentStatus::Authorized, &request("2222405343248877"));
        assert_eq!(record.card_number_last_four, "8877");

        let json = serde_json::to_string(&record).unwrap();
        assert!(!json.contains("2222405343248877"));
        assert!(!json.contains("cvv"));
    }

    #[test]
    fn last_four_keeps_leading_zeros_and_short_input() {
        assert_eq!(last_four("123456789010012"), "0012");
        assert_eq!(last_four("12"), "12");
    }

    #[test]
    fn debug_output_masks_card_and_cvv() {
        let debug = format!("{:?}", request("2222405343248877"));
        assert!(debug.contains("************8877"));
        assert!(!debug.contains("2222405343248877"));
        assert!(!debug.contains("\"123\""));
    }

    #[test]
    fn accepts_numeric_or_string_card_fields() {
        let from_numbers: PaymentRequest = serde_json::from_value(serde_json::json!({
            "cardNumber": 2222405343248877u64,
            "expiryMonth": 4,
            "expiryYear": 2030,
            "currency": "GBP",
            "amount": 100,
            "cvv": 123
        }))
        .unwrap();
        assert_eq!(from_numbers.card_number, "2222405343248877");
        assert_eq!(from_numbers.cvv, "123");

        let from_strings: PaymentRequest = serde_json::from_value(serde_json::json!({
            "cardNumber": "2222405343248877",
            "expiryMonth": 4,
            "expiryYear": 2030,
            "currency": "GBP",
            "amount": 100,
            "cvv": "012"
        }))
        .unwrap();
        assert_eq!(from_strings.cvv, "012");
    }

    #[test]
    fn negative_numbers_survive_deserialization() {
        let request: PaymentRequest = serde_json::from_value(serde_json::json!({
            "cardNumber": -2222405343248877i64,
            "expiryMonth": -1,
            "expiryYear": 2030,
            "currency": "GBP",
            "amount": -5,
            "cvv": -123
        }))
        .unwrap();
        assert_eq!(request.card_number, "-2222405343248877");
        assert_eq!(request.expiry_month, -1);
        assert_eq!(request.amount, -5);
        assert_eq!(request.cvv, "-123");
    }

    #[test]
    fn record_serializes_camel_case_with_status_name() {
        let record = PaymentRecord::rejected(&request("2222405343248877"));
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["status"], "Rejected");
        assert_eq!(value["cardNumberLastFour"], "8877");
        assert_eq!(value["expiryMonth"], 4);
    }

    #[test]
    fn currency_allow_list_is_case_sensitive() {
        assert_eq!("EUR".parse::<Currency>(), Ok(Currency::EUR));
        assert!("eur".parse::<Currency>().is_err());
        assert_eq!(
            "JPY".parse::<Currency>(),
            Err(ValidationError::UnsupportedCurrency("JPY".to_string()))
        );
    }
}
