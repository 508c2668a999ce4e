//! Turns a merchant's `PaymentRequest` into the acquiring bank's wire format.
//!
//! Checks run in a fixed order and stop at the first failure: card number,
//! expiry, currency, CVV.

use crate::{
    error::ValidationError,
    models::{BankPaymentRequest, Currency, PaymentRequest},
};
use chrono::{DateTime, NaiveDate, Utc};

const CARD_NUMBER_LENGTH: std::ops::RangeInclusive<usize> = 14..=19;
const CVV_LENGTH: std::ops::RangeInclusive<usize> = 3..=5;

pub fn normalize(
    request: &PaymentRequest,
    now: DateTime<Utc>,
) -> Result<BankPaymentRequest, ValidationError> {
    validate_card_number(&request.card_number)?;

    let expiry_date = format!("{:02}/{}", request.expiry_month, request.expiry_year);
    validate_expiry(&expiry_date, now)?;

    let currency: Currency = request.currency.parse()?;

    validate_cvv(&request.cvv)?;

    Ok(BankPaymentRequest {
        card_number: request.card_number.clone(),
        expiry_date,
        currency,
        amount: request.amount,
        cvv: request.cvv.clone(),
    })
}

fn is_numeric(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn validate_card_number(card_number: &str) -> Result<(), ValidationError> {
    if !is_numeric(card_number) {
        return Err(ValidationError::CardNumberNotNumeric);
    }
    if !CARD_NUMBER_LENGTH.contains(&card_number.len()) {
        return Err(ValidationError::CardNumberLength(card_number.len()));
    }
    Ok(())
}

fn validate_cvv(cvv: &str) -> Result<(), ValidationError> {
    if !is_numeric(cvv) {
        return Err(ValidationError::CvvNotNumeric);
    }
    if !CVV_LENGTH.contains(&cvv.len()) {
        return Err(ValidationError::CvvLength(cvv.len()));
    }
    Ok(())
}

/// Parses `MM/yyyy` into the first day of that month.
pub fn parse_expiry(expiry_date: &str) -> Option<NaiveDate> {
    let (month, year) = expiry_date.split_once('/')?;
    if month.len() != 2 || year.len() != 4 || !is_numeric(month) || !is_numeric(year) {
        return None;
    }
    NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, 1)
}

fn validate_expiry(expiry_date: &str, now: DateTime<Utc>) -> Result<(), ValidationError> {
    let expires = parse_expiry(expiry_date)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .ok_or_else(|| ValidationError::InvalidExpiry(expiry_date.to_string()))?;

    if expires.and_utc() <= now {
        return Err(ValidationError::ExpiryNotInFuture(expiry_date.to_string()));
    }
    Ok(())
}
