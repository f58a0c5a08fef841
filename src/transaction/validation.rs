//! Business validation for incoming transfer records
//!
//! All rules are evaluated independently; every failing rule is reported in
//! one aggregate error rather than stopping at the first violation.

use rust_decimal::Decimal;

use super::models::NewTransaction;

/// ISO-4217 subset accepted for the `currency` field
pub const SUPPORTED_CURRENCIES: [&str; 21] = [
    "USD", "EUR", "GBP", "JPY", "CAD", "AUD", "CHF", "CNY", "SEK", "NZD", "MXN", "SGD", "HKD",
    "NOK", "TRY", "RUB", "INR", "BRL", "ZAR", "KRW", "KES",
];

/// Largest accepted amount: 99,999,999.99
/// (mantissa 9_999_999_999 split into 32-bit words, scale 2)
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(1_410_065_407, 2, 0, false, 2);

const MAX_PARTY_LEN: usize = 255;

/// Aggregate validation failure carrying every violated rule
#[derive(Debug, thiserror::Error, PartialEq)]
#[error("validation failed: {}", .violations.join("; "))]
pub struct ValidationError {
    pub violations: Vec<String>,
}

/// Validate a candidate transfer record.
///
/// Checks only the client-supplied fields; `id`, `status` and `created_at`
/// are server-assigned and never validated here.
pub fn validate_transaction(candidate: &NewTransaction) -> Result<(), ValidationError> {
    let mut violations = Vec::new();

    if candidate.amount <= Decimal::ZERO {
        violations.push("amount must be greater than 0".to_string());
    }
    if candidate.amount > MAX_AMOUNT {
        violations.push("amount must be less than 100,000,000".to_string());
    }

    if candidate.currency.is_empty() {
        violations.push("currency is required".to_string());
    } else if !is_supported_currency(&candidate.currency) {
        violations
            .push("currency must be a valid 3-letter ISO code (e.g., USD, EUR, GBP)".to_string());
    }

    if candidate.sender.is_empty() {
        violations.push("sender is required".to_string());
    } else if candidate.sender.len() > MAX_PARTY_LEN {
        violations.push("sender must be 255 characters or less".to_string());
    }

    if candidate.receiver.is_empty() {
        violations.push("receiver is required".to_string());
    } else if candidate.receiver.len() > MAX_PARTY_LEN {
        violations.push("receiver must be 255 characters or less".to_string());
    }

    if candidate.sender == candidate.receiver {
        violations.push("sender and receiver must be different".to_string());
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(ValidationError { violations })
    }
}

/// Case-insensitive membership in the allow-list; anything but a 3-letter
/// code is rejected regardless of list membership.
fn is_supported_currency(currency: &str) -> bool {
    if currency.len() != 3 {
        return false;
    }
    let upper = currency.to_ascii_uppercase();
    SUPPORTED_CURRENCIES.contains(&upper.as_str())
}
