//! User input checks. Bad input is rejected with a message, never coerced.

use crate::error::{McProError, McProResult};

/// Parse a money amount. Accepts `,` as the decimal separator ("1250,50").
pub fn parse_amount(input: &str) -> McProResult<f64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(McProError::InvalidInput("amount is empty".into()));
    }

    let amount: f64 = trimmed
        .replace(',', ".")
        .parse()
        .map_err(|_| McProError::InvalidInput(format!("'{trimmed}' is not a number")))?;

    check_amount(amount)
}

/// Reject amounts that are negative, NaN or infinite.
pub fn check_amount(amount: f64) -> McProResult<f64> {
    if !amount.is_finite() {
        return Err(McProError::InvalidInput(format!("{amount} is not a valid amount")));
    }
    if amount < 0.0 {
        return Err(McProError::InvalidInput(format!("amount {amount} is negative")));
    }
    Ok(amount)
}

/// Trimmed, non-empty text for a required field.
pub fn require_text(field: &str, value: &str) -> McProResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(McProError::InvalidInput(format!("{field} is required")));
    }
    Ok(trimmed.to_string())
}

/// Optional text: blank becomes `None`.
pub fn optional_text(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(String::from)
}
