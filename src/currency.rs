use std::str::FromStr;

use crate::error::BidError;

/// Fallback amount for text that does not parse.
pub const FALLBACK_AMOUNT: f64 = 0.0;

/// Strip every `strip_char` from `text` and parse the rest as a decimal number.
///
/// # Examples
/// ```
/// use bid_sort::currency::parse_currency;
/// assert_eq!(parse_currency("$75.50", '$').unwrap(), 75.5);
/// assert!(parse_currency("N/A", '$').is_err());
/// ```
pub fn parse_currency(text: &str, strip_char: char) -> Result<f64, BidError> {
    let stripped: String = text.chars()
        .filter(|c| *c != strip_char)
        .collect();
    let amount = f64::from_str(stripped.trim())
        .map_err(|_| BidError::Parse { text: text.to_string() })?;
    if amount.is_finite() {
        Ok(amount)
    } else {
        Err(BidError::Parse { text: text.to_string() })
    }
}

/// Same as [parse_currency] but downgrades a failure to [FALLBACK_AMOUNT] with a warning.
pub fn parse_currency_or_default(text: &str, strip_char: char) -> f64 {
    parse_currency(text, strip_char).unwrap_or_else(|e| {
        log::warn!("{}, using {}", e, FALLBACK_AMOUNT);
        FALLBACK_AMOUNT
    })
}
