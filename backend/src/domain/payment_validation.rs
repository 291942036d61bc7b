//! Payment form validation for the statement of accounts.
//!
//! Turns raw form text into a checked amount and a canonical channel name. The
//! errors here never leave the backend as errors; the statement service turns
//! them into a failed `PaymentResult` carrying the error's message.

use rust_decimal::Decimal;
use shared::PaymentConfig;
use std::str::FromStr;

/// Reasons a payment submission is rejected before touching the ledger
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PaymentValidationError {
    #[error("Please enter an amount")]
    EmptyAmount,
    #[error("Please enter a valid amount (like 500 or 500.00): {0}")]
    InvalidAmountFormat(String),
    #[error("Amount must be greater than 0")]
    AmountNotPositive,
    #[error("Amount is too small. Minimum is {0}")]
    AmountTooSmall(String),
    #[error("Amount is too large. Maximum is {0}")]
    AmountTooLarge(String),
    #[error("Amount has too many decimal places. Use at most 2 decimal places.")]
    AmountPrecisionTooHigh,
    #[error("Please choose a payment channel")]
    EmptyChannel,
    #[error("Payment channel \"{0}\" is not supported")]
    UnsupportedChannel(String),
}

/// Validates payment form input against a `PaymentConfig`
#[derive(Clone)]
pub struct PaymentValidationService {
    config: PaymentConfig,
}

impl PaymentValidationService {
    pub fn new() -> Self {
        Self {
            config: PaymentConfig::default(),
        }
    }

    pub fn with_config(config: PaymentConfig) -> Self {
        Self { config }
    }

    /// Clean and parse amount input string.
    ///
    /// Accepts an optional minus sign, at most one leading currency symbol, and
    /// digits with commas only as thousands separators, e.g. `₱1,234.56`.
    pub fn clean_and_parse_amount(&self, amount_input: &str) -> Result<Decimal, String> {
        let mut text = amount_input.trim();
        let mut negative = false;

        if let Some(rest) = text.strip_prefix('-') {
            negative = true;
            text = rest.trim_start();
        }
        let symbol = self.config.currency_symbol.trim();
        if !symbol.is_empty() {
            if let Some(rest) = text.strip_prefix(symbol) {
                text = rest.trim_start();
            }
        }
        if !negative {
            if let Some(rest) = text.strip_prefix('-') {
                negative = true;
                text = rest;
            }
        }

        if text.is_empty() {
            return Err("Empty amount after cleaning".to_string());
        }

        let (whole, fraction) = match text.split_once('.') {
            Some((whole, fraction)) => (whole, Some(fraction)),
            None => (text, None),
        };
        let digits = strip_thousands_separators(whole)
            .ok_or_else(|| format!("Invalid number format: {:?}", amount_input.trim()))?;
        if let Some(fraction) = fraction {
            if fraction.is_empty() || !fraction.bytes().all(|b| b.is_ascii_digit()) {
                return Err(format!("Invalid number format: {:?}", amount_input.trim()));
            }
        }

        let mut cleaned = String::with_capacity(text.len() + 1);
        if negative {
            cleaned.push('-');
        }
        cleaned.push_str(&digits);
        if let Some(fraction) = fraction {
            cleaned.push('.');
            cleaned.push_str(fraction);
        }

        Decimal::from_str(&cleaned).map_err(|e| format!("Invalid number format: {}", e))
    }

    /// Parse and range-check a payment amount
    pub fn validate_amount(&self, amount_input: &str) -> Result<Decimal, PaymentValidationError> {
        if amount_input.trim().is_empty() {
            return Err(PaymentValidationError::EmptyAmount);
        }

        let amount = self
            .clean_and_parse_amount(amount_input)
            .map_err(PaymentValidationError::InvalidAmountFormat)?;

        if amount <= Decimal::ZERO {
            Err(PaymentValidationError::AmountNotPositive)
        } else if amount < self.config.min_amount {
            Err(PaymentValidationError::AmountTooSmall(self.format_amount(self.config.min_amount)))
        } else if amount > self.config.max_amount {
            Err(PaymentValidationError::AmountTooLarge(self.format_amount(self.config.max_amount)))
        } else if amount.normalize().scale() > 2 {
            Err(PaymentValidationError::AmountPrecisionTooHigh)
        } else {
            Ok(amount)
        }
    }

    /// Match the channel against the supported list (case-insensitive) and
    /// return its configured spelling
    pub fn validate_channel(&self, channel: &str) -> Result<String, PaymentValidationError> {
        let trimmed = channel.trim();
        if trimmed.is_empty() {
            return Err(PaymentValidationError::EmptyChannel);
        }

        self.config
            .supported_channels
            .iter()
            .find(|c| c.eq_ignore_ascii_case(trimmed))
            .cloned()
            .ok_or_else(|| PaymentValidationError::UnsupportedChannel(trimmed.to_string()))
    }

    /// Format amount for display
    pub fn format_amount(&self, amount: Decimal) -> String {
        format!("{}{:.2}", self.config.currency_symbol, amount)
    }

    pub fn get_config(&self) -> &PaymentConfig {
        &self.config
    }
}

/// Digits of the whole part with thousands separators removed. Without commas
/// every character must be a digit; with commas the first group holds one to
/// three digits and every later group exactly three.
fn strip_thousands_separators(whole: &str) -> Option<String> {
    let is_digits = |group: &str| !group.is_empty() && group.bytes().all(|b| b.is_ascii_digit());

    if !whole.contains(',') {
        return is_digits(whole).then(|| whole.to_string());
    }

    let mut groups = whole.split(',');
    let first = groups.next()?;
    if !is_digits(first) || first.len() > 3 {
        return None;
    }
    let mut digits = first.to_string();
    for group in groups {
        if group.len() != 3 || !is_digits(group) {
            return None;
        }
        digits.push_str(group);
    }
    Some(digits)
}

impl Default for PaymentValidationService {
    fn default() -> Self {
        Self::new()
    }
}
