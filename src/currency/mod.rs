//! Number presentation and boundary parsing for amounts.

use std::fmt;

use crate::config::Config;

/// Formatting rules derived from the active [`Config`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberFormat {
    pub currency_label: String,
    pub grouping_separator: char,
    pub decimal_separator: char,
    pub percent_precision: u8,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl NumberFormat {
    pub fn from_config(config: &Config) -> Self {
        Self {
            currency_label: config.currency_label.clone(),
            grouping_separator: config.grouping_separator,
            decimal_separator: config.decimal_separator,
            percent_precision: config.percent_precision,
        }
    }

    /// `1,000,000 VND`; negatives keep a leading minus.
    pub fn amount(&self, value: impl WholeNumber) -> String {
        format!("{} {}", self.integer(value), self.currency_label)
    }

    pub fn integer(&self, value: impl WholeNumber) -> String {
        let (negative, magnitude) = value.sign_and_magnitude();
        let grouped = group_digits(&magnitude.to_string(), self.grouping_separator);
        if negative {
            format!("-{grouped}")
        } else {
            grouped
        }
    }

    pub fn percent(&self, value: f64) -> String {
        format!("{}%", self.decimal(value, self.percent_precision))
    }

    /// Months are always shown with one decimal.
    pub fn months(&self, value: f64) -> String {
        format!("{} months", self.decimal(value, 1))
    }

    pub fn decimal(&self, value: f64, precision: u8) -> String {
        let rendered = format!("{:.*}", usize::from(precision), value);
        let (sign, body) = match rendered.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => ("", rendered.as_str()),
        };
        let (whole, fraction) = match body.split_once('.') {
            Some((whole, fraction)) => (whole, Some(fraction)),
            None => (body, None),
        };
        let mut out = format!("{sign}{}", group_digits(whole, self.grouping_separator));
        if let Some(fraction) = fraction {
            out.push(self.decimal_separator);
            out.push_str(fraction);
        }
        out
    }
}

/// Integer types the formatter accepts, split into sign and magnitude so the
/// full `u128` and `i128` ranges render exactly.
pub trait WholeNumber {
    fn sign_and_magnitude(self) -> (bool, u128);
}

macro_rules! unsigned_whole_number {
    ($($ty:ty),*) => {
        $(impl WholeNumber for $ty {
            fn sign_and_magnitude(self) -> (bool, u128) {
                (false, u128::from(self))
            }
        })*
    };
}

macro_rules! signed_whole_number {
    ($($ty:ty),*) => {
        $(impl WholeNumber for $ty {
            fn sign_and_magnitude(self) -> (bool, u128) {
                (self < 0, i128::from(self).unsigned_abs())
            }
        })*
    };
}

unsigned_whole_number!(u8, u16, u32, u64, u128);
signed_whole_number!(i8, i16, i32, i64, i128);

fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx != 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    grouped
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AmountParseError {
    Empty,
    Negative(String),
    NotANumber(String),
    TooLarge(String),
}

impl fmt::Display for AmountParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AmountParseError::Empty => write!(f, "a value is required"),
            AmountParseError::Negative(raw) => write!(f, "`{raw}` must not be negative"),
            AmountParseError::NotANumber(raw) => write!(f, "`{raw}` is not a whole number"),
            AmountParseError::TooLarge(raw) => write!(f, "`{raw}` is too large"),
        }
    }
}

impl std::error::Error for AmountParseError {}

/// Parses a non-negative whole amount. `,` and `_` are accepted as digit
/// grouping (`1,000,000`, `50_000`).
pub fn parse_amount(input: &str) -> Result<u64, AmountParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(AmountParseError::Empty);
    }
    if trimmed.starts_with('-') {
        return Err(AmountParseError::Negative(trimmed.to_string()));
    }
    let digits: String = trimmed
        .chars()
        .filter(|ch| !matches!(ch, ',' | '_'))
        .collect();
    if digits.is_empty() || !digits.chars().all(|ch| ch.is_ascii_digit()) {
        return Err(AmountParseError::NotANumber(trimmed.to_string()));
    }
    digits
        .parse()
        .map_err(|_| AmountParseError::TooLarge(trimmed.to_string()))
}

/// Parses a weekly hour count. Same grammar as [`parse_amount`], limited to `u32`.
pub fn parse_hours(input: &str) -> Result<u32, AmountParseError> {
    let hours = parse_amount(input)?;
    u32::try_from(hours).map_err(|_| AmountParseError::TooLarge(input.trim().to_string()))
}
