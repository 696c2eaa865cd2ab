//! Input validation helpers shared by the API layer

use once_cell::sync::Lazy;
use regex::Regex;

/// Digits with optional leading `+` and common separators
static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9\s\-().]+$").expect("phone pattern is valid"));

/// Minimum and maximum digit counts for a phone number (E.164 allows 15)
pub const PHONE_MIN_DIGITS: usize = 7;
pub const PHONE_MAX_DIGITS: usize = 15;

/// Remove formatting characters, keeping a leading `+`
pub fn normalize_phone_number(phone: &str) -> String {
    let trimmed = phone.trim();
    let mut normalized = String::with_capacity(trimmed.len());
    if trimmed.starts_with('+') {
        normalized.push('+');
    }
    normalized.extend(trimmed.chars().filter(|c| c.is_ascii_digit()));
    normalized
}

/// Check that a phone number is plausible for contact purposes
pub fn is_valid_phone(phone: &str) -> bool {
    let trimmed = phone.trim();
    if !PHONE_PATTERN.is_match(trimmed) {
        return false;
    }
    let digits = trimmed.chars().filter(|c| c.is_ascii_digit()).count();
    (PHONE_MIN_DIGITS..=PHONE_MAX_DIGITS).contains(&digits)
}
