//! Pure predicates over raw JSON input values.
//!
//! Clients send numbers both as JSON numbers and as strings (`"5.5"`), so the
//! numeric checks accept either form and hand back the parsed value.

use serde_json::Value as JsonValue;
use validator::{ValidateEmail, ValidateUrl};

const IDENT_MAX_CHARS: usize = 50;

/// Non-blank text without control characters (newlines and tabs are allowed).
pub fn is_valid_string(s: &str) -> bool {
    !s.trim().is_empty()
        && s
            .chars()
            .all(|c| !c.is_control() || matches!(c, '\n' | '\r' | '\t'))
}

pub fn is_valid_email(s: &str) -> bool {
    s.validate_email()
}

/// Absolute `http`/`https` URL without surrounding whitespace.
pub fn is_valid_url(s: &str) -> bool {
    if s.trim() != s {
        return false;
    }
    let lc = s.to_ascii_lowercase();
    (lc.starts_with("http://") || lc.starts_with("https://")) && s.validate_url()
}

/// Plain reference identifier: 1..=50 chars of `[A-Za-z0-9_.@+-]`.
pub fn is_valid_identifier(s: &str) -> bool {
    let count = s.chars().count();
    count > 0
        && count <= IDENT_MAX_CHARS
        && s
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '@' | '+' | '-'))
}

/// Returns the value when it is a non-negative integer (JSON integer or numeric string).
pub fn as_non_negative_int(v: &JsonValue) -> Option<u64> {
    if let Some(n) = v.as_u64() {
        return Some(n);
    }
    if let Some(s) = v.as_str() {
        return s.trim().parse::<u64>().ok();
    }
    None
}

/// Returns the value when it is a finite, non-negative number (JSON number or numeric string).
pub fn as_non_negative_float(v: &JsonValue) -> Option<f64> {
    let n = as_number(v)?;
    (n.is_finite() && n >= 0.0).then_some(n)
}

/// True for numeric input below zero, used to report negatives separately from malformed input.
pub fn is_negative_number(v: &JsonValue) -> bool {
    as_number(v).map(|n| n < 0.0).unwrap_or(false)
}

/// Boolean-ish flag: JSON bool, `0`/`1`, or `true/false/t/f/1/0` strings.
pub fn as_flag(v: &JsonValue) -> Option<bool> {
    if let Some(b) = v.as_bool() {
        return Some(b);
    }
    if let Some(n) = v.as_u64() {
        return match n {
            0 => Some(false),
            1 => Some(true),
            _ => None,
        };
    }
    if let Some(s) = v.as_str() {
        let lc = s.trim().to_lowercase();
        return match lc.as_str() {
            "true" | "t" | "1" => Some(true),
            "false" | "f" | "0" => Some(false),
            _ => None,
        };
    }
    None
}

fn as_number(v: &JsonValue) -> Option<f64> {
    if let Some(n) = v.as_f64() {
        return Some(n);
    }
    v.as_str().and_then(|s| s.trim().parse::<f64>().ok())
}
