//! # Validation Utilities
//!
//! Pure helpers the roster depends on: grade bands, email/password shape checks,
//! canonical id formatting and unique id generation. Nothing here touches the
//! filesystem or holds state; randomness is always supplied by the caller.

use crate::error::{Result, RosterError};
use crate::model::Grade;
use once_cell::sync::Lazy;
use rand::Rng;
use regex::Regex;
use std::collections::HashSet;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z]+\.[a-z]+@university\.com$").expect("valid email regex"));

static PASSWORD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z][a-zA-Z]{5,}[0-9]{3,}$").expect("valid password regex"));

/// Random draws attempted before falling back to scanning the free id space.
const MAX_RANDOM_DRAWS: usize = 64;

/// Maps a mark (or an overall average) onto its letter grade.
///
/// HD = 85+, D = 75-84, C = 65-74, P = 50-64, Z = below 50.
pub fn classify_grade(mark: f64) -> Grade {
    if mark >= 85.0 {
        Grade::HighDistinction
    } else if mark >= 75.0 {
        Grade::Distinction
    } else if mark >= 65.0 {
        Grade::Credit
    } else if mark >= 50.0 {
        Grade::Pass
    } else {
        Grade::Fail
    }
}

/// `firstname.lastname@university.com`, letters only, case-insensitive.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(&email.to_lowercase())
}

/// One uppercase letter, five or more further letters, then three or more digits.
/// Example: `HelloWorld1234`.
pub fn is_valid_password(password: &str) -> bool {
    PASSWORD_RE.is_match(password)
}

/// Zero-pads `value` to `width` digits.
pub fn format_id(value: u32, width: usize) -> String {
    format!("{:0width$}", value, width = width)
}

/// Canonicalizes a raw numeric identifier (`"7"`, `"007"`, `" 7 "`) into its
/// fixed-width form. Fails on anything that is not a number fitting `width` digits.
pub fn canonical_id(raw: &str, width: usize) -> Result<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return Err(RosterError::InvalidId(raw.to_string()));
    }
    let value: u64 = trimmed
        .parse()
        .map_err(|_| RosterError::InvalidId(raw.to_string()))?;
    if value >= 10u64.pow(width as u32) {
        return Err(RosterError::InvalidId(raw.to_string()));
    }
    Ok(format!("{:0width$}", value, width = width))
}

/// Draws a random id in `[1, max_value]`, zero-padded to `width`, that is not in `used`.
///
/// Rejection sampling is bounded; once it keeps colliding the free ids are
/// enumerated and one of them is picked uniformly. Returns
/// [`RosterError::IdSpaceExhausted`] when every id is taken.
pub fn generate_unique_id<R: Rng + ?Sized>(
    rng: &mut R,
    width: usize,
    max_value: u32,
    used: &HashSet<String>,
) -> Result<String> {
    for _ in 0..MAX_RANDOM_DRAWS {
        let candidate = format_id(rng.gen_range(1..=max_value), width);
        if !used.contains(&candidate) {
            return Ok(candidate);
        }
    }

    tracing::debug!(
        width,
        used = used.len(),
        "random id draws kept colliding, scanning free ids"
    );
    let free: Vec<u32> = (1..=max_value)
        .filter(|n| !used.contains(&format_id(*n, width)))
        .collect();
    if free.is_empty() {
        return Err(RosterError::IdSpaceExhausted {
            width,
            max: max_value,
        });
    }
    Ok(format_id(free[rng.gen_range(0..free.len())], width))
}
