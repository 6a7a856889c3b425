//! Query-string models for the image endpoints
//!
//! Every field is optional at the extractor level so that a missing
//! parameter is reported by the handler rather than rejected by axum.

use serde::Deserialize;

use crate::error::{ProxyError, Result};

/// Edge length used when `/head` is called without `size`
pub const DEFAULT_HEAD_SIZE: u32 = 64;

/// Largest edge length `/head` will render
pub const MAX_HEAD_SIZE: u32 = 1024;

/// Query for `GET /skin` and `GET /cape`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TextureQuery {
    #[serde(default)]
    pub username: Option<String>,
}

impl TextureQuery {
    /// Returns the username, rejecting absent or empty values.
    pub fn username(&self) -> Result<&str> {
        require_username(self.username.as_deref())
    }
}

/// Query for `GET /head`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HeadQuery {
    #[serde(default)]
    pub username: Option<String>,
    /// Kept as text so a non-numeric value can be reported as such
    #[serde(default)]
    pub size: Option<String>,
}

impl HeadQuery {
    pub fn username(&self) -> Result<&str> {
        require_username(self.username.as_deref())
    }

    /// Parses the requested edge length.
    ///
    /// Absent or blank means [`DEFAULT_HEAD_SIZE`]. Otherwise the leading
    /// integer is used and any trailing text ignored, so `12px` is 12 and
    /// `64.5` is 64. A value with no leading digits, or one outside
    /// `1..=MAX_HEAD_SIZE`, is rejected.
    pub fn size(&self) -> Result<u32> {
        let raw = match self.size.as_deref().map(str::trim) {
            None | Some("") => return Ok(DEFAULT_HEAD_SIZE),
            Some(raw) => raw,
        };

        match leading_integer(raw).and_then(|size| u32::try_from(size).ok()) {
            Some(size) if (1..=MAX_HEAD_SIZE).contains(&size) => Ok(size),
            _ => Err(ProxyError::InvalidParameter("size")),
        }
    }
}

/// Reads an optionally signed integer from the start of `raw`.
///
/// A `0x`/`0X` prefix switches to hexadecimal. Returns `None` when no digit
/// follows the sign and prefix. Magnitudes saturate instead of overflowing.
fn leading_integer(raw: &str) -> Option<i64> {
    let (negative, rest) = match raw.as_bytes().first() {
        Some(b'-') => (true, &raw[1..]),
        Some(b'+') => (false, &raw[1..]),
        _ => (false, raw),
    };

    let (radix, digits) = match rest.get(..2) {
        Some("0x") | Some("0X") => (16, &rest[2..]),
        _ => (10, rest),
    };

    let end = digits
        .find(|c: char| !c.is_digit(radix))
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let magnitude = digits[..end]
        .chars()
        .filter_map(|c| c.to_digit(radix))
        .fold(0i64, |acc, digit| {
            acc.saturating_mul(i64::from(radix))
                .saturating_add(i64::from(digit))
        });

    Some(if negative { -magnitude } else { magnitude })
}

fn require_username(username: Option<&str>) -> Result<&str> {
    match username {
        Some(name) if !name.is_empty() => Ok(name),
        _ => Err(ProxyError::MissingParameter("username")),
    }
}
