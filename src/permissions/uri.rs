//! URI handling
//!
//! Parses the locators callers pass to permission queries. Only `file` URIs and
//! bare absolute paths are interpreted; other schemes are kept opaque.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::UriError;

pub const FILE_SCHEME: &str = "file";

/// A parsed locator: lowercase scheme plus the scheme-specific remainder.
///
/// For `file` URIs the remainder is the percent-decoded absolute path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Uri {
    scheme: String,
    rest: String,
}

impl Uri {
    pub fn parse(raw: &str) -> Result<Self, UriError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(UriError::Empty);
        }

        if raw.starts_with('/') {
            return Ok(Self::from_path(raw));
        }

        let (scheme, rest) = raw
            .split_once(':')
            .ok_or_else(|| UriError::MissingScheme(raw.to_string()))?;

        if !is_valid_scheme(scheme) {
            return Err(UriError::InvalidScheme(scheme.to_string()));
        }
        let scheme = scheme.to_ascii_lowercase();

        if scheme != FILE_SCHEME {
            return Ok(Self {
                scheme,
                rest: rest.to_string(),
            });
        }

        // file://host/path or file:/path
        let path = match rest.strip_prefix("//") {
            Some(after) => {
                let split = after.find('/').unwrap_or(after.len());
                let (host, path) = after.split_at(split);
                if !host.is_empty() && !host.eq_ignore_ascii_case("localhost") {
                    return Err(UriError::UnsupportedHost(host.to_string()));
                }
                path
            }
            None => rest,
        };
        let path = path.split(['?', '#']).next().unwrap_or("");

        Ok(Self {
            scheme,
            rest: percent_decode(path).ok_or_else(|| UriError::MalformedEscape(raw.to_string()))?,
        })
    }

    /// Wraps a local path as a `file` URI without any decoding.
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        Self {
            scheme: FILE_SCHEME.to_string(),
            rest: path.as_ref().to_string_lossy().into_owned(),
        }
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    pub fn is_file(&self) -> bool {
        self.scheme == FILE_SCHEME
    }

    /// Local path for `file` URIs, `None` for every other scheme.
    pub fn file_path(&self) -> Option<PathBuf> {
        self.is_file().then(|| PathBuf::from(&self.rest))
    }
}

impl FromStr for Uri {
    type Err = UriError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uri::parse(s)
    }
}

impl fmt::Display for Uri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_file() {
            write!(f, "file://{}", self.rest)
        } else {
            write!(f, "{}:{}", self.scheme, self.rest)
        }
    }
}

fn is_valid_scheme(scheme: &str) -> bool {
    let mut chars = scheme.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {
            chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        }
        _ => false,
    }
}

fn percent_decode(input: &str) -> Option<String> {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let hex = input.get(i + 1..i + 3)?;
            out.push(u8::from_str_radix(hex, 16).ok()?);
            i += 3;
        } else {
            out.push(bytes[i]);
            i += 1;
        }
    }
    String::from_utf8(out).ok()
}
