use std::{fmt, str::FromStr};

use thiserror::Error;

/// The language of the canonical content of a location.
pub const BASE_LANGUAGE: &str = "vi";

/// A normalized (trimmed, lowercase) language code, e.g. `en` or `pt-br`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LanguageCode(String);

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Invalid language code: '{0}'")]
pub struct LanguageCodeParseError(String);

impl LanguageCode {
    /// Maximum number of characters of a language code.
    pub const fn max_len() -> usize {
        10
    }

    pub fn base() -> Self {
        Self(BASE_LANGUAGE.to_owned())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for LanguageCode {
    type Err = LanguageCodeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_lowercase();
        let valid = !code.is_empty()
            && code.len() <= Self::max_len()
            && code
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(LanguageCodeParseError(s.to_owned()));
        }
        Ok(Self(code))
    }
}

impl AsRef<str> for LanguageCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<LanguageCode> for String {
    fn from(from: LanguageCode) -> Self {
        from.0
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
