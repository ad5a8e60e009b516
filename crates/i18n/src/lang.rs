//! Locale and text direction
//!
//! [`Locale`] wraps a parsed BCP 47 language identifier. [`TextDirection`]
//! is derived from the language subtag, so `fa-IR` lays out right-to-left.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use unic_langid::LanguageIdentifier;

/// Locale the application is built for
pub const DEFAULT_LOCALE: &str = "fa-IR";

/// Languages written right-to-left
const RTL_LANGUAGES: &[&str] = &["fa", "ar", "he", "ur", "ps", "ckb", "sd", "yi"];

/// Errors that can occur when parsing a locale
#[derive(Debug, thiserror::Error)]
pub enum LocaleError {
    /// The identifier is not valid BCP 47
    #[error("Invalid locale identifier: {0}")]
    InvalidIdentifier(String),
}

/// Result type for locale operations
pub type Result<T> = std::result::Result<T, LocaleError>;

// =============================================================================
// Text Direction
// =============================================================================

/// Horizontal writing direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextDirection {
    /// Left to right
    Ltr,
    /// Right to left
    #[default]
    Rtl,
}

impl TextDirection {
    /// Short name as used by layout engines ("ltr" / "rtl")
    pub fn as_str(&self) -> &'static str {
        match self {
            TextDirection::Ltr => "ltr",
            TextDirection::Rtl => "rtl",
        }
    }

    /// Whether this is right-to-left
    pub fn is_rtl(&self) -> bool {
        matches!(self, TextDirection::Rtl)
    }
}

impl fmt::Display for TextDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Locale
// =============================================================================

/// A parsed locale identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locale {
    id: LanguageIdentifier,
}

impl Locale {
    /// Parse a locale identifier such as `fa-IR`
    ///
    /// Underscores are accepted as separators (`fa_IR`).
    pub fn parse(s: &str) -> Result<Self> {
        let normalized = s.trim().replace('_', "-");
        if normalized.is_empty() {
            return Err(LocaleError::InvalidIdentifier(s.to_string()));
        }
        let id: LanguageIdentifier = normalized
            .parse()
            .map_err(|_| LocaleError::InvalidIdentifier(s.to_string()))?;
        Ok(Self { id })
    }

    /// The Persian (Iran) locale
    pub fn persian() -> Self {
        Self {
            id: unic_langid::langid!("fa-IR"),
        }
    }

    /// Language subtag (e.g. `fa`)
    pub fn language(&self) -> &str {
        self.id.language.as_str()
    }

    /// Region subtag, if any (e.g. `IR`)
    pub fn region(&self) -> Option<&str> {
        self.id.region.as_ref().map(|r| r.as_str())
    }

    /// Writing direction implied by the language
    pub fn direction(&self) -> TextDirection {
        if RTL_LANGUAGES.contains(&self.language()) {
            TextDirection::Rtl
        } else {
            TextDirection::Ltr
        }
    }

    /// Underlying language identifier
    pub fn langid(&self) -> &LanguageIdentifier {
        &self.id
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::persian()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

impl FromStr for Locale {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Serialize for Locale {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Locale {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Locale::parse(&s).map_err(serde::de::Error::custom)
    }
}
