//! Type-safe story types
//!
//! Languages and narrative stages are proper Rust enums instead of loose
//! strings, so template lookups are exhaustive at compile time.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// Story language
///
/// Parsing through `FromStr` is strict (`"nl"` / `"en"` only). Use
/// [`Language::resolve`] for the lenient prefix match applied to user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
pub enum Language {
    #[default]
    #[strum(serialize = "nl")]
    #[serde(rename = "nl")]
    Dutch,
    #[strum(serialize = "en")]
    #[serde(rename = "en")]
    English,
}

impl Language {
    /// Resolve a free-form language code.
    ///
    /// Any code starting with `nl` (case-insensitive) is Dutch. Everything
    /// else, the empty string and `" nl"` included, is English.
    pub fn resolve(code: &str) -> Self {
        if code.to_lowercase().starts_with("nl") {
            Self::Dutch
        } else {
            Self::English
        }
    }

    /// Main interest used when the child has no interests
    pub fn fallback_interest(&self) -> &'static str {
        match self {
            Self::Dutch => "avonturen",
            Self::English => "adventures",
        }
    }

    /// Word used in place of an empty list of other interests
    pub fn fallback_others(&self) -> &'static str {
        match self {
            Self::Dutch => "magische",
            Self::English => "magical",
        }
    }

    /// Header line printed above a story
    pub fn header(&self) -> &'static str {
        match self {
            Self::Dutch => "--- Verhaaltje ---",
            Self::English => "--- Bedtime story ---",
        }
    }
}

/// Narrative stage of a story
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Introduction,
    Adventure,
    Theme,
    Ending,
}

impl Stage {
    /// All stages in story order
    pub fn in_order() -> impl Iterator<Item = Stage> {
        Self::iter()
    }
}
