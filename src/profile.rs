//! Child profiles saved as JSON files.
//!
//! A profile stores the answers that would otherwise be asked interactively,
//! so the same child can get a new story every night with one command.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::composer::StoryRequest;
use crate::error::StoryError;
use crate::types::Language;

/// A saved child profile
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ChildProfile {
    pub name: String,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub language: Language,
}

impl ChildProfile {
    pub fn new(name: impl Into<String>, interests: Vec<String>, language: Language) -> Self {
        Self {
            name: name.into(),
            interests,
            language,
        }
    }

    /// Save the profile to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json =
            serde_json::to_string_pretty(self).context("Failed to serialize profile to JSON")?;

        fs::write(&path, json)
            .with_context(|| format!("Failed to write profile to {:?}", path.as_ref()))?;

        Ok(())
    }

    /// Load a profile from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read profile from {:?}", path.as_ref()))?;

        let profile: Self =
            serde_json::from_str(&content).context("Failed to parse profile JSON")?;

        Ok(profile)
    }

    /// Validate the profile
    pub fn validate(&self) -> crate::error::Result<()> {
        if self.name.trim().is_empty() {
            return Err(StoryError::validation("Child name must be specified"));
        }
        if self.name.chars().any(char::is_control) {
            return Err(StoryError::validation(
                "Child name cannot contain control characters",
            ));
        }
        if let Some(pos) = self.interests.iter().position(|i| i.trim().is_empty()) {
            return Err(StoryError::validation(format!(
                "Interest #{} is blank",
                pos + 1
            )));
        }
        Ok(())
    }

    /// Turn the profile into a story request
    pub fn to_request(&self) -> StoryRequest {
        StoryRequest {
            child_name: self.name.clone(),
            interests: self.interests.clone(),
            language: self.language,
        }
    }
}

impl From<&StoryRequest> for ChildProfile {
    fn from(request: &StoryRequest) -> Self {
        Self::new(
            request.child_name.clone(),
            request.interests.clone(),
            request.language,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_ok() {
        let profile = ChildProfile::new("Mila", vec!["draken".into()], Language::Dutch);
        assert!(profile.validate().is_ok());
    }

    #[test]
    fn test_validate_blank_name() {
        let profile = ChildProfile::new("  ", vec![], Language::English);
        let err = profile.validate().unwrap_err();
        assert_eq!(err.to_string(), "Validation error: Child name must be specified");
    }

    #[test]
    fn test_validate_control_chars() {
        let profile = ChildProfile::new("Sam\u{1b}[31m", vec![], Language::English);
        assert!(profile.validate().is_err());
    }

    #[test]
    fn test_validate_blank_interest() {
        let profile = ChildProfile::new("Sam", vec!["space".into(), " ".into()], Language::English);
        let err = profile.validate().unwrap_err();
        assert!(err.to_string().contains("#2"));
    }

    #[test]
    fn test_missing_fields_default() {
        let profile: ChildProfile = serde_json::from_str(r#"{"name":"Sam"}"#).unwrap();
        assert!(profile.interests.is_empty());
        assert_eq!(profile.language, Language::Dutch);
    }

    #[test]
    fn test_to_request_and_back() {
        let profile = ChildProfile::new("Sam", vec!["space".into()], Language::English);
        let request = profile.to_request();
        assert_eq!(request.child_name, "Sam");
        assert_eq!(ChildProfile::from(&request), profile);
    }
}
