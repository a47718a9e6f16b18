//! bedtime-stories library
//!
//! Composes short personalised bedtime stories from fixed sentence templates,
//! in Dutch or English.

pub mod cli;
pub mod composer;
pub mod error;
pub mod input;
pub mod output;
pub mod profile;
pub mod templates;
pub mod types;

// Re-export main types for convenience
pub use composer::{generate_story, Story, StoryRequest};
pub use error::{Result, StoryError};
pub use input::{
    parse_interests, read_request_interactively, request_from_args, resolve_language_answer,
};
pub use profile::ChildProfile;
pub use templates::TemplateBank;
pub use types::{Language, Stage};
