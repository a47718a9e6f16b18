//! User input handling
//!
//! Parsing of the comma-separated interest list and the language answer, and
//! the line-based interactive prompt flow used when no arguments are given.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::composer::StoryRequest;
use crate::error::Result;
use crate::types::Language;

pub const NAME_PROMPT: &str = "Naam van het kind: ";
pub const INTERESTS_PROMPT: &str = "Interesses (gescheiden door komma's): ";
pub const LANGUAGE_PROMPT: &str = "Taal (nl/en): ";

/// Split a comma-separated list, trimming each entry and dropping empty ones
pub fn parse_interests(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Resolve a language answer; a blank answer means Dutch
pub fn resolve_language_answer(answer: &str) -> Language {
    if answer.trim().is_empty() {
        Language::default()
    } else {
        Language::resolve(answer)
    }
}

/// Build a request from command-line values, applying the same rules as the prompts
pub fn request_from_args(
    name: &str,
    interests: Option<&str>,
    language: Option<&str>,
) -> StoryRequest {
    StoryRequest {
        child_name: name.trim().to_string(),
        interests: interests.map(parse_interests).unwrap_or_default(),
        language: resolve_language_answer(language.unwrap_or_default()),
    }
}

/// Print a question and read one line of answer.
///
/// The trailing newline is stripped. End of input yields an empty answer.
pub fn prompt<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    question: &str,
) -> Result<String> {
    write!(writer, "{}", question)?;
    writer.flush()?;

    let mut line = String::new();
    reader.read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// Ask for name, interests and language, in that order
pub fn read_request_interactively<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
) -> Result<StoryRequest> {
    let name = prompt(reader, writer, NAME_PROMPT)?;
    let interests = prompt(reader, writer, INTERESTS_PROMPT)?;
    let language = prompt(reader, writer, LANGUAGE_PROMPT)?;

    let request = StoryRequest {
        child_name: name.trim().to_string(),
        interests: parse_interests(&interests),
        language: resolve_language_answer(&language),
    };
    debug!(
        interests = request.interests.len(),
        language = %request.language,
        "Read story request from prompts"
    );
    Ok(request)
}
