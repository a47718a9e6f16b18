//! Text and JSON rendering of stories and template banks for the terminal.

use crate::composer::Story;
use crate::error::Result;
use crate::templates::TemplateBank;
use crate::types::Stage;

/// Render stories as text: a header line, a blank line, then the story.
///
/// Multiple stories are separated by a blank line.
pub fn format_text(stories: &[Story]) -> String {
    stories
        .iter()
        .map(|story| format!("{}\n\n{}\n", story.language.header(), story))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render stories as pretty JSON; a single story is an object, more are an array
pub fn format_json(stories: &[Story]) -> Result<String> {
    let json = match stories {
        [story] => serde_json::to_string_pretty(story)?,
        _ => serde_json::to_string_pretty(stories)?,
    };
    Ok(json)
}

/// List the templates of a bank, optionally for a single stage
pub fn format_templates(bank: &TemplateBank, stage: Option<Stage>) -> String {
    let stages: Vec<Stage> = match stage {
        Some(stage) => vec![stage],
        None => Stage::in_order().collect(),
    };

    let mut out = String::new();
    for stage in stages {
        out.push_str(&format!("[{}] {}\n", bank.language, stage));
        for (i, template) in bank.templates(stage).iter().enumerate() {
            out.push_str(&format!("  {}. {}\n", i + 1, template));
        }
    }
    out
}
