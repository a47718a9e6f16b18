//! Sentence template banks
//!
//! Every language has a fixed bank of candidate sentences per [`Stage`].
//! Templates use three placeholders:
//!
//! - `{name}`: the child's name
//! - `{main}`: the main interest
//! - `{others}`: the other interests, joined with `", "`
//!
//! Rendering is a single pass over the template, so values are inserted
//! verbatim and never scanned for placeholders themselves.

use crate::error::{Result, StoryError};
use crate::types::{Language, Stage};

/// A placeholder slot inside a template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    Name,
    Main,
    Others,
}

impl Placeholder {
    fn from_token(token: &str) -> Option<Self> {
        match token {
            "name" => Some(Self::Name),
            "main" => Some(Self::Main),
            "others" => Some(Self::Others),
            _ => None,
        }
    }
}

/// One piece of a parsed template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'t> {
    /// Literal text
    Text(&'t str),
    /// A known placeholder
    Slot(Placeholder),
    /// A `{...}` sequence that is not a known placeholder (kept literally)
    Unknown(&'t str),
}

/// Split a template into literal text and placeholder slots.
///
/// An opening brace without a closing one is treated as literal text.
pub fn segments(template: &str) -> Vec<Segment<'_>> {
    let mut out = Vec::new();
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        let Some(close) = rest[open..].find('}').map(|i| open + i) else {
            break;
        };
        if open > 0 {
            out.push(Segment::Text(&rest[..open]));
        }
        let token = &rest[open + 1..close];
        match Placeholder::from_token(token) {
            Some(slot) => out.push(Segment::Slot(slot)),
            None => out.push(Segment::Unknown(&rest[open..=close])),
        }
        rest = &rest[close + 1..];
    }

    if !rest.is_empty() {
        out.push(Segment::Text(rest));
    }
    out
}

/// Values substituted into a template
#[derive(Debug, Clone, Copy)]
pub struct Placeholders<'a> {
    pub name: &'a str,
    pub main: &'a str,
    pub others: &'a str,
}

/// Render a template with the given values
pub fn render(template: &str, values: &Placeholders<'_>) -> String {
    let mut out = String::with_capacity(template.len() + values.name.len() + values.main.len());
    for segment in segments(template) {
        match segment {
            Segment::Text(text) | Segment::Unknown(text) => out.push_str(text),
            Segment::Slot(Placeholder::Name) => out.push_str(values.name),
            Segment::Slot(Placeholder::Main) => out.push_str(values.main),
            Segment::Slot(Placeholder::Others) => out.push_str(values.others),
        }
    }
    out
}

/// Candidate sentences for one language, grouped by stage
#[derive(Debug)]
pub struct TemplateBank {
    pub language: Language,
    introduction: &'static [&'static str],
    adventure: &'static [&'static str],
    theme: &'static [&'static str],
    ending: &'static [&'static str],
}

static DUTCH: TemplateBank = TemplateBank {
    language: Language::Dutch,
    introduction: &[
        "Er was eens een kind genaamd {name} die dol was op {main}.",
        "Op een dag ontdekte {name} een magische wereld vol {main}.",
        "{name} keek uit het raam en droomde over {main}.",
    ],
    adventure: &[
        "Samen met een vriendelijke gids begon {name} aan een spannend avontuur.",
        "Onderweg ontmoette {name} bijzondere vrienden die hielpen bij het ontdekken van nieuwe dingen.",
        "Elke stap bracht {name} dichter bij een geheim dat lang verborgen was.",
    ],
    theme: &[
        "In de wereld van {main} waren er {others} wezens die graag wilden spelen.",
        "De lucht was gevuld met {main}, en zelfs de bomen fluisterden verhalen over vriendschap.",
        "{name} leerde dat moed en nieuwsgierigheid belangrijke eigenschappen zijn in het land van {main}.",
    ],
    ending: &[
        "Na een dag vol ontdekkingen keerde {name} terug naar huis, dankbaar voor de nieuwe vrienden en ervaringen.",
        "Toen de sterren straalden, wist {name} dat het volgende avontuur wachtte in de dromen van die nacht.",
        "En ze leefden nog lang en gelukkig, wetende dat de wereld van {main} altijd openstond voor avonturiers.",
    ],
};

static ENGLISH: TemplateBank = TemplateBank {
    language: Language::English,
    introduction: &[
        "Once upon a time there was a child named {name} who loved {main}.",
        "One day, {name} discovered a magical world full of {main}.",
        "{name} looked out the window and dreamed about {main}.",
    ],
    adventure: &[
        "Together with a friendly guide, {name} began an exciting adventure.",
        "Along the way, {name} met unique friends who helped discover new things.",
        "Every step brought {name} closer to a secret long hidden.",
    ],
    theme: &[
        "In the world of {main}, there were {others} creatures that loved to play.",
        "The sky was filled with {main}, and even the trees whispered stories about friendship.",
        "{name} learned that courage and curiosity are important traits in the land of {main}.",
    ],
    ending: &[
        "After a day full of discoveries, {name} returned home, grateful for the new friends and experiences.",
        "As the stars shone, {name} knew the next adventure awaited in the dreams of the night.",
        "And they lived happily ever after, knowing the world of {main} would always be open to adventurers.",
    ],
};

impl TemplateBank {
    /// The bank for a language
    pub fn for_language(language: Language) -> &'static TemplateBank {
        match language {
            Language::Dutch => &DUTCH,
            Language::English => &ENGLISH,
        }
    }

    /// Candidate templates for a stage, in their fixed order
    pub fn templates(&self, stage: Stage) -> &'static [&'static str] {
        match stage {
            Stage::Introduction => self.introduction,
            Stage::Adventure => self.adventure,
            Stage::Theme => self.theme,
            Stage::Ending => self.ending,
        }
    }

    /// Check that every stage has candidates and only known placeholders
    pub fn validate(&self) -> Result<()> {
        for stage in Stage::in_order() {
            let templates = self.templates(stage);
            if templates.is_empty() {
                return Err(StoryError::validation(format!(
                    "{} bank has no {} templates",
                    self.language, stage
                )));
            }
            for template in templates {
                if let Some(Segment::Unknown(token)) = segments(template)
                    .into_iter()
                    .find(|s| matches!(s, Segment::Unknown(_)))
                {
                    return Err(StoryError::validation(format!(
                        "unknown placeholder {} in {} {} template: {}",
                        token, self.language, stage, template
                    )));
                }
            }
        }
        Ok(())
    }
}
