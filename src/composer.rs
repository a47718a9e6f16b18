//! Story composition
//!
//! Turns a [`StoryRequest`] into a four-sentence [`Story`]: interests are
//! shuffled, the first becomes the main interest, and one template is drawn
//! per stage from the language's [`TemplateBank`].
//!
//! The random source is always passed in, so a seeded or mock RNG makes the
//! output reproducible:
//!
//! ```
//! use bedtime_stories::composer::generate_story;
//! use rand::rngs::mock::StepRng;
//!
//! let mut rng = StepRng::new(0, 0);
//! let story = generate_story("Sam", &["dinosaurs".to_string()], "en", &mut rng);
//! assert_eq!(
//!     story.lines()[0],
//!     "Once upon a time there was a child named Sam who loved dinosaurs."
//! );
//! ```

use std::fmt;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::templates::{render, Placeholders, TemplateBank};
use crate::types::{Language, Stage};

/// Input for one story
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StoryRequest {
    pub child_name: String,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub language: Language,
}

impl StoryRequest {
    /// Build a request from a free-form language code.
    ///
    /// A missing interest list is treated as empty.
    pub fn new(
        child_name: impl Into<String>,
        interests: Option<Vec<String>>,
        language_code: &str,
    ) -> Self {
        Self {
            child_name: child_name.into(),
            interests: interests.unwrap_or_default(),
            language: Language::resolve(language_code),
        }
    }

    /// Compose a story using the given random source
    pub fn compose<R: Rng + ?Sized>(&self, rng: &mut R) -> Story {
        compose(&self.child_name, &self.interests, self.language, rng)
    }

    /// Compose a story using the thread-local RNG
    pub fn compose_with_thread_rng(&self) -> Story {
        self.compose(&mut rand::thread_rng())
    }
}

/// A generated story: one sentence per stage, in stage order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Story {
    pub language: Language,
    pub main_interest: String,
    pub introduction: String,
    pub adventure: String,
    pub theme: String,
    pub ending: String,
}

impl Story {
    /// The sentence for a stage
    pub fn sentence(&self, stage: Stage) -> &str {
        match stage {
            Stage::Introduction => &self.introduction,
            Stage::Adventure => &self.adventure,
            Stage::Theme => &self.theme,
            Stage::Ending => &self.ending,
        }
    }

    /// All four sentences in stage order
    pub fn lines(&self) -> [&str; 4] {
        [
            &self.introduction,
            &self.adventure,
            &self.theme,
            &self.ending,
        ]
    }
}

impl fmt::Display for Story {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lines().join("\n"))
    }
}

/// Generate a story for a child.
///
/// `language_code` is matched by prefix: anything starting with `nl`
/// (case-insensitive) is Dutch, everything else English.
pub fn generate_story<R: Rng + ?Sized>(
    child_name: &str,
    interests: &[String],
    language_code: &str,
    rng: &mut R,
) -> Story {
    compose(child_name, interests, Language::resolve(language_code), rng)
}

fn compose<R: Rng + ?Sized>(
    child_name: &str,
    interests: &[String],
    language: Language,
    rng: &mut R,
) -> Story {
    let mut shuffled = interests.to_vec();
    shuffled.shuffle(rng);

    let (main_interest, others) = match shuffled.split_first() {
        Some((main, rest)) => (main.as_str(), rest),
        None => (language.fallback_interest(), &[][..]),
    };
    let others = if others.is_empty() {
        language.fallback_others().to_string()
    } else {
        others.join(", ")
    };

    debug!(
        language = %language,
        interests = interests.len(),
        main_interest,
        "Composing story"
    );

    let bank = TemplateBank::for_language(language);
    let values = Placeholders {
        name: child_name,
        main: main_interest,
        others: &others,
    };
    let mut pick = |stage: Stage| {
        // Banks are never empty (see TemplateBank::validate)
        let template = bank.templates(stage).choose(&mut *rng).copied().unwrap_or_default();
        render(template, &values)
    };

    let introduction = pick(Stage::Introduction);
    let adventure = pick(Stage::Adventure);
    let theme = pick(Stage::Theme);
    let ending = pick(Stage::Ending);

    Story {
        language,
        main_interest: main_interest.to_string(),
        introduction,
        adventure,
        theme,
        ending,
    }
}
