//! Topic content for the guided games, generated or local.
//!
//! The bulk collaborator is asked once per session. Whatever comes back
//! (a body, a network failure, or a body that does not parse) is turned
//! into a [`TopicContent`]; failures fall back to locally generated
//! content so the sequence can always proceed.

use rand::Rng;
use serde::Serialize;

use crate::collaborators::{parse_bulk_response, GeneratedGames};
use crate::config::ContentConfig;
use crate::content::arithmetic;
use crate::content::lexical::LexicalRelationGenerator;
use crate::content::phonetic::{analyze, SyllableAnalysis};
use crate::content::question::{Answer, Difficulty, QuestionRecord};
use crate::error::CollaboratorError;

const DEFAULT_WORD: &str = "TOPIC";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ContentSource {
    Generated,
    Fallback,
}

/// A calculation prompt; generated prompts are free text with no checked answer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Calculation {
    pub prompt: String,
    pub answer: Option<Answer>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopicContent {
    pub topic: String,
    pub source: ContentSource,
    /// Word to spell and trace.
    pub word: String,
    pub prompts: Vec<String>,
    pub questions: Vec<QuestionRecord>,
    pub calculation: Calculation,
    pub syllables: SyllableAnalysis,
}

impl TopicContent {
    fn from_generated(topic: &str, games: GeneratedGames) -> Self {
        let syllables = analyze(&games.word.to_lowercase());
        Self {
            topic: topic.to_string(),
            source: ContentSource::Generated,
            word: games.word,
            prompts: games.prompts,
            questions: games.questions,
            calculation: Calculation {
                prompt: games.calculation,
                answer: None,
            },
            syllables,
        }
    }
}

/// Uppercase letters of the topic, truncated; `TOPIC` when none remain.
pub fn fallback_word(topic: &str, max_len: usize) -> String {
    let word: String = topic
        .chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_uppercase())
        .take(max_len)
        .collect();
    if word.is_empty() {
        DEFAULT_WORD.to_string()
    } else {
        word
    }
}

/// Build content locally from the topic alone.
pub fn fallback_content(topic: &str, config: &ContentConfig, rng: &mut impl Rng) -> TopicContent {
    let word = fallback_word(topic, config.fallback_word_len);

    let mut letters: Vec<char> = Vec::new();
    for c in word.chars() {
        if !letters.contains(&c) {
            letters.push(c);
        }
    }
    let prompts = letters
        .iter()
        .map(|c| format!("Draw the letter {c}"))
        .collect();

    let mut generator = LexicalRelationGenerator::new();
    let questions = (0..config.fallback_quiz_len)
        .map(|_| generator.generate(rng))
        .collect();

    let sum = arithmetic::generate(Difficulty::Medium, rng);

    TopicContent {
        topic: topic.to_string(),
        source: ContentSource::Fallback,
        syllables: analyze(&word.to_lowercase()),
        word,
        prompts,
        questions,
        calculation: Calculation {
            prompt: sum.prompt,
            answer: Some(sum.answer),
        },
    }
}

/// Resolve the collaborator outcome into usable content.
pub fn resolve_topic_content(
    topic: &str,
    outcome: Result<String, CollaboratorError>,
    config: &ContentConfig,
    rng: &mut impl Rng,
) -> TopicContent {
    let body = match outcome {
        Ok(body) => body,
        Err(e) => {
            log::warn!("content request for '{topic}' failed ({e}), using local content");
            return fallback_content(topic, config, rng);
        }
    };
    match parse_bulk_response(&body) {
        Ok(games) => {
            log::debug!("generated content for '{topic}': word {}", games.word);
            TopicContent::from_generated(topic, games)
        }
        Err(e) => {
            log::warn!("unusable content for '{topic}' ({e}), using local content");
            fallback_content(topic, config, rng)
        }
    }
}
