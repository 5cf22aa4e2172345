//! Question records shared by every quiz-style game.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Difficulty tier of generated content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];
}

/// Canonical answer of a question.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Answer {
    Integer(i64),
    /// A one-decimal value stored in tenths (`37` is 3.7).
    Tenths(i64),
    /// Exact text, e.g. an unreduced fraction "3/10" or a word.
    Text(String),
}

impl Answer {
    /// Whether a typed or picked response matches this answer.
    ///
    /// Numeric answers compare by value so "12.0" accepts 12; text answers
    /// compare exactly after trimming.
    pub fn accepts(&self, input: &str) -> bool {
        let input = input.trim();
        match self {
            Answer::Integer(value) => input
                .parse::<f64>()
                .map(|parsed| parsed == *value as f64)
                .unwrap_or(false),
            Answer::Tenths(tenths) => input
                .parse::<f64>()
                .map(|parsed| (parsed * 10.0 - *tenths as f64).abs() < 1e-6)
                .unwrap_or(false),
            Answer::Text(text) => input == text,
        }
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::Integer(value) => write!(f, "{value}"),
            Answer::Tenths(tenths) => {
                let sign = if *tenths < 0 { "-" } else { "" };
                write!(f, "{sign}{}.{}", tenths.abs() / 10, tenths.abs() % 10)
            }
            Answer::Text(text) => f.write_str(text),
        }
    }
}

/// A single question: prompt, canonical answer and (for multiple choice)
/// an option set that contains the answer exactly once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionRecord {
    pub prompt: String,
    pub answer: Answer,
    /// Empty for typed-answer questions.
    pub options: Vec<String>,
    pub difficulty: Option<Difficulty>,
}

impl QuestionRecord {
    pub fn typed(prompt: impl Into<String>, answer: Answer, difficulty: Difficulty) -> Self {
        Self {
            prompt: prompt.into(),
            answer,
            options: Vec::new(),
            difficulty: Some(difficulty),
        }
    }

    pub fn multiple_choice(
        prompt: impl Into<String>,
        answer: impl Into<String>,
        options: Vec<String>,
    ) -> Self {
        Self {
            prompt: prompt.into(),
            answer: Answer::Text(answer.into()),
            options,
            difficulty: None,
        }
    }

    pub fn is_multiple_choice(&self) -> bool {
        !self.options.is_empty()
    }

    /// Position of the canonical answer in the option set.
    pub fn answer_index(&self) -> Option<usize> {
        let answer = self.answer.to_string();
        self.options.iter().position(|option| *option == answer)
    }

    /// Check the option-set invariant: answer present, no duplicates.
    pub fn options_are_valid(&self) -> bool {
        if self.options.is_empty() {
            return true;
        }
        let unique = self
            .options
            .iter()
            .collect::<std::collections::HashSet<_>>()
            .len();
        unique == self.options.len() && self.answer_index().is_some()
    }
}
