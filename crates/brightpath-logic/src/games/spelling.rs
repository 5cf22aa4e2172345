//! Letter-choice spelling: pick the real letter among its mirror images.

use rand::Rng;

use super::{Feedback, GameMachine, Step};
use crate::catalog::GameKind;
use crate::content::mirror::mirror_options;
use crate::error::GameLogicViolation;

const DEFAULT_WORD: &str = "TOPIC";

/// Uppercase ASCII letters of `word`, or the default word when none remain.
pub fn spelling_letters(word: &str) -> Vec<char> {
    let letters: Vec<char> = word
        .chars()
        .map(|c| c.to_ascii_uppercase())
        .filter(char::is_ascii_uppercase)
        .collect();
    if letters.is_empty() {
        DEFAULT_WORD.chars().collect()
    } else {
        letters
    }
}

#[derive(Debug, Clone)]
pub struct SpellingMachine {
    letters: Vec<char>,
    options: Vec<Vec<String>>,
    index: usize,
    score: u32,
    finished: bool,
}

impl SpellingMachine {
    pub fn new(word: &str, rng: &mut impl Rng) -> Self {
        let letters = spelling_letters(word);
        let options = letters.iter().map(|&c| mirror_options(c, rng)).collect();
        Self {
            letters,
            options,
            index: 0,
            score: 0,
            finished: false,
        }
    }

    pub fn word(&self) -> String {
        self.letters.iter().collect()
    }

    pub fn current_letter(&self) -> Option<char> {
        if self.finished {
            return None;
        }
        self.letters.get(self.index).copied()
    }

    /// Options offered for the current letter.
    pub fn options(&self) -> &[String] {
        if self.finished {
            return &[];
        }
        self.options.get(self.index).map(Vec::as_slice).unwrap_or(&[])
    }

    /// `(letters spelled, word length)`.
    pub fn progress(&self) -> (usize, usize) {
        (self.index, self.letters.len())
    }

    /// Pick an option. A wrong pick changes nothing and may be retried.
    pub fn submit(&mut self, choice: &str) -> Result<Step, GameLogicViolation> {
        let letter = self.current_letter().ok_or(GameLogicViolation::GameOver)?;
        if choice != letter.to_string() {
            return Ok(Step::new(Feedback::Incorrect));
        }

        self.score += 1;
        self.index += 1;
        if self.index == self.letters.len() {
            self.finished = true;
            return Ok(Step::completing(Feedback::Correct, GameKind::Spelling, self.score));
        }
        Ok(Step::new(Feedback::Correct))
    }
}

impl GameMachine for SpellingMachine {
    fn kind(&self) -> GameKind {
        GameKind::Spelling
    }

    fn score(&self) -> u32 {
        self.score
    }

    fn is_finished(&self) -> bool {
        self.finished
    }

    fn abandon(&mut self) {
        self.finished = true;
    }
}
