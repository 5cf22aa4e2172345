//! Syllable slicing: tap a word's fragments strictly left to right.

use super::{Feedback, GameMachine, Step};
use crate::catalog::GameKind;
use crate::content::phonetic::SyllableAnalysis;
use crate::error::GameLogicViolation;

#[derive(Debug, Clone)]
pub struct SyllableSlicerMachine {
    words: Vec<SyllableAnalysis>,
    word: usize,
    sliced: usize,
    score: u32,
    finished: bool,
}

impl SyllableSlicerMachine {
    /// Words with no fragments are dropped.
    pub fn new(words: Vec<SyllableAnalysis>) -> Self {
        let words: Vec<_> = words
            .into_iter()
            .filter(|w| !w.syllables.is_empty())
            .collect();
        Self {
            finished: words.is_empty(),
            words,
            word: 0,
            sliced: 0,
            score: 0,
        }
    }

    pub fn current(&self) -> Option<&SyllableAnalysis> {
        if self.finished {
            None
        } else {
            self.words.get(self.word)
        }
    }

    /// Number of fragments of the current word already tapped.
    pub fn sliced(&self) -> usize {
        self.sliced
    }

    pub fn tap(&mut self, index: usize) -> Result<Step, GameLogicViolation> {
        let fragments = self
            .current()
            .ok_or(GameLogicViolation::GameOver)?
            .syllables
            .len();
        if index >= fragments {
            return Err(GameLogicViolation::UnknownOption(index));
        }
        if index != self.sliced {
            return Err(GameLogicViolation::OutOfOrder {
                expected: self.sliced,
                tapped: index,
            });
        }

        self.sliced += 1;
        if self.sliced < fragments {
            return Ok(Step::new(Feedback::Correct));
        }

        self.score += 1;
        self.sliced = 0;
        self.word += 1;
        if self.word == self.words.len() {
            self.finished = true;
            return Ok(Step::completing(
                Feedback::RoundComplete,
                GameKind::Syllable,
                self.score,
            ));
        }
        Ok(Step::new(Feedback::RoundComplete))
    }
}

impl GameMachine for SyllableSlicerMachine {
    fn kind(&self) -> GameKind {
        GameKind::Syllable
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
