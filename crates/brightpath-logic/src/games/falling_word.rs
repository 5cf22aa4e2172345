//! Falling-word catch over rhyme rounds.
//!
//! Each round drops one rhyme and several wrong words down a lane. Words
//! fall a little on every tick and wrap to the top when they pass the
//! bottom. Catching the rhyme scores `1 + combo`, bumps the combo and
//! starts the next round. Catching a wrong word resets the combo and
//! disables that word for the rest of the round.

use rand::Rng;
use serde::Serialize;

use super::{Feedback, GameMachine, Step};
use crate::catalog::GameKind;
use crate::config::FallingWordConfig;
use crate::content::rhyme::{self, RhymeRound};
use crate::error::GameLogicViolation;

const WRAP_Y: f32 = -60.0;
const LANE_LEFT: f32 = 20.0;
const LANE_SPACING: f32 = 90.0;

/// A word on its way down.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FallingWord {
    pub text: String,
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone)]
pub struct FallingWordMachine {
    config: FallingWordConfig,
    rounds: Vec<RhymeRound>,
    round: usize,
    words: Vec<FallingWord>,
    disabled: Vec<String>,
    combo: u32,
    score: u32,
    finished: bool,
}

impl FallingWordMachine {
    /// Generate `config.rounds` rhyme rounds up front.
    pub fn new(config: FallingWordConfig, rng: &mut impl Rng) -> Self {
        let rounds = (0..config.rounds)
            .map(|_| rhyme::generate_round(config.options_per_round, rng))
            .collect();
        Self::from_rounds(config, rounds)
    }

    /// Play a fixed list of rounds.
    pub fn from_rounds(config: FallingWordConfig, rounds: Vec<RhymeRound>) -> Self {
        let mut machine = Self {
            config,
            finished: rounds.is_empty(),
            rounds,
            round: 0,
            words: Vec::new(),
            disabled: Vec::new(),
            combo: 0,
            score: 0,
        };
        machine.drop_words();
        machine
    }

    fn drop_words(&mut self) {
        self.disabled.clear();
        self.words = match self.rounds.get(self.round) {
            Some(round) => round
                .options
                .iter()
                .enumerate()
                .map(|(i, text)| FallingWord {
                    text: text.clone(),
                    x: LANE_LEFT + i as f32 * LANE_SPACING,
                    y: WRAP_Y * (i as f32 + 1.5),
                })
                .collect(),
            None => Vec::new(),
        };
    }

    pub fn current_round(&self) -> Option<&RhymeRound> {
        if self.finished {
            None
        } else {
            self.rounds.get(self.round)
        }
    }

    /// 1-based round number.
    pub fn round_number(&self) -> usize {
        self.round + 1
    }

    pub fn total_rounds(&self) -> usize {
        self.rounds.len()
    }

    pub fn words(&self) -> &[FallingWord] {
        &self.words
    }

    pub fn combo(&self) -> u32 {
        self.combo
    }

    pub fn is_disabled(&self, word: &str) -> bool {
        self.disabled.iter().any(|w| w == word)
    }

    /// Pixels per tick at the current combo.
    pub fn fall_speed(&self) -> f32 {
        self.config.base_speed + self.combo as f32 * self.config.combo_speed
    }

    /// Move every word down by one tick.
    pub fn advance_fall(&mut self) {
        if self.finished {
            return;
        }
        let speed = self.fall_speed();
        let bottom = self.config.lane_height;
        for word in &mut self.words {
            word.y = if word.y > bottom { WRAP_Y } else { word.y + speed };
        }
    }

    /// Catch the word shown at `index` in [`words`](Self::words).
    pub fn tap(&mut self, index: usize) -> Result<Step, GameLogicViolation> {
        let text = self
            .words
            .get(index)
            .map(|w| w.text.clone())
            .ok_or(GameLogicViolation::UnknownOption(index))?;
        self.catch_word(&text)
    }

    pub fn catch_word(&mut self, word: &str) -> Result<Step, GameLogicViolation> {
        let round = self.current_round().ok_or(GameLogicViolation::GameOver)?;
        if !round.options.iter().any(|o| o == word) {
            return Err(GameLogicViolation::UnknownWord(word.to_string()));
        }
        if self.is_disabled(word) {
            return Err(GameLogicViolation::OptionDisabled(word.to_string()));
        }

        if word != round.rhyme {
            self.combo = 0;
            self.disabled.push(word.to_string());
            return Ok(Step::new(Feedback::Incorrect));
        }

        self.score += 1 + self.combo;
        self.combo += 1;
        self.round += 1;
        if self.round == self.rounds.len() {
            self.finished = true;
            self.words.clear();
            return Ok(Step::completing(
                Feedback::RoundComplete,
                GameKind::Rhyme,
                self.score,
            ));
        }
        self.drop_words();
        Ok(Step::new(Feedback::RoundComplete))
    }
}

impl GameMachine for FallingWordMachine {
    fn kind(&self) -> GameKind {
        GameKind::Rhyme
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
