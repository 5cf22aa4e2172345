//! Per-game state machines.
//!
//! Each machine is built from an ordered content list, answers every
//! submission or tap with immediate [`Feedback`], and reports upward only
//! through a [`GameEvent`]. Invalid operations come back as
//! [`GameLogicViolation`] and leave the machine untouched.
//!
//! | Machine | Game id | Input |
//! |---------|---------|-------|
//! | [`SpellingMachine`] | `spelling` | option text |
//! | [`TracingMachine`] | `drawing` | drawing + handwriting check |
//! | [`QuizMachine`] | `quiz` | option index |
//! | [`CombatMachine`] | `typequest` | typed answer, one-second ticks |
//! | [`TugOfWarMachine`] | `wordwrestle` | option index |
//! | [`FallingWordMachine`] | `rhyme` | caught word, fall ticks |
//! | [`SyllableSlicerMachine`] | `syllable` | fragment index |

pub mod combat;
pub mod falling_word;
pub mod quiz;
pub mod spelling;
pub mod syllable_slicer;
pub mod tracing;
pub mod tug_of_war;

pub use combat::CombatMachine;
pub use falling_word::FallingWordMachine;
pub use quiz::QuizMachine;
pub use spelling::SpellingMachine;
pub use syllable_slicer::SyllableSlicerMachine;
pub use tracing::{TracingMachine, TracingState};
pub use tug_of_war::TugOfWarMachine;

use serde::Serialize;

use crate::catalog::GameKind;
use crate::error::GameLogicViolation;

/// Immediate correctness signal for one input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Feedback {
    Correct,
    Incorrect,
    /// The round countdown ran out; scored like a wrong answer.
    Timeout,
    /// Correct input that also finished the current round or word.
    RoundComplete,
}

impl Feedback {
    pub fn is_correct(self) -> bool {
        matches!(self, Feedback::Correct | Feedback::RoundComplete)
    }
}

/// What a machine reports to the sequence controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GameEvent {
    /// The game ran to its end; `score` is the intra-game contribution.
    Completed { game: GameKind, score: u32 },
    Skipped { game: GameKind },
}

impl GameEvent {
    pub fn game(&self) -> GameKind {
        match *self {
            GameEvent::Completed { game, .. } | GameEvent::Skipped { game } => game,
        }
    }
}

/// Result of a single accepted input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Step {
    pub feedback: Feedback,
    pub event: Option<GameEvent>,
}

impl Step {
    pub(crate) fn new(feedback: Feedback) -> Self {
        Self {
            feedback,
            event: None,
        }
    }

    pub(crate) fn completing(feedback: Feedback, game: GameKind, score: u32) -> Self {
        Self {
            feedback,
            event: Some(GameEvent::Completed { game, score }),
        }
    }
}

/// Terminal result of the two-sided games.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Outcome {
    Won,
    Lost,
}

/// Behaviour shared by every game machine.
pub trait GameMachine {
    fn kind(&self) -> GameKind;

    /// Intra-game score so far.
    fn score(&self) -> u32;

    fn is_finished(&self) -> bool;

    /// Mark the machine as ended without completing it.
    fn abandon(&mut self);

    /// End the game early. No completion event is produced.
    fn skip(&mut self) -> Result<GameEvent, GameLogicViolation> {
        if self.is_finished() {
            return Err(GameLogicViolation::GameOver);
        }
        self.abandon();
        Ok(GameEvent::Skipped { game: self.kind() })
    }
}
