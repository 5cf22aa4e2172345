//! Timed combat quiz: typed arithmetic answers against a countdown.
//!
//! Learner and opponent start with the same health. A correct, in-time
//! answer hits the opponent; a wrong answer or an expired countdown hits
//! the learner. Either way a fresh question is drawn and the countdown
//! restarts. The fight ends when one side drops to zero.

use rand::rngs::StdRng;
use rand::SeedableRng;

use super::{Feedback, GameMachine, Outcome, Step};
use crate::catalog::GameKind;
use crate::config::CombatConfig;
use crate::content::arithmetic::{self, ArithmeticQuestion};
use crate::content::question::Difficulty;
use crate::error::GameLogicViolation;

#[derive(Debug, Clone)]
pub struct CombatMachine {
    config: CombatConfig,
    difficulty: Difficulty,
    rng: StdRng,
    question: ArithmeticQuestion,
    actor_health: i32,
    opponent_health: i32,
    seconds_left: u32,
    correct: u32,
    outcome: Option<Outcome>,
    abandoned: bool,
}

impl CombatMachine {
    pub fn new(config: CombatConfig, difficulty: Difficulty, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let question = arithmetic::generate(difficulty, &mut rng);
        Self {
            config,
            difficulty,
            rng,
            question,
            actor_health: config.max_health,
            opponent_health: config.max_health,
            seconds_left: config.round_seconds,
            correct: 0,
            outcome: None,
            abandoned: false,
        }
    }

    pub fn question(&self) -> &ArithmeticQuestion {
        &self.question
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn actor_health(&self) -> i32 {
        self.actor_health
    }

    pub fn opponent_health(&self) -> i32 {
        self.opponent_health
    }

    pub fn seconds_left(&self) -> u32 {
        self.seconds_left
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Submit a typed answer for the current question.
    pub fn submit(&mut self, input: &str) -> Result<Step, GameLogicViolation> {
        if self.is_finished() {
            return Err(GameLogicViolation::GameOver);
        }
        if input.trim().is_empty() {
            return Err(GameLogicViolation::EmptyAnswer);
        }
        if self.question.answer.accepts(input) {
            self.correct += 1;
            self.opponent_health -= self.config.actor_attack;
            Ok(self.resolve_round(Feedback::Correct))
        } else {
            self.actor_health -= self.config.opponent_attack;
            Ok(self.resolve_round(Feedback::Incorrect))
        }
    }

    /// One second of countdown. Returns a step only when the round expired.
    pub fn tick_second(&mut self) -> Option<Step> {
        if self.is_finished() {
            return None;
        }
        self.seconds_left = self.seconds_left.saturating_sub(1);
        if self.seconds_left > 0 {
            return None;
        }
        self.actor_health -= self.config.opponent_attack;
        Some(self.resolve_round(Feedback::Timeout))
    }

    fn resolve_round(&mut self, feedback: Feedback) -> Step {
        if self.opponent_health <= 0 {
            self.outcome = Some(Outcome::Won);
        } else if self.actor_health <= 0 {
            self.outcome = Some(Outcome::Lost);
        }
        if let Some(outcome) = self.outcome {
            log::debug!("combat ended: {outcome:?} after {} correct answers", self.correct);
            return Step::completing(feedback, GameKind::TypeQuest, self.correct);
        }
        self.question = arithmetic::generate(self.difficulty, &mut self.rng);
        self.seconds_left = self.config.round_seconds;
        Step::new(feedback)
    }
}

impl GameMachine for CombatMachine {
    fn kind(&self) -> GameKind {
        GameKind::TypeQuest
    }

    fn score(&self) -> u32 {
        self.correct
    }

    fn is_finished(&self) -> bool {
        self.abandoned || self.outcome.is_some()
    }

    fn abandon(&mut self) {
        self.abandoned = true;
    }
}
