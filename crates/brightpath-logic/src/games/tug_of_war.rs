//! Tug-of-war over synonym/antonym questions.
//!
//! The rope starts centred at 0. A correct pick pulls it one step toward
//! the learner and moves on to a new question; a wrong pick gives a step
//! away and disables that option until the question changes.

use rand::rngs::StdRng;
use rand::SeedableRng;

use super::{Feedback, GameMachine, Outcome, Step};
use crate::catalog::GameKind;
use crate::config::TugOfWarConfig;
use crate::content::lexical::LexicalRelationGenerator;
use crate::content::question::QuestionRecord;
use crate::error::GameLogicViolation;

#[derive(Debug, Clone)]
pub struct TugOfWarMachine {
    threshold: i32,
    rng: StdRng,
    generator: LexicalRelationGenerator,
    question: QuestionRecord,
    disabled: Vec<usize>,
    position: i32,
    correct: u32,
    outcome: Option<Outcome>,
    abandoned: bool,
}

impl TugOfWarMachine {
    pub fn new(config: TugOfWarConfig, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut generator = LexicalRelationGenerator::new();
        let question = generator.generate(&mut rng);
        Self {
            threshold: config.threshold,
            rng,
            generator,
            question,
            disabled: Vec::new(),
            position: 0,
            correct: 0,
            outcome: None,
            abandoned: false,
        }
    }

    pub fn question(&self) -> &QuestionRecord {
        &self.question
    }

    pub fn position(&self) -> i32 {
        self.position
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn is_disabled(&self, option: usize) -> bool {
        self.disabled.contains(&option)
    }

    pub fn tap(&mut self, option: usize) -> Result<Step, GameLogicViolation> {
        if self.is_finished() {
            return Err(GameLogicViolation::GameOver);
        }
        let choice = self
            .question
            .options
            .get(option)
            .ok_or(GameLogicViolation::UnknownOption(option))?;
        if self.is_disabled(option) {
            return Err(GameLogicViolation::OptionDisabled(choice.clone()));
        }

        let feedback = if self.question.answer.accepts(choice) {
            self.position += 1;
            self.correct += 1;
            Feedback::Correct
        } else {
            self.position -= 1;
            self.disabled.push(option);
            Feedback::Incorrect
        };

        if self.position >= self.threshold {
            self.outcome = Some(Outcome::Won);
        } else if self.position <= -self.threshold {
            self.outcome = Some(Outcome::Lost);
        }
        if self.outcome.is_some() {
            return Ok(Step::completing(feedback, GameKind::WordWrestle, self.correct));
        }

        if feedback == Feedback::Correct {
            self.question = self.generator.generate(&mut self.rng);
            self.disabled.clear();
        }
        Ok(Step::new(feedback))
    }
}

impl GameMachine for TugOfWarMachine {
    fn kind(&self) -> GameKind {
        GameKind::WordWrestle
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::GameEvent;

    fn answer_index(game: &TugOfWarMachine) -> usize {
        game.question().answer_index().unwrap()
    }

    fn wrong_index(game: &TugOfWarMachine) -> usize {
        let answer = answer_index(game);
        (0..game.question().options.len())
            .find(|&i| i != answer && !game.is_disabled(i))
            .unwrap()
    }

    #[test]
    fn test_correct_pulls_and_moves_on() {
        let mut game = TugOfWarMachine::new(TugOfWarConfig::default(), 3);
        let before = game.question().clone();
        let step = game.tap(answer_index(&game)).unwrap();
        assert_eq!(step.feedback, Feedback::Correct);
        assert_eq!(game.position(), 1);
        assert_ne!(game.question().prompt, before.prompt);
    }

    #[test]
    fn test_wrong_option_is_disabled() {
        let mut game = TugOfWarMachine::new(TugOfWarConfig::default(), 3);
        let wrong = wrong_index(&game);
        assert_eq!(game.tap(wrong).unwrap().feedback, Feedback::Incorrect);
        assert_eq!(game.position(), -1);
        assert!(matches!(
            game.tap(wrong),
            Err(GameLogicViolation::OptionDisabled(_))
        ));
        assert_eq!(game.position(), -1);
    }

    #[test]
    fn test_threshold_wins() {
        let mut game = TugOfWarMachine::new(TugOfWarConfig { threshold: 3 }, 8);
        game.tap(answer_index(&game)).unwrap();
        game.tap(answer_index(&game)).unwrap();
        let step = game.tap(answer_index(&game)).unwrap();
        assert_eq!(game.outcome(), Some(Outcome::Won));
        assert_eq!(
            step.event,
            Some(GameEvent::Completed {
                game: GameKind::WordWrestle,
                score: 3
            })
        );
    }

    #[test]
    fn test_threshold_loses() {
        let mut game = TugOfWarMachine::new(TugOfWarConfig { threshold: 2 }, 8);
        game.tap(wrong_index(&game)).unwrap();
        let step = game.tap(wrong_index(&game)).unwrap();
        assert_eq!(game.outcome(), Some(Outcome::Lost));
        assert!(step.event.is_some());
        assert_eq!(game.tap(0), Err(GameLogicViolation::GameOver));
    }
}
