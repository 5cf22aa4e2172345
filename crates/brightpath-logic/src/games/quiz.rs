//! Topic quiz: one multiple-choice answer per question.

use super::{Feedback, GameMachine, Step};
use crate::catalog::GameKind;
use crate::content::question::QuestionRecord;
use crate::error::GameLogicViolation;

#[derive(Debug, Clone)]
pub struct QuizMachine {
    questions: Vec<QuestionRecord>,
    index: usize,
    score: u32,
    finished: bool,
}

impl QuizMachine {
    /// A quiz over `questions`; an empty list starts out finished.
    pub fn new(questions: Vec<QuestionRecord>) -> Self {
        let finished = questions.is_empty();
        Self {
            questions,
            index: 0,
            score: 0,
            finished,
        }
    }

    pub fn current(&self) -> Option<&QuestionRecord> {
        if self.finished {
            None
        } else {
            self.questions.get(self.index)
        }
    }

    pub fn remaining(&self) -> usize {
        if self.finished {
            0
        } else {
            self.questions.len() - self.index
        }
    }

    /// Answer the current question by option index and move on.
    pub fn tap(&mut self, option: usize) -> Result<Step, GameLogicViolation> {
        let question = self.current().ok_or(GameLogicViolation::GameOver)?;
        let choice = question
            .options
            .get(option)
            .ok_or(GameLogicViolation::UnknownOption(option))?;
        let correct = question.answer.accepts(choice);

        let feedback = if correct {
            self.score += 1;
            Feedback::Correct
        } else {
            Feedback::Incorrect
        };
        self.index += 1;
        if self.index == self.questions.len() {
            self.finished = true;
            return Ok(Step::completing(feedback, GameKind::Quiz, self.score));
        }
        Ok(Step::new(feedback))
    }
}

impl GameMachine for QuizMachine {
    fn kind(&self) -> GameKind {
        GameKind::Quiz
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
