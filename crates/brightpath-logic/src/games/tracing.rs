//! Letter tracing checked by the handwriting collaborator.
//!
//! A drawing for the current letter becomes a [`HandwritingRequest`] and
//! the machine waits for the answer. While it waits, further drawings are
//! refused. A failed call leaves a visible error until the learner asks
//! to retry; nothing is resent automatically.

use serde::Serialize;

use super::{Feedback, GameMachine, Step};
use crate::catalog::GameKind;
use crate::collaborators::{HandwritingRequest, HandwritingResponse};
use crate::error::{CollaboratorError, GameLogicViolation};
use crate::games::spelling::spelling_letters;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum TracingState {
    Ready,
    AwaitingResponse { request: HandwritingRequest },
    Failed { message: String },
    Finished,
}

#[derive(Debug, Clone)]
pub struct TracingMachine {
    letters: Vec<char>,
    index: usize,
    score: u32,
    state: TracingState,
}

impl TracingMachine {
    pub fn new(word: &str) -> Self {
        Self {
            letters: spelling_letters(word),
            index: 0,
            score: 0,
            state: TracingState::Ready,
        }
    }

    pub fn state(&self) -> &TracingState {
        &self.state
    }

    pub fn current_letter(&self) -> Option<char> {
        match self.state {
            TracingState::Finished => None,
            _ => self.letters.get(self.index).copied(),
        }
    }

    /// Hand in a drawing of the current letter.
    pub fn submit_drawing(
        &mut self,
        image: String,
    ) -> Result<HandwritingRequest, GameLogicViolation> {
        match self.state {
            TracingState::Ready => {}
            TracingState::AwaitingResponse { .. } => {
                return Err(GameLogicViolation::AwaitingResponse)
            }
            TracingState::Failed { .. } => return Err(GameLogicViolation::NoPendingRequest),
            TracingState::Finished => return Err(GameLogicViolation::GameOver),
        }
        let letter = self.current_letter().ok_or(GameLogicViolation::GameOver)?;
        let request = HandwritingRequest {
            image,
            expected: letter.to_string(),
        };
        self.state = TracingState::AwaitingResponse {
            request: request.clone(),
        };
        Ok(request)
    }

    /// Apply the collaborator's answer to the pending request.
    pub fn resolve(
        &mut self,
        result: Result<HandwritingResponse, CollaboratorError>,
    ) -> Result<Step, GameLogicViolation> {
        match self.state {
            TracingState::AwaitingResponse { .. } => {}
            TracingState::Finished => return Err(GameLogicViolation::GameOver),
            _ => return Err(GameLogicViolation::NoPendingRequest),
        }

        let response = match result.and_then(HandwritingResponse::into_result) {
            Ok(response) => response,
            Err(e) => {
                log::warn!("handwriting check failed: {e}");
                self.state = TracingState::Failed {
                    message: e.to_string(),
                };
                return Ok(Step::new(Feedback::Incorrect));
            }
        };

        if !response.correct {
            log::debug!(
                "handwriting mismatch: detected '{}' for '{}'",
                response.detected,
                response.expected
            );
            self.state = TracingState::Ready;
            return Ok(Step::new(Feedback::Incorrect));
        }

        self.score += 1;
        self.index += 1;
        if self.index == self.letters.len() {
            self.state = TracingState::Finished;
            return Ok(Step::completing(Feedback::Correct, GameKind::Drawing, self.score));
        }
        self.state = TracingState::Ready;
        Ok(Step::new(Feedback::Correct))
    }

    /// Leave the error state so the learner can resubmit.
    pub fn retry(&mut self) -> Result<(), GameLogicViolation> {
        match self.state {
            TracingState::Failed { .. } => {
                self.state = TracingState::Ready;
                Ok(())
            }
            TracingState::AwaitingResponse { .. } => Err(GameLogicViolation::AwaitingResponse),
            TracingState::Finished => Err(GameLogicViolation::GameOver),
            TracingState::Ready => Err(GameLogicViolation::NoPendingRequest),
        }
    }
}

impl GameMachine for TracingMachine {
    fn kind(&self) -> GameKind {
        GameKind::Drawing
    }

    fn score(&self) -> u32 {
        self.score
    }

    fn is_finished(&self) -> bool {
        self.state == TracingState::Finished
    }

    fn abandon(&mut self) {
        self.state = TracingState::Finished;
    }
}
