//! Error taxonomy for the sequencing core.
//!
//! Nothing here is fatal. A rejected game operation comes back as a
//! [`GameLogicViolation`] and leaves state untouched; collaborator
//! failures surface as [`CollaboratorError`] for a manual retry; content
//! that does not parse becomes a [`ContentError`] that the content
//! resolver swallows in favour of local fallback content.

use thiserror::Error;

use crate::catalog::GameKind;

/// An operation that is not valid for the current state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameLogicViolation {
    #[error("no sequence has been started")]
    NotStarted,
    #[error("the sequence is already completed")]
    SequenceFinished,
    #[error("game {found} is not active (active game is {expected})")]
    NotActiveGame { expected: GameKind, found: GameKind },
    #[error("no game is active")]
    NoActiveGame,
    #[error("this operation does not apply to {0}")]
    WrongInput(GameKind),
    #[error("fragment {tapped} tapped out of order (expected {expected})")]
    OutOfOrder { expected: usize, tapped: usize },
    #[error("option '{0}' is disabled for this round")]
    OptionDisabled(String),
    #[error("option index {0} does not exist")]
    UnknownOption(usize),
    #[error("'{0}' is not one of the offered words")]
    UnknownWord(String),
    #[error("an empty answer was submitted")]
    EmptyAnswer,
    #[error("a response is still pending")]
    AwaitingResponse,
    #[error("there is no pending request to resolve")]
    NoPendingRequest,
    #[error("the game is over")]
    GameOver,
}

/// Failure reported by a networked collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollaboratorError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request timed out")]
    Timeout,
    #[error("collaborator rejected the request: {0}")]
    Rejected(String),
}

/// Generated content that cannot be used as-is.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("content is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("content has the wrong shape: {0}")]
    Shape(String),
}

/// Malformed persisted learner profile record.
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("profile record is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}
