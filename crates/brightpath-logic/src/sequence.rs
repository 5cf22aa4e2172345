//! Sequence controller: walks a learner through their game sequence.
//!
//! The controller is the only owner of progress and score. Games report
//! through [`GameEvent`]s; the controller checks the event against the
//! active descriptor, awards the phase reward on completion and moves on.
//!
//! ```
//! use brightpath_logic::config::RewardConfig;
//! use brightpath_logic::profile::ProfileCategory;
//! use brightpath_logic::sequence::{SequenceController, SequencePhase};
//!
//! let mut controller = SequenceController::new(RewardConfig::default());
//! controller.start(ProfileCategory::Adhd);
//! let first = controller.current().unwrap().kind;
//! controller.complete(first).unwrap();
//! assert_eq!(controller.score(), 15);
//! assert_eq!(controller.phase(), SequencePhase::Guided);
//! ```

use serde::Serialize;
use std::collections::BTreeMap;

use crate::catalog::{sequence_for, GameDescriptor, GameKind, GameSequence};
use crate::config::RewardConfig;
use crate::error::GameLogicViolation;
use crate::games::GameEvent;
use crate::profile::ProfileCategory;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SequencePhase {
    AwaitingStart,
    Guided,
    Practice,
    Completed,
}

/// Read-only view of a session's progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSummary {
    pub category: ProfileCategory,
    pub phase: SequencePhase,
    /// Sum of phase rewards over completed games.
    pub score: u32,
    pub completed: Vec<GameKind>,
    pub skipped: Vec<GameKind>,
    /// Intra-game score reported by each completed game.
    pub game_scores: BTreeMap<GameKind, u32>,
}

#[derive(Debug, Clone)]
pub struct SequenceController {
    rewards: RewardConfig,
    sequence: Option<GameSequence>,
    index: usize,
    completed: Vec<GameKind>,
    skipped: Vec<GameKind>,
    game_scores: BTreeMap<GameKind, u32>,
    score: u32,
    phase: SequencePhase,
}

impl SequenceController {
    pub fn new(rewards: RewardConfig) -> Self {
        Self {
            rewards,
            sequence: None,
            index: 0,
            completed: Vec::new(),
            skipped: Vec::new(),
            game_scores: BTreeMap::new(),
            score: 0,
            phase: SequencePhase::AwaitingStart,
        }
    }

    /// Build the sequence for `category` and reset all progress.
    pub fn start(&mut self, category: ProfileCategory) -> SequencePhase {
        let sequence = sequence_for(category);
        log::info!(
            "starting {} sequence: {} guided, {} practice",
            category,
            sequence.guided_len(),
            sequence.len() - sequence.guided_len()
        );
        self.sequence = Some(sequence);
        self.index = 0;
        self.completed.clear();
        self.skipped.clear();
        self.game_scores.clear();
        self.score = 0;
        self.phase = SequencePhase::AwaitingStart;
        self.update_phase();
        self.phase
    }

    pub fn phase(&self) -> SequencePhase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn completed(&self) -> &[GameKind] {
        &self.completed
    }

    pub fn sequence(&self) -> Option<&GameSequence> {
        self.sequence.as_ref()
    }

    /// Descriptor of the active game, if any.
    pub fn current(&self) -> Option<&GameDescriptor> {
        match self.phase {
            SequencePhase::Guided | SequencePhase::Practice => {
                self.sequence.as_ref().and_then(|s| s.get(self.index))
            }
            _ => None,
        }
    }

    fn active(&self) -> Result<GameDescriptor, GameLogicViolation> {
        match self.phase {
            SequencePhase::AwaitingStart => Err(GameLogicViolation::NotStarted),
            SequencePhase::Completed => Err(GameLogicViolation::SequenceFinished),
            _ => self.current().copied().ok_or(GameLogicViolation::NoActiveGame),
        }
    }

    fn check_active(&self, game: GameKind) -> Result<GameDescriptor, GameLogicViolation> {
        let active = self.active()?;
        if active.kind != game {
            return Err(GameLogicViolation::NotActiveGame {
                expected: active.kind,
                found: game,
            });
        }
        Ok(active)
    }

    /// Complete the active game and award its phase reward.
    pub fn complete(&mut self, game: GameKind) -> Result<SequencePhase, GameLogicViolation> {
        let active = self.check_active(game)?;
        let reward = self.rewards.for_phase(active.phase);
        self.score += reward;
        self.completed.push(game);
        log::debug!("completed {game} (+{reward}, total {})", self.score);
        self.advance();
        Ok(self.phase)
    }

    /// Move past the active game with no reward.
    pub fn skip(&mut self) -> Result<SequencePhase, GameLogicViolation> {
        let active = self.active()?;
        self.skipped.push(active.kind);
        log::debug!("skipped {}", active.kind);
        self.advance();
        Ok(self.phase)
    }

    /// Apply a game machine's event.
    pub fn apply(&mut self, event: GameEvent) -> Result<SequencePhase, GameLogicViolation> {
        match event {
            GameEvent::Completed { game, score } => {
                let phase = self.complete(game)?;
                self.game_scores.insert(game, score);
                Ok(phase)
            }
            GameEvent::Skipped { game } => {
                self.check_active(game)?;
                self.skip()
            }
        }
    }

    fn advance(&mut self) {
        self.index += 1;
        self.update_phase();
    }

    fn update_phase(&mut self) {
        let Some(sequence) = &self.sequence else {
            return;
        };
        let phase = if self.index < sequence.guided_len() {
            SequencePhase::Guided
        } else if self.index < sequence.len() {
            SequencePhase::Practice
        } else {
            SequencePhase::Completed
        };
        if phase != self.phase {
            log::info!("sequence phase {:?} -> {:?}", self.phase, phase);
            self.phase = phase;
        }
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            category: self
                .sequence
                .as_ref()
                .map_or(ProfileCategory::None, |s| s.category),
            phase: self.phase,
            score: self.score,
            completed: self.completed.clone(),
            skipped: self.skipped.clone(),
            game_scores: self.game_scores.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> SequenceController {
        SequenceController::new(RewardConfig::default())
    }

    #[test]
    fn test_adhd_full_run() {
        let mut c = controller();
        assert_eq!(c.start(ProfileCategory::Adhd), SequencePhase::Guided);
        assert_eq!(c.complete(GameKind::Gallery), Ok(SequencePhase::Guided));
        assert_eq!(c.complete(GameKind::Quiz), Ok(SequencePhase::Practice));
        assert_eq!(c.complete(GameKind::TypeQuest), Ok(SequencePhase::Practice));
        assert_eq!(c.complete(GameKind::WordWrestle), Ok(SequencePhase::Completed));
        assert_eq!(c.completed().len(), 4);
        assert_eq!(c.score(), 2 * 15 + 2 * 20);
        assert!(c.current().is_none());
    }

    #[test]
    fn test_guided_only_entry_completes_after_guided() {
        let mut c = controller();
        assert_eq!(c.start(ProfileCategory::Visual), SequencePhase::Guided);
        assert_eq!(c.complete(GameKind::Quiz), Ok(SequencePhase::Completed));
        assert_eq!(c.score(), 15);
    }

    #[test]
    fn test_operations_before_start() {
        let mut c = controller();
        assert_eq!(c.phase(), SequencePhase::AwaitingStart);
        assert_eq!(c.skip(), Err(GameLogicViolation::NotStarted));
        assert_eq!(c.complete(GameKind::Quiz), Err(GameLogicViolation::NotStarted));
    }

    #[test]
    fn test_completing_inactive_game_is_rejected() {
        let mut c = controller();
        c.start(ProfileCategory::Adhd);
        assert_eq!(
            c.complete(GameKind::Quiz),
            Err(GameLogicViolation::NotActiveGame {
                expected: GameKind::Gallery,
                found: GameKind::Quiz
            })
        );
        assert_eq!(c.score(), 0);
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn test_skip_awards_nothing() {
        let mut c = controller();
        c.start(ProfileCategory::Dyslexia);
        c.skip().unwrap();
        c.complete(GameKind::Drawing).unwrap();
        assert_eq!(c.score(), 15);
        assert_eq!(c.completed(), [GameKind::Drawing]);
        assert_eq!(c.summary().skipped, [GameKind::Spelling]);
    }

    #[test]
    fn test_after_completion_everything_is_rejected() {
        let mut c = controller();
        c.start(ProfileCategory::Dyslexia);
        for _ in 0..5 {
            c.skip().unwrap();
        }
        assert_eq!(c.phase(), SequencePhase::Completed);
        let before = c.summary();
        assert_eq!(c.skip(), Err(GameLogicViolation::SequenceFinished));
        assert_eq!(
            c.complete(GameKind::Syllable),
            Err(GameLogicViolation::SequenceFinished)
        );
        assert_eq!(c.summary(), before);
    }

    #[test]
    fn test_events_record_intra_game_scores() {
        let mut c = controller();
        c.start(ProfileCategory::Adhd);
        c.apply(GameEvent::Completed {
            game: GameKind::Gallery,
            score: 0,
        })
        .unwrap();
        c.apply(GameEvent::Skipped { game: GameKind::Quiz }).unwrap();
        c.apply(GameEvent::Completed {
            game: GameKind::TypeQuest,
            score: 4,
        })
        .unwrap();
        let summary = c.summary();
        assert_eq!(summary.score, 15 + 20);
        assert_eq!(summary.game_scores.get(&GameKind::TypeQuest), Some(&4));
        assert_eq!(summary.skipped, [GameKind::Quiz]);
    }

    #[test]
    fn test_skip_event_for_wrong_game_is_rejected() {
        let mut c = controller();
        c.start(ProfileCategory::Adhd);
        assert!(matches!(
            c.apply(GameEvent::Skipped { game: GameKind::Rhyme }),
            Err(GameLogicViolation::NotActiveGame { .. })
        ));
    }

    #[test]
    fn test_restart_resets_progress() {
        let mut c = controller();
        c.start(ProfileCategory::Adhd);
        c.complete(GameKind::Gallery).unwrap();
        c.start(ProfileCategory::Dyslexia);
        assert_eq!(c.score(), 0);
        assert_eq!(c.current().map(|d| d.kind), Some(GameKind::Spelling));
        assert_eq!(c.summary().category, ProfileCategory::Dyslexia);
    }
}
