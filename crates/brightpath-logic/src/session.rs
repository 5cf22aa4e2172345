//! Learning session: one learner, one topic, one pass through the sequence.
//!
//! The session owns the [`SequenceController`], the shared [`Timeline`]
//! and the machine of the active game. Inputs are routed to that machine;
//! its events go to the controller, and every game change tears down the
//! previous activation's timers before the next game is built.
//!
//! ```
//! use brightpath_logic::config::EngineConfig;
//! use brightpath_logic::profile::{LearnerProfile, ProfileCategory};
//! use brightpath_logic::session::LearningSession;
//! use brightpath_logic::topic::fallback_content;
//! use rand::SeedableRng;
//!
//! let config = EngineConfig::default();
//! let mut rng = rand::rngs::StdRng::seed_from_u64(1);
//! let content = fallback_content("ocean", &config.content, &mut rng);
//! let mut session = LearningSession::new(config, 7);
//! session.start(LearnerProfile::new("u1", ProfileCategory::Adhd), content);
//! session.finish_external().unwrap(); // gallery
//! assert_eq!(session.summary().score, 15);
//! ```

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::catalog::GameKind;
use crate::collaborators::{HandwritingRequest, HandwritingResponse};
use crate::config::EngineConfig;
use crate::content::phonetic::{analyze, curated_words, SyllableAnalysis};
use crate::error::{CollaboratorError, GameLogicViolation};
use crate::games::{
    CombatMachine, FallingWordMachine, GameEvent, GameMachine, QuizMachine, SpellingMachine, Step,
    SyllableSlicerMachine, TracingMachine, TugOfWarMachine,
};
use crate::profile::LearnerProfile;
use crate::sequence::{SequenceController, SequencePhase, SessionSummary};
use crate::timeline::{GameToken, Tick, Timeline, TimerKind};
use crate::topic::TopicContent;

const COUNTDOWN_MILLIS: u64 = 1000;
const CURATED_SYLLABLE_WORDS: usize = 2;

/// The machine behind the active game.
#[derive(Debug, Clone)]
pub enum ActiveGame {
    Spelling(SpellingMachine),
    Drawing(TracingMachine),
    /// Browsed outside the core; ends through [`LearningSession::finish_external`].
    Gallery,
    Quiz(QuizMachine),
    TypeQuest(CombatMachine),
    WordWrestle(TugOfWarMachine),
    Rhyme(FallingWordMachine),
    Syllable(SyllableSlicerMachine),
}

impl ActiveGame {
    pub fn kind(&self) -> GameKind {
        match self {
            ActiveGame::Spelling(_) => GameKind::Spelling,
            ActiveGame::Drawing(_) => GameKind::Drawing,
            ActiveGame::Gallery => GameKind::Gallery,
            ActiveGame::Quiz(_) => GameKind::Quiz,
            ActiveGame::TypeQuest(_) => GameKind::TypeQuest,
            ActiveGame::WordWrestle(_) => GameKind::WordWrestle,
            ActiveGame::Rhyme(_) => GameKind::Rhyme,
            ActiveGame::Syllable(_) => GameKind::Syllable,
        }
    }

    fn machine_mut(&mut self) -> Option<&mut dyn GameMachine> {
        match self {
            ActiveGame::Spelling(m) => Some(m),
            ActiveGame::Drawing(m) => Some(m),
            ActiveGame::Gallery => None,
            ActiveGame::Quiz(m) => Some(m),
            ActiveGame::TypeQuest(m) => Some(m),
            ActiveGame::WordWrestle(m) => Some(m),
            ActiveGame::Rhyme(m) => Some(m),
            ActiveGame::Syllable(m) => Some(m),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LearningSession {
    config: EngineConfig,
    controller: SequenceController,
    timeline: Timeline,
    rng: StdRng,
    profile: Option<LearnerProfile>,
    content: Option<TopicContent>,
    active: Option<(GameToken, ActiveGame)>,
}

impl LearningSession {
    pub fn new(config: EngineConfig, seed: u64) -> Self {
        Self {
            controller: SequenceController::new(config.rewards),
            config,
            timeline: Timeline::new(),
            rng: StdRng::seed_from_u64(seed),
            profile: None,
            content: None,
            active: None,
        }
    }

    /// Begin the sequence for `profile` using already resolved topic content.
    pub fn start(&mut self, profile: LearnerProfile, content: TopicContent) -> SequencePhase {
        self.deactivate();
        log::info!(
            "session for {} on '{}' ({:?} content)",
            profile.identifier,
            content.topic,
            content.source
        );
        self.controller.start(profile.category);
        self.profile = Some(profile);
        self.content = Some(content);
        self.activate_current();
        self.controller.phase()
    }

    pub fn phase(&self) -> SequencePhase {
        self.controller.phase()
    }

    pub fn controller(&self) -> &SequenceController {
        &self.controller
    }

    pub fn profile(&self) -> Option<&LearnerProfile> {
        self.profile.as_ref()
    }

    pub fn content(&self) -> Option<&TopicContent> {
        self.content.as_ref()
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    pub fn active_game(&self) -> Option<&ActiveGame> {
        self.active.as_ref().map(|(_, game)| game)
    }

    pub fn active_token(&self) -> Option<GameToken> {
        self.active.as_ref().map(|(token, _)| *token)
    }

    pub fn summary(&self) -> SessionSummary {
        self.controller.summary()
    }

    fn no_game(&self) -> GameLogicViolation {
        match self.controller.phase() {
            SequencePhase::AwaitingStart => GameLogicViolation::NotStarted,
            SequencePhase::Completed => GameLogicViolation::SequenceFinished,
            _ => GameLogicViolation::NoActiveGame,
        }
    }

    fn active_mut(&mut self) -> Result<&mut ActiveGame, GameLogicViolation> {
        let missing = self.no_game();
        self.active
            .as_mut()
            .map(|(_, game)| game)
            .ok_or(missing)
    }

    /// Text input: a typed combat answer or a spelling option.
    pub fn submit_answer(&mut self, answer: &str) -> Result<Step, GameLogicViolation> {
        let (step, countdown) = match self.active_mut()? {
            ActiveGame::TypeQuest(m) => (m.submit(answer)?, true),
            ActiveGame::Spelling(m) => (m.submit(answer)?, false),
            other => return Err(GameLogicViolation::WrongInput(other.kind())),
        };
        // A fresh combat question gets a full first second.
        if countdown && step.event.is_none() {
            if let Some(token) = self.active_token() {
                self.timeline.restart(token, TimerKind::Countdown);
            }
        }
        self.after_step(step)
    }

    /// Index input: an option, a falling word or a syllable fragment.
    pub fn tap(&mut self, index: usize) -> Result<Step, GameLogicViolation> {
        let step = match self.active_mut()? {
            ActiveGame::Quiz(m) => m.tap(index)?,
            ActiveGame::WordWrestle(m) => m.tap(index)?,
            ActiveGame::Rhyme(m) => m.tap(index)?,
            ActiveGame::Syllable(m) => m.tap(index)?,
            ActiveGame::Spelling(m) => {
                let choice = m
                    .options()
                    .get(index)
                    .cloned()
                    .ok_or(GameLogicViolation::UnknownOption(index))?;
                m.submit(&choice)?
            }
            other => return Err(GameLogicViolation::WrongInput(other.kind())),
        };
        self.after_step(step)
    }

    pub fn submit_drawing(
        &mut self,
        image: String,
    ) -> Result<HandwritingRequest, GameLogicViolation> {
        match self.active_mut()? {
            ActiveGame::Drawing(m) => m.submit_drawing(image),
            other => Err(GameLogicViolation::WrongInput(other.kind())),
        }
    }

    pub fn resolve_handwriting(
        &mut self,
        result: Result<HandwritingResponse, CollaboratorError>,
    ) -> Result<Step, GameLogicViolation> {
        let step = match self.active_mut()? {
            ActiveGame::Drawing(m) => m.resolve(result)?,
            other => return Err(GameLogicViolation::WrongInput(other.kind())),
        };
        self.after_step(step)
    }

    pub fn retry_handwriting(&mut self) -> Result<(), GameLogicViolation> {
        match self.active_mut()? {
            ActiveGame::Drawing(m) => m.retry(),
            other => Err(GameLogicViolation::WrongInput(other.kind())),
        }
    }

    /// The externally rendered game reported that the learner finished it.
    pub fn finish_external(&mut self) -> Result<SequencePhase, GameLogicViolation> {
        let kind = self.active_mut()?.kind();
        if kind != GameKind::Gallery {
            return Err(GameLogicViolation::WrongInput(kind));
        }
        self.apply_event(GameEvent::Completed {
            game: GameKind::Gallery,
            score: 0,
        })
    }

    /// Abandon the active game and move on without a reward.
    pub fn skip_game(&mut self) -> Result<SequencePhase, GameLogicViolation> {
        let game = self.active_mut()?;
        let kind = game.kind();
        let event = match game.machine_mut() {
            Some(machine) => machine.skip()?,
            None => GameEvent::Skipped { game: kind },
        };
        self.apply_event(event)
    }

    /// Advance the shared clock, feeding due ticks to the active game.
    /// Returns the steps produced by expired countdowns.
    pub fn advance_time(&mut self, millis: u64) -> Vec<Step> {
        let ticks = self.timeline.advance(millis);
        let mut steps = Vec::new();
        for tick in ticks {
            if let Some(step) = self.dispatch_tick(tick) {
                steps.push(step);
            }
        }
        steps
    }

    fn dispatch_tick(&mut self, tick: Tick) -> Option<Step> {
        let (token, game) = self.active.as_mut()?;
        if *token != tick.owner {
            log::debug!("dropping stale {:?} tick of {:?}", tick.kind, tick.owner);
            return None;
        }
        let step = match (game, tick.kind) {
            (ActiveGame::TypeQuest(m), TimerKind::Countdown) => m.tick_second()?,
            (ActiveGame::Rhyme(m), TimerKind::Fall) => {
                m.advance_fall();
                return None;
            }
            _ => return None,
        };
        match self.after_step(step) {
            Ok(step) => Some(step),
            Err(e) => {
                log::warn!("tick event rejected: {e}");
                None
            }
        }
    }

    fn after_step(&mut self, step: Step) -> Result<Step, GameLogicViolation> {
        if let Some(event) = step.event {
            self.apply_event(event)?;
        }
        Ok(step)
    }

    fn apply_event(&mut self, event: GameEvent) -> Result<SequencePhase, GameLogicViolation> {
        let phase = self.controller.apply(event)?;
        self.deactivate();
        self.activate_current();
        Ok(phase)
    }

    fn deactivate(&mut self) {
        if let Some((token, game)) = self.active.take() {
            log::debug!("leaving {} ({:?})", game.kind(), token);
            self.timeline.cancel_owner(token);
        }
    }

    /// Build the machine for the controller's current game. Games that
    /// start out with nothing to play complete straight away.
    fn activate_current(&mut self) {
        while let Some(descriptor) = self.controller.current().copied() {
            let game = self.build(descriptor.kind);
            let empty = matches!(
                &game,
                ActiveGame::Quiz(m) if m.is_finished()
            ) || matches!(&game, ActiveGame::Syllable(m) if m.is_finished());
            if empty {
                log::warn!("{} has no content, completing it", descriptor.kind);
                if self
                    .controller
                    .apply(GameEvent::Completed {
                        game: descriptor.kind,
                        score: 0,
                    })
                    .is_err()
                {
                    return;
                }
                continue;
            }

            let token = self.timeline.mint_token();
            match &game {
                ActiveGame::TypeQuest(_) => {
                    self.timeline
                        .schedule(token, TimerKind::Countdown, COUNTDOWN_MILLIS)
                }
                ActiveGame::Rhyme(_) => self.timeline.schedule(
                    token,
                    TimerKind::Fall,
                    self.config.falling_words.tick_millis,
                ),
                _ => {}
            }
            log::debug!("entering {} ({:?})", descriptor.kind, token);
            self.active = Some((token, game));
            return;
        }
    }

    fn build(&mut self, kind: GameKind) -> ActiveGame {
        let word = self
            .content
            .as_ref()
            .map(|c| c.word.clone())
            .unwrap_or_default();
        match kind {
            GameKind::Spelling => ActiveGame::Spelling(SpellingMachine::new(&word, &mut self.rng)),
            GameKind::Drawing => ActiveGame::Drawing(TracingMachine::new(&word)),
            GameKind::Gallery => ActiveGame::Gallery,
            GameKind::Quiz => ActiveGame::Quiz(QuizMachine::new(
                self.content
                    .as_ref()
                    .map(|c| c.questions.clone())
                    .unwrap_or_default(),
            )),
            GameKind::TypeQuest => ActiveGame::TypeQuest(CombatMachine::new(
                self.config.combat,
                self.config.combat.difficulty,
                self.rng.gen(),
            )),
            GameKind::WordWrestle => ActiveGame::WordWrestle(TugOfWarMachine::new(
                self.config.tug_of_war,
                self.rng.gen(),
            )),
            GameKind::Rhyme => ActiveGame::Rhyme(FallingWordMachine::new(
                self.config.falling_words,
                &mut self.rng,
            )),
            GameKind::Syllable => {
                ActiveGame::Syllable(SyllableSlicerMachine::new(self.syllable_words()))
            }
        }
    }

    /// The topic word followed by a couple of curated words.
    fn syllable_words(&mut self) -> Vec<SyllableAnalysis> {
        let mut words: Vec<SyllableAnalysis> = self
            .content
            .as_ref()
            .map(|c| c.syllables.clone())
            .into_iter()
            .collect();
        let curated: Vec<&str> = curated_words().collect();
        words.extend(
            curated
                .choose_multiple(&mut self.rng, CURATED_SYLLABLE_WORDS)
                .map(|w| analyze(w)),
        );
        words
    }
}
