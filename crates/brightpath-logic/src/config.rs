//! Engine configuration: reward constants and per-game tuning.
//!
//! All values have canonical defaults; a JSON file may override any
//! section. Validation collects every problem instead of stopping at the
//! first, so a configuration screen can show them all at once.
//!
//! ```
//! use brightpath_logic::config::{validate_config, EngineConfig};
//!
//! let config = EngineConfig::from_json(r#"{"rewards":{"guided":10,"practice":25}}"#).unwrap();
//! assert_eq!(config.rewards.practice, 25);
//! assert_eq!(config.combat.max_health, 100);
//! assert!(validate_config(&config).is_empty());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::Phase;
use crate::content::question::Difficulty;

/// Points added to the sequence score when a game is completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RewardConfig {
    pub guided: u32,
    pub practice: u32,
}

impl Default for RewardConfig {
    fn default() -> Self {
        Self {
            guided: 15,
            practice: 20,
        }
    }
}

impl RewardConfig {
    pub fn for_phase(&self, phase: Phase) -> u32 {
        match phase {
            Phase::Guided => self.guided,
            Phase::Practice => self.practice,
        }
    }
}

/// Timed combat quiz tuning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CombatConfig {
    /// Starting health of both the learner and the opponent.
    pub max_health: i32,
    /// Damage dealt to the opponent by a correct, in-time answer.
    pub actor_attack: i32,
    /// Damage dealt to the learner by a wrong answer or a timeout.
    pub opponent_attack: i32,
    pub round_seconds: u32,
    /// Arithmetic tier of the combat questions.
    pub difficulty: Difficulty,
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self {
            max_health: 100,
            actor_attack: 25,
            opponent_attack: 20,
            round_seconds: 15,
            difficulty: Difficulty::Easy,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TugOfWarConfig {
    pub threshold: i32,
}

impl Default for TugOfWarConfig {
    fn default() -> Self {
        Self { threshold: 10 }
    }
}

/// Falling-word catch tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FallingWordConfig {
    pub rounds: u32,
    pub options_per_round: usize,
    /// Pixels per tick at combo 0.
    pub base_speed: f32,
    /// Extra pixels per tick for each combo step.
    pub combo_speed: f32,
    pub tick_millis: u64,
    /// A word falling past this height wraps back to the top.
    pub lane_height: f32,
}

impl Default for FallingWordConfig {
    fn default() -> Self {
        Self {
            rounds: 10,
            options_per_round: 4,
            base_speed: 5.0,
            combo_speed: 0.5,
            tick_millis: 80,
            lane_height: 400.0,
        }
    }
}

/// Bulk content request defaults and local fallback sizing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    pub age_group: String,
    pub fallback_word_len: usize,
    pub fallback_quiz_len: usize,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            age_group: "7-11".to_string(),
            fallback_word_len: 8,
            fallback_quiz_len: 3,
        }
    }
}

/// Complete engine configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub rewards: RewardConfig,
    pub combat: CombatConfig,
    pub tug_of_war: TugOfWarConfig,
    pub falling_words: FallingWordConfig,
    pub content: ContentConfig,
}

impl EngineConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}

/// Configuration problems.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("configuration is not valid JSON: {0}")]
    Parse(String),
    #[error("practice reward {practice} must exceed guided reward {guided}")]
    RewardOrder { guided: u32, practice: u32 },
    #[error("{0} must be positive")]
    NotPositive(&'static str),
    #[error("falling words need at least two options per round, got {0}")]
    TooFewOptions(usize),
}

/// Validate a configuration. Returns an empty list when it is usable.
pub fn validate_config(config: &EngineConfig) -> Vec<ConfigError> {
    let mut errors = Vec::new();

    let rewards = config.rewards;
    if rewards.practice <= rewards.guided {
        errors.push(ConfigError::RewardOrder {
            guided: rewards.guided,
            practice: rewards.practice,
        });
    }

    let combat = config.combat;
    if combat.max_health <= 0 {
        errors.push(ConfigError::NotPositive("combat.max_health"));
    }
    if combat.actor_attack <= 0 {
        errors.push(ConfigError::NotPositive("combat.actor_attack"));
    }
    if combat.opponent_attack <= 0 {
        errors.push(ConfigError::NotPositive("combat.opponent_attack"));
    }
    if combat.round_seconds == 0 {
        errors.push(ConfigError::NotPositive("combat.round_seconds"));
    }

    if config.tug_of_war.threshold <= 0 {
        errors.push(ConfigError::NotPositive("tug_of_war.threshold"));
    }

    let falling = config.falling_words;
    if falling.rounds == 0 {
        errors.push(ConfigError::NotPositive("falling_words.rounds"));
    }
    if falling.options_per_round < 2 {
        errors.push(ConfigError::TooFewOptions(falling.options_per_round));
    }
    if falling.tick_millis == 0 {
        errors.push(ConfigError::NotPositive("falling_words.tick_millis"));
    }
    if falling.base_speed <= 0.0 {
        errors.push(ConfigError::NotPositive("falling_words.base_speed"));
    }
    if falling.combo_speed < 0.0 {
        errors.push(ConfigError::NotPositive("falling_words.combo_speed"));
    }

    if config.content.fallback_word_len == 0 {
        errors.push(ConfigError::NotPositive("content.fallback_word_len"));
    }

    errors
}
