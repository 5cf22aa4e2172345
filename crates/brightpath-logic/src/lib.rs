//! Game sequencing and procedural content for BrightPath.
//!
//! This crate holds the learning-session core with no renderer, storage
//! or network stack. Functions take plain data and return results; the
//! two networked collaborators are described as request/response types and
//! driven by the host.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`catalog`] | Profile category to ordered guided/practice game list |
//! | [`collaborators`] | Handwriting and bulk-content wire types, response validation |
//! | [`config`] | Reward constants and per-game tuning, with validation |
//! | [`content`] | Arithmetic, lexical, phonetic, mirror-glyph and rhyme generators |
//! | [`error`] | Rejected operations, collaborator and content failures |
//! | [`games`] | Per-game state machines and the events they emit |
//! | [`profile`] | Learner profile record and category parsing |
//! | [`sequence`] | Sequence controller: progress, phase and score |
//! | [`session`] | Session wiring: input routing, timers, game activation |
//! | [`theme`] | Presentation palette per category (not read by the core) |
//! | [`timeline`] | Shared periodic timers owned by game activations |
//! | [`topic`] | Topic content from the collaborator or local fallback |

pub mod catalog;
pub mod collaborators;
pub mod config;
pub mod content;
pub mod error;
pub mod games;
pub mod profile;
pub mod sequence;
pub mod session;
pub mod theme;
pub mod timeline;
pub mod topic;
