//! Procedural content generators.
//!
//! Every generator is a synchronous function of its input and an RNG
//! supplied by the caller. Generated records are owned by whichever game
//! machine asked for them and are never mutated afterwards.

pub mod arithmetic;
pub mod lexical;
pub mod mirror;
pub mod phonetic;
pub mod question;
pub mod rhyme;

pub use arithmetic::{ArithmeticQuestion, Problem};
pub use lexical::LexicalRelationGenerator;
pub use mirror::{mirror_options, mirror_variants, MirrorGlyphSet};
pub use phonetic::{analyze, SyllableAnalysis};
pub use question::{Answer, Difficulty, QuestionRecord};
pub use rhyme::RhymeRound;
