//! Rhyme rounds for the falling-word catch game.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A target word, the words that rhyme with it and some that do not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RhymeSet {
    pub word: &'static str,
    pub rhymes: &'static [&'static str],
    pub wrong: [&'static str; 4],
}

pub const RHYME_SETS: &[RhymeSet] = &[
    RhymeSet {
        word: "cat",
        rhymes: &["hat", "bat", "mat", "rat"],
        wrong: ["dog", "car", "sun", "pen"],
    },
    RhymeSet {
        word: "sun",
        rhymes: &["run", "fun", "bun", "one"],
        wrong: ["moon", "star", "book", "sky"],
    },
    RhymeSet {
        word: "cake",
        rhymes: &["lake", "rake", "snake", "make"],
        wrong: ["pie", "fork", "cup", "eat"],
    },
    RhymeSet {
        word: "tree",
        rhymes: &["bee", "see", "free", "three"],
        wrong: ["leaf", "bark", "root", "seed"],
    },
    RhymeSet {
        word: "ball",
        rhymes: &["call", "fall", "hall", "wall"],
        wrong: ["bat", "run", "bounce", "kick"],
    },
    RhymeSet {
        word: "book",
        rhymes: &["look", "cook", "hook", "took"],
        wrong: ["read", "pen", "page", "write"],
    },
    RhymeSet {
        word: "star",
        rhymes: &["car", "far", "jar", "bar"],
        wrong: ["moon", "sky", "night", "light"],
    },
    RhymeSet {
        word: "mouse",
        rhymes: &["house", "blouse"],
        wrong: ["cheese", "trap", "cat", "tail"],
    },
    RhymeSet {
        word: "dog",
        rhymes: &["log", "fog", "jog", "hog"],
        wrong: ["cat", "bark", "leash", "bone"],
    },
    RhymeSet {
        word: "pen",
        rhymes: &["hen", "ten", "men", "den"],
        wrong: ["pencil", "ink", "write", "paper"],
    },
    RhymeSet {
        word: "pig",
        rhymes: &["wig", "dig", "big", "fig"],
        wrong: ["oink", "mud", "farm", "cow"],
    },
    RhymeSet {
        word: "bug",
        rhymes: &["rug", "hug", "mug", "jug"],
        wrong: ["insect", "fly", "ant", "crawl"],
    },
    RhymeSet {
        word: "duck",
        rhymes: &["truck", "luck", "stuck", "cluck"],
        wrong: ["quack", "pond", "feather", "bird"],
    },
    RhymeSet {
        word: "fox",
        rhymes: &["box", "socks", "rocks"],
        wrong: ["orange", "tail", "den", "sly"],
    },
];

/// One round: find the word that rhymes with `word` among `options`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RhymeRound {
    pub word: String,
    pub rhyme: String,
    pub options: Vec<String>,
}

/// Pick a set and build a shuffled round with `option_count` options
/// (one rhyme plus up to four wrong words).
pub fn generate_round(option_count: usize, rng: &mut impl Rng) -> RhymeRound {
    let set = &RHYME_SETS[rng.gen_range(0..RHYME_SETS.len())];
    let rhyme = set.rhymes[rng.gen_range(0..set.rhymes.len())];
    let wrong_count = option_count.saturating_sub(1).clamp(1, set.wrong.len());
    let mut options: Vec<String> = set
        .wrong
        .choose_multiple(rng, wrong_count)
        .map(|w| w.to_string())
        .collect();
    options.push(rhyme.to_string());
    options.shuffle(rng);
    RhymeRound {
        word: set.word.to_string(),
        rhyme: rhyme.to_string(),
        options,
    }
}
