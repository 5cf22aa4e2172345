//! Mirror-glyph distractors for the letter-choice spelling game.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

/// Left, right and bottom reflections of a character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MirrorGlyphSet {
    pub base: String,
    pub variants: [String; 3],
}

impl MirrorGlyphSet {
    pub fn is_self_symmetric(&self) -> bool {
        self.variants.iter().all(|v| *v == self.base)
    }
}

const MIRROR_TABLE: [[&str; 3]; 26] = [
    ["∀", "A", "ɐ"],
    ["ᗺ", "B", "𐐒"],
    ["Ↄ", "C", "ɔ"],
    ["ꓷ", "D", "◖"],
    ["Ǝ", "E", "ɘ"],
    ["ᖵ", "F", "Ⅎ"],
    ["⅁", "G", "ɓ"],
    ["H", "H", "H"],
    ["I", "I", "I"],
    ["ᒐ", "J", "ſ"],
    ["ꓘ", "K", "ʞ"],
    ["⅃", "L", "⅂"],
    ["W", "M", "ɯ"],
    ["И", "N", "ᴎ"],
    ["O", "O", "O"],
    ["Ԁ", "P", "ρ"],
    ["Ϙ", "Q", "Ọ"],
    ["ꓤ", "R", "Я"],
    ["Ƨ", "S", "ƨ"],
    ["⊥", "T", "┴"],
    ["Ս", "U", "∩"],
    ["Λ", "V", "⋁"],
    ["M", "W", "w"],
    ["X", "X", "X"],
    ["⅄", "Y", "ʎ"],
    ["Ƹ", "Z", "ɀ"],
];

/// Mirror variants of `c`. ASCII letters are looked up uppercase;
/// anything outside A–Z maps to three copies of itself.
pub fn mirror_variants(c: char) -> MirrorGlyphSet {
    let upper = c.to_ascii_uppercase();
    let variants = if upper.is_ascii_uppercase() {
        let row = MIRROR_TABLE[(upper as u8 - b'A') as usize];
        row.map(String::from)
    } else {
        let same = upper.to_string();
        [same.clone(), same.clone(), same]
    };
    MirrorGlyphSet {
        base: upper.to_string(),
        variants,
    }
}

/// The character plus its three variants, shuffled.
///
/// Self-symmetric letters (H, I, O, X) yield four identical options.
pub fn mirror_options(c: char, rng: &mut impl Rng) -> Vec<String> {
    let set = mirror_variants(c);
    let mut options = Vec::with_capacity(4);
    options.push(set.base);
    options.extend(set.variants);
    options.shuffle(rng);
    options
}
