//! Syllable analysis for the syllable slicer.
//!
//! Curated words come back verbatim from a lookup table. Anything else is
//! segmented by a vowel-run heuristic: each fragment is a run of
//! consonants, then vowels, then at most one consonant that does not start
//! the next syllable. Fragments always concatenate back to the input.

use serde::{Deserialize, Serialize};

const TION_NOTE: &str = "Detected '-tion' ending (sounds like 'shun').";
const TURE_NOTE: &str = "Detected '-ture' ending (sounds like 'cher').";
const SILENT_B_NOTE: &str = "Detected silent 'b' after 'm' at the end.";
const SILENT_K_NOTE: &str = "Detected silent 'k' before 'n' at the start.";
const BEST_GUESS_NOTE: &str = "Syllables are a best guess based on vowel sounds.";
const SINGLE_NOTE: &str = "This is a single-syllable word.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyllableAnalysis {
    pub word: String,
    pub syllables: Vec<String>,
    /// One pronunciation fragment per syllable.
    pub pronunciations: Vec<String>,
    pub stress: Option<usize>,
    pub rule: String,
    #[serde(default)]
    pub silent_letters: Vec<char>,
}

impl SyllableAnalysis {
    fn single(word: &str) -> Self {
        Self {
            word: word.to_string(),
            syllables: vec![word.to_string()],
            pronunciations: vec![word.to_string()],
            stress: Some(0),
            rule: SINGLE_NOTE.to_string(),
            silent_letters: Vec::new(),
        }
    }

    /// The syllables joined back together.
    pub fn joined(&self) -> String {
        self.syllables.concat()
    }

    /// Display form with hyphens, e.g. `ba-na-na`.
    pub fn hyphenated(&self) -> String {
        self.syllables.join("-")
    }
}

struct CuratedWord {
    word: &'static str,
    syllables: &'static [&'static str],
    pronunciations: &'static [&'static str],
    stress: usize,
    rule: &'static str,
    silent: &'static [char],
}

impl CuratedWord {
    fn to_analysis(&self) -> SyllableAnalysis {
        SyllableAnalysis {
            word: self.word.to_string(),
            syllables: self.syllables.iter().map(|s| s.to_string()).collect(),
            pronunciations: self.pronunciations.iter().map(|s| s.to_string()).collect(),
            stress: Some(self.stress),
            rule: self.rule.to_string(),
            silent_letters: self.silent.to_vec(),
        }
    }
}

const fn curated(
    word: &'static str,
    syllables: &'static [&'static str],
    pronunciations: &'static [&'static str],
    stress: usize,
    rule: &'static str,
    silent: &'static [char],
) -> CuratedWord {
    CuratedWord {
        word,
        syllables,
        pronunciations,
        stress,
        rule,
        silent,
    }
}

const CURATED: &[CuratedWord] = &[
    curated(
        "banana",
        &["ba", "na", "na"],
        &["buh", "nan", "uh"],
        1,
        "Often said with a short 'a' in the middle, like buh-NAN-uh.",
        &[],
    ),
    curated(
        "potato",
        &["po", "ta", "to"],
        &["puh", "tay", "toe"],
        1,
        "Each vowel sound often forms a syllable.",
        &[],
    ),
    curated(
        "carrot",
        &["car", "rot"],
        &["care", "rot"],
        0,
        "Split between two middle consonants.",
        &[],
    ),
    curated(
        "cinnamon",
        &["cin", "na", "mon"],
        &["sin", "nuh", "mon"],
        0,
        "Words can have many syllables.",
        &[],
    ),
    curated(
        "international",
        &["in", "ter", "na", "tion", "al"],
        &["in", "ter", "nay", "shun", "ul"],
        2,
        "The 'na' sounds like in 'nation', and 'tion' becomes 'shun'.",
        &[],
    ),
    curated(
        "creature",
        &["crea", "ture"],
        &["kree", "cher"],
        0,
        "The ending 'ture' sounds like 'cher'.",
        &[],
    ),
    curated(
        "vision",
        &["vi", "sion"],
        &["vi", "zhun"],
        0,
        "The ending 'sion' can sound like 'zhun'.",
        &[],
    ),
    curated(
        "elephant",
        &["el", "e", "phant"],
        &["el", "uh", "fant"],
        0,
        "The letters 'ph' sound like 'f'.",
        &[],
    ),
    curated(
        "giraffe",
        &["gi", "raffe"],
        &["jih", "raff"],
        1,
        "Sometimes 'g' sounds like 'j'.",
        &[],
    ),
    curated(
        "bamboo",
        &["bam", "boo"],
        &["bam", "boo"],
        1,
        "Split between double consonants.",
        &[],
    ),
    curated(
        "comprehension",
        &["com", "pre", "hen", "sion"],
        &["com", "pre", "hen", "shun"],
        2,
        "Another word with the 'sion' -> 'shun' sound.",
        &[],
    ),
    curated(
        "adventure",
        &["ad", "ven", "ture"],
        &["ad", "ven", "cher"],
        1,
        "Another 'ture' -> 'cher' word!",
        &[],
    ),
    curated(
        "anemone",
        &["a", "nem", "o", "ne"],
        &["uh", "nem", "uh", "nee"],
        1,
        "This word has four syllables, and the 'o' has a soft 'uh' sound.",
        &[],
    ),
    curated(
        "mischievous",
        &["mis", "chie", "vous"],
        &["mis", "chuh", "vus"],
        0,
        "It's three syllables, not four! The 'ie' makes one sound.",
        &[],
    ),
    curated(
        "bouquet",
        &["bou", "quet"],
        &["boo", "kay"],
        1,
        "The 'qu' sounds like 'k' and the 't' is silent.",
        &['t'],
    ),
    curated(
        "colonel",
        &["colo", "nel"],
        &["ker", "nul"],
        0,
        "Looks strange! This word is pronounced just like 'kernel'.",
        &['l', 'o', 'o'],
    ),
    curated(
        "yacht",
        &["yacht"],
        &["yot"],
        0,
        "A single syllable, where the 'ch' is silent.",
        &['c', 'h'],
    ),
    curated(
        "indict",
        &["in", "dict"],
        &["in", "dite"],
        1,
        "The 'c' is silent, making it sound like 'in-dite'.",
        &['c'],
    ),
    curated(
        "rhinoceros",
        &["rhi", "noc", "er", "os"],
        &["rye", "nah", "sir", "us"],
        1,
        "The 'h' is silent and the 'c' sounds like 's'.",
        &['h'],
    ),
    curated(
        "thumb",
        &["thumb"],
        &["thum"],
        0,
        "A single syllable where the final 'b' is silent.",
        &['b'],
    ),
    curated(
        "pronunciation",
        &["pro", "nun", "ci", "a", "tion"],
        &["pro", "nun", "see", "ay", "shun"],
        3,
        "A long word where 'ci' sounds like 'see' and 'tion' sounds like 'shun'.",
        &[],
    ),
    curated(
        "bourgeois",
        &["bour", "geois"],
        &["boor", "zhwah"],
        1,
        "A French word where 'geois' sounds like 'zhwah' and the 's' is silent.",
        &['s'],
    ),
    curated(
        "ballet",
        &["bal", "let"],
        &["ba", "lay"],
        1,
        "From French, the first syllable is short and the final 't' is silent.",
        &['t'],
    ),
];

/// Words with a hand-written analysis.
pub fn curated_words() -> impl Iterator<Item = &'static str> {
    CURATED.iter().map(|c| c.word)
}

fn is_vowel(c: char) -> bool {
    matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u' | 'y')
}

fn vowel_runs(chars: &[char]) -> usize {
    chars
        .iter()
        .enumerate()
        .filter(|&(i, &c)| is_vowel(c) && (i == 0 || !is_vowel(chars[i - 1])))
        .count()
}

/// Split into consonants + vowels + optional closing consonant fragments.
fn segment(chars: &[char]) -> Vec<String> {
    let mut fragments: Vec<String> = Vec::new();
    let mut start = 0;
    while start < chars.len() {
        let mut i = start;
        while i < chars.len() && !is_vowel(chars[i]) {
            i += 1;
        }
        if i == chars.len() {
            // consonant tail joins the last fragment
            let tail: String = chars[start..].iter().collect();
            match fragments.last_mut() {
                Some(last) => last.push_str(&tail),
                None => fragments.push(tail),
            }
            break;
        }
        while i < chars.len() && is_vowel(chars[i]) {
            i += 1;
        }
        if i < chars.len() && chars.get(i + 1).map_or(true, |&next| !is_vowel(next)) {
            i += 1;
        }
        fragments.push(chars[start..i].iter().collect());
        start = i;
    }
    fragments
}

/// Analyze a word: curated entry if one exists, heuristic otherwise.
pub fn analyze(word: &str) -> SyllableAnalysis {
    if let Some(curated) = CURATED.iter().find(|c| c.word == word) {
        return curated.to_analysis();
    }

    let chars: Vec<char> = word.chars().collect();
    if chars.len() <= 3 || vowel_runs(&chars) <= 1 {
        return SyllableAnalysis::single(word);
    }

    let syllables = segment(&chars);
    let mut notes = Vec::new();
    let pronunciations = syllables
        .iter()
        .map(|syllable| {
            let lower = syllable.to_ascii_lowercase();
            if let Some(stem) = lower.strip_suffix("tion") {
                notes.push(TION_NOTE);
                format!("{}shun", &syllable[..stem.len()])
            } else if let Some(stem) = lower.strip_suffix("ture") {
                notes.push(TURE_NOTE);
                format!("{}cher", &syllable[..stem.len()])
            } else {
                syllable.clone()
            }
        })
        .collect();

    let lower = word.to_ascii_lowercase();
    let mut silent_letters = Vec::new();
    if lower.ends_with("mb") {
        silent_letters.push('b');
        notes.push(SILENT_B_NOTE);
    }
    if lower.starts_with("kn") {
        silent_letters.push('k');
        notes.push(SILENT_K_NOTE);
    }

    let rule = if notes.is_empty() {
        BEST_GUESS_NOTE.to_string()
    } else {
        notes.join(" ")
    };

    SyllableAnalysis {
        word: word.to_string(),
        syllables,
        pronunciations,
        stress: Some(0),
        rule,
        silent_letters,
    }
}
