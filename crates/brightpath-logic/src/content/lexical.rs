//! Synonym / antonym question generator for the tug-of-war game.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::question::QuestionRecord;

/// Which relation a question asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Relation {
    Synonym,
    Antonym,
}

impl Relation {
    pub fn label(self) -> &'static str {
        match self {
            Relation::Synonym => "synonym",
            Relation::Antonym => "antonym",
        }
    }

    fn article(self) -> &'static str {
        match self {
            Relation::Synonym => "a",
            Relation::Antonym => "an",
        }
    }
}

/// A headword with its related words.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexicalEntry {
    pub word: &'static str,
    pub synonyms: [&'static str; 3],
    pub antonyms: [&'static str; 3],
}

impl LexicalEntry {
    pub fn related(&self, relation: Relation) -> &[&'static str; 3] {
        match relation {
            Relation::Synonym => &self.synonyms,
            Relation::Antonym => &self.antonyms,
        }
    }

    /// Whether `candidate` is the headword or one of its related words.
    fn is_related(&self, candidate: &str) -> bool {
        candidate == self.word
            || self.synonyms.contains(&candidate)
            || self.antonyms.contains(&candidate)
    }
}

const fn entry(
    word: &'static str,
    synonyms: [&'static str; 3],
    antonyms: [&'static str; 3],
) -> LexicalEntry {
    LexicalEntry {
        word,
        synonyms,
        antonyms,
    }
}

pub const WORD_BANK: &[LexicalEntry] = &[
    entry("happy", ["joyful", "cheerful", "elated"], ["sad", "unhappy", "miserable"]),
    entry("strong", ["powerful", "mighty", "sturdy"], ["weak", "frail", "feeble"]),
    entry("fast", ["quick", "rapid", "swift"], ["slow", "leisurely", "sluggish"]),
    entry("smart", ["intelligent", "clever", "bright"], ["dull", "unintelligent", "foolish"]),
    entry("brave", ["courageous", "fearless", "bold"], ["cowardly", "fearful", "timid"]),
    entry("bright", ["shining", "luminous", "radiant"], ["dim", "dark", "dull"]),
    entry("calm", ["peaceful", "serene", "tranquil"], ["agitated", "excited", "chaotic"]),
    entry("kind", ["considerate", "gentle", "thoughtful"], ["unkind", "cruel", "mean"]),
    entry("large", ["big", "huge", "enormous"], ["small", "tiny", "little"]),
    entry("old", ["ancient", "aged", "mature"], ["new", "young", "modern"]),
    entry("rich", ["wealthy", "affluent", "prosperous"], ["poor", "needy", "broke"]),
    entry("angry", ["furious", "irate", "enraged"], ["calm", "pleased", "happy"]),
    entry("beautiful", ["gorgeous", "lovely", "stunning"], ["ugly", "unattractive", "hideous"]),
    entry("good", ["excellent", "fine", "wonderful"], ["bad", "terrible", "awful"]),
    entry("new", ["modern", "recent", "fresh"], ["old", "ancient", "antique"]),
    entry(
        "interesting",
        ["fascinating", "engaging", "captivating"],
        ["boring", "dull", "uninteresting"],
    ),
    entry("scared", ["afraid", "frightened", "terrified"], ["brave", "courageous", "confident"]),
    entry("funny", ["humorous", "comical", "hilarious"], ["serious", "somber", "grave"]),
    entry("quiet", ["silent", "hushed", "still"], ["loud", "noisy", "boisterous"]),
    entry("clean", ["spotless", "pure", "neat"], ["dirty", "soiled", "messy"]),
    entry(
        "easy",
        ["simple", "effortless", "straightforward"],
        ["hard", "difficult", "challenging"],
    ),
    entry("hot", ["burning", "scalding", "fiery"], ["cold", "chilly", "icy"]),
    entry("lazy", ["idle", "lethargic", "inactive"], ["busy", "active", "energetic"]),
    entry("polite", ["courteous", "respectful", "civil"], ["rude", "impolite", "discourteous"]),
    entry("difficult", ["hard", "challenging", "tough"], ["easy", "simple", "effortless"]),
    entry("huge", ["enormous", "giant", "massive"], ["tiny", "small", "minuscule"]),
    entry("create", ["build", "make", "construct"], ["destroy", "demolish", "ruin"]),
    entry("love", ["adore", "cherish", "treasure"], ["hate", "despise", "detest"]),
    entry("begin", ["start", "commence", "initiate"], ["end", "finish", "conclude"]),
    entry("wet", ["damp", "soaked", "soggy"], ["dry", "arid", "parched"]),
    entry("smooth", ["even", "flat", "sleek"], ["rough", "bumpy", "coarse"]),
    entry("true", ["correct", "right", "accurate"], ["false", "wrong", "incorrect"]),
    entry("dark", ["gloomy", "murky", "shadowy"], ["bright", "light", "luminous"]),
    entry("sad", ["unhappy", "sorrowful", "dejected"], ["happy", "joyful", "cheerful"]),
    entry("weak", ["frail", "feeble", "puny"], ["strong", "powerful", "mighty"]),
];

const DISTRACTORS: usize = 2;

fn pick_relation(rng: &mut impl Rng) -> Relation {
    if rng.gen_bool(0.5) {
        Relation::Synonym
    } else {
        Relation::Antonym
    }
}

/// Generates lexical-relation questions without repeating the previous headword.
#[derive(Debug, Clone, Default)]
pub struct LexicalRelationGenerator {
    last_word: Option<&'static str>,
}

impl LexicalRelationGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Headword of the most recent question.
    pub fn last_word(&self) -> Option<&'static str> {
        self.last_word
    }

    pub fn generate(&mut self, rng: &mut impl Rng) -> QuestionRecord {
        let headword = loop {
            let candidate = &WORD_BANK[rng.gen_range(0..WORD_BANK.len())];
            if Some(candidate.word) != self.last_word {
                break candidate;
            }
        };
        self.last_word = Some(headword.word);

        let relation = pick_relation(rng);
        let answer = headword.related(relation)[rng.gen_range(0..3)];

        let mut options = vec![answer];
        while options.len() < DISTRACTORS + 1 {
            let other = &WORD_BANK[rng.gen_range(0..WORD_BANK.len())];
            if other.word == headword.word {
                continue;
            }
            let candidate = other.related(pick_relation(rng))[rng.gen_range(0..3)];
            if !headword.is_related(candidate) && !options.contains(&candidate) {
                options.push(candidate);
            }
        }
        options.shuffle(rng);

        QuestionRecord::multiple_choice(
            format!(
                "What is {} {} for \"{}\"?",
                relation.article(),
                relation.label(),
                headword.word
            ),
            answer,
            options.into_iter().map(String::from).collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn headword_of(record: &QuestionRecord) -> &LexicalEntry {
        WORD_BANK
            .iter()
            .find(|e| record.prompt.ends_with(&format!("\"{}\"?", e.word)))
            .expect("prompt names a headword")
    }

    #[test]
    fn test_bank_size() {
        assert_eq!(WORD_BANK.len(), 35);
    }

    #[test]
    fn test_options_hold_answer_once() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut generator = LexicalRelationGenerator::new();
        for _ in 0..500 {
            let record = generator.generate(&mut rng);
            assert_eq!(record.options.len(), 3);
            assert!(record.options_are_valid(), "{record:?}");
        }
    }

    #[test]
    fn test_distractors_are_unrelated() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut generator = LexicalRelationGenerator::new();
        for _ in 0..1000 {
            let record = generator.generate(&mut rng);
            let headword = headword_of(&record);
            let answer = record.answer.to_string();
            for option in record.options.iter().filter(|o| **o != answer) {
                assert!(!headword.is_related(option), "{option} relates to {}", headword.word);
            }
        }
    }

    #[test]
    fn test_every_headword_is_eventually_asked() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut generator = LexicalRelationGenerator::new();
        let mut seen = std::collections::HashSet::new();
        for _ in 0..2000 {
            generator.generate(&mut rng);
            seen.extend(generator.last_word());
        }
        assert_eq!(seen.len(), WORD_BANK.len());
    }

    #[test]
    fn test_no_back_to_back_headword() {
        let mut rng = StdRng::seed_from_u64(77);
        let mut generator = LexicalRelationGenerator::new();
        let mut previous = None;
        for _ in 0..300 {
            generator.generate(&mut rng);
            assert_ne!(generator.last_word(), previous);
            previous = generator.last_word();
        }
    }

    #[test]
    fn test_answer_matches_relation() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut generator = LexicalRelationGenerator::new();
        for _ in 0..200 {
            let record = generator.generate(&mut rng);
            let headword = headword_of(&record);
            let answer = record.answer.to_string();
            let relation = if record.prompt.starts_with("What is a synonym") {
                Relation::Synonym
            } else {
                Relation::Antonym
            };
            assert!(headword.related(relation).contains(&answer.as_str()));
        }
    }
}
