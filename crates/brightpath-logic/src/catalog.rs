//! Profile game catalog: which mini-games a learner plays, in which order.
//!
//! A closed table with one entry per [`ProfileCategory`]. Each entry lists
//! a guided sublist (topic-driven games) followed by a practice sublist
//! (fixed skill drills). The lookup is pure and deterministic.

use serde::Serialize;
use std::fmt;

use crate::profile::ProfileCategory;

/// The mini-games known to the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum GameKind {
    Spelling,
    Drawing,
    Gallery,
    Quiz,
    TypeQuest,
    WordWrestle,
    Rhyme,
    Syllable,
}

impl GameKind {
    pub const ALL: [GameKind; 8] = [
        GameKind::Spelling,
        GameKind::Drawing,
        GameKind::Gallery,
        GameKind::Quiz,
        GameKind::TypeQuest,
        GameKind::WordWrestle,
        GameKind::Rhyme,
        GameKind::Syllable,
    ];

    /// Stable descriptor id.
    pub fn id(self) -> &'static str {
        match self {
            Self::Spelling => "spelling",
            Self::Drawing => "drawing",
            Self::Gallery => "gallery",
            Self::Quiz => "quiz",
            Self::TypeQuest => "typequest",
            Self::WordWrestle => "wordwrestle",
            Self::Rhyme => "rhyme",
            Self::Syllable => "syllable",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.id() == id)
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Spelling => "Spelling Game",
            Self::Drawing => "Drawing Game",
            Self::Gallery => "Image Gallery Game",
            Self::Quiz => "General Knowledge Game",
            Self::TypeQuest => "TypeQuest",
            Self::WordWrestle => "Word Wrestle",
            Self::Rhyme => "Rhyming Words",
            Self::Syllable => "Syllable Splitter",
        }
    }

    pub fn content(self) -> ContentKind {
        match self {
            Self::Spelling => ContentKind::MirrorLetters,
            Self::Drawing => ContentKind::Handwriting,
            Self::Gallery => ContentKind::TopicImages,
            Self::Quiz => ContentKind::TopicQuiz,
            Self::TypeQuest => ContentKind::Arithmetic,
            Self::WordWrestle => ContentKind::LexicalRelations,
            Self::Rhyme => ContentKind::Rhymes,
            Self::Syllable => ContentKind::Syllables,
        }
    }
}

impl fmt::Display for GameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Which half of the sequence a game belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Phase {
    Guided,
    Practice,
}

/// What kind of content a game consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ContentKind {
    MirrorLetters,
    Handwriting,
    TopicImages,
    TopicQuiz,
    Arithmetic,
    LexicalRelations,
    Rhymes,
    Syllables,
}

/// One catalog entry in a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameDescriptor {
    pub kind: GameKind,
    pub name: &'static str,
    pub phase: Phase,
    pub content: ContentKind,
}

impl GameDescriptor {
    fn new(kind: GameKind, phase: Phase) -> Self {
        Self {
            kind,
            name: kind.display_name(),
            phase,
            content: kind.content(),
        }
    }

    pub fn id(&self) -> &'static str {
        self.kind.id()
    }
}

/// Ordered games for one profile category: guided games first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSequence {
    pub category: ProfileCategory,
    games: Vec<GameDescriptor>,
    guided_len: usize,
}

impl GameSequence {
    pub fn games(&self) -> &[GameDescriptor] {
        &self.games
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    /// Index of the first practice game (equals `len()` with no practice games).
    pub fn guided_len(&self) -> usize {
        self.guided_len
    }

    pub fn get(&self, index: usize) -> Option<&GameDescriptor> {
        self.games.get(index)
    }

    pub fn guided(&self) -> &[GameDescriptor] {
        &self.games[..self.guided_len]
    }

    pub fn practice(&self) -> &[GameDescriptor] {
        &self.games[self.guided_len..]
    }
}

const NO_PRACTICE: &[GameKind] = &[];
const ADHD_GUIDED: &[GameKind] = &[GameKind::Gallery, GameKind::Quiz];
const ADHD_PRACTICE: &[GameKind] = &[GameKind::TypeQuest, GameKind::WordWrestle];
const DYSLEXIA_GUIDED: &[GameKind] = &[GameKind::Spelling, GameKind::Drawing, GameKind::Gallery];
const DYSLEXIA_PRACTICE: &[GameKind] = &[GameKind::Rhyme, GameKind::Syllable];
const VISUAL_GUIDED: &[GameKind] = &[GameKind::Quiz];
const AUTISM_GUIDED: &[GameKind] = &[GameKind::Drawing, GameKind::Quiz];
const OTHER_GUIDED: &[GameKind] = &[GameKind::Gallery, GameKind::Quiz, GameKind::Drawing];
const FULL_GUIDED: &[GameKind] = &[
    GameKind::Spelling,
    GameKind::Drawing,
    GameKind::Gallery,
    GameKind::Quiz,
];
const FULL_PRACTICE: &[GameKind] = &[
    GameKind::TypeQuest,
    GameKind::WordWrestle,
    GameKind::Rhyme,
    GameKind::Syllable,
];

fn table_entry(category: ProfileCategory) -> (&'static [GameKind], &'static [GameKind]) {
    match category {
        ProfileCategory::Adhd => (ADHD_GUIDED, ADHD_PRACTICE),
        ProfileCategory::Dyslexia => (DYSLEXIA_GUIDED, DYSLEXIA_PRACTICE),
        ProfileCategory::Visual => (VISUAL_GUIDED, NO_PRACTICE),
        ProfileCategory::Autism => (AUTISM_GUIDED, NO_PRACTICE),
        ProfileCategory::None => (FULL_GUIDED, FULL_PRACTICE),
        ProfileCategory::Other => (OTHER_GUIDED, NO_PRACTICE),
    }
}

/// Build the game sequence for a profile category.
pub fn sequence_for(category: ProfileCategory) -> GameSequence {
    let (guided, practice) = table_entry(category);
    let games = guided
        .iter()
        .map(|&kind| GameDescriptor::new(kind, Phase::Guided))
        .chain(
            practice
                .iter()
                .map(|&kind| GameDescriptor::new(kind, Phase::Practice)),
        )
        .collect();
    GameSequence {
        category,
        games,
        guided_len: guided.len(),
    }
}

/// Build the sequence from a raw stored label; unknown labels get the default entry.
pub fn sequence_for_label(label: &str) -> GameSequence {
    sequence_for(ProfileCategory::parse(label))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn ids(sequence: &GameSequence) -> Vec<&'static str> {
        sequence.games().iter().map(|g| g.id()).collect()
    }

    #[test]
    fn test_adhd_sequence() {
        let seq = sequence_for(ProfileCategory::Adhd);
        assert_eq!(ids(&seq), ["gallery", "quiz", "typequest", "wordwrestle"]);
        assert_eq!(seq.guided_len(), 2);
        assert!(seq.guided().iter().all(|g| g.phase == Phase::Guided));
        assert!(seq.practice().iter().all(|g| g.phase == Phase::Practice));
    }

    #[test]
    fn test_dyslexia_sequence() {
        let seq = sequence_for(ProfileCategory::Dyslexia);
        assert_eq!(
            ids(&seq),
            ["spelling", "drawing", "gallery", "rhyme", "syllable"]
        );
        assert_eq!(seq.guided_len(), 3);
    }

    #[test]
    fn test_visual_sequence() {
        let seq = sequence_for(ProfileCategory::Visual);
        assert_eq!(ids(&seq), ["quiz"]);
        assert_eq!(seq.guided_len(), 1);
        assert!(seq.practice().is_empty());
    }

    #[test]
    fn test_autism_sequence() {
        let seq = sequence_for(ProfileCategory::Autism);
        assert_eq!(ids(&seq), ["drawing", "quiz"]);
        assert_eq!(seq.guided_len(), 2);
        assert!(seq.practice().is_empty());
    }

    #[test]
    fn test_none_sequence_has_every_game() {
        let seq = sequence_for(ProfileCategory::None);
        assert_eq!(
            ids(&seq),
            [
                "spelling",
                "drawing",
                "gallery",
                "quiz",
                "typequest",
                "wordwrestle",
                "rhyme",
                "syllable"
            ]
        );
        assert_eq!(seq.guided_len(), 4);
        assert_eq!(seq.len(), GameKind::ALL.len());
    }

    #[test]
    fn test_other_sequence() {
        let seq = sequence_for(ProfileCategory::Other);
        assert_eq!(ids(&seq), ["gallery", "quiz", "drawing"]);
        assert_eq!(seq.guided_len(), 3);
        assert!(seq.practice().is_empty());
    }

    #[test]
    fn test_no_duplicate_ids_in_any_entry() {
        for category in ProfileCategory::ALL {
            let seq = sequence_for(category);
            let unique: HashSet<_> = seq.games().iter().map(|g| g.kind).collect();
            assert_eq!(unique.len(), seq.len(), "duplicates for {category}");
            assert!(!seq.is_empty());
        }
    }

    #[test]
    fn test_deterministic() {
        for category in ProfileCategory::ALL {
            assert_eq!(sequence_for(category), sequence_for(category));
        }
    }

    #[test]
    fn test_unknown_label_uses_default_entry() {
        let fallback = sequence_for_label("not-a-category");
        let none = sequence_for(ProfileCategory::None);
        assert_eq!(ids(&fallback), ids(&none));
    }

    #[test]
    fn test_descriptor_content_tags() {
        let seq = sequence_for(ProfileCategory::None);
        let typequest = seq
            .games()
            .iter()
            .find(|g| g.kind == GameKind::TypeQuest)
            .unwrap();
        assert_eq!(typequest.content, ContentKind::Arithmetic);
        assert_eq!(typequest.name, "TypeQuest");
    }

    #[test]
    fn test_id_round_trip() {
        for kind in GameKind::ALL {
            assert_eq!(GameKind::from_id(kind.id()), Some(kind));
        }
        assert_eq!(GameKind::from_id("chess"), None);
    }
}
