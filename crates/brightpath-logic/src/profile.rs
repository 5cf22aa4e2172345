//! Learner profile and its learning-support category.
//!
//! The profile is read once at session start from a flat JSON record
//! (`{identifier, name, age, category}`) and never mutated afterwards.
//! An unrecognized or missing category is not an error: it resolves to
//! [`ProfileCategory::None`], the default catalog entry.
//!
//! ```
//! use brightpath_logic::profile::{LearnerProfile, ProfileCategory};
//!
//! let json = r#"{"identifier":"u1","name":"Ada","age":8,"category":"dyslexia"}"#;
//! let profile = LearnerProfile::from_json(json).unwrap();
//! assert_eq!(profile.category, ProfileCategory::Dyslexia);
//! ```

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use crate::error::ProfileError;

/// Accessibility / learning-support classification driving the game sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum ProfileCategory {
    Adhd,
    Dyslexia,
    Visual,
    Autism,
    #[default]
    None,
    Other,
}

impl ProfileCategory {
    pub const ALL: [ProfileCategory; 6] = [
        ProfileCategory::Adhd,
        ProfileCategory::Dyslexia,
        ProfileCategory::Visual,
        ProfileCategory::Autism,
        ProfileCategory::None,
        ProfileCategory::Other,
    ];

    /// Parse a stored category label. Unknown labels fall back to `None`.
    pub fn parse(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "adhd" => Self::Adhd,
            "dyslexia" => Self::Dyslexia,
            "visual" => Self::Visual,
            "autism" => Self::Autism,
            "none" => Self::None,
            "other" => Self::Other,
            unknown => {
                log::warn!("unrecognized profile category '{unknown}', using None");
                Self::None
            }
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Adhd => "ADHD",
            Self::Dyslexia => "Dyslexia",
            Self::Visual => "Visual",
            Self::Autism => "Autism",
            Self::None => "None",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for ProfileCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl<'de> Deserialize<'de> for ProfileCategory {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match serde_json::Value::deserialize(deserializer)? {
            serde_json::Value::String(label) => Ok(Self::parse(&label)),
            serde_json::Value::Null => Ok(Self::None),
            other => {
                log::warn!("non-string profile category {other}, using None");
                Ok(Self::None)
            }
        }
    }
}

/// Persisted learner record, read-only for the whole session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearnerProfile {
    pub identifier: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub age: Option<u8>,
    #[serde(default)]
    pub category: ProfileCategory,
}

impl LearnerProfile {
    pub fn new(identifier: impl Into<String>, category: ProfileCategory) -> Self {
        Self {
            identifier: identifier.into(),
            name: String::new(),
            age: None,
            category,
        }
    }

    pub fn from_json(json: &str) -> Result<Self, ProfileError> {
        Ok(serde_json::from_str(json)?)
    }
}
