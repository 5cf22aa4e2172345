//! Per-category palette names for renderers. Nothing in the core reads this.

use serde::Serialize;

use crate::profile::ProfileCategory;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThemeTokens {
    pub accent: &'static str,
    /// Gradient from the accent to this palette.
    pub gradient_to: &'static str,
    pub text: String,
    pub background: String,
}

fn tokens(accent: &'static str, gradient_to: &'static str) -> ThemeTokens {
    ThemeTokens {
        accent,
        gradient_to,
        text: format!("{accent}-900"),
        background: format!("{accent}-50"),
    }
}

pub fn theme_for(category: ProfileCategory) -> ThemeTokens {
    match category {
        ProfileCategory::Adhd => tokens("emerald", "teal"),
        ProfileCategory::Dyslexia => tokens("blue", "indigo"),
        ProfileCategory::Visual => tokens("yellow", "orange"),
        ProfileCategory::Autism => tokens("slate", "gray"),
        ProfileCategory::None => tokens("indigo", "purple"),
        ProfileCategory::Other => tokens("violet", "purple"),
    }
}
