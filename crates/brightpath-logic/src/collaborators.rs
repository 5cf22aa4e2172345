//! Wire contracts of the two networked collaborators.
//!
//! Neither call is made from this crate. The host performs the request and
//! hands back either the response body or a [`CollaboratorError`]; the
//! types here describe what goes out and what is accepted back.

use serde::{Deserialize, Serialize};

use crate::config::ContentConfig;
use crate::content::question::QuestionRecord;
use crate::error::{CollaboratorError, ContentError};
use crate::profile::ProfileCategory;

/// Drawing sent to the handwriting recognizer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandwritingRequest {
    /// Encoded image payload (data URL or base64).
    pub image: String,
    pub expected: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandwritingResponse {
    pub success: bool,
    #[serde(default)]
    pub correct: bool,
    #[serde(default)]
    pub detected: String,
    #[serde(default)]
    pub expected: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl HandwritingResponse {
    /// Parse a response body. A body that does not parse counts as a rejection.
    pub fn from_json(body: &str) -> Result<Self, CollaboratorError> {
        serde_json::from_str(body)
            .map_err(|e| CollaboratorError::Rejected(format!("malformed response: {e}")))
    }

    /// Turn `success == false` into an error carrying the service message.
    pub fn into_result(self) -> Result<Self, CollaboratorError> {
        if self.success {
            Ok(self)
        } else {
            let message = self
                .error
                .unwrap_or_else(|| "handwriting check failed".to_string());
            Err(CollaboratorError::Rejected(message))
        }
    }
}

/// Request for topic-driven content for all guided games at once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BulkContentRequest {
    pub topic: String,
    pub age_group: String,
    pub category: String,
}

impl BulkContentRequest {
    pub fn new(topic: &str, category: ProfileCategory, config: &ContentConfig) -> Self {
        Self {
            topic: topic.trim().to_string(),
            age_group: config.age_group.clone(),
            category: category.label().to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawBulkResponse {
    success: bool,
    #[serde(default)]
    games: Option<RawGames>,
}

#[derive(Debug, Deserialize)]
struct RawGames {
    game1: RawWord,
    game2: RawPrompts,
    game3: RawQuiz,
    game4: RawCalculation,
}

#[derive(Debug, Deserialize)]
struct RawWord {
    word: String,
}

#[derive(Debug, Deserialize)]
struct RawPrompts {
    prompts: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct RawQuiz {
    questions: Vec<RawQuestion>,
}

#[derive(Debug, Deserialize)]
struct RawQuestion {
    question: String,
    options: Vec<String>,
    correct_answer: String,
}

#[derive(Debug, Deserialize)]
struct RawCalculation {
    calculation: String,
}

/// Validated content for the four guided games.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneratedGames {
    pub word: String,
    pub prompts: Vec<String>,
    pub questions: Vec<QuestionRecord>,
    pub calculation: String,
}

/// Slice out the outermost `{...}` so fenced or chatty bodies still parse.
fn json_object(body: &str) -> &str {
    match (body.find('{'), body.rfind('}')) {
        (Some(start), Some(end)) if start < end => &body[start..=end],
        _ => body,
    }
}

fn shape(message: impl Into<String>) -> ContentError {
    ContentError::Shape(message.into())
}

/// Parse and validate a bulk-generation response body.
pub fn parse_bulk_response(body: &str) -> Result<GeneratedGames, ContentError> {
    let raw: RawBulkResponse = serde_json::from_str(json_object(body))?;
    if !raw.success {
        return Err(shape("collaborator reported failure"));
    }
    let games = raw.games.ok_or_else(|| shape("missing games"))?;

    let word = games.game1.word.trim().to_string();
    if word.is_empty() {
        return Err(shape("game1 word is empty"));
    }

    let prompts: Vec<String> = games
        .game2
        .prompts
        .into_iter()
        .map(|p| p.trim().to_string())
        .filter(|p| !p.is_empty())
        .collect();
    if prompts.is_empty() {
        return Err(shape("game2 has no prompts"));
    }

    if games.game3.questions.is_empty() {
        return Err(shape("game3 has no questions"));
    }
    let mut questions = Vec::with_capacity(games.game3.questions.len());
    for (i, raw) in games.game3.questions.into_iter().enumerate() {
        let record = QuestionRecord::multiple_choice(raw.question, raw.correct_answer, raw.options);
        if !record.is_multiple_choice() || !record.options_are_valid() {
            return Err(shape(format!("game3 question {i} has an invalid option set")));
        }
        questions.push(record);
    }

    let calculation = games.game4.calculation.trim().to_string();
    if calculation.is_empty() {
        return Err(shape("game4 calculation is empty"));
    }

    Ok(GeneratedGames {
        word,
        prompts,
        questions,
        calculation,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const GOOD: &str = r#"{
        "success": true,
        "games": {
            "game1": {"word": "OCEAN"},
            "game2": {"prompts": ["Draw a wave", "Draw a fish"]},
            "game3": {"questions": [
                {"question": "What lives in the ocean?",
                 "options": ["Whale", "Cow", "Lion"],
                 "correct_answer": "Whale"}
            ]},
            "game4": {"calculation": "3 fish + 4 fish = ?"}
        }
    }"#;

    #[test]
    fn test_parse_good_response() {
        let games = parse_bulk_response(GOOD).unwrap();
        assert_eq!(games.word, "OCEAN");
        assert_eq!(games.prompts.len(), 2);
        assert_eq!(games.questions[0].answer_index(), Some(0));
        assert_eq!(games.calculation, "3 fish + 4 fish = ?");
    }

    #[test]
    fn test_parse_fenced_response() {
        let fenced = format!("Here you go!\n```json\n{GOOD}\n```");
        assert!(parse_bulk_response(&fenced).is_ok());
    }

    #[test]
    fn test_not_json() {
        assert!(matches!(
            parse_bulk_response("sorry, I cannot help"),
            Err(ContentError::Parse(_))
        ));
    }

    #[test]
    fn test_failure_flag() {
        assert!(matches!(
            parse_bulk_response(r#"{"success": false}"#),
            Err(ContentError::Shape(_))
        ));
    }

    #[test]
    fn test_answer_missing_from_options() {
        let bad = GOOD.replace(r#""correct_answer": "Whale""#, r#""correct_answer": "Shark""#);
        assert!(matches!(parse_bulk_response(&bad), Err(ContentError::Shape(_))));
    }

    #[test]
    fn test_duplicate_options() {
        let bad = GOOD.replace(r#"["Whale", "Cow", "Lion"]"#, r#"["Whale", "Whale", "Lion"]"#);
        assert!(matches!(parse_bulk_response(&bad), Err(ContentError::Shape(_))));
    }

    #[test]
    fn test_missing_game_key() {
        let bad = GOOD.replace(
            r#""game4": {"calculation": "3 fish + 4 fish = ?"}"#,
            r#""game5": {}"#,
        );
        assert!(matches!(parse_bulk_response(&bad), Err(ContentError::Parse(_))));
    }

    #[test]
    fn test_handwriting_rejection() {
        let body = r#"{"success": false, "error": "image unreadable"}"#;
        let response = HandwritingResponse::from_json(body).unwrap();
        assert_eq!(
            response.into_result(),
            Err(CollaboratorError::Rejected("image unreadable".into()))
        );
        assert!(HandwritingResponse::from_json("<html>").is_err());
    }

    #[test]
    fn test_bulk_request() {
        let config = ContentConfig::default();
        let request = BulkContentRequest::new("  space ", ProfileCategory::Adhd, &config);
        assert_eq!(request.topic, "space");
        assert_eq!(request.age_group, "7-11");
        assert_eq!(request.category, "ADHD");
    }
}
