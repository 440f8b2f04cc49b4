//! Daily verse generation
//!
//! A [`VerseSource`] turns a prompt into inspirational text. The production
//! source calls the Gemini `generateContent` endpoint; any failure falls back
//! to a fixed verse so the dashboard always has something to show.

use std::time::Duration;

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{GraceError, GraceResult};

/// Shown whenever generation fails
pub const FALLBACK_VERSE: &str = "I can do all this through him who gives me strength.\n- Philippians 4:13";

/// Environment variable holding the Gemini API key
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Something that can produce text for a prompt
pub trait VerseSource {
    fn generate(&self, prompt: &str) -> GraceResult<String>;
}

/// A verse split into its text and reference lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verse {
    pub text: String,
    /// Empty when the generated text is a single line
    pub reference: String,
}

impl Verse {
    /// Split generated text: first line is the verse, last line (if distinct)
    /// is the reference
    pub fn parse(raw: &str) -> Self {
        let lines: Vec<&str> = raw.trim().split('\n').collect();
        let text = lines.first().map(|l| l.trim()).unwrap_or_default().to_string();
        let reference = if lines.len() > 1 {
            lines[lines.len() - 1].trim().to_string()
        } else {
            String::new()
        };
        Self { text, reference }
    }

    pub fn fallback() -> Self {
        Self::parse(FALLBACK_VERSE)
    }
}

/// Ask `source` for a verse, substituting the fallback on any failure
pub fn fetch_or_fallback(source: &dyn VerseSource, prompt: &str) -> Verse {
    match source.generate(prompt) {
        Ok(text) => Verse::parse(&text),
        Err(e) => {
            warn!(error = %e, "verse generation failed, using fallback");
            Verse::fallback()
        }
    }
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<RequestContent<'a>>,
}

#[derive(Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: String,
}

impl GenerateResponse {
    fn first_text(self) -> Option<String> {
        self.candidates
            .into_iter()
            .next()?
            .content?
            .parts
            .into_iter()
            .map(|p| p.text)
            .find(|t| !t.trim().is_empty())
    }
}

/// Verse source backed by the Gemini API
pub struct GeminiVerseClient {
    client: Client,
    api_key: Option<String>,
    model: String,
}

impl GeminiVerseClient {
    pub fn new(api_key: Option<String>, model: impl Into<String>) -> GraceResult<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| GraceError::Verse(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            model: model.into(),
        })
    }

    /// Read the API key from `GEMINI_API_KEY`
    pub fn from_env(model: impl Into<String>) -> GraceResult<Self> {
        Self::new(std::env::var(API_KEY_ENV).ok(), model)
    }

    fn endpoint(&self) -> String {
        format!("{}/{}:generateContent", API_BASE, self.model)
    }
}

impl VerseSource for GeminiVerseClient {
    fn generate(&self, prompt: &str) -> GraceResult<String> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| GraceError::Verse(format!("{} is not set", API_KEY_ENV)))?;

        let body = GenerateRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: prompt }],
            }],
        };

        debug!(model = %self.model, "requesting verse");
        let response: GenerateResponse = self
            .client
            .post(self.endpoint())
            .query(&[("key", api_key)])
            .json(&body)
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(|e| GraceError::Verse(e.to_string()))?
            .json()
            .map_err(|e| GraceError::Verse(format!("Malformed response: {}", e)))?;

        response
            .first_text()
            .ok_or_else(|| GraceError::Verse("Response contained no text".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(&'static str);

    impl VerseSource for Fixed {
        fn generate(&self, _prompt: &str) -> GraceResult<String> {
            Ok(self.0.to_string())
        }
    }

    struct Failing;

    impl VerseSource for Failing {
        fn generate(&self, _prompt: &str) -> GraceResult<String> {
            Err(GraceError::Verse("offline".into()))
        }
    }

    #[test]
    fn test_parse_text_and_reference() {
        let verse = Verse::parse("The Lord is my shepherd; I shall not want.\n\n- Psalm 23:1\n");
        assert_eq!(verse.text, "The Lord is my shepherd; I shall not want.");
        assert_eq!(verse.reference, "- Psalm 23:1");
    }

    #[test]
    fn test_parse_single_line_has_no_reference() {
        let verse = Verse::parse("Rejoice always.");
        assert_eq!(verse.text, "Rejoice always.");
        assert!(verse.reference.is_empty());
    }

    #[test]
    fn test_failure_uses_fallback() {
        let verse = fetch_or_fallback(&Failing, "prompt");
        assert_eq!(verse.text, "I can do all this through him who gives me strength.");
        assert_eq!(verse.reference, "- Philippians 4:13");
    }

    #[test]
    fn test_success_is_parsed() {
        let verse = fetch_or_fallback(&Fixed("Be still.\n- Psalm 46:10"), "prompt");
        assert_eq!(verse.reference, "- Psalm 46:10");
    }

    #[test]
    fn test_missing_key_fails_without_network() {
        let client = GeminiVerseClient::new(Some("  ".into()), "gemini-2.5-flash").unwrap();
        assert!(matches!(client.generate("prompt"), Err(GraceError::Verse(_))));
    }

    #[test]
    fn test_response_text_extraction() {
        let json = r#"{"candidates":[{"content":{"parts":[{"text":"Hope.\n- Romans 15:13"}]}}]}"#;
        let response: GenerateResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.first_text().unwrap(), "Hope.\n- Romans 15:13");

        let empty: GenerateResponse = serde_json::from_str("{}").unwrap();
        assert!(empty.first_text().is_none());
    }
}
