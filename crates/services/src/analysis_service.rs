use std::env;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use url::Url;

use crate::error::AnalysisError;

/// Resumes shorter than this cannot produce meaningful feedback; the
/// original rejects them before spending an API call.
pub const MIN_RESUME_CHARS: usize = 200;

/// Phrases the analyzer emits when it could not read the document. A body
/// containing any of them is treated as a failed analysis.
const CANNOT_ANALYZE_PHRASES: [&str; 3] =
    ["absolutely no information", "completely empty", "impossible"];

#[derive(Clone, Debug)]
pub struct AnalysisConfig {
    pub endpoint: Url,
    pub api_key: Option<String>,
}

impl AnalysisConfig {
    /// Reads `ACADEMY_ANALYZE_URL` and the optional `ACADEMY_ANALYZE_KEY`
    /// bearer token. Returns `None` when no endpoint is configured, which
    /// disables the resume checker.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let raw = env::var("ACADEMY_ANALYZE_URL").ok()?;
        let endpoint = Url::parse(raw.trim()).ok()?;
        let api_key = env::var("ACADEMY_ANALYZE_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());
        Some(Self { endpoint, api_key })
    }
}

/// Fire-and-forget client for the external resume-analysis endpoint.
#[derive(Clone)]
pub struct AnalysisService {
    client: Client,
    config: Option<AnalysisConfig>,
}

impl AnalysisService {
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(AnalysisConfig::from_env())
    }

    #[must_use]
    pub fn new(config: Option<AnalysisConfig>) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    #[must_use]
    pub fn enabled(&self) -> bool {
        self.config.is_some()
    }

    /// Sends the resume text for analysis and returns the raw feedback
    /// markdown.
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::Disabled` without configuration,
    /// `AnalysisError::TextTooShort` below the minimum length,
    /// `AnalysisError::Unreadable` when the analyzer declines the document,
    /// and HTTP errors otherwise.
    pub async fn analyze(&self, resume_text: &str) -> Result<String, AnalysisError> {
        let config = self.config.as_ref().ok_or(AnalysisError::Disabled)?;

        let resume_text = resume_text.trim();
        if resume_text.chars().count() < MIN_RESUME_CHARS {
            return Err(AnalysisError::TextTooShort);
        }

        info!(chars = resume_text.len(), "sending resume for analysis");
        let mut request = self
            .client
            .post(config.endpoint.clone())
            .json(&AnalyzeRequest { resume_text });
        if let Some(key) = &config.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            warn!(status = %response.status(), "analysis request failed");
            return Err(AnalysisError::HttpStatus(response.status()));
        }

        let body: AnalyzeResponse = response.json().await?;
        let feedback = body.feedback.unwrap_or_default();
        if feedback.trim().is_empty() || contains_cannot_analyze(&feedback) {
            return Err(AnalysisError::Unreadable);
        }
        Ok(feedback.trim().to_owned())
    }
}

fn contains_cannot_analyze(feedback: &str) -> bool {
    let lowered = feedback.to_lowercase();
    CANNOT_ANALYZE_PHRASES
        .iter()
        .any(|phrase| lowered.contains(phrase))
}

#[derive(Debug, Serialize)]
struct AnalyzeRequest<'a> {
    #[serde(rename = "resumeText")]
    resume_text: &'a str,
}

#[derive(Debug, Deserialize)]
struct AnalyzeResponse {
    feedback: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_without_configuration() {
        let service = AnalysisService::new(None);
        assert!(!service.enabled());
    }

    #[tokio::test]
    async fn disabled_service_refuses_to_analyze() {
        let service = AnalysisService::new(None);
        let err = service.analyze(&"x".repeat(300)).await.unwrap_err();
        assert!(matches!(err, AnalysisError::Disabled));
    }

    #[tokio::test]
    async fn short_text_is_rejected_before_any_request() {
        let config = AnalysisConfig {
            endpoint: Url::parse("http://localhost:1/analyze").unwrap(),
            api_key: None,
        };
        let service = AnalysisService::new(Some(config));
        let err = service.analyze("too short").await.unwrap_err();
        assert!(matches!(err, AnalysisError::TextTooShort));
    }

    #[test]
    fn cannot_analyze_phrases_are_detected() {
        assert!(contains_cannot_analyze(
            "The document contains Absolutely No Information to review."
        ));
        assert!(contains_cannot_analyze("This file is completely empty."));
        assert!(!contains_cannot_analyze("**Score:** 88/100"));
    }

    #[test]
    fn request_serializes_with_the_wire_field_name() {
        let json = serde_json::to_string(&AnalyzeRequest {
            resume_text: "text",
        })
        .unwrap();
        assert_eq!(json, r#"{"resumeText":"text"}"#);
    }
}
