//! HTTP client for a generateContent-style text-generation API.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::config::AdvisorSettings;
use crate::models::SalaryBreakdown;

use super::prompt::build_advice_prompt;
use super::{Advisor, AdvisorError};

/// Environment variable holding the advisory service API key.
pub const ADVISOR_API_KEY_ENV: &str = "INHAND_ADVISOR_API_KEY";

/// Advisor backed by a remote text-generation service.
#[derive(Debug, Clone)]
pub struct HttpAdvisor {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
    temperature: f32,
    top_p: f32,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

impl GenerateContentResponse {
    fn into_text(self) -> String {
        self.candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|part| part.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default()
    }
}

impl HttpAdvisor {
    /// Creates an advisor from settings and an API key.
    pub fn new(
        settings: &AdvisorSettings,
        api_key: impl Into<String>,
    ) -> Result<Self, AdvisorError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(AdvisorError::NotConfigured {
                reason: "API key is empty".to_string(),
            });
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .map_err(|e| AdvisorError::ServiceUnavailable {
                reason: format!("failed to build HTTP client: {e}"),
            })?;

        let endpoint = format!(
            "{}/v1beta/models/{}:generateContent",
            settings.base_url.trim_end_matches('/'),
            settings.model
        );

        Ok(Self {
            client,
            endpoint,
            api_key,
            temperature: settings.temperature,
            top_p: settings.top_p,
        })
    }

    /// Creates an advisor using the key in [`ADVISOR_API_KEY_ENV`].
    pub fn from_env(settings: &AdvisorSettings) -> Result<Self, AdvisorError> {
        let api_key =
            std::env::var(ADVISOR_API_KEY_ENV).map_err(|_| AdvisorError::NotConfigured {
                reason: format!("{ADVISOR_API_KEY_ENV} is not set"),
            })?;
        Self::new(settings, api_key)
    }

    /// The full URL requests are sent to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl Advisor for HttpAdvisor {
    async fn request_advice(&self, breakdown: &SalaryBreakdown) -> Result<String, AdvisorError> {
        let body = serde_json::json!({
            "contents": [{ "parts": [{ "text": build_advice_prompt(breakdown) }] }],
            "generationConfig": {
                "temperature": self.temperature,
                "topP": self.top_p,
            },
        });

        let response = self
            .client
            .post(&self.endpoint)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| AdvisorError::ServiceUnavailable {
                reason: if e.is_timeout() {
                    "request timed out".to_string()
                } else {
                    e.to_string()
                },
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let excerpt: String = body.chars().take(200).collect();
            return Err(AdvisorError::ServiceUnavailable {
                reason: format!("HTTP {status}: {excerpt}"),
            });
        }

        let parsed: GenerateContentResponse =
            response
                .json()
                .await
                .map_err(|e| AdvisorError::ServiceUnavailable {
                    reason: format!("invalid response body: {e}"),
                })?;

        let text = parsed.into_text();
        debug!(chars = text.len(), "Received advisory response");

        if text.trim().is_empty() {
            return Err(AdvisorError::EmptyResponse);
        }
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advisor::{FALLBACK_ADVICE, advise_or_fallback};
    use crate::calculation::compute_breakdown;
    use crate::calculation::fixtures::{dec, regime_fy2025_26};
    use crate::models::SalaryComponents;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const MODEL_PATH: &str = "/v1beta/models/test-model:generateContent";

    fn settings(base_url: String) -> AdvisorSettings {
        AdvisorSettings {
            base_url,
            model: "test-model".to_string(),
            temperature: 0.5,
            top_p: 0.9,
            timeout_secs: 5,
        }
    }

    fn breakdown() -> SalaryBreakdown {
        let components = SalaryComponents {
            basic: dec("1500000"),
            ..Default::default()
        };
        compute_breakdown(&components, &regime_fy2025_26())
    }

    #[test]
    fn test_endpoint_is_built_from_settings() {
        let advisor =
            HttpAdvisor::new(&settings("https://example.test/".to_string()), "key").unwrap();
        assert_eq!(
            advisor.endpoint(),
            "https://example.test/v1beta/models/test-model:generateContent"
        );
    }

    #[test]
    fn test_empty_api_key_is_not_configured() {
        let result = HttpAdvisor::new(&settings("https://example.test".to_string()), " ");
        assert!(matches!(result, Err(AdvisorError::NotConfigured { .. })));
    }

    #[tokio::test]
    async fn test_successful_response_returns_text() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(MODEL_PATH))
            .and(header("x-goog-api-key", "secret"))
            .and(body_partial_json(json!({ "generationConfig": { "temperature": 0.5 } })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [{
                    "content": {
                        "parts": [
                            { "text": "- Max out NPS\n" },
                            { "text": "- Keep 6 months of expenses" }
                        ]
                    }
                }]
            })))
            .mount(&server)
            .await;

        let advisor = HttpAdvisor::new(&settings(server.uri()), "secret").unwrap();
        let advice = advisor.request_advice(&breakdown()).await.unwrap();

        assert_eq!(advice, "- Max out NPS\n- Keep 6 months of expenses");
    }

    #[tokio::test]
    async fn test_server_error_is_service_unavailable() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(MODEL_PATH))
            .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
            .mount(&server)
            .await;

        let advisor = HttpAdvisor::new(&settings(server.uri()), "secret").unwrap();
        match advisor.request_advice(&breakdown()).await {
            Err(AdvisorError::ServiceUnavailable { reason }) => {
                assert!(reason.contains("503"));
                assert!(reason.contains("overloaded"));
            }
            other => panic!("Expected ServiceUnavailable, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_no_candidates_is_empty_response() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(MODEL_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "candidates": [] })))
            .mount(&server)
            .await;

        let advisor = HttpAdvisor::new(&settings(server.uri()), "secret").unwrap();
        assert!(matches!(
            advisor.request_advice(&breakdown()).await,
            Err(AdvisorError::EmptyResponse)
        ));
    }

    #[tokio::test]
    async fn test_failing_service_degrades_to_fallback() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let advisor = HttpAdvisor::new(&settings(server.uri()), "secret").unwrap();
        let advice = advise_or_fallback(Some(&advisor), &breakdown()).await;
        assert_eq!(advice, FALLBACK_ADVICE);
    }
}
