//! Advisory collaborator.
//!
//! Turns a computed breakdown into free-text financial guidance from an
//! external text-generation service. The calculation engine never calls
//! this module; callers inject an [`Advisor`] and use [`advise_or_fallback`]
//! so a failing service degrades to a fixed message instead of an error.

mod http;
mod prompt;

use async_trait::async_trait;
use thiserror::Error;
use tracing::{error, warn};

use crate::models::SalaryBreakdown;

pub use http::{ADVISOR_API_KEY_ENV, HttpAdvisor};
pub use prompt::build_advice_prompt;

/// Shown when the advisory service cannot be reached or fails.
pub const FALLBACK_ADVICE: &str =
    "The financial advisor is currently unavailable. Please check your inputs.";

/// Shown when the service answers without any text.
pub const EMPTY_ADVICE: &str = "Unable to generate advice at this moment.";

/// Errors from an advisory service.
#[derive(Debug, Error)]
pub enum AdvisorError {
    /// The service could not be reached or returned a failure.
    #[error("Advisory service unavailable: {reason}")]
    ServiceUnavailable {
        /// What went wrong.
        reason: String,
    },

    /// The service answered but produced no text.
    #[error("Advisory service returned an empty response")]
    EmptyResponse,

    /// The advisor is missing required settings.
    #[error("Advisory service not configured: {reason}")]
    NotConfigured {
        /// The missing setting.
        reason: String,
    },
}

/// A source of natural-language advice about a breakdown.
#[async_trait]
pub trait Advisor: Send + Sync {
    /// Requests advice for `breakdown`.
    async fn request_advice(&self, breakdown: &SalaryBreakdown) -> Result<String, AdvisorError>;
}

/// Requests advice, degrading every failure to a fixed message.
///
/// A missing advisor or a failed request yields [`FALLBACK_ADVICE`]; an empty
/// answer yields [`EMPTY_ADVICE`].
pub async fn advise_or_fallback(
    advisor: Option<&dyn Advisor>,
    breakdown: &SalaryBreakdown,
) -> String {
    let Some(advisor) = advisor else {
        warn!("No advisory service configured, returning fallback advice");
        return FALLBACK_ADVICE.to_string();
    };

    match advisor.request_advice(breakdown).await {
        Ok(advice) if !advice.trim().is_empty() => advice,
        Ok(_) | Err(AdvisorError::EmptyResponse) => EMPTY_ADVICE.to_string(),
        Err(err) => {
            error!(error = %err, "Advisory request failed");
            FALLBACK_ADVICE.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::compute_breakdown;
    use crate::calculation::fixtures::{dec, regime_fy2025_26};
    use crate::models::SalaryComponents;

    struct FixedAdvisor(Result<&'static str, fn() -> AdvisorError>);

    #[async_trait]
    impl Advisor for FixedAdvisor {
        async fn request_advice(&self, _: &SalaryBreakdown) -> Result<String, AdvisorError> {
            match &self.0 {
                Ok(text) => Ok(text.to_string()),
                Err(make_error) => Err(make_error()),
            }
        }
    }

    fn breakdown() -> SalaryBreakdown {
        let components = SalaryComponents {
            basic: dec("900000"),
            ..Default::default()
        };
        compute_breakdown(&components, &regime_fy2025_26())
    }

    #[tokio::test]
    async fn test_advice_is_passed_through() {
        let advisor = FixedAdvisor(Ok("- Start an SIP"));
        let advice = advise_or_fallback(Some(&advisor), &breakdown()).await;
        assert_eq!(advice, "- Start an SIP");
    }

    #[tokio::test]
    async fn test_missing_advisor_falls_back() {
        let advice = advise_or_fallback(None, &breakdown()).await;
        assert_eq!(advice, FALLBACK_ADVICE);
    }

    #[tokio::test]
    async fn test_service_failure_falls_back() {
        let advisor = FixedAdvisor(Err(|| AdvisorError::ServiceUnavailable {
            reason: "connection refused".to_string(),
        }));
        let advice = advise_or_fallback(Some(&advisor), &breakdown()).await;
        assert_eq!(advice, FALLBACK_ADVICE);
    }

    #[tokio::test]
    async fn test_empty_answer_uses_empty_message() {
        let blank = FixedAdvisor(Ok("   "));
        assert_eq!(advise_or_fallback(Some(&blank), &breakdown()).await, EMPTY_ADVICE);

        let empty = FixedAdvisor(Err(|| AdvisorError::EmptyResponse));
        assert_eq!(advise_or_fallback(Some(&empty), &breakdown()).await, EMPTY_ADVICE);
    }

    #[test]
    fn test_error_messages() {
        let error = AdvisorError::NotConfigured {
            reason: "INHAND_ADVISOR_API_KEY is not set".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Advisory service not configured: INHAND_ADVISOR_API_KEY is not set"
        );
    }
}
