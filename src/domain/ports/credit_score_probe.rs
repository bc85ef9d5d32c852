//! Port for the external credit scoring service.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors raised by credit scoring adapters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CreditScoreProbeError {
    /// The scoring service could not be reached or failed to answer.
    #[error("credit score probe unavailable: {message}")]
    Unavailable { message: String },
}

impl CreditScoreProbeError {
    /// Helper for unreachable or failing scoring backends.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }
}

/// Port for externally scored credit limits.
///
/// Invoked with exactly the identity fields of the user under
/// registration, and only when the client's tier calls for a credit check.
#[cfg_attr(test, mockall::automock)]
pub trait CreditScoreProbe: Send + Sync {
    /// Score a credit limit for the given identity.
    fn credit_limit(
        &self,
        firstname: &str,
        surname: &str,
        date_of_birth: NaiveDate,
    ) -> Result<i64, CreditScoreProbeError>;
}

/// Limit returned by [`FixtureCreditScoreProbe`]; comfortably above the
/// enforcement floor so fixture flows are accepted.
pub const FIXTURE_CREDIT_LIMIT: i64 = 1000;

/// Fixture implementation for tests that do not exercise credit scoring.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureCreditScoreProbe;

impl CreditScoreProbe for FixtureCreditScoreProbe {
    fn credit_limit(
        &self,
        _firstname: &str,
        _surname: &str,
        _date_of_birth: NaiveDate,
    ) -> Result<i64, CreditScoreProbeError> {
        Ok(FIXTURE_CREDIT_LIMIT)
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    use super::*;

    #[test]
    fn fixture_probe_scores_above_the_floor() {
        let limit = FixtureCreditScoreProbe
            .credit_limit(
                "Bikram",
                "Swain",
                NaiveDate::from_ymd_opt(1990, 2, 2).expect("valid date"),
            )
            .expect("fixture scoring should succeed");
        assert_eq!(limit, FIXTURE_CREDIT_LIMIT);
    }

    #[test]
    fn unavailable_helper_accepts_str() {
        let err = CreditScoreProbeError::unavailable("timeout");
        assert_eq!(err.to_string(), "credit score probe unavailable: timeout");
    }
}
