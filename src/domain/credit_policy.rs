//! Tier-keyed credit limit derivation.

use std::sync::Arc;

use tracing::debug;

use crate::domain::client::{Client, ClientTier};
use crate::domain::ports::{CreditScoreProbe, CreditScoreProbeError};
use crate::domain::user::User;

/// Factor applied to externally scored limits for important clients.
const IMPORTANT_CLIENT_MULTIPLIER: i64 = 2;

/// Maps a client's tier to a credit-limit derivation strategy and settles
/// the user's credit fields in place.
///
/// | tier          | credit check | limit            |
/// |---------------|--------------|------------------|
/// | VeryImportant | waived       | untouched        |
/// | Important     | required     | 2 × probe result |
/// | Standard      | required     | probe result     |
///
/// The probe is consulted only when the tier requires a check, and always
/// with exactly the user's firstname, surname, and date of birth.
pub struct CreditLimitPolicy<P> {
    probe: Arc<P>,
}

impl<P> CreditLimitPolicy<P> {
    pub fn new(probe: Arc<P>) -> Self {
        Self { probe }
    }
}

impl<P> CreditLimitPolicy<P>
where
    P: CreditScoreProbe,
{
    /// Derive and apply the credit limit for `user` registered against
    /// `client`. Probe faults propagate untouched.
    pub fn calculate_credit_limit(
        &self,
        client: &Client,
        user: &mut User,
    ) -> Result<(), CreditScoreProbeError> {
        let tier = client.tier();
        match tier {
            ClientTier::VeryImportant => {
                user.waive_credit_check();
            }
            ClientTier::Important => {
                let scored = self.score(user)?;
                user.require_credit_limit(scored * IMPORTANT_CLIENT_MULTIPLIER);
            }
            ClientTier::Standard => {
                let scored = self.score(user)?;
                user.require_credit_limit(scored);
            }
        }
        debug!(
            ?tier,
            has_credit_limit = user.has_credit_limit(),
            credit_limit = user.credit_limit(),
            "credit limit derived"
        );
        Ok(())
    }

    fn score(&self, user: &User) -> Result<i64, CreditScoreProbeError> {
        self.probe
            .credit_limit(user.firstname(), user.surname(), user.date_of_birth())
    }
}
