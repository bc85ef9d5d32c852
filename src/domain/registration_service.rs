//! Registration workflow orchestrating validation, credit derivation, and
//! persistence.

use std::sync::Arc;

use chrono::NaiveDate;
use mockable::Clock;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::domain::credit_policy::CreditLimitPolicy;
use crate::domain::ports::{
    ClientDirectory, ClientDirectoryError, CreditScoreProbe, CreditScoreProbeError, UserSink,
    UserSinkError,
};
use crate::domain::user::User;
use crate::domain::validation::UserValidator;

/// Raw registration inputs as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistrationRequest {
    pub firstname: String,
    pub surname: String,
    pub email: String,
    pub date_of_birth: NaiveDate,
    pub client_id: i64,
}

/// Terminal outcome of a registration attempt.
///
/// Rejection is a business outcome, not an error: which rule failed is not
/// surfaced. Collaborator faults surface separately as
/// [`RegistrationError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegistrationOutcome {
    /// The user passed every check and was persisted.
    Accepted,
    /// A validation predicate failed; nothing was persisted.
    Rejected,
}

impl RegistrationOutcome {
    /// True iff the user was persisted.
    pub fn is_accepted(self) -> bool {
        matches!(self, Self::Accepted)
    }
}

/// Collaborator faults that abort a registration attempt.
///
/// These are never recovered or retried; because persistence is the final
/// step, no rollback is ever required.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    #[error(transparent)]
    ClientDirectory(#[from] ClientDirectoryError),
    #[error(transparent)]
    CreditScoreProbe(#[from] CreditScoreProbeError),
    #[error(transparent)]
    UserSink(#[from] UserSinkError),
}

/// Orchestrates a single registration attempt.
///
/// Stateless across invocations: every call runs the same fixed pipeline
/// against the injected collaborators, each of which is consulted at most
/// once. Collaborators are supplied explicitly at construction; there is
/// no default wiring.
pub struct RegistrationService<D, P, S> {
    directory: Arc<D>,
    sink: Arc<S>,
    validator: UserValidator,
    policy: CreditLimitPolicy<P>,
}

impl<D, P, S> RegistrationService<D, P, S>
where
    D: ClientDirectory,
    P: CreditScoreProbe,
    S: UserSink,
{
    /// Compose the workflow from its four collaborators.
    pub fn new(directory: Arc<D>, probe: Arc<P>, sink: Arc<S>, clock: Arc<dyn Clock>) -> Self {
        Self {
            directory,
            sink,
            validator: UserValidator::new(clock),
            policy: CreditLimitPolicy::new(probe),
        }
    }

    /// Run one registration attempt.
    ///
    /// The pipeline short-circuits on the first failed predicate: a name
    /// rejection never reads the clock, an age rejection never reaches the
    /// directory, and a credit rejection never reaches the sink. This
    /// ordering is part of the observable contract.
    pub fn register_user(
        &self,
        request: RegistrationRequest,
    ) -> Result<RegistrationOutcome, RegistrationError> {
        if !self
            .validator
            .has_valid_full_name(&request.firstname, &request.surname)
        {
            debug!("registration rejected: missing name part");
            return Ok(RegistrationOutcome::Rejected);
        }

        if !self.validator.has_valid_email(&request.email) {
            debug!("registration rejected: malformed email address");
            return Ok(RegistrationOutcome::Rejected);
        }

        if !self.validator.has_valid_age(request.date_of_birth) {
            debug!(date_of_birth = %request.date_of_birth, "registration rejected: under age");
            return Ok(RegistrationOutcome::Rejected);
        }

        let client = self.directory.get_by_id(request.client_id)?;

        let mut user = User::new(
            request.firstname,
            request.surname,
            request.email,
            request.date_of_birth,
            client.clone(),
        );

        self.policy.calculate_credit_limit(&client, &mut user)?;

        if !self.validator.has_valid_credit(&user) {
            debug!(
                credit_limit = user.credit_limit(),
                "registration rejected: credit limit below floor"
            );
            return Ok(RegistrationOutcome::Rejected);
        }

        self.sink.add_user(&user)?;
        info!(client_id = client.id, "user registered");

        Ok(RegistrationOutcome::Accepted)
    }
}

#[cfg(test)]
#[path = "registration_service_tests.rs"]
mod tests;
