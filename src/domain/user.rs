//! The user record assembled during a registration attempt.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::client::Client;

/// A user under registration.
///
/// Constructed fresh per attempt with the credit fields unset
/// (`has_credit_limit == false`, `credit_limit == 0`). The credit policy
/// settles them in place before the final credit check; the record is only
/// handed to a sink once fully accepted.
///
/// ## Invariants
/// - `has_credit_limit == false` means `credit_limit` carries no meaning
///   beyond its default and is never validity-checked.
/// - `has_credit_limit == true` means acceptance requires
///   `credit_limit >= `[`MINIMUM_CREDIT_LIMIT`](crate::domain::MINIMUM_CREDIT_LIMIT).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    firstname: String,
    surname: String,
    email_address: String,
    date_of_birth: NaiveDate,
    client: Client,
    has_credit_limit: bool,
    credit_limit: i64,
}

impl User {
    /// Assemble a user from validated registration inputs and the fetched
    /// client record, credit fields unset.
    pub fn new(
        firstname: impl Into<String>,
        surname: impl Into<String>,
        email_address: impl Into<String>,
        date_of_birth: NaiveDate,
        client: Client,
    ) -> Self {
        Self {
            firstname: firstname.into(),
            surname: surname.into(),
            email_address: email_address.into(),
            date_of_birth,
            client,
            has_credit_limit: false,
            credit_limit: 0,
        }
    }

    pub fn firstname(&self) -> &str {
        self.firstname.as_str()
    }

    pub fn surname(&self) -> &str {
        self.surname.as_str()
    }

    pub fn email_address(&self) -> &str {
        self.email_address.as_str()
    }

    pub fn date_of_birth(&self) -> NaiveDate {
        self.date_of_birth
    }

    /// The client this registration was attempted against.
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Whether this user is subject to the minimum-credit check.
    pub fn has_credit_limit(&self) -> bool {
        self.has_credit_limit
    }

    /// Assigned credit limit; meaningful only when
    /// [`has_credit_limit`](Self::has_credit_limit) is true.
    pub fn credit_limit(&self) -> i64 {
        self.credit_limit
    }

    /// Subject the user to the credit check with the given limit.
    pub(crate) fn require_credit_limit(&mut self, credit_limit: i64) {
        self.has_credit_limit = true;
        self.credit_limit = credit_limit;
    }

    /// Waive the credit check entirely. The limit stays at its default, so
    /// waived users persist with a limit of zero.
    pub(crate) fn waive_credit_check(&mut self) {
        self.has_credit_limit = false;
    }
}
