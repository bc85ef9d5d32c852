//! Client records and tier classification.

use serde::{Deserialize, Serialize};

/// Client name granted an unconditional credit-check waiver.
const VERY_IMPORTANT_CLIENT: &str = "VeryImportantClient";
/// Client name granted a doubled credit limit.
const IMPORTANT_CLIENT: &str = "ImportantClient";

/// Lifecycle status carried on a client record.
///
/// Directory adapters populate this from their own records; only `None` is
/// currently defined, and further statuses may appear without a breaking
/// change.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum ClientStatus {
    #[default]
    None,
}

/// A client record as resolved by a [`ClientDirectory`] adapter.
///
/// Immutable once fetched; the registration workflow only ever reads it.
///
/// [`ClientDirectory`]: crate::domain::ports::ClientDirectory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub id: i64,
    pub name: String,
    pub status: ClientStatus,
}

impl Client {
    /// Resolve this client's tier from its name.
    pub fn tier(&self) -> ClientTier {
        ClientTier::from_client_name(&self.name)
    }
}

/// Credit tier derived from the client name.
///
/// The tier is resolved once per registration attempt and drives the
/// credit-limit derivation strategy in
/// [`CreditLimitPolicy`](crate::domain::CreditLimitPolicy).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClientTier {
    /// Exempt from credit checks entirely.
    VeryImportant,
    /// Credit-checked with a doubled limit.
    Important,
    /// Credit-checked at the externally scored limit.
    Standard,
}

impl ClientTier {
    /// Classify a client name by exact string equality against the two
    /// configured tier names. Anything else is [`ClientTier::Standard`].
    pub fn from_client_name(name: &str) -> Self {
        match name {
            VERY_IMPORTANT_CLIENT => Self::VeryImportant,
            IMPORTANT_CLIENT => Self::Important,
            _ => Self::Standard,
        }
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for tier classification.

    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("VeryImportantClient", ClientTier::VeryImportant)]
    #[case("ImportantClient", ClientTier::Important)]
    #[case("Bikram Swain", ClientTier::Standard)]
    #[case("", ClientTier::Standard)]
    // Matching is exact, not case-insensitive or fuzzy.
    #[case("veryimportantclient", ClientTier::Standard)]
    #[case("ImportantClient ", ClientTier::Standard)]
    fn classifies_by_exact_name(#[case] name: &str, #[case] expected: ClientTier) {
        assert_eq!(ClientTier::from_client_name(name), expected);
    }

    #[rstest]
    fn client_tier_reads_the_record_name(
        #[values("VeryImportantClient", "ImportantClient")] name: &str,
    ) {
        let client = Client {
            id: 7,
            name: name.to_owned(),
            status: ClientStatus::None,
        };
        assert_eq!(client.tier(), ClientTier::from_client_name(name));
    }
}
