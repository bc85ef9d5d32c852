//! Port for resolving client identifiers to client records.

use thiserror::Error;

use crate::domain::client::{Client, ClientStatus};

/// Errors raised by client directory adapters.
///
/// An unknown identifier is a fault, not a validation outcome: the
/// workflow propagates it to the caller rather than rejecting the
/// registration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientDirectoryError {
    /// No client exists for the requested identifier.
    #[error("client {client_id} not found")]
    NotFound { client_id: i64 },
    /// The directory could not be consulted.
    #[error("client lookup failed: {message}")]
    Lookup { message: String },
}

impl ClientDirectoryError {
    /// Helper for unknown identifiers.
    pub fn not_found(client_id: i64) -> Self {
        Self::NotFound { client_id }
    }

    /// Helper for directory-level failures.
    pub fn lookup(message: impl Into<String>) -> Self {
        Self::Lookup {
            message: message.into(),
        }
    }
}

/// Port for client record resolution.
#[cfg_attr(test, mockall::automock)]
pub trait ClientDirectory: Send + Sync {
    /// Resolve a client by its identifier.
    fn get_by_id(&self, client_id: i64) -> Result<Client, ClientDirectoryError>;
}

/// Fixture implementation for tests that do not exercise client lookup.
///
/// Returns a standard-tier client echoing the requested identifier.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureClientDirectory;

impl ClientDirectory for FixtureClientDirectory {
    fn get_by_id(&self, client_id: i64) -> Result<Client, ClientDirectoryError> {
        Ok(Client {
            id: client_id,
            name: "Fixture Client".to_owned(),
            status: ClientStatus::None,
        })
    }
}
