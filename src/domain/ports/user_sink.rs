//! Port for persisting accepted user records.

use thiserror::Error;

use crate::domain::user::User;

/// Errors raised by user persistence adapters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserSinkError {
    /// The record could not be written.
    #[error("user persistence failed: {message}")]
    Write { message: String },
}

impl UserSinkError {
    /// Helper for write failures.
    pub fn write(message: impl Into<String>) -> Self {
        Self::Write {
            message: message.into(),
        }
    }
}

/// Port for user persistence.
///
/// Receives only fully accepted users; the workflow never hands over a
/// record that failed a validation predicate.
#[cfg_attr(test, mockall::automock)]
pub trait UserSink: Send + Sync {
    /// Persist an accepted user.
    fn add_user(&self, user: &User) -> Result<(), UserSinkError>;
}

/// Fixture implementation for tests that do not exercise persistence.
/// Discards the record.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureUserSink;

impl UserSink for FixtureUserSink {
    fn add_user(&self, _user: &User) -> Result<(), UserSinkError> {
        Ok(())
    }
}
