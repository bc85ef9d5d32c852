//! User registration workflow.
//!
//! Validates a prospective user (name, email, age), derives a credit limit
//! from the client's tier, enforces the minimum credit floor, and hands
//! accepted records to a persistence sink. External collaborators (clock,
//! client directory, credit score probe, user sink) are injected through
//! the traits in [`domain::ports`]; composition happens at the call site.

pub mod domain;
