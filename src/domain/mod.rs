//! Domain types and services for user registration.
//!
//! The hexagon's inside: the [`Client`] and [`User`] records, the
//! validation predicates, the tier-keyed credit limit policy, and the
//! registration service that orchestrates them. Everything the workflow
//! needs from the outside world enters through the traits in [`ports`].

pub mod client;
pub mod credit_policy;
pub mod ports;
pub mod registration_service;
pub mod user;
pub mod validation;

pub use self::client::{Client, ClientStatus, ClientTier};
pub use self::credit_policy::CreditLimitPolicy;
pub use self::registration_service::{
    RegistrationError, RegistrationOutcome, RegistrationRequest, RegistrationService,
};
pub use self::user::User;
pub use self::validation::{MINIMUM_AGE, MINIMUM_CREDIT_LIMIT, UserValidator};
