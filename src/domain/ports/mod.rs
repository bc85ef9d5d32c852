//! Domain ports defining the edges of the hexagon.
//!
//! Ports describe how the registration workflow expects to interact with
//! its external collaborators (the client directory, the credit scoring
//! service, the persistence sink). Each trait exposes strongly typed
//! errors so adapters map their failures into predictable variants. Time
//! enters through [`mockable::Clock`] rather than a bespoke trait.
//!
//! All ports are synchronous: the workflow has no suspension points and
//! invokes each collaborator at most once per attempt.

mod client_directory;
mod credit_score_probe;
mod user_sink;

#[cfg(test)]
pub use client_directory::MockClientDirectory;
pub use client_directory::{ClientDirectory, ClientDirectoryError, FixtureClientDirectory};
#[cfg(test)]
pub use credit_score_probe::MockCreditScoreProbe;
pub use credit_score_probe::{
    CreditScoreProbe, CreditScoreProbeError, FIXTURE_CREDIT_LIMIT, FixtureCreditScoreProbe,
};
#[cfg(test)]
pub use user_sink::MockUserSink;
pub use user_sink::{FixtureUserSink, UserSink, UserSinkError};
