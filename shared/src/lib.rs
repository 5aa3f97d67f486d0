//! CastDesk review-queue core.
//!
//! In-memory store of identity-verification submissions plus the pure
//! readers and the single mutator the admin dashboard is built on:
//!
//! - [`store::VerificationStore`] — the single source of truth,
//! - [`filter::filter`] — tab + criteria narrowing, pure,
//! - [`counts::counts_by_status`] — tab badge aggregation, pure,
//! - [`dispatcher`] — reviewer status transitions, the only writer.
//!
//! Everything is synchronous and single-session; the initial record
//! collection comes from a static seed file (see [`seed`]).

pub mod counts;
pub mod dispatcher;
pub mod error;
pub mod filter;
pub mod record;
pub mod seed;
pub mod store;

pub use counts::{counts_by_status, StatusCounts};
pub use dispatcher::{apply, transition, ReviewAction};
pub use error::ReviewError;
pub use filter::{filter, Criteria, Tab};
pub use record::{Profile, SkillRating, Status, UserType, VerificationRecord};
pub use store::VerificationStore;
