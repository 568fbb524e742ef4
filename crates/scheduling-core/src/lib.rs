//! # scheduling-core
//!
//! Computes when one or more users are free, given their calendars of busy
//! events, optionally restricted to each user's daily working hours in their
//! own timezone.
//!
//! The interval algebra is three pure functions over sorted, half-open
//! intervals: a sweep-line gap extractor, a day-boundary working-hour clipper
//! and a k-way intersection. Around them sit a read-only user store and the
//! request layer that validates parameters and wires the stages together.
//!
//! ## Modules
//!
//! - [`availability`] — the half-open `Availability` interval type
//! - [`freebusy`] — busy events → free gaps, with pluggable gap policies
//! - [`workhours`] — clip a gap to daily working-hour windows across days
//! - [`dst`] — resolve local wall-clock times that DST skips or repeats
//! - [`intersect`] — common availability of several users
//! - [`model`] — events, users and working hours
//! - [`store`] — the JSON-backed, read-only user database
//! - [`query`] — request validation and orchestration
//! - [`datetime`] — ISO 8601 parsing into UTC instants
//! - [`error`] — Error types

pub mod availability;
pub mod datetime;
pub mod dst;
pub mod error;
pub mod freebusy;
pub mod intersect;
pub mod model;
pub mod query;
pub mod store;
pub mod workhours;

pub use availability::Availability;
pub use error::SchedulingError;
pub use freebusy::{find_availability, AvailabilityPolicy, RawAvailabilityPolicy};
pub use intersect::intersect_availabilities;
pub use model::{Event, User, WorkingHours};
pub use query::{get_availability, AvailabilityRequest, AvailabilityResponse, ErrorResponse};
pub use store::Database;
pub use workhours::{clip_to_working_hours, WorkHourAvailabilityPolicy};
