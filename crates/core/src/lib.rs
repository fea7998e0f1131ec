//! eventdash_core - pure functional core of the eventdash dashboard.
//!
//! Record types and the seed dataset live in [`calendar`]; the faceted
//! query engine lives in [`query`]. Nothing here performs I/O.

pub mod calendar;
pub mod query;
pub mod serde;
