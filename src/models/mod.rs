//! Domain models
//!
//! Wire payloads the client fetches and the records the aggregation
//! pipeline produces.

pub mod best;
pub mod standings;

pub use best::*;
pub use standings::*;
