//! sc-core: stable foundation for steamcalc.
//!
//! Contains:
//! - numeric (Real + tolerances + float helpers)
//! - units (working unit-system selection + display labels)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{ScError, ScResult};
pub use numeric::*;
pub use units::*;
