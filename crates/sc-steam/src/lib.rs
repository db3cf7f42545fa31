//! sc-steam: water/steam property tables for steamcalc.
//!
//! Provides:
//! - `PropertyTable` trait: the oracle interface consumed by the state
//!   resolver, speaking the working units of a [`sc_core::UnitSystem`]
//! - `If97Table`: IAPWS-IF97 backed implementation covering region 1
//!   (compressed liquid), region 2 (vapor) and region 4 (saturation line)
//! - the underlying per-region sub-equations in IF97 SI units (MPa, K,
//!   kJ/kg, kJ/(kg·K), m³/kg) for callers that want them directly
//!
//! # Architecture
//!
//! The trait isolates the resolver from the backend. The near-critical
//! region 3 and the high-temperature region 5 are outside the implemented
//! domain; queries there return a domain error instead of a value.
//!
//! # Example
//!
//! ```
//! use sc_core::UnitSystem;
//! use sc_steam::{If97Table, PropertyTable};
//!
//! let table = If97Table::new(UnitSystem::Si);
//! let t_sat = table.t_sat(1.01325).unwrap(); // bar -> °C
//! assert!((t_sat - 99.97).abs() < 0.05);
//! ```

// uom's `unit!` extension macro (used in `units`) expands to a family of
// internal `storage_type_*` helper macros that are only reachable through the
// legacy `#[macro_use]` import, not `use` paths.
#[macro_use]
extern crate uom;

pub mod boundary;
pub mod error;
pub mod region1;
pub mod region2;
pub mod region4;
pub mod table;
mod units;

pub use error::{SteamError, SteamResult};
pub use table::{If97Table, PropertyTable, SatLine};

pub(crate) fn finite(v: f64, what: &'static str) -> SteamResult<f64> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(SteamError::NonFinite { what })
    }
}
