//! sc-state: water/steam state resolution for steamcalc.
//!
//! Given any two independent intensive properties from {p, T, v, u, h, s, x},
//! the resolver classifies the governing region (sub-cooled liquid,
//! super-heated vapor, two-phase) and computes the remaining properties
//! consistently with it. The unordered pair dispatches to one of 21
//! resolution rules; rules without a closed-form inversion formulate a
//! residual and hand it to the Newton solver.
//!
//! Resolution is synchronous, per-call and side-effect free: every call
//! builds a fresh state value and shares nothing mutable with other calls.
//!
//! # Example
//!
//! ```
//! use sc_core::UnitSystem;
//! use sc_state::{PropertyTag, Region, resolve};
//!
//! let state = resolve(
//!     PropertyTag::Pressure,
//!     PropertyTag::Temperature,
//!     1.0,   // bar
//!     150.0, // °C
//!     UnitSystem::Si,
//! )
//! .unwrap();
//! assert_eq!(state.region, Region::SuperheatedVapor);
//! assert!((state.h - 2776.4).abs() < 1.0);
//! ```

pub mod error;
pub mod property;
mod residual;
pub mod resolve;
pub mod state;

pub use error::ResolveError;
pub use property::{PropertyPair, PropertySpec, PropertyTag, Rule, rule_for};
pub use resolve::{resolve, resolve_with};
pub use state::{Region, StateDelta, SteamState, delta};
