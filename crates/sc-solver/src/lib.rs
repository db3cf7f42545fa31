//! Nonlinear root-finding for the state resolver.
//!
//! A damped Newton iteration over `nalgebra` vectors with a forward
//! finite-difference Jacobian. The same machinery serves both the
//! single-variable searches (temperature at fixed pressure, pressure at
//! fixed temperature or quality) and the simultaneous (p, T) searches.

pub mod error;
pub mod jacobian;
pub mod newton;

pub use error::{SolverError, SolverResult};
pub use jacobian::finite_difference_jacobian;
pub use newton::{NewtonConfig, NewtonResult, newton_solve};
