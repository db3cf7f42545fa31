//! Error types for solver operations.

use sc_steam::SteamError;
use thiserror::Error;

/// Errors that can occur during a nonlinear solve.
#[derive(Error, Debug)]
pub enum SolverError {
    #[error("Convergence failed: {what}")]
    ConvergenceFailed { what: String },

    #[error("Numeric error: {what}")]
    Numeric { what: String },

    #[error("Steam table error: {0}")]
    Table(#[from] SteamError),
}

pub type SolverResult<T> = Result<T, SolverError>;
