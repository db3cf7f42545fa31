//! Resolution errors.

use sc_solver::SolverError;
use sc_steam::SteamError;
use thiserror::Error;

/// Errors surfaced by the state resolver.
///
/// Nothing is recovered by substituting default values; every failure
/// carries the offending inputs in its message.
#[derive(Error, Debug)]
pub enum ResolveError {
    /// Caller-supplied inputs are unusable: duplicate property tag,
    /// non-finite value, or mismatched unit systems in a difference.
    #[error("Invalid input: {what}")]
    InvalidInput { what: String },

    /// The pair fell through every dispatch bucket. Unreachable with the
    /// seven-symbol alphabet; kept as an explicit invariant violation.
    #[error("No resolution rule for property pair {a}-{b}")]
    UnsupportedCombination { a: char, b: char },

    /// The property table was queried outside its valid physical range.
    #[error("Property table error: {0}")]
    Table(#[from] SteamError),

    /// The nonlinear solver failed to converge or broke down.
    #[error("Solver error: {0}")]
    Solver(#[from] SolverError),
}
