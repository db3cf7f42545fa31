//! Steam table errors.

use thiserror::Error;

/// Result type for table operations.
pub type SteamResult<T> = Result<T, SteamError>;

/// Errors that can occur during property lookups.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SteamError {
    /// Pressure outside the implemented table domain (MPa, internal units).
    #[error("Pressure {p_mpa} MPa outside the supported table range")]
    PressureOutOfRange { p_mpa: f64 },

    /// Temperature outside the implemented table domain (K, internal units).
    #[error("Temperature {t_k} K outside the supported table range")]
    TemperatureOutOfRange { t_k: f64 },

    /// Query left the implemented region layout (e.g. region 3).
    #[error("Value out of range for {what}")]
    OutOfRange { what: &'static str },

    /// An input or intermediate value was NaN or infinite.
    #[error("Non-finite value for {what}")]
    NonFinite { what: &'static str },
}
