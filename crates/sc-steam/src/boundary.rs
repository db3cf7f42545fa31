//! Region geometry of the implemented IF97 domain.
//!
//! Regions 1, 2 and 4 are covered. States above the B23 line (region 3) and
//! above 1073.15 K (region 5) are reported as out of range.

use crate::error::{SteamError, SteamResult};
use crate::finite;
use crate::region4;

/// Lowest single-phase pressure, MPa.
pub const P_MIN_MPA: f64 = 0.000_611;

/// Highest single-phase pressure, MPa.
pub const P_MAX_MPA: f64 = 100.0;

/// Highest temperature covered by region 2, K.
pub const T_MAX_K: f64 = 1_073.15;

/// Highest temperature covered by region 1, K.
pub const T_R1_MAX_K: f64 = 623.15;

/// Highest pressure for which the saturated states fall in regions 1/2, MPa
/// (B23 pressure at 623.15 K). The saturation line beyond this point runs
/// through region 3 and is outside the implemented domain.
pub const P_SAT_LINE_MAX_MPA: f64 = 16.529;

/// Phase of a single-phase (p, T) state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SinglePhase {
    Liquid,
    Vapor,
}

/// B23 boundary pressure at `t_k`, MPa.
pub fn b23_p_mpa(t_k: f64) -> SteamResult<f64> {
    if !t_k.is_finite() {
        return Err(SteamError::NonFinite {
            what: "B23 boundary input",
        });
    }
    finite(
        348.051_856_289_69 - 1.167_185_987_997_5 * t_k + 1.019_297_003_932_6e-3 * t_k * t_k,
        "B23 boundary pressure",
    )
}

/// B23 boundary temperature at `p_mpa`, K.
pub fn b23_t_k(p_mpa: f64) -> SteamResult<f64> {
    if !p_mpa.is_finite() {
        return Err(SteamError::NonFinite {
            what: "B23 boundary input",
        });
    }
    let disc = (p_mpa - 13.918_839_778_87) / 1.019_297_003_932_6e-3;
    if disc < 0.0 {
        return Err(SteamError::PressureOutOfRange { p_mpa });
    }
    finite(572.544_598_627_46 + disc.sqrt(), "B23 boundary temperature")
}

/// Classify a single-phase (p, T) state as liquid (region 1) or vapor
/// (region 2). States in region 3 or beyond 1073.15 K are out of range.
///
/// A point exactly on the saturation line is reported as liquid; callers
/// that care about two-phase behavior must consult the saturation line
/// themselves before asking for a single-phase value.
pub fn classify_pt(p_mpa: f64, t_k: f64) -> SteamResult<SinglePhase> {
    if !p_mpa.is_finite() || !t_k.is_finite() {
        return Err(SteamError::NonFinite {
            what: "phase classification input",
        });
    }
    if !(P_MIN_MPA..=P_MAX_MPA).contains(&p_mpa) {
        return Err(SteamError::PressureOutOfRange { p_mpa });
    }
    if !(region4::T_TRIPLE_K..=T_MAX_K).contains(&t_k) {
        return Err(SteamError::TemperatureOutOfRange { t_k });
    }

    if t_k <= T_R1_MAX_K {
        if p_mpa >= region4::p_sat_mpa(t_k)? {
            Ok(SinglePhase::Liquid)
        } else {
            Ok(SinglePhase::Vapor)
        }
    } else if p_mpa <= b23_p_mpa(t_k)? {
        Ok(SinglePhase::Vapor)
    } else {
        Err(SteamError::OutOfRange {
            what: "near-critical region 3 state",
        })
    }
}
