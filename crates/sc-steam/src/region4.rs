//! IAPWS-IF97 region 4: the saturation line.
//!
//! The saturation-pressure equation is a quadratic in a transformed
//! temperature variable and inverts in closed form, so both directions are
//! exact. Inputs and outputs use IF97 SI units (MPa, K).

use crate::error::{SteamError, SteamResult};
use crate::finite;

/// Triple-point pressure, MPa.
pub const P_TRIPLE_MPA: f64 = 0.000_611_657;

/// Critical-point pressure, MPa.
pub const P_CRIT_MPA: f64 = 22.063_95;

/// Critical-point temperature, K.
pub const T_CRIT_K: f64 = 647.096;

/// Triple-point temperature, K.
pub const T_TRIPLE_K: f64 = 273.15;

const N9: f64 = -0.238_555_575_678_49;
const N10: f64 = 650.175_348_447_98;

fn sqrt_nonneg(x: f64, what: &'static str) -> SteamResult<f64> {
    if x.is_nan() || x < -1e-12 {
        return Err(SteamError::NonFinite { what });
    }
    Ok(x.max(0.0).sqrt())
}

/// Saturation pressure at `t_k`, MPa. Valid from the triple point to the
/// critical point.
pub fn p_sat_mpa(t_k: f64) -> SteamResult<f64> {
    if !t_k.is_finite() {
        return Err(SteamError::NonFinite {
            what: "saturation pressure input",
        });
    }
    if !(T_TRIPLE_K..=T_CRIT_K).contains(&t_k) {
        return Err(SteamError::TemperatureOutOfRange { t_k });
    }

    let theta = t_k + N9 / (t_k - N10);
    let a = theta * theta + 1_167.052_145_276_7 * theta - 724_213.167_032_06;
    let b = -17.073_846_940_092 * theta * theta + 12_020.824_702_47 * theta - 3_232_555.032_233_3;
    let c = 14.915_108_613_53 * theta * theta - 4_823.265_736_159_1 * theta + 405_113.405_420_57;
    let root = sqrt_nonneg(b * b - 4.0 * a * c, "saturation pressure discriminant")?;
    let denom = -b + root;
    if denom == 0.0 {
        return Err(SteamError::NonFinite {
            what: "saturation pressure",
        });
    }
    finite((2.0 * c / denom).powi(4), "saturation pressure")
}

/// Saturation temperature at `p_mpa`, K. Valid from the triple point to the
/// critical point.
pub fn t_sat_k(p_mpa: f64) -> SteamResult<f64> {
    if !p_mpa.is_finite() {
        return Err(SteamError::NonFinite {
            what: "saturation temperature input",
        });
    }
    if !(0.000_611..=P_CRIT_MPA).contains(&p_mpa) {
        return Err(SteamError::PressureOutOfRange { p_mpa });
    }

    let beta = p_mpa.powf(0.25);
    let e = beta * beta - 17.073_846_940_092 * beta + 14.915_108_613_53;
    let f = 1_167.052_145_276_7 * beta * beta + 12_020.824_702_47 * beta - 4_823.265_736_159_1;
    let g = -724_213.167_032_06 * beta * beta - 3_232_555.032_233_3 * beta + 405_113.405_420_57;
    let root = sqrt_nonneg(f * f - 4.0 * e * g, "saturation temperature discriminant")?;
    let denom = -f - root;
    if denom == 0.0 {
        return Err(SteamError::NonFinite {
            what: "saturation temperature",
        });
    }
    let d = 2.0 * g / denom;
    let disc = (N10 + d) * (N10 + d) - 4.0 * (N9 + N10 * d);
    let root2 = sqrt_nonneg(disc, "saturation temperature discriminant")?;
    finite((N10 + d - root2) / 2.0, "saturation temperature")
}

#[cfg(test)]
mod tests {
    use super::*;

    // IAPWS-IF97 verification tables 35 and 36.
    #[test]
    fn saturation_pressure_reference_points() {
        assert!((p_sat_mpa(300.0).unwrap() - 0.353_658_941e-2).abs() < 1e-10);
        assert!((p_sat_mpa(500.0).unwrap() - 0.263_889_776e1).abs() < 1e-6);
        assert!((p_sat_mpa(600.0).unwrap() - 0.123_443_146e2).abs() < 1e-5);
    }

    #[test]
    fn saturation_temperature_reference_points() {
        assert!((t_sat_k(0.1).unwrap() - 372.755_919).abs() < 1e-5);
        assert!((t_sat_k(1.0).unwrap() - 453.035_632).abs() < 1e-5);
        assert!((t_sat_k(10.0).unwrap() - 584.149_488).abs() < 1e-5);
    }

    #[test]
    fn directions_invert_each_other() {
        for p in [0.001, 0.101_325, 1.0, 5.0, 16.0] {
            let t = t_sat_k(p).unwrap();
            let back = p_sat_mpa(t).unwrap();
            assert!((back - p).abs() < p * 1e-9, "p = {p}");
        }
    }

    #[test]
    fn rejects_out_of_range() {
        assert!(p_sat_mpa(200.0).is_err());
        assert!(p_sat_mpa(700.0).is_err());
        assert!(t_sat_k(25.0).is_err());
        assert!(t_sat_k(1e-5).is_err());
    }
}
