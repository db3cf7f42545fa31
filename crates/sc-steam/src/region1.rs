//! IAPWS-IF97 region 1: compressed liquid up to 623.15 K.
//!
//! The basic equation is the dimensionless Gibbs energy γ(π, τ) with
//! π = p / 16.53 MPa and τ = 1386 K / T; properties come from its first
//! partial derivatives. Backward equations give T(p,h) and T(p,s).
//! Inputs and outputs use IF97 SI units: MPa, K, kJ/kg, kJ/(kg·K), m³/kg.

use crate::error::{SteamError, SteamResult};
use crate::finite;

/// Specific gas constant for water, kJ/(kg·K).
pub(crate) const R: f64 = 0.461_526;

const I: [i32; 34] = [
    0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 2, 2, 2, 2, 2, 3, 3, 3, 4, 4, 4, 5, 8, 8, 21, 23, 29,
    30, 31, 32,
];
const J: [i32; 34] = [
    -2, -1, 0, 1, 2, 3, 4, 5, -9, -7, -1, 0, 1, 3, -3, 0, 1, 3, 17, -4, 0, 6, -5, -2, 10, -8, -11,
    -6, -29, -31, -38, -39, -40, -41,
];
const N: [f64; 34] = [
    0.146_329_712_131_67,
    -0.845_481_871_691_14,
    -3.756_360_367_204,
    3.385_516_916_838_5,
    -0.957_919_633_878_72,
    0.157_720_385_132_28,
    -0.016_616_417_199_501,
    8.121_462_998_356_8e-4,
    2.831_908_012_380_4e-4,
    -6.070_630_156_587_4e-4,
    -0.018_990_068_218_419,
    -0.032_529_748_770_505,
    -0.021_841_717_175_414,
    -5.283_835_796_993e-5,
    -4.718_432_107_326_7e-4,
    -3.000_178_079_302_6e-4,
    4.766_139_390_698_7e-5,
    -4.414_184_533_084_6e-6,
    -7.269_499_629_759_4e-16,
    -3.167_964_484_505_4e-5,
    -2.827_079_798_531_2e-6,
    -8.520_512_812_010_3e-10,
    -2.242_528_190_8e-6,
    -6.517_122_289_560_1e-7,
    -1.434_172_993_792_4e-13,
    -4.051_699_686_011_7e-7,
    -1.273_430_174_164_1e-9,
    -1.742_487_123_063_4e-10,
    -6.876_213_129_553_1e-19,
    1.447_830_782_852_1e-20,
    2.633_578_166_279_5e-23,
    -1.194_762_264_007_1e-23,
    1.822_809_458_140_4e-24,
    -9.353_708_729_245_8e-26,
];

fn scaled(p_mpa: f64, t_k: f64) -> SteamResult<(f64, f64)> {
    if !p_mpa.is_finite() || !t_k.is_finite() {
        return Err(SteamError::NonFinite {
            what: "region-1 lookup input",
        });
    }
    if p_mpa <= 0.0 {
        return Err(SteamError::PressureOutOfRange { p_mpa });
    }
    if t_k <= 0.0 {
        return Err(SteamError::TemperatureOutOfRange { t_k });
    }
    Ok((p_mpa / 16.53, 1386.0 / t_k))
}

fn terms() -> impl Iterator<Item = (i32, i32, f64)> {
    I.into_iter().zip(J).zip(N).map(|((i, j), n)| (i, j, n))
}

fn gamma(pi: f64, tau: f64) -> f64 {
    terms()
        .map(|(i, j, n)| n * (7.1 - pi).powi(i) * (tau - 1.222).powi(j))
        .sum()
}

fn gamma_pi(pi: f64, tau: f64) -> f64 {
    terms()
        .map(|(i, j, n)| -n * f64::from(i) * (7.1 - pi).powi(i - 1) * (tau - 1.222).powi(j))
        .sum()
}

fn gamma_tau(pi: f64, tau: f64) -> f64 {
    terms()
        .map(|(i, j, n)| n * (7.1 - pi).powi(i) * f64::from(j) * (tau - 1.222).powi(j - 1))
        .sum()
}

/// Specific volume, m³/kg.
pub fn v_pt(p_mpa: f64, t_k: f64) -> SteamResult<f64> {
    let (pi, tau) = scaled(p_mpa, t_k)?;
    finite(
        R * t_k / p_mpa * pi * gamma_pi(pi, tau) / 1000.0,
        "region-1 specific volume",
    )
}

/// Specific enthalpy, kJ/kg.
pub fn h_pt(p_mpa: f64, t_k: f64) -> SteamResult<f64> {
    let (pi, tau) = scaled(p_mpa, t_k)?;
    finite(R * t_k * tau * gamma_tau(pi, tau), "region-1 enthalpy")
}

/// Specific internal energy, kJ/kg.
pub fn u_pt(p_mpa: f64, t_k: f64) -> SteamResult<f64> {
    let (pi, tau) = scaled(p_mpa, t_k)?;
    finite(
        R * t_k * (tau * gamma_tau(pi, tau) - pi * gamma_pi(pi, tau)),
        "region-1 internal energy",
    )
}

/// Specific entropy, kJ/(kg·K).
pub fn s_pt(p_mpa: f64, t_k: f64) -> SteamResult<f64> {
    let (pi, tau) = scaled(p_mpa, t_k)?;
    finite(
        R * (tau * gamma_tau(pi, tau) - gamma(pi, tau)),
        "region-1 entropy",
    )
}

const BW_PH_I: [i32; 20] = [0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 1, 2, 2, 3, 3, 4, 5, 6];
const BW_PH_J: [i32; 20] = [
    0, 1, 2, 6, 22, 32, 0, 1, 2, 3, 4, 10, 32, 10, 32, 10, 32, 32, 32, 32,
];
const BW_PH_N: [f64; 20] = [
    -238.724_899_245_21,
    404.211_886_379_45,
    113.497_468_817_18,
    -5.845_761_604_803_9,
    -1.528_548_241_314e-4,
    -1.086_670_769_537_7e-6,
    -13.391_744_872_602,
    43.211_039_183_559,
    -54.010_067_170_506,
    30.535_892_203_916,
    -6.596_474_942_363_8,
    9.396_540_087_836_3e-3,
    1.157_364_750_534e-7,
    -2.585_864_128_207_3e-5,
    -4.064_436_308_479_9e-9,
    6.645_618_619_163_5e-8,
    8.067_073_410_302_7e-11,
    -9.347_777_121_394_7e-13,
    5.826_544_202_060_1e-15,
    -1.502_018_595_350_3e-17,
];

/// Backward equation T(p,h), K.
pub fn t_ph(p_mpa: f64, h: f64) -> SteamResult<f64> {
    if !p_mpa.is_finite() || !h.is_finite() {
        return Err(SteamError::NonFinite {
            what: "region-1 T(p,h) input",
        });
    }
    let eta = h / 2500.0;
    let t: f64 = BW_PH_I
        .into_iter()
        .zip(BW_PH_J)
        .zip(BW_PH_N)
        .map(|((i, j), n)| n * p_mpa.powi(i) * (eta + 1.0).powi(j))
        .sum();
    finite(t, "region-1 T(p,h)")
}

const BW_PS_I: [i32; 20] = [0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 2, 2, 2, 2, 2, 3, 3, 4];
const BW_PS_J: [i32; 20] = [
    0, 1, 2, 3, 11, 31, 0, 1, 2, 3, 12, 31, 0, 1, 2, 9, 31, 10, 32, 32,
];
const BW_PS_N: [f64; 20] = [
    174.782_680_583_07,
    34.806_930_892_873,
    6.529_258_497_845_5,
    0.330_399_817_754_89,
    -1.928_138_292_319_6e-7,
    -2.490_919_724_457_3e-23,
    -0.261_076_364_893_32,
    0.225_929_659_815_86,
    -0.064_256_463_395_226,
    7.887_628_927_052_6e-3,
    3.567_211_060_736_6e-10,
    1.733_249_699_489_5e-24,
    5.660_890_065_483_7e-4,
    -3.263_548_313_971_7e-4,
    4.477_828_669_063_2e-5,
    -5.132_215_690_850_7e-10,
    -4.252_265_704_220_7e-26,
    2.640_044_136_068_9e-13,
    7.812_460_045_972_3e-29,
    -3.073_219_990_366_8e-31,
];

/// Backward equation T(p,s), K.
pub fn t_ps(p_mpa: f64, s: f64) -> SteamResult<f64> {
    if !p_mpa.is_finite() || !s.is_finite() {
        return Err(SteamError::NonFinite {
            what: "region-1 T(p,s) input",
        });
    }
    let t: f64 = BW_PS_I
        .into_iter()
        .zip(BW_PS_J)
        .zip(BW_PS_N)
        .map(|((i, j), n)| n * p_mpa.powi(i) * (s + 2.0).powi(j))
        .sum();
    finite(t, "region-1 T(p,s)")
}
