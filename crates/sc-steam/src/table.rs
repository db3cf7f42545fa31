//! Working-unit steam table facade over the IF97 sub-equations.

use crate::boundary::{self, SinglePhase};
use crate::error::{SteamError, SteamResult};
use crate::units;
use crate::{region1, region2, region4};
use sc_core::UnitSystem;

/// Saturation-line snapshot at one pressure, in working units.
///
/// Batches every boundary value the resolver needs so that a resolution
/// touches the saturation line once per pressure.
#[derive(Clone, Copy, Debug)]
pub struct SatLine {
    /// Saturation pressure
    pub p: f64,
    /// Saturation temperature
    pub t: f64,
    /// Saturated liquid / vapor specific volume
    pub vf: f64,
    pub vg: f64,
    /// Saturated liquid / vapor internal energy
    pub uf: f64,
    pub ug: f64,
    /// Saturated liquid / vapor enthalpy
    pub hf: f64,
    pub hg: f64,
    /// Saturated liquid / vapor entropy
    pub sf: f64,
    pub sg: f64,
}

/// Property oracle consumed by the state resolver.
///
/// Every value crossing this interface is a plain `f64` in the working units
/// of the table's [`UnitSystem`]. Implementations are deterministic over
/// their valid domain and must be reentrant (Send + Sync) so concurrent
/// resolutions can share one table; out-of-domain queries return an error
/// rather than a substitute value.
pub trait PropertyTable: Send + Sync {
    /// Unit system this table was constructed with.
    fn units(&self) -> UnitSystem;

    /// Saturation temperature at pressure `p`.
    fn t_sat(&self, p: f64) -> SteamResult<f64>;

    /// Saturation pressure at temperature `t`.
    fn p_sat(&self, t: f64) -> SteamResult<f64>;

    /// All saturation boundary values at pressure `p`.
    fn sat_line(&self, p: f64) -> SteamResult<SatLine>;

    /// All saturation boundary values at temperature `t`.
    fn sat_line_at_t(&self, t: f64) -> SteamResult<SatLine>;

    /// Single-phase specific volume at (p, t).
    fn v_pt(&self, p: f64, t: f64) -> SteamResult<f64>;

    /// Single-phase internal energy at (p, t).
    fn u_pt(&self, p: f64, t: f64) -> SteamResult<f64>;

    /// Single-phase enthalpy at (p, t).
    fn h_pt(&self, p: f64, t: f64) -> SteamResult<f64>;

    /// Single-phase entropy at (p, t).
    fn s_pt(&self, p: f64, t: f64) -> SteamResult<f64>;

    /// Temperature from pressure and enthalpy.
    fn t_ph(&self, p: f64, h: f64) -> SteamResult<f64>;

    /// Temperature from pressure and entropy.
    fn t_ps(&self, p: f64, s: f64) -> SteamResult<f64>;

    /// Pressure from temperature and enthalpy.
    fn p_th(&self, t: f64, h: f64) -> SteamResult<f64>;

    /// Pressure from temperature and entropy.
    fn p_ts(&self, t: f64, s: f64) -> SteamResult<f64>;
}

/// IAPWS-IF97 backed table (regions 1, 2 and 4).
///
/// The unit system is fixed at construction; a table is a cheap `Copy` value
/// and a fresh one can be made per resolution, so a unit-system change never
/// mutates shared state.
#[derive(Clone, Copy, Debug, Default)]
pub struct If97Table {
    units: UnitSystem,
}

impl If97Table {
    pub fn new(units: UnitSystem) -> Self {
        Self { units }
    }

    fn sat_line_from_mpa(&self, p_mpa: f64) -> SteamResult<SatLine> {
        if !(region4::P_TRIPLE_MPA..=boundary::P_SAT_LINE_MAX_MPA).contains(&p_mpa) {
            return Err(SteamError::OutOfRange {
                what: "saturation line beyond the region-1/2 span",
            });
        }
        let ts = region4::t_sat_k(p_mpa)?;
        let u = self.units;
        Ok(SatLine {
            p: units::p_from_mpa(u, p_mpa),
            t: units::t_from_k(u, ts),
            vf: units::v_from_si(u, region1::v_pt(p_mpa, ts)?),
            vg: units::v_from_si(u, region2::v_pt(p_mpa, ts)?),
            uf: units::e_from_si(u, region1::u_pt(p_mpa, ts)?),
            ug: units::e_from_si(u, region2::u_pt(p_mpa, ts)?),
            hf: units::e_from_si(u, region1::h_pt(p_mpa, ts)?),
            hg: units::e_from_si(u, region2::h_pt(p_mpa, ts)?),
            sf: units::s_from_si(u, region1::s_pt(p_mpa, ts)?),
            sg: units::s_from_si(u, region2::s_pt(p_mpa, ts)?),
        })
    }
}

impl PropertyTable for If97Table {
    fn units(&self) -> UnitSystem {
        self.units
    }

    fn t_sat(&self, p: f64) -> SteamResult<f64> {
        let t_k = region4::t_sat_k(units::p_to_mpa(self.units, p))?;
        Ok(units::t_from_k(self.units, t_k))
    }

    fn p_sat(&self, t: f64) -> SteamResult<f64> {
        let p_mpa = region4::p_sat_mpa(units::t_to_k(self.units, t))?;
        Ok(units::p_from_mpa(self.units, p_mpa))
    }

    fn sat_line(&self, p: f64) -> SteamResult<SatLine> {
        self.sat_line_from_mpa(units::p_to_mpa(self.units, p))
    }

    fn sat_line_at_t(&self, t: f64) -> SteamResult<SatLine> {
        let t_k = units::t_to_k(self.units, t);
        if t_k > boundary::T_R1_MAX_K {
            return Err(SteamError::OutOfRange {
                what: "saturation line beyond the region-1/2 span",
            });
        }
        self.sat_line_from_mpa(region4::p_sat_mpa(t_k)?)
    }

    fn v_pt(&self, p: f64, t: f64) -> SteamResult<f64> {
        let v = v_pt_si(units::p_to_mpa(self.units, p), units::t_to_k(self.units, t))?;
        Ok(units::v_from_si(self.units, v))
    }

    fn u_pt(&self, p: f64, t: f64) -> SteamResult<f64> {
        let u = u_pt_si(units::p_to_mpa(self.units, p), units::t_to_k(self.units, t))?;
        Ok(units::e_from_si(self.units, u))
    }

    fn h_pt(&self, p: f64, t: f64) -> SteamResult<f64> {
        let h = h_pt_si(units::p_to_mpa(self.units, p), units::t_to_k(self.units, t))?;
        Ok(units::e_from_si(self.units, h))
    }

    fn s_pt(&self, p: f64, t: f64) -> SteamResult<f64> {
        let s = s_pt_si(units::p_to_mpa(self.units, p), units::t_to_k(self.units, t))?;
        Ok(units::s_from_si(self.units, s))
    }

    fn t_ph(&self, p: f64, h: f64) -> SteamResult<f64> {
        let t_k = t_ph_si(
            units::p_to_mpa(self.units, p),
            units::e_to_si(self.units, h),
        )?;
        Ok(units::t_from_k(self.units, t_k))
    }

    fn t_ps(&self, p: f64, s: f64) -> SteamResult<f64> {
        let t_k = t_ps_si(
            units::p_to_mpa(self.units, p),
            units::s_to_si(self.units, s),
        )?;
        Ok(units::t_from_k(self.units, t_k))
    }

    fn p_th(&self, t: f64, h: f64) -> SteamResult<f64> {
        let p_mpa = p_th_si(
            units::t_to_k(self.units, t),
            units::e_to_si(self.units, h),
        )?;
        Ok(units::p_from_mpa(self.units, p_mpa))
    }

    fn p_ts(&self, t: f64, s: f64) -> SteamResult<f64> {
        let p_mpa = p_ts_si(
            units::t_to_k(self.units, t),
            units::s_to_si(self.units, s),
        )?;
        Ok(units::p_from_mpa(self.units, p_mpa))
    }
}

fn v_pt_si(p_mpa: f64, t_k: f64) -> SteamResult<f64> {
    match boundary::classify_pt(p_mpa, t_k)? {
        SinglePhase::Liquid => region1::v_pt(p_mpa, t_k),
        SinglePhase::Vapor => region2::v_pt(p_mpa, t_k),
    }
}

fn u_pt_si(p_mpa: f64, t_k: f64) -> SteamResult<f64> {
    match boundary::classify_pt(p_mpa, t_k)? {
        SinglePhase::Liquid => region1::u_pt(p_mpa, t_k),
        SinglePhase::Vapor => region2::u_pt(p_mpa, t_k),
    }
}

fn h_pt_si(p_mpa: f64, t_k: f64) -> SteamResult<f64> {
    match boundary::classify_pt(p_mpa, t_k)? {
        SinglePhase::Liquid => region1::h_pt(p_mpa, t_k),
        SinglePhase::Vapor => region2::h_pt(p_mpa, t_k),
    }
}

fn s_pt_si(p_mpa: f64, t_k: f64) -> SteamResult<f64> {
    match boundary::classify_pt(p_mpa, t_k)? {
        SinglePhase::Liquid => region1::s_pt(p_mpa, t_k),
        SinglePhase::Vapor => region2::s_pt(p_mpa, t_k),
    }
}

fn checked_t(t_k: f64) -> SteamResult<f64> {
    if !(region4::T_TRIPLE_K..=boundary::T_MAX_K + 0.1).contains(&t_k) {
        return Err(SteamError::TemperatureOutOfRange { t_k });
    }
    Ok(t_k)
}

fn t_ph_si(p_mpa: f64, h: f64) -> SteamResult<f64> {
    if !(boundary::P_MIN_MPA..=boundary::P_MAX_MPA).contains(&p_mpa) {
        return Err(SteamError::PressureOutOfRange { p_mpa });
    }
    if p_mpa < region4::P_TRIPLE_MPA {
        // below the triple line everything is vapor
        return checked_t(region2::t_ph(p_mpa, h)?);
    }
    if p_mpa <= boundary::P_SAT_LINE_MAX_MPA {
        let ts = region4::t_sat_k(p_mpa)?;
        let hf = region1::h_pt(p_mpa, ts)?;
        let hg = region2::h_pt(p_mpa, ts)?;
        if (hf..=hg).contains(&h) {
            return Ok(ts);
        }
        if h < hf {
            checked_t(region1::t_ph(p_mpa, h)?)
        } else {
            checked_t(region2::t_ph(p_mpa, h)?)
        }
    } else {
        // above the saturated span: region 1 up to 623.15 K, region 2 past B23
        let h_liquid_max = region1::h_pt(p_mpa, boundary::T_R1_MAX_K)?;
        if h <= h_liquid_max {
            checked_t(region1::t_ph(p_mpa, h)?)
        } else {
            let t = checked_t(region2::t_ph(p_mpa, h)?)?;
            if t + 1e-6 >= boundary::b23_t_k(p_mpa)? {
                Ok(t)
            } else {
                Err(SteamError::OutOfRange {
                    what: "enthalpy in the region-3 band at this pressure",
                })
            }
        }
    }
}

fn t_ps_si(p_mpa: f64, s: f64) -> SteamResult<f64> {
    if !(boundary::P_MIN_MPA..=boundary::P_MAX_MPA).contains(&p_mpa) {
        return Err(SteamError::PressureOutOfRange { p_mpa });
    }
    if p_mpa < region4::P_TRIPLE_MPA {
        return checked_t(region2::t_ps(p_mpa, s)?);
    }
    if p_mpa <= boundary::P_SAT_LINE_MAX_MPA {
        let ts = region4::t_sat_k(p_mpa)?;
        let sf = region1::s_pt(p_mpa, ts)?;
        let sg = region2::s_pt(p_mpa, ts)?;
        if (sf..=sg).contains(&s) {
            return Ok(ts);
        }
        if s < sf {
            checked_t(region1::t_ps(p_mpa, s)?)
        } else {
            checked_t(region2::t_ps(p_mpa, s)?)
        }
    } else {
        let s_liquid_max = region1::s_pt(p_mpa, boundary::T_R1_MAX_K)?;
        if s <= s_liquid_max {
            checked_t(region1::t_ps(p_mpa, s)?)
        } else {
            let t = checked_t(region2::t_ps(p_mpa, s)?)?;
            if t + 1e-6 >= boundary::b23_t_k(p_mpa)? {
                Ok(t)
            } else {
                Err(SteamError::OutOfRange {
                    what: "entropy in the region-3 band at this pressure",
                })
            }
        }
    }
}

/// Bracketed bisection over pressure against a monotone property profile.
///
/// The orientation is read off the bracket endpoints, so both rising
/// (liquid enthalpy in p) and falling (vapor enthalpy in p) profiles work.
/// A target outside the endpoint values has no root in the bracket.
fn bisect_p(
    mut lo: f64,
    mut hi: f64,
    target: f64,
    what: &'static str,
    f: impl Fn(f64) -> SteamResult<f64>,
) -> SteamResult<f64> {
    let f_lo = f(lo)?;
    let f_hi = f(hi)?;
    let rising = f_hi >= f_lo;
    let (low_val, high_val) = if rising { (f_lo, f_hi) } else { (f_hi, f_lo) };
    if target < low_val || target > high_val {
        return Err(SteamError::OutOfRange { what });
    }

    let tol = 1e-9 * target.abs().max(1.0);
    let mut mid = 0.5 * (lo + hi);
    for _ in 0..100 {
        mid = 0.5 * (lo + hi);
        let f_mid = f(mid)?;
        if (f_mid - target).abs() <= tol {
            return Ok(mid);
        }
        if (f_mid < target) == rising {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    Ok(mid)
}

fn p_th_si(t_k: f64, h: f64) -> SteamResult<f64> {
    let t_k = checked_t(t_k)?;
    if t_k <= boundary::T_R1_MAX_K {
        let ps = region4::p_sat_mpa(t_k)?;
        let hf = region1::h_pt(ps, t_k)?;
        let hg = region2::h_pt(ps, t_k)?;
        if (hf..=hg).contains(&h) {
            // two-phase plateau: every pressure answer collapses to psat
            return Ok(ps);
        }
        if h > hg {
            bisect_p(
                region4::P_TRIPLE_MPA,
                ps,
                h,
                "enthalpy on the vapor side at this temperature",
                |p| region2::h_pt(p, t_k),
            )
        } else {
            bisect_p(
                ps,
                boundary::P_MAX_MPA,
                h,
                "enthalpy on the liquid side at this temperature",
                |p| region1::h_pt(p, t_k),
            )
        }
    } else {
        let hi = boundary::b23_p_mpa(t_k)?.min(boundary::P_MAX_MPA);
        bisect_p(
            region4::P_TRIPLE_MPA,
            hi,
            h,
            "enthalpy at this temperature",
            |p| region2::h_pt(p, t_k),
        )
    }
}

fn p_ts_si(t_k: f64, s: f64) -> SteamResult<f64> {
    let t_k = checked_t(t_k)?;
    if t_k <= boundary::T_R1_MAX_K {
        let ps = region4::p_sat_mpa(t_k)?;
        let sf = region1::s_pt(ps, t_k)?;
        let sg = region2::s_pt(ps, t_k)?;
        if (sf..=sg).contains(&s) {
            return Ok(ps);
        }
        if s > sg {
            bisect_p(
                region4::P_TRIPLE_MPA,
                ps,
                s,
                "entropy on the vapor side at this temperature",
                |p| region2::s_pt(p, t_k),
            )
        } else {
            bisect_p(
                ps,
                boundary::P_MAX_MPA,
                s,
                "entropy on the liquid side at this temperature",
                |p| region1::s_pt(p, t_k),
            )
        }
    } else {
        let hi = boundary::b23_p_mpa(t_k)?.min(boundary::P_MAX_MPA);
        bisect_p(
            region4::P_TRIPLE_MPA,
            hi,
            s,
            "entropy at this temperature",
            |p| region2::s_pt(p, t_k),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sc_core::UnitSystem::{English, Si};

    #[test]
    fn saturation_at_one_atmosphere() {
        let table = If97Table::new(Si);
        let sat = table.sat_line(1.013_25).unwrap();
        // ITS-90 puts the normal boiling point at 99.974 °C
        assert!((sat.t - 99.974).abs() < 0.01);
        assert!((sat.hf - 419.1).abs() < 0.5);
        assert!((sat.hg - 2_675.6).abs() < 1.0);
        assert!((sat.vf - 0.001_043).abs() < 1e-5);
        assert!((sat.vg - 1.673).abs() < 0.005);
        assert!((sat.sf - 1.306_9).abs() < 0.01);
        assert!((sat.sg - 7.354_9).abs() < 0.01);
        assert!((sat.ug - 2_506.5).abs() < 1.0);
    }

    #[test]
    fn single_phase_lookups() {
        let table = If97Table::new(Si);
        // superheated vapor, 1 bar / 150 °C
        assert!((table.h_pt(1.0, 150.0).unwrap() - 2_776.4).abs() < 0.5);
        // compressed liquid, 10 bar / 50 °C
        assert!((table.v_pt(10.0, 50.0).unwrap() - 0.001_012).abs() < 1e-5);
    }

    #[test]
    fn backward_lookups_roundtrip() {
        let table = If97Table::new(Si);
        let h = table.h_pt(5.0, 250.0).unwrap();
        assert!((table.t_ph(5.0, h).unwrap() - 250.0).abs() < 0.01);
        let s = table.s_pt(5.0, 250.0).unwrap();
        assert!((table.t_ps(5.0, s).unwrap() - 250.0).abs() < 0.01);

        // two-phase enthalpy collapses to the saturation temperature
        let t_sat = table.t_sat(1.0).unwrap();
        assert!((table.t_ph(1.0, 1_500.0).unwrap() - t_sat).abs() < 1e-9);
    }

    #[test]
    fn pressure_inverses_roundtrip() {
        let table = If97Table::new(Si);
        let h = table.h_pt(2.0, 200.0).unwrap();
        assert!((table.p_th(200.0, h).unwrap() - 2.0).abs() < 1e-3);
        let s = table.s_pt(2.0, 200.0).unwrap();
        assert!((table.p_ts(200.0, s).unwrap() - 2.0).abs() < 1e-3);

        // hot compressed liquid sits on the falling branch
        let h_liq = table.h_pt(200.0, 340.0).unwrap();
        assert!((table.p_th(340.0, h_liq).unwrap() - 200.0).abs() < 0.5);
    }

    #[test]
    fn english_units_match_atmospheric_anchors() {
        let table = If97Table::new(English);
        assert!((table.t_sat(14.696).unwrap() - 212.0).abs() < 0.05);
        // 1 atm, 300 °F superheated steam: h ≈ 1192.6 btu/lb
        assert!((table.h_pt(14.696, 300.0).unwrap() - 1_192.6).abs() < 1.5);
        let sat = table.sat_line(14.696).unwrap();
        assert!((sat.hg - 1_150.4).abs() < 1.5);
    }

    #[test]
    fn domain_errors_are_reported() {
        let table = If97Table::new(Si);
        // saturation line ends at the region-1/2 span
        assert!(table.sat_line(200.0).is_err());
        // region 3
        assert!(table.h_pt(300.0, 400.0).is_err());
        // negative pressure
        assert!(table.t_sat(-1.0).is_err());
    }
}
