//! Named residual strategies for the solver-backed resolution rules.
//!
//! Each strategy is a standalone value rather than a throwaway closure in a
//! dispatch arm, so the per-case residuals can be exercised in isolation.

use crate::property::BoundedProperty;
use nalgebra::DVector;
use sc_solver::SolverResult;
use sc_steam::PropertyTable;

/// r(T) = value − prop(p, T): single-phase temperature search at fixed
/// pressure.
pub(crate) struct SinglePhaseAtPressure<'a> {
    pub table: &'a dyn PropertyTable,
    pub p: f64,
    pub prop: BoundedProperty,
    pub value: f64,
}

impl SinglePhaseAtPressure<'_> {
    pub fn residual(&self, x: &DVector<f64>) -> SolverResult<DVector<f64>> {
        let actual = self.prop.at(self.table, self.p, x[0])?;
        Ok(DVector::from_element(1, self.value - actual))
    }
}

/// r(p) = value − prop(p, T): single-phase pressure search at fixed
/// temperature.
pub(crate) struct SinglePhaseAtTemperature<'a> {
    pub table: &'a dyn PropertyTable,
    pub t: f64,
    pub prop: BoundedProperty,
    pub value: f64,
}

impl SinglePhaseAtTemperature<'_> {
    pub fn residual(&self, x: &DVector<f64>) -> SolverResult<DVector<f64>> {
        let actual = self.prop.at(self.table, x[0], self.t)?;
        Ok(DVector::from_element(1, self.value - actual))
    }
}

/// r(p) = value − two-phase interpolation at a fixed quality: pressure
/// search along the saturation line.
pub(crate) struct QualityMatch<'a> {
    pub table: &'a dyn PropertyTable,
    pub prop: BoundedProperty,
    pub value: f64,
    pub x: f64,
}

impl QualityMatch<'_> {
    pub fn residual(&self, v: &DVector<f64>) -> SolverResult<DVector<f64>> {
        let sat = self.table.sat_line(v[0])?;
        Ok(DVector::from_element(
            1,
            self.value - self.prop.interp(&sat, self.x),
        ))
    }
}

/// Two equations over (p, T) for the pairs with neither p nor T given.
///
/// While the lead property sits inside its saturation band at the candidate
/// pressure, the state is pinned to the line (first equation T = T_sat) and
/// the trail property must match the interpolation at the quality implied by
/// the lead. Outside the band both properties must match their single-phase
/// values. The branch is picked fresh every evaluation, so the search
/// crosses the phase boundary freely.
pub(crate) struct SimultaneousPair<'a> {
    pub table: &'a dyn PropertyTable,
    pub lead: (BoundedProperty, f64),
    pub trail: (BoundedProperty, f64),
}

impl SimultaneousPair<'_> {
    pub fn residual(&self, x: &DVector<f64>) -> SolverResult<DVector<f64>> {
        let (p, t) = (x[0], x[1]);
        let sat = self.table.sat_line(p)?;
        let (lo, hi) = self.lead.0.bounds(&sat);
        if (lo..=hi).contains(&self.lead.1) {
            let q = (self.lead.1 - lo) / (hi - lo);
            Ok(DVector::from_vec(vec![
                t - sat.t,
                self.trail.1 - self.trail.0.interp(&sat, q),
            ]))
        } else {
            Ok(DVector::from_vec(vec![
                self.lead.1 - self.lead.0.at(self.table, p, t)?,
                self.trail.1 - self.trail.0.at(self.table, p, t)?,
            ]))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sc_core::UnitSystem;
    use sc_steam::If97Table;

    #[test]
    fn single_phase_residual_vanishes_at_the_known_state() {
        let table = If97Table::new(UnitSystem::Si);
        let v = table.v_pt(1.0, 150.0).unwrap();
        let strategy = SinglePhaseAtPressure {
            table: &table,
            p: 1.0,
            prop: BoundedProperty::Volume,
            value: v,
        };
        let r = strategy.residual(&DVector::from_element(1, 150.0)).unwrap();
        assert!(r[0].abs() < 1e-12);
        let r_off = strategy.residual(&DVector::from_element(1, 200.0)).unwrap();
        assert!(r_off[0].abs() > 1e-3);
    }

    #[test]
    fn quality_match_residual_vanishes_on_the_line() {
        let table = If97Table::new(UnitSystem::Si);
        let sat = table.sat_line(2.0).unwrap();
        let h = sat.hf + 0.3 * (sat.hg - sat.hf);
        let strategy = QualityMatch {
            table: &table,
            prop: BoundedProperty::Enthalpy,
            value: h,
            x: 0.3,
        };
        let r = strategy.residual(&DVector::from_element(1, 2.0)).unwrap();
        assert!(r[0].abs() < 1e-9);
    }

    #[test]
    fn simultaneous_pair_switches_branches_with_pressure() {
        let table = If97Table::new(UnitSystem::Si);
        // Superheated state at 10 bar / 300 °C
        let v = table.v_pt(10.0, 300.0).unwrap();
        let h = table.h_pt(10.0, 300.0).unwrap();
        let strategy = SimultaneousPair {
            table: &table,
            lead: (BoundedProperty::Volume, v),
            trail: (BoundedProperty::Enthalpy, h),
        };

        // At 10 bar the volume lies above the vapor bound, so both
        // single-phase equations vanish at the true state.
        let sat_10 = table.sat_line(10.0).unwrap();
        assert!(v > sat_10.vg);
        let r = strategy
            .residual(&DVector::from_vec(vec![10.0, 300.0]))
            .unwrap();
        assert!(r[0].abs() < 1e-12);
        assert!(r[1].abs() < 1e-9);

        // At 1 bar the same volume sits inside the saturation band, so the
        // first equation pins T to the saturation temperature instead.
        let sat_1 = table.sat_line(1.0).unwrap();
        assert!(v > sat_1.vf && v < sat_1.vg);
        let r_band = strategy
            .residual(&DVector::from_vec(vec![1.0, 300.0]))
            .unwrap();
        assert!((r_band[0] - (300.0 - sat_1.t)).abs() < 1e-9);
    }
}
