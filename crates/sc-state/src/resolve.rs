//! The 21-case state resolution engine.

use crate::error::ResolveError;
use crate::property::{BoundedProperty, PropertyPair, PropertySpec, PropertyTag, Rule};
use crate::residual::{
    QualityMatch, SimultaneousPair, SinglePhaseAtPressure, SinglePhaseAtTemperature,
};
use crate::state::{Region, SteamState};
use nalgebra::DVector;
use sc_core::{Tolerances, UnitSystem, clamp_unit, nearly_equal};
use sc_solver::{NewtonConfig, SolverResult, finite_difference_jacobian, newton_solve};
use sc_steam::{If97Table, PropertyTable};
use tracing::debug;

/// Tolerance for matching a specified temperature to the saturation
/// temperature in the p,T case.
const SAT_MATCH: Tolerances = Tolerances {
    abs: 1e-6,
    rel: 1e-9,
};

/// Finite-difference step for solver Jacobians.
const FD_EPS: f64 = 1e-7;

/// Seed offset for the single-phase temperature search, working units
/// (positive toward the vapor side).
const TEMPERATURE_STEP: f64 = 1.0;

/// Seed offset for the single-phase pressure search, working units
/// (applied negative toward the vapor side: at fixed T, rising pressure
/// moves toward the liquid).
const PRESSURE_STEP: f64 = 0.1;

/// Fixed seeds for the searches with neither p nor T given: roughly one
/// atmosphere at its boiling point in either system.
fn default_seed(units: UnitSystem) -> (f64, f64) {
    match units {
        UnitSystem::Si => (1.0, 100.0),
        UnitSystem::English => (14.696, 212.0),
    }
}

/// Admissible pressure interval for solver iterates, working units.
fn pressure_interval(units: UnitSystem) -> (f64, f64) {
    match units {
        UnitSystem::Si => (0.0062, 1_000.0),
        UnitSystem::English => (0.09, 14_500.0),
    }
}

/// Admissible temperature interval for solver iterates, working units.
fn temperature_interval(units: UnitSystem) -> (f64, f64) {
    match units {
        UnitSystem::Si => (0.02, 799.8),
        UnitSystem::English => (32.05, 1_471.6),
    }
}

/// Region-defining properties established by a resolution rule; the
/// remaining four properties are filled in afterwards.
enum StateCore {
    SinglePhase { region: Region, p: f64, t: f64 },
    TwoPhase { p: f64, t: f64, x: f64 },
}

/// Resolve the complete state from two property values.
///
/// The pair is order-independent: `resolve(a, b, va, vb, units)` equals
/// `resolve(b, a, vb, va, units)` for every bucket. A fresh table is
/// constructed for the requested unit system on every call.
pub fn resolve(
    tag_a: PropertyTag,
    tag_b: PropertyTag,
    value_a: f64,
    value_b: f64,
    units: UnitSystem,
) -> Result<SteamState, ResolveError> {
    let pair = PropertyPair::new(
        PropertySpec::new(tag_a, value_a),
        PropertySpec::new(tag_b, value_b),
    )?;
    let table = If97Table::new(units);
    resolve_with(&table, &pair)
}

/// Resolve against a caller-supplied property table.
pub fn resolve_with(
    table: &dyn PropertyTable,
    pair: &PropertyPair,
) -> Result<SteamState, ResolveError> {
    let lead = pair.lead();
    let trail = pair.trail();
    let rule = pair.rule().ok_or(ResolveError::UnsupportedCombination {
        a: lead.tag.symbol(),
        b: trail.tag.symbol(),
    })?;
    debug!(
        ?rule,
        lead = %lead.tag.symbol(),
        trail = %trail.tag.symbol(),
        "dispatching property pair"
    );

    use BoundedProperty as B;
    let core = match rule {
        Rule::PressureTemperature => pressure_temperature(table, lead.value, trail.value)?,
        Rule::PressureVolume => pressure_with(table, lead.value, B::Volume, trail.value)?,
        Rule::PressureEnthalpy => pressure_with(table, lead.value, B::Enthalpy, trail.value)?,
        Rule::PressureInternalEnergy => {
            pressure_with(table, lead.value, B::InternalEnergy, trail.value)?
        }
        Rule::PressureEntropy => pressure_with(table, lead.value, B::Entropy, trail.value)?,
        Rule::PressureQuality => StateCore::TwoPhase {
            p: lead.value,
            t: table.t_sat(lead.value)?,
            x: clamp_unit(trail.value),
        },
        Rule::TemperatureVolume => temperature_with(table, lead.value, B::Volume, trail.value)?,
        Rule::TemperatureEnthalpy => {
            temperature_with(table, lead.value, B::Enthalpy, trail.value)?
        }
        Rule::TemperatureInternalEnergy => {
            temperature_with(table, lead.value, B::InternalEnergy, trail.value)?
        }
        Rule::TemperatureEntropy => temperature_with(table, lead.value, B::Entropy, trail.value)?,
        Rule::TemperatureQuality => StateCore::TwoPhase {
            p: table.p_sat(lead.value)?,
            t: lead.value,
            x: clamp_unit(trail.value),
        },
        Rule::VolumeEnthalpy => {
            simultaneous(table, (B::Volume, lead.value), (B::Enthalpy, trail.value))?
        }
        Rule::VolumeInternalEnergy => simultaneous(
            table,
            (B::Volume, lead.value),
            (B::InternalEnergy, trail.value),
        )?,
        Rule::VolumeEntropy => {
            simultaneous(table, (B::Volume, lead.value), (B::Entropy, trail.value))?
        }
        Rule::VolumeQuality => with_quality(table, B::Volume, lead.value, trail.value)?,
        Rule::EnthalpyInternalEnergy => simultaneous(
            table,
            (B::Enthalpy, lead.value),
            (B::InternalEnergy, trail.value),
        )?,
        Rule::EnthalpyEntropy => {
            simultaneous(table, (B::Enthalpy, lead.value), (B::Entropy, trail.value))?
        }
        Rule::EnthalpyQuality => with_quality(table, B::Enthalpy, lead.value, trail.value)?,
        Rule::InternalEnergyEntropy => simultaneous(
            table,
            (B::InternalEnergy, lead.value),
            (B::Entropy, trail.value),
        )?,
        Rule::InternalEnergyQuality => {
            with_quality(table, B::InternalEnergy, lead.value, trail.value)?
        }
        Rule::EntropyQuality => with_quality(table, B::Entropy, lead.value, trail.value)?,
    };

    let state = complete(table, core)?;
    debug!(region = %state.region, p = state.p, t = state.t, "state resolved");
    Ok(state)
}

/// The p,T pair: compare against the saturation temperature. On the line
/// itself the pair is underdetermined, so quality is fixed at 0.5 by
/// convention.
fn pressure_temperature(
    table: &dyn PropertyTable,
    p: f64,
    t: f64,
) -> Result<StateCore, ResolveError> {
    let t_sat = table.t_sat(p)?;
    if nearly_equal(t, t_sat, SAT_MATCH) {
        Ok(StateCore::TwoPhase { p, t: t_sat, x: 0.5 })
    } else if t > t_sat {
        Ok(StateCore::SinglePhase {
            region: Region::SuperheatedVapor,
            p,
            t,
        })
    } else {
        Ok(StateCore::SinglePhase {
            region: Region::SubcooledLiquid,
            p,
            t,
        })
    }
}

/// Pressure paired with one of {v, h, u, s}: bucket by the saturation band
/// at p, recover temperature where the state is single-phase.
fn pressure_with(
    table: &dyn PropertyTable,
    p: f64,
    prop: BoundedProperty,
    value: f64,
) -> Result<StateCore, ResolveError> {
    let sat = table.sat_line(p)?;
    let (lo, hi) = prop.bounds(&sat);
    if value < lo || value > hi {
        let region = if value > hi {
            Region::SuperheatedVapor
        } else {
            Region::SubcooledLiquid
        };
        let t = match prop {
            BoundedProperty::Enthalpy => table.t_ph(p, value)?,
            BoundedProperty::Entropy => table.t_ps(p, value)?,
            BoundedProperty::Volume | BoundedProperty::InternalEnergy => {
                let dt = if value > hi {
                    TEMPERATURE_STEP
                } else {
                    -TEMPERATURE_STEP
                };
                let strategy = SinglePhaseAtPressure {
                    table,
                    p,
                    prop,
                    value,
                };
                solve_scalar(
                    temperature_interval(table.units()),
                    sat.t + dt,
                    |x| strategy.residual(x),
                )?
            }
        };
        Ok(StateCore::SinglePhase { region, p, t })
    } else {
        Ok(StateCore::TwoPhase {
            p,
            t: sat.t,
            x: (value - lo) / (hi - lo),
        })
    }
}

/// Temperature paired with one of {v, h, u, s}: the mirror image of
/// [`pressure_with`] around the saturation pressure at T.
fn temperature_with(
    table: &dyn PropertyTable,
    t: f64,
    prop: BoundedProperty,
    value: f64,
) -> Result<StateCore, ResolveError> {
    let sat = table.sat_line_at_t(t)?;
    let (lo, hi) = prop.bounds(&sat);
    if value < lo || value > hi {
        let region = if value > hi {
            Region::SuperheatedVapor
        } else {
            Region::SubcooledLiquid
        };
        let p = match prop {
            BoundedProperty::Enthalpy => table.p_th(t, value)?,
            BoundedProperty::Entropy => table.p_ts(t, value)?,
            BoundedProperty::Volume | BoundedProperty::InternalEnergy => {
                let dp = if value > hi {
                    -PRESSURE_STEP
                } else {
                    PRESSURE_STEP
                };
                let strategy = SinglePhaseAtTemperature {
                    table,
                    t,
                    prop,
                    value,
                };
                solve_scalar(
                    pressure_interval(table.units()),
                    sat.p + dp,
                    |x| strategy.residual(x),
                )?
            }
        };
        Ok(StateCore::SinglePhase { region, p, t })
    } else {
        Ok(StateCore::TwoPhase {
            p: sat.p,
            t: sat.t,
            x: (value - lo) / (hi - lo),
        })
    }
}

/// One of {v, h, u, s} paired with quality: unconditionally two-phase, a
/// pressure search along the saturation line. Out-of-range quality is
/// clamped, not rejected.
fn with_quality(
    table: &dyn PropertyTable,
    prop: BoundedProperty,
    value: f64,
    x_raw: f64,
) -> Result<StateCore, ResolveError> {
    let x = clamp_unit(x_raw);
    let strategy = QualityMatch {
        table,
        prop,
        value,
        x,
    };
    let p = solve_scalar(
        pressure_interval(table.units()),
        default_seed(table.units()).0,
        |v| strategy.residual(v),
    )?;
    Ok(StateCore::TwoPhase {
        p,
        t: table.t_sat(p)?,
        x,
    })
}

/// Neither p nor T given: simultaneous search over both, then region
/// classification against the bounds at the converged pressure.
fn simultaneous(
    table: &dyn PropertyTable,
    lead: (BoundedProperty, f64),
    trail: (BoundedProperty, f64),
) -> Result<StateCore, ResolveError> {
    let units = table.units();
    let (p0, t0) = default_seed(units);
    let (p_lo, p_hi) = pressure_interval(units);
    let (t_lo, t_hi) = temperature_interval(units);
    let strategy = SimultaneousPair { table, lead, trail };

    let residual = |x: &DVector<f64>| strategy.residual(x);
    let config = NewtonConfig {
        lower_bounds: Some(DVector::from_vec(vec![p_lo, t_lo])),
        upper_bounds: Some(DVector::from_vec(vec![p_hi, t_hi])),
        ..NewtonConfig::default()
    };
    let found = newton_solve(
        DVector::from_vec(vec![p0, t0]),
        &residual,
        |x| finite_difference_jacobian(x, &residual, FD_EPS),
        &config,
    )?;
    let (p, t) = (found.x[0], found.x[1]);

    let sat = table.sat_line(p)?;
    let (lo, hi) = lead.0.bounds(&sat);
    if lead.1 < lo || lead.1 > hi {
        let region = if lead.1 > hi {
            Region::SuperheatedVapor
        } else {
            Region::SubcooledLiquid
        };
        Ok(StateCore::SinglePhase { region, p, t })
    } else {
        Ok(StateCore::TwoPhase {
            p,
            t: sat.t,
            x: (lead.1 - lo) / (hi - lo),
        })
    }
}

/// Run a one-dimensional Newton search inside an admissible interval.
fn solve_scalar(
    interval: (f64, f64),
    seed: f64,
    residual: impl Fn(&DVector<f64>) -> SolverResult<DVector<f64>>,
) -> Result<f64, ResolveError> {
    let config = NewtonConfig {
        lower_bounds: Some(DVector::from_element(1, interval.0)),
        upper_bounds: Some(DVector::from_element(1, interval.1)),
        ..NewtonConfig::default()
    };
    let found = newton_solve(
        DVector::from_element(1, seed),
        &residual,
        |x| finite_difference_jacobian(x, &residual, FD_EPS),
        &config,
    )?;
    Ok(found.x[0])
}

/// Fill in the four remaining properties once the region-defining ones are
/// known.
fn complete(table: &dyn PropertyTable, core: StateCore) -> Result<SteamState, ResolveError> {
    let units = table.units();
    match core {
        StateCore::TwoPhase { p, t, x } => {
            let sat = table.sat_line(p)?;
            Ok(SteamState {
                units,
                region: Region::TwoPhase,
                p,
                t,
                v: sat.vf + x * (sat.vg - sat.vf),
                u: sat.uf + x * (sat.ug - sat.uf),
                h: sat.hf + x * (sat.hg - sat.hf),
                s: sat.sf + x * (sat.sg - sat.sf),
                x,
            })
        }
        StateCore::SinglePhase { region, p, t } => Ok(SteamState {
            units,
            region,
            p,
            t,
            v: table.v_pt(p, t)?,
            u: table.u_pt(p, t)?,
            h: table.h_pt(p, t)?,
            s: table.s_pt(p, t)?,
            x: if region == Region::SuperheatedVapor {
                1.0
            } else {
                0.0
            },
        }),
    }
}
