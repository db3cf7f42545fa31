//! Resolved thermodynamic states and state differences.

use crate::error::ResolveError;
use sc_core::UnitSystem;
use std::fmt;

/// Phase classification of a resolved state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Region {
    SubcooledLiquid,
    SuperheatedVapor,
    TwoPhase,
}

impl Region {
    pub fn label(self) -> &'static str {
        match self {
            Self::SubcooledLiquid => "sub-cooled liquid",
            Self::SuperheatedVapor => "super-heated vapor",
            Self::TwoPhase => "two-phase",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A fully resolved thermodynamic state of water/steam.
///
/// All values are working-unit `f64` per `units`. Quality is the vapor mass
/// fraction for two-phase states; single-phase states carry the conventional
/// markers 1.0 (super-heated vapor) and 0.0 (sub-cooled liquid) instead of a
/// physical quality. Immutable once produced; every resolution builds a
/// fresh value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SteamState {
    pub units: UnitSystem,
    pub region: Region,
    pub p: f64,
    pub t: f64,
    pub v: f64,
    pub u: f64,
    pub h: f64,
    pub s: f64,
    pub x: f64,
}

impl fmt::Display for SteamState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let u = self.units;
        writeln!(f, "Region: {}", self.region)?;
        writeln!(f, "Pressure: {:.3} {}", self.p, u.pressure_label())?;
        writeln!(f, "Temperature: {:.3} {}", self.t, u.temperature_label())?;
        writeln!(f, "Enthalpy: {:.3} {}", self.h, u.energy_label())?;
        writeln!(f, "Internal Energy: {:.3} {}", self.u, u.energy_label())?;
        writeln!(f, "Entropy: {:.3} {}", self.s, u.entropy_label())?;
        writeln!(f, "Specific Volume: {:.3} {}", self.v, u.volume_label())?;
        write!(f, "Quality: {:.3}", self.x)
    }
}

/// Element-wise property change between two resolved states.
///
/// Quality carries no meaning across independent states and is not
/// differenced; neither is the region.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StateDelta {
    pub units: UnitSystem,
    pub p: f64,
    pub t: f64,
    pub v: f64,
    pub u: f64,
    pub h: f64,
    pub s: f64,
}

impl fmt::Display for StateDelta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let u = self.units;
        writeln!(f, "ΔPressure: {:.3} {}", self.p, u.pressure_label())?;
        writeln!(f, "ΔTemperature: {:.3} {}", self.t, u.temperature_label())?;
        writeln!(f, "ΔEnthalpy: {:.3} {}", self.h, u.energy_label())?;
        writeln!(f, "ΔInternal Energy: {:.3} {}", self.u, u.energy_label())?;
        writeln!(f, "ΔEntropy: {:.3} {}", self.s, u.entropy_label())?;
        write!(f, "ΔSpecific Volume: {:.3} {}", self.v, u.volume_label())
    }
}

/// Compute `later - earlier` without mutating either operand.
///
/// Both states must have been resolved in the same unit system.
pub fn delta(later: &SteamState, earlier: &SteamState) -> Result<StateDelta, ResolveError> {
    if later.units != earlier.units {
        return Err(ResolveError::InvalidInput {
            what: format!(
                "cannot difference states resolved in {:?} and {:?} units",
                later.units, earlier.units
            ),
        });
    }
    Ok(StateDelta {
        units: later.units,
        p: later.p - earlier.p,
        t: later.t - earlier.t,
        v: later.v - earlier.v,
        u: later.u - earlier.u,
        h: later.h - earlier.h,
        s: later.s - earlier.s,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(units: UnitSystem, p: f64) -> SteamState {
        SteamState {
            units,
            region: Region::SuperheatedVapor,
            p,
            t: 150.0,
            v: 1.9,
            u: 2583.0,
            h: 2776.0,
            s: 7.6,
            x: 1.0,
        }
    }

    #[test]
    fn delta_is_elementwise() {
        let s1 = sample(UnitSystem::Si, 1.0);
        let s2 = sample(UnitSystem::Si, 3.5);
        let d = delta(&s2, &s1).unwrap();
        assert_eq!(d.p, 2.5);
        assert_eq!(d.t, 0.0);
        // operands untouched
        assert_eq!(s1.p, 1.0);
        assert_eq!(s2.p, 3.5);
    }

    #[test]
    fn delta_rejects_mixed_unit_systems() {
        let s1 = sample(UnitSystem::Si, 1.0);
        let s2 = sample(UnitSystem::English, 14.7);
        assert!(matches!(
            delta(&s2, &s1),
            Err(ResolveError::InvalidInput { .. })
        ));
    }

    #[test]
    fn display_formats_with_unit_labels() {
        let text = sample(UnitSystem::Si, 1.0).to_string();
        assert!(text.contains("Region: super-heated vapor"));
        assert!(text.contains("Pressure: 1.000 bar"));
        assert!(text.contains("Quality: 1.000"));

        let s1 = sample(UnitSystem::Si, 1.0);
        let d = delta(&sample(UnitSystem::Si, 2.0), &s1).unwrap();
        assert!(d.to_string().contains("ΔPressure: 1.000 bar"));
    }
}
