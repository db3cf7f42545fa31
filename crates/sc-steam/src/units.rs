//! Working-unit conversions for the table facade.
//!
//! The IF97 sub-equations work in MPa / K / kJ / m³; the public table speaks
//! the caller's `UnitSystem`. uom carries every cross-system factor so no
//! hand-maintained constants can drift.

use sc_core::UnitSystem;
use uom::si::available_energy::{btu_it_per_pound, kilojoule_per_kilogram};
use uom::si::f64::{
    AvailableEnergy, Pressure, SpecificHeatCapacity, SpecificVolume, ThermodynamicTemperature,
};
use uom::si::pressure::{bar, megapascal, pound_force_per_square_inch};
use uom::si::specific_heat_capacity::{
    btu_it_per_pound_degree_fahrenheit, kilojoule_per_kilogram_kelvin,
};
use uom::si::specific_volume::cubic_meter_per_kilogram;
// uom 0.36 ships only SI specific-volume units; the English compound unit
// `cubic_foot_per_pound` is absent. Define it via uom's documented `unit!`
// extension macro, deriving the coefficient from uom's own `cubic_foot`
// (2.831_685_E-2 m³) and `pound` (4.535_924_E-1 kg) base factors so no
// constant is hand-maintained here.
mod english_specific_volume {
    unit! {
        system: uom::si;
        quantity: uom::si::specific_volume;

        @cubic_foot_per_pound: 2.831_685_E-2 / 4.535_924_E-1;
            "ft³/lb", "cubic foot per pound", "cubic feet per pound";
    }
}
use english_specific_volume::cubic_foot_per_pound;
use uom::si::thermodynamic_temperature::{degree_celsius, degree_fahrenheit, kelvin};

pub(crate) fn p_to_mpa(units: UnitSystem, p: f64) -> f64 {
    match units {
        UnitSystem::Si => Pressure::new::<bar>(p).get::<megapascal>(),
        UnitSystem::English => Pressure::new::<pound_force_per_square_inch>(p).get::<megapascal>(),
    }
}

pub(crate) fn p_from_mpa(units: UnitSystem, p_mpa: f64) -> f64 {
    match units {
        UnitSystem::Si => Pressure::new::<megapascal>(p_mpa).get::<bar>(),
        UnitSystem::English => {
            Pressure::new::<megapascal>(p_mpa).get::<pound_force_per_square_inch>()
        }
    }
}

pub(crate) fn t_to_k(units: UnitSystem, t: f64) -> f64 {
    match units {
        UnitSystem::Si => ThermodynamicTemperature::new::<degree_celsius>(t).get::<kelvin>(),
        UnitSystem::English => ThermodynamicTemperature::new::<degree_fahrenheit>(t).get::<kelvin>(),
    }
}

pub(crate) fn t_from_k(units: UnitSystem, t_k: f64) -> f64 {
    match units {
        UnitSystem::Si => ThermodynamicTemperature::new::<kelvin>(t_k).get::<degree_celsius>(),
        UnitSystem::English => ThermodynamicTemperature::new::<kelvin>(t_k).get::<degree_fahrenheit>(),
    }
}

/// Specific energy (u, h): kJ/kg internal, btu/lb English.
pub(crate) fn e_to_si(units: UnitSystem, e: f64) -> f64 {
    match units {
        UnitSystem::Si => e,
        UnitSystem::English => {
            AvailableEnergy::new::<btu_it_per_pound>(e).get::<kilojoule_per_kilogram>()
        }
    }
}

pub(crate) fn e_from_si(units: UnitSystem, e_kj_per_kg: f64) -> f64 {
    match units {
        UnitSystem::Si => e_kj_per_kg,
        UnitSystem::English => {
            AvailableEnergy::new::<kilojoule_per_kilogram>(e_kj_per_kg).get::<btu_it_per_pound>()
        }
    }
}

/// Specific entropy: kJ/(kg·K) internal, btu/(lb·°F) English.
pub(crate) fn s_to_si(units: UnitSystem, s: f64) -> f64 {
    match units {
        UnitSystem::Si => s,
        UnitSystem::English => SpecificHeatCapacity::new::<btu_it_per_pound_degree_fahrenheit>(s)
            .get::<kilojoule_per_kilogram_kelvin>(),
    }
}

pub(crate) fn s_from_si(units: UnitSystem, s_si: f64) -> f64 {
    match units {
        UnitSystem::Si => s_si,
        UnitSystem::English => SpecificHeatCapacity::new::<kilojoule_per_kilogram_kelvin>(s_si)
            .get::<btu_it_per_pound_degree_fahrenheit>(),
    }
}

/// Specific volume: m³/kg internal, ft³/lb English.
pub(crate) fn v_to_si(units: UnitSystem, v: f64) -> f64 {
    match units {
        UnitSystem::Si => v,
        UnitSystem::English => {
            SpecificVolume::new::<cubic_foot_per_pound>(v).get::<cubic_meter_per_kilogram>()
        }
    }
}

pub(crate) fn v_from_si(units: UnitSystem, v_si: f64) -> f64 {
    match units {
        UnitSystem::Si => v_si,
        UnitSystem::English => {
            SpecificVolume::new::<cubic_meter_per_kilogram>(v_si).get::<cubic_foot_per_pound>()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sc_core::UnitSystem::{English, Si};

    #[test]
    fn pressure_conversions() {
        assert!((p_to_mpa(Si, 10.0) - 1.0).abs() < 1e-12);
        assert!((p_to_mpa(English, 14.696) - 0.101325).abs() < 1e-4);
        let p = p_from_mpa(English, p_to_mpa(English, 250.0));
        assert!((p - 250.0).abs() < 1e-9);
    }

    #[test]
    fn temperature_conversions() {
        assert!((t_to_k(Si, 100.0) - 373.15).abs() < 1e-9);
        assert!((t_to_k(English, 212.0) - 373.15).abs() < 1e-9);
        assert!((t_from_k(English, 373.15) - 212.0).abs() < 1e-9);
    }

    #[test]
    fn energy_entropy_volume_factors() {
        // 1 btu_IT/lb = 2.326 kJ/kg exactly
        assert!((e_to_si(English, 1.0) - 2.326).abs() < 1e-9);
        // 1 btu_IT/(lb·°F) = 4.1868 kJ/(kg·K)
        assert!((s_to_si(English, 1.0) - 4.1868).abs() < 1e-4);
        // 1 m³/kg = 16.0185 ft³/lb
        assert!((v_from_si(English, 1.0) - 16.0185).abs() < 1e-3);
        // SI arms are identities
        assert_eq!(e_to_si(Si, 2500.0), 2500.0);
        assert_eq!(v_to_si(Si, 0.5), 0.5);
        assert_eq!(s_from_si(Si, 7.3), 7.3);
    }
}
