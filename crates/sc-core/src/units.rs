// sc-core/src/units.rs

/// Working unit system for all resolver inputs and outputs.
///
/// Every numeric value crossing the public API is a plain `f64` expressed in
/// the units of the selected system:
///
/// | property | SI          | English     |
/// |----------|-------------|-------------|
/// | p        | bar         | psi         |
/// | T        | °C          | °F          |
/// | u, h     | kJ/kg       | btu/lb      |
/// | s        | kJ/(kg·°C)  | btu/(lb·°F) |
/// | v        | m³/kg       | ft³/lb      |
///
/// Quality is dimensionless in both systems.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum UnitSystem {
    #[default]
    Si,
    English,
}

impl UnitSystem {
    pub fn pressure_label(self) -> &'static str {
        match self {
            Self::Si => "bar",
            Self::English => "psi",
        }
    }

    pub fn temperature_label(self) -> &'static str {
        match self {
            Self::Si => "C",
            Self::English => "F",
        }
    }

    pub fn energy_label(self) -> &'static str {
        match self {
            Self::Si => "kJ/kg",
            Self::English => "btu/lb",
        }
    }

    pub fn entropy_label(self) -> &'static str {
        match self {
            Self::Si => "kJ/kg*C",
            Self::English => "btu/lb*F",
        }
    }

    pub fn volume_label(self) -> &'static str {
        match self {
            Self::Si => "m^3/kg",
            Self::English => "ft^3/lb",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_smoke() {
        assert_eq!(UnitSystem::Si.pressure_label(), "bar");
        assert_eq!(UnitSystem::English.pressure_label(), "psi");
        assert_eq!(UnitSystem::default(), UnitSystem::Si);
        assert_eq!(UnitSystem::English.entropy_label(), "btu/lb*F");
    }
}
