//! Property tags, pair normalization and the 21-bucket dispatch table.

use crate::error::ResolveError;
use sc_steam::{PropertyTable, SatLine, SteamResult};

/// The seven specifiable intensive properties.
///
/// Declaration order is the dispatch priority: an unordered pair buckets by
/// the earliest tag present, so every pair with pressure is pressure-paired,
/// every remaining pair with temperature is temperature-paired, and so on
/// through v, h, u, s, x.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PropertyTag {
    Pressure,
    Temperature,
    Volume,
    Enthalpy,
    InternalEnergy,
    Entropy,
    Quality,
}

impl PropertyTag {
    /// All tags in dispatch priority order.
    pub const ALL: [PropertyTag; 7] = [
        PropertyTag::Pressure,
        PropertyTag::Temperature,
        PropertyTag::Volume,
        PropertyTag::Enthalpy,
        PropertyTag::InternalEnergy,
        PropertyTag::Entropy,
        PropertyTag::Quality,
    ];

    /// One-letter symbol: p, t, v, h, u, s, x.
    pub fn symbol(self) -> char {
        match self {
            Self::Pressure => 'p',
            Self::Temperature => 't',
            Self::Volume => 'v',
            Self::Enthalpy => 'h',
            Self::InternalEnergy => 'u',
            Self::Entropy => 's',
            Self::Quality => 'x',
        }
    }

    /// Inverse of [`symbol`](Self::symbol), case-insensitive.
    pub fn from_symbol(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'p' => Some(Self::Pressure),
            't' => Some(Self::Temperature),
            'v' => Some(Self::Volume),
            'h' => Some(Self::Enthalpy),
            'u' => Some(Self::InternalEnergy),
            's' => Some(Self::Entropy),
            'x' => Some(Self::Quality),
            _ => None,
        }
    }

    fn rank(self) -> usize {
        match self {
            Self::Pressure => 0,
            Self::Temperature => 1,
            Self::Volume => 2,
            Self::Enthalpy => 3,
            Self::InternalEnergy => 4,
            Self::Entropy => 5,
            Self::Quality => 6,
        }
    }
}

/// One canonical resolution rule per unordered pair of distinct tags:
/// C(7,2) = 21 buckets, statically enumerable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rule {
    PressureTemperature,
    PressureVolume,
    PressureEnthalpy,
    PressureInternalEnergy,
    PressureEntropy,
    PressureQuality,
    TemperatureVolume,
    TemperatureEnthalpy,
    TemperatureInternalEnergy,
    TemperatureEntropy,
    TemperatureQuality,
    VolumeEnthalpy,
    VolumeInternalEnergy,
    VolumeEntropy,
    VolumeQuality,
    EnthalpyInternalEnergy,
    EnthalpyEntropy,
    EnthalpyQuality,
    InternalEnergyEntropy,
    InternalEnergyQuality,
    EntropyQuality,
}

/// Map an unordered pair of distinct tags to its resolution rule.
///
/// Order-independent: `rule_for(a, b) == rule_for(b, a)`. Identical tags
/// have no rule.
pub fn rule_for(a: PropertyTag, b: PropertyTag) -> Option<Rule> {
    use PropertyTag::*;
    let (lead, trail) = if a.rank() <= b.rank() { (a, b) } else { (b, a) };
    match (lead, trail) {
        (Pressure, Temperature) => Some(Rule::PressureTemperature),
        (Pressure, Volume) => Some(Rule::PressureVolume),
        (Pressure, Enthalpy) => Some(Rule::PressureEnthalpy),
        (Pressure, InternalEnergy) => Some(Rule::PressureInternalEnergy),
        (Pressure, Entropy) => Some(Rule::PressureEntropy),
        (Pressure, Quality) => Some(Rule::PressureQuality),
        (Temperature, Volume) => Some(Rule::TemperatureVolume),
        (Temperature, Enthalpy) => Some(Rule::TemperatureEnthalpy),
        (Temperature, InternalEnergy) => Some(Rule::TemperatureInternalEnergy),
        (Temperature, Entropy) => Some(Rule::TemperatureEntropy),
        (Temperature, Quality) => Some(Rule::TemperatureQuality),
        (Volume, Enthalpy) => Some(Rule::VolumeEnthalpy),
        (Volume, InternalEnergy) => Some(Rule::VolumeInternalEnergy),
        (Volume, Entropy) => Some(Rule::VolumeEntropy),
        (Volume, Quality) => Some(Rule::VolumeQuality),
        (Enthalpy, InternalEnergy) => Some(Rule::EnthalpyInternalEnergy),
        (Enthalpy, Entropy) => Some(Rule::EnthalpyEntropy),
        (Enthalpy, Quality) => Some(Rule::EnthalpyQuality),
        (InternalEnergy, Entropy) => Some(Rule::InternalEnergyEntropy),
        (InternalEnergy, Quality) => Some(Rule::InternalEnergyQuality),
        (Entropy, Quality) => Some(Rule::EntropyQuality),
        _ => None,
    }
}

/// One property tag with its specified value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PropertySpec {
    pub tag: PropertyTag,
    pub value: f64,
}

impl PropertySpec {
    pub fn new(tag: PropertyTag, value: f64) -> Self {
        Self { tag, value }
    }
}

/// A validated pair of distinct property specifications.
///
/// Normalization is order-independent but each value stays bound to its own
/// tag: `lead()` is the operand whose tag comes earlier in the dispatch
/// ordering, regardless of argument order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PropertyPair {
    first: PropertySpec,
    second: PropertySpec,
}

impl PropertyPair {
    pub fn new(first: PropertySpec, second: PropertySpec) -> Result<Self, ResolveError> {
        if first.tag == second.tag {
            return Err(ResolveError::InvalidInput {
                what: format!(
                    "property '{}' specified twice (values {} and {})",
                    first.tag.symbol(),
                    first.value,
                    second.value
                ),
            });
        }
        for spec in [first, second] {
            if !spec.value.is_finite() {
                return Err(ResolveError::InvalidInput {
                    what: format!(
                        "non-finite value {} for property '{}'",
                        spec.value,
                        spec.tag.symbol()
                    ),
                });
            }
        }
        Ok(Self { first, second })
    }

    /// The resolution rule this pair buckets into.
    pub fn rule(&self) -> Option<Rule> {
        rule_for(self.first.tag, self.second.tag)
    }

    /// Operand whose tag is earlier in the dispatch ordering.
    pub fn lead(&self) -> PropertySpec {
        if self.first.tag.rank() <= self.second.tag.rank() {
            self.first
        } else {
            self.second
        }
    }

    /// Operand whose tag is later in the dispatch ordering.
    pub fn trail(&self) -> PropertySpec {
        if self.first.tag.rank() <= self.second.tag.rank() {
            self.second
        } else {
            self.first
        }
    }
}

/// The four properties with saturated-liquid/vapor bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum BoundedProperty {
    Volume,
    Enthalpy,
    InternalEnergy,
    Entropy,
}

impl BoundedProperty {
    /// (liquid, vapor) bounds of this property on a saturation line.
    pub(crate) fn bounds(self, sat: &SatLine) -> (f64, f64) {
        match self {
            Self::Volume => (sat.vf, sat.vg),
            Self::Enthalpy => (sat.hf, sat.hg),
            Self::InternalEnergy => (sat.uf, sat.ug),
            Self::Entropy => (sat.sf, sat.sg),
        }
    }

    /// Single-phase value of this property at (p, t).
    pub(crate) fn at(self, table: &dyn PropertyTable, p: f64, t: f64) -> SteamResult<f64> {
        match self {
            Self::Volume => table.v_pt(p, t),
            Self::Enthalpy => table.h_pt(p, t),
            Self::InternalEnergy => table.u_pt(p, t),
            Self::Entropy => table.s_pt(p, t),
        }
    }

    /// Two-phase interpolation at quality `x`.
    pub(crate) fn interp(self, sat: &SatLine, x: f64) -> f64 {
        let (lo, hi) = self.bounds(sat);
        lo + x * (hi - lo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_distinct_pair_dispatches() {
        let mut rules = HashSet::new();
        for &a in &PropertyTag::ALL {
            for &b in &PropertyTag::ALL {
                if a == b {
                    assert_eq!(rule_for(a, b), None);
                } else {
                    let rule = rule_for(a, b).expect("pair must dispatch");
                    assert_eq!(rule_for(b, a), Some(rule), "order independence");
                    rules.insert(rule);
                }
            }
        }
        assert_eq!(rules.len(), 21);
    }

    #[test]
    fn bucket_priority_follows_tag_order() {
        use PropertyTag::*;
        assert_eq!(rule_for(Quality, Pressure), Some(Rule::PressureQuality));
        assert_eq!(rule_for(Entropy, Temperature), Some(Rule::TemperatureEntropy));
        assert_eq!(rule_for(Quality, Entropy), Some(Rule::EntropyQuality));
        assert_eq!(rule_for(InternalEnergy, Volume), Some(Rule::VolumeInternalEnergy));
    }

    #[test]
    fn pair_preserves_value_binding() {
        use PropertyTag::*;
        let pair = PropertyPair::new(
            PropertySpec::new(Enthalpy, 2800.0),
            PropertySpec::new(Pressure, 10.0),
        )
        .unwrap();
        assert_eq!(pair.lead().tag, Pressure);
        assert_eq!(pair.lead().value, 10.0);
        assert_eq!(pair.trail().tag, Enthalpy);
        assert_eq!(pair.trail().value, 2800.0);
    }

    #[test]
    fn rejects_duplicate_and_non_finite() {
        use PropertyTag::*;
        assert!(
            PropertyPair::new(PropertySpec::new(Pressure, 1.0), PropertySpec::new(Pressure, 2.0))
                .is_err()
        );
        assert!(
            PropertyPair::new(
                PropertySpec::new(Pressure, f64::NAN),
                PropertySpec::new(Temperature, 100.0)
            )
            .is_err()
        );
    }

    #[test]
    fn symbols_roundtrip() {
        for &tag in &PropertyTag::ALL {
            assert_eq!(PropertyTag::from_symbol(tag.symbol()), Some(tag));
        }
        assert_eq!(PropertyTag::from_symbol('T'), Some(PropertyTag::Temperature));
        assert_eq!(PropertyTag::from_symbol('z'), None);
    }
}
