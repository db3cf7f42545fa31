//! Input rejection: duplicate tags, non-finite values and oracle domain
//! errors must surface as tagged failures, never as substituted defaults.

use sc_core::UnitSystem;
use sc_state::{PropertyTag::*, ResolveError, resolve};

#[test]
fn duplicate_property_is_invalid_input() {
    let err = resolve(Pressure, Pressure, 1.0, 2.0, UnitSystem::Si).unwrap_err();
    assert!(matches!(err, ResolveError::InvalidInput { .. }));
    assert!(err.to_string().contains('p'));
}

#[test]
fn non_finite_values_are_invalid_input() {
    let err = resolve(Pressure, Temperature, f64::NAN, 100.0, UnitSystem::Si).unwrap_err();
    assert!(matches!(err, ResolveError::InvalidInput { .. }));

    let err = resolve(Pressure, Temperature, 1.0, f64::INFINITY, UnitSystem::Si).unwrap_err();
    assert!(matches!(err, ResolveError::InvalidInput { .. }));
}

#[test]
fn oracle_domain_errors_propagate() {
    // negative pressure
    let err = resolve(Pressure, Quality, -1.0, 0.5, UnitSystem::Si).unwrap_err();
    assert!(matches!(err, ResolveError::Table(_)));

    // far above the critical pressure, no saturation temperature exists
    let err = resolve(Pressure, Temperature, 5_000.0, 100.0, UnitSystem::Si).unwrap_err();
    assert!(matches!(err, ResolveError::Table(_)));
}
