//! Operand-order symmetry: resolving (A, B, va, vb) must behave exactly like
//! resolving (B, A, vb, va) for every one of the 21 buckets, whether the
//! resolution succeeds or fails.

use proptest::prelude::*;
use sc_core::UnitSystem;
use sc_state::{PropertyTag, resolve};

fn distinct_pair() -> impl Strategy<Value = (PropertyTag, PropertyTag)> {
    (0usize..7, 0usize..6).prop_map(|(i, j_raw)| {
        let a = PropertyTag::ALL[i];
        // pick the second tag from the remaining six
        let j = if j_raw >= i { j_raw + 1 } else { j_raw };
        (a, PropertyTag::ALL[j])
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn order_of_operands_is_irrelevant(
        (tag_a, tag_b) in distinct_pair(),
        seed_a in 0.0f64..1.0,
        seed_b in 0.0f64..1.0,
    ) {
        // map the seeds into each tag's plausible range by hand so the value
        // stays attached to its tag when the operands swap
        let value_a = range_lerp(tag_a, seed_a);
        let value_b = range_lerp(tag_b, seed_b);

        let forward = resolve(tag_a, tag_b, value_a, value_b, UnitSystem::Si);
        let swapped = resolve(tag_b, tag_a, value_b, value_a, UnitSystem::Si);

        match (forward, swapped) {
            (Ok(a), Ok(b)) => prop_assert_eq!(a, b),
            (Err(_), Err(_)) => {}
            (a, b) => prop_assert!(
                false,
                "asymmetric outcome for {:?}/{:?}: {:?} vs {:?}",
                tag_a, tag_b, a.is_ok(), b.is_ok()
            ),
        }
    }
}

fn range_lerp(tag: PropertyTag, fraction: f64) -> f64 {
    use PropertyTag::*;
    let (lo, hi) = match tag {
        Pressure => (0.5, 50.0),
        Temperature => (5.0, 350.0),
        Volume => (0.001, 2.0),
        Enthalpy => (100.0, 3400.0),
        InternalEnergy => (100.0, 2700.0),
        Entropy => (0.3, 8.5),
        Quality => (-0.5, 1.5),
    };
    lo + fraction * (hi - lo)
}

/// Deterministic sweep over all 21 buckets with mid-range values; every
/// bucket must dispatch and behave symmetrically.
#[test]
fn all_buckets_are_symmetric_at_midrange() {
    for (i, &a) in PropertyTag::ALL.iter().enumerate() {
        for &b in &PropertyTag::ALL[i + 1..] {
            let va = range_lerp(a, 0.5);
            let vb = range_lerp(b, 0.5);
            let forward = resolve(a, b, va, vb, UnitSystem::Si);
            let swapped = resolve(b, a, vb, va, UnitSystem::Si);
            match (forward, swapped) {
                (Ok(x), Ok(y)) => assert_eq!(x, y, "bucket {:?}/{:?}", a, b),
                (Err(_), Err(_)) => {}
                (x, y) => panic!(
                    "asymmetric outcome for {:?}/{:?}: {} vs {}",
                    a,
                    b,
                    x.is_ok(),
                    y.is_ok()
                ),
            }
        }
    }
}
