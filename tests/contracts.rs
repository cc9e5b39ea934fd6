//! Contract tests exercising the public vector and coordinate surfaces
//! together, across module boundaries.

use approx::assert_relative_eq;
use rstest::rstest;

use coordvec::{
    Cartesian, ConversionPolicy, DynVector, FixedVector, Geodetic, Spherical, VectorError,
};

#[test]
fn length_invariant_holds_after_every_successful_operation() {
    let mut fixed = FixedVector::<f64, 3>::zeroed();
    assert_eq!(fixed.len(), 3);

    fixed
        .assign_from(&[1.0, 2.0, 3.0], ConversionPolicy::Silent)
        .unwrap();
    assert_eq!(fixed.len(), 3);

    fixed
        .assign_from_vec(vec![4i32, 5, 6], ConversionPolicy::Silent)
        .unwrap();
    assert_eq!(fixed.len(), 3);

    // A failed assignment changes neither contents nor length
    assert!(fixed.assign_from(&[1.0], ConversionPolicy::Silent).is_err());
    assert_eq!(fixed.len(), 3);
    assert_eq!(fixed.as_slice(), &[4.0, 5.0, 6.0]);
}

#[test]
fn promotion_matches_per_element_widening() {
    let a = DynVector::from_slice(&[1i32, 2, 3]);
    let b = DynVector::from_slice(&[4.5f64, 6.7, 8.9]);

    let sum = a.try_add(&b).unwrap();
    for i in 0..3 {
        assert_relative_eq!(sum[i], a[i] as f64 + b[i], epsilon = 1e-12);
    }
}

#[test]
fn broadcast_multiplies_single_value_through() {
    let a = DynVector::from_slice(&[1.0, 2.0, 3.0, 4.0]);
    let single = DynVector::from_slice(&[2.5]);

    let product = a.try_mul(&single).unwrap();
    assert_eq!(product.len(), a.len());
    for i in 0..a.len() {
        assert_relative_eq!(product[i], a[i] * single[0]);
    }

    // Symmetric when the length-1 operand is on the left
    let product = single.try_mul(&a).unwrap();
    assert_eq!(product.len(), a.len());
    for i in 0..a.len() {
        assert_relative_eq!(product[i], single[0] * a[i]);
    }
}

#[test]
fn broadcast_is_deliberately_absent_from_add_sub() {
    // The elementwise multiply/divide path accepts a length-1 operand on
    // either side; add/subtract never do. This asymmetry is part of the
    // contract, not an oversight.
    let a = DynVector::from_slice(&[1.0, 2.0, 3.0]);
    let single = DynVector::from_slice(&[2.5]);

    assert!(matches!(
        a.try_add(&single).unwrap_err(),
        VectorError::LengthMismatch { .. }
    ));
    assert!(matches!(
        single.try_sub(&a).unwrap_err(),
        VectorError::LengthMismatch { .. }
    ));
}

#[test]
fn cross_product_reference_case() {
    let a = DynVector::from_slice(&[1, 2, 3]);
    let b = DynVector::from_slice(&[4, 5, 6]);
    assert_eq!(a.cross(&b).unwrap().as_slice(), &[-3, 6, -3]);
}

#[test]
fn inner_product_promotes_across_types() {
    let ints = DynVector::from_slice(&[1, 2, 3]);
    let floats = DynVector::from_slice(&[4.5, 6.7, 8.9]);
    assert_relative_eq!(ints.inner(&floats).unwrap(), 44.6, epsilon = 1e-9);
}

#[test]
fn arity_and_length_errors_are_distinct() {
    let three = DynVector::from_slice(&[1, 2, 3]);
    let four = DynVector::from_slice(&[4, 5, 6, 7]);

    assert!(matches!(
        three.cross(&four).unwrap_err(),
        VectorError::Arity { required: 3, actual: 4, .. }
    ));
    assert!(matches!(
        three.try_add(&four).unwrap_err(),
        VectorError::LengthMismatch { expected: 3, actual: 4, .. }
    ));
}

#[test]
fn list_round_trip_preserves_order_and_values() {
    let original = DynVector::from_slice(&[1, 2, 3]);
    let copy =
        DynVector::<i32>::converted_from(original.as_slice(), ConversionPolicy::Silent).unwrap();

    assert_eq!(copy.len(), original.len());
    for i in 0..original.len() {
        assert_eq!(copy[i], original[i]);
    }
}

#[rstest]
#[case(0.0, 0.0)]
#[case(90.0, 180.0)]
#[case(-90.0, -180.0)]
#[case(-33.87, 151.21)]
fn geodetic_accepts_in_range_values(#[case] lat: f64, #[case] lon: f64) {
    let coord = Geodetic::new(lat, lon).unwrap();
    assert_eq!(coord.lat(), lat);
    assert_eq!(coord.lon(), lon);
}

#[rstest]
#[case(90.01, 0.0, "lat")]
#[case(-90.01, 0.0, "lat")]
#[case(0.0, 180.01, "lon")]
#[case(0.0, -180.01, "lon")]
fn geodetic_rejects_out_of_range_values(#[case] lat: f64, #[case] lon: f64, #[case] field: &str) {
    match Geodetic::new(lat, lon) {
        Err(VectorError::Range { field: named, .. }) => assert_eq!(named, field),
        other => panic!("expected range error on {}, got {:?}", field, other),
    }
}

#[test]
fn geodetic_revalidation_is_idempotent() {
    let mut coord = Geodetic::new(45.0, -120.0).unwrap();
    for _ in 0..3 {
        let current = [coord.lat(), coord.lon()];
        coord
            .assign_from(&current, ConversionPolicy::Silent)
            .unwrap();
    }
    assert_eq!(coord.lat(), 45.0);
    assert_eq!(coord.lon(), -120.0);
}

#[test]
fn specializations_delegate_arithmetic_and_return_plain_containers() {
    let a = Cartesian::new(1.0, 2.0, 3.0);
    let b = Cartesian::new(4.0, 5.0, 6.0);

    let sum = a.try_add(&b).unwrap();
    assert_eq!(sum.as_slice(), &[5.0, 7.0, 9.0]);

    // Geodetic sums may leave the geodetic range; the result is a plain
    // container so that is not an error
    let near_pole = Geodetic::new(89.0, 179.0).unwrap();
    let sum = near_pole.try_add(&near_pole).unwrap();
    assert_eq!(sum.as_slice(), &[178.0, 358.0]);
}

#[test]
fn conversion_policy_controls_cross_type_construction() {
    // Warn (the default) and Silent both succeed
    let v = DynVector::<f64>::converted_from(&[1i32, 2], ConversionPolicy::Warn).unwrap();
    assert_eq!(v.as_slice(), &[1.0, 2.0]);

    let v = Spherical::<f64>::converted_from(&[1i32, 2], ConversionPolicy::Silent).unwrap();
    assert_eq!(v.as_slice(), &[1.0, 2.0]);

    // Reject refuses before any storage is built
    assert!(matches!(
        Cartesian::<f64>::converted_from(&[1i32, 2, 3], ConversionPolicy::Reject).unwrap_err(),
        VectorError::ConversionRejected { .. }
    ));

    // Same-type sources never trip the policy
    let v = DynVector::<i32>::converted_from(&[1, 2, 3], ConversionPolicy::Reject).unwrap();
    assert_eq!(v.as_slice(), &[1, 2, 3]);
}

#[test]
fn unrepresentable_casts_fail_loudly() {
    assert!(matches!(
        DynVector::<u8>::converted_from(&[300i32], ConversionPolicy::Silent).unwrap_err(),
        VectorError::ConversionOverflow { .. }
    ));
}

#[test]
fn rendering_is_bracketed_and_comma_separated() {
    let v = DynVector::from_slice(&[1, 2, 3]);
    assert_eq!(v.to_string(), "[1, 2, 3]");

    let coord = Geodetic::new(45.5, -120.25).unwrap();
    assert_eq!(coord.to_string(), "[45.5, -120.25]");
}

#[test]
fn errors_render_descriptive_messages() {
    let err = DynVector::from_slice(&[1, 2, 3])
        .try_add(&DynVector::from_slice(&[1, 2]))
        .unwrap_err();
    assert_eq!(err.to_string(), "elementwise addition requires length 3, got 2");

    let err = Geodetic::new(91.0, 0.0).unwrap_err();
    assert_eq!(err.to_string(), "lat must be within [-90, 90], got 91");
}
