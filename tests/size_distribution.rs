//! 누적 입도 곡선 생성기 테스트.
use grinding_circuit_twin::circuit::{
    size_distribution::{cumulative_value, generate_curve, ggs_curve},
    CircuitError, CurveConvention, SIEVE_SERIES_UM,
};

#[test]
fn curve_has_one_point_per_sieve_in_order() {
    let curve = ggs_curve(396.0).unwrap();
    assert_eq!(curve.len(), 15);
    let sieves: Vec<f64> = curve.iter().map(|p| p.sieve_um).collect();
    assert_eq!(sieves, SIEVE_SERIES_UM.to_vec());
    assert_eq!(curve.exponent, 0.8);
    assert_eq!(curve.convention, CurveConvention::Complement);
}

#[test]
fn sieve_equal_to_p80_reports_zero() {
    let curve = ggs_curve(600.0).unwrap();
    let at_p80 = curve.iter().find(|p| p.sieve_um == 600.0).unwrap();
    assert_eq!(at_p80.cumulative_pct, 0.0);
}

#[test]
fn sieve_much_smaller_than_p80_approaches_hundred() {
    let v = cumulative_value(38.0, 1.0e7, 0.8, CurveConvention::Complement).unwrap();
    assert!(v > 99.9 && v <= 100.0, "v={v}");
}

#[test]
fn values_are_clamped_to_percent_range() {
    let curve = ggs_curve(50.0).unwrap();
    assert!(curve
        .iter()
        .all(|p| (0.0..=100.0).contains(&p.cumulative_pct)));
    // 큰 체에서는 y > 100 이므로 0 으로 잘린다.
    assert_eq!(curve.points[0].cumulative_pct, 0.0);
}

#[test]
fn passing_convention_reports_ggs_value() {
    let v = cumulative_value(150.0, 300.0, 1.0, CurveConvention::Passing).unwrap();
    assert!((v - 50.0).abs() < 1e-12);
    let c = cumulative_value(150.0, 300.0, 1.0, CurveConvention::Complement).unwrap();
    assert!((c - 50.0).abs() < 1e-12);
    let v = cumulative_value(75.0, 300.0, 1.0, CurveConvention::Passing).unwrap();
    assert!((v - 25.0).abs() < 1e-12);
}

#[test]
fn generation_is_deterministic() {
    let a = generate_curve(1357.3, 0.8, CurveConvention::Complement).unwrap();
    let b = generate_curve(1357.3, 0.8, CurveConvention::Complement).unwrap();
    assert_eq!(a, b);
}

#[test]
fn non_positive_p80_rejected() {
    assert!(matches!(
        ggs_curve(0.0),
        Err(CircuitError::NumericDomain { .. })
    ));
    assert!(ggs_curve(f64::NAN).is_err());
    assert!(generate_curve(300.0, 0.0, CurveConvention::Complement).is_err());
}
