//! 단위가 붙은 CLI 입력과 덮어쓰기 테스트.
use grinding_circuit_twin::app::Overrides;
use grinding_circuit_twin::circuit::CircuitInput;
use grinding_circuit_twin::conversion::{parse_quantity, AnyUnit, ConversionError};
use grinding_circuit_twin::quantity::QuantityKind;
use grinding_circuit_twin::units::{FlowUnit, LengthUnit, PressureUnit};

#[test]
fn plain_number_keeps_target_unit() {
    let v = parse_quantity(QuantityKind::Pressure, "14.2", AnyUnit::Pressure(PressureUnit::Psi)).unwrap();
    assert_eq!(v, 14.2);
}

#[test]
fn kpa_converted_to_psi() {
    let v = parse_quantity(
        QuantityKind::Pressure,
        "97.906kPa",
        AnyUnit::Pressure(PressureUnit::Psi),
    )
    .unwrap();
    assert!((v - 14.2).abs() < 1e-3, "v={v}");
}

#[test]
fn inches_converted_to_mm() {
    let v = parse_quantity(QuantityKind::Length, "4 in", AnyUnit::Length(LengthUnit::Millimeter)).unwrap();
    assert!((v - 101.6).abs() < 1e-9);
}

#[test]
fn cubic_meter_per_second_to_per_hour() {
    let v = parse_quantity(
        QuantityKind::Flow,
        "1.5m3/s",
        AnyUnit::Flow(FlowUnit::CubicMeterPerHour),
    )
    .unwrap();
    assert!((v - 5400.0).abs() < 1e-9);
}

#[test]
fn unknown_unit_and_bad_number_rejected() {
    assert!(matches!(
        parse_quantity(QuantityKind::Length, "12 furlong", AnyUnit::Length(LengthUnit::Millimeter)),
        Err(ConversionError::UnknownUnit(_))
    ));
    assert!(matches!(
        parse_quantity(QuantityKind::Length, "mm", AnyUnit::Length(LengthUnit::Millimeter)),
        Err(ConversionError::InvalidNumber(_))
    ));
}

#[test]
fn overrides_apply_only_given_values() {
    let mut input = CircuitInput::default();
    let overrides = Overrides {
        sag_rpm: Some(9.5),
        apex: Some("5in".into()),
        pressure: Some("1bar".into()),
        ..Overrides::default()
    };
    overrides.apply(&mut input).unwrap();
    assert_eq!(input.sag.speed_rpm, 9.5);
    assert!((input.cyclone.apex_mm - 127.0).abs() < 1e-9);
    assert!((input.cyclone.pressure_psi - 100.0 / 6.89476).abs() < 1e-9);
    assert_eq!(input.cyclone.vortex_mm, CircuitInput::default().cyclone.vortex_mm);
    assert_eq!(input.sag.tonnage_tph, 2848.0);
}
