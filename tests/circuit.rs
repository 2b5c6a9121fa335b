//! 회로 계산 엔진 회귀 테스트. 기준 조건은 현장 설계값(D=10.97 m SAG, 0.5 m 사이클론)이다.
use grinding_circuit_twin::circuit::{
    ball_mill::{ball_mill_tonnage, compute_ball_mill, BallMillInput, CycloneOpenings},
    cyclone::classify,
    kinetics::{critical_speed_rpm, mill_kinetics},
    mass_balance::{circulating_load_pct, classification_efficiency_pct, overflow_tonnage_tph},
    sag_mill::bond_product_p80,
    simulate, BallMillParameters, CircuitError, CircuitInput, CycloneParameters, ModelConstants,
};
use grinding_circuit_twin::logging;
use std::io;
use std::sync::{Arc, Mutex};
use tracing_subscriber::fmt::MakeWriter;

fn assert_close(label: &str, actual: f64, expected: f64, rel_tol: f64) {
    let denom = expected.abs().max(1.0);
    let diff = (actual - expected).abs();
    assert!(
        diff <= rel_tol * denom,
        "{label} expected {expected:.6} got {actual:.6} (diff {diff:.6}, tol {rel_tol})"
    );
}

/// WARN 이상 로그를 메모리에 모은다.
#[derive(Clone, Default)]
struct CapturedLog(Arc<Mutex<Vec<u8>>>);

impl CapturedLog {
    fn text(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for CapturedLog {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLog {
    type Writer = CapturedLog;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn warnings_during<T>(f: impl FnOnce() -> T) -> (T, String) {
    let log = CapturedLog::default();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .with_ansi(false)
        .with_writer(log.clone())
        .finish();
    let out = tracing::subscriber::with_default(subscriber, f);
    (out, log.text())
}

#[test]
fn critical_speed_reference_point() {
    let k = mill_kinetics(10.97, 9.0, 42.3).expect("kinetics");
    assert_close("Vc", k.critical_speed_rpm, 12.771_357_253_218_412, 1e-12);
    assert_close("Nc", k.percent_critical, 70.470_192_177_358_29, 1e-12);
    assert_eq!(k.percent_critical, 9.0 / (42.3 / 10.97_f64.sqrt()) * 100.0);
}

#[test]
fn non_positive_diameter_rejected() {
    let err = critical_speed_rpm(0.0, 42.3).unwrap_err();
    assert!(matches!(err, CircuitError::InvalidParameter { .. }));
    assert!(mill_kinetics(10.0, -1.0, 42.3).is_err());
}

#[test]
fn base_case_end_to_end() {
    logging::init_test();
    let res = simulate(&CircuitInput::default(), &ModelConstants::default()).expect("simulate");

    assert_close("Vc", res.sag_kinetics.critical_speed_rpm, 12.771_357_253_218_412, 1e-9);
    assert_close("Ecs_sag", res.sag.specific_energy_kwh_t, 1.707_953_209_122_415_9, 1e-9);
    assert_close("P80_sag", res.sag.p80_um, 1_357.337_644_393_024, 1e-9);
    assert_close("P_sag", res.sag.power_mw, 4.864_250_739_580_640_5, 1e-9);

    assert_close("T_bm", res.ball_mill.tonnage_tph, 3_394.816, 1e-9);
    assert_eq!(
        res.ball_mill.stage.specific_energy_kwh_t,
        0.8 * res.sag.specific_energy_kwh_t
    );
    assert_close("P80_bm", res.ball_mill.stage.p80_um, 396.061_025_752_343_65, 1e-9);
    assert_close("P_bm", res.ball_mill.stage.power_mw, 4.638_549_505_264_098, 1e-9);

    assert_close("D50c", res.classification.d50c_um, 39_148.139_555_026_486, 1e-9);
    assert_close("P80_final", res.classification.final_p80_um, 43_062.953_510_529_136, 1e-9);

    assert_close("CL", res.metrics.circulating_load_pct, 19.2, 1e-9);
    // 최종 P80 이 볼 밀 P80 보다 커서 효율은 0으로 보고된다.
    assert_eq!(res.metrics.classification_efficiency_pct, 0.0);
    assert_close("overflow", res.metrics.overflow_tonnage_tph, 3_199.274_598_4, 1e-9);
}

#[test]
fn simulation_is_bit_identical_across_runs() {
    let input = CircuitInput::default();
    let constants = ModelConstants::default();
    let a = simulate(&input, &constants).unwrap();
    let b = simulate(&input, &constants).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.sag.p80_um.to_bits(), b.sag.p80_um.to_bits());
}

#[test]
fn bond_p80_monotone_in_energy_and_feed() {
    let mut prev = f64::INFINITY;
    for ecs in [0.0, 0.5, 1.0, 2.0, 5.0, 10.0] {
        let p80 = bond_product_p80(ecs, 12.0, 6000.0).unwrap();
        assert!(p80 < prev || ecs == 0.0, "ecs={ecs} p80={p80}");
        prev = p80;
    }
    let mut prev = 0.0;
    for f80 in [100.0, 600.0, 2000.0, 6000.0, 20000.0] {
        let p80 = bond_product_p80(1.5, 12.0, f80).unwrap();
        assert!(p80 > prev, "f80={f80} p80={p80}");
        prev = p80;
    }
}

#[test]
fn zero_energy_leaves_feed_size_unchanged() {
    let p80 = bond_product_p80(0.0, 14.5, 600.0).unwrap();
    assert_close("P80", p80, 600.0, 1e-12);
}

#[test]
fn efficiency_is_zero_at_and_above_ball_mill_p80() {
    assert_eq!(classification_efficiency_pct(400.0, 400.0), 0.0);
    assert_eq!(classification_efficiency_pct(400.0, 900.0), 0.0);
    assert_close("eff", classification_efficiency_pct(400.0, 100.0), 75.0, 1e-12);
}

#[test]
fn circulating_load_zero_without_classifier_opening() {
    let t = ball_mill_tonnage(
        2848.0,
        CycloneOpenings {
            apex_m: 0.0,
            vortex_m: 0.0,
        },
        0.6,
    );
    assert_eq!(t, 2848.0);
    assert_eq!(circulating_load_pct(2848.0, t, 1e-9), 0.0);
}

#[test]
fn circulating_load_grows_with_openings() {
    let mut prev = 0.0;
    for apex_mm in [60.0, 100.0, 140.0, 180.0] {
        let mut input = CircuitInput::default();
        input.cyclone.apex_mm = apex_mm;
        let res = simulate(&input, &ModelConstants::default()).unwrap();
        assert!(res.metrics.circulating_load_pct > prev);
        prev = res.metrics.circulating_load_pct;
    }
}

#[test]
fn zero_sag_tonnage_uses_epsilon_floor() {
    logging::init_test();
    let cl = circulating_load_pct(0.0, 1.0, 1e-9);
    assert!(cl.is_finite());
    assert!(cl > 0.0);
}

#[test]
fn overflow_subtracts_squared_diameter_ratio() {
    assert_close("overflow", overflow_tonnage_tph(1000.0, 0.25, 0.5), 750.0, 1e-12);
}

#[test]
fn ball_mill_energy_ratio_is_configurable() {
    let params = BallMillParameters::default();
    let res = compute_ball_mill(BallMillInput {
        sag_tonnage_tph: 2000.0,
        sag_specific_energy_kwh_t: 2.0,
        params: &params,
        openings: CycloneOpenings {
            apex_m: 0.1,
            vortex_m: 0.2,
        },
        energy_ratio: 0.5,
        circulation_coefficient: 0.6,
    })
    .unwrap();
    assert_eq!(res.stage.specific_energy_kwh_t, 1.0);
    assert_close("T_bm", res.tonnage_tph, 2360.0, 1e-12);
    assert_close("P_bm", res.stage.power_mw, 2.36, 1e-12);
}

#[test]
fn cyclone_cut_size_shrinks_with_pressure() {
    let low = classify(&CycloneParameters::default(), 0.5, 1.1).unwrap();
    let high = classify(
        &CycloneParameters {
            pressure_psi: 25.0,
            ..CycloneParameters::default()
        },
        0.5,
        1.1,
    )
    .unwrap();
    assert!(high.d50c_um < low.d50c_um);
    assert_close("ratio", low.final_p80_um / low.d50c_um, 1.1, 1e-12);
}

#[test]
fn invalid_parameters_fail_fast_with_field_name() {
    let mut input = CircuitInput::default();
    input.sag.ball_charge_fraction = -0.1;
    input.cyclone.pressure_psi = 0.0;
    match simulate(&input, &ModelConstants::default()) {
        Err(CircuitError::InvalidParameter { field, value, .. }) => {
            assert_eq!(field, "sag.ball_charge_fraction");
            assert_eq!(value, -0.1);
        }
        other => panic!("expected InvalidParameter, got {other:?}"),
    }

    let mut input = CircuitInput::default();
    input.cyclone.flow_m3_per_h = -4800.0;
    assert!(matches!(
        simulate(&input, &ModelConstants::default()),
        Err(CircuitError::InvalidParameter {
            field: "cyclone.flow_m3_per_h",
            ..
        })
    ));
}

#[test]
fn negative_cut_size_input_is_numeric_domain_error() {
    let params = CycloneParameters {
        apex_mm: -120.0,
        ..CycloneParameters::default()
    };
    assert!(matches!(
        classify(&params, 0.5, 1.1),
        Err(CircuitError::NumericDomain { .. })
    ));
}

#[test]
fn result_rows_cover_every_stage() {
    let res = simulate(&CircuitInput::default(), &ModelConstants::default()).unwrap();
    let rows = res.rows();
    for section in ["input", "sag", "ball_mill", "cyclone", "circuit"] {
        assert!(rows.iter().any(|r| r.section == section), "missing {section}");
    }
    let p80 = rows
        .iter()
        .find(|r| r.section == "ball_mill" && r.parameter == "p80")
        .unwrap();
    assert_eq!(p80.value, res.ball_mill.stage.p80_um);
}

#[test]
fn base_case_run_emits_no_warnings() {
    let (res, log) = warnings_during(|| simulate(&CircuitInput::default(), &ModelConstants::default()));
    assert_eq!(res.unwrap().metrics.classification_efficiency_pct, 0.0);
    assert!(log.is_empty(), "unexpected warnings: {log}");
}

#[test]
fn epsilon_floor_is_still_warned() {
    let (cl, log) = warnings_during(|| circulating_load_pct(0.0, 1.0, 1e-9));
    assert!(cl.is_finite());
    assert!(log.contains("epsilon"), "log: {log}");
}

#[test]
fn model_constants_are_validated_before_running() {
    let constants = ModelConstants {
        ball_energy_ratio: 0.0,
        ..ModelConstants::default()
    };
    match simulate(&CircuitInput::default(), &constants) {
        Err(CircuitError::InvalidParameter { field, value, .. }) => {
            assert_eq!(field, "model.ball_energy_ratio");
            assert_eq!(value, 0.0);
        }
        other => panic!("expected InvalidParameter, got {other:?}"),
    }

    let constants = ModelConstants {
        ggs_exponent: -0.8,
        ..ModelConstants::default()
    };
    assert!(matches!(
        simulate(&CircuitInput::default(), &constants),
        Err(CircuitError::InvalidParameter {
            field: "model.ggs_exponent",
            ..
        })
    ));
}
