use serde::{Deserialize, Serialize};
use tracing::debug;

use super::ball_mill::{compute_ball_mill, BallMillInput, BallMillResult};
use super::constants::ModelConstants;
use super::cyclone::{classify, ClassificationResult};
use super::errors::CircuitError;
use super::kinetics::{mill_kinetics, MillKinetics};
use super::mass_balance::{compute_metrics, CircuitMetrics, MassBalanceInput};
use super::params::CircuitInput;
use super::sag_mill::{compute_sag, StageResult};
use super::size_distribution::{generate_curve, SizeDistributionCurve};
use crate::units::{convert_pressure, PressureUnit};

/// 단계별 P80 곡선 세 개.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageCurves {
    pub sag: SizeDistributionCurve,
    pub ball_mill: SizeDistributionCurve,
    pub final_product: SizeDistributionCurve,
}

impl StageCurves {
    /// (식별자, 곡선) 쌍을 SAG → 볼 밀 → 최종 순서로 돌려준다.
    pub fn labelled(&self) -> [(&'static str, &SizeDistributionCurve); 3] {
        [
            ("sag", &self.sag),
            ("ball_mill", &self.ball_mill),
            ("final", &self.final_product),
        ]
    }
}

/// 표/보고서 출력용 한 줄. `section`, `parameter` 는 번역 키로도 쓰인다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResultRow {
    pub section: &'static str,
    pub parameter: &'static str,
    pub value: f64,
    pub unit: &'static str,
}

/// 시뮬레이션 1회의 전체 결과. 입력을 함께 보관한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    pub input: CircuitInput,
    pub constants: ModelConstants,
    pub sag_kinetics: MillKinetics,
    pub ball_mill_kinetics: MillKinetics,
    pub sag: StageResult,
    pub ball_mill: BallMillResult,
    pub classification: ClassificationResult,
    pub metrics: CircuitMetrics,
    pub curves: StageCurves,
}

/// SAG → 볼 밀 → 사이클론 → 물질수지 순으로 한 번 계산한다. 반복 수렴은 하지 않는다.
pub fn simulate(
    input: &CircuitInput,
    constants: &ModelConstants,
) -> Result<SimulationResult, CircuitError> {
    input.validate()?;
    constants.validate()?;

    let sag_kinetics = mill_kinetics(
        input.sag.diameter_m,
        input.sag.speed_rpm,
        constants.critical_speed_constant,
    )?;
    let ball_mill_kinetics = mill_kinetics(
        input.ball_mill.diameter_m,
        input.ball_mill.speed_rpm,
        constants.critical_speed_constant,
    )?;
    debug!(
        sag_pct = sag_kinetics.percent_critical,
        ball_pct = ball_mill_kinetics.percent_critical,
        "mill kinetics"
    );

    let sag = compute_sag(
        &input.sag,
        sag_kinetics.percent_critical,
        constants.sag_energy_constant,
    )?;

    let openings = input.cyclone.openings();
    let ball_mill = compute_ball_mill(BallMillInput {
        sag_tonnage_tph: input.sag.tonnage_tph,
        sag_specific_energy_kwh_t: sag.specific_energy_kwh_t,
        params: &input.ball_mill,
        openings,
        energy_ratio: constants.ball_energy_ratio,
        circulation_coefficient: constants.circulation_coefficient,
    })?;

    let classification = classify(
        &input.cyclone,
        constants.cyclone_constant,
        constants.cut_size_p80_factor,
    )?;

    let metrics = compute_metrics(MassBalanceInput {
        sag_tonnage_tph: input.sag.tonnage_tph,
        ball_mill_tonnage_tph: ball_mill.tonnage_tph,
        apex_m: openings.apex_m,
        cyclone_diameter_m: input.cyclone.diameter_m,
        ball_mill_p80_um: ball_mill.stage.p80_um,
        final_p80_um: classification.final_p80_um,
        tonnage_epsilon: constants.tonnage_epsilon,
    });

    let n = constants.ggs_exponent;
    let convention = constants.curve_convention;
    let curves = StageCurves {
        sag: generate_curve(sag.p80_um, n, convention)?,
        ball_mill: generate_curve(ball_mill.stage.p80_um, n, convention)?,
        final_product: generate_curve(classification.final_p80_um, n, convention)?,
    };

    Ok(SimulationResult {
        input: *input,
        constants: *constants,
        sag_kinetics,
        ball_mill_kinetics,
        sag,
        ball_mill,
        classification,
        metrics,
        curves,
    })
}

impl SimulationResult {
    /// 입력과 결과를 (구분, 항목, 값, 단위) 행으로 펼친다.
    pub fn rows(&self) -> Vec<ResultRow> {
        let row = |section, parameter, value, unit| ResultRow {
            section,
            parameter,
            value,
            unit,
        };
        let i = &self.input;
        vec![
            row("input", "sag.diameter", i.sag.diameter_m, "m"),
            row("input", "sag.length", i.sag.length_m, "m"),
            row("input", "sag.fill", i.sag.fill_fraction, "-"),
            row("input", "sag.ball_charge", i.sag.ball_charge_fraction, "-"),
            row("input", "sag.speed", i.sag.speed_rpm, "rpm"),
            row("input", "sag.work_index", i.sag.work_index_kwh_t, "kWh/t"),
            row("input", "sag.f80", i.sag.f80_um, "µm"),
            row("input", "sag.tonnage", i.sag.tonnage_tph, "t/h"),
            row("input", "ball_mill.work_index", i.ball_mill.work_index_kwh_t, "kWh/t"),
            row("input", "ball_mill.f80", i.ball_mill.f80_um, "µm"),
            row("input", "ball_mill.diameter", i.ball_mill.diameter_m, "m"),
            row("input", "ball_mill.speed", i.ball_mill.speed_rpm, "rpm"),
            row("input", "cyclone.diameter", i.cyclone.diameter_m, "m"),
            row("input", "cyclone.apex", i.cyclone.apex_mm, "mm"),
            row("input", "cyclone.vortex", i.cyclone.vortex_mm, "mm"),
            row("input", "cyclone.pressure", i.cyclone.pressure_psi, "psi"),
            row(
                "input",
                "cyclone.pressure_kpa",
                convert_pressure(i.cyclone.pressure_psi, PressureUnit::Psi, PressureUnit::KiloPascal),
                "kPa",
            ),
            row("input", "cyclone.flow", i.cyclone.flow_m3_per_h, "m³/h"),
            row("input", "cyclone.density", i.cyclone.pulp_density_t_m3, "t/m³"),
            row("sag", "critical_speed", self.sag_kinetics.critical_speed_rpm, "rpm"),
            row("sag", "percent_critical", self.sag_kinetics.percent_critical, "%"),
            row("sag", "specific_energy", self.sag.specific_energy_kwh_t, "kWh/t"),
            row("sag", "power", self.sag.power_mw, "MW"),
            row("sag", "p80", self.sag.p80_um, "µm"),
            row("ball_mill", "critical_speed", self.ball_mill_kinetics.critical_speed_rpm, "rpm"),
            row("ball_mill", "percent_critical", self.ball_mill_kinetics.percent_critical, "%"),
            row("ball_mill", "tonnage", self.ball_mill.tonnage_tph, "t/h"),
            row("ball_mill", "specific_energy", self.ball_mill.stage.specific_energy_kwh_t, "kWh/t"),
            row("ball_mill", "power", self.ball_mill.stage.power_mw, "MW"),
            row("ball_mill", "p80", self.ball_mill.stage.p80_um, "µm"),
            row("cyclone", "d50c", self.classification.d50c_um, "µm"),
            row("cyclone", "final_p80", self.classification.final_p80_um, "µm"),
            row("circuit", "circulating_load", self.metrics.circulating_load_pct, "%"),
            row("circuit", "efficiency", self.metrics.classification_efficiency_pct, "%"),
            row("circuit", "overflow", self.metrics.overflow_tonnage_tph, "t/h"),
            row(
                "circuit",
                "total_power",
                self.sag.power_mw + self.ball_mill.stage.power_mw,
                "MW",
            ),
        ]
    }
}
