use serde::{Deserialize, Serialize};
use tracing::debug;

use super::errors::{require_positive, CircuitError};
use super::params::BallMillParameters;
use super::sag_mill::{bond_product_p80, power_mw, StageResult};

/// 사이클론 개구부 직경(m 환산).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CycloneOpenings {
    pub apex_m: f64,
    pub vortex_m: f64,
}

/// 볼 밀 계산 입력.
#[derive(Debug, Clone, Copy)]
pub struct BallMillInput<'a> {
    /// SAG 신규 급광량 [t/h]
    pub sag_tonnage_tph: f64,
    /// SAG 비에너지 [kWh/t]
    pub sag_specific_energy_kwh_t: f64,
    pub params: &'a BallMillParameters,
    pub openings: CycloneOpenings,
    /// 볼 밀 / SAG 비에너지 비율
    pub energy_ratio: f64,
    /// 개구부 크기에 따른 순환 처리량 계수
    pub circulation_coefficient: f64,
}

/// 볼 밀 계산 결과.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BallMillResult {
    pub stage: StageResult,
    /// 순환 처리량을 포함한 볼 밀 처리량 [t/h]
    pub tonnage_tph: f64,
}

/// 사이클론 개구부가 클수록 순환 처리량이 커지는 경험식.
///
/// T_bm = T_sag · (1 + c · (apex + vortex))
pub fn ball_mill_tonnage(
    sag_tonnage_tph: f64,
    openings: CycloneOpenings,
    circulation_coefficient: f64,
) -> f64 {
    sag_tonnage_tph * (1.0 + circulation_coefficient * (openings.apex_m + openings.vortex_m))
}

/// 볼 밀 처리량, 비에너지, 산물 P80, 동력을 계산한다.
/// 비에너지는 SAG 비에너지의 고정 비율로 둔다.
pub fn compute_ball_mill(input: BallMillInput<'_>) -> Result<BallMillResult, CircuitError> {
    require_positive("ball_mill.energy_ratio", input.energy_ratio)?;
    let tonnage = ball_mill_tonnage(
        input.sag_tonnage_tph,
        input.openings,
        input.circulation_coefficient,
    );
    let ecs = input.energy_ratio * input.sag_specific_energy_kwh_t;
    let p80 = bond_product_p80(ecs, input.params.work_index_kwh_t, input.params.f80_um)?;
    let power = power_mw(ecs, tonnage);
    debug!(tonnage, ecs, p80, power, "ball mill stage");

    Ok(BallMillResult {
        stage: StageResult {
            specific_energy_kwh_t: ecs,
            power_mw: power,
            p80_um: p80,
        },
        tonnage_tph: tonnage,
    })
}
