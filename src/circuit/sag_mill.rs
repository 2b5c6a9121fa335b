use serde::{Deserialize, Serialize};
use tracing::debug;

use super::errors::{checked_powf, require_positive, CircuitError};
use super::params::MillParameters;

/// 분쇄 단계(SAG, 볼 밀) 한 개의 계산 결과.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StageResult {
    /// 비분쇄에너지 Ecs [kWh/t]
    pub specific_energy_kwh_t: f64,
    /// 소요 동력 [MW]
    pub power_mw: f64,
    /// 산물 P80 [µm]
    pub p80_um: f64,
}

/// Bond 식을 P80 에 대해 정리한 형태로 산물 입도를 구한다.
///
/// P80 = ( Ecs/(10·Wi) + 1/√F80 )^-2
///
/// Ecs 가 클수록 P80 은 작아지고, F80 이 클수록 P80 도 커진다.
pub fn bond_product_p80(
    specific_energy_kwh_t: f64,
    work_index_kwh_t: f64,
    f80_um: f64,
) -> Result<f64, CircuitError> {
    let wi = require_positive("work_index_kwh_t", work_index_kwh_t)?;
    let f80 = require_positive("f80_um", f80_um)?;
    let base = specific_energy_kwh_t / (10.0 * wi) + 1.0 / f80.sqrt();
    checked_powf("bond_p80", base, -2.0)
}

/// 동력 [MW] = Ecs [kWh/t] · T [t/h] / 1000
pub fn power_mw(specific_energy_kwh_t: f64, tonnage_tph: f64) -> f64 {
    specific_energy_kwh_t * tonnage_tph / 1000.0
}

/// SAG 밀의 비에너지, 산물 P80, 동력을 계산한다.
///
/// Ecs = k · D^0.3 · (L/D)^0.2 · (Nc/100)^1.5 · J^0.45 · Jb^0.1 · Wi
pub fn compute_sag(
    params: &MillParameters,
    percent_critical: f64,
    energy_constant: f64,
) -> Result<StageResult, CircuitError> {
    let d = require_positive("sag.diameter_m", params.diameter_m)?;
    let l = require_positive("sag.length_m", params.length_m)?;

    let ecs = energy_constant
        * checked_powf("sag.diameter_m", d, 0.3)?
        * checked_powf("sag.l_over_d", l / d, 0.2)?
        * checked_powf("sag.speed_fraction", percent_critical / 100.0, 1.5)?
        * checked_powf("sag.fill_fraction", params.fill_fraction, 0.45)?
        * checked_powf("sag.ball_charge_fraction", params.ball_charge_fraction, 0.1)?
        * params.work_index_kwh_t;

    let p80 = bond_product_p80(ecs, params.work_index_kwh_t, params.f80_um)?;
    let power = power_mw(ecs, params.tonnage_tph);
    debug!(ecs, p80, power, "SAG stage");

    Ok(StageResult {
        specific_energy_kwh_t: ecs,
        power_mw: power,
        p80_um: p80,
    })
}
