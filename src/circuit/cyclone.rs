use serde::{Deserialize, Serialize};
use tracing::debug;

use super::ball_mill::CycloneOpenings;
use super::errors::{checked_powf, CircuitError};
use super::params::CycloneParameters;
use crate::units::{flow::m3h_to_m3s, length::m_to_um, length::mm_to_m, pressure::psi_to_kpa};

/// 사이클론 분급 결과.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// 컷 사이즈 D50c [µm]
    pub d50c_um: f64,
    /// 오버플로(최종 산물) P80 [µm]
    pub final_p80_um: f64,
}

impl CycloneParameters {
    /// apex / vortex finder 직경을 m 로 환산한다.
    pub fn openings(&self) -> CycloneOpenings {
        CycloneOpenings {
            apex_m: mm_to_m(self.apex_mm),
            vortex_m: mm_to_m(self.vortex_mm),
        }
    }
}

/// Plitt 형 상관식으로 컷 사이즈와 최종 P80 을 구한다.
///
/// D50c = K · Dc^0.46 · Apex^0.6 · Q^-0.27 · ρs^0.5 · P^-0.3
/// (Dc, Apex: m, Q: m³/s, P: kPa, 결과: m)
pub fn classify(
    params: &CycloneParameters,
    cyclone_constant: f64,
    p80_factor: f64,
) -> Result<ClassificationResult, CircuitError> {
    let apex_m = params.openings().apex_m;
    let q_m3_s = m3h_to_m3s(params.flow_m3_per_h);
    let p_kpa = psi_to_kpa(params.pressure_psi);

    let d50c_m = cyclone_constant
        * checked_powf("cyclone.diameter_m", params.diameter_m, 0.46)?
        * checked_powf("cyclone.apex_m", apex_m, 0.6)?
        * checked_powf("cyclone.flow_m3_per_s", q_m3_s, -0.27)?
        * checked_powf("cyclone.pulp_density_t_m3", params.pulp_density_t_m3, 0.5)?
        * checked_powf("cyclone.pressure_kpa", p_kpa, -0.3)?;

    let d50c_um = m_to_um(d50c_m);
    let final_p80_um = m_to_um(d50c_m * p80_factor);
    debug!(d50c_um, final_p80_um, "cyclone classification");

    Ok(ClassificationResult {
        d50c_um,
        final_p80_um,
    })
}
