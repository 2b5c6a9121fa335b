use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// 물질수지 계산 입력.
#[derive(Debug, Clone, Copy)]
pub struct MassBalanceInput {
    pub sag_tonnage_tph: f64,
    pub ball_mill_tonnage_tph: f64,
    pub apex_m: f64,
    pub cyclone_diameter_m: f64,
    pub ball_mill_p80_um: f64,
    pub final_p80_um: f64,
    /// SAG 처리량이 0 근처일 때 대신 쓰는 하한
    pub tonnage_epsilon: f64,
}

/// 회로 성능 지표.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CircuitMetrics {
    /// 순환부하 [%]
    pub circulating_load_pct: f64,
    /// 분급 효율 [%]
    pub classification_efficiency_pct: f64,
    /// 오버플로 처리량 [t/h]
    pub overflow_tonnage_tph: f64,
}

/// 순환부하 = (T_bm / T_sag - 1) · 100. T_sag 는 epsilon 으로 하한을 둔다.
pub fn circulating_load_pct(sag_tonnage_tph: f64, ball_mill_tonnage_tph: f64, epsilon: f64) -> f64 {
    let denom = if sag_tonnage_tph.abs() < epsilon {
        warn!(sag_tonnage_tph, epsilon, "SAG tonnage near zero, using epsilon floor");
        epsilon
    } else {
        sag_tonnage_tph
    };
    (ball_mill_tonnage_tph / denom - 1.0) * 100.0
}

/// 분급 효율. 최종 P80 이 볼 밀 P80 보다 작을 때만 양수, 그 외에는 0.
pub fn classification_efficiency_pct(ball_mill_p80_um: f64, final_p80_um: f64) -> f64 {
    if final_p80_um < ball_mill_p80_um {
        100.0 * (1.0 - final_p80_um / ball_mill_p80_um)
    } else {
        debug!(ball_mill_p80_um, final_p80_um, "classifier does not refine product, efficiency 0");
        0.0
    }
}

/// 오버플로 = T_bm · (1 - (apex / Dc)^2)
pub fn overflow_tonnage_tph(ball_mill_tonnage_tph: f64, apex_m: f64, cyclone_diameter_m: f64) -> f64 {
    let ratio = apex_m / cyclone_diameter_m;
    ball_mill_tonnage_tph * (1.0 - ratio * ratio)
}

pub fn compute_metrics(input: MassBalanceInput) -> CircuitMetrics {
    CircuitMetrics {
        circulating_load_pct: circulating_load_pct(
            input.sag_tonnage_tph,
            input.ball_mill_tonnage_tph,
            input.tonnage_epsilon,
        ),
        classification_efficiency_pct: classification_efficiency_pct(
            input.ball_mill_p80_um,
            input.final_p80_um,
        ),
        overflow_tonnage_tph: overflow_tonnage_tph(
            input.ball_mill_tonnage_tph,
            input.apex_m,
            input.cyclone_diameter_m,
        ),
    }
}
