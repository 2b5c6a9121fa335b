use serde::{Deserialize, Serialize};

use super::errors::{require_positive, CircuitError};

/// 밀 임계속도 계산 결과.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MillKinetics {
    /// 임계속도 [rpm]
    pub critical_speed_rpm: f64,
    /// 임계속도 대비 운전속도 [%]
    pub percent_critical: f64,
}

/// 임계속도 Vc = C / √D [rpm]. 기본 C = 42.3 (D 는 m).
pub fn critical_speed_rpm(diameter_m: f64, constant: f64) -> Result<f64, CircuitError> {
    let d = require_positive("mill.diameter_m", diameter_m)?;
    Ok(constant / d.sqrt())
}

/// 운전속도를 임계속도 대비 백분율로 환산한다.
pub fn mill_kinetics(
    diameter_m: f64,
    speed_rpm: f64,
    constant: f64,
) -> Result<MillKinetics, CircuitError> {
    let n = require_positive("mill.speed_rpm", speed_rpm)?;
    let vc = critical_speed_rpm(diameter_m, constant)?;
    Ok(MillKinetics {
        critical_speed_rpm: vc,
        percent_critical: n / vc * 100.0,
    })
}
