use serde::{Deserialize, Serialize};

use super::errors::{require_fraction, require_positive, CircuitError};

/// SAG 밀 운전/설비 입력값.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MillParameters {
    /// 밀 내경 [m]
    pub diameter_m: f64,
    /// 밀 유효 길이 [m]
    pub length_m: f64,
    /// 총 충전율 J (0~1)
    pub fill_fraction: f64,
    /// 볼 충전율 Jb (0~1)
    pub ball_charge_fraction: f64,
    /// 회전수 [rpm]
    pub speed_rpm: f64,
    /// Bond 일지수 Wi [kWh/t]
    pub work_index_kwh_t: f64,
    /// 급광 F80 [µm]
    pub f80_um: f64,
    /// 신규 급광량 [t/h]
    pub tonnage_tph: f64,
}

impl Default for MillParameters {
    fn default() -> Self {
        Self {
            diameter_m: 10.97,
            length_m: 5.28,
            fill_fraction: 0.275,
            ball_charge_fraction: 0.12,
            speed_rpm: 9.0,
            work_index_kwh_t: 12.0,
            f80_um: 6000.0,
            tonnage_tph: 2848.0,
        }
    }
}

impl MillParameters {
    pub fn validate(&self) -> Result<(), CircuitError> {
        require_positive("sag.diameter_m", self.diameter_m)?;
        require_positive("sag.length_m", self.length_m)?;
        require_fraction("sag.fill_fraction", self.fill_fraction)?;
        require_fraction("sag.ball_charge_fraction", self.ball_charge_fraction)?;
        require_positive("sag.speed_rpm", self.speed_rpm)?;
        require_positive("sag.work_index_kwh_t", self.work_index_kwh_t)?;
        require_positive("sag.f80_um", self.f80_um)?;
        require_positive("sag.tonnage_tph", self.tonnage_tph)?;
        Ok(())
    }
}

/// 볼 밀 입력값. 처리량은 사이클론 형상으로부터 유도되므로 입력하지 않는다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BallMillParameters {
    /// Bond 일지수 Wi [kWh/t]
    pub work_index_kwh_t: f64,
    /// 급광 F80 [µm]
    pub f80_um: f64,
    /// 밀 내경 [m] - 임계속도 표시에만 사용
    pub diameter_m: f64,
    /// 회전수 [rpm] - 임계속도 표시에만 사용
    pub speed_rpm: f64,
}

impl Default for BallMillParameters {
    fn default() -> Self {
        Self {
            work_index_kwh_t: 14.5,
            f80_um: 600.0,
            diameter_m: 7.32,
            speed_rpm: 11.7,
        }
    }
}

impl BallMillParameters {
    pub fn validate(&self) -> Result<(), CircuitError> {
        require_positive("ball_mill.work_index_kwh_t", self.work_index_kwh_t)?;
        require_positive("ball_mill.f80_um", self.f80_um)?;
        require_positive("ball_mill.diameter_m", self.diameter_m)?;
        require_positive("ball_mill.speed_rpm", self.speed_rpm)?;
        Ok(())
    }
}

/// 하이드로사이클론 입력값. 현장 단위(mm, psi, m³/h)를 그대로 받는다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CycloneParameters {
    /// 본체 직경 [m]
    pub diameter_m: f64,
    /// Apex(하부 배출구) 직경 [mm]
    pub apex_mm: f64,
    /// Vortex finder 직경 [mm]
    pub vortex_mm: f64,
    /// 급광 압력 [psi]
    pub pressure_psi: f64,
    /// 급광 유량 [m³/h]
    pub flow_m3_per_h: f64,
    /// 펄프 상대 밀도 [t/m³]
    pub pulp_density_t_m3: f64,
}

impl Default for CycloneParameters {
    fn default() -> Self {
        Self {
            diameter_m: 0.5,
            apex_mm: 120.0,
            vortex_mm: 200.0,
            pressure_psi: 14.2,
            flow_m3_per_h: 4800.0,
            pulp_density_t_m3: 2.7,
        }
    }
}

impl CycloneParameters {
    pub fn validate(&self) -> Result<(), CircuitError> {
        require_positive("cyclone.diameter_m", self.diameter_m)?;
        require_positive("cyclone.apex_mm", self.apex_mm)?;
        require_positive("cyclone.vortex_mm", self.vortex_mm)?;
        require_positive("cyclone.pressure_psi", self.pressure_psi)?;
        require_positive("cyclone.flow_m3_per_h", self.flow_m3_per_h)?;
        require_positive("cyclone.pulp_density_t_m3", self.pulp_density_t_m3)?;
        Ok(())
    }
}

/// 한 번의 시뮬레이션에 필요한 전체 입력.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CircuitInput {
    pub sag: MillParameters,
    pub ball_mill: BallMillParameters,
    pub cyclone: CycloneParameters,
}

impl CircuitInput {
    /// 모든 입력 조건을 검사한다. 첫 번째 위반에서 중단한다.
    pub fn validate(&self) -> Result<(), CircuitError> {
        self.sag.validate()?;
        self.ball_mill.validate()?;
        self.cyclone.validate()
    }
}
