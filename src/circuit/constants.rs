use serde::{Deserialize, Serialize};

use super::errors::{require_positive, CircuitError};
use super::size_distribution::DEFAULT_GGS_EXPONENT;

/// 입도 곡선의 누적값 표기 방식.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CurveConvention {
    /// `100 - 100·(s/P80)^n` 를 보고한다. 기존 보고서와 같은 값.
    #[default]
    Complement,
    /// GGS 누적 통과율 `100·(s/P80)^n` 를 그대로 보고한다.
    Passing,
}

/// 경험식 상수 모음. 모두 설정 파일에서 덮어쓸 수 있다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConstants {
    /// 임계속도 상수 (Vc = C / √D, rpm)
    pub critical_speed_constant: f64,
    /// SAG 비에너지 경험 상수 k
    pub sag_energy_constant: f64,
    /// 볼 밀 비에너지 / SAG 비에너지 비율
    pub ball_energy_ratio: f64,
    /// 사이클론 개구부(apex+vortex, m)에 따른 순환 처리량 계수
    pub circulation_coefficient: f64,
    /// Plitt 형 컷 사이즈 상수 K
    pub cyclone_constant: f64,
    /// D50c → 최종 P80 보정 계수
    pub cut_size_p80_factor: f64,
    /// 순환부하 계산 시 SAG 처리량 하한 [t/h]
    pub tonnage_epsilon: f64,
    /// GGS 분포 형상 지수 n
    pub ggs_exponent: f64,
    pub curve_convention: CurveConvention,
}

impl Default for ModelConstants {
    fn default() -> Self {
        Self {
            critical_speed_constant: 42.3,
            sag_energy_constant: 0.3,
            ball_energy_ratio: 0.8,
            circulation_coefficient: 0.6,
            cyclone_constant: 0.5,
            cut_size_p80_factor: 1.1,
            tonnage_epsilon: 1e-9,
            ggs_exponent: DEFAULT_GGS_EXPONENT,
            curve_convention: CurveConvention::Complement,
        }
    }
}

impl ModelConstants {
    pub fn validate(&self) -> Result<(), CircuitError> {
        require_positive("model.critical_speed_constant", self.critical_speed_constant)?;
        require_positive("model.sag_energy_constant", self.sag_energy_constant)?;
        require_positive("model.ball_energy_ratio", self.ball_energy_ratio)?;
        if !(self.circulation_coefficient.is_finite() && self.circulation_coefficient >= 0.0) {
            return Err(CircuitError::InvalidParameter {
                field: "model.circulation_coefficient",
                value: self.circulation_coefficient,
                reason: "0 이상의 유한한 값이어야 합니다",
            });
        }
        require_positive("model.cyclone_constant", self.cyclone_constant)?;
        require_positive("model.cut_size_p80_factor", self.cut_size_p80_factor)?;
        require_positive("model.tonnage_epsilon", self.tonnage_epsilon)?;
        require_positive("model.ggs_exponent", self.ggs_exponent)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_exponent_matches_curve_generator() {
        let c = ModelConstants::default();
        assert_eq!(c.ggs_exponent, DEFAULT_GGS_EXPONENT);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn negative_circulation_coefficient_rejected() {
        let c = ModelConstants {
            circulation_coefficient: -0.1,
            ..ModelConstants::default()
        };
        assert!(matches!(
            c.validate(),
            Err(CircuitError::InvalidParameter {
                field: "model.circulation_coefficient",
                ..
            })
        ));
    }
}
