use serde::{Deserialize, Serialize};

use super::constants::CurveConvention;
use super::errors::{checked_powf, require_positive, CircuitError};

/// 표준 체 눈금 [µm], 큰 것부터.
pub const SIEVE_SERIES_UM: [f64; 15] = [
    2360.0, 1700.0, 1180.0, 850.0, 600.0, 425.0, 300.0, 212.0, 150.0, 106.0, 75.0, 63.0, 53.0,
    45.0, 38.0,
];

/// GGS 분포 기본 형상 지수.
pub const DEFAULT_GGS_EXPONENT: f64 = 0.8;

/// 체 하나에 대한 누적값.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    pub sieve_um: f64,
    /// 누적값 [%], 0~100
    pub cumulative_pct: f64,
}

/// P80 하나로부터 만든 누적 입도 곡선.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizeDistributionCurve {
    pub p80_um: f64,
    pub exponent: f64,
    pub convention: CurveConvention,
    pub points: Vec<CurvePoint>,
}

impl SizeDistributionCurve {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CurvePoint> {
        self.points.iter()
    }
}

/// 체 눈금 s 에서의 GGS 값 y = 100·(s/P80)^n 을 표기 방식에 따라 0~100 으로 잘라 반환한다.
pub fn cumulative_value(
    sieve_um: f64,
    p80_um: f64,
    exponent: f64,
    convention: CurveConvention,
) -> Result<f64, CircuitError> {
    let y = 100.0 * checked_powf("curve.size_ratio", sieve_um / p80_um, exponent)?;
    let value = match convention {
        CurveConvention::Complement => 100.0 - y,
        CurveConvention::Passing => y,
    };
    Ok(value.clamp(0.0, 100.0))
}

/// 고정 체 눈금에 대해 누적 입도 곡선을 만든다.
pub fn generate_curve(
    p80_um: f64,
    exponent: f64,
    convention: CurveConvention,
) -> Result<SizeDistributionCurve, CircuitError> {
    if !(p80_um.is_finite() && p80_um > 0.0) {
        return Err(CircuitError::NumericDomain {
            quantity: "curve.p80_um",
            base: p80_um,
        });
    }
    let n = require_positive("curve.exponent", exponent)?;
    let points = SIEVE_SERIES_UM
        .iter()
        .map(|&s| {
            cumulative_value(s, p80_um, n, convention).map(|v| CurvePoint {
                sieve_um: s,
                cumulative_pct: v,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(SizeDistributionCurve {
        p80_um,
        exponent: n,
        convention,
        points,
    })
}

/// 기본 지수(0.8)와 기본 표기 방식으로 곡선을 만든다.
pub fn ggs_curve(p80_um: f64) -> Result<SizeDistributionCurve, CircuitError> {
    generate_curve(p80_um, DEFAULT_GGS_EXPONENT, CurveConvention::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sieve_series_is_strictly_descending() {
        assert!(SIEVE_SERIES_UM.windows(2).all(|w| w[0] > w[1]));
        assert_eq!(SIEVE_SERIES_UM[0], 2360.0);
        assert_eq!(SIEVE_SERIES_UM[14], 38.0);
    }

    #[test]
    fn passing_convention_is_monotone_in_sieve_size() {
        let curve = generate_curve(400.0, 0.8, CurveConvention::Passing).unwrap();
        let values: Vec<f64> = curve.iter().map(|p| p.cumulative_pct).collect();
        assert!(values.windows(2).all(|w| w[0] >= w[1]));
        assert_eq!(values[0], 100.0);
    }
}
