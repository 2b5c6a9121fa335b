use thiserror::Error;

/// 분쇄·분급 계산 중 발생 가능한 오류.
///
/// 계산은 순수 함수이므로 같은 입력으로 재시도해도 같은 오류가 재현된다.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CircuitError {
    /// 입력값이 도메인 조건(양수, 0~1 분율 등)을 위반
    #[error("잘못된 입력 {field} = {value}: {reason}")]
    InvalidParameter {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },
    /// 0 이하 또는 유한하지 않은 밑에 분수 거듭제곱이 필요함
    #[error("수치 영역 오류 ({quantity}): 밑 {base} 에 대해 거듭제곱을 계산할 수 없음")]
    NumericDomain { quantity: &'static str, base: f64 },
}

/// 양수 조건을 검사한다.
pub(crate) fn require_positive(field: &'static str, value: f64) -> Result<f64, CircuitError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(CircuitError::InvalidParameter {
            field,
            value,
            reason: "0보다 큰 유한한 값이어야 합니다",
        })
    }
}

/// 0~1 분율 조건을 검사한다.
pub(crate) fn require_fraction(field: &'static str, value: f64) -> Result<f64, CircuitError> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(CircuitError::InvalidParameter {
            field,
            value,
            reason: "0과 1 사이의 분율이어야 합니다",
        })
    }
}

/// 분수 지수 거듭제곱. 밑이 0 이하(지수가 양수면 0 허용)거나 결과가 유한하지 않으면 오류.
pub(crate) fn checked_powf(
    quantity: &'static str,
    base: f64,
    exponent: f64,
) -> Result<f64, CircuitError> {
    let base_ok = base.is_finite() && (base > 0.0 || (base == 0.0 && exponent > 0.0));
    if !base_ok {
        return Err(CircuitError::NumericDomain { quantity, base });
    }
    let out = base.powf(exponent);
    if out.is_finite() {
        Ok(out)
    } else {
        Err(CircuitError::NumericDomain { quantity, base })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_base_allowed_for_positive_exponent() {
        assert_eq!(checked_powf("J", 0.0, 0.45).unwrap(), 0.0);
    }

    #[test]
    fn negative_base_is_domain_error() {
        let err = checked_powf("D50c", -1.0, 0.6).unwrap_err();
        assert!(matches!(err, CircuitError::NumericDomain { quantity: "D50c", .. }));
    }

    #[test]
    fn zero_base_with_negative_exponent_rejected() {
        assert!(checked_powf("Q", 0.0, -0.27).is_err());
    }

    #[test]
    fn fraction_bounds_inclusive() {
        assert!(require_fraction("J", 0.0).is_ok());
        assert!(require_fraction("J", 1.0).is_ok());
        assert!(require_fraction("J", 1.01).is_err());
        assert!(require_fraction("J", f64::NAN).is_err());
    }
}
