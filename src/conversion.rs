use thiserror::Error;

use crate::quantity::QuantityKind;
use crate::units::*;

/// 단위 변환 시 발생 가능한 오류.
#[derive(Debug, Error, PartialEq)]
pub enum ConversionError {
    /// 알 수 없는 단위 문자열
    #[error("알 수 없는 단위: {0}")]
    UnknownUnit(String),
    /// 숫자 부분을 읽을 수 없음
    #[error("숫자를 읽을 수 없음: {0}")]
    InvalidNumber(String),
}

/// 입력 단위. 물리량별 enum 을 하나로 묶는다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnyUnit {
    Pressure(PressureUnit),
    Length(LengthUnit),
    Flow(FlowUnit),
}

/// `14.2psi`, `120 mm`, `4800m3/h` 처럼 단위가 붙은 값을 읽어 `target` 단위로 환산한다.
///
/// 단위가 없으면 이미 `target` 단위로 입력된 것으로 본다.
pub fn parse_quantity(
    kind: QuantityKind,
    text: &str,
    target: AnyUnit,
) -> Result<f64, ConversionError> {
    let text = text.trim();
    // 숫자로 읽히는 가장 긴 앞부분을 값으로, 나머지를 단위로 본다.
    let (value, unit) = text
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(text.len()))
        .rev()
        .filter(|&i| i > 0)
        .find_map(|i| {
            let (num, unit) = text.split_at(i);
            num.trim().parse::<f64>().ok().map(|v| (v, unit))
        })
        .ok_or_else(|| ConversionError::InvalidNumber(text.to_string()))?;
    let unit = unit.trim();
    if unit.is_empty() {
        return Ok(value);
    }
    convert(kind, value, unit, target)
}

/// 문자열로 전달된 단위명을 enum으로 변환한 뒤 지정된 단위로 환산한다.
pub fn convert(
    kind: QuantityKind,
    value: f64,
    from_unit_str: &str,
    to: AnyUnit,
) -> Result<f64, ConversionError> {
    match (kind, to) {
        (QuantityKind::Pressure, AnyUnit::Pressure(to)) => {
            let from = parse_pressure_unit(from_unit_str)?;
            Ok(convert_pressure(value, from, to))
        }
        (QuantityKind::Length, AnyUnit::Length(to)) => {
            let from = parse_length_unit(from_unit_str)?;
            Ok(convert_length(value, from, to))
        }
        (QuantityKind::Flow, AnyUnit::Flow(to)) => {
            let from = parse_flow_unit(from_unit_str)?;
            Ok(convert_flow(value, from, to))
        }
        _ => Err(ConversionError::UnknownUnit(from_unit_str.to_string())),
    }
}

fn parse_pressure_unit(s: &str) -> Result<PressureUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "psi" | "psig" => Ok(PressureUnit::Psi),
        "kpa" | "kilopascal" => Ok(PressureUnit::KiloPascal),
        "pa" | "pascal" => Ok(PressureUnit::Pascal),
        "bar" | "barg" => Ok(PressureUnit::Bar),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_length_unit(s: &str) -> Result<LengthUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "m" | "meter" | "metre" => Ok(LengthUnit::Meter),
        "mm" => Ok(LengthUnit::Millimeter),
        "um" | "µm" | "micron" => Ok(LengthUnit::Micrometer),
        "in" | "inch" | "\"" => Ok(LengthUnit::Inch),
        "ft" | "foot" | "feet" => Ok(LengthUnit::Foot),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_flow_unit(s: &str) -> Result<FlowUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "m3/s" | "m^3/s" | "m³/s" => Ok(FlowUnit::CubicMeterPerSecond),
        "m3/h" | "m^3/h" | "m³/h" => Ok(FlowUnit::CubicMeterPerHour),
        "l/s" | "lps" => Ok(FlowUnit::LiterPerSecond),
        "gpm" => Ok(FlowUnit::Gpm),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}
