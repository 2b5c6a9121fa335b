use serde::{Deserialize, Serialize};

/// 길이 단위. 내부 기준은 미터이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LengthUnit {
    Meter,
    Millimeter,
    Micrometer,
    Inch,
    Foot,
}

fn to_meter(value: f64, unit: LengthUnit) -> f64 {
    match unit {
        LengthUnit::Meter => value,
        LengthUnit::Millimeter => value / 1000.0,
        LengthUnit::Micrometer => value / 1_000_000.0,
        LengthUnit::Inch => value * 0.0254,
        LengthUnit::Foot => value * 0.3048,
    }
}

fn from_meter(value_m: f64, unit: LengthUnit) -> f64 {
    match unit {
        LengthUnit::Meter => value_m,
        LengthUnit::Millimeter => value_m * 1000.0,
        LengthUnit::Micrometer => value_m * 1_000_000.0,
        LengthUnit::Inch => value_m / 0.0254,
        LengthUnit::Foot => value_m / 0.3048,
    }
}

/// 길이를 다른 단위로 변환한다.
pub fn convert_length(value: f64, from: LengthUnit, to: LengthUnit) -> f64 {
    let m = to_meter(value, from);
    from_meter(m, to)
}

/// 밀리미터를 미터로 환산한다. (apex / vortex finder 직경)
pub fn mm_to_m(mm: f64) -> f64 {
    to_meter(mm, LengthUnit::Millimeter)
}

/// 미터를 마이크로미터로 환산한다. (컷 사이즈 표시)
pub fn m_to_um(m: f64) -> f64 {
    from_meter(m, LengthUnit::Micrometer)
}
