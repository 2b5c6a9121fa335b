use serde::{Deserialize, Serialize};

/// 체적 유량 단위. 내부 기준은 m³/s 이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlowUnit {
    CubicMeterPerSecond,
    CubicMeterPerHour,
    LiterPerSecond,
    /// US gallon per minute
    Gpm,
}

const M3_PER_US_GAL: f64 = 0.003_785_411_784;

fn to_m3_per_s(value: f64, unit: FlowUnit) -> f64 {
    match unit {
        FlowUnit::CubicMeterPerSecond => value,
        FlowUnit::CubicMeterPerHour => value / 3600.0,
        FlowUnit::LiterPerSecond => value / 1000.0,
        FlowUnit::Gpm => value * M3_PER_US_GAL / 60.0,
    }
}

fn from_m3_per_s(value: f64, unit: FlowUnit) -> f64 {
    match unit {
        FlowUnit::CubicMeterPerSecond => value,
        FlowUnit::CubicMeterPerHour => value * 3600.0,
        FlowUnit::LiterPerSecond => value * 1000.0,
        FlowUnit::Gpm => value * 60.0 / M3_PER_US_GAL,
    }
}

/// 유량을 원하는 단위로 변환한다.
pub fn convert_flow(value: f64, from: FlowUnit, to: FlowUnit) -> f64 {
    from_m3_per_s(to_m3_per_s(value, from), to)
}

/// m³/h 를 m³/s 로 환산한다.
pub fn m3h_to_m3s(value: f64) -> f64 {
    to_m3_per_s(value, FlowUnit::CubicMeterPerHour)
}
