use serde::{Deserialize, Serialize};

/// 압력 단위. 내부 기준은 kPa 이다.
/// 사이클론 급광 압력은 게이지 압력만 다루므로 절대/게이지 구분은 두지 않는다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PressureUnit {
    Psi,
    KiloPascal,
    Pascal,
    Bar,
}

/// 1 psi 에 해당하는 kPa.
pub const KPA_PER_PSI: f64 = 6.89476;

fn to_kpa(value: f64, unit: PressureUnit) -> f64 {
    match unit {
        PressureUnit::Psi => value * KPA_PER_PSI,
        PressureUnit::KiloPascal => value,
        PressureUnit::Pascal => value / 1000.0,
        PressureUnit::Bar => value * 100.0,
    }
}

fn from_kpa(value_kpa: f64, unit: PressureUnit) -> f64 {
    match unit {
        PressureUnit::Psi => value_kpa / KPA_PER_PSI,
        PressureUnit::KiloPascal => value_kpa,
        PressureUnit::Pascal => value_kpa * 1000.0,
        PressureUnit::Bar => value_kpa / 100.0,
    }
}

/// 압력을 원하는 단위로 변환한다.
pub fn convert_pressure(value: f64, from: PressureUnit, to: PressureUnit) -> f64 {
    from_kpa(to_kpa(value, from), to)
}

/// psi 값을 kPa 로 환산한다.
pub fn psi_to_kpa(psi: f64) -> f64 {
    to_kpa(psi, PressureUnit::Psi)
}
