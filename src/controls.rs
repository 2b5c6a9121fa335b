//! 화면/CLI 에서 조정 가능한 운전 변수 목록.
//! 각 프런트엔드는 자신의 조작 상태를 갖고, 값이 바뀌면 `CircuitInput` 을 새로 만들어 엔진에 넘긴다.

use crate::circuit::CircuitInput;

/// 조정 가능한 운전 변수.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variable {
    SagSpeed,
    BallMillSpeed,
    Fill,
    BallCharge,
    Tonnage,
    CyclonePressure,
    PulpDensity,
    Apex,
    Vortex,
}

impl Variable {
    pub const ALL: [Variable; 9] = [
        Variable::SagSpeed,
        Variable::BallMillSpeed,
        Variable::Fill,
        Variable::BallCharge,
        Variable::Tonnage,
        Variable::CyclonePressure,
        Variable::PulpDensity,
        Variable::Apex,
        Variable::Vortex,
    ];

    /// 번역 키 (`param.input.*`) 의 뒷부분.
    pub fn key(self) -> &'static str {
        match self {
            Variable::SagSpeed => "sag.speed",
            Variable::BallMillSpeed => "ball_mill.speed",
            Variable::Fill => "sag.fill",
            Variable::BallCharge => "sag.ball_charge",
            Variable::Tonnage => "sag.tonnage",
            Variable::CyclonePressure => "cyclone.pressure",
            Variable::PulpDensity => "cyclone.density",
            Variable::Apex => "cyclone.apex",
            Variable::Vortex => "cyclone.vortex",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            Variable::SagSpeed | Variable::BallMillSpeed => "rpm",
            Variable::Fill | Variable::BallCharge => "-",
            Variable::Tonnage => "t/h",
            Variable::CyclonePressure => "psi",
            Variable::PulpDensity => "t/m³",
            Variable::Apex | Variable::Vortex => "mm",
        }
    }

    /// 슬라이더 범위 (최소, 최대).
    pub fn range(self) -> (f64, f64) {
        match self {
            Variable::SagSpeed => (6.0, 12.0),
            Variable::BallMillSpeed => (8.0, 16.0),
            Variable::Fill => (0.10, 0.45),
            Variable::BallCharge => (0.04, 0.25),
            Variable::Tonnage => (1000.0, 4000.0),
            Variable::CyclonePressure => (5.0, 30.0),
            Variable::PulpDensity => (1.2, 3.0),
            Variable::Apex => (50.0, 250.0),
            Variable::Vortex => (100.0, 350.0),
        }
    }

    pub fn get(self, input: &CircuitInput) -> f64 {
        match self {
            Variable::SagSpeed => input.sag.speed_rpm,
            Variable::BallMillSpeed => input.ball_mill.speed_rpm,
            Variable::Fill => input.sag.fill_fraction,
            Variable::BallCharge => input.sag.ball_charge_fraction,
            Variable::Tonnage => input.sag.tonnage_tph,
            Variable::CyclonePressure => input.cyclone.pressure_psi,
            Variable::PulpDensity => input.cyclone.pulp_density_t_m3,
            Variable::Apex => input.cyclone.apex_mm,
            Variable::Vortex => input.cyclone.vortex_mm,
        }
    }

    pub fn set(self, input: &mut CircuitInput, value: f64) {
        let slot = match self {
            Variable::SagSpeed => &mut input.sag.speed_rpm,
            Variable::BallMillSpeed => &mut input.ball_mill.speed_rpm,
            Variable::Fill => &mut input.sag.fill_fraction,
            Variable::BallCharge => &mut input.sag.ball_charge_fraction,
            Variable::Tonnage => &mut input.sag.tonnage_tph,
            Variable::CyclonePressure => &mut input.cyclone.pressure_psi,
            Variable::PulpDensity => &mut input.cyclone.pulp_density_t_m3,
            Variable::Apex => &mut input.cyclone.apex_mm,
            Variable::Vortex => &mut input.cyclone.vortex_mm,
        };
        *slot = value;
    }
}
