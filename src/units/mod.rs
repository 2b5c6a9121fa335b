//! 단위 정의 및 변환 모듈 모음.
//! 회로 모델은 입력을 현장 단위(psi, mm, m³/h)로 받고 내부에서 SI로 환산한다.

pub mod flow;
pub mod length;
pub mod pressure;

pub use flow::{convert_flow, FlowUnit};
pub use length::{convert_length, LengthUnit};
pub use pressure::{convert_pressure, PressureUnit};
