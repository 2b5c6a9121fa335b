//! 분쇄·분급 회로(SAG → 볼 밀 → 하이드로사이클론) 정상상태 계산 엔진.
//! 모든 함수는 입출력이 없는 순수 계산이며, 입력이 같으면 결과도 비트 단위로 같다.

pub mod ball_mill;
pub mod constants;
pub mod cyclone;
pub mod errors;
pub mod kinetics;
pub mod mass_balance;
pub mod params;
pub mod sag_mill;
pub mod simulation;
pub mod size_distribution;

pub use ball_mill::{BallMillResult, CycloneOpenings};
pub use constants::{CurveConvention, ModelConstants};
pub use cyclone::ClassificationResult;
pub use errors::CircuitError;
pub use kinetics::MillKinetics;
pub use mass_balance::CircuitMetrics;
pub use params::{BallMillParameters, CircuitInput, CycloneParameters, MillParameters};
pub use sag_mill::StageResult;
pub use simulation::{simulate, ResultRow, SimulationResult, StageCurves};
pub use size_distribution::{SizeDistributionCurve, SIEVE_SERIES_UM};
