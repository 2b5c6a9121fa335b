use clap::{Args, Subcommand};
use std::path::PathBuf;
use thiserror::Error;
use tracing::info;

use crate::circuit::{self, CircuitInput};
use crate::config::Config;
use crate::controls::Variable;
use crate::conversion::{self, AnyUnit};
use crate::i18n::{keys, Translator};
use crate::quantity::QuantityKind;
use crate::report;
use crate::ui_cli;
use crate::units::{FlowUnit, LengthUnit, PressureUnit};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 파일 입출력 오류
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// 설정 저장/로드 오류
    #[error("설정 오류: {0}")]
    Config(#[from] crate::config::ConfigError),
    /// 단위 변환 오류
    #[error("단위 변환 오류: {0}")]
    Conversion(#[from] conversion::ConversionError),
    /// 회로 계산 오류
    #[error("회로 계산 오류: {0}")]
    Circuit(#[from] circuit::CircuitError),
    /// 보고서 출력 오류
    #[error("보고서 오류: {0}")]
    Report(#[from] report::ReportError),
    /// 대화형 입력 중 표준입력이 닫힘
    #[error("입력이 닫혔습니다")]
    InputClosed,
}

/// 기준 조건 위에 덮어쓸 운전 변수. 압력/직경/유량은 단위를 붙여 줄 수 있다.
#[derive(Debug, Clone, Default, Args)]
pub struct Overrides {
    /// SAG 회전수 [rpm]
    #[arg(long, global = true)]
    pub sag_rpm: Option<f64>,
    /// 볼 밀 회전수 [rpm]
    #[arg(long, global = true)]
    pub ball_rpm: Option<f64>,
    /// SAG 총 충전율 (0~1)
    #[arg(long, global = true)]
    pub fill: Option<f64>,
    /// SAG 볼 충전율 (0~1)
    #[arg(long, global = true)]
    pub ball_charge: Option<f64>,
    /// SAG 신규 급광량 [t/h]
    #[arg(long, global = true)]
    pub tonnage: Option<f64>,
    /// 사이클론 압력 (기본 psi, 예: 98kPa)
    #[arg(long, global = true)]
    pub pressure: Option<String>,
    /// 펄프 밀도 [t/m³]
    #[arg(long, global = true)]
    pub density: Option<f64>,
    /// Apex 직경 (기본 mm, 예: 4.7in)
    #[arg(long, global = true)]
    pub apex: Option<String>,
    /// Vortex finder 직경 (기본 mm)
    #[arg(long, global = true)]
    pub vortex: Option<String>,
    /// 사이클론 급광 유량 (기본 m³/h)
    #[arg(long, global = true)]
    pub flow: Option<String>,
}

impl Overrides {
    /// 지정된 값만 입력에 반영한다.
    pub fn apply(&self, input: &mut CircuitInput) -> Result<(), AppError> {
        let plain = [
            (Variable::SagSpeed, self.sag_rpm),
            (Variable::BallMillSpeed, self.ball_rpm),
            (Variable::Fill, self.fill),
            (Variable::BallCharge, self.ball_charge),
            (Variable::Tonnage, self.tonnage),
            (Variable::PulpDensity, self.density),
        ];
        for (var, value) in plain {
            if let Some(v) = value {
                var.set(input, v);
            }
        }
        if let Some(text) = &self.pressure {
            input.cyclone.pressure_psi = conversion::parse_quantity(
                QuantityKind::Pressure,
                text,
                AnyUnit::Pressure(PressureUnit::Psi),
            )?;
        }
        if let Some(text) = &self.apex {
            input.cyclone.apex_mm = parse_mm(text)?;
        }
        if let Some(text) = &self.vortex {
            input.cyclone.vortex_mm = parse_mm(text)?;
        }
        if let Some(text) = &self.flow {
            input.cyclone.flow_m3_per_h = conversion::parse_quantity(
                QuantityKind::Flow,
                text,
                AnyUnit::Flow(FlowUnit::CubicMeterPerHour),
            )?;
        }
        Ok(())
    }
}

fn parse_mm(text: &str) -> Result<f64, AppError> {
    Ok(conversion::parse_quantity(
        QuantityKind::Length,
        text,
        AnyUnit::Length(LengthUnit::Millimeter),
    )?)
}

/// CLI 하위 명령.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// 시뮬레이션을 실행하고 결과 표를 출력한다
    Run,
    /// 단계별 누적 입도 곡선을 출력한다
    Curves,
    /// CSV 및 텍스트 보고서를 저장한다
    Export {
        #[arg(long)]
        csv: Option<PathBuf>,
        #[arg(long)]
        report: Option<PathBuf>,
    },
    /// 메뉴로 변수를 바꿔 가며 반복 실행한다
    Interactive,
}

/// CLI 명령 하나를 실행한다.
pub fn run(
    command: Command,
    config: &Config,
    input: CircuitInput,
    tr: &Translator,
) -> Result<(), AppError> {
    match command {
        Command::Run => {
            let result = circuit::simulate(&input, &config.model)?;
            ui_cli::print_summary(&result, tr);
        }
        Command::Curves => {
            let result = circuit::simulate(&input, &config.model)?;
            ui_cli::print_curves(&result, tr);
        }
        Command::Export { csv, report } => {
            let result = circuit::simulate(&input, &config.model)?;
            if let Some(path) = csv {
                report::export_csv_file(&result, &path)?;
                println!("{} {}", tr.t(keys::EXPORT_DONE), path.display());
            }
            if let Some(path) = report {
                report::export_report_file(&result, tr, config.report_page_lines, &path)?;
                println!("{} {}", tr.t(keys::EXPORT_DONE), path.display());
            }
        }
        Command::Interactive => {
            ui_cli::interactive(tr, config, input)?;
            info!("interactive session closed");
        }
    }
    Ok(())
}
