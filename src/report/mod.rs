//! 시뮬레이션 결과 내보내기. 계산 엔진은 파일을 다루지 않으므로 모든 직렬화는 여기서 한다.

pub mod csv_export;
pub mod text_report;

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use thiserror::Error;
use tracing::info;

use crate::circuit::SimulationResult;
use crate::i18n::Translator;

/// 보고서 출력 중 발생 가능한 오류.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV 작성 오류: {0}")]
    Csv(#[from] csv::Error),
    #[error("페이지 줄 수는 {min} 이상이어야 합니다 (입력 {given})")]
    PageTooShort { given: usize, min: usize },
}

/// 결과를 CSV 파일로 저장한다.
pub fn export_csv_file(result: &SimulationResult, path: impl AsRef<Path>) -> Result<(), ReportError> {
    let path = path.as_ref();
    let file = BufWriter::new(File::create(path)?);
    csv_export::write_csv(result, file)?;
    info!(path = %path.display(), "CSV exported");
    Ok(())
}

/// 결과를 페이지 구분된 텍스트 보고서로 저장한다.
pub fn export_report_file(
    result: &SimulationResult,
    tr: &Translator,
    page_lines: usize,
    path: impl AsRef<Path>,
) -> Result<(), ReportError> {
    let path = path.as_ref();
    let file = BufWriter::new(File::create(path)?);
    text_report::write_report(result, tr, page_lines, file)?;
    info!(path = %path.display(), "report exported");
    Ok(())
}
