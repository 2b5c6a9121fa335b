use std::io::Write;

use super::ReportError;
use crate::circuit::SimulationResult;

/// 헤더 행.
pub const HEADER: [&str; 4] = ["section", "parameter", "value", "unit"];

/// 결과 행과 세 곡선을 `section,parameter,value,unit` 형식으로 쓴다.
///
/// 곡선 행은 section 이 `curve_<단계>`, parameter 가 체 눈금(µm)이다.
pub fn write_csv<W: Write>(result: &SimulationResult, writer: W) -> Result<(), ReportError> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(HEADER)?;
    for row in result.rows() {
        let value = format_value(row.value);
        wtr.write_record([row.section, row.parameter, value.as_str(), row.unit])?;
    }
    for (stage, curve) in result.curves.labelled() {
        let section = format!("curve_{stage}");
        for p in curve.iter() {
            let sieve = format_value(p.sieve_um);
            let value = format_value(p.cumulative_pct);
            wtr.write_record([section.as_str(), sieve.as_str(), value.as_str(), "%"])?;
        }
    }
    wtr.flush()?;
    Ok(())
}

fn format_value(v: f64) -> String {
    // 전체 정밀도
    format!("{v}")
}
