use std::io::Write;

use super::ReportError;
use crate::circuit::SimulationResult;
use crate::i18n::{keys, Translator};

/// 제목/구분선/꼬리말을 담을 수 있는 최소 페이지 길이.
pub const MIN_PAGE_LINES: usize = 6;

const WIDTH: usize = 72;

/// 보고서 본문(페이지 구분 전)을 줄 단위로 만든다.
fn body_lines(result: &SimulationResult, tr: &Translator) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current_section = "";
    for row in result.rows() {
        if row.section != current_section {
            if !current_section.is_empty() {
                lines.push(String::new());
            }
            lines.push(format!("[{}]", tr.section_label(row.section)));
            current_section = row.section;
        }
        let label = tr.param_label(row.section, row.parameter);
        lines.push(format!(
            "  {:<40} {:>16} {}",
            label,
            format_number(row.value),
            row.unit
        ));
    }

    lines.push(String::new());
    lines.push(format!("[{}]", tr.t(keys::REPORT_CURVES)));
    let labelled = result.curves.labelled();
    let mut header = format!("  {:>10}", tr.t(keys::REPORT_SIEVE));
    for (stage, _) in labelled.iter() {
        header.push_str(&format!(" {:>16}", tr.t(&format!("curve.{stage}"))));
    }
    lines.push(header);
    let n_points = labelled[0].1.len();
    for i in 0..n_points {
        let mut line = format!("  {:>10.0}", labelled[0].1.points[i].sieve_um);
        for (_, curve) in labelled.iter() {
            let v = curve.points.get(i).map(|p| p.cumulative_pct).unwrap_or(f64::NAN);
            line.push_str(&format!(" {:>16.2}", v));
        }
        lines.push(line);
    }
    lines
}

fn format_number(v: f64) -> String {
    if v != 0.0 && (v.abs() >= 1e6 || v.abs() < 1e-3) {
        format!("{v:.4e}")
    } else {
        format!("{v:.3}")
    }
}

/// 보고서를 `page_lines` 줄 이하의 페이지들로 나눈다.
/// 각 페이지는 제목 두 줄로 시작하고 "Page i/n" 꼬리말로 끝난다.
pub fn render_pages(
    result: &SimulationResult,
    tr: &Translator,
    page_lines: usize,
) -> Result<Vec<String>, ReportError> {
    if page_lines < MIN_PAGE_LINES {
        return Err(ReportError::PageTooShort {
            given: page_lines,
            min: MIN_PAGE_LINES,
        });
    }
    let title = tr.t(keys::REPORT_TITLE);
    // 제목, 구분선, 빈 줄, 꼬리말
    let per_page = page_lines - 4;
    let body = body_lines(result, tr);
    let chunks: Vec<&[String]> = body.chunks(per_page).collect();
    let total = chunks.len();
    let page_word = tr.t(keys::REPORT_PAGE);

    let pages = chunks
        .iter()
        .enumerate()
        .map(|(i, chunk)| {
            let mut page = String::new();
            page.push_str(&title);
            page.push('\n');
            page.push_str(&"=".repeat(WIDTH));
            page.push('\n');
            for line in chunk.iter() {
                page.push_str(line);
                page.push('\n');
            }
            page.push('\n');
            page.push_str(&format!("{:>w$}", format!("{page_word} {}/{total}", i + 1), w = WIDTH));
            page.push('\n');
            page
        })
        .collect();
    Ok(pages)
}

/// 페이지를 폼피드(\x0c)로 구분해 쓴다.
pub fn write_report<W: Write>(
    result: &SimulationResult,
    tr: &Translator,
    page_lines: usize,
    mut writer: W,
) -> Result<(), ReportError> {
    let pages = render_pages(result, tr, page_lines)?;
    for (i, page) in pages.iter().enumerate() {
        if i > 0 {
            writer.write_all(b"\x0c")?;
        }
        writer.write_all(page.as_bytes())?;
    }
    writer.flush()?;
    Ok(())
}
