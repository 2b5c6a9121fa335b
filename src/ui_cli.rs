use std::io::{self, BufRead, Write};

use crate::app::AppError;
use crate::circuit::{self, CircuitInput, SimulationResult};
use crate::config::Config;
use crate::controls::Variable;
use crate::i18n::{keys, Translator};
use crate::report;

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Run,
    Adjust,
    Curves,
    Export,
    Reset,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    main_menu_from(tr, &mut io::stdin().lock())
}

/// 입력이 끝나면(EOF) `Exit` 을 돌려준다.
fn main_menu_from<R: BufRead>(tr: &Translator, reader: &mut R) -> Result<MenuChoice, AppError> {
    println!("\n=== {} ===", tr.t(keys::APP_TITLE));
    for key in [
        keys::MAIN_MENU_RUN,
        keys::MAIN_MENU_ADJUST,
        keys::MAIN_MENU_CURVES,
        keys::MAIN_MENU_EXPORT,
        keys::MAIN_MENU_RESET,
        keys::MAIN_MENU_EXIT,
    ] {
        println!("{}", tr.t(key));
    }
    loop {
        let sel = match read_line(reader, &tr.t(keys::PROMPT_MENU_SELECT)) {
            Ok(sel) => sel,
            Err(AppError::InputClosed) => return Ok(MenuChoice::Exit),
            Err(e) => return Err(e),
        };
        match sel.trim() {
            "1" => return Ok(MenuChoice::Run),
            "2" => return Ok(MenuChoice::Adjust),
            "3" => return Ok(MenuChoice::Curves),
            "4" => return Ok(MenuChoice::Export),
            "5" => return Ok(MenuChoice::Reset),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 메뉴 루프. 조작 상태(`input`)는 이 함수가 소유하고, 매 실행마다 엔진에 값으로 넘긴다.
pub fn interactive(tr: &Translator, cfg: &Config, input: CircuitInput) -> Result<(), AppError> {
    interactive_from(tr, cfg, input, &mut io::stdin().lock())
}

fn interactive_from<R: BufRead>(
    tr: &Translator,
    cfg: &Config,
    mut input: CircuitInput,
    reader: &mut R,
) -> Result<(), AppError> {
    loop {
        match main_menu_from(tr, reader)? {
            MenuChoice::Run => {
                if let Some(result) = simulate_or_report(tr, cfg, &input) {
                    print_summary(&result, tr);
                }
            }
            MenuChoice::Adjust => handle_adjust(tr, &mut input, reader)?,
            MenuChoice::Curves => {
                if let Some(result) = simulate_or_report(tr, cfg, &input) {
                    print_curves(&result, tr);
                }
            }
            MenuChoice::Export => {
                if let Some(result) = simulate_or_report(tr, cfg, &input) {
                    handle_export(tr, cfg, &result, reader)?;
                }
            }
            MenuChoice::Reset => {
                input = cfg.circuit;
                println!("{}", tr.t(keys::RESET_DONE));
            }
            MenuChoice::Exit => {
                println!("{}", tr.t(keys::APP_EXIT));
                break;
            }
        }
    }
    Ok(())
}

fn simulate_or_report(
    tr: &Translator,
    cfg: &Config,
    input: &CircuitInput,
) -> Option<SimulationResult> {
    match circuit::simulate(input, &cfg.model) {
        Ok(result) => Some(result),
        Err(e) => {
            println!("{}: {e}", tr.t(keys::ERROR_PREFIX));
            None
        }
    }
}

fn handle_adjust<R: BufRead>(
    tr: &Translator,
    input: &mut CircuitInput,
    reader: &mut R,
) -> Result<(), AppError> {
    for (i, var) in Variable::ALL.iter().enumerate() {
        println!(
            "{:>2}) {:<28} {:>10.3} {}",
            i + 1,
            tr.t(&format!("param.input.{}", var.key())),
            var.get(input),
            var.unit()
        );
    }
    let var = loop {
        let sel = read_line(reader, &tr.t(keys::PROMPT_VARIABLE))?;
        if let Some(var) = sel
            .trim()
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|idx| Variable::ALL.get(idx))
        {
            break *var;
        }
        println!("{}", tr.t(keys::INVALID_SELECTION_RETRY));
    };
    let value = read_f64(tr, reader, &tr.t(keys::PROMPT_NEW_VALUE))?;
    var.set(input, value);
    Ok(())
}

fn handle_export<R: BufRead>(
    tr: &Translator,
    cfg: &Config,
    result: &SimulationResult,
    reader: &mut R,
) -> Result<(), AppError> {
    let csv_path = read_line(reader, &tr.t(keys::PROMPT_CSV_PATH))?;
    if !csv_path.trim().is_empty() {
        report::export_csv_file(result, csv_path.trim())?;
        println!("{} {}", tr.t(keys::EXPORT_DONE), csv_path.trim());
    }
    let report_path = read_line(reader, &tr.t(keys::PROMPT_REPORT_PATH))?;
    if !report_path.trim().is_empty() {
        report::export_report_file(result, tr, cfg.report_page_lines, report_path.trim())?;
        println!("{} {}", tr.t(keys::EXPORT_DONE), report_path.trim());
    }
    Ok(())
}

/// 결과 표를 출력한다.
pub fn print_summary(result: &SimulationResult, tr: &Translator) {
    let mut current = "";
    for row in result.rows() {
        if row.section != current {
            println!("\n-- {} --", tr.section_label(row.section));
            current = row.section;
        }
        println!(
            "{:<32} {:>14.3} {}",
            tr.param_label(row.section, row.parameter),
            row.value,
            row.unit
        );
    }
}

/// 세 단계 누적 입도 곡선을 표로 출력한다.
pub fn print_curves(result: &SimulationResult, tr: &Translator) {
    let labelled = result.curves.labelled();
    print!("\n{:>10}", tr.t(keys::REPORT_SIEVE));
    for (stage, curve) in labelled.iter() {
        print!(
            " {:>22}",
            format!("{} ({:.0} µm)", tr.t(&format!("curve.{stage}")), curve.p80_um)
        );
    }
    println!();
    for (i, p) in labelled[0].1.iter().enumerate() {
        print!("{:>10.0}", p.sieve_um);
        for (_, curve) in labelled.iter() {
            print!(" {:>22.2}", curve.points[i].cumulative_pct);
        }
        println!();
    }
}

/// 한 줄을 읽는다. 입력 스트림이 닫혀 있으면 `InputClosed`.
fn read_line<R: BufRead>(reader: &mut R, prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    if reader.read_line(&mut buf)? == 0 {
        return Err(AppError::InputClosed);
    }
    Ok(buf)
}

fn read_f64<R: BufRead>(tr: &Translator, reader: &mut R, prompt: &str) -> Result<f64, AppError> {
    loop {
        let s = read_line(reader, prompt)?;
        match s.trim().parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_exits_when_input_is_closed() {
        let tr = Translator::new("en");
        let mut empty: &[u8] = b"";
        assert_eq!(main_menu_from(&tr, &mut empty).unwrap(), MenuChoice::Exit);
        let mut junk_then_eof: &[u8] = b"9\nx\n";
        assert_eq!(main_menu_from(&tr, &mut junk_then_eof).unwrap(), MenuChoice::Exit);
    }

    #[test]
    fn number_prompt_stops_at_end_of_input() {
        let tr = Translator::new("en");
        let mut reader: &[u8] = b"abc\n";
        assert!(matches!(
            read_f64(&tr, &mut reader, "> "),
            Err(AppError::InputClosed)
        ));
        let mut reader: &[u8] = b"abc\n12.5\n";
        assert_eq!(read_f64(&tr, &mut reader, "> ").unwrap(), 12.5);
    }

    #[test]
    fn session_ends_on_closed_input() {
        let tr = Translator::new("en");
        let cfg = Config::default();
        let mut reader: &[u8] = b"1\n3\n5\n";
        interactive_from(&tr, &cfg, cfg.circuit, &mut reader).unwrap();

        let mut adjust_cut_short: &[u8] = b"2\n1\n";
        assert!(matches!(
            interactive_from(&tr, &cfg, cfg.circuit, &mut adjust_cut_short),
            Err(AppError::InputClosed)
        ));
    }
}
