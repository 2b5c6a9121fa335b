//! CSV / 텍스트 보고서 출력 테스트.
use grinding_circuit_twin::circuit::{simulate, CircuitInput, ModelConstants, SimulationResult};
use grinding_circuit_twin::i18n::Translator;
use grinding_circuit_twin::report::{self, csv_export, text_report, ReportError};

fn base_result() -> SimulationResult {
    simulate(&CircuitInput::default(), &ModelConstants::default()).expect("simulate")
}

#[test]
fn csv_has_header_rows_and_curves() {
    let res = base_result();
    let mut buf = Vec::new();
    csv_export::write_csv(&res, &mut buf).expect("csv");

    let mut rdr = csv::Reader::from_reader(buf.as_slice());
    let headers = rdr.headers().unwrap().clone();
    assert_eq!(headers.iter().collect::<Vec<_>>(), csv_export::HEADER.to_vec());
    let records: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
    assert_eq!(records.len(), res.rows().len() + 3 * 15);

    let power = records
        .iter()
        .find(|r| &r[0] == "sag" && &r[1] == "power")
        .unwrap();
    let value: f64 = power[2].parse().unwrap();
    assert_eq!(value, res.sag.power_mw);
    assert_eq!(&power[3], "MW");

    assert_eq!(records.iter().filter(|r| &r[0] == "curve_final").count(), 15);
}

#[test]
fn text_report_respects_page_length() {
    let res = base_result();
    let tr = Translator::new("en");
    let pages = text_report::render_pages(&res, &tr, 20).expect("pages");
    assert!(pages.len() > 1);
    let total = pages.len();
    for (i, page) in pages.iter().enumerate() {
        assert!(page.lines().count() <= 20, "page {i} too long");
        assert!(page.starts_with("Grinding Circuit Simulation Report"));
        assert!(page.contains(&format!("Page {}/{total}", i + 1)));
    }
    let all = pages.concat();
    assert!(all.contains("Circulating load"));
    assert!(all.contains("Sieve µm"));
}

#[test]
fn text_report_is_translated() {
    let res = base_result();
    let tr = Translator::new("es");
    let pages = text_report::render_pages(&res, &tr, 200).expect("pages");
    assert_eq!(pages.len(), 1);
    assert!(pages[0].contains("Carga circulante"));
    assert!(pages[0].contains("Página 1/1"));
}

#[test]
fn too_short_page_rejected() {
    let res = base_result();
    let tr = Translator::new("en");
    assert!(matches!(
        text_report::render_pages(&res, &tr, 3),
        Err(ReportError::PageTooShort { given: 3, .. })
    ));
}

#[test]
fn export_files_written() {
    let res = base_result();
    let tr = Translator::new("en");
    let dir = tempfile::tempdir().expect("tempdir");
    let csv_path = dir.path().join("out.csv");
    let txt_path = dir.path().join("out.txt");
    report::export_csv_file(&res, &csv_path).expect("csv file");
    report::export_report_file(&res, &tr, 30, &txt_path).expect("report file");

    let csv_text = std::fs::read_to_string(&csv_path).unwrap();
    assert!(csv_text.starts_with("section,parameter,value,unit"));
    let txt = std::fs::read_to_string(&txt_path).unwrap();
    assert!(txt.contains('\x0c'));
}
