use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";
    pub const APP_TITLE: &str = "general.app_title";

    pub const MAIN_MENU_RUN: &str = "main_menu.run";
    pub const MAIN_MENU_ADJUST: &str = "main_menu.adjust";
    pub const MAIN_MENU_CURVES: &str = "main_menu.curves";
    pub const MAIN_MENU_EXPORT: &str = "main_menu.export";
    pub const MAIN_MENU_RESET: &str = "main_menu.reset";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const PROMPT_VARIABLE: &str = "prompt.variable";
    pub const PROMPT_NEW_VALUE: &str = "prompt.new_value";
    pub const PROMPT_CSV_PATH: &str = "prompt.csv_path";
    pub const PROMPT_REPORT_PATH: &str = "prompt.report_path";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";
    pub const EXPORT_DONE: &str = "export.done";
    pub const RESET_DONE: &str = "reset.done";

    pub const REPORT_TITLE: &str = "report.title";
    pub const REPORT_PAGE: &str = "report.page";
    pub const REPORT_CURVES: &str = "report.curves";
    pub const REPORT_SIEVE: &str = "report.sieve";

    pub const GUI_VARIABLES: &str = "gui.variables";
    pub const GUI_RESULTS: &str = "gui.results";
    pub const GUI_CHART: &str = "gui.chart";
    pub const GUI_EXPORT_CSV: &str = "gui.export_csv";
    pub const GUI_EXPORT_REPORT: &str = "gui.export_report";
    pub const GUI_RESET: &str = "gui.reset";
    pub const GUI_SAVE_CONFIG: &str = "gui.save_config";
    pub const GUI_LANGUAGE: &str = "gui.language";
    pub const GUI_SAVED: &str = "gui.saved";
}

/// (키, 영어, 스페인어, 한국어)
const STRINGS: &[(&str, &str, &str, &str)] = &[
    ("general.error_prefix", "Error", "Error", "오류"),
    ("general.app_exit", "Exiting.", "Saliendo.", "프로그램을 종료합니다."),
    (
        "general.app_title",
        "Grinding Circuit Digital Twin",
        "Gemelo Digital del Circuito de Molienda",
        "분쇄 회로 디지털 트윈",
    ),
    ("main_menu.run", "1) Run simulation", "1) Ejecutar simulación", "1) 시뮬레이션 실행"),
    ("main_menu.adjust", "2) Adjust variable", "2) Ajustar variable", "2) 변수 조정"),
    ("main_menu.curves", "3) Size distribution curves", "3) Curvas granulométricas", "3) 입도 분포 곡선"),
    ("main_menu.export", "4) Export CSV / report", "4) Exportar CSV / informe", "4) CSV / 보고서 내보내기"),
    ("main_menu.reset", "5) Reset to base case", "5) Restablecer caso base", "5) 기준 조건으로 초기화"),
    ("main_menu.exit", "0) Exit", "0) Salir", "0) 종료"),
    ("prompt.menu_select", "Select: ", "Seleccione: ", "메뉴 선택: "),
    ("prompt.variable", "Variable number: ", "Número de variable: ", "변수 번호: "),
    ("prompt.new_value", "New value: ", "Nuevo valor: ", "새 값: "),
    ("prompt.csv_path", "CSV file path (empty to skip): ", "Ruta del CSV (vacío para omitir): ", "CSV 경로 (건너뛰려면 엔터): "),
    (
        "prompt.report_path",
        "Report file path (empty to skip): ",
        "Ruta del informe (vacío para omitir): ",
        "보고서 경로 (건너뛰려면 엔터): ",
    ),
    ("error.invalid_selection_retry", "Invalid choice, try again.", "Opción inválida, intente de nuevo.", "잘못된 입력입니다. 다시 선택하세요."),
    ("error.invalid_number", "Enter a number.", "Ingrese un número.", "숫자를 입력하세요."),
    ("export.done", "Written:", "Escrito:", "저장 완료:"),
    ("reset.done", "Base case restored.", "Caso base restablecido.", "기준 조건으로 되돌렸습니다."),
    ("report.title", "Grinding Circuit Simulation Report", "Informe de Simulación del Circuito de Molienda", "분쇄 회로 시뮬레이션 보고서"),
    ("report.page", "Page", "Página", "페이지"),
    ("report.curves", "Size distribution (cumulative %)", "Granulometría (% acumulado)", "입도 분포 (누적 %)"),
    ("report.sieve", "Sieve µm", "Malla µm", "체 µm"),
    ("gui.variables", "Adjustable variables", "Variables ajustables", "조정 변수"),
    ("gui.results", "Results", "Resultados", "결과"),
    ("gui.chart", "Size distribution curves", "Curvas granulométricas", "입도 분포 곡선"),
    ("gui.export_csv", "Export CSV", "Exportar CSV", "CSV 내보내기"),
    ("gui.export_report", "Export report", "Exportar informe", "보고서 내보내기"),
    ("gui.reset", "Reset", "Restablecer", "초기화"),
    ("gui.save_config", "Save as base case", "Guardar como caso base", "기준 조건으로 저장"),
    ("gui.language", "Language", "Idioma", "언어"),
    ("gui.saved", "Saved.", "Guardado.", "저장되었습니다."),
    ("section.input", "Inputs", "Entradas", "입력"),
    ("section.sag", "SAG mill", "Molino SAG", "SAG 밀"),
    ("section.ball_mill", "Ball mill", "Molino de bolas", "볼 밀"),
    ("section.cyclone", "Cyclones", "Ciclones", "사이클론"),
    ("section.circuit", "Circuit", "Circuito", "회로"),
    ("curve.sag", "SAG P80", "P80 SAG", "SAG P80"),
    ("curve.ball_mill", "Ball mill P80", "P80 Bolas", "볼 밀 P80"),
    ("curve.final", "Final P80", "P80 final", "최종 P80"),
    ("param.input.sag.diameter", "SAG diameter", "Diámetro SAG", "SAG 직경"),
    ("param.input.sag.length", "SAG length", "Largo SAG", "SAG 길이"),
    ("param.input.sag.fill", "Total fill", "Llenado total", "총 충전율"),
    ("param.input.sag.ball_charge", "Ball charge", "Carga bolas", "볼 충전율"),
    ("param.input.sag.speed", "SAG speed", "RPM SAG", "SAG 회전수"),
    ("param.input.sag.work_index", "SAG work index", "Wi SAG", "SAG 일지수"),
    ("param.input.sag.f80", "SAG feed F80", "F80 SAG", "SAG 급광 F80"),
    ("param.input.sag.tonnage", "SAG tonnage", "Tonelaje SAG", "SAG 처리량"),
    ("param.input.ball_mill.work_index", "Ball mill work index", "Wi Bolas", "볼 밀 일지수"),
    ("param.input.ball_mill.f80", "Ball mill feed F80", "F80 Bolas", "볼 밀 급광 F80"),
    ("param.input.ball_mill.diameter", "Ball mill diameter", "Diámetro Bolas", "볼 밀 직경"),
    ("param.input.ball_mill.speed", "Ball mill speed", "RPM Bolas", "볼 밀 회전수"),
    ("param.input.cyclone.diameter", "Cyclone diameter", "Diámetro ciclón", "사이클론 직경"),
    ("param.input.cyclone.apex", "Apex diameter", "Ø Apex", "Apex 직경"),
    ("param.input.cyclone.vortex", "Vortex finder diameter", "Ø Vortex", "Vortex 직경"),
    ("param.input.cyclone.pressure", "Cyclone pressure", "Presión ciclones", "사이클론 압력"),
    ("param.input.cyclone.pressure_kpa", "Cyclone pressure", "Presión ciclones", "사이클론 압력"),
    ("param.input.cyclone.flow", "Cyclone feed flow", "Caudal ciclones", "사이클론 급광 유량"),
    ("param.input.cyclone.density", "Pulp density", "% Sólidos (densidad)", "펄프 밀도"),
    ("param.sag.critical_speed", "Critical speed", "Velocidad crítica", "임계속도"),
    ("param.sag.percent_critical", "% of critical", "% de crítica", "임계속도 대비"),
    ("param.sag.specific_energy", "Specific energy", "Energía específica", "비에너지"),
    ("param.sag.power", "Power draw", "Potencia", "소요 동력"),
    ("param.sag.p80", "Product P80", "P80 producto", "산물 P80"),
    ("param.ball_mill.critical_speed", "Critical speed", "Velocidad crítica", "임계속도"),
    ("param.ball_mill.percent_critical", "% of critical", "% de crítica", "임계속도 대비"),
    ("param.ball_mill.tonnage", "Ball mill tonnage", "Tonelaje bolas", "볼 밀 처리량"),
    ("param.ball_mill.specific_energy", "Specific energy", "Energía específica", "비에너지"),
    ("param.ball_mill.power", "Power draw", "Potencia", "소요 동력"),
    ("param.ball_mill.p80", "Product P80", "P80 producto", "산물 P80"),
    ("param.cyclone.d50c", "Cut size D50c", "Tamaño de corte D50c", "컷 사이즈 D50c"),
    ("param.cyclone.final_p80", "Final product P80", "P80 final", "최종 산물 P80"),
    ("param.circuit.circulating_load", "Circulating load", "Carga circulante", "순환부하"),
    ("param.circuit.efficiency", "Classification efficiency", "Eficiencia de clasificación", "분급 효율"),
    ("param.circuit.overflow", "Overflow tonnage", "Tonelaje rebose", "오버플로 처리량"),
    ("param.circuit.total_power", "Total power", "Potencia total", "총 동력"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    En,
    Es,
    Ko,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("es") {
            Language::Es
        } else if c.starts_with("ko") {
            Language::Ko
        } else {
            Language::En
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Es => "es",
            Language::Ko => "ko",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(en/es/ko)에 따라 번역기를 생성한다. 알 수 없는 코드는 en 으로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir.and_then(|dir| load_overrides(dir, lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    /// 번역을 가져온다. 언어팩 → 내장 문자열 → 키 순으로 찾는다.
    pub fn t(&self, key: &str) -> String {
        if let Some(v) = self.overrides.as_ref().and_then(|m| m.get(key)) {
            return v.clone();
        }
        built_in(self.lang, key).unwrap_or(key).to_string()
    }

    /// 결과 행의 표시 이름.
    pub fn param_label(&self, section: &str, parameter: &str) -> String {
        self.t(&format!("param.{section}.{parameter}"))
    }

    pub fn section_label(&self, section: &str) -> String {
        self.t(&format!("section.{section}"))
    }
}

fn built_in(lang: Language, key: &str) -> Option<&'static str> {
    let (_, en, es, ko) = STRINGS.iter().find(|(k, ..)| *k == key)?;
    Some(match lang {
        Language::En => *en,
        Language::Es => *es,
        Language::Ko => *ko,
    })
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("en") => Some("en".into()),
        other if other.starts_with("es") => Some("es".into()),
        other if other.starts_with("ko") => Some("ko".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    normalize_lang(&lang)
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(lang) = get_locale().and_then(|loc| normalize_locale_string(&loc)) {
        return Some(lang);
    }
    ["LANG", "LC_ALL"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|v| normalize_locale_string(&v))
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 또는 중첩 테이블.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(path).ok()?;
        parse_toml_to_map(&content)
    };

    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    lang.split_once(['-', '_'])
        .and_then(|(base, _)| try_load(base))
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_key_constant_has_built_in_text() {
        for key in [
            keys::APP_TITLE,
            keys::REPORT_TITLE,
            keys::GUI_EXPORT_CSV,
            keys::PROMPT_NEW_VALUE,
        ] {
            assert!(built_in(Language::Es, key).is_some(), "missing {key}");
        }
    }

    #[test]
    fn unknown_language_and_key_fall_back() {
        let tr = Translator::new("fr");
        assert_eq!(tr.language(), Language::En);
        assert_eq!(tr.t(keys::APP_TITLE), "Grinding Circuit Digital Twin");
        assert_eq!(tr.t("no.such.key"), "no.such.key");
        assert_eq!(Translator::new("es-MX").t("section.circuit"), "Circuito");
    }

    #[test]
    fn nested_pack_tables_flatten_to_dotted_keys() {
        let map = parse_toml_to_map("[report]\ntitle = \"Informe\"\n").unwrap();
        assert_eq!(map.get("report.title").map(String::as_str), Some("Informe"));
    }
}
