#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.

use eframe::{egui, App, Frame};
use image::GenericImageView;
use rfd::FileDialog;
use std::{env, fs, path::Path};
use grinding_circuit_twin::{
    circuit::{self, CircuitError, CircuitInput, SimulationResult, SizeDistributionCurve},
    config,
    controls::Variable,
    i18n::{self, keys},
    logging, report,
};

fn main() -> Result<(), eframe::Error> {
    logging::init();
    // CLI 언어 옵션 처리: --lang xx 또는 --lang=xx (xx: auto/en/es/ko)
    let mut cli_lang: Option<String> = None;
    let args: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < args.len() {
        let a = &args[i];
        if let Some(val) = a.strip_prefix("--lang=") {
            cli_lang = Some(val.to_string());
        } else if (a == "--lang" || a == "-L") && i + 1 < args.len() {
            cli_lang = Some(args[i + 1].clone());
            i += 1;
        }
        i += 1;
    }

    let mut viewport = egui::ViewportBuilder::default().with_inner_size(egui::vec2(1180.0, 760.0));
    if let Some(icon) = load_app_icon() {
        viewport = viewport.with_icon(icon);
    }
    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    let mut app_cfg = match config::load_or_default() {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::warn!("config load failed, using defaults: {e}");
            config::Config::default()
        }
    };
    if let Some(lang_cli) = cli_lang {
        app_cfg.language = i18n::resolve_language(&lang_cli, Some(app_cfg.language.as_str()));
    }
    eframe::run_native(
        "Grinding Circuit Digital Twin",
        options,
        Box::new(move |cc| {
            if let Err(e) = setup_fonts(&cc.egui_ctx) {
                tracing::warn!("{e}");
            }
            Box::new(GuiApp::new(app_cfg))
        }),
    )
}

fn load_app_icon() -> Option<egui::IconData> {
    let search = ["icon.png", "assets/icon.png", "../assets/icon.png"];
    let path = search.iter().find(|p| Path::new(*p).exists())?;
    let bytes = fs::read(path).ok()?;
    let img = image::load_from_memory(&bytes).ok()?;
    let rgba = img.to_rgba8();
    let (w, h) = img.dimensions();
    Some(egui::IconData {
        rgba: rgba.into_raw(),
        width: w,
        height: h,
    })
}

/// 한글 라벨 표시용 폰트를 찾아 기본 폰트 뒤에 대체 폰트로 등록한다.
/// 라틴/스페인어는 egui 기본 폰트로 충분하므로 찾지 못해도 실행은 계속한다.
fn setup_fonts(ctx: &egui::Context) -> Result<(), String> {
    let mut candidates: Vec<std::path::PathBuf> = vec![
        "assets/fonts/malgun.ttf".into(),
        "assets/fonts/NotoSansKR-Regular.ttf".into(),
        "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc".into(),
        "/usr/share/fonts/truetype/nanum/NanumGothic.ttf".into(),
    ];
    if let Some(windir) = env::var_os("WINDIR") {
        candidates.push(Path::new(&windir).join("Fonts").join("malgun.ttf"));
    }
    let path = candidates
        .iter()
        .find(|p| p.exists())
        .ok_or_else(|| "Korean font not found; Hangul labels may not render".to_string())?;
    let bytes = fs::read(path).map_err(|e| format!("Failed to read font file: {e}"))?;
    let mut fonts = egui::FontDefinitions::default();
    fonts
        .font_data
        .insert("fallback_cjk".into(), egui::FontData::from_owned(bytes));
    for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
        fonts
            .families
            .entry(family)
            .or_default()
            .push("fallback_cjk".into());
    }
    ctx.set_fonts(fonts);
    Ok(())
}

const CURVE_COLORS: [egui::Color32; 3] = [
    egui::Color32::from_rgb(220, 120, 40),
    egui::Color32::from_rgb(60, 130, 200),
    egui::Color32::from_rgb(60, 170, 90),
];

struct GuiApp {
    config: config::Config,
    tr: i18n::Translator,
    lang_input: String,
    /// 슬라이더 상태. 엔진에는 값으로 복사해 넘긴다.
    input: CircuitInput,
    result: Result<SimulationResult, CircuitError>,
    status: Option<String>,
}

impl GuiApp {
    fn new(config: config::Config) -> Self {
        let lang = i18n::resolve_language(&config.language, None);
        let tr = i18n::Translator::new_with_pack(&lang, config.language_pack_dir.as_deref());
        let input = config.circuit;
        let result = circuit::simulate(&input, &config.model);
        Self {
            lang_input: config.language.clone(),
            config,
            tr,
            input,
            result,
            status: None,
        }
    }

    fn recompute(&mut self) {
        self.result = circuit::simulate(&self.input, &self.config.model);
    }

    fn set_variable(&mut self, var: Variable, value: f64) {
        var.set(&mut self.input, value);
        self.recompute();
    }

    fn reset(&mut self) {
        self.input = self.config.circuit;
        self.recompute();
    }

    fn apply_language(&mut self) {
        let resolved = i18n::resolve_language(&self.lang_input, None);
        self.tr = i18n::Translator::new_with_pack(&resolved, self.config.language_pack_dir.as_deref());
        self.config.language = self.lang_input.clone();
    }

    fn ui_variables(&mut self, ui: &mut egui::Ui) {
        ui.heading(self.tr.t(keys::GUI_VARIABLES));
        ui.add_space(6.0);
        let mut changed: Option<(Variable, f64)> = None;
        egui::Grid::new("variables_grid")
            .num_columns(2)
            .spacing([8.0, 6.0])
            .show(ui, |ui| {
                for var in Variable::ALL {
                    let label = self.tr.t(&format!("param.input.{}", var.key()));
                    ui.label(label);
                    let mut value = var.get(&self.input);
                    let (lo, hi) = var.range();
                    let slider = egui::Slider::new(&mut value, lo..=hi).suffix(format!(" {}", var.unit()));
                    if ui.add(slider).changed() {
                        changed = Some((var, value));
                    }
                    ui.end_row();
                }
            });
        if let Some((var, value)) = changed {
            self.set_variable(var, value);
        }

        ui.add_space(10.0);
        ui.horizontal(|ui| {
            if ui.button(self.tr.t(keys::GUI_RESET)).clicked() {
                self.reset();
            }
            if ui.button(self.tr.t(keys::GUI_SAVE_CONFIG)).clicked() {
                self.config.circuit = self.input;
                self.status = Some(match self.config.save() {
                    Ok(()) => self.tr.t(keys::GUI_SAVED),
                    Err(e) => format!("{}: {e}", self.tr.t(keys::ERROR_PREFIX)),
                });
            }
        });

        ui.add_space(10.0);
        ui.label(self.tr.t(keys::GUI_LANGUAGE));
        let before = self.lang_input.clone();
        egui::ComboBox::from_id_source("lang_choice")
            .selected_text(self.lang_input.clone())
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut self.lang_input, "auto".into(), "auto");
                ui.selectable_value(&mut self.lang_input, "en".into(), "English");
                ui.selectable_value(&mut self.lang_input, "es".into(), "Español");
                ui.selectable_value(&mut self.lang_input, "ko".into(), "한국어");
            });
        if before != self.lang_input {
            self.apply_language();
        }
    }

    fn ui_results(&mut self, ui: &mut egui::Ui) {
        ui.heading(self.tr.t(keys::GUI_RESULTS));
        let result = match &self.result {
            Ok(r) => r.clone(),
            Err(e) => {
                ui.colored_label(
                    egui::Color32::RED,
                    format!("{}: {e}", self.tr.t(keys::ERROR_PREFIX)),
                );
                return;
            }
        };
        ui.horizontal(|ui| {
            if ui.button(self.tr.t(keys::GUI_EXPORT_CSV)).clicked() {
                self.export_csv(&result);
            }
            if ui.button(self.tr.t(keys::GUI_EXPORT_REPORT)).clicked() {
                self.export_report(&result);
            }
            if let Some(msg) = &self.status {
                ui.label(msg);
            }
        });
        ui.add_space(6.0);
        egui::ScrollArea::vertical()
            .max_height(320.0)
            .show(ui, |ui| {
                egui::Grid::new("results_grid")
                    .num_columns(3)
                    .striped(true)
                    .show(ui, |ui| {
                        let mut current = "";
                        for row in result.rows().into_iter().filter(|r| r.section != "input") {
                            if row.section != current {
                                ui.strong(self.tr.section_label(row.section));
                                ui.end_row();
                                current = row.section;
                            }
                            ui.label(self.tr.param_label(row.section, row.parameter));
                            ui.monospace(format!("{:>12.2}", row.value));
                            ui.label(row.unit);
                            ui.end_row();
                        }
                    });
            });
        ui.add_space(10.0);
        ui.heading(self.tr.t(keys::GUI_CHART));
        self.ui_chart(ui, &result);
    }

    /// 로그 체 눈금 축 위에 세 곡선을 그린다.
    fn ui_chart(&self, ui: &mut egui::Ui, result: &SimulationResult) {
        let size = egui::vec2(ui.available_width().max(300.0), 260.0);
        let (response, painter) = ui.allocate_painter(size, egui::Sense::hover());
        let plot = response.rect.shrink2(egui::vec2(40.0, 20.0));
        let axis = egui::Stroke::new(1.0, ui.visuals().text_color());
        let grid = egui::Stroke::new(0.5, ui.visuals().weak_text_color());
        let font = egui::FontId::proportional(11.0);

        let (x_min, x_max) = (circuit::SIEVE_SERIES_UM[14].log10(), circuit::SIEVE_SERIES_UM[0].log10());
        let to_screen = |sieve_um: f64, pct: f64| {
            let fx = ((sieve_um.log10() - x_min) / (x_max - x_min)) as f32;
            let fy = (pct / 100.0) as f32;
            egui::pos2(
                plot.left() + fx * plot.width(),
                plot.bottom() - fy * plot.height(),
            )
        };

        for pct in [0.0, 25.0, 50.0, 75.0, 100.0] {
            let y = to_screen(circuit::SIEVE_SERIES_UM[14], pct).y;
            painter.line_segment([egui::pos2(plot.left(), y), egui::pos2(plot.right(), y)], grid);
            painter.text(
                egui::pos2(plot.left() - 4.0, y),
                egui::Align2::RIGHT_CENTER,
                format!("{pct:.0}"),
                font.clone(),
                ui.visuals().text_color(),
            );
        }
        for sieve in [38.0, 75.0, 150.0, 300.0, 600.0, 1180.0, 2360.0] {
            let x = to_screen(sieve, 0.0).x;
            painter.line_segment([egui::pos2(x, plot.top()), egui::pos2(x, plot.bottom())], grid);
            painter.text(
                egui::pos2(x, plot.bottom() + 2.0),
                egui::Align2::CENTER_TOP,
                format!("{sieve:.0}"),
                font.clone(),
                ui.visuals().text_color(),
            );
        }
        painter.rect_stroke(plot, 0.0, axis);

        for (idx, (stage, curve)) in result.curves.labelled().into_iter().enumerate() {
            let color = CURVE_COLORS[idx % CURVE_COLORS.len()];
            painter.add(egui::Shape::line(curve_points(curve, &to_screen), egui::Stroke::new(2.0, color)));
            painter.text(
                egui::pos2(plot.right() - 4.0, plot.top() + 4.0 + idx as f32 * 14.0),
                egui::Align2::RIGHT_TOP,
                format!("{} ({:.0} µm)", self.tr.t(&format!("curve.{stage}")), curve.p80_um),
                font.clone(),
                color,
            );
        }
    }

    fn export_csv(&mut self, result: &SimulationResult) {
        let Some(path) = FileDialog::new()
            .add_filter("CSV", &["csv"])
            .set_file_name("grinding_circuit.csv")
            .save_file()
        else {
            return;
        };
        self.status = Some(match report::export_csv_file(result, &path) {
            Ok(()) => format!("{} {}", self.tr.t(keys::EXPORT_DONE), path.display()),
            Err(e) => format!("{}: {e}", self.tr.t(keys::ERROR_PREFIX)),
        });
    }

    fn export_report(&mut self, result: &SimulationResult) {
        let Some(path) = FileDialog::new()
            .add_filter("Text", &["txt"])
            .set_file_name("grinding_circuit_report.txt")
            .save_file()
        else {
            return;
        };
        let res = report::export_report_file(result, &self.tr, self.config.report_page_lines, &path);
        self.status = Some(match res {
            Ok(()) => format!("{} {}", self.tr.t(keys::EXPORT_DONE), path.display()),
            Err(e) => format!("{}: {e}", self.tr.t(keys::ERROR_PREFIX)),
        });
    }
}

fn curve_points<F>(curve: &SizeDistributionCurve, to_screen: &F) -> Vec<egui::Pos2>
where
    F: Fn(f64, f64) -> egui::Pos2,
{
    curve
        .iter()
        .map(|p| to_screen(p.sieve_um, p.cumulative_pct))
        .collect()
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(self.tr.t(keys::APP_TITLE));
            });
        });
        egui::SidePanel::left("variables_panel")
            .resizable(true)
            .default_width(380.0)
            .show(ctx, |ui| self.ui_variables(ui));
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| self.ui_results(ui));
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_app_runs_base_case() {
        let app = GuiApp::new(config::Config::default());
        let result = app.result.as_ref().expect("base case");
        assert!((result.sag_kinetics.critical_speed_rpm - 12.7714).abs() < 1e-3);
    }

    #[test]
    fn slider_change_recomputes_and_reset_restores() {
        let mut app = GuiApp::new(config::Config::default());
        let before = app.result.as_ref().unwrap().ball_mill.tonnage_tph;
        app.set_variable(Variable::Apex, 200.0);
        let after = app.result.as_ref().unwrap().ball_mill.tonnage_tph;
        assert!(after > before);
        app.reset();
        assert_eq!(app.input, app.config.circuit);
    }

    #[test]
    fn out_of_range_fraction_surfaces_error() {
        let mut app = GuiApp::new(config::Config::default());
        app.set_variable(Variable::Fill, 1.5);
        assert!(matches!(
            app.result,
            Err(CircuitError::InvalidParameter { field: "sag.fill_fraction", .. })
        ));
    }
}
