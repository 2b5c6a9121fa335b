use clap::Parser;
use std::path::PathBuf;

use grinding_circuit_twin::app::{self, Command, Overrides};
use grinding_circuit_twin::{config, i18n, logging};

/// 분쇄 회로(SAG → 볼 밀 → 사이클론) 정상상태 시뮬레이터 CLI.
#[derive(Debug, Parser)]
#[command(name = "grinding_circuit_twin_cli", version, about)]
struct Cli {
    /// 설정 파일 경로
    #[arg(long, default_value = config::DEFAULT_CONFIG_PATH)]
    config: PathBuf,
    /// 언어 (auto/en/es/ko)
    #[arg(long, short = 'L', default_value = "auto")]
    lang: String,
    #[command(flatten)]
    overrides: Overrides,
    #[command(subcommand)]
    command: Option<Command>,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 요청된 명령을 실행한다.
fn main() {
    logging::init();
    if let Err(err) = try_run() {
        eprintln!("오류: {err}");
        std::process::exit(1);
    }
}

fn try_run() -> Result<(), app::AppError> {
    let cli = Cli::parse();
    let cfg = config::load_from(&cli.config)?;
    let lang = i18n::resolve_language(&cli.lang, Some(cfg.language.as_str()));
    let tr = i18n::Translator::new_with_pack(&lang, cfg.language_pack_dir.as_deref());

    let mut input = cfg.circuit;
    cli.overrides.apply(&mut input)?;
    app::run(cli.command.unwrap_or(Command::Run), &cfg, input, &tr)
}
