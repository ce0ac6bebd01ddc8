use clap::Parser;
use pilot_toolkit::{app, config, i18n};

/// 조종사용 단위 변환·어림 계산 CLI.
#[derive(Debug, Parser)]
#[command(name = "pilot_toolkit_cli", version, about)]
struct Cli {
    /// 언어 코드 (auto/en/ko)
    #[arg(short = 'L', long, default_value = "auto")]
    lang: String,

    /// 언어팩 디렉터리 (기본: locales/)
    #[arg(long)]
    lang_pack: Option<String>,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() {
    if let Err(err) = try_run() {
        eprintln!("오류: {err}");
    }
}

fn try_run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut cfg = config::load_or_default()?;
    let code = i18n::resolve_language(&cli.lang, Some(cfg.language.as_str()));
    let tr = i18n::Translator::new_with_pack(&code, cli.lang_pack.as_deref());
    app::run(&mut cfg, tr)?;
    Ok(())
}
