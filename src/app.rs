use crate::config::Config;
use crate::i18n::{self, keys, Translator};
use crate::ui_cli;
use crate::ui_cli::MenuChoice;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
///
/// 계산 코어는 실패하지 않으므로(값 없음은 오류가 아니다) 여기에는
/// 입출력과 설정 저장/로드 오류만 있다.
#[derive(Debug)]
pub enum AppError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// 설정 저장/로드 오류
    Config(crate::config::ConfigError),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "입출력 오류: {e}"),
            AppError::Config(e) => write!(f, "설정 오류: {e}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        AppError::Io(value)
    }
}

impl From<crate::config::ConfigError> for AppError {
    fn from(value: crate::config::ConfigError) -> Self {
        AppError::Config(value)
    }
}

/// CLI 애플리케이션의 메인 루프를 실행한다.
pub fn run(config: &mut Config, mut tr: Translator) -> Result<(), AppError> {
    loop {
        match ui_cli::main_menu(&tr)? {
            MenuChoice::Converters => ui_cli::handle_converters(&tr)?,
            MenuChoice::Descent => ui_cli::handle_descent(&tr)?,
            MenuChoice::Turns => ui_cli::handle_turns(&tr)?,
            MenuChoice::Winds => ui_cli::handle_winds(&tr)?,
            MenuChoice::DensityAltitude => ui_cli::handle_density_altitude(&tr)?,
            MenuChoice::Settings => {
                let language_changed = ui_cli::handle_settings(&tr, config)?;
                config.save()?;
                if language_changed {
                    let code = i18n::resolve_language(&config.language, None);
                    tr = Translator::new_with_pack(&code, None);
                }
            }
            MenuChoice::Exit => {
                config.save()?;
                println!("{}", tr.t(keys::APP_EXIT));
                break;
            }
        }
    }
    Ok(())
}
