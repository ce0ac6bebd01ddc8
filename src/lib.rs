//! 조종사용 단위 변환기와 어림 계산기를 라이브러리로 분리하여
//! CLI와 GUI 두 프런트엔드가 같은 계산 코어를 공유한다.

pub mod app;
pub mod config;
pub mod i18n;
pub mod numeric;
pub mod planning;
pub mod ui_cli;
pub mod units;
