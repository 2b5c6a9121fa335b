//! 핵심 계산 로직을 라이브러리로 분리하여 CLI 와 GUI 가 같은 엔진을 쓰도록 한다.

pub mod app;
pub mod circuit;
pub mod config;
pub mod controls;
pub mod conversion;
pub mod i18n;
pub mod logging;
pub mod quantity;
pub mod report;
pub mod ui_cli;
pub mod units;
