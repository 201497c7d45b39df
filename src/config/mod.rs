//! 分层配置：config.toml → config.{APP_ENV}.toml → EVALSYS_* 环境变量

#[path = "impl.rs"]
mod app_config_impl;
mod structs;

pub use structs::*;
