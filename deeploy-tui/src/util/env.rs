//! 运行环境（开发 / 生产），决定日志等资源的存放位置

use std::path::PathBuf;

/// 环境变量名
pub const ENV_VAR: &str = "GO_ENV";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    /// 读取 `GO_ENV`
    pub fn from_env() -> Self {
        Self::parse(std::env::var(ENV_VAR).ok().as_deref())
    }

    /// `production` / `prod`（不区分大小写）为生产环境，其余都是开发环境
    pub fn parse(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
            Some("production" | "prod") => Self::Production,
            _ => Self::Development,
        }
    }

    /// 日志目录
    ///
    /// 开发环境写在当前目录的 `data/logs`，生产环境写在系统数据目录下。
    pub fn log_dir(self) -> PathBuf {
        match self {
            Self::Development => PathBuf::from("data").join("logs"),
            Self::Production => dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("deeploy")
                .join("logs"),
        }
    }
}
