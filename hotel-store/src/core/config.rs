use std::path::{Path, PathBuf};

/// Default data directory, relative to the working directory
pub const DEFAULT_DATA_DIR: &str = "data";

/// 存储配置 - 数据文件所在目录
///
/// Injected into [`JsonStore`](crate::db::JsonStore) at construction;
/// nothing reads the data location from process-wide state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Directory holding `hotels.json`, `customers.json`, `reservations.json`
    pub data_dir: PathBuf,
}

impl StoreConfig {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// 从环境变量加载 (`DATA_DIR`)
    pub fn from_env() -> Self {
        Self::new(std::env::var("DATA_DIR").unwrap_or_else(|_| DEFAULT_DATA_DIR.into()))
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_DIR)
    }
}

/// 应用配置
///
/// # 环境变量
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | DATA_DIR | data | 数据文件目录 |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_DIR | (none) | 日志文件目录，未设置时输出到终端 |
///
/// # 示例
///
/// ```ignore
/// DATA_DIR=/tmp/hotels LOG_LEVEL=debug cargo run -p hotel-store
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    pub store: StoreConfig,
    pub log_level: String,
    pub log_dir: Option<String>,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        Self {
            store: StoreConfig::from_env(),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.is_empty()),
        }
    }

    /// Override the data directory, keeping everything else from the environment
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        let mut config = Self::from_env();
        config.store = StoreConfig::new(data_dir);
        config
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
