//! 工具模块
//!
//! - [`logger`] - tracing 日志初始化

pub mod logger;

pub use logger::{init_logger, init_logger_with_file};
