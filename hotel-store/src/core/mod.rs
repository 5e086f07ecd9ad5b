//! 核心模块 - 应用与存储配置
//!
//! # 模块结构
//!
//! - [`Config`] - 应用配置 (日志 + 存储)
//! - [`StoreConfig`] - 数据目录配置

pub mod config;

pub use config::{Config, StoreConfig};
