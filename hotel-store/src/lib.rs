//! Hotel Store - 酒店、客户与预订管理
//!
//! # 架构概述
//!
//! Three collections (hotels, customers, reservations), each persisted as
//! a JSON array under one data directory. Single process, single caller:
//! every operation reloads its collection from disk, mutates it in memory
//! and rewrites it.
//!
//! # 模块结构
//!
//! ```text
//! hotel-store/src/
//! ├── core/          # 配置
//! ├── db/            # JSON 存储 + repositories
//! └── utils/         # 日志
//! ```

pub mod core;
pub mod db;
pub mod utils;

// Re-export 公共类型
pub use crate::core::{Config, StoreConfig};
pub use db::repository::{
    CustomerRepository, HotelRepository, RepoError, RepoResult, Repository,
    ReservationRepository,
};
pub use db::{Collection, JsonStore, StoreError, StoreResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// 加载 `.env`，读取配置并初始化日志
pub fn setup_environment() -> Config {
    dotenv::dotenv().ok();
    let config = Config::from_env();
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());
    config
}
