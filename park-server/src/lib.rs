//! Simhastha Park Smart - 停车区域查询、预订与 AI 辅助服务
//!
//! # 架构概述
//!
//! - **区域存储** (`zones`): 进程内停车区域数据, 预订与占用更新
//! - **AI 流程** (`ai`): 身份验证、车辆计数、预订助手, 统一重试策略
//! - **HTTP API** (`api`): JSON 接口
//!
//! # 模块结构
//!
//! ```text
//! park-server/src/
//! ├── core/          # 配置、状态、错误、服务器
//! ├── zones/         # 区域存储
//! ├── ai/            # 模型调用、提示词、重试、流程
//! ├── api/           # HTTP 路由和处理器
//! └── utils/         # 日志、错误类型
//! ```

pub mod ai;
pub mod api;
pub mod core;
pub mod utils;
pub mod zones;

// Re-export 公共类型
pub use crate::core::{Config, Server, ServerError, ServerState};
pub use utils::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
pub use zones::ZoneStore;

// Re-export logger functions
pub use utils::logger::init_logger_with_file;

/// 加载 .env 并初始化日志
pub fn setup_environment() -> Config {
    // .env 文件可选
    dotenv::dotenv().ok();

    let config = Config::from_env();
    init_logger_with_file(&config.log_level, config.log_dir.as_deref());
    config
}

pub fn print_banner() {
    println!(
        r#"
    ____             __      _____                      __
   / __ \____ ______/ /__   / ___/____ ___  ____ ______/ /_
  / /_/ / __ `/ ___/ //_/   \__ \/ __ `__ \/ __ `/ ___/ __/
 / ____/ /_/ / /  / ,<     ___/ / / / / / / /_/ / /  / /_
/_/    \__,_/_/  /_/|_|   /____/_/ /_/ /_/\__,_/_/   \__/
        Simhastha Park Smart v{}
"#,
        env!("CARGO_PKG_VERSION")
    );
}
