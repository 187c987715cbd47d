//! 工具模块 - 通用工具函数和类型
//!
//! - [`AppError`] / [`ApiResponse`] - 来自 `shared::error`
//! - [`logger`] - 日志初始化

pub mod logger;

pub use shared::error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
