use std::time::Duration;

use crate::ai::{GeminiConfig, RetryPolicy};

/// 服务器配置
///
/// # 环境变量
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | HTTP_PORT | 9002 | HTTP 服务端口 |
/// | ENVIRONMENT | development | 运行环境 |
/// | LOG_LEVEL | info | 日志级别 (RUST_LOG 优先) |
/// | LOG_DIR | - | 日志目录, 设置后按天滚动写文件 |
/// | GEMINI_API_KEY | - | 模型 API Key, 未设置时所有 AI 流程直接失败 |
/// | GEMINI_BASE_URL | https://generativelanguage.googleapis.com | 模型服务地址 |
/// | GEMINI_MODEL | gemini-2.0-flash | 模型名称 |
/// | INFERENCE_MAX_ATTEMPTS | 3 | 最大尝试次数 |
/// | INFERENCE_INITIAL_DELAY_MS | 1000 | 重试退避基数(毫秒) |
/// | INFERENCE_TIMEOUT_MS | 30000 | 单次调用超时(毫秒) |
///
/// # 示例
///
/// ```ignore
/// GEMINI_API_KEY=... HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API 服务端口
    pub http_port: u16,
    /// 运行环境: development | staging | production
    pub environment: String,
    pub log_level: String,
    pub log_dir: Option<String>,

    // === 模型服务 ===
    pub gemini_api_key: Option<String>,
    pub gemini_base_url: String,
    pub gemini_model: String,

    // === 重试策略 ===
    pub inference_max_attempts: u32,
    pub inference_initial_delay_ms: u64,
    pub inference_timeout_ms: u64,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 从任意键值来源加载配置 (测试用)
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            http_port: get("HTTP_PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(9002),
            environment: get("ENVIRONMENT").unwrap_or_else(|| "development".into()),
            log_level: get("LOG_LEVEL").unwrap_or_else(|| "info".into()),
            log_dir: get("LOG_DIR").filter(|d| !d.is_empty()),

            gemini_api_key: get("GEMINI_API_KEY").filter(|k| !k.trim().is_empty()),
            gemini_base_url: get("GEMINI_BASE_URL")
                .unwrap_or_else(|| crate::ai::DEFAULT_GEMINI_BASE_URL.into()),
            gemini_model: get("GEMINI_MODEL")
                .unwrap_or_else(|| crate::ai::DEFAULT_GEMINI_MODEL.into()),

            inference_max_attempts: get("INFERENCE_MAX_ATTEMPTS")
                .and_then(|v| v.parse().ok())
                .filter(|n| *n > 0)
                .unwrap_or(3),
            inference_initial_delay_ms: get("INFERENCE_INITIAL_DELAY_MS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(1000),
            inference_timeout_ms: get("INFERENCE_TIMEOUT_MS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(30000),
        }
    }

    /// 重试策略
    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(
            self.inference_max_attempts,
            Duration::from_millis(self.inference_initial_delay_ms),
        )
    }

    /// Gemini 客户端配置, 未设置 API Key 时为 None
    pub fn gemini(&self) -> Option<GeminiConfig> {
        self.gemini_api_key.as_ref().map(|key| {
            GeminiConfig::new(key.clone())
                .with_base_url(self.gemini_base_url.clone())
                .with_model(self.gemini_model.clone())
                .with_timeout(Duration::from_millis(self.inference_timeout_ms))
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
