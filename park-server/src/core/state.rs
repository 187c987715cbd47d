//! 服务器状态

use std::sync::Arc;
use std::time::Instant;

use anyhow::Context;

use crate::ai::{FlowRunner, GeminiClient, InferenceProvider, UnconfiguredProvider};
use crate::core::{Config, Result};
use crate::zones::ZoneStore;

/// 服务器状态 - 所有处理器共享
///
/// 克隆开销很小，内部均为 `Arc`。
#[derive(Clone, Debug)]
pub struct ServerState {
    pub config: Arc<Config>,
    /// 停车区域存储
    pub zones: ZoneStore,
    /// AI 流程 (带重试)
    pub flows: FlowRunner,
    pub started_at: Instant,
}

impl ServerState {
    /// 根据配置初始化: 种子区域 + 模型客户端
    pub fn initialize(config: &Config) -> Result<Self> {
        let provider: Arc<dyn InferenceProvider> = match config.gemini() {
            Some(gemini) => {
                let client = GeminiClient::new(gemini).context("Failed to create Gemini client")?;
                tracing::info!(model = %config.gemini_model, "Inference provider: Gemini");
                Arc::new(client)
            }
            None => {
                tracing::warn!("GEMINI_API_KEY not set, AI flows will report unavailable");
                Arc::new(UnconfiguredProvider)
            }
        };

        let flows = FlowRunner::new(provider, config.retry_policy());
        Ok(Self::with_parts(config.clone(), ZoneStore::seeded(), flows))
    }

    /// 直接组装 (测试用)
    pub fn with_parts(config: Config, zones: ZoneStore, flows: FlowRunner) -> Self {
        Self {
            config: Arc::new(config),
            zones,
            flows,
            started_at: Instant::now(),
        }
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}
