use park_server::{Server, ServerState, print_banner, setup_environment};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. 设置环境 (dotenv, 日志) 并加载配置
    let config = setup_environment();

    print_banner();

    tracing::info!(environment = %config.environment, "🅿️ Park server starting...");

    // 2. 初始化服务器状态
    let state = ServerState::initialize(&config)?;

    // 3. 启动 HTTP 服务器
    let server = Server::with_state(config, state);

    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
