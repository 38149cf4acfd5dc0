//! Admin gateway main entry point
//! 管理网关主入口点

use std::sync::Arc;

use clap::Parser;
use storefront_admin::admin::{AdminConfig, AdminPanelService, CliArgs};
use storefront_admin::config::init_tracing;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments / 解析命令行参数
    let args = CliArgs::parse();

    // Load configuration with CLI override / 使用CLI覆盖加载配置
    let config = Arc::new(AdminConfig::load_with_cli(&args)?);

    // Initialize logging with configuration / 使用配置初始化日志
    init_tracing(&config.log.to_logging_config())?;

    tracing::info!("Admin gateway starting with:");
    tracing::info!("  - HTTP gateway on: {}", config.http.addr);
    tracing::info!("  - Default site: {}", config.default_site);
    tracing::info!("  - Default locale: {}", config.default_locale);
    tracing::info!("  - Authorization: {}", config.authorize);
    tracing::info!("  - Bundle manifests: {}", config.bundle_paths.len());

    let service = AdminPanelService::new(config.clone());
    let cancel_token = service.cancel_token();

    let gateway_handle = tokio::spawn(async move {
        if let Err(e) = service.start().await {
            tracing::error!("Admin HTTP gateway error: {}", e);
        }
    });

    tracing::info!("Admin gateway started successfully");
    tracing::info!("Admin panel: http://{}/admin", config.http.addr);

    // Wait for shutdown signal / 等待关闭信号
    tokio::signal::ctrl_c().await?;
    tracing::info!("Admin gateway shutting down");

    // Graceful shutdown / 优雅关闭
    cancel_token.cancel();
    let _ = gateway_handle.await;

    Ok(())
}
