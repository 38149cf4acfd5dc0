//! HTTP gateway implementation for the admin panel
//! 管理面板的HTTP网关实现

use std::net::SocketAddr;

use anyhow::Result;
use tracing::{error, info};

use super::gateway::{create_gateway_router, GatewayState};

/// Admin HTTP gateway / 管理HTTP网关
pub struct HttpGateway {
    addr: SocketAddr,
    state: GatewayState,
}

impl HttpGateway {
    /// Create a new HTTP gateway / 创建新的HTTP网关
    pub fn new(addr: SocketAddr, state: GatewayState) -> Self {
        Self { addr, state }
    }

    /// Get the HTTP address / 获取HTTP地址
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Start the HTTP gateway / 启动HTTP网关
    pub async fn start(self) -> Result<()> {
        info!("Starting admin HTTP gateway on {}", self.addr);

        let cancel_token = self.state.cancel_token.clone();
        let app = create_gateway_router(self.state);

        let listener = tokio::net::TcpListener::bind(self.addr).await?;
        info!("Admin HTTP gateway listening on {}", self.addr);

        let serve = axum::serve(listener, app)
            .with_graceful_shutdown(async move { cancel_token.cancelled().await });
        if let Err(e) = serve.await {
            error!("Admin HTTP gateway error: {}", e);
            return Err(e.into());
        }

        Ok(())
    }
}
