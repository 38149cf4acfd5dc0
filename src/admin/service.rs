//! Admin panel service wiring / 管理面板服务装配

use std::sync::Arc;

use anyhow::Result;
use tokio_util::sync::CancellationToken;

use super::auth::{Authorizer, TokenAuthorizer};
use super::client::{AdminClientFactory, MemoryAdminFactory};
use super::config::AdminConfig;
use super::gateway::GatewayState;
use super::http_gateway::HttpGateway;

/// Assembles the gateway from configuration and collaborator handles
/// 从配置和协作者句柄组装网关
pub struct AdminPanelService {
    config: Arc<AdminConfig>,
    factory: Arc<dyn AdminClientFactory>,
    authorizer: Arc<dyn Authorizer>,
    cancel_token: CancellationToken,
}

impl AdminPanelService {
    /// Create the service with the in-memory reference factory and the
    /// token-table authorizer from configuration.
    /// 使用内存参考工厂和配置中的令牌表授权器创建服务。
    pub fn new(config: Arc<AdminConfig>) -> Self {
        let authorizer = Arc::new(TokenAuthorizer::from_config(&config.tokens));
        Self {
            factory: Arc::new(MemoryAdminFactory::default()),
            authorizer,
            config,
            cancel_token: CancellationToken::new(),
        }
    }

    /// Replace the admin client factory / 替换管理客户端工厂
    pub fn with_factory(mut self, factory: Arc<dyn AdminClientFactory>) -> Self {
        self.factory = factory;
        self
    }

    /// Replace the authorizer / 替换授权器
    pub fn with_authorizer(mut self, authorizer: Arc<dyn Authorizer>) -> Self {
        self.authorizer = authorizer;
        self
    }

    /// Shutdown token shared with the gateway / 与网关共享的关闭令牌
    pub fn cancel_token(&self) -> CancellationToken {
        self.cancel_token.clone()
    }

    /// Build the gateway state / 构建网关状态
    pub fn state(&self) -> GatewayState {
        GatewayState::new(
            self.factory.clone(),
            self.authorizer.clone(),
            self.config.clone(),
            self.cancel_token.clone(),
        )
    }

    /// Start the HTTP gateway and serve until shutdown / 启动HTTP网关并服务直到关闭
    pub async fn start(self) -> Result<()> {
        let gateway = HttpGateway::new(self.config.http.addr, self.state());
        gateway.start().await
    }
}
