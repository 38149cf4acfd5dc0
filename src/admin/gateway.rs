//! HTTP gateway state and router assembly
//! HTTP网关状态和路由器组装

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use tokio_util::sync::CancellationToken;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;

use super::auth::Authorizer;
use super::client::AdminClientFactory;
use super::config::AdminConfig;
use super::context::Context;
use super::routes::create_routes;

/// HTTP gateway state / HTTP网关状态
#[derive(Clone)]
pub struct GatewayState {
    /// Per-request admin client factory / 每请求管理客户端工厂
    pub factory: Arc<dyn AdminClientFactory>,
    /// Request authorizer / 请求授权器
    pub authorizer: Arc<dyn Authorizer>,
    /// Gateway configuration / 网关配置
    pub config: Arc<AdminConfig>,
    /// Shutdown token / 关闭令牌
    pub cancel_token: CancellationToken,
}

impl GatewayState {
    pub fn new(
        factory: Arc<dyn AdminClientFactory>,
        authorizer: Arc<dyn Authorizer>,
        config: Arc<AdminConfig>,
        cancel_token: CancellationToken,
    ) -> Self {
        Self {
            factory,
            authorizer,
            config,
            cancel_token,
        }
    }

    /// Resolve the per-request context / 解析每请求上下文
    pub fn context(
        &self,
        site: Option<String>,
        resource: &str,
        params: HashMap<String, String>,
        payload: Option<String>,
    ) -> Context {
        Context::resolve(&self.config, site, resource, params, payload)
    }
}

/// Create HTTP gateway router / 创建HTTP网关路由器
pub fn create_gateway_router(state: GatewayState) -> Router {
    let timeout = Duration::from_secs(state.config.http.request_timeout);
    create_routes(state)
        .layer(CorsLayer::permissive())
        .layer(TimeoutLayer::new(timeout))
}
