//! Request authorization for the admin panel
//! 管理面板的请求授权
//!
//! Authorization happens before any delegate is touched. The [`Authorizer`]
//! trait is the seam where a real session middleware plugs in; the default
//! implementation resolves bearer tokens against a static table from the
//! configuration.
//!
//! 授权发生在接触任何委托之前。[`Authorizer`] trait是真实会话中间件接入的接缝；
//! 默认实现根据配置中的静态表解析bearer令牌。

use std::collections::HashMap;

use async_trait::async_trait;
use axum::http::header::AUTHORIZATION;
use axum::http::HeaderMap;
use tracing::warn;

use super::error::{AdminError, AdminResult};
use super::gateway::GatewayState;

/// Panel roles / 面板角色
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    Editor,
    Viewer,
}

impl Role {
    /// Whether this role may use the admin panel / 此角色是否可以使用管理面板
    pub fn can_manage(self) -> bool {
        matches!(self, Role::Admin | Role::Editor)
    }

    /// Parse a role name from configuration / 从配置解析角色名称
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "admin" => Some(Role::Admin),
            "editor" => Some(Role::Editor),
            "viewer" => Some(Role::Viewer),
            _ => None,
        }
    }
}

/// Maps request credentials to a panel role / 将请求凭证映射到面板角色
#[async_trait]
pub trait Authorizer: Send + Sync {
    /// The role behind the given token, if any / 给定令牌背后的角色（如果有）
    async fn role_for(&self, token: &str) -> Option<Role>;
}

/// Static token table authorizer / 静态令牌表授权器
pub struct TokenAuthorizer {
    tokens: HashMap<String, Role>,
}

impl TokenAuthorizer {
    /// Build from the token→role names of the configuration
    /// 从配置的令牌→角色名称构建
    pub fn from_config(tokens: &HashMap<String, String>) -> Self {
        let mut table = HashMap::new();
        for (token, role_name) in tokens {
            match Role::parse(role_name) {
                Some(role) => {
                    table.insert(token.clone(), role);
                }
                None => {
                    warn!(role = %role_name, "ignoring token with unknown role");
                }
            }
        }
        Self { tokens: table }
    }
}

#[async_trait]
impl Authorizer for TokenAuthorizer {
    async fn role_for(&self, token: &str) -> Option<Role> {
        self.tokens.get(token).copied()
    }
}

/// Extract the bearer token from request headers / 从请求头中提取bearer令牌
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

/// Authorize one admin request. Denied access short-circuits the action
/// before the client factory is invoked.
/// 对一个管理请求进行授权。拒绝访问会在调用客户端工厂之前使操作短路。
pub async fn authorize(state: &GatewayState, headers: &HeaderMap) -> AdminResult<()> {
    if !state.config.authorize {
        return Ok(());
    }
    let token = bearer_token(headers).ok_or(AdminError::Unauthorized)?;
    match state.authorizer.role_for(token).await {
        Some(role) if role.can_manage() => Ok(()),
        _ => Err(AdminError::Unauthorized),
    }
}
