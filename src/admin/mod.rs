//! Admin panel gateway module
//! 管理面板网关模块
//!
//! This module contains the HTTP layer in front of the storefront admin
//! panel:
//! 此模块包含店面管理面板前的HTTP层：
//!
//! - Request authorization / 请求授权
//! - Per-request site/locale context resolution / 每请求站点/区域上下文解析
//! - Delegation to resource-specific admin clients / 委托给特定资源的管理客户端
//! - Page shell rendering and asset bundle assembly / 页面外壳渲染和资产包组装
//!
//! ## Architecture / 架构
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   HTTP Routes   │───▶│ Action Handlers │───▶│  Admin Clients  │
//! │   HTTP路由      │    │   操作处理器    │    │   管理客户端    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!                                 │
//!                        ┌─────────────────┐
//!                        │   Page Shell    │
//!                        │   页面外壳      │
//!                        └─────────────────┘
//! ```
//!
//! ## Module Structure / 模块结构
//!
//! - `config`: gateway configuration / 网关配置
//! - `client`: admin client delegate interface / 管理客户端委托接口
//! - `context`: per-request context resolution / 每请求上下文解析
//! - `handlers`: HTTP request handlers / HTTP请求处理器
//! - `bundle`: asset bundle descriptors / 资产包描述符
//! - `view`: page shell rendering / 页面外壳渲染
//! - `http_gateway`: HTTP gateway implementation / HTTP网关实现

pub mod auth;
pub mod bundle;
pub mod client;
pub mod config;
pub mod context;
pub mod error;
pub mod gateway;
pub mod handlers;
pub mod http_gateway;
pub mod routes;
pub mod service;
pub mod view;

#[cfg(test)]
pub mod config_test;

// Re-export commonly used types / 重新导出常用类型
pub use client::{AdminClient, AdminClientFactory, ClientResponse, MemoryAdminFactory};
pub use config::{AdminConfig, CliArgs};
pub use context::Context;
pub use error::{AdminError, AdminResult};
pub use gateway::{create_gateway_router, GatewayState};
pub use http_gateway::HttpGateway;
pub use service::AdminPanelService;
