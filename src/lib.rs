//! Storefront admin panel gateway
//! 店面管理面板网关
//!
//! HTTP gateway in front of the storefront admin panel. It authorizes
//! requests, resolves per-request site/locale context, hands the request to a
//! resource-specific admin client and renders the returned HTML fragment or
//! relays the client's own response. A separate endpoint assembles JS/CSS
//! bundles from manifest files.
//!
//! 店面管理面板前的HTTP网关。它对请求进行授权，解析每个请求的站点/区域上下文，
//! 将请求交给特定资源的管理客户端，并渲染返回的HTML片段或转发客户端自己的响应。
//! 单独的端点从清单文件组装JS/CSS包。

// Shared modules / 共享模块
pub mod config;

// Service-specific modules / 服务特定模块
pub mod admin;

// Re-exports / 重新导出
pub use config::*;
