//! HTTP handlers for the admin gateway
//! 管理网关的HTTP处理器
//!
//! This module contains HTTP request handlers for the admin endpoints
//! 此模块包含管理端点的HTTP请求处理器

pub mod actions;
pub mod assets;
pub mod health;

// Re-export all public items from each module / 重新导出每个模块的所有公共项
pub use actions::*;
pub use assets::*;
pub use health::*;
