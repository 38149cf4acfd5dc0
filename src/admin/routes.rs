//! HTTP routes for the admin gateway
//! 管理网关的HTTP路由
//!
//! This module defines all HTTP routes and their mappings to handlers
//! 此模块定义所有HTTP路由及其到处理器的映射

use axum::{
    routing::{get, post},
    Router,
};

use super::gateway::GatewayState;
use super::handlers::{
    copy_action, create_action, delete_action, export_action, file_action, get_action,
    health_check, save_action, search_action,
};
use super::view::{admin_index, admin_static};

/// Create HTTP routes / 创建HTTP路由
pub(crate) fn create_routes(state: GatewayState) -> Router {
    Router::new()
        // Panel shell / 面板外壳
        .route("/admin", get(admin_index))
        // Resource action endpoints / 资源操作端点
        .route("/admin/{site}/{resource}/search", get(search_action))
        .route("/admin/{site}/{resource}/get", get(get_action))
        .route("/admin/{site}/{resource}/create", get(create_action))
        .route("/admin/{site}/{resource}/copy", get(copy_action))
        .route("/admin/{site}/{resource}/export", get(export_action))
        .route("/admin/{site}/{resource}/save", post(save_action))
        .route("/admin/{site}/{resource}/delete", post(delete_action))
        // Asset bundle endpoints / 资产包端点
        .route("/admin/file/{type}", get(file_action))
        .route("/admin/file", get(file_action))
        // Embedded shell assets / 嵌入式外壳资产
        .route("/admin/static/{*path}", get(admin_static))
        // Health check endpoint / 健康检查端点
        .route("/health", get(health_check))
        .with_state(state)
}
