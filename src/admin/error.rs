//! Error types for the admin gateway
//! 管理网关的错误类型

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Admin gateway error types / 管理网关错误类型
#[derive(Error, Debug)]
pub enum AdminError {
    /// Access denied / 拒绝访问
    #[error("Access denied")]
    Unauthorized,

    /// Unknown admin resource / 未知的管理资源
    #[error("Unknown admin resource: {resource}")]
    UnknownResource { resource: String },

    /// Missing request parameter / 缺少请求参数
    #[error("Missing required parameter: {name}")]
    MissingParameter { name: String },

    /// Bundle manifest error / 包清单错误
    #[error("Bundle manifest error: {0}")]
    Bundle(String),

    /// Admin client error / 管理客户端错误
    #[error("Admin client error: {0}")]
    Client(#[from] anyhow::Error),

    /// Configuration error / 配置错误
    #[error("Configuration error: {0}")]
    Config(#[from] figment::Error),

    /// IO error / IO错误
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for admin gateway operations / 管理网关操作的结果类型别名
pub type AdminResult<T> = Result<T, AdminError>;

impl AdminError {
    /// HTTP status code this error maps to / 此错误映射到的HTTP状态码
    pub fn status(&self) -> StatusCode {
        match self {
            AdminError::Unauthorized => StatusCode::FORBIDDEN,
            AdminError::UnknownResource { .. } => StatusCode::NOT_FOUND,
            AdminError::MissingParameter { .. } => StatusCode::BAD_REQUEST,
            AdminError::Bundle(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AdminError::Client(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AdminError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AdminError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Convert AdminError to an HTTP response / 将AdminError转换为HTTP响应
impl IntoResponse for AdminError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}
