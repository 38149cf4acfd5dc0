//! Base configuration structures and utilities
//! 基础配置结构和工具

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

/// Base server configuration / 基础服务器配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Server bind address / 服务器绑定地址
    #[serde(deserialize_with = "deserialize_socket_addr")]
    pub addr: SocketAddr,
    /// Request timeout in seconds / 请求超时时间（秒）
    pub request_timeout: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: "127.0.0.1:8080".parse().expect("valid default addr"),
            request_timeout: 30,
        }
    }
}

fn deserialize_socket_addr<'de, D>(deserializer: D) -> Result<SocketAddr, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    s.parse().map_err(serde::de::Error::custom)
}

/// Base logging configuration / 基础日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Log level / 日志级别
    pub level: String,
    /// Log format (json, compact, pretty) / 日志格式
    pub format: String,
    /// Log output file / 日志输出文件
    pub file: Option<String>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
            file: None,
        }
    }
}

impl LogConfig {
    /// Convert to the common LoggingConfig used by init_tracing
    /// 转换为init_tracing使用的通用LoggingConfig
    pub fn to_logging_config(&self) -> crate::config::LoggingConfig {
        crate::config::LoggingConfig {
            level: self.level.clone(),
            format: self.format.clone(),
            file_enabled: self.file.is_some(),
            file_path: self.file.as_ref().map(std::path::PathBuf::from),
        }
    }
}
