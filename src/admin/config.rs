//! Admin gateway configuration
//! 管理网关配置

use std::collections::HashMap;
use std::path::PathBuf;

use clap::Parser;
use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::config::base::{LogConfig, ServerConfig};

/// Admin gateway command line arguments / 管理网关命令行参数
#[derive(Parser, Debug, Clone)]
#[command(
    name = "admind",
    version = "0.1.0",
    about = "Storefront admin panel gateway\n店面管理面板网关"
)]
pub struct CliArgs {
    /// Configuration file path / 配置文件路径
    #[arg(short, long, value_name = "FILE", help = "Configuration file path / 配置文件路径")]
    pub config: Option<String>,

    /// HTTP gateway address / HTTP网关地址
    #[arg(long, value_name = "ADDR", help = "HTTP gateway address (e.g., 0.0.0.0:8080) / HTTP网关地址")]
    pub http_addr: Option<String>,

    /// Default site code / 默认站点代码
    #[arg(long, value_name = "SITE", help = "Default site code / 默认站点代码")]
    pub site: Option<String>,

    /// Default locale / 默认区域设置
    #[arg(long, value_name = "LANG", help = "Default locale (e.g., en) / 默认区域设置")]
    pub locale: Option<String>,

    /// Disable request authorization / 禁用请求授权
    #[arg(long, help = "Disable request authorization (development only) / 禁用请求授权（仅开发）")]
    pub no_authorize: bool,

    /// Log level / 日志级别
    #[arg(long, value_name = "LEVEL", help = "Log level (trace, debug, info, warn, error) / 日志级别")]
    pub log_level: Option<String>,
}

/// Admin gateway configuration / 管理网关配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AdminConfig {
    /// HTTP gateway configuration / HTTP网关配置
    pub http: ServerConfig,
    /// Logging configuration / 日志配置
    pub log: LogConfig,
    /// Enforce authorization on every action / 对每个操作强制授权
    pub authorize: bool,
    /// Site used when the request names none / 请求未指定时使用的站点
    pub default_site: String,
    /// Locale used when the request names none / 请求未指定时使用的区域设置
    pub default_locale: String,
    /// Bundle manifest paths, scanned in order / 包清单路径，按顺序扫描
    pub bundle_paths: Vec<PathBuf>,
    /// Panel version surfaced to views / 提供给视图的面板版本
    pub panel_version: String,
    /// Installed extension names / 已安装的扩展名称
    pub extensions: Vec<String>,
    /// Access token to role name table / 访问令牌到角色名称表
    pub tokens: HashMap<String, String>,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            http: ServerConfig::default(),
            log: LogConfig::default(),
            authorize: true,
            default_site: "default".to_string(),
            default_locale: "en".to_string(),
            bundle_paths: Vec::new(),
            panel_version: env!("CARGO_PKG_VERSION").to_string(),
            extensions: Vec::new(),
            tokens: HashMap::new(),
        }
    }
}

impl AdminConfig {
    /// Load configuration with CLI arguments override / 使用CLI参数覆盖加载配置
    ///
    /// Precedence order (highest to lowest):
    /// 优先级顺序（从高到低）：
    /// 1. Command line arguments / 命令行参数
    /// 2. Environment variables (`STOREFRONT_*`) / 环境变量
    /// 3. Configuration file / 配置文件
    /// 4. Default values / 默认值
    pub fn load_with_cli(args: &CliArgs) -> anyhow::Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));

        figment = match &args.config {
            Some(path) => figment.merge(Toml::file(path)),
            None => figment.merge(Toml::file("config.toml")),
        };

        figment = figment.merge(Env::prefixed("STOREFRONT_").split("__"));

        let mut config: Self = figment.extract()?;

        // Override with CLI arguments / 使用CLI参数覆盖
        if let Some(http_addr) = &args.http_addr {
            config.http.addr = http_addr.parse()?;
        }
        if let Some(site) = &args.site {
            config.default_site = site.clone();
        }
        if let Some(locale) = &args.locale {
            config.default_locale = locale.clone();
        }
        if args.no_authorize {
            config.authorize = false;
        }
        if let Some(log_level) = &args.log_level {
            config.log.level = log_level.clone();
        }

        Ok(config)
    }
}
