//! Per-request context for admin clients
//! 管理客户端的每请求上下文
//!
//! The context carries everything a delegate needs to answer one request:
//! the resolved site and language, the requested resource, the raw request
//! parameters and static facts about the panel deployment.
//!
//! 上下文携带委托回答一个请求所需的一切：解析的站点和语言、请求的资源、
//! 原始请求参数以及关于面板部署的静态信息。

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::config::AdminConfig;

/// Static facts about the panel deployment, surfaced to views and clients
/// 关于面板部署的静态信息，提供给视图和客户端
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PanelInfo {
    /// Panel flavour identifier / 面板类型标识符
    pub kind: String,
    /// Panel version / 面板版本
    pub version: String,
    /// Installed extension names / 已安装的扩展名称
    pub extensions: Vec<String>,
}

/// Per-request context handed to the admin client
/// 交给管理客户端的每请求上下文
#[derive(Debug, Clone)]
pub struct Context {
    /// Resolved site code / 解析的站点代码
    pub site: String,
    /// Resolved language code / 解析的语言代码
    pub lang: String,
    /// Language fallback chain for i18n consumers / i18n使用者的语言回退链
    pub lang_fallback: Vec<String>,
    /// Requested resource name / 请求的资源名称
    pub resource: String,
    /// Raw query parameters / 原始查询参数
    pub params: HashMap<String, String>,
    /// Raw request body for write actions / 写操作的原始请求体
    pub payload: Option<String>,
    /// Panel deployment facts / 面板部署信息
    pub panel: PanelInfo,
}

impl Context {
    /// Resolve the context for one request.
    /// 为一个请求解析上下文。
    ///
    /// Resolution order: route parameter, then query parameter, then the
    /// configured default.
    /// 解析顺序：路由参数，然后查询参数，然后配置的默认值。
    pub fn resolve(
        config: &AdminConfig,
        site: Option<String>,
        resource: &str,
        params: HashMap<String, String>,
        payload: Option<String>,
    ) -> Self {
        let site = site
            .filter(|s| !s.is_empty())
            .or_else(|| params.get("site").cloned())
            .unwrap_or_else(|| config.default_site.clone());

        let lang = params
            .get("lang")
            .cloned()
            .unwrap_or_else(|| config.default_locale.clone());

        // Always fall back to English last / 始终最后回退到英语
        let mut lang_fallback = vec![lang.clone()];
        if lang != "en" {
            lang_fallback.push("en".to_string());
        }

        Self {
            site,
            lang,
            lang_fallback,
            resource: resource.to_string(),
            params,
            payload,
            panel: PanelInfo {
                kind: "storefront".to_string(),
                version: config.panel_version.clone(),
                extensions: config.extensions.clone(),
            },
        }
    }

    /// Request parameter lookup / 请求参数查找
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }
}
