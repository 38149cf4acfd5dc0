//! Admin client delegate interface
//! 管理客户端委托接口
//!
//! The gateway never implements resource business logic itself. Every action
//! is delegated to an [`AdminClient`] obtained from an [`AdminClientFactory`]
//! for the requested resource. A delegate method returns the HTML fragment to
//! embed in the page shell; an empty string means the client produced its own
//! response (redirect, download, JSON), which the gateway must relay verbatim.
//!
//! 网关本身从不实现资源业务逻辑。每个操作都委托给从[`AdminClientFactory`]
//! 获取的特定资源的[`AdminClient`]。委托方法返回要嵌入页面外壳的HTML片段；
//! 空字符串表示客户端生成了自己的响应（重定向、下载、JSON），网关必须原样转发。

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::header::{CONTENT_TYPE, LOCATION};
use axum::http::{HeaderValue, Response, StatusCode};
use parking_lot::RwLock;
use uuid::Uuid;

use super::context::Context;
use super::error::{AdminError, AdminResult};

/// A response produced by the admin client itself, relayed unmodified
/// 管理客户端自己生成的响应，原样转发
#[derive(Debug, Clone, PartialEq)]
pub struct ClientResponse {
    /// HTTP status code / HTTP状态码
    pub status: u16,
    /// Content type of the body, empty for none / 响应体的内容类型，空表示无
    pub content_type: String,
    /// Redirect target, if any / 重定向目标（如果有）
    pub location: Option<String>,
    /// Response body / 响应体
    pub body: Vec<u8>,
}

impl ClientResponse {
    /// A redirect to another admin route / 重定向到另一个管理路由
    pub fn redirect(location: impl Into<String>) -> Self {
        Self {
            status: 302,
            content_type: String::new(),
            location: Some(location.into()),
            body: Vec::new(),
        }
    }

    /// A file download with the given content type / 具有给定内容类型的文件下载
    pub fn download(content_type: impl Into<String>, body: Vec<u8>) -> Self {
        Self {
            status: 200,
            content_type: content_type.into(),
            location: None,
            body,
        }
    }

    /// Convert into an HTTP response / 转换为HTTP响应
    pub fn into_http(self) -> Response<Body> {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::OK);
        let mut resp = Response::new(Body::from(self.body));
        *resp.status_mut() = status;
        if !self.content_type.is_empty() {
            if let Ok(value) = HeaderValue::from_str(&self.content_type) {
                resp.headers_mut().insert(CONTENT_TYPE, value);
            }
        }
        if let Some(location) = &self.location {
            if let Ok(value) = HeaderValue::from_str(location) {
                resp.headers_mut().insert(LOCATION, value);
            }
        }
        resp
    }
}

/// Delegate interface implementing per-resource admin operations
/// 实现每资源管理操作的委托接口
#[async_trait]
pub trait AdminClient: Send + Sync {
    /// Render a copy of an existing resource object / 渲染现有资源对象的副本
    async fn copy(&self, ctx: &Context) -> AdminResult<String>;

    /// Render the form for a new resource object / 渲染新资源对象的表单
    async fn create(&self, ctx: &Context) -> AdminResult<String>;

    /// Delete one or more resource objects / 删除一个或多个资源对象
    async fn delete(&self, ctx: &Context) -> AdminResult<String>;

    /// Export resource object data / 导出资源对象数据
    async fn export(&self, ctx: &Context) -> AdminResult<String>;

    /// Render a single resource object / 渲染单个资源对象
    async fn get(&self, ctx: &Context) -> AdminResult<String>;

    /// Persist a new or changed resource object / 保存新的或更改的资源对象
    async fn save(&self, ctx: &Context) -> AdminResult<String>;

    /// Render a list of resource objects / 渲染资源对象列表
    async fn search(&self, ctx: &Context) -> AdminResult<String>;

    /// The client's own response, used when a delegate method returned an
    /// empty string / 客户端自己的响应，在委托方法返回空字符串时使用
    async fn response(&self, ctx: &Context) -> AdminResult<ClientResponse>;
}

/// Factory creating a fresh admin client per request
/// 每个请求创建新管理客户端的工厂
pub trait AdminClientFactory: Send + Sync {
    /// Create the client for the requested resource / 为请求的资源创建客户端
    fn create(&self, ctx: &Context, resource: &str) -> AdminResult<Arc<dyn AdminClient>>;
}

/// In-memory reference client backing the demo binary and integration tests.
/// Real deployments plug their own factory into the gateway state.
/// 支持演示二进制文件和集成测试的内存参考客户端。
/// 实际部署将自己的工厂插入网关状态。
pub struct MemoryAdminClient {
    resource: String,
    items: Arc<RwLock<HashMap<String, serde_json::Value>>>,
}

impl MemoryAdminClient {
    fn list_url(&self, ctx: &Context) -> String {
        format!("/admin/{}/{}/search", ctx.site, self.resource)
    }

    fn fragment(&self, ctx: &Context, body: &str) -> String {
        format!(
            "<div class=\"admin-{}\" data-site=\"{}\" data-version=\"{}\">{}</div>",
            self.resource, ctx.site, ctx.panel.version, body
        )
    }
}

#[async_trait]
impl AdminClient for MemoryAdminClient {
    async fn copy(&self, ctx: &Context) -> AdminResult<String> {
        let id = ctx.param("id").ok_or(AdminError::MissingParameter {
            name: "id".to_string(),
        })?;
        let items = self.items.read();
        let item = items.get(id).cloned().unwrap_or_default();
        Ok(self.fragment(ctx, &format!("<form data-copy-of=\"{}\">{}</form>", id, item)))
    }

    async fn create(&self, ctx: &Context) -> AdminResult<String> {
        Ok(self.fragment(ctx, "<form data-new=\"true\"></form>"))
    }

    async fn delete(&self, ctx: &Context) -> AdminResult<String> {
        if let Some(id) = ctx.param("id") {
            self.items.write().remove(id);
        }
        // Back to the list after deletion / 删除后返回列表
        Ok(String::new())
    }

    async fn export(&self, _ctx: &Context) -> AdminResult<String> {
        // Export is delivered through the client's own response / 导出通过客户端自己的响应交付
        Ok(String::new())
    }

    async fn get(&self, ctx: &Context) -> AdminResult<String> {
        let id = ctx.param("id").ok_or(AdminError::MissingParameter {
            name: "id".to_string(),
        })?;
        let items = self.items.read();
        let item = items.get(id).cloned().unwrap_or_default();
        Ok(self.fragment(ctx, &format!("<form data-id=\"{}\">{}</form>", id, item)))
    }

    async fn save(&self, ctx: &Context) -> AdminResult<String> {
        let value = match ctx.payload.as_deref() {
            Some(body) if !body.is_empty() => {
                serde_json::from_str(body).unwrap_or_else(|_| serde_json::json!({ "raw": body }))
            }
            _ => serde_json::json!({}),
        };
        let id = ctx
            .param("id")
            .map(String::from)
            .unwrap_or_else(|| Uuid::new_v4().to_string());
        self.items.write().insert(id, value);
        // Back to the list after saving / 保存后返回列表
        Ok(String::new())
    }

    async fn search(&self, ctx: &Context) -> AdminResult<String> {
        let items = self.items.read();
        let mut ids: Vec<&String> = items.keys().collect();
        ids.sort();
        let rows: String = ids
            .iter()
            .map(|id| format!("<li data-id=\"{}\"></li>", id))
            .collect();
        Ok(self.fragment(ctx, &format!("<ul class=\"list-items\">{}</ul>", rows)))
    }

    async fn response(&self, ctx: &Context) -> AdminResult<ClientResponse> {
        // Export downloads CSV, everything else goes back to the list
        // 导出下载CSV，其他所有操作返回列表
        if ctx.param("format") == Some("csv") {
            let items = self.items.read();
            let mut ids: Vec<&String> = items.keys().collect();
            ids.sort();
            let mut csv = String::from("id\n");
            for id in ids {
                csv.push_str(id);
                csv.push('\n');
            }
            return Ok(ClientResponse::download("text/csv", csv.into_bytes()));
        }
        Ok(ClientResponse::redirect(self.list_url(ctx)))
    }
}

/// Factory for the in-memory reference clients / 内存参考客户端的工厂
pub struct MemoryAdminFactory {
    stores: HashMap<String, Arc<RwLock<HashMap<String, serde_json::Value>>>>,
}

impl MemoryAdminFactory {
    /// Create a factory serving the given resource names
    /// 创建服务于给定资源名称的工厂
    pub fn with_resources<I, S>(resources: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let stores = resources
            .into_iter()
            .map(|r| (r.into(), Arc::new(RwLock::new(HashMap::new()))))
            .collect();
        Self { stores }
    }
}

impl Default for MemoryAdminFactory {
    fn default() -> Self {
        Self::with_resources(["product", "catalog", "customer", "order"])
    }
}

impl AdminClientFactory for MemoryAdminFactory {
    fn create(&self, _ctx: &Context, resource: &str) -> AdminResult<Arc<dyn AdminClient>> {
        let items = self
            .stores
            .get(resource)
            .ok_or_else(|| AdminError::UnknownResource {
                resource: resource.to_string(),
            })?
            .clone();
        Ok(Arc::new(MemoryAdminClient {
            resource: resource.to_string(),
            items,
        }))
    }
}
