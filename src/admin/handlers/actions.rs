//! Resource action handlers
//! 资源操作处理器
//!
//! All seven delegate actions share one shape: authorize the caller, build
//! the per-request context, obtain a client for the requested resource from
//! the factory, invoke exactly one delegate method and render the result.
//! A non-empty fragment is wrapped in the page shell; an empty fragment means
//! the client's own response is relayed unmodified.
//!
//! 所有七个委托操作共享一个形状：授权调用者，构建每请求上下文，
//! 从工厂获取请求资源的客户端，恰好调用一个委托方法并渲染结果。
//! 非空片段被包装在页面外壳中；空片段表示客户端自己的响应被原样转发。

use std::collections::HashMap;

use axum::extract::{Path, Query, State};
use axum::http::HeaderMap;
use axum::response::{Html, IntoResponse, Response};
use tracing::debug;

use crate::admin::auth::authorize;
use crate::admin::client::AdminClient;
use crate::admin::error::{AdminError, AdminResult};
use crate::admin::gateway::GatewayState;
use crate::admin::view::render_page;

/// The delegate operations of the admin client / 管理客户端的委托操作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminAction {
    Copy,
    Create,
    Delete,
    Export,
    Get,
    Save,
    Search,
}

impl AdminAction {
    /// Action name for logging / 用于日志记录的操作名称
    pub fn name(self) -> &'static str {
        match self {
            AdminAction::Copy => "copy",
            AdminAction::Create => "create",
            AdminAction::Delete => "delete",
            AdminAction::Export => "export",
            AdminAction::Get => "get",
            AdminAction::Save => "save",
            AdminAction::Search => "search",
        }
    }

    /// Invoke the matching delegate method / 调用匹配的委托方法
    async fn invoke(
        self,
        client: &dyn AdminClient,
        ctx: &crate::admin::context::Context,
    ) -> AdminResult<String> {
        match self {
            AdminAction::Copy => client.copy(ctx).await,
            AdminAction::Create => client.create(ctx).await,
            AdminAction::Delete => client.delete(ctx).await,
            AdminAction::Export => client.export(ctx).await,
            AdminAction::Get => client.get(ctx).await,
            AdminAction::Save => client.save(ctx).await,
            AdminAction::Search => client.search(ctx).await,
        }
    }
}

/// Shared shape of every delegate action / 每个委托操作的共享形状
async fn run_action(
    state: GatewayState,
    headers: HeaderMap,
    site: String,
    resource: String,
    params: HashMap<String, String>,
    payload: Option<String>,
    action: AdminAction,
) -> Result<Response, AdminError> {
    // Denied access short-circuits before the factory is touched
    // 拒绝访问会在接触工厂之前短路
    authorize(&state, &headers).await?;

    let ctx = state.context(Some(site), &resource, params, payload);
    debug!(
        action = action.name(),
        resource = %ctx.resource,
        site = %ctx.site,
        lang = %ctx.lang,
        "dispatching admin action"
    );

    let client = state.factory.create(&ctx, &ctx.resource)?;
    let fragment = action.invoke(client.as_ref(), &ctx).await?;

    if fragment.is_empty() {
        // The client produced its own response, relay it unmodified
        // 客户端生成了自己的响应，原样转发
        let resp = client.response(&ctx).await?;
        return Ok(resp.into_http().into_response());
    }

    Ok(Html(render_page(&ctx, &fragment)).into_response())
}

/// Returns the HTML code for a copy of a resource object
/// 返回资源对象副本的HTML代码
pub async fn copy_action(
    State(state): State<GatewayState>,
    Path((site, resource)): Path<(String, String)>,
    Query(params): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Result<Response, AdminError> {
    run_action(state, headers, site, resource, params, None, AdminAction::Copy).await
}

/// Returns the HTML code for a new resource object
/// 返回新资源对象的HTML代码
pub async fn create_action(
    State(state): State<GatewayState>,
    Path((site, resource)): Path<(String, String)>,
    Query(params): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Result<Response, AdminError> {
    run_action(state, headers, site, resource, params, None, AdminAction::Create).await
}

/// Deletes the resource object or a list of resource objects
/// 删除资源对象或资源对象列表
pub async fn delete_action(
    State(state): State<GatewayState>,
    Path((site, resource)): Path<(String, String)>,
    Query(params): Query<HashMap<String, String>>,
    headers: HeaderMap,
    body: String,
) -> Result<Response, AdminError> {
    let payload = if body.is_empty() { None } else { Some(body) };
    run_action(state, headers, site, resource, params, payload, AdminAction::Delete).await
}

/// Exports the data for a resource object
/// 导出资源对象的数据
pub async fn export_action(
    State(state): State<GatewayState>,
    Path((site, resource)): Path<(String, String)>,
    Query(params): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Result<Response, AdminError> {
    run_action(state, headers, site, resource, params, None, AdminAction::Export).await
}

/// Returns the HTML code for the requested resource object
/// 返回请求的资源对象的HTML代码
pub async fn get_action(
    State(state): State<GatewayState>,
    Path((site, resource)): Path<(String, String)>,
    Query(params): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Result<Response, AdminError> {
    run_action(state, headers, site, resource, params, None, AdminAction::Get).await
}

/// Saves a new or changed resource object
/// 保存新的或更改的资源对象
pub async fn save_action(
    State(state): State<GatewayState>,
    Path((site, resource)): Path<(String, String)>,
    Query(params): Query<HashMap<String, String>>,
    headers: HeaderMap,
    body: String,
) -> Result<Response, AdminError> {
    let payload = if body.is_empty() { None } else { Some(body) };
    run_action(state, headers, site, resource, params, payload, AdminAction::Save).await
}

/// Returns the HTML code for a list of resource objects
/// 返回资源对象列表的HTML代码
pub async fn search_action(
    State(state): State<GatewayState>,
    Path((site, resource)): Path<(String, String)>,
    Query(params): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Result<Response, AdminError> {
    run_action(state, headers, site, resource, params, None, AdminAction::Search).await
}
