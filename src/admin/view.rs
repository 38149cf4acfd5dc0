//! Page shell rendering and embedded static assets
//! 页面外壳渲染和嵌入式静态资产
//!
//! Delegate HTML fragments are wrapped into the embedded page shell before
//! they leave the gateway; the shell's stylesheet is served from the binary.
//!
//! 委托的HTML片段在离开网关之前被包装到嵌入式页面外壳中；
//! 外壳的样式表从二进制文件中提供。

use std::collections::HashMap;

use axum::extract::{Path, Query, State};
use axum::http::header::{CACHE_CONTROL, CONTENT_TYPE};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use super::context::Context;
use super::gateway::GatewayState;

const INDEX_TEMPLATE: &str = include_str!("../../assets/admin/index.html");

/// Wrap a delegate fragment into the page shell / 将委托片段包装到页面外壳中
pub fn render_page(ctx: &Context, content: &str) -> String {
    INDEX_TEMPLATE
        .replace("{{site}}", &ctx.site)
        .replace("{{version}}", &ctx.panel.version)
        .replace("{{content}}", content)
}

/// Serve the empty page shell / 提供空页面外壳
pub async fn admin_index(
    State(state): State<GatewayState>,
    Query(params): Query<HashMap<String, String>>,
) -> Html<String> {
    let ctx = state.context(None, "", params, None);
    Html(render_page(&ctx, ""))
}

/// Serve an embedded shell asset / 提供嵌入式外壳资产
pub async fn admin_static(Path(path): Path<String>) -> impl IntoResponse {
    let path = path.trim_start_matches('/');
    let (bytes, mime) = match path {
        "main.css" => (
            include_bytes!("../../assets/admin/main.css").as_ref(),
            "text/css",
        ),
        _ => return StatusCode::NOT_FOUND.into_response(),
    };
    let mut resp = Response::new(bytes.into());
    resp.headers_mut()
        .insert(CONTENT_TYPE, mime.parse().expect("static mime"));
    // Reduce caching to ensure shell updates are visible / 减少缓存以确保外壳更新可见
    resp.headers_mut().insert(
        CACHE_CONTROL,
        "no-cache, no-store, must-revalidate".parse().expect("static cache header"),
    );
    resp
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::admin::config::AdminConfig;
    use std::collections::HashMap;

    fn ctx(site: &str) -> Context {
        Context::resolve(
            &AdminConfig::default(),
            Some(site.to_string()),
            "product",
            HashMap::new(),
            None,
        )
    }

    #[test]
    fn test_render_substitutes_site_and_content() {
        let page = render_page(&ctx("unittest"), "<p>fragment</p>");
        assert!(page.contains("data-site=\"unittest\""));
        assert!(page.contains("<p>fragment</p>"));
        assert!(!page.contains("{{site}}"));
        assert!(!page.contains("{{content}}"));
        assert!(!page.contains("{{version}}"));
    }

    #[tokio::test]
    async fn test_static_css_served_with_content_type() {
        let resp = admin_static(Path("main.css".to_string()))
            .await
            .into_response();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers().get(CONTENT_TYPE).unwrap(), "text/css");
    }

    #[tokio::test]
    async fn test_unknown_static_asset_is_404() {
        let resp = admin_static(Path("nope.js".to_string()))
            .await
            .into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
