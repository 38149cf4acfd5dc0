//! Asset bundle assembly handler
//! 资产包组装处理器

use std::collections::HashMap;

use axum::body::Body;
use axum::extract::{Path, Query, State};
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, HeaderValue, Response};
use tracing::{debug, warn};

use crate::admin::auth::authorize;
use crate::admin::bundle::BundleManifest;
use crate::admin::error::AdminError;
use crate::admin::gateway::GatewayState;

/// Returns the concatenated JS or CSS bundle contents
/// 返回连接的JS或CSS包内容
///
/// Every configured manifest is expanded to its source files for the
/// requested type and the file contents are appended in declared order.
/// Unreadable files are skipped without aborting the response.
/// 每个配置的清单都会展开为请求类型的源文件，文件内容按声明顺序附加。
/// 无法读取的文件会被跳过而不中止响应。
pub async fn file_action(
    State(state): State<GatewayState>,
    path: Option<Path<String>>,
    Query(params): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Result<Response<Body>, AdminError> {
    authorize(&state, &headers).await?;

    // Route parameter, then query parameter, then "js"
    // 路由参数，然后查询参数，然后"js"
    let file_type = path
        .map(|Path(t)| t)
        .or_else(|| params.get("type").cloned())
        .unwrap_or_else(|| "js".to_string());

    let mut contents: Vec<u8> = Vec::new();
    for manifest_path in &state.config.bundle_paths {
        let manifest = match BundleManifest::load(manifest_path) {
            Ok(manifest) => manifest,
            Err(e) => {
                warn!(manifest = %manifest_path.display(), error = %e, "skipping unreadable bundle manifest");
                continue;
            }
        };
        let base = manifest_path
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."));
        for file in manifest.files(base, &file_type) {
            match tokio::fs::read(&file).await {
                Ok(bytes) => contents.extend_from_slice(&bytes),
                Err(e) => {
                    debug!(file = %file.display(), error = %e, "skipping unreadable bundle file");
                }
            }
        }
    }

    let mut resp = Response::new(Body::from(contents));
    match file_type.as_str() {
        "js" => {
            resp.headers_mut().insert(
                CONTENT_TYPE,
                HeaderValue::from_static("application/javascript"),
            );
        }
        "css" => {
            resp.headers_mut()
                .insert(CONTENT_TYPE, HeaderValue::from_static("text/css"));
        }
        _ => {}
    }
    Ok(resp)
}
