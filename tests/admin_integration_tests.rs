//! End-to-end tests for the admin gateway over a real router
//! 管理网关基于真实路由器的端到端测试

use std::sync::Arc;

use axum_test::TestServer;
use tokio_util::sync::CancellationToken;

use storefront_admin::admin::auth::TokenAuthorizer;
use storefront_admin::admin::{
    create_gateway_router, AdminConfig, GatewayState, MemoryAdminFactory,
};

fn test_server(mut config: AdminConfig) -> TestServer {
    config
        .tokens
        .insert("editor-token".to_string(), "editor".to_string());
    let state = GatewayState::new(
        Arc::new(MemoryAdminFactory::default()),
        Arc::new(TokenAuthorizer::from_config(&config.tokens)),
        Arc::new(config),
        CancellationToken::new(),
    );
    TestServer::new(create_gateway_router(state)).unwrap()
}

#[tokio::test]
async fn test_health_endpoint() {
    let server = test_server(AdminConfig::default());
    let response = server.get("/health").await;
    assert_eq!(response.status_code(), 200);
    let body: serde_json::Value = response.json();
    assert_eq!(body["service"], "admin");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_search_renders_shell_with_site() {
    let server = test_server(AdminConfig::default());
    let response = server
        .get("/admin/mysite/product/search")
        .authorization_bearer("editor-token")
        .await;
    assert_eq!(response.status_code(), 200);
    let html = response.text();
    assert!(html.contains("data-site=\"mysite\""));
    assert!(html.contains("list-items"));
}

#[tokio::test]
async fn test_search_without_token_is_denied() {
    let server = test_server(AdminConfig::default());
    let response = server.get("/admin/mysite/product/search").await;
    assert_eq!(response.status_code(), 403);
}

#[tokio::test]
async fn test_save_redirects_back_to_search() {
    let server = test_server(AdminConfig::default());
    let response = server
        .post("/admin/mysite/product/save?id=p-100")
        .authorization_bearer("editor-token")
        .text(r#"{"label":"Sneaker"}"#)
        .await;
    assert_eq!(response.status_code(), 302);
    assert_eq!(
        response.headers().get("location").unwrap(),
        "/admin/mysite/product/search"
    );

    // The saved item shows up in the list / 保存的项目出现在列表中
    let response = server
        .get("/admin/mysite/product/search")
        .authorization_bearer("editor-token")
        .await;
    assert!(response.text().contains("data-id=\"p-100\""));
}

#[tokio::test]
async fn test_delete_removes_saved_item() {
    let server = test_server(AdminConfig::default());
    server
        .post("/admin/mysite/order/save?id=o-7")
        .authorization_bearer("editor-token")
        .text("{}")
        .await;

    let response = server
        .post("/admin/mysite/order/delete?id=o-7")
        .authorization_bearer("editor-token")
        .await;
    assert_eq!(response.status_code(), 302);

    let response = server
        .get("/admin/mysite/order/search")
        .authorization_bearer("editor-token")
        .await;
    assert!(!response.text().contains("o-7"));
}

#[tokio::test]
async fn test_export_downloads_csv() {
    let server = test_server(AdminConfig::default());
    server
        .post("/admin/mysite/customer/save?id=c-9")
        .authorization_bearer("editor-token")
        .text("{}")
        .await;

    let response = server
        .get("/admin/mysite/customer/export?format=csv")
        .authorization_bearer("editor-token")
        .await;
    assert_eq!(response.status_code(), 200);
    assert_eq!(response.headers().get("content-type").unwrap(), "text/csv");
    assert!(response.text().contains("c-9"));
}

#[tokio::test]
async fn test_unknown_resource_is_404() {
    let server = test_server(AdminConfig::default());
    let response = server
        .get("/admin/mysite/gadget/search")
        .authorization_bearer("editor-token")
        .await;
    assert_eq!(response.status_code(), 404);
}

#[tokio::test]
async fn test_file_bundle_from_manifest() {
    let dir = tempfile::TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("admin.jsb2"),
        r#"{ "pkgs": [ { "name": "panel", "fileIncludes": [
            { "text": "a.js", "path": "" },
            { "text": "b.js", "path": "" }
        ] } ] }"#,
    )
    .unwrap();
    std::fs::write(dir.path().join("a.js"), "var a;\n").unwrap();
    std::fs::write(dir.path().join("b.js"), "var b;\n").unwrap();

    let config = AdminConfig {
        bundle_paths: vec![dir.path().join("admin.jsb2")],
        ..AdminConfig::default()
    };
    let server = test_server(config);

    let response = server
        .get("/admin/file/js")
        .authorization_bearer("editor-token")
        .await;
    assert_eq!(response.status_code(), 200);
    assert_eq!(
        response.headers().get("content-type").unwrap(),
        "application/javascript"
    );
    assert_eq!(response.text(), "var a;\nvar b;\n");
}

#[tokio::test]
async fn test_index_serves_shell() {
    let server = test_server(AdminConfig::default());
    let response = server.get("/admin").await;
    assert_eq!(response.status_code(), 200);
    assert!(response.text().contains("data-site=\"default\""));
}
