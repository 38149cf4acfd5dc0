//! Tests for admin gateway configuration
//! 管理网关配置测试

use std::io::Write;

use clap::Parser;

use crate::admin::config::{AdminConfig, CliArgs};

fn args(argv: &[&str]) -> CliArgs {
    let mut full = vec!["admind"];
    full.extend_from_slice(argv);
    CliArgs::parse_from(full)
}

#[test]
fn test_default_config() {
    // Test default configuration values / 测试默认配置值
    let config = AdminConfig::default();
    assert_eq!(config.http.addr.to_string(), "127.0.0.1:8080");
    assert!(config.authorize);
    assert_eq!(config.default_site, "default");
    assert_eq!(config.default_locale, "en");
    assert!(config.bundle_paths.is_empty());
    assert!(config.tokens.is_empty());
}

#[test]
fn test_load_from_toml_file() {
    // Test loading from a TOML configuration file / 测试从TOML配置文件加载
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
authorize = false
default_site = "unittest"
default_locale = "de"
bundle_paths = ["manifests/admin.jsb2"]
extensions = ["reviews", "vouchers"]

[http]
addr = "127.0.0.1:9090"
request_timeout = 5

[log]
level = "debug"
format = "json"

[tokens]
"secret-token" = "admin"
"#
    )
    .unwrap();

    let args = args(&["--config", file.path().to_str().unwrap()]);
    let config = AdminConfig::load_with_cli(&args).unwrap();

    assert!(!config.authorize);
    assert_eq!(config.default_site, "unittest");
    assert_eq!(config.default_locale, "de");
    assert_eq!(config.http.addr.to_string(), "127.0.0.1:9090");
    assert_eq!(config.http.request_timeout, 5);
    assert_eq!(config.log.level, "debug");
    assert_eq!(config.log.format, "json");
    assert_eq!(config.bundle_paths.len(), 1);
    assert_eq!(config.extensions.len(), 2);
    assert_eq!(config.tokens.get("secret-token").unwrap(), "admin");
}

#[test]
fn test_cli_overrides_file() {
    // CLI arguments take precedence over the file / CLI参数优先于文件
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
default_site = "from-file"

[http]
addr = "127.0.0.1:9090"
"#
    )
    .unwrap();

    let args = args(&[
        "--config",
        file.path().to_str().unwrap(),
        "--http-addr",
        "127.0.0.1:7070",
        "--site",
        "from-cli",
        "--locale",
        "fr",
        "--no-authorize",
        "--log-level",
        "trace",
    ]);
    let config = AdminConfig::load_with_cli(&args).unwrap();

    assert_eq!(config.http.addr.to_string(), "127.0.0.1:7070");
    assert_eq!(config.default_site, "from-cli");
    assert_eq!(config.default_locale, "fr");
    assert!(!config.authorize);
    assert_eq!(config.log.level, "trace");
}

#[test]
fn test_invalid_http_addr_rejected() {
    let args = args(&["--http-addr", "not-an-addr"]);
    assert!(AdminConfig::load_with_cli(&args).is_err());
}

#[test]
fn test_config_serialization_round_trip() {
    // Config survives a TOML round trip / 配置在TOML往返后保持不变
    let config = AdminConfig::default();
    let raw = toml::to_string(&config).unwrap();
    let parsed: AdminConfig = toml::from_str(&raw).unwrap();
    assert_eq!(parsed.default_site, config.default_site);
    assert_eq!(parsed.http.addr, config.http.addr);
    assert_eq!(parsed.authorize, config.authorize);
}
