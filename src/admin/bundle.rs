//! Asset bundle descriptors
//! 资产包描述符
//!
//! A bundle descriptor is a JSON manifest declaring which source files make
//! up one JS or CSS bundle. Included paths are resolved relative to the
//! manifest's directory; declaration order is the concatenation order.
//!
//! 包描述符是一个JSON清单，声明哪些源文件组成一个JS或CSS包。
//! 包含的路径相对于清单所在目录解析；声明顺序即连接顺序。

use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::error::{AdminError, AdminResult};

/// Bundle manifest root / 包清单根
#[derive(Debug, Clone, Deserialize)]
pub struct BundleManifest {
    /// Declared packages / 声明的包
    #[serde(default)]
    pub pkgs: Vec<BundlePackage>,
}

/// One package inside a manifest / 清单中的一个包
#[derive(Debug, Clone, Deserialize)]
pub struct BundlePackage {
    /// Package name / 包名称
    #[serde(default)]
    pub name: String,
    /// Declared source files / 声明的源文件
    #[serde(rename = "fileIncludes", default)]
    pub file_includes: Vec<FileInclude>,
}

/// One source file entry / 一个源文件条目
#[derive(Debug, Clone, Deserialize)]
pub struct FileInclude {
    /// File name / 文件名
    pub text: String,
    /// Directory prefix relative to the manifest / 相对于清单的目录前缀
    #[serde(default)]
    pub path: String,
}

impl BundleManifest {
    /// Load and parse a manifest file / 加载并解析清单文件
    pub fn load(path: &Path) -> AdminResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        serde_json::from_str(&raw)
            .map_err(|e| AdminError::Bundle(format!("{}: {}", path.display(), e)))
    }

    /// Expand the manifest to the ordered list of source files matching the
    /// requested type, resolved against the given base directory.
    /// 将清单展开为与请求类型匹配的有序源文件列表，相对于给定的基础目录解析。
    pub fn files(&self, base: &Path, file_type: &str) -> Vec<PathBuf> {
        let suffix = format!(".{}", file_type);
        let mut files = Vec::new();
        for pkg in &self.pkgs {
            for include in &pkg.file_includes {
                if include.text.ends_with(&suffix) {
                    files.push(base.join(&include.path).join(&include.text));
                }
            }
        }
        files
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    const MANIFEST: &str = r#"{
        "pkgs": [
            {
                "name": "core",
                "fileIncludes": [
                    { "text": "panel.js", "path": "js/" },
                    { "text": "panel.css", "path": "css/" },
                    { "text": "widgets.js", "path": "js/" }
                ]
            },
            {
                "name": "extras",
                "fileIncludes": [
                    { "text": "extras.js", "path": "" }
                ]
            }
        ]
    }"#;

    fn write_manifest(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_files_filtered_by_type_in_declared_order() {
        let dir = TempDir::new().unwrap();
        let path = write_manifest(&dir, "bundle.jsb2", MANIFEST);
        let manifest = BundleManifest::load(&path).unwrap();

        let js = manifest.files(dir.path(), "js");
        assert_eq!(
            js,
            vec![
                dir.path().join("js/").join("panel.js"),
                dir.path().join("js/").join("widgets.js"),
                dir.path().join("").join("extras.js"),
            ]
        );

        let css = manifest.files(dir.path(), "css");
        assert_eq!(css, vec![dir.path().join("css/").join("panel.css")]);

        assert!(manifest.files(dir.path(), "svg").is_empty());
    }

    #[test]
    fn test_load_missing_manifest_is_io_error() {
        let dir = TempDir::new().unwrap();
        let result = BundleManifest::load(&dir.path().join("missing.jsb2"));
        match result {
            Err(AdminError::Io(_)) => {}
            _ => panic!("Expected IO error"),
        }
    }

    #[test]
    fn test_load_malformed_manifest_is_bundle_error() {
        let dir = TempDir::new().unwrap();
        let path = write_manifest(&dir, "broken.jsb2", "{ not json");
        let result = BundleManifest::load(&path);
        match result {
            Err(AdminError::Bundle(msg)) => assert!(msg.contains("broken.jsb2")),
            _ => panic!("Expected Bundle error"),
        }
    }

    #[test]
    fn test_empty_manifest_expands_to_nothing() {
        let dir = TempDir::new().unwrap();
        let path = write_manifest(&dir, "empty.jsb2", "{}");
        let manifest = BundleManifest::load(&path).unwrap();
        assert!(manifest.files(dir.path(), "js").is_empty());
    }
}
