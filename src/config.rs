//! Startup configuration read from the environment

use std::path::{Path, PathBuf};

/// Directory holding the favorites database (defaults to the user data dir)
pub const DATA_DIR_VAR: &str = "OUTFIT_CATALOG_DATA_DIR";
/// Directory image references are resolved against
pub const ASSET_DIR_VAR: &str = "OUTFIT_CATALOG_ASSET_DIR";
/// Optional JSON file replacing the built-in catalog
pub const CATALOG_FILE_VAR: &str = "OUTFIT_CATALOG_FILE";

const DEFAULT_ASSET_DIR: &str = "public";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub data_dir: Option<PathBuf>,
    pub asset_dir: PathBuf,
    pub catalog_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            asset_dir: PathBuf::from(DEFAULT_ASSET_DIR),
            catalog_file: None,
        }
    }
}

impl AppConfig {
    pub fn from_environment() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build a config from an arbitrary variable lookup. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty()).map(PathBuf::from);

        Self {
            data_dir: var(DATA_DIR_VAR),
            asset_dir: var(ASSET_DIR_VAR).unwrap_or_else(|| PathBuf::from(DEFAULT_ASSET_DIR)),
            catalog_file: var(CATALOG_FILE_VAR),
        }
    }

    /// Resolve an opaque image reference to a file under the asset directory.
    ///
    /// Web-style references ("/img/a.jpg") lose their leading slash.
    /// Returns `None` when the file doesn't exist.
    pub fn resolve_image(&self, reference: &str) -> Option<PathBuf> {
        let relative = reference.trim_start_matches('/');
        if relative.is_empty() {
            return None;
        }

        let path = self.asset_dir.join(Path::new(relative));
        path.is_file().then_some(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_lookup(lookup(&[]));
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.asset_dir, PathBuf::from("public"));
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_lookup(lookup(&[
            (DATA_DIR_VAR, "/tmp/data"),
            (ASSET_DIR_VAR, "/srv/assets"),
            (CATALOG_FILE_VAR, "catalog.json"),
        ]));

        assert_eq!(config.data_dir, Some(PathBuf::from("/tmp/data")));
        assert_eq!(config.asset_dir, PathBuf::from("/srv/assets"));
        assert_eq!(config.catalog_file, Some(PathBuf::from("catalog.json")));
    }

    #[test]
    fn test_blank_values_are_unset() {
        let config = AppConfig::from_lookup(lookup(&[(DATA_DIR_VAR, "  "), (ASSET_DIR_VAR, "")]));
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_resolve_image() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("img")).unwrap();
        std::fs::write(dir.path().join("img").join("a.jpg"), b"jpeg").unwrap();

        let config = AppConfig {
            asset_dir: dir.path().to_path_buf(),
            ..AppConfig::default()
        };

        assert_eq!(config.resolve_image("/img/a.jpg"), Some(dir.path().join("img/a.jpg")));
        assert_eq!(config.resolve_image("img/a.jpg"), Some(dir.path().join("img/a.jpg")));
        assert_eq!(config.resolve_image("/img/missing.jpg"), None);
        assert_eq!(config.resolve_image("/"), None);
    }
}
