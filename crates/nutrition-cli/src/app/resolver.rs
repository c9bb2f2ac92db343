//! Path and backend resolution for config and meal store.

use std::path::{Path, PathBuf};

use nutrition_core::{JsonFileStore, SnapshotStore, SqliteStore};

use crate::config::{default_config_path, default_store_path, StoreBackend};

/// Resolve the config file path, checking CALORIES_CONFIG first.
pub fn resolve_config_path() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("CALORIES_CONFIG") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    default_config_path()
}

/// Pick the store backend.
///
/// Order: `--backend`, then the extension of an explicit store path
/// (`.db`, `.sqlite`, `.sqlite3` mean SQLite), then the config file,
/// then JSON.
pub fn resolve_backend(
    flag: Option<&str>,
    explicit_path: Option<&Path>,
    configured: Option<StoreBackend>,
) -> anyhow::Result<StoreBackend> {
    if let Some(value) = flag {
        return value.parse();
    }
    if let Some(backend) = explicit_path.and_then(backend_from_extension) {
        return Ok(backend);
    }
    Ok(configured.unwrap_or_default())
}

fn backend_from_extension(path: &Path) -> Option<StoreBackend> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "db" | "sqlite" | "sqlite3" => Some(StoreBackend::Sqlite),
        "json" => Some(StoreBackend::Json),
        _ => None,
    }
}

/// Pick the store path: explicit path, then config, then the XDG default.
pub fn resolve_store_path(
    explicit_path: Option<&Path>,
    configured: Option<&str>,
    backend: StoreBackend,
) -> anyhow::Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(path.to_path_buf());
    }
    if let Some(path) = configured.filter(|p| !p.trim().is_empty()) {
        return Ok(PathBuf::from(path));
    }
    default_store_path(backend)
}

/// Open the store for `backend` at `path`.
pub fn open_store(backend: StoreBackend, path: &Path) -> anyhow::Result<Box<dyn SnapshotStore>> {
    Ok(match backend {
        StoreBackend::Json => Box::new(JsonFileStore::new(path)),
        StoreBackend::Sqlite => Box::new(SqliteStore::open(path)?),
    })
}
