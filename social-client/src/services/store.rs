//! # Session Stores
//!
//! [`SessionStore`] implementations.
//!
//! - [`MemorySessionStore`]: process-local, gone on exit. Tests and
//!   short-lived tools.
//! - [`FileSessionStore`]: a small JSON object on disk, keyed by
//!   `access_token`, `refresh_token` and `user`, so a session survives
//!   restarts.

use std::collections::{BTreeMap, HashMap};
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use parking_lot::{Mutex, RwLock};

use crate::core::error::{ApiError, Result};
use crate::core::service::{SessionKey, SessionStore};

/// In-memory session store
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    entries: RwLock<HashMap<SessionKey, String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: SessionKey) -> Result<Option<String>> {
        Ok(self.entries.read().get(&key).cloned())
    }

    fn set(&self, key: SessionKey, value: &str) -> Result<()> {
        self.entries.write().insert(key, value.to_string());
        Ok(())
    }

    fn remove(&self, key: SessionKey) -> Result<()> {
        self.entries.write().remove(&key);
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        self.entries.write().clear();
        Ok(())
    }
}

/// Session store persisted as a JSON file.
///
/// Every write rewrites the whole file through a temporary sibling and a
/// rename, so a crash never leaves half a file behind.
#[derive(Debug)]
pub struct FileSessionStore {
    path: PathBuf,
    // Serializes read-modify-write cycles within this process
    write_lock: Mutex<()>,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<BTreeMap<String, String>> {
        match fs::read(&self.path) {
            Ok(bytes) if bytes.is_empty() => Ok(BTreeMap::new()),
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(|e| {
                ApiError::Storage(format!("{}: {}", self.path.display(), e))
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(ApiError::Storage(format!("{}: {}", self.path.display(), e))),
        }
    }

    fn save(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(storage_error)?;
        }

        let bytes = serde_json::to_vec_pretty(entries)
            .map_err(|e| ApiError::Storage(e.to_string()))?;
        let tmp = self.path.with_extension("tmp");
        write_private(&tmp, &bytes).map_err(storage_error)?;
        fs::rename(&tmp, &self.path).map_err(storage_error)
    }

    fn update(&self, f: impl FnOnce(&mut BTreeMap<String, String>)) -> Result<()> {
        let _guard = self.write_lock.lock();
        let mut entries = self.load()?;
        f(&mut entries);
        self.save(&entries)
    }
}

impl SessionStore for FileSessionStore {
    fn get(&self, key: SessionKey) -> Result<Option<String>> {
        Ok(self.load()?.remove(key.as_str()))
    }

    fn set(&self, key: SessionKey, value: &str) -> Result<()> {
        self.update(|entries| {
            entries.insert(key.as_str().to_string(), value.to_string());
        })
    }

    fn remove(&self, key: SessionKey) -> Result<()> {
        self.update(|entries| {
            entries.remove(key.as_str());
        })
    }

    fn clear(&self) -> Result<()> {
        self.update(|entries| {
            for key in SessionKey::ALL {
                entries.remove(key.as_str());
            }
        })
    }
}

/// Write `bytes` to a fresh file readable only by its owner (Unix).
fn write_private(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    let mut file = options.open(path)?;
    // mode() only applies on creation; a stale temp file keeps its old bits
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        file.set_permissions(fs::Permissions::from_mode(0o600))?;
    }
    file.write_all(bytes)?;
    file.sync_all()
}

fn storage_error(e: std::io::Error) -> ApiError {
    ApiError::Storage(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store(name: &str) -> FileSessionStore {
        let path = std::env::temp_dir()
            .join(format!("social-client-{}-{}", name, std::process::id()))
            .join("session.json");
        let _ = fs::remove_file(&path);
        FileSessionStore::new(path)
    }

    #[test]
    fn test_memory_store_set_get_clear() {
        let store = MemorySessionStore::new();
        assert_eq!(store.get(SessionKey::AccessToken).unwrap(), None);

        store.set(SessionKey::AccessToken, "A1").unwrap();
        store.set(SessionKey::RefreshToken, "R1").unwrap();
        assert_eq!(store.get(SessionKey::AccessToken).unwrap().as_deref(), Some("A1"));

        store.clear().unwrap();
        for key in SessionKey::ALL {
            assert_eq!(store.get(key).unwrap(), None);
        }
    }

    #[test]
    fn test_file_store_persists_across_instances() {
        let store = temp_store("persist");
        store.set(SessionKey::AccessToken, "A1").unwrap();
        store.set(SessionKey::User, r#"{"id":7,"username":"ana"}"#).unwrap();

        let reopened = FileSessionStore::new(store.path().to_path_buf());
        assert_eq!(reopened.get(SessionKey::AccessToken).unwrap().as_deref(), Some("A1"));
        assert_eq!(
            reopened.get(SessionKey::User).unwrap().as_deref(),
            Some(r#"{"id":7,"username":"ana"}"#)
        );

        reopened.remove(SessionKey::AccessToken).unwrap();
        assert_eq!(store.get(SessionKey::AccessToken).unwrap(), None);

        store.clear().unwrap();
        assert_eq!(reopened.get(SessionKey::User).unwrap(), None);
    }

    #[cfg(unix)]
    #[test]
    fn test_file_store_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let store = temp_store("perms");
        store.set(SessionKey::RefreshToken, "R1").unwrap();

        let mode = fs::metadata(store.path()).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[test]
    fn test_file_store_missing_file_is_empty() {
        let store = temp_store("missing");
        assert_eq!(store.get(SessionKey::RefreshToken).unwrap(), None);
    }

    #[test]
    fn test_file_store_corrupt_file_is_storage_error() {
        let store = temp_store("corrupt");
        fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        fs::write(store.path(), b"not json").unwrap();

        assert!(matches!(
            store.get(SessionKey::AccessToken),
            Err(ApiError::Storage(_))
        ));
    }
}
