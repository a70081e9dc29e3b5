//! File-backed storage medium: one `<key>.json` file per key.

use std::path::{Path, PathBuf};

use log::debug;

use super::Storage;
use crate::error::{McProError, McProResult};

const EXTENSION: &str = "json";

pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Open (creating if needed) the data directory.
    pub fn open(dir: &Path) -> McProResult<Self> {
        std::fs::create_dir_all(dir)?;
        Ok(FileStorage {
            dir: dir.to_path_buf(),
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> McProResult<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');

        if !valid {
            return Err(McProError::Storage {
                key: key.to_string(),
                reason: "keys may only contain letters, digits, '_' and '-'".into(),
            });
        }

        Ok(self.dir.join(format!("{key}.{EXTENSION}")))
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        let path = self.path_for(key).ok()?;

        match std::fs::read_to_string(&path) {
            Ok(content) => Some(content),
            Err(e) => {
                if e.kind() != std::io::ErrorKind::NotFound {
                    debug!("event=storage_read key={key} status=unreadable error=\"{e}\"");
                }
                None
            }
        }
    }

    fn set(&self, key: &str, raw: &str) -> McProResult<()> {
        let path = self.path_for(key)?;
        let temp = path.with_extension(format!("{EXTENSION}.tmp"));

        let storage_err = |e: std::io::Error| McProError::Storage {
            key: key.to_string(),
            reason: e.to_string(),
        };

        std::fs::write(&temp, raw).map_err(storage_err)?;
        std::fs::rename(&temp, &path).map_err(storage_err)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> McProResult<()> {
        let path = self.path_for(key)?;
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(McProError::Storage {
                key: key.to_string(),
                reason: e.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::open(dir.path()).unwrap();

        storage.set("mc_ventas", "[]").unwrap();

        assert!(dir.path().join("mc_ventas.json").exists());
        assert!(!dir.path().join("mc_ventas.json.tmp").exists());
        assert_eq!(storage.get("mc_ventas").as_deref(), Some("[]"));
    }

    #[test]
    fn test_missing_key_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::open(dir.path()).unwrap();

        assert!(storage.get("mc_envios").is_none());
    }

    #[test]
    fn test_rejects_path_like_keys() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::open(dir.path()).unwrap();

        assert!(storage.set("../escape", "1").is_err());
        assert!(storage.get("../escape").is_none());
    }

    #[test]
    fn test_remove_absent_key_is_ok() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::open(dir.path()).unwrap();

        storage.remove("mc_clientes").unwrap();
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::open(&dir.path().join("data")).unwrap();
        std::fs::remove_dir_all(storage.dir()).unwrap();

        let err = storage.set("mc_gastos", "[]").unwrap_err();

        assert!(matches!(err, McProError::Storage { .. }));
    }
}
