//! Profile persistence and file exchange
//!
//! The collection lives in a single JSON array file. Saves are atomic:
//! write a `.tmp` sibling, then rename over the real file.

use shared::error::{AppError, ErrorCode};
use shared::models::Profile;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::import::ImportError;
use super::validation;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Profile storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Profile file is corrupt: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<StorageError> for AppError {
    fn from(err: StorageError) -> Self {
        AppError::with_message(ErrorCode::StorageError, err.to_string())
    }
}

/// JSON file store for the profile collection
#[derive(Debug, Clone)]
pub struct ProfileStore {
    path: PathBuf,
}

impl ProfileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load all profiles; a missing file is an empty collection
    pub async fn load(&self) -> Result<Vec<Profile>, StorageError> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(path = %self.path.display(), "No profile file yet, starting empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };
        let profiles: Vec<Profile> = serde_json::from_str(&content)?;
        tracing::info!(path = %self.path.display(), count = profiles.len(), "Profiles loaded");
        Ok(profiles)
    }

    /// Persist the whole collection
    pub async fn save(&self, profiles: &[Profile]) -> Result<(), StorageError> {
        if let Some(dir) = self.path.parent()
            && !dir.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(dir).await?;
        }

        let content = serde_json::to_string_pretty(profiles)?;
        let mut tmp_path = self.path.clone().into_os_string();
        tmp_path.push(".tmp");
        let tmp_path = PathBuf::from(tmp_path);

        tokio::fs::write(&tmp_path, content.as_bytes()).await?;
        if let Err(e) = tokio::fs::rename(&tmp_path, &self.path).await {
            tracing::warn!(error = %e, "Failed to move profile file into place");
            let _ = tokio::fs::remove_file(&tmp_path).await;
            return Err(e.into());
        }

        tracing::debug!(path = %self.path.display(), count = profiles.len(), "Profiles saved");
        Ok(())
    }
}

/// Export file name: whitespace runs become `_`, plus `.json`
pub fn export_file_name(profile_name: &str) -> String {
    let mut name = String::with_capacity(profile_name.len() + 5);
    let mut in_space = false;
    for c in profile_name.chars() {
        if c.is_whitespace() {
            if !in_space {
                name.push('_');
            }
            in_space = true;
        } else {
            name.push(c);
            in_space = false;
        }
    }
    name.push_str(".json");
    name
}

/// Pretty JSON export of one profile: `(file_name, contents)`
pub fn export_profile(profile: &Profile) -> Result<(String, String), StorageError> {
    let contents = serde_json::to_string_pretty(profile)?;
    Ok((export_file_name(&profile.name), contents))
}

/// Read an import file from disk
///
/// Name and size are checked from metadata before the content is read.
pub async fn read_import_file(path: &Path) -> Result<(String, Vec<u8>), ImportError> {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let metadata = tokio::fs::metadata(path).await?;
    validation::validate_file(&file_name, metadata.len())?;
    let bytes = tokio::fs::read(path).await?;
    Ok((file_name, bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profiles::book::tests::profile;

    #[tokio::test]
    async fn test_missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = ProfileStore::new(dir.path().join("profiles.json"));
        assert!(store.load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = ProfileStore::new(dir.path().join("nested").join("profiles.json"));
        let profiles = vec![profile("p1", &["m1"]), profile("p2", &["m2", "m3"])];

        store.save(&profiles).await.unwrap();
        assert_eq!(store.load().await.unwrap(), profiles);
        assert!(!dir.path().join("nested").join("profiles.json.tmp").exists());

        // camelCase on disk
        let raw = std::fs::read_to_string(store.path()).unwrap();
        assert!(raw.contains("\"rpHelpers\""));
    }

    #[tokio::test]
    async fn test_corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profiles.json");
        std::fs::write(&path, "{ nope").unwrap();

        let err = ProfileStore::new(&path).load().await.unwrap_err();
        assert!(matches!(err, StorageError::Json(_)));
        let app: AppError = err.into();
        assert_eq!(app.code, ErrorCode::StorageError);
    }

    #[test]
    fn test_export_file_name() {
        assert_eq!(export_file_name("The  Rusty\tMug"), "The_Rusty_Mug.json");
        assert_eq!(export_file_name("Tavern"), "Tavern.json");
    }

    #[test]
    fn test_export_profile() {
        let mut p = profile("p1", &["m1"]);
        p.name = "Night Bar".into();
        let (name, contents) = export_profile(&p).unwrap();
        assert_eq!(name, "Night_Bar.json");
        assert!(contents.contains('\n'));
        let back: Profile = serde_json::from_str(&contents).unwrap();
        assert_eq!(back, p);
    }

    #[tokio::test]
    async fn test_read_import_file_checks_before_reading() {
        let dir = tempfile::tempdir().unwrap();

        let txt = dir.path().join("profile.txt");
        std::fs::write(&txt, "{}").unwrap();
        assert!(matches!(
            read_import_file(&txt).await,
            Err(ImportError::InvalidExtension)
        ));

        let big = dir.path().join("big.json");
        std::fs::write(&big, vec![b' '; (validation::MAX_IMPORT_BYTES + 1) as usize]).unwrap();
        assert!(matches!(
            read_import_file(&big).await,
            Err(ImportError::FileTooLarge { .. })
        ));

        let ok = dir.path().join("p1.json");
        std::fs::write(&ok, "{}").unwrap();
        let (name, bytes) = read_import_file(&ok).await.unwrap();
        assert_eq!(name, "p1.json");
        assert_eq!(bytes, b"{}");

        assert!(matches!(
            read_import_file(&dir.path().join("missing.json")).await,
            Err(ImportError::Io(_))
        ));
    }
}
