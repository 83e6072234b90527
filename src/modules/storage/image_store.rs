use std::path::{Path, PathBuf};

use crate::core::config::StorageConfig;
use crate::core::error::{AppError, Result};

/// Image written to disk, as recorded on the owning entity.
#[derive(Debug, Clone)]
pub struct StoredImage {
    /// Server-relative path, e.g. `wwwroot/ProductImage/3.png`.
    pub local_path: String,
    /// Fully-qualified URL under the public base URL.
    pub url: String,
}

/// Local-filesystem store for uploaded villa images, keyed by entity id.
///
/// The store is a collaborator invoked by handlers after the entity operation
/// succeeds; the repository layer never touches files.
pub struct ImageStore {
    root: PathBuf,
    url_prefix: String,
    public_base_url: String,
}

impl ImageStore {
    pub fn new(config: &StorageConfig, public_base_url: &str) -> Self {
        Self {
            root: PathBuf::from(&config.image_dir),
            url_prefix: config.image_url_prefix.trim_end_matches('/').to_string(),
            public_base_url: public_base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Persist an uploaded image under `{id}.{ext}`, replacing any previous
    /// file with the same name.
    pub async fn save(&self, id: i32, original_file_name: &str, bytes: &[u8]) -> Result<StoredImage> {
        let file_name = format!("{}.{}", id, Self::extension_of(original_file_name));
        let path = self.root.join(&file_name);

        tokio::fs::create_dir_all(&self.root)
            .await
            .map_err(|e| AppError::Internal(format!("Failed to create image directory: {}", e)))?;
        tokio::fs::write(&path, bytes)
            .await
            .map_err(|e| AppError::Internal(format!("Failed to write image file: {}", e)))?;

        tracing::debug!(villa_id = id, file = %file_name, "Image stored");

        Ok(StoredImage {
            local_path: path.to_string_lossy().into_owned(),
            url: format!("{}{}/{}", self.public_base_url, self.url_prefix, file_name),
        })
    }

    /// Delete a previously stored image. Paths outside the image directory
    /// are refused; a file that is already gone is not an error.
    pub async fn remove(&self, local_path: &str) -> Result<()> {
        if local_path.is_empty() {
            return Ok(());
        }

        let path = Path::new(local_path);
        if !path.starts_with(&self.root) {
            return Err(AppError::BadRequest(format!(
                "Refusing to delete file outside the image directory: {}",
                local_path
            )));
        }

        match tokio::fs::remove_file(path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::Internal(format!(
                "Failed to delete image file: {}",
                e
            ))),
        }
    }

    /// File extension of the uploaded name, restricted to simple alphanumeric
    /// extensions so the upload cannot steer the output path.
    fn extension_of(file_name: &str) -> String {
        Path::new(file_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .filter(|ext| !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()))
            .map(|ext| ext.to_ascii_lowercase())
            .unwrap_or_else(|| "jpg".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &Path) -> ImageStore {
        ImageStore::new(
            &StorageConfig {
                image_dir: dir.to_string_lossy().into_owned(),
                image_url_prefix: "/ProductImage".to_string(),
            },
            "http://localhost:3000",
        )
    }

    fn temp_dir() -> PathBuf {
        let dir = std::env::temp_dir().join(format!("villa-images-{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[tokio::test]
    async fn save_writes_file_and_builds_url() {
        let dir = temp_dir();
        let store = store_in(&dir);

        let stored = store.save(3, "photo.PNG", b"bytes").await.unwrap();
        assert!(stored.local_path.ends_with("3.png"));
        assert_eq!(stored.url, "http://localhost:3000/ProductImage/3.png");
        assert_eq!(std::fs::read(&stored.local_path).unwrap(), b"bytes");
    }

    #[tokio::test]
    async fn save_replaces_existing_file() {
        let dir = temp_dir();
        let store = store_in(&dir);

        store.save(3, "a.png", b"old").await.unwrap();
        let stored = store.save(3, "b.png", b"new").await.unwrap();
        assert_eq!(std::fs::read(&stored.local_path).unwrap(), b"new");
    }

    #[tokio::test]
    async fn remove_is_idempotent_and_scoped() {
        let dir = temp_dir();
        let store = store_in(&dir);

        let stored = store.save(5, "photo.jpg", b"bytes").await.unwrap();
        store.remove(&stored.local_path).await.unwrap();
        assert!(!Path::new(&stored.local_path).exists());
        // Deleting again is fine.
        store.remove(&stored.local_path).await.unwrap();
        // Empty path is a no-op.
        store.remove("").await.unwrap();
        // Anything outside the image dir is refused.
        assert!(store.remove("/etc/hosts").await.is_err());
    }

    #[tokio::test]
    async fn suspicious_extension_falls_back_to_jpg() {
        let dir = temp_dir();
        let store = store_in(&dir);

        let stored = store.save(7, "../../evil", b"x").await.unwrap();
        assert!(stored.local_path.ends_with("7.jpg"));
    }
}
