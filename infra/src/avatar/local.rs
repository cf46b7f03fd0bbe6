//! Local filesystem avatar storage
//!
//! Uploaded images are decoded, resized to a square of the configured side
//! and written to `{public_dir}/{avatars_dir}/{user_id}.{ext}`. Decoding and
//! encoding run on the blocking thread pool.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat};
use tracing::{debug, info, warn};
use uuid::Uuid;

use pb_core::errors::{DomainError, DomainResult, ValidationError};
use pb_core::services::{AvatarStorageTrait, AvatarUpload};
use pb_shared::config::StorageConfig;

/// Extensions accepted from the uploaded file name
const SUPPORTED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp", "bmp"];

/// Stores avatars under the public static directory
#[derive(Debug, Clone)]
pub struct LocalAvatarStorage {
    dir: PathBuf,
    url_prefix: String,
    size: u32,
    max_upload_bytes: usize,
}

impl LocalAvatarStorage {
    pub fn new(config: &StorageConfig) -> Self {
        Self {
            dir: config.avatars_path(),
            url_prefix: config.avatars_dir.trim_matches('/').to_string(),
            size: config.avatar_size,
            max_upload_bytes: config.max_upload_bytes,
        }
    }

    fn invalid(reason: impl Into<String>) -> DomainError {
        ValidationError::InvalidImage {
            reason: reason.into(),
        }
        .into()
    }
}

/// Pick the stored extension: the upload's own if supported, otherwise
/// whatever the bytes look like, otherwise png.
fn output_extension(upload: &AvatarUpload) -> String {
    if let Some(ext) = upload
        .extension()
        .filter(|ext| SUPPORTED_EXTENSIONS.contains(&ext.as_str()))
    {
        return ext;
    }

    image::guess_format(&upload.bytes)
        .ok()
        .and_then(|format| format.extensions_str().first().copied())
        .filter(|ext| SUPPORTED_EXTENSIONS.contains(ext))
        .unwrap_or("png")
        .to_string()
}

fn resize_and_save(
    bytes: &[u8],
    size: u32,
    dir: &Path,
    file_name: &str,
    extension: &str,
) -> Result<(), String> {
    let format = ImageFormat::from_extension(extension)
        .ok_or_else(|| format!("unsupported format {}", extension))?;

    let decoded = image::load_from_memory(bytes).map_err(|e| e.to_string())?;
    let resized = decoded.resize_exact(size, size, FilterType::Lanczos3);
    let normalized = match format {
        ImageFormat::Jpeg => DynamicImage::ImageRgb8(resized.to_rgb8()),
        _ => DynamicImage::ImageRgba8(resized.to_rgba8()),
    };

    std::fs::create_dir_all(dir).map_err(|e| e.to_string())?;
    let path = dir.join(file_name);
    normalized
        .save_with_format(&path, format)
        .map_err(|e| e.to_string())?;

    // Drop earlier avatars of the same user stored with another extension
    if let Some(stem) = Path::new(file_name).file_stem() {
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let other = entry.path();
                if other != path && other.file_stem() == Some(stem) {
                    let _ = std::fs::remove_file(other);
                }
            }
        }
    }

    Ok(())
}

#[async_trait]
impl AvatarStorageTrait for LocalAvatarStorage {
    async fn store_avatar(&self, user_id: Uuid, upload: AvatarUpload) -> DomainResult<String> {
        if upload.bytes.is_empty() {
            return Err(Self::invalid("empty file"));
        }
        if upload.bytes.len() > self.max_upload_bytes {
            return Err(Self::invalid(format!(
                "file exceeds {} bytes",
                self.max_upload_bytes
            )));
        }

        let extension = output_extension(&upload);
        let file_name = format!("{}.{}", user_id, extension);
        debug!(user_id = %user_id, file = %file_name, "Storing avatar");

        let dir = self.dir.clone();
        let size = self.size;
        let target = file_name.clone();
        let bytes = upload.bytes;

        tokio::task::spawn_blocking(move || resize_and_save(&bytes, size, &dir, &target, &extension))
            .await
            .map_err(|e| DomainError::internal(format!("Avatar task failed: {}", e)))?
            .map_err(|reason| {
                warn!(user_id = %user_id, reason = %reason, "Avatar rejected");
                Self::invalid(reason)
            })?;

        info!(user_id = %user_id, file = %file_name, "Avatar stored");
        Ok(format!("{}/{}", self.url_prefix, file_name))
    }
}
