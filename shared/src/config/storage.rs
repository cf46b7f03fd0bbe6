//! File storage configuration for uploaded avatars

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Static file and avatar storage settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Directory served as static content
    #[serde(default = "default_public_dir")]
    pub public_dir: PathBuf,

    /// Sub-directory of `public_dir` holding avatars
    #[serde(default = "default_avatars_dir")]
    pub avatars_dir: String,

    /// Side length in pixels of stored avatars
    #[serde(default = "default_avatar_size")]
    pub avatar_size: u32,

    /// Largest accepted upload in bytes
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            public_dir: default_public_dir(),
            avatars_dir: default_avatars_dir(),
            avatar_size: default_avatar_size(),
            max_upload_bytes: default_max_upload_bytes(),
        }
    }
}

impl StorageConfig {
    /// Create with a custom public directory
    pub fn with_public_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.public_dir = dir.into();
        self
    }

    /// Absolute location of the avatars directory
    pub fn avatars_path(&self) -> PathBuf {
        self.public_dir.join(&self.avatars_dir)
    }
}

fn default_public_dir() -> PathBuf {
    PathBuf::from("public")
}

fn default_avatars_dir() -> String {
    String::from("avatars")
}

fn default_avatar_size() -> u32 {
    250
}

fn default_max_upload_bytes() -> usize {
    5 * 1024 * 1024
}
