//! Avatar storage against a temporary public directory

use image::{ImageFormat, Rgba, RgbaImage};
use pb_core::errors::{DomainError, ValidationError};
use pb_core::services::{AvatarStorageTrait, AvatarUpload};
use pb_infra::avatar::LocalAvatarStorage;
use pb_shared::config::StorageConfig;
use std::io::Cursor;
use tempfile::TempDir;
use uuid::Uuid;

fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let image = RgbaImage::from_pixel(width, height, Rgba([200, 10, 10, 255]));
    let mut buffer = Cursor::new(Vec::new());
    image.write_to(&mut buffer, ImageFormat::Png).unwrap();
    buffer.into_inner()
}

fn storage(dir: &TempDir) -> LocalAvatarStorage {
    LocalAvatarStorage::new(&StorageConfig::default().with_public_dir(dir.path()))
}

#[tokio::test]
async fn stores_resized_avatar() {
    let dir = TempDir::new().unwrap();
    let storage = storage(&dir);
    let user_id = Uuid::new_v4();

    let url = storage
        .store_avatar(
            user_id,
            AvatarUpload {
                bytes: png_bytes(640, 480),
                file_name: Some("photo.png".to_string()),
                content_type: Some("image/png".to_string()),
            },
        )
        .await
        .unwrap();

    assert_eq!(url, format!("avatars/{}.png", user_id));
    let stored = dir.path().join("avatars").join(format!("{}.png", user_id));
    assert_eq!(image::image_dimensions(&stored).unwrap(), (250, 250));
}

#[tokio::test]
async fn jpeg_upload_is_written_as_jpeg() {
    let dir = TempDir::new().unwrap();
    let storage = storage(&dir);
    let user_id = Uuid::new_v4();

    // PNG bytes under a .jpg name are re-encoded as JPEG
    let url = storage
        .store_avatar(
            user_id,
            AvatarUpload {
                bytes: png_bytes(100, 300),
                file_name: Some("photo.jpg".to_string()),
                content_type: None,
            },
        )
        .await
        .unwrap();

    assert!(url.ends_with(".jpg"));
    let stored = dir.path().join("avatars").join(format!("{}.jpg", user_id));
    assert_eq!(image::image_dimensions(&stored).unwrap(), (250, 250));
}

#[tokio::test]
async fn replaces_previous_avatar_with_other_extension() {
    let dir = TempDir::new().unwrap();
    let storage = storage(&dir);
    let user_id = Uuid::new_v4();

    for name in ["first.png", "second.gif"] {
        storage
            .store_avatar(
                user_id,
                AvatarUpload {
                    bytes: png_bytes(50, 50),
                    file_name: Some(name.to_string()),
                    content_type: None,
                },
            )
            .await
            .unwrap();
    }

    assert!(!dir.path().join("avatars").join(format!("{}.png", user_id)).exists());
    assert!(dir.path().join("avatars").join(format!("{}.gif", user_id)).exists());
}

#[tokio::test]
async fn rejects_undecodable_bytes() {
    let dir = TempDir::new().unwrap();
    let result = storage(&dir)
        .store_avatar(
            Uuid::new_v4(),
            AvatarUpload {
                bytes: b"definitely not an image".to_vec(),
                file_name: Some("x.png".to_string()),
                content_type: None,
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(DomainError::ValidationErr(ValidationError::InvalidImage { .. }))
    ));
}

#[tokio::test]
async fn rejects_empty_and_oversized_uploads() {
    let dir = TempDir::new().unwrap();
    let mut config = StorageConfig::default().with_public_dir(dir.path());
    config.max_upload_bytes = 16;
    let storage = LocalAvatarStorage::new(&config);

    let empty = storage
        .store_avatar(Uuid::new_v4(), AvatarUpload::default())
        .await;
    assert!(empty.is_err());

    let oversized = storage
        .store_avatar(
            Uuid::new_v4(),
            AvatarUpload {
                bytes: png_bytes(10, 10),
                file_name: Some("x.png".to_string()),
                content_type: None,
            },
        )
        .await;
    assert!(oversized.is_err());
}
