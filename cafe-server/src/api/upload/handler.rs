//! Image Upload Handler
//!
//! 文件保存为 `{WORK_DIR}/public/{filename}{.原始扩展名}`，同名覆盖。

use std::path::Path as FsPath;

use axum::Json;
use axum::body::Bytes;
use axum::extract::{Multipart, Path, State};
use axum::response::{IntoResponse, Response};
use http::{StatusCode, header};
use shared::models::MessageResponse;

use crate::core::ServerState;
use crate::utils::validation::MAX_NAME_LEN;
use crate::utils::{AppError, AppResult};

/// Supported image formats
const SUPPORTED_FORMATS: &[&str] = &["png", "jpg", "jpeg", "webp", "gif"];

/// Reject empty names, path separators and parent references
fn validate_filename(name: &str) -> AppResult<()> {
    if name.trim().is_empty()
        || name.contains("..")
        || name.contains('/')
        || name.contains('\\')
        || name.chars().any(char::is_control)
        || name.chars().count() > MAX_NAME_LEN
    {
        return Err(AppError::validation(format!("Invalid filename '{name}'")));
    }
    Ok(())
}

/// Lower-cased extension of the client's original file name
fn extension_of(original: &str) -> AppResult<String> {
    let ext = FsPath::new(original)
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .ok_or_else(|| AppError::validation(format!("Invalid file extension for: {original}")))?;

    if !SUPPORTED_FORMATS.contains(&ext.as_str()) {
        return Err(AppError::validation(format!(
            "Unsupported file format '{}'. Supported: {}",
            ext,
            SUPPORTED_FORMATS.join(", ")
        )));
    }
    Ok(ext)
}

/// Size limit plus a real decode so only images are stored
fn validate_image(data: &[u8], max_bytes: usize) -> AppResult<()> {
    if data.is_empty() {
        return Err(AppError::validation("Empty file provided"));
    }
    if data.len() > max_bytes {
        return Err(AppError::validation(format!(
            "File too large. Maximum size is {max_bytes} bytes"
        )));
    }
    image::load_from_memory(data)
        .map_err(|e| AppError::validation(format!("Invalid image file: {e}")))?;
    Ok(())
}

/// POST /upload
pub async fn upload(
    State(state): State<ServerState>,
    mut multipart: Multipart,
) -> AppResult<Json<MessageResponse>> {
    let mut filename: Option<String> = None;
    let mut file: Option<(String, Bytes)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::validation(format!("Invalid multipart request: {e}")))?
    {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("filename") => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::validation(format!("Multipart error: {e}")))?;
                filename = Some(text.trim().to_string());
            }
            Some("file") => {
                let original = field
                    .file_name()
                    .map(str::to_string)
                    .ok_or_else(|| AppError::validation("No filename provided in file field"))?;
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::validation(format!("Multipart error: {e}")))?;
                file = Some((original, data));
            }
            _ => {}
        }
    }

    let filename =
        filename.ok_or_else(|| AppError::validation("No 'filename' field found"))?;
    let (original, data) =
        file.ok_or_else(|| AppError::validation("No 'file' field found"))?;

    validate_filename(&filename)?;
    let ext = extension_of(&original)?;
    validate_image(&data, state.config.max_upload_bytes)?;

    let public_dir = state.config.public_dir();
    tokio::fs::create_dir_all(&public_dir)
        .await
        .map_err(|e| AppError::storage(format!("Failed to create public directory: {e}")))?;

    let stored = format!("{filename}.{ext}");
    tokio::fs::write(public_dir.join(&stored), &data)
        .await
        .map_err(|e| AppError::storage(format!("Failed to save file: {e}")))?;

    tracing::info!(
        original_name = %original,
        stored = %stored,
        size = data.len(),
        "Image uploaded"
    );
    Ok(Json(MessageResponse::new("File uploaded successfully")))
}

/// GET /public/:filename
pub async fn serve(State(state): State<ServerState>, Path(filename): Path<String>) -> Response {
    if validate_filename(&filename).is_err() {
        return (StatusCode::BAD_REQUEST, "Invalid filename").into_response();
    }

    let path = state.config.public_dir().join(&filename);
    match tokio::fs::read(&path).await {
        Ok(content) => {
            let mime = mime_guess::from_path(&path).first_or_octet_stream();
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, mime.essence_str().to_string())],
                content,
            )
                .into_response()
        }
        Err(_) => (
            StatusCode::NOT_FOUND,
            Json(MessageResponse::new("File not found")),
        )
            .into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filename_rules() {
        assert!(validate_filename("latte").is_ok());
        assert!(validate_filename("flat-white_2").is_ok());
        assert!(validate_filename("").is_err());
        assert!(validate_filename("../etc/passwd").is_err());
        assert!(validate_filename("a/b").is_err());
        assert!(validate_filename("a\\b").is_err());
    }

    #[test]
    fn extension_whitelist() {
        assert_eq!(extension_of("photo.JPG").unwrap(), "jpg");
        assert_eq!(extension_of("anim.gif").unwrap(), "gif");
        assert!(extension_of("script.sh").is_err());
        assert!(extension_of("noext").is_err());
    }

    #[test]
    fn image_bytes_must_decode() {
        assert!(validate_image(b"", 1024).is_err());
        assert!(validate_image(b"definitely not a png", 1024).is_err());

        let mut png = Vec::new();
        image::RgbImage::new(2, 2)
            .write_to(&mut std::io::Cursor::new(&mut png), image::ImageFormat::Png)
            .unwrap();
        assert!(validate_image(&png, 1024 * 1024).is_ok());
        assert!(validate_image(&png, 8).is_err());
    }
}
