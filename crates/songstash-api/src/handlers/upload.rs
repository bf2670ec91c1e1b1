use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;
use crate::utils::upload::{
    file_stem, has_audio_extension, sanitize_filename, validate_file_size,
};
use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use songstash_core::AppError;
use std::sync::Arc;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct UploadResponse {
    pub message: String,
}

/// One uploaded multipart file field.
struct FileField {
    filename: Option<String>,
    data: Vec<u8>,
}

#[utoipa::path(
    post,
    path = "/upload_song",
    tag = "songs",
    request_body(content = inline(Object), content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Song uploaded successfully", body = UploadResponse),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 413, description = "File too large", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, multipart), fields(operation = "upload_song"))]
pub async fn upload_song(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Response, HttpAppError> {
    let library = &state.library;

    let mut song: Option<FileField> = None;
    let mut image: Option<FileField> = None;

    while let Some(field) = multipart.next_field().await? {
        let field_name = field.name().map(|s| s.to_string()).unwrap_or_default();
        match field_name.as_str() {
            "song" | "image" => {
                let filename = field.file_name().map(|s| s.to_string());
                let data = field
                    .bytes()
                    .await
                    .map_err(HttpAppError::from)?
                    .to_vec();
                let file = FileField { filename, data };
                if field_name == "song" {
                    song = Some(file);
                } else {
                    image = Some(file);
                }
            }
            _ => {}
        }
    }

    let song = song.ok_or(AppError::InvalidInput("Song file missing".to_string()))?;
    let song_filename = match song.filename.as_deref() {
        Some(name) if !name.is_empty() => name,
        _ => return Err(AppError::InvalidInput("No song selected".to_string()).into()),
    };

    let song_filename = sanitize_filename(song_filename)?;

    if !has_audio_extension(&song_filename, &library.audio_allowed_extensions) {
        return Err(AppError::InvalidInput("Only audio files allowed".to_string()).into());
    }

    validate_file_size(song.data.len(), library.max_song_size)?;

    let song_key = format!("{}/{}", library.song_prefix, song_filename);
    state
        .storage
        .put_object(&song_key, song.data, "application/octet-stream")
        .await?;

    // Optional cover art: always stored under a .jpg key derived from the
    // song's basename, whatever the source file was called.
    if let Some(image) = image {
        if image.filename.as_deref().is_some_and(|name| !name.is_empty()) {
            let image_key = format!(
                "{}/{}.jpg",
                library.image_prefix,
                file_stem(&song_filename)
            );
            state
                .storage
                .put_object(&image_key, image.data, "image/jpeg")
                .await?;
        }
    }

    tracing::info!(key = %song_key, "Song uploaded");

    Ok((
        StatusCode::CREATED,
        Json(UploadResponse {
            message: format!("Uploaded {} successfully", song_filename),
        }),
    )
        .into_response())
}
