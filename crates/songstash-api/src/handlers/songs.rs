use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;
use crate::utils::upload::audio_basename;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

/// One listed track: the object key, a presigned download URL, and a
/// presigned cover art URL when one could be signed.
#[derive(Debug, Serialize, ToSchema)]
pub struct TrackResponse {
    pub file: String,
    pub url: String,
    pub image: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

#[utoipa::path(
    get,
    path = "/songs",
    tag = "songs",
    responses(
        (status = 200, description = "Tracks with presigned download URLs", body = [TrackResponse]),
        (status = 404, description = "No songs in the store", body = MessageResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state), fields(operation = "list_songs"))]
pub async fn list_songs(State(state): State<Arc<AppState>>) -> Result<Response, HttpAppError> {
    let library = &state.library;

    let objects = state.storage.list(&library.song_prefix).await?;

    if objects.is_empty() {
        return Ok((
            StatusCode::NOT_FOUND,
            Json(MessageResponse {
                message: "No songs found".to_string(),
            }),
        )
            .into_response());
    }

    let mut tracks = Vec::with_capacity(objects.len());
    for object in objects {
        // Non-audio keys under the prefix are skipped, not an error.
        let Some(basename) = audio_basename(&object.key, &library.audio_allowed_extensions)
        else {
            continue;
        };

        let url = state
            .storage
            .presigned_get_url(&object.key, library.url_expiry)
            .await?;

        // Cover art is keyed by the song's basename only; no other key is
        // probed. Signing failure degrades to a missing image.
        let image_key = format!("{}/{}.jpg", library.image_prefix, basename);
        let image = state
            .storage
            .presigned_get_url(&image_key, library.url_expiry)
            .await
            .ok();

        tracks.push(TrackResponse {
            file: object.key,
            url,
            image,
        });
    }

    tracing::debug!(count = tracks.len(), "Listed tracks");

    Ok((StatusCode::OK, Json(tracks)).into_response())
}
