//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::error;
use crate::handlers;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Songstash API",
        version = "0.1.0",
        description = "Minimal song library backend: list audio files with presigned download URLs and upload songs with optional cover art to an object store."
    ),
    paths(
        handlers::songs::list_songs,
        handlers::upload::upload_song,
    ),
    components(schemas(
        handlers::songs::TrackResponse,
        handlers::songs::MessageResponse,
        handlers::upload::UploadResponse,
        error::ErrorResponse,
    )),
    tags(
        (name = "songs", description = "Song listing and upload")
    )
)]
pub struct ApiDoc;
