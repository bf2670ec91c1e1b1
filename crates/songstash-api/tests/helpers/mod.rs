//! Shared test setup: a router backed by local storage in a temp dir.

use axum_test::TestServer;
use songstash_api::setup::routes::api_router;
use songstash_api::state::{AppState, LibraryConfig};
use songstash_storage::{LocalStorage, Storage};
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;

pub struct TestApp {
    pub server: TestServer,
    pub storage: Arc<dyn Storage>,
    _dir: TempDir,
}

pub async fn setup_test_app() -> TestApp {
    let dir = tempfile::tempdir().expect("create temp dir");
    let storage: Arc<dyn Storage> = Arc::new(
        LocalStorage::new(dir.path(), "http://localhost:5000/files".to_string())
            .await
            .expect("create local storage"),
    );

    let state = Arc::new(AppState {
        storage: storage.clone(),
        library: LibraryConfig {
            song_prefix: "song".to_string(),
            image_prefix: "images".to_string(),
            url_expiry: Duration::from_secs(3600),
            audio_allowed_extensions: ["mp3", "wav", "aac", "m4a", "ogg"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            max_song_size: 10 * 1024 * 1024,
        },
    });

    let server = TestServer::new(api_router(state)).expect("start test server");

    TestApp {
        server,
        storage,
        _dir: dir,
    }
}
