//! Application state
//!
//! The storage client is constructed once at startup and injected into the
//! handler layer through [`AppState`]; handlers never reach for globals.

use songstash_core::Config;
use songstash_storage::Storage;
use std::sync::Arc;
use std::time::Duration;

/// Key layout and listing/upload policy for the song library.
#[derive(Clone)]
pub struct LibraryConfig {
    /// Prefix for audio objects, without trailing slash (e.g. "song").
    pub song_prefix: String,
    /// Prefix for cover art objects, without trailing slash (e.g. "images").
    pub image_prefix: String,
    /// Lifetime of presigned download URLs.
    pub url_expiry: Duration,
    /// Lowercased audio extensions accepted for upload and listing.
    pub audio_allowed_extensions: Vec<String>,
    /// Maximum accepted song payload in bytes.
    pub max_song_size: usize,
}

impl From<&Config> for LibraryConfig {
    fn from(config: &Config) -> Self {
        LibraryConfig {
            song_prefix: config.song_prefix.clone(),
            image_prefix: config.image_prefix.clone(),
            url_expiry: Duration::from_secs(config.presigned_url_expiry_secs),
            audio_allowed_extensions: config.audio_allowed_extensions.clone(),
            max_song_size: config.max_song_size_bytes,
        }
    }
}

/// Main application state: one long-lived storage client plus library policy.
#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<dyn Storage>,
    pub library: LibraryConfig,
}

impl AppState {
    pub fn new(config: &Config, storage: Arc<dyn Storage>) -> Self {
        AppState {
            storage,
            library: LibraryConfig::from(config),
        }
    }
}

fn _assert_app_state_send_sync() {
    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}
    assert_send::<AppState>();
    assert_sync::<AppState>();
}
