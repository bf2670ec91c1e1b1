//! Configuration module
//!
//! Environment-driven configuration for the API and storage gateway.
//! All settings are read once at startup via [`Config::from_env`] and
//! validated before the server binds.

use std::env;

use crate::storage_types::StorageBackend;

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_URL_EXPIRY_SECS: u64 = 3600;
const MAX_SONG_SIZE_MB: usize = 100;

/// Application configuration.
#[derive(Clone, Debug)]
pub struct Config {
    pub server_port: u16,
    pub cors_origins: Vec<String>,
    pub environment: String,
    // Storage configuration
    pub storage_backend: Option<StorageBackend>,
    pub s3_bucket: Option<String>,
    pub s3_region: Option<String>,
    pub s3_endpoint: Option<String>, // Custom endpoint for S3-compatible providers
    pub aws_region: Option<String>,
    pub local_storage_path: Option<String>,
    pub local_storage_base_url: Option<String>,
    // Key layout
    pub song_prefix: String,
    pub image_prefix: String,
    // Presigned URL lifetime
    pub presigned_url_expiry_secs: u64,
    // Upload limits
    pub max_song_size_bytes: usize,
    pub audio_allowed_extensions: Vec<String>,
}

impl Config {
    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        let env = self.environment.to_lowercase();
        env == "production" || env == "prod"
    }

    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        let environment = env::var("ENVIRONMENT")
            .or_else(|_| env::var("APP_ENV"))
            .unwrap_or_else(|_| "development".to_string());

        let cors_origins: Vec<String> = env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .collect();

        let storage_backend =
            env::var("STORAGE_BACKEND")
                .ok()
                .and_then(|s| match s.to_lowercase().as_str() {
                    "s3" => Some(StorageBackend::S3),
                    "local" => Some(StorageBackend::Local),
                    _ => None,
                });

        let max_song_size_mb = env::var("MAX_SONG_SIZE_MB")
            .unwrap_or_else(|_| MAX_SONG_SIZE_MB.to_string())
            .parse::<usize>()
            .unwrap_or(MAX_SONG_SIZE_MB);

        let audio_allowed_extensions = env::var("AUDIO_ALLOWED_EXTENSIONS")
            .unwrap_or_else(|_| "mp3,wav,aac,m4a,ogg".to_string())
            .split(',')
            .map(|s| s.trim().to_lowercase())
            .collect();

        let config = Config {
            server_port: env::var("PORT")
                .unwrap_or_else(|_| DEFAULT_PORT.to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number"))?,
            cors_origins,
            environment,
            storage_backend,
            s3_bucket: env::var("S3_BUCKET").ok(),
            s3_region: env::var("S3_REGION").ok(),
            s3_endpoint: env::var("S3_ENDPOINT").ok(),
            aws_region: env::var("AWS_REGION").ok(),
            local_storage_path: env::var("LOCAL_STORAGE_PATH").ok(),
            local_storage_base_url: env::var("LOCAL_STORAGE_BASE_URL").ok(),
            song_prefix: env::var("SONG_PREFIX")
                .unwrap_or_else(|_| "song".to_string())
                .trim_matches('/')
                .to_string(),
            image_prefix: env::var("IMAGE_PREFIX")
                .unwrap_or_else(|_| "images".to_string())
                .trim_matches('/')
                .to_string(),
            presigned_url_expiry_secs: env::var("PRESIGNED_URL_EXPIRY_SECS")
                .unwrap_or_else(|_| DEFAULT_URL_EXPIRY_SECS.to_string())
                .parse()
                .unwrap_or(DEFAULT_URL_EXPIRY_SECS),
            max_song_size_bytes: max_song_size_mb * 1024 * 1024,
            audio_allowed_extensions,
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.is_production() && self.cors_origins.iter().any(|o| o.trim() == "*") {
            return Err(anyhow::anyhow!(
                "CORS_ORIGINS cannot be '*' in production. Please specify explicit origins."
            ));
        }

        if self.song_prefix.is_empty() || self.image_prefix.is_empty() {
            return Err(anyhow::anyhow!(
                "SONG_PREFIX and IMAGE_PREFIX must not be empty"
            ));
        }

        if self.audio_allowed_extensions.is_empty() {
            return Err(anyhow::anyhow!(
                "AUDIO_ALLOWED_EXTENSIONS must list at least one extension"
            ));
        }

        let backend = self.storage_backend.unwrap_or(StorageBackend::S3);
        match backend {
            StorageBackend::S3 => {
                if self.s3_bucket.is_none() {
                    return Err(anyhow::anyhow!(
                        "S3_BUCKET must be set when using S3 storage backend"
                    ));
                }
                if self.s3_region.is_none() && self.aws_region.is_none() {
                    return Err(anyhow::anyhow!(
                        "S3_REGION or AWS_REGION must be set when using S3 storage backend"
                    ));
                }
            }
            StorageBackend::Local => {
                if self.local_storage_path.is_none() {
                    return Err(anyhow::anyhow!(
                        "LOCAL_STORAGE_PATH must be set when using local storage backend"
                    ));
                }
                if self.local_storage_base_url.is_none() {
                    return Err(anyhow::anyhow!(
                        "LOCAL_STORAGE_BASE_URL must be set when using local storage backend"
                    ));
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> Config {
        Config {
            server_port: 5000,
            cors_origins: vec!["*".to_string()],
            environment: "development".to_string(),
            storage_backend: Some(StorageBackend::S3),
            s3_bucket: Some("songs".to_string()),
            s3_region: Some("ap-southeast-2".to_string()),
            s3_endpoint: None,
            aws_region: None,
            local_storage_path: None,
            local_storage_base_url: None,
            song_prefix: "song".to_string(),
            image_prefix: "images".to_string(),
            presigned_url_expiry_secs: 3600,
            max_song_size_bytes: 100 * 1024 * 1024,
            audio_allowed_extensions: vec!["mp3".to_string(), "wav".to_string()],
        }
    }

    #[test]
    fn valid_s3_config_passes() {
        assert!(base_config().validate().is_ok());
    }

    #[test]
    fn s3_backend_requires_bucket_and_region() {
        let mut config = base_config();
        config.s3_bucket = None;
        assert!(config.validate().is_err());

        let mut config = base_config();
        config.s3_region = None;
        config.aws_region = None;
        assert!(config.validate().is_err());
    }

    #[test]
    fn local_backend_requires_path_and_base_url() {
        let mut config = base_config();
        config.storage_backend = Some(StorageBackend::Local);
        assert!(config.validate().is_err());

        config.local_storage_path = Some("/tmp/songstash".to_string());
        config.local_storage_base_url = Some("http://localhost:5000/files".to_string());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn wildcard_cors_rejected_in_production() {
        let mut config = base_config();
        config.environment = "production".to_string();
        assert!(config.validate().is_err());

        config.cors_origins = vec!["https://player.example.com".to_string()];
        assert!(config.validate().is_ok());
    }
}
