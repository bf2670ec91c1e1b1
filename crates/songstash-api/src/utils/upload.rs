//! Common utilities for the upload and listing handlers

use songstash_core::AppError;

/// Sanitize filename to prevent path traversal and invalid characters.
/// Directory components are stripped; characters outside `[A-Za-z0-9._-]`
/// become `_`. Case and extension are preserved, so "Track One.MP3"
/// sanitizes to "Track_One.MP3".
pub fn sanitize_filename(filename: &str) -> Result<String, AppError> {
    const MAX_FILENAME_LENGTH: usize = 255;

    let path = std::path::Path::new(filename);
    let filename_only = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(filename);

    if filename_only.contains("..") {
        return Err(AppError::InvalidInput(
            "Filename contains invalid path traversal".to_string(),
        ));
    }

    let sanitized: String = filename_only
        .chars()
        .take(MAX_FILENAME_LENGTH)
        .map(|c| {
            if c.is_alphanumeric() || c == '.' || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();

    if sanitized.trim_matches(['_', '.']).is_empty() {
        return Err(AppError::InvalidInput(
            "Filename contains no usable characters".to_string(),
        ));
    }

    Ok(sanitized)
}

/// Check whether a filename carries one of the allowed audio extensions
/// (case-insensitive). A name without a dot has no extension and fails.
pub fn has_audio_extension(filename: &str, allowed_extensions: &[String]) -> bool {
    match filename.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => {
            allowed_extensions.contains(&ext.to_lowercase())
        }
        _ => false,
    }
}

/// Filename without its extension; the whole name when there is no dot.
pub fn file_stem(filename: &str) -> &str {
    match filename.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => filename,
    }
}

/// For a listed object key, return the basename without extension when the
/// extension is in the allowed audio set; `None` for non-audio keys.
pub fn audio_basename<'a>(key: &'a str, allowed_extensions: &[String]) -> Option<&'a str> {
    let basename = key.rsplit('/').next().unwrap_or(key);
    if has_audio_extension(basename, allowed_extensions) {
        Some(file_stem(basename))
    } else {
        None
    }
}

/// Validate file size
pub fn validate_file_size(file_size: usize, max_size: usize) -> Result<(), AppError> {
    if file_size > max_size {
        return Err(AppError::PayloadTooLarge(format!(
            "File size exceeds maximum allowed size of {} MB",
            max_size / 1024 / 1024
        )));
    }
    Ok(())
}
