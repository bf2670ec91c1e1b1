mod helpers;

use axum_test::multipart::{MultipartForm, Part};
use helpers::setup_test_app;

fn song_part(filename: &str) -> Part {
    Part::bytes(b"id3fakeaudio".to_vec())
        .file_name(filename)
        .mime_type("audio/mpeg")
}

#[tokio::test]
async fn test_upload_song_then_listing_includes_it() {
    let app = setup_test_app().await;

    let form = MultipartForm::new().add_part("song", song_part("Track One.MP3"));
    let response = app.server.post("/upload_song").multipart(form).await;

    assert_eq!(response.status_code(), 201);
    let data: serde_json::Value = response.json();
    assert_eq!(data["message"], "Uploaded Track_One.MP3 successfully");

    let response = app.server.get("/songs").await;
    assert_eq!(response.status_code(), 200);
    let data: serde_json::Value = response.json();
    assert_eq!(data[0]["file"], "song/Track_One.MP3");
}

#[tokio::test]
async fn test_upload_missing_song_field_is_400() {
    let app = setup_test_app().await;

    let form = MultipartForm::new().add_text("title", "no file here");
    let response = app.server.post("/upload_song").multipart(form).await;

    assert_eq!(response.status_code(), 400);
    let data: serde_json::Value = response.json();
    assert_eq!(data["error"], "Song file missing");
}

#[tokio::test]
async fn test_upload_empty_filename_is_400() {
    let app = setup_test_app().await;

    let form = MultipartForm::new().add_part(
        "song",
        Part::bytes(b"id3".to_vec())
            .file_name("")
            .mime_type("audio/mpeg"),
    );
    let response = app.server.post("/upload_song").multipart(form).await;

    assert_eq!(response.status_code(), 400);
    let data: serde_json::Value = response.json();
    assert_eq!(data["error"], "No song selected");
}

#[tokio::test]
async fn test_upload_non_audio_extension_is_400() {
    let app = setup_test_app().await;

    let form = MultipartForm::new().add_part(
        "song",
        Part::bytes(b"hello".to_vec())
            .file_name("notes.txt")
            .mime_type("text/plain"),
    );
    let response = app.server.post("/upload_song").multipart(form).await;

    assert_eq!(response.status_code(), 400);
    let data: serde_json::Value = response.json();
    assert_eq!(data["error"], "Only audio files allowed");

    // Nothing was stored.
    let objects = app.storage.list("song").await.unwrap();
    assert!(objects.is_empty());
}

#[tokio::test]
async fn test_upload_png_cover_is_stored_under_jpg_key() {
    let app = setup_test_app().await;

    let form = MultipartForm::new()
        .add_part("song", song_part("beat.mp3"))
        .add_part(
            "image",
            Part::bytes(b"png-bytes".to_vec())
                .file_name("cover.png")
                .mime_type("image/png"),
        );
    let response = app.server.post("/upload_song").multipart(form).await;

    assert_eq!(response.status_code(), 201);

    let images = app.storage.list("images").await.unwrap();
    assert_eq!(images.len(), 1);
    assert_eq!(images[0].key, "images/beat.jpg");

    let response = app.server.get("/songs").await;
    assert_eq!(response.status_code(), 200);
    let data: serde_json::Value = response.json();
    assert_eq!(data[0]["file"], "song/beat.mp3");
    assert_eq!(
        data[0]["image"],
        "http://localhost:5000/files/images/beat.jpg"
    );
}

#[tokio::test]
async fn test_upload_image_with_empty_filename_is_skipped() {
    let app = setup_test_app().await;

    let form = MultipartForm::new()
        .add_part("song", song_part("beat.mp3"))
        .add_part(
            "image",
            Part::bytes(b"png-bytes".to_vec())
                .file_name("")
                .mime_type("image/png"),
        );
    let response = app.server.post("/upload_song").multipart(form).await;

    assert_eq!(response.status_code(), 201);

    let images = app.storage.list("images").await.unwrap();
    assert!(images.is_empty());
}

#[tokio::test]
async fn test_upload_overwrites_existing_song() {
    let app = setup_test_app().await;

    for _ in 0..2 {
        let form = MultipartForm::new().add_part("song", song_part("beat.mp3"));
        let response = app.server.post("/upload_song").multipart(form).await;
        assert_eq!(response.status_code(), 201);
    }

    let objects = app.storage.list("song").await.unwrap();
    assert_eq!(objects.len(), 1);
}

#[tokio::test]
async fn test_upload_oversize_song_is_413() {
    let app = setup_test_app().await;

    // Library limit in the test app is 10 MB.
    let form = MultipartForm::new().add_part(
        "song",
        Part::bytes(vec![0u8; 11 * 1024 * 1024])
            .file_name("big.mp3")
            .mime_type("audio/mpeg"),
    );
    let response = app.server.post("/upload_song").multipart(form).await;

    assert_eq!(response.status_code(), 413);
}
