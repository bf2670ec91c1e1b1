mod helpers;

use helpers::setup_test_app;

#[tokio::test]
async fn test_list_songs_empty_store_returns_404() {
    let app = setup_test_app().await;

    let response = app.server.get("/songs").await;

    assert_eq!(response.status_code(), 404);
    let data: serde_json::Value = response.json();
    assert_eq!(data["message"], "No songs found");
}

#[tokio::test]
async fn test_list_songs_returns_signed_urls() {
    let app = setup_test_app().await;

    app.storage
        .put_object("song/beat.mp3", b"id3".to_vec(), "audio/mpeg")
        .await
        .unwrap();
    app.storage
        .put_object("images/beat.jpg", b"jpg".to_vec(), "image/jpeg")
        .await
        .unwrap();

    let response = app.server.get("/songs").await;

    assert_eq!(response.status_code(), 200);
    let data: serde_json::Value = response.json();
    let tracks = data.as_array().unwrap();
    assert_eq!(tracks.len(), 1);
    assert_eq!(tracks[0]["file"], "song/beat.mp3");
    assert_eq!(tracks[0]["url"], "http://localhost:5000/files/song/beat.mp3");
    assert_eq!(
        tracks[0]["image"],
        "http://localhost:5000/files/images/beat.jpg"
    );
}

#[tokio::test]
async fn test_list_songs_filters_non_audio_objects() {
    let app = setup_test_app().await;

    app.storage
        .put_object("song/liner-notes.txt", b"notes".to_vec(), "text/plain")
        .await
        .unwrap();
    app.storage
        .put_object("song/take.wav", b"riff".to_vec(), "audio/wav")
        .await
        .unwrap();

    let response = app.server.get("/songs").await;

    assert_eq!(response.status_code(), 200);
    let data: serde_json::Value = response.json();
    let tracks = data.as_array().unwrap();
    assert_eq!(tracks.len(), 1);
    assert_eq!(tracks[0]["file"], "song/take.wav");
}

#[tokio::test]
async fn test_list_songs_extension_match_is_case_insensitive() {
    let app = setup_test_app().await;

    app.storage
        .put_object("song/LOUD.MP3", b"id3".to_vec(), "audio/mpeg")
        .await
        .unwrap();

    let response = app.server.get("/songs").await;

    assert_eq!(response.status_code(), 200);
    let data: serde_json::Value = response.json();
    assert_eq!(data[0]["file"], "song/LOUD.MP3");
}

/// The image URL is derived from the song basename only; it is signed even
/// when the image was never uploaded, and no other key is probed.
#[tokio::test]
async fn test_list_songs_signs_image_key_without_existence_check() {
    let app = setup_test_app().await;

    app.storage
        .put_object("song/orphan.ogg", b"ogg".to_vec(), "audio/ogg")
        .await
        .unwrap();

    let response = app.server.get("/songs").await;

    assert_eq!(response.status_code(), 200);
    let data: serde_json::Value = response.json();
    assert_eq!(
        data[0]["image"],
        "http://localhost:5000/files/images/orphan.jpg"
    );
}
