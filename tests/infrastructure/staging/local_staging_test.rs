use sussurro::application::ports::StagingArea;
use sussurro::infrastructure::staging::LocalStagingArea;

fn create_staging() -> (tempfile::TempDir, LocalStagingArea) {
    let dir = tempfile::TempDir::new().unwrap();
    let staging = LocalStagingArea::new(dir.path()).unwrap();
    (dir, staging)
}

#[tokio::test]
async fn given_upload_when_staging_then_file_is_written_with_original_extension() {
    let (dir, staging) = create_staging();

    let staged = staging.stage("interview.mp3", b"audio bytes").await.unwrap();

    assert!(staged.path().starts_with(dir.path()));
    assert_eq!(
        staged.path().extension().and_then(|e| e.to_str()),
        Some("mp3")
    );
    assert_eq!(std::fs::read(staged.path()).unwrap(), b"audio bytes");
}

#[tokio::test]
async fn given_same_filename_twice_when_staging_then_names_never_collide() {
    let (_dir, staging) = create_staging();

    let first = staging.stage("take.wav", b"one").await.unwrap();
    let second = staging.stage("take.wav", b"two").await.unwrap();

    assert_ne!(first.path(), second.path());
}

#[tokio::test]
async fn given_staged_file_when_guard_drops_then_file_is_removed() {
    let (_dir, staging) = create_staging();

    let staged = staging.stage("clip.ogg", b"bytes").await.unwrap();
    let path = staged.path().to_path_buf();
    assert!(path.exists());

    drop(staged);

    assert!(!path.exists());
}

#[tokio::test]
async fn given_leftover_side_file_when_guard_drops_then_side_file_is_removed_too() {
    let (_dir, staging) = create_staging();

    let staged = staging.stage("clip.flac", b"bytes").await.unwrap();
    let side = staged.side_file_path();
    std::fs::write(&side, "orphaned transcript").unwrap();

    drop(staged);

    assert!(!side.exists());
}

#[tokio::test]
async fn given_already_consumed_file_when_guard_drops_then_drop_is_silent() {
    let (_dir, staging) = create_staging();

    let staged = staging.stage("clip.m4a", b"bytes").await.unwrap();
    std::fs::remove_file(staged.path()).unwrap();

    // Must not panic on the missing file.
    drop(staged);
}

#[tokio::test]
async fn given_filename_without_extension_when_staging_then_a_bare_unique_name_is_used() {
    let (_dir, staging) = create_staging();

    let staged = staging.stage("recording", b"bytes").await.unwrap();

    assert!(staged.path().exists());
    assert!(staged.path().extension().is_none());
}
