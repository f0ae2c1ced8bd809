//! Tests for the filesystem artifact store.

use billet_interface::ArtifactStore;
use billet_storage::FileSystemArtifactStore;
use chrono::{Duration, Utc};

#[tokio::test]
async fn test_put_writes_file_and_returns_url() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let store = FileSystemArtifactStore::new(dir.path())?;

    let handle = store.put(b"jpeg bytes", "a chef's knife on granite").await?;

    assert!(handle.url.starts_with("file://"));
    assert!(handle.url.ends_with(".jpg"));

    let path = handle.url.strip_prefix("file://").unwrap();
    let written = std::fs::read(path)?;
    assert_eq!(written, b"jpeg bytes");
    Ok(())
}

#[tokio::test]
async fn test_file_name_carries_sanitized_slug() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let store = FileSystemArtifactStore::new(dir.path())?;

    let handle = store.put(b"data", "knife & board!").await?;

    assert!(handle.url.contains("knife___board_"));
    Ok(())
}

#[tokio::test]
async fn test_expiry_reflects_configured_ttl() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let store =
        FileSystemArtifactStore::new(dir.path())?.with_url_ttl(Duration::minutes(5));

    let before = Utc::now();
    let handle = store.put(b"data", "prompt").await?;
    let after = Utc::now();

    assert!(handle.expires_at >= before + Duration::minutes(5));
    assert!(handle.expires_at <= after + Duration::minutes(5));
    Ok(())
}

#[tokio::test]
async fn test_missing_parent_directory_is_created() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let nested = dir.path().join("artifacts/images");

    let store = FileSystemArtifactStore::new(&nested)?;
    let handle = store.put(b"data", "prompt").await?;

    assert!(handle.url.contains("artifacts/images"));
    Ok(())
}

#[tokio::test]
async fn test_no_temp_files_left_behind() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let store = FileSystemArtifactStore::new(dir.path())?;

    store.put(b"data", "prompt").await?;

    let leftovers: Vec<_> = std::fs::read_dir(dir.path())?
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "tmp"))
        .collect();
    assert!(leftovers.is_empty());
    Ok(())
}
