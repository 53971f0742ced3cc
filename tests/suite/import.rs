//! File import through the single-writer feed into a running app.

use braille_engine::{MAX_IMPORT_BYTES, TextOrigin, spawn_text_import};
use tempfile::tempdir;

use crate::common::{test_app, write_text};

#[tokio::test]
async fn imported_file_replaces_current_text() {
    let dir = tempdir().unwrap();
    let path = write_text(dir.path(), "story.txt", b"The child\nand the cat\n");

    let mut app = test_app();
    app.load_text(&TextOrigin::CommandLine, "old words");
    spawn_text_import(path, app.feed_sender()).await.unwrap();
    app.process_feed();

    let sequence = app.session().navigator().sequence();
    assert_eq!(sequence.source(), "the child and the cat");
    assert_eq!(sequence.word_count(), 5);
    assert_eq!(app.current_cell().token.label(), "the");
    assert!(app.status_message().unwrap().contains("story.txt"));
}

#[tokio::test]
async fn failed_import_keeps_current_text() {
    let dir = tempdir().unwrap();
    let path = write_text(dir.path(), "binary.bin", &[0xc3, 0x28, 0xa0]);

    let mut app = test_app();
    app.load_text(&TextOrigin::CommandLine, "keep me");
    spawn_text_import(path, app.feed_sender()).await.unwrap();
    app.process_feed();

    assert_eq!(app.session().navigator().sequence().source(), "keep me");
    let status = app.status_message().unwrap();
    assert!(status.starts_with("Import failed"), "{status}");
    assert!(status.contains("UTF-8"), "{status}");
}

#[tokio::test]
async fn oversized_file_is_rejected() {
    let dir = tempdir().unwrap();
    let path = write_text(dir.path(), "big.txt", b"");
    std::fs::File::options()
        .write(true)
        .open(&path)
        .unwrap()
        .set_len(MAX_IMPORT_BYTES + 1)
        .unwrap();

    let mut app = test_app();
    spawn_text_import(path, app.feed_sender()).await.unwrap();
    app.process_feed();

    assert!(app.session().navigator().is_empty());
    assert!(app.status_message().unwrap().contains("limit"));
}

#[tokio::test]
async fn last_completed_text_wins() {
    let dir = tempdir().unwrap();
    let first = write_text(dir.path(), "first.txt", b"first");
    let second = write_text(dir.path(), "second.txt", b"second");

    let mut app = test_app();
    spawn_text_import(first, app.feed_sender()).await.unwrap();
    spawn_text_import(second, app.feed_sender()).await.unwrap();
    app.process_feed();

    assert_eq!(app.session().navigator().sequence().source(), "second");
}
