//! Plain-text file import.
//!
//! Reads on the runtime, then hands the finished string to the text feed.
//! Failures are reported through the feed as well; the session never sees
//! partial data.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::feed::{TextFeedSender, TextOrigin};

pub const MAX_IMPORT_BYTES: u64 = 1024 * 1024;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{} is {size} bytes (limit {limit})", path.display())]
    TooLarge { path: PathBuf, size: u64, limit: u64 },
    #[error("{} is not valid UTF-8 text", path.display())]
    NotUtf8 { path: PathBuf },
}

pub async fn read_text_file(path: &Path) -> Result<String, ImportError> {
    let read_err = |source| ImportError::Read {
        path: path.to_path_buf(),
        source,
    };

    let metadata = tokio::fs::metadata(path).await.map_err(read_err)?;
    if metadata.len() > MAX_IMPORT_BYTES {
        return Err(ImportError::TooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            limit: MAX_IMPORT_BYTES,
        });
    }

    let bytes = tokio::fs::read(path).await.map_err(read_err)?;
    String::from_utf8(bytes).map_err(|_| ImportError::NotUtf8 {
        path: path.to_path_buf(),
    })
}

/// Import `path` in the background and deliver the result through `feed`.
pub fn spawn_text_import(path: PathBuf, feed: TextFeedSender) -> JoinHandle<()> {
    tokio::spawn(async move {
        let origin = TextOrigin::File(path.clone());
        let delivered = match read_text_file(&path).await {
            Ok(text) => {
                debug!(path = %path.display(), bytes = text.len(), "imported text file");
                feed.send_text(origin, text).await
            }
            Err(err) => {
                warn!(path = %path.display(), "text import failed: {err}");
                feed.send_failure(origin, err.to_string()).await
            }
        };
        if delivered.is_err() {
            debug!(path = %path.display(), "feed closed before import finished");
        }
    })
}
