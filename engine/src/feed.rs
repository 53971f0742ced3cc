//! Single-writer hand-off of completed source text.
//!
//! Background collaborators (file import, recognizers) never touch the
//! session. They send fully materialized strings through a [`TextFeedSender`];
//! the owner drains the [`TextFeed`] between frames and installs each text in
//! arrival order, so the last completed text wins.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;
use tokio::sync::mpsc;

/// Bounded: producers wait instead of queueing without limit.
pub const FEED_CAPACITY: usize = 16;

/// Where a piece of text came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextOrigin {
    CommandLine,
    Typed,
    File(PathBuf),
}

impl fmt::Display for TextOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextOrigin::CommandLine => f.write_str("command line"),
            TextOrigin::Typed => f.write_str("typed text"),
            TextOrigin::File(path) => write!(f, "{}", path.display()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedMessage {
    Text { origin: TextOrigin, text: String },
    Failed { origin: TextOrigin, reason: String },
}

#[derive(Debug, Error)]
#[error("text feed closed")]
pub struct FeedClosed;

#[derive(Debug, Clone)]
pub struct TextFeedSender {
    tx: mpsc::Sender<FeedMessage>,
}

impl TextFeedSender {
    pub async fn send_text(&self, origin: TextOrigin, text: String) -> Result<(), FeedClosed> {
        self.tx
            .send(FeedMessage::Text { origin, text })
            .await
            .map_err(|_| FeedClosed)
    }

    pub async fn send_failure(
        &self,
        origin: TextOrigin,
        reason: impl Into<String>,
    ) -> Result<(), FeedClosed> {
        self.tx
            .send(FeedMessage::Failed {
                origin,
                reason: reason.into(),
            })
            .await
            .map_err(|_| FeedClosed)
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

#[derive(Debug)]
pub struct TextFeed {
    rx: mpsc::Receiver<FeedMessage>,
}

impl TextFeed {
    /// Next ready message without waiting.
    pub fn try_next(&mut self) -> Option<FeedMessage> {
        self.rx.try_recv().ok()
    }

    /// Wait for the next message. `None` once every sender is gone.
    pub async fn recv(&mut self) -> Option<FeedMessage> {
        self.rx.recv().await
    }
}

#[must_use]
pub fn text_feed() -> (TextFeedSender, TextFeed) {
    let (tx, rx) = mpsc::channel(FEED_CAPACITY);
    (TextFeedSender { tx }, TextFeed { rx })
}
