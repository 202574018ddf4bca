//! Service bridge between the async client and the sync event loop
//!
//! The TUI event loop is synchronous (crossterm poll); network calls
//! are async. `ServiceHandle` owns a tokio runtime, spawns one task
//! per fetch, and delivers generation-tagged outcomes over a
//! crossbeam channel the loop drains with `try_recv`.
//!
//! There is no cancellation: a superseded fetch still completes and
//! sends its outcome, which the reducer discards by generation.

use std::sync::Arc;

use crossbeam_channel::{unbounded, Receiver, Sender};
use libsandbook::{ContentMode, WikiClient};

use crate::app::Action;

/// Completion of one async fetch step, tagged with the navigation
/// generation that started it.
#[derive(Debug, Clone)]
pub enum FetchOutcome {
    TitleResolved { generation: u64, title: String },
    ContentLoaded { generation: u64, content: String },
    RandomFailed { generation: u64, message: String },
    ContentFailed { generation: u64, message: String },
}

impl From<FetchOutcome> for Action {
    fn from(outcome: FetchOutcome) -> Self {
        match outcome {
            FetchOutcome::TitleResolved { generation, title } => {
                Action::TitleResolved { generation, title }
            }
            FetchOutcome::ContentLoaded {
                generation,
                content,
            } => Action::ContentLoaded {
                generation,
                content,
            },
            FetchOutcome::RandomFailed {
                generation,
                message,
            } => Action::RandomFailed {
                generation,
                message,
            },
            FetchOutcome::ContentFailed {
                generation,
                message,
            } => Action::ContentFailed {
                generation,
                message,
            },
        }
    }
}

/// Handle for running fetches off the UI thread
pub struct ServiceHandle {
    client: Arc<WikiClient>,
    runtime: tokio::runtime::Runtime,
    tx: Sender<FetchOutcome>,
    rx: Receiver<FetchOutcome>,
}

impl ServiceHandle {
    pub fn new(client: WikiClient) -> std::io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()?;

        let (tx, rx) = unbounded();

        Ok(Self {
            client: Arc::new(client),
            runtime,
            tx,
            rx,
        })
    }

    /// Channel the event loop drains for completions.
    pub fn outcomes(&self) -> Receiver<FetchOutcome> {
        self.rx.clone()
    }

    /// Resolve a random title; the outcome arrives on the channel.
    pub fn fetch_random(&self, generation: u64) {
        let client = Arc::clone(&self.client);
        let tx = self.tx.clone();

        self.runtime.spawn(async move {
            let outcome = match client.random_title().await {
                Ok(title) => {
                    tracing::debug!(generation, %title, "random title resolved");
                    FetchOutcome::TitleResolved { generation, title }
                }
                Err(e) => {
                    tracing::warn!(generation, error = %e, "random title fetch failed");
                    FetchOutcome::RandomFailed {
                        generation,
                        message: e.to_string(),
                    }
                }
            };
            // Send fails only when the loop is gone; nothing to do then
            let _ = tx.send(outcome);
        });
    }

    /// Fetch content for an exact title; the outcome arrives on the
    /// channel. Full-mode HTML is converted to plain text here, off
    /// the UI thread.
    pub fn fetch_content(&self, generation: u64, title: String, mode: ContentMode) {
        let client = Arc::clone(&self.client);
        let tx = self.tx.clone();

        self.runtime.spawn(async move {
            let outcome = match client.fetch_content(&title, mode).await {
                Ok(raw) => {
                    let content = match mode {
                        ContentMode::Full => libsandbook::text::html_to_text(&raw),
                        ContentMode::Summary => raw,
                    };
                    tracing::debug!(generation, %title, bytes = content.len(), "content loaded");
                    FetchOutcome::ContentLoaded {
                        generation,
                        content,
                    }
                }
                Err(e) => {
                    tracing::warn!(generation, %title, error = %e, "content fetch failed");
                    FetchOutcome::ContentFailed {
                        generation,
                        message: e.to_string(),
                    }
                }
            };
            let _ = tx.send(outcome);
        });
    }
}
