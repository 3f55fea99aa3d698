use anyhow::{Context, Result};
use arboard::Clipboard;
use tracing::debug;

/// Polling clipboard watcher
///
/// Owns the platform clipboard handle and the last-seen text, so the
/// resolution core never tracks clipboard state. Each `poll` reports a given
/// clipboard content at most once.
pub struct ClipboardWatcher {
    clipboard: Clipboard,
    last_seen: Option<String>,
}

impl ClipboardWatcher {
    /// Connect to the platform clipboard
    ///
    /// # Errors
    /// Returns an error when no clipboard is available (e.g. headless
    /// sessions without a display server).
    pub fn new() -> Result<Self> {
        let clipboard = Clipboard::new().context("failed to open platform clipboard")?;
        Ok(Self {
            clipboard,
            last_seen: None,
        })
    }

    /// Return new, non-blank clipboard text, if any
    ///
    /// Returns `None` when the clipboard is empty, holds non-text content,
    /// is blank, or still holds the text reported last time. Returned text
    /// is trimmed.
    pub fn poll(&mut self) -> Option<String> {
        let text = self.clipboard.get_text().ok()?;

        if text.trim().is_empty() || self.last_seen.as_deref() == Some(text.as_str()) {
            return None;
        }

        debug!(chars = text.len(), "new clipboard text");
        let trimmed = text.trim().to_owned();
        self.last_seen = Some(text);
        Some(trimmed)
    }
}
