//! Changelog note publishing.

use crate::error::{ConsoleLinkError, Result};
use crate::paths;
use crate::session::GameSession;
use crate::transport::Transport;
use log::{debug, warn};
use reqwest::StatusCode;
use std::sync::Arc;

/// Form field carrying the note content.
const NOTE_FIELD: &str = "Note";

/// Publishes notes to the game's changelog.
#[derive(Clone)]
pub struct NotePublisher {
    transport: Arc<dyn Transport>,
    session: GameSession,
}

impl NotePublisher {
    pub(crate) fn new(transport: Arc<dyn Transport>, session: GameSession) -> Self {
        Self { transport, session }
    }

    /// Post a changelog note.
    ///
    /// Returns whether the console acknowledged the note with HTTP 200;
    /// remote rejection is reported through the boolean, not an error.
    pub async fn create_note(&self, content: &str) -> Result<bool> {
        if content.is_empty() {
            return Err(ConsoleLinkError::validation(
                "note content cannot be empty",
            ));
        }

        let path = paths::add_note(&self.session);
        debug!("[CHANGELOG] Posting note ({} chars)", content.len());

        let fields = [(NOTE_FIELD.to_string(), content.to_string())];
        let status = self.transport.post_form(&path, &fields).await?;

        if status != StatusCode::OK {
            warn!("[CHANGELOG] Note rejected: status={}", status);
        }
        Ok(status == StatusCode::OK)
    }
}
