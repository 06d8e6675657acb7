//! Per-game console facade.

use crate::changelog::NotePublisher;
use crate::connections::ConnectionsRepository;
use crate::error::Result;
use crate::models::{Connection, CreateConnection};
use crate::session::GameSession;
use crate::transport::{Document, Transport};
use std::sync::Arc;

/// Administrative handle for one game.
///
/// Created by [`ConsoleLinkClient::open_game`](crate::ConsoleLinkClient::open_game),
/// which derives the immutable [`GameSession`] from the game's root page.
/// Operations delegate to per-concern executors sharing the session and the
/// transport; reads always re-fetch, mutations always carry the session
/// token captured at construction.
pub struct GameConsole {
    session: GameSession,
    connections: ConnectionsRepository,
    changelog: NotePublisher,
}

impl GameConsole {
    pub(crate) fn from_root_document(
        transport: Arc<dyn Transport>,
        document: &Document,
    ) -> Result<Self> {
        let session = GameSession::from_root_document(document)?;
        let connections = ConnectionsRepository::new(Arc::clone(&transport), session.clone());
        let changelog = NotePublisher::new(transport, session.clone());
        Ok(Self {
            session,
            connections,
            changelog,
        })
    }

    /// The session derived at construction.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// The game's display name.
    pub fn name(&self) -> &str {
        &self.session.name
    }

    /// The game's public identifier.
    pub fn game_id(&self) -> &str {
        &self.session.game_id
    }

    /// Fetch the current connection list.
    pub async fn connections(&self) -> Result<Vec<Connection>> {
        self.connections.list().await
    }

    /// Create a connection and attach its per-table privileges.
    pub async fn create_connection(&self, request: CreateConnection) -> Result<()> {
        self.connections.create(request).await
    }

    /// Delete a connection by name; `true` iff the console acknowledged.
    pub async fn delete_connection(&self, connection: &Connection) -> Result<bool> {
        self.connections.delete(connection).await
    }

    /// Post a changelog note; `true` iff the console acknowledged.
    pub async fn create_note(&self, content: &str) -> Result<bool> {
        self.changelog.create_note(content).await
    }
}
