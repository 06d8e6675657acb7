//! Connection management against the console.
//!
//! Listing re-fetches and re-parses the settings page on every call; the
//! authoritative list lives remotely and nothing is cached. Creation is a
//! linear multi-step workflow: validate, conflict-check against a fresh
//! list, discover the render-time field ids on the creation form, then
//! replay the create and edit submissions in that order.

use crate::error::{ConsoleLinkError, Result};
use crate::markup;
use crate::models::{Connection, CreateConnection, FieldMapping};
use crate::paths;
use crate::payload::build_connection_payload;
use crate::session::GameSession;
use crate::transport::Transport;
use log::{debug, warn};
use reqwest::StatusCode;
use std::sync::Arc;

/// Field confirming a connection deletion.
const CONFIRM_FIELD: &str = "Confirm";
const CONFIRM_VALUE: &str = "delete connection";

/// Lists, creates and deletes a game's data-access connections.
#[derive(Clone)]
pub struct ConnectionsRepository {
    transport: Arc<dyn Transport>,
    session: GameSession,
}

impl ConnectionsRepository {
    pub(crate) fn new(transport: Arc<dyn Transport>, session: GameSession) -> Self {
        Self { transport, session }
    }

    /// Fetch the current connection list from the settings page.
    ///
    /// Rebuilt on every call; two calls without an intervening mutation
    /// return equal sequences.
    pub async fn list(&self) -> Result<Vec<Connection>> {
        let path = paths::settings(&self.session);
        debug!("[CONNECTIONS] Listing connections from {}", path);

        let document = self.transport.fetch_document(&path).await?;
        let connections = {
            let html = document.parse();
            markup::extract_connections(&html)?
        };

        debug!("[CONNECTIONS] Found {} connections", connections.len());
        Ok(connections)
    }

    /// Delete a connection by name.
    ///
    /// Returns whether the console acknowledged the deletion with HTTP 200;
    /// remote rejection is reported through the boolean, not an error.
    pub async fn delete(&self, connection: &Connection) -> Result<bool> {
        if connection.name.is_empty() {
            return Err(ConsoleLinkError::validation(
                "connection name cannot be empty",
            ));
        }

        let path = paths::delete_connection(&self.session, &connection.name);
        debug!("[CONNECTIONS] Deleting connection '{}'", connection.name);

        let fields = [(CONFIRM_FIELD.to_string(), CONFIRM_VALUE.to_string())];
        let status = self.transport.post_form(&path, &fields).await?;

        if status != StatusCode::OK {
            warn!(
                "[CONNECTIONS] Delete of '{}' rejected: status={}",
                connection.name, status
            );
        }
        Ok(status == StatusCode::OK)
    }

    /// Create a connection and attach its per-table privileges.
    ///
    /// Steps, in order: validate the request locally, conflict-check the
    /// identifier against a fresh listing, fetch the creation form to
    /// discover the render-time field-id prefixes, build the payload, POST
    /// it to the create endpoint and then POST the same payload to the edit
    /// endpoint. The edit submission is what actually attaches the
    /// privilege fields. A failure between the two submissions leaves a
    /// connection that exists with none of the requested privileges; the
    /// workflow does not roll back.
    pub async fn create(&self, mut request: CreateConnection) -> Result<()> {
        request.validate()?;
        debug!(
            "[CREATE] Creating connection '{}' (game_db='{}', {} tables)",
            request.identifier,
            request.game_db,
            request.privileges.len()
        );

        let existing = self.list().await?;
        if existing.iter().any(|c| c.name == request.identifier) {
            return Err(ConsoleLinkError::conflict(&request.identifier));
        }

        let create_path = paths::create_connection(&self.session);
        let document = self.transport.fetch_document(&create_path).await?;
        let mappings = {
            let html = document.parse();
            let discovered = markup::extract_privilege_mappings(&html)?;
            self.mapped_for_request(&request, discovered)
        };
        debug!(
            "[CREATE] Mapped {} of {} requested tables to field ids",
            mappings.len(),
            request.privileges.len()
        );

        let fields = build_connection_payload(&request, &mappings);

        let status = self.transport.post_form(&create_path, &fields).await?;
        if !status.is_success() {
            warn!(
                "[CREATE] Create of '{}' failed: status={}",
                request.identifier, status
            );
            return Err(ConsoleLinkError::remote(status.as_u16(), create_path));
        }

        let edit_path = paths::edit_connection(&self.session, &request.identifier);
        let status = self.transport.post_form(&edit_path, &fields).await?;
        if !status.is_success() {
            // The connection now exists without its privileges attached.
            warn!(
                "[CREATE] Edit of '{}' failed after create: status={}",
                request.identifier, status
            );
            return Err(ConsoleLinkError::remote(status.as_u16(), edit_path));
        }

        debug!("[CREATE] Connection '{}' created", request.identifier);
        Ok(())
    }

    /// Keep only mappings for tables the caller supplied a specification
    /// for; tables present on the form but absent from the request emit no
    /// fields at all.
    fn mapped_for_request(
        &self,
        request: &CreateConnection,
        discovered: Vec<FieldMapping>,
    ) -> Vec<FieldMapping> {
        discovered
            .into_iter()
            .filter(|mapping| request.privileges_for(&mapping.table).is_some())
            .collect()
    }
}
