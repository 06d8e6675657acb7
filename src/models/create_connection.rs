use super::authentication_method::AuthenticationMethod;
use super::table_privileges::TablePrivileges;
use crate::error::{ConsoleLinkError, Result};
use serde::{Deserialize, Serialize};

/// Database name submitted when the caller leaves `game_db` empty.
pub(crate) const DEFAULT_GAME_DB: &str = "Default";

/// Request to create a data-access connection.
///
/// # Example
///
/// ```rust
/// use console_link::{AuthenticationMethod, CreateConnection, TablePrivileges};
///
/// let request = CreateConnection::new("leaderboard")
///     .with_description("Read-only leaderboard access")
///     .with_authentication(AuthenticationMethod::basic_requires_authentication("s3cret"))
///     .with_table(TablePrivileges::new("Scores").with_can_load_by_indexes(true));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateConnection {
    /// Connection identifier; must be non-empty, lowercase and digit-free
    pub identifier: String,
    /// Operator-facing description
    pub description: String,
    /// Target database; empty defaults to `"Default"` during validation
    pub game_db: String,
    /// How clients authenticate against the connection
    pub authentication: AuthenticationMethod,
    /// Per-table privilege specifications; tables on the creation form
    /// without a specification here are skipped entirely
    pub privileges: Vec<TablePrivileges>,
}

impl CreateConnection {
    /// Start a request for the given connection identifier.
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            description: String::new(),
            game_db: String::new(),
            authentication: AuthenticationMethod::Basic,
            privileges: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_game_db(mut self, game_db: impl Into<String>) -> Self {
        self.game_db = game_db.into();
        self
    }

    pub fn with_authentication(mut self, authentication: AuthenticationMethod) -> Self {
        self.authentication = authentication;
        self
    }

    /// Add a per-table privilege specification.
    pub fn with_table(mut self, privileges: TablePrivileges) -> Self {
        self.privileges.push(privileges);
        self
    }

    /// Look up the privilege specification for a table label.
    pub(crate) fn privileges_for(&self, table: &str) -> Option<&TablePrivileges> {
        self.privileges.iter().find(|p| p.table == table)
    }

    /// Validate caller input and normalize defaults. Performs no I/O.
    ///
    /// Checks the identifier shape and the shared-secret requirement, and
    /// defaults an empty `game_db` to [`DEFAULT_GAME_DB`].
    pub(crate) fn validate(&mut self) -> Result<()> {
        if self.identifier.is_empty() {
            return Err(ConsoleLinkError::validation(
                "connection identifier cannot be empty",
            ));
        }
        if self.identifier.chars().any(|c| c.is_ascii_digit()) {
            return Err(ConsoleLinkError::validation(format!(
                "connection identifier '{}' cannot contain digits",
                self.identifier
            )));
        }
        if self.identifier != self.identifier.to_lowercase() {
            return Err(ConsoleLinkError::validation(format!(
                "connection identifier '{}' must be lowercase",
                self.identifier
            )));
        }
        if let AuthenticationMethod::BasicRequiresAuthentication { shared_secret } =
            &self.authentication
        {
            if shared_secret.is_empty() {
                return Err(ConsoleLinkError::validation(
                    "shared secret cannot be empty when authentication is required",
                ));
            }
        }
        if self.game_db.is_empty() {
            self.game_db = DEFAULT_GAME_DB.to_string();
        }
        Ok(())
    }
}
