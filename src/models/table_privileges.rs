use serde::{Deserialize, Serialize};

/// Per-table privilege flags for a connection.
///
/// Six independent booleans governing what clients on the connection may do
/// with one data table. All flags default to `false`; only enabled flags are
/// ever submitted to the console; absence means denied.
///
/// # Example
///
/// ```rust
/// use console_link::TablePrivileges;
///
/// let privileges = TablePrivileges::new("Scores")
///     .with_can_load_by_indexes(true)
///     .with_can_save(true);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TablePrivileges {
    /// Display name of the table as shown on the creation form
    pub table: String,
    /// Allow loading rows by primary key
    pub can_load_by_keys: bool,
    /// Allow creating new rows
    pub can_create: bool,
    /// Allow loading rows through secondary indexes
    pub can_load_by_indexes: bool,
    /// Allow deleting rows
    pub can_delete: bool,
    /// Grant the creating client full rights over rows it created
    pub creator_has_full_rights: bool,
    /// Allow saving changes to existing rows
    pub can_save: bool,
}

impl TablePrivileges {
    /// All flags off for the given table.
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            can_load_by_keys: false,
            can_create: false,
            can_load_by_indexes: false,
            can_delete: false,
            creator_has_full_rights: false,
            can_save: false,
        }
    }

    /// All flags on for the given table.
    pub fn full_access(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            can_load_by_keys: true,
            can_create: true,
            can_load_by_indexes: true,
            can_delete: true,
            creator_has_full_rights: true,
            can_save: true,
        }
    }

    pub fn with_can_load_by_keys(mut self, enabled: bool) -> Self {
        self.can_load_by_keys = enabled;
        self
    }

    pub fn with_can_create(mut self, enabled: bool) -> Self {
        self.can_create = enabled;
        self
    }

    pub fn with_can_load_by_indexes(mut self, enabled: bool) -> Self {
        self.can_load_by_indexes = enabled;
        self
    }

    pub fn with_can_delete(mut self, enabled: bool) -> Self {
        self.can_delete = enabled;
        self
    }

    pub fn with_creator_has_full_rights(mut self, enabled: bool) -> Self {
        self.creator_has_full_rights = enabled;
        self
    }

    pub fn with_can_save(mut self, enabled: bool) -> Self {
        self.can_save = enabled;
        self
    }

    /// Flag name/value pairs in submission order.
    ///
    /// The names are the field-name suffixes the console expects after the
    /// server-assigned field-id prefix.
    pub(crate) fn flags(&self) -> [(&'static str, bool); 6] {
        [
            ("canloadbykeys", self.can_load_by_keys),
            ("cancreate", self.can_create),
            ("canloadbyindexes", self.can_load_by_indexes),
            ("candelete", self.can_delete),
            ("creatorhasfullrights", self.creator_has_full_rights),
            ("cansave", self.can_save),
        ]
    }
}
