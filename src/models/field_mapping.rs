/// Mapping from a table's display label to its server-generated field-id
/// prefix on the connection-creation form.
///
/// The console assigns these prefixes at render time; they are not stable
/// across page loads, so mappings are discovered anew on every creation-page
/// fetch and never cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMapping {
    /// Table display label as it appears on the form
    pub table: String,
    /// Field-id prefix shared by the table's privilege checkboxes
    pub prefix: String,
}

impl FieldMapping {
    pub fn new(table: impl Into<String>, prefix: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            prefix: prefix.into(),
        }
    }
}
