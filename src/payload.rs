//! Connection form payload construction.
//!
//! A pure function from (validated request, discovered field mappings) to the
//! ordered field list both the create and the edit submissions carry. Keeping
//! it free of I/O makes the full payload inspectable in unit tests without
//! any transport stub.

use crate::models::{CreateConnection, FieldMapping};

/// Value the console expects for an enabled checkbox. Disabled flags are
/// omitted entirely; the remote side treats absence as false.
const CHECKBOX_ON: &str = "on";

/// Build the flat field list for the create and edit submissions.
///
/// Base fields first (identifier, description, database, auth provider),
/// then per-variant authentication fields, then one `{prefix}-{flag}` field
/// per enabled privilege flag of each mapped table. Tables without a caller
/// specification are expected to be filtered out of `mappings` already.
pub(crate) fn build_connection_payload(
    request: &CreateConnection,
    mappings: &[FieldMapping],
) -> Vec<(String, String)> {
    let mut fields: Vec<(String, String)> = vec![
        ("Identifier".to_string(), request.identifier.clone()),
        ("Description".to_string(), request.description.clone()),
        ("GameDB".to_string(), request.game_db.clone()),
        ("GameDBName".to_string(), String::new()),
        (
            "AuthProvider".to_string(),
            request.authentication.provider_code().to_string(),
        ),
    ];

    if let Some(shared_secret) = request.authentication.shared_secret() {
        fields.push(("RequiresAuthentication".to_string(), CHECKBOX_ON.to_string()));
        fields.push(("SharedSecret".to_string(), shared_secret.to_string()));
    }

    for mapping in mappings {
        if let Some(privileges) = request.privileges_for(&mapping.table) {
            for (flag, enabled) in privileges.flags() {
                if enabled {
                    fields.push((
                        format!("{}-{}", mapping.prefix, flag),
                        CHECKBOX_ON.to_string(),
                    ));
                }
            }
        }
    }

    fields
}
