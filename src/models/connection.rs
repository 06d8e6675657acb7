use serde::{Deserialize, Serialize};

/// A data-access connection as listed on the game's settings page.
///
/// A value snapshot only: the authoritative list lives on the console and is
/// re-fetched on every access. Two connections are the same connection iff
/// their names are equal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection {
    /// Connection name, unique among the game's connections
    pub name: String,
    /// Operator-facing description
    pub description: String,
}

impl Connection {
    /// Create a new connection snapshot.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_equality_is_by_value() {
        let a = Connection::new("gameclient", "default client access");
        let b = Connection::new("gameclient", "default client access");
        assert_eq!(a, b);
    }

    #[test]
    fn test_connection_serialization() {
        let connection = Connection::new("leaderboard", "read-only scores");
        let json = serde_json::to_string(&connection).unwrap();
        let parsed: Connection = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, connection);
    }
}
