//! Console endpoint paths.
//!
//! Every mutating endpoint is keyed by the session's navigation id and
//! session token; the token acts as a request-forgery guard on the remote
//! side and must appear on every form replay.

use crate::session::GameSession;

/// Settings page carrying the connections list.
pub(crate) fn settings(session: &GameSession) -> String {
    format!(
        "/my/games/settings/{}/{}",
        session.navigation_id, session.session_token
    )
}

/// Connection-creation form; GET fetches it, POST submits the creation.
pub(crate) fn create_connection(session: &GameSession) -> String {
    format!(
        "/my/connections/create/{}/{}",
        session.navigation_id, session.session_token
    )
}

/// Edit endpoint applying the full field set to an existing connection.
pub(crate) fn edit_connection(session: &GameSession, identifier: &str) -> String {
    format!(
        "/my/connections/edit/{}/{}/{}",
        session.navigation_id, identifier, session.session_token
    )
}

/// Delete endpoint for a named connection.
pub(crate) fn delete_connection(session: &GameSession, name: &str) -> String {
    format!(
        "/my/connections/delete/{}/{}/{}",
        session.navigation_id, name, session.session_token
    )
}

/// Changelog note endpoint.
pub(crate) fn add_note(session: &GameSession) -> String {
    format!(
        "/my/changelog/addnote/{}/{}",
        session.navigation_id, session.session_token
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> GameSession {
        GameSession {
            name: "Tank Battalion".to_string(),
            navigation_id: "nav".to_string(),
            session_token: "tok".to_string(),
            game_id: "tank-battalion-xyz".to_string(),
        }
    }

    #[test]
    fn test_paths_are_keyed_by_navigation_id_and_token() {
        let session = session();
        assert_eq!(settings(&session), "/my/games/settings/nav/tok");
        assert_eq!(create_connection(&session), "/my/connections/create/nav/tok");
        assert_eq!(
            edit_connection(&session, "gameclient"),
            "/my/connections/edit/nav/gameclient/tok"
        );
        assert_eq!(
            delete_connection(&session, "gameclient"),
            "/my/connections/delete/nav/gameclient/tok"
        );
        assert_eq!(add_note(&session), "/my/changelog/addnote/nav/tok");
    }
}
