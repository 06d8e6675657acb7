//! Per-game session state derived from the game's root page.
//!
//! The console embeds everything a mutating request needs (a navigation id
//! and a session token) in its navigation links, and renders the game's
//! metadata in one of two page shapes. [`GameSession`] captures all of it
//! once, at construction, and is immutable afterwards.

use crate::error::Result;
use crate::markup;
use crate::transport::Document;
use log::debug;
use serde::{Deserialize, Serialize};

/// Which of the two recognized root-page layouts a document has.
///
/// Resolved once per document; each shape carries its own game-id extraction
/// rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePageShape {
    /// The page still shows the game-created info block.
    FreshlyCreated,
    /// The game has been configured before; no info block.
    Configured,
}

/// Session-scoped identifiers and metadata for one game.
///
/// All mutating operations read these fields but never rewrite them. If the
/// remote session expires, the session becomes stale and subsequent
/// operations fail at the transport layer; there is no refresh.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    /// Display name of the game
    pub name: String,
    /// Per-game identifier embedded in console URLs
    pub navigation_id: String,
    /// Trailing path segment required on every mutating request
    pub session_token: String,
    /// The game's public identifier
    pub game_id: String,
}

impl GameSession {
    /// Derive a session from the game's root document.
    pub(crate) fn from_root_document(document: &Document) -> Result<Self> {
        let html = document.parse();

        let (navigation_id, session_token) = markup::extract_session_link(&html)?;
        let shape = markup::detect_shape(&html);
        let name = markup::extract_game_name(&html)?;
        let game_id = markup::extract_game_id(&html, shape)?;

        debug!(
            "[SESSION] Derived session: game='{}' game_id={} navigation_id={} shape={:?}",
            name, game_id, navigation_id, shape
        );

        Ok(Self {
            name,
            navigation_id,
            session_token,
            game_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConsoleLinkError;

    fn root_page_fresh() -> Document {
        Document::new(
            "/my/games/view/abc123def/XyZtoken99",
            r##"<html><body>
            <div id="navigation"><ul>
                <li><a href="/my/games/view/abc123def/XyZtoken99">Overview</a></li>
            </ul></div>
            <h1 id="gamename">Tank Battalion</h1>
            <div id="gamecreated">Your game was created</div>
            <table><tr><td>Your game id</td><td id="yourgameid">tank-battalion-xyz</td></tr></table>
            </body></html>"##,
        )
    }

    fn root_page_configured() -> Document {
        Document::new(
            "/my/games/view/abc123def/XyZtoken99",
            r##"<html><body>
            <div id="navigation"><ul>
                <li><a href="/my/games/view/abc123def/XyZtoken99">Overview</a></li>
            </ul></div>
            <h1 id="gamename">Tank Battalion</h1>
            <table>
                <tr><th>Game ID:</th></tr>
                <tr><td>tank-battalion-xyz</td></tr>
            </table>
            </body></html>"##,
        )
    }

    #[test]
    fn test_session_from_fresh_shape() {
        let session = GameSession::from_root_document(&root_page_fresh()).unwrap();
        assert_eq!(session.name, "Tank Battalion");
        assert_eq!(session.navigation_id, "abc123def");
        assert_eq!(session.session_token, "XyZtoken99");
        assert_eq!(session.game_id, "tank-battalion-xyz");
    }

    #[test]
    fn test_session_from_configured_shape() {
        let session = GameSession::from_root_document(&root_page_configured()).unwrap();
        assert_eq!(session.game_id, "tank-battalion-xyz");
        assert_eq!(session.session_token, "XyZtoken99");
    }

    #[test]
    fn test_session_from_unrecognized_page_is_markup_error() {
        let document = Document::new("/my/games/view/x/y", "<html><body></body></html>");
        let err = GameSession::from_root_document(&document).unwrap_err();
        assert!(matches!(err, ConsoleLinkError::MarkupShape(_)));
    }
}
