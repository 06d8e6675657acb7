//! # console-link: game-backend console client library
//!
//! A client library that automates administrative actions on a hosted
//! game-backend control panel which exposes no programmatic API, only
//! server-rendered HTML pages and forms meant for human operators. The
//! rendered HTML is treated as an *implicit* API: session-scoped identifiers
//! and configuration state are extracted from markup, and the equivalent
//! form submissions are replayed to perform mutations.
//!
//! ## Features
//!
//! - **Session derivation**: navigation id and session token recovered from
//!   the game's root page, captured once per [`GameConsole`]
//! - **Connection management**: list, create (with per-table privilege
//!   flags) and delete data-access connections
//! - **Changelog notes**: publish notes to the game's changelog
//! - **Schema-checked extraction**: unrecognized page layouts fail with an
//!   explicit error instead of mis-assigning identifiers
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use console_link::{ConsoleLinkClient, CreateConnection, TablePrivileges};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Build a client riding an already-authenticated channel
//!     let client = ConsoleLinkClient::builder()
//!         .base_url("https://console.example.com")
//!         .build()?;
//!
//!     // Open a game console; this derives the per-game session
//!     let game = client.open_game("/my/games/view/abc123def/XyZtoken99").await?;
//!
//!     // Create a read-only connection to the Scores table
//!     let request = CreateConnection::new("leaderboard")
//!         .with_description("Read-only leaderboard access")
//!         .with_table(TablePrivileges::new("Scores").with_can_load_by_indexes(true));
//!     game.create_connection(request).await?;
//!
//!     // Publish a changelog note
//!     game.create_note("Leaderboard connection provisioned").await?;
//!
//!     Ok(())
//! }
//! ```

pub mod changelog;
pub mod client;
pub mod connections;
pub mod console;
pub mod error;
pub mod models;
pub mod session;
pub mod timeouts;
pub mod transport;

mod markup;
mod paths;
mod payload;

// Re-export main types for convenience
pub use changelog::NotePublisher;
pub use client::{ConsoleLinkClient, ConsoleLinkClientBuilder};
pub use connections::ConnectionsRepository;
pub use console::GameConsole;
pub use error::{ConsoleLinkError, Result};
pub use models::{
    AuthenticationMethod, Connection, CreateConnection, FieldMapping, TablePrivileges,
};
pub use session::{GamePageShape, GameSession};
pub use timeouts::{ConsoleLinkTimeouts, ConsoleLinkTimeoutsBuilder};
pub use transport::{Document, HttpTransport, Transport};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
