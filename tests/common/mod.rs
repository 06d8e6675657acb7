//! Shared test support: a stub console transport that serves canned pages
//! and records every call in order.

// Not every test binary uses every helper.
#![allow(dead_code)]

use async_trait::async_trait;
use console_link::{ConsoleLinkClient, ConsoleLinkError, Document, Result, Transport};
use reqwest::StatusCode;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

pub fn init_logs() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// One recorded transport call, in invocation order.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedCall {
    Fetch {
        path: String,
    },
    Post {
        path: String,
        fields: Vec<(String, String)>,
    },
}

/// Stub transport serving canned pages; unknown paths answer 404.
pub struct StubTransport {
    pages: HashMap<String, String>,
    post_status: StatusCode,
    calls: Mutex<Vec<RecordedCall>>,
}

impl StubTransport {
    pub fn new() -> Self {
        Self {
            pages: HashMap::new(),
            post_status: StatusCode::OK,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Serve `body` for GETs of `path`.
    pub fn with_page(mut self, path: impl Into<String>, body: impl Into<String>) -> Self {
        self.pages.insert(path.into(), body.into());
        self
    }

    /// Status every POST answers with (default 200).
    pub fn with_post_status(mut self, status: StatusCode) -> Self {
        self.post_status = status;
        self
    }

    /// All calls recorded so far, in order.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Only the recorded POSTs, in order.
    pub fn posts(&self) -> Vec<(String, Vec<(String, String)>)> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                RecordedCall::Post { path, fields } => Some((path, fields)),
                RecordedCall::Fetch { .. } => None,
            })
            .collect()
    }
}

#[async_trait]
impl Transport for StubTransport {
    async fn fetch_document(&self, path: &str) -> Result<Document> {
        self.calls.lock().unwrap().push(RecordedCall::Fetch {
            path: path.to_string(),
        });
        match self.pages.get(path) {
            Some(body) => Ok(Document::new(path, body.clone())),
            None => Err(ConsoleLinkError::remote(404, path)),
        }
    }

    async fn post_form(&self, path: &str, fields: &[(String, String)]) -> Result<StatusCode> {
        self.calls.lock().unwrap().push(RecordedCall::Post {
            path: path.to_string(),
            fields: fields.to_vec(),
        });
        Ok(self.post_status)
    }
}

/// Build a client over the given stub.
pub fn client_over(transport: Arc<StubTransport>) -> ConsoleLinkClient {
    ConsoleLinkClient::builder()
        .transport(transport)
        .build()
        .expect("stub client builds")
}

// ── Canned console pages ─────────────────────────────────────────────────────

pub const GAME_ROOT_PATH: &str = "/my/games/view/abc123def/XyZtoken99";
pub const SETTINGS_PATH: &str = "/my/games/settings/abc123def/XyZtoken99";
pub const CREATE_PATH: &str = "/my/connections/create/abc123def/XyZtoken99";

/// Root page in the previously-configured shape.
pub fn root_page() -> String {
    r##"<html><body>
    <div id="navigation"><ul>
        <li><a href="/my/games/view/abc123def/XyZtoken99">Overview</a></li>
        <li><a href="/my/games/settings/abc123def/XyZtoken99">Settings</a></li>
    </ul></div>
    <h1 id="gamename">Tank Battalion</h1>
    <table>
        <tr><th>Game ID:</th></tr>
        <tr><td>tank-battalion-xyz</td></tr>
    </table>
    </body></html>"##
        .to_string()
}

/// Settings page listing the given (name, description) connections.
pub fn settings_page(connections: &[(&str, &str)]) -> String {
    let rows: String = connections
        .iter()
        .map(|(name, description)| {
            format!(
                r##"<tr class="contentrow"><td><a href="#">{}</a><div>{}</div></td></tr>"##,
                name, description
            )
        })
        .collect();
    format!(
        r##"<html><body>
        <h2>Connections</h2>
        <table>
            <tr class="headerrow"><th>Name</th><th>Description</th></tr>
            {}
        </table>
        </body></html>"##,
        rows
    )
}

/// Creation form exposing tables `Players` (prefix `p1`) and `Scores`
/// (prefix `s2`).
pub fn creation_form_page() -> String {
    r##"<html><body>
    <div id="rights">
        <b>Players</b>
        <input type="checkbox" name="p1-canloadbykeys">
        <input type="checkbox" name="p1-cancreate">
        <input type="checkbox" name="p1-canloadbyindexes">
        <input type="checkbox" name="p1-candelete">
        <input type="checkbox" name="p1-creatorhasfullrights">
        <input type="checkbox" name="p1-cansave">
        <b>Scores</b>
        <input type="checkbox" name="s2-canloadbykeys">
        <input type="checkbox" name="s2-cancreate">
        <input type="checkbox" name="s2-canloadbyindexes">
        <input type="checkbox" name="s2-candelete">
        <input type="checkbox" name="s2-creatorhasfullrights">
        <input type="checkbox" name="s2-cansave">
    </div>
    </body></html>"##
        .to_string()
}
