//! Named, schema-checked extraction from console pages.
//!
//! The console renders for human operators, not programs, so every value this
//! crate needs is recovered from markup anchored on fixed ids, classes and
//! heading texts. When a page does not match a recognized shape, extraction
//! fails with [`ConsoleLinkError::MarkupShape`] instead of guessing: a wrong
//! identifier is worse than no identifier.

use crate::error::{ConsoleLinkError, Result};
use crate::models::{Connection, FieldMapping};
use crate::session::GamePageShape;
use scraper::{ElementRef, Html, Selector};

/// First entry of the per-game navigation menu.
const NAVIGATION_LINK: &str = "div#navigation ul li a";
/// Info block only present right after a game has been created.
const GAME_CREATED_MARKER: &str = "div#gamecreated";
/// Dedicated game-id cell on the freshly-created page shape.
const GAME_ID_CELL: &str = "td#yourgameid";
/// Header carrying the game's display name as its first child.
const GAME_NAME_HEADER: &str = "h1#gamename";
/// Privilege-rights section of the connection-creation form.
const RIGHTS_SECTION: &str = "div#rights";
/// Rows of the connections table that carry actual connections.
const CONTENT_ROW: &str = "tr.contentrow";

/// Heading text preceding the game-id row on the configured page shape.
const GAME_ID_HEADING: &str = "Game ID:";
/// Heading text of the connections section on the settings page.
const CONNECTIONS_HEADING: &str = "Connections";

/// Index of the navigation id among the non-empty link path segments.
const NAVIGATION_ID_SEGMENT: usize = 3;
/// Minimum non-empty segments a recognized navigation link path carries.
const MIN_NAVIGATION_SEGMENTS: usize = 5;

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("static selector")
}

fn first_match<'a>(html: &'a Html, css: &str) -> Option<ElementRef<'a>> {
    html.select(&selector(css)).next()
}

/// Full text content of an element, trimmed.
pub(crate) fn element_text(element: ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Recover the navigation id and session token from the root document.
///
/// Takes the first navigation-menu anchor and splits its link path on `/`:
/// the segment at a fixed offset is the navigation id, the last segment is
/// the session token.
pub(crate) fn extract_session_link(html: &Html) -> Result<(String, String)> {
    let anchor = first_match(html, NAVIGATION_LINK)
        .ok_or_else(|| ConsoleLinkError::markup("navigation menu has no entries"))?;
    let href = anchor
        .value()
        .attr("href")
        .ok_or_else(|| ConsoleLinkError::markup("navigation entry has no link path"))?;

    let segments: Vec<&str> = href.split('/').filter(|s| !s.is_empty()).collect();
    if segments.len() < MIN_NAVIGATION_SEGMENTS {
        return Err(ConsoleLinkError::markup(format!(
            "navigation link path '{}' has {} segments, expected at least {}",
            href,
            segments.len(),
            MIN_NAVIGATION_SEGMENTS
        )));
    }

    let navigation_id = segments[NAVIGATION_ID_SEGMENT].to_string();
    let session_token = segments[segments.len() - 1].to_string();
    Ok((navigation_id, session_token))
}

/// Decide which of the two recognized root-page shapes this document has.
///
/// Selection is driven solely by presence of the game-created info block.
pub(crate) fn detect_shape(html: &Html) -> GamePageShape {
    if first_match(html, GAME_CREATED_MARKER).is_some() {
        GamePageShape::FreshlyCreated
    } else {
        GamePageShape::Configured
    }
}

/// Read the game's display name from the fixed header element.
pub(crate) fn extract_game_name(html: &Html) -> Result<String> {
    let header = first_match(html, GAME_NAME_HEADER)
        .ok_or_else(|| ConsoleLinkError::markup("game name header not found"))?;
    let first_child = header
        .children()
        .next()
        .ok_or_else(|| ConsoleLinkError::markup("game name header is empty"))?;

    let name = if let Some(text) = first_child.value().as_text() {
        text.trim().to_string()
    } else if let Some(element) = ElementRef::wrap(first_child) {
        element_text(element)
    } else {
        String::new()
    };

    if name.is_empty() {
        return Err(ConsoleLinkError::markup("game name is empty"));
    }
    Ok(name)
}

/// Read the game id according to the resolved page shape.
pub(crate) fn extract_game_id(html: &Html, shape: GamePageShape) -> Result<String> {
    let game_id = match shape {
        GamePageShape::FreshlyCreated => {
            let cell = first_match(html, GAME_ID_CELL)
                .ok_or_else(|| ConsoleLinkError::markup("game id cell not found"))?;
            element_text(cell)
        }
        GamePageShape::Configured => {
            let rows = selector("tr");
            let heading_row = html
                .select(&rows)
                .find(|row| element_text(*row) == GAME_ID_HEADING)
                .ok_or_else(|| ConsoleLinkError::markup("'Game ID:' heading not found"))?;
            let value_row = heading_row
                .next_siblings()
                .filter_map(ElementRef::wrap)
                .find(|el| el.value().name() == "tr")
                .ok_or_else(|| {
                    ConsoleLinkError::markup("no row follows the 'Game ID:' heading")
                })?;
            element_text(value_row)
        }
    };

    if game_id.is_empty() {
        return Err(ConsoleLinkError::markup("game id is empty"));
    }
    Ok(game_id)
}

/// Extract the connection list from the settings page.
///
/// Locates the section headed `Connections`, then reads each content row:
/// first anchor text is the name, first division text is the description.
pub(crate) fn extract_connections(html: &Html) -> Result<Vec<Connection>> {
    let headings = selector("h2");
    let section = html
        .select(&headings)
        .find(|heading| element_text(*heading) == CONNECTIONS_HEADING)
        .ok_or_else(|| ConsoleLinkError::markup("'Connections' section not found"))?;
    let table = section
        .next_siblings()
        .filter_map(ElementRef::wrap)
        .find(|el| el.value().name() == "table")
        .ok_or_else(|| ConsoleLinkError::markup("'Connections' section has no table"))?;

    let rows = selector(CONTENT_ROW);
    let anchors = selector("a");
    let divisions = selector("div");

    let mut connections = Vec::new();
    for row in table.select(&rows) {
        let name = row
            .select(&anchors)
            .next()
            .map(element_text)
            .ok_or_else(|| ConsoleLinkError::markup("connection row has no name anchor"))?;
        let description = row
            .select(&divisions)
            .next()
            .map(element_text)
            .ok_or_else(|| ConsoleLinkError::markup("connection row has no description"))?;
        connections.push(Connection::new(name, description));
    }
    Ok(connections)
}

/// Discover the table label → field-id prefix mappings on the creation form.
///
/// Within the privilege-rights section, each bold element names a table and
/// the first checkbox input following it carries a `name` attribute of the
/// form `{prefix}-{flag}`. The prefix is everything before the final `-`, so
/// prefixes containing dashes survive. Only the first checkbox after each
/// label is consulted.
pub(crate) fn extract_privilege_mappings(html: &Html) -> Result<Vec<FieldMapping>> {
    let section = first_match(html, RIGHTS_SECTION)
        .ok_or_else(|| ConsoleLinkError::markup("privilege rights section not found"))?;

    let mut mappings = Vec::new();
    let mut pending_label: Option<String> = None;

    for node in section.descendants() {
        let element = match ElementRef::wrap(node) {
            Some(element) => element,
            None => continue,
        };
        match element.value().name() {
            "b" => {
                let label = element_text(element);
                if label.is_empty() {
                    return Err(ConsoleLinkError::markup(
                        "privilege section has an unlabeled table",
                    ));
                }
                pending_label = Some(label);
            }
            "input" if element.value().attr("type") == Some("checkbox") => {
                let label = match pending_label.take() {
                    Some(label) => label,
                    None => continue,
                };
                let name = element.value().attr("name").ok_or_else(|| {
                    ConsoleLinkError::markup(format!(
                        "checkbox after table '{}' has no name attribute",
                        label
                    ))
                })?;
                let prefix = match name.rsplit_once('-') {
                    Some((prefix, _)) if !prefix.is_empty() => prefix.to_string(),
                    _ => {
                        return Err(ConsoleLinkError::markup(format!(
                            "checkbox name '{}' carries no field-id prefix",
                            name
                        )))
                    }
                };
                mappings.push(FieldMapping::new(label, prefix));
            }
            _ => {}
        }
    }
    Ok(mappings)
}
