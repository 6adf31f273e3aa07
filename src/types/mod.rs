//! Wire-level data shapes shared between the search pipeline and the remote
//! catalog endpoint.
//!
//! Everything here is plain data: received once, never mutated. Field names
//! follow the remote service's camelCase convention on the wire.

use serde::{Deserialize, Serialize};

/// Opaque pagination token issued by the remote service.
///
/// The service owns the token's meaning entirely; this side only stores the
/// most recent one and replays it verbatim on a continuation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cursor(String);

impl Cursor {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Paging flags and cursors for one response page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub has_next_page: bool,
    pub has_previous_page: bool,
    #[serde(default)]
    pub start_cursor: Option<Cursor>,
    #[serde(default)]
    pub end_cursor: Option<Cursor>,
}

/// Primary classification tag of a repository (name plus display color).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Language {
    pub name: String,
    pub color: String,
}

/// One catalog entry as returned by the remote search endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Repository {
    pub id: String,
    pub name: String,
    pub url: String,
    pub stargazer_count: u64,
    pub fork_count: u64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub primary_language: Option<Language>,
    pub updated_at: String,
}

/// One page of search results: total match count, paging state, and the
/// items of this page in ranked order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchPage {
    pub total_count: u64,
    pub page_info: PageInfo,
    pub items: Vec<Repository>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repository_parses_wire_shape() {
        let raw = r##"{
            "id": "R_1",
            "name": "react",
            "url": "https://github.com/facebook/react",
            "stargazerCount": 218000,
            "forkCount": 45000,
            "description": "A declarative UI library",
            "primaryLanguage": { "name": "JavaScript", "color": "#f1e05a" },
            "updatedAt": "2024-01-15T12:00:00Z"
        }"##;

        let repo: Repository = serde_json::from_str(raw).expect("parse repository");
        assert_eq!(repo.name, "react");
        assert_eq!(repo.stargazer_count, 218_000);
        assert_eq!(
            repo.primary_language.as_ref().map(|l| l.name.as_str()),
            Some("JavaScript")
        );
    }

    #[test]
    fn optional_fields_default_to_none() {
        let raw = r#"{
            "id": "R_2",
            "name": "bare",
            "url": "https://example.test/bare",
            "stargazerCount": 1,
            "forkCount": 0,
            "updatedAt": "2024-01-15T12:00:00Z"
        }"#;

        let repo: Repository = serde_json::from_str(raw).expect("parse repository");
        assert!(repo.description.is_none());
        assert!(repo.primary_language.is_none());
    }

    #[test]
    fn page_info_round_trips_cursors() {
        let raw = r#"{
            "hasNextPage": true,
            "hasPreviousPage": false,
            "startCursor": "c0",
            "endCursor": "c1"
        }"#;

        let info: PageInfo = serde_json::from_str(raw).expect("parse page info");
        assert!(info.has_next_page);
        assert_eq!(info.end_cursor.as_ref().map(Cursor::as_str), Some("c1"));
    }
}
