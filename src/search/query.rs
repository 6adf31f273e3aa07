use serde::{Deserialize, Serialize};

/// Qualifier restricting matches to the repository name.
const NAME_SCOPE: &str = "in:name";
/// Qualifier ordering results by descending popularity.
const STAR_ORDER: &str = "sort:stars-desc";

/// Canonical request expression for the remote search endpoint.
///
/// Built once per search term and immutable afterwards. An empty term maps to
/// the no-op expression, which the orchestrator recognizes and never sends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QueryExpression(String);

impl QueryExpression {
    /// Derive the canonical expression for a raw search term.
    pub fn build(term: &str) -> Self {
        let trimmed = term.trim();
        if trimmed.is_empty() {
            return Self::noop();
        }
        Self(format!("{trimmed} {NAME_SCOPE} {STAR_ORDER}"))
    }

    /// The sentinel expression standing for "no active search".
    pub fn noop() -> Self {
        Self(String::new())
    }

    pub fn is_noop(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_scope_and_ordering_qualifiers() {
        let query = QueryExpression::build("react");
        assert_eq!(query.as_str(), "react in:name sort:stars-desc");
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let query = QueryExpression::build("  vue \t");
        assert_eq!(query.as_str(), "vue in:name sort:stars-desc");
    }

    #[test]
    fn same_term_builds_same_expression() {
        assert_eq!(QueryExpression::build("rust"), QueryExpression::build("rust"));
    }

    #[test]
    fn empty_and_blank_terms_build_the_noop_sentinel() {
        assert!(QueryExpression::build("").is_noop());
        assert!(QueryExpression::build("   ").is_noop());
        assert_eq!(QueryExpression::build(""), QueryExpression::noop());
    }
}
