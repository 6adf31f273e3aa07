use serde::Deserialize;

/// Settings as they appear in configuration files and the environment,
/// before CLI overrides and validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawSettings {
    pub(super) min_term_length: Option<usize>,
    pub(super) debounce_ms: Option<u64>,
    pub(super) page_size: Option<u32>,
    pub(super) request_timeout_ms: Option<u64>,
    pub(super) endpoint: Option<String>,
    pub(super) token: Option<String>,
    pub(super) initial_query: Option<String>,
}
