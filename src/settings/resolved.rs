use std::time::Duration;

use anyhow::{Context, Result, ensure};

use super::raw::RawSettings;
use super::sources;
use crate::backend::DEFAULT_ENDPOINT;
use crate::cli::CliArgs;
use crate::search::SearchOptions;

/// The query pre-populated on startup when nothing else is configured.
const DEFAULT_INITIAL_QUERY: &str = "react";

/// Largest page the remote endpoint accepts per request.
const MAX_PAGE_SIZE: u32 = 100;

/// Fully merged and validated application settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSettings {
    pub search: SearchOptions,
    pub endpoint: String,
    pub token: Option<String>,
    pub initial_query: String,
}

/// Load settings from the default file locations, the environment, and CLI
/// overrides, in ascending precedence.
pub fn resolve(cli: &CliArgs) -> Result<ResolvedSettings> {
    let raw: RawSettings = sources::build_config(cli)?
        .try_deserialize()
        .context("invalid configuration")?;
    merge(raw, cli)
}

fn merge(raw: RawSettings, cli: &CliArgs) -> Result<ResolvedSettings> {
    let defaults = SearchOptions::default();

    let min_term_length = cli
        .min_term_length
        .or(raw.min_term_length)
        .unwrap_or(defaults.min_term_length);
    let debounce_ms = cli
        .debounce_ms
        .or(raw.debounce_ms)
        .unwrap_or(defaults.debounce.as_millis() as u64);
    let page_size = cli.page_size.or(raw.page_size).unwrap_or(defaults.page_size);
    let request_timeout = cli
        .request_timeout_ms
        .or(raw.request_timeout_ms)
        .map(Duration::from_millis);

    ensure!(min_term_length > 0, "min-term-length must be at least 1");
    ensure!(page_size > 0, "page-size must be greater than zero");
    ensure!(
        page_size <= MAX_PAGE_SIZE,
        "page-size must not exceed {MAX_PAGE_SIZE}"
    );

    let search = SearchOptions {
        min_term_length,
        debounce: Duration::from_millis(debounce_ms),
        page_size,
        request_timeout,
    };

    Ok(ResolvedSettings {
        search,
        endpoint: cli
            .endpoint
            .clone()
            .or(raw.endpoint)
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
        token: cli.token.clone().or(raw.token),
        initial_query: cli
            .query
            .clone()
            .or(raw.initial_query)
            .unwrap_or_else(|| DEFAULT_INITIAL_QUERY.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_nothing_is_configured() {
        let settings = merge(RawSettings::default(), &CliArgs::default()).expect("merge");
        assert_eq!(settings.search, SearchOptions::default());
        assert_eq!(settings.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(settings.initial_query, "react");
        assert!(settings.token.is_none());
    }

    #[test]
    fn cli_overrides_win_over_file_settings() {
        let raw = RawSettings {
            page_size: Some(10),
            debounce_ms: Some(100),
            ..RawSettings::default()
        };
        let cli = CliArgs {
            page_size: Some(50),
            query: Some("tokio".to_string()),
            ..CliArgs::default()
        };
        let settings = merge(raw, &cli).expect("merge");
        assert_eq!(settings.search.page_size, 50);
        assert_eq!(settings.search.debounce, Duration::from_millis(100));
        assert_eq!(settings.initial_query, "tokio");
    }

    #[test]
    fn page_size_bounds_are_enforced() {
        let cli = CliArgs {
            page_size: Some(0),
            ..CliArgs::default()
        };
        assert!(merge(RawSettings::default(), &cli).is_err());

        let cli = CliArgs {
            page_size: Some(101),
            ..CliArgs::default()
        };
        assert!(merge(RawSettings::default(), &cli).is_err());
    }

    #[test]
    fn timeout_is_optional_and_millisecond_based() {
        let cli = CliArgs {
            request_timeout_ms: Some(2_000),
            ..CliArgs::default()
        };
        let settings = merge(RawSettings::default(), &cli).expect("merge");
        assert_eq!(settings.search.request_timeout, Some(Duration::from_secs(2)));
    }
}
