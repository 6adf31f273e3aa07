use std::path::PathBuf;

use clap::{ArgAction, Parser};

/// Command-line arguments accepted by the `hubscout` binary.
#[derive(Parser, Debug, Default)]
#[command(
    name = "hubscout",
    version,
    about = "Interactive terminal search for remote repository catalogs"
)]
pub struct CliArgs {
    #[arg(
        short,
        long = "config",
        value_name = "FILE",
        env = "HUBSCOUT_CONFIG",
        action = ArgAction::Append,
        help = "Additional configuration file to merge (default: none)"
    )]
    pub config: Vec<PathBuf>,
    #[arg(
        short = 'n',
        long = "no-config",
        help = "Skip loading default configuration files (default: disabled)"
    )]
    pub no_config: bool,
    #[arg(
        short = 'q',
        long,
        value_name = "QUERY",
        help = "Initial search query (default: react)"
    )]
    pub query: Option<String>,
    #[arg(
        long,
        value_name = "COUNT",
        help = "Results fetched per page (default: 20, max: 100)"
    )]
    pub page_size: Option<u32>,
    #[arg(
        long,
        value_name = "MS",
        help = "Debounce interval for as-you-type search (default: 500)"
    )]
    pub debounce_ms: Option<u64>,
    #[arg(
        long,
        value_name = "LEN",
        help = "Minimum query length before a search is issued (default: 3)"
    )]
    pub min_term_length: Option<usize>,
    #[arg(
        long,
        value_name = "MS",
        help = "Request timeout in milliseconds (default: none)"
    )]
    pub request_timeout_ms: Option<u64>,
    #[arg(
        long,
        value_name = "URL",
        help = "Search endpoint URL (default: GitHub GraphQL API)"
    )]
    pub endpoint: Option<String>,
    #[arg(
        long,
        value_name = "TOKEN",
        env = "GITHUB_TOKEN",
        hide_env_values = true,
        help = "Bearer token for the search endpoint"
    )]
    pub token: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_overrides() {
        let cli = CliArgs::parse_from([
            "hubscout",
            "--query",
            "tokio",
            "--page-size",
            "50",
            "--debounce-ms",
            "250",
        ]);
        assert_eq!(cli.query.as_deref(), Some("tokio"));
        assert_eq!(cli.page_size, Some(50));
        assert_eq!(cli.debounce_ms, Some(250));
        assert!(cli.min_term_length.is_none());
    }
}
