use std::time::Duration;

use log::debug;
use serde::{Deserialize, Serialize};

use super::SearchBackend;
use crate::search::{SearchError, SearchRequest};
use crate::types::{Cursor, PageInfo, Repository, SearchPage};

pub const DEFAULT_ENDPOINT: &str = "https://api.github.com/graphql";

const USER_AGENT: &str = concat!("hubscout/", env!("CARGO_PKG_VERSION"));

const SEARCH_DOCUMENT: &str = "\
query SearchRepositories($query: String!, $first: Int, $after: String) {
  search(query: $query, type: REPOSITORY, first: $first, after: $after) {
    repositoryCount
    pageInfo { hasNextPage hasPreviousPage startCursor endCursor }
    nodes {
      ... on Repository {
        id name url stargazerCount forkCount description
        primaryLanguage { name color }
        updatedAt
      }
    }
  }
}";

/// Repository search over GitHub's GraphQL endpoint.
pub struct GithubBackend {
    client: reqwest::blocking::Client,
    endpoint: String,
    token: Option<String>,
}

impl GithubBackend {
    pub fn new(
        endpoint: impl Into<String>,
        token: Option<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, SearchError> {
        let mut builder = reqwest::blocking::Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|err| SearchError::Transport(err.to_string()))?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
            token,
        })
    }
}

#[derive(Serialize)]
struct GraphqlRequest<'a> {
    query: &'a str,
    variables: Variables<'a>,
}

#[derive(Serialize)]
struct Variables<'a> {
    query: &'a str,
    first: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    after: Option<&'a str>,
}

#[derive(Deserialize)]
struct GraphqlResponse {
    #[serde(default)]
    data: Option<ResponseData>,
    #[serde(default)]
    errors: Vec<GraphqlError>,
}

#[derive(Deserialize)]
struct ResponseData {
    search: WireSearch,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireSearch {
    repository_count: u64,
    page_info: PageInfo,
    nodes: Vec<Repository>,
}

#[derive(Deserialize)]
struct GraphqlError {
    message: String,
}

impl SearchBackend for GithubBackend {
    fn fetch(&self, request: &SearchRequest) -> Result<SearchPage, SearchError> {
        debug!(
            "querying {} (first: {}, continuation: {})",
            self.endpoint,
            request.page_size,
            request.after.is_some()
        );
        let payload = GraphqlRequest {
            query: SEARCH_DOCUMENT,
            variables: Variables {
                query: request.query.as_str(),
                first: request.page_size,
                after: request.after.as_ref().map(Cursor::as_str),
            },
        };

        let mut http = self.client.post(&self.endpoint).json(&payload);
        if let Some(token) = &self.token {
            http = http.bearer_auth(token);
        }

        let response = http
            .send()
            .map_err(|err| SearchError::Transport(err.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Service(format!(
                "unexpected status {status} from search endpoint"
            )));
        }

        let body: GraphqlResponse = response
            .json()
            .map_err(|err| SearchError::Transport(err.to_string()))?;
        if let Some(error) = body.errors.first() {
            return Err(SearchError::Service(error.message.clone()));
        }
        let search = body
            .data
            .ok_or_else(|| SearchError::Service("response carried no data".to_string()))?
            .search;

        Ok(SearchPage {
            total_count: search.repository_count,
            page_info: search.page_info,
            items: search.nodes,
        })
    }
}
