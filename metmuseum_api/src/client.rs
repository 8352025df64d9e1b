//! HTTP client for the Met Collection API.

use reqwest::StatusCode;
use serde::de::{DeserializeOwned, Unexpected};
use url::Url;

use crate::{
    query::{ObjectOptions, ObjectsOptions, Query, SearchOptions},
    types::{DepartmentsResult, ObjectResult, ObjectsResult},
    Error,
};

/// Public root of the Met Collection API.
pub const DEFAULT_ROOT: &str = "https://collectionapi.metmuseum.org/public/collection/v1/";

/// User agent sent by HTTP clients built with [`Client::http_client_builder`].
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// HTTP client for the Met Collection API.
///
/// Holds the API root and the `reqwest::Client` used for every request. Both
/// are fixed at construction, so a `Client` can be cloned and shared across
/// tasks freely. Each operation issues exactly one GET and never retries.
#[derive(Clone, Debug)]
pub struct Client {
    /// API root, always ending in `/`. Defaults to [`DEFAULT_ROOT`].
    root_url: Url,
    http: reqwest::Client,
}

impl Client {
    /// Creates a client for the public API with a default HTTP client.
    ///
    /// The default HTTP client sets no timeout; callers that need one should
    /// use [`Client::with_http_client`].
    pub fn new() -> Result<Self, Error> {
        let http = Self::http_client_builder().build()?;
        Ok(Self::with_http_client(http))
    }

    /// Returns a `reqwest` builder preset with the crate user agent, for
    /// callers that want to add a timeout or proxy before [`Client::with_http_client`].
    pub fn http_client_builder() -> reqwest::ClientBuilder {
        reqwest::Client::builder().user_agent(USER_AGENT)
    }

    /// Creates a client for the public API that sends requests through `http`.
    pub fn with_http_client(http: reqwest::Client) -> Self {
        Self {
            root_url: default_root(),
            http,
        }
    }

    /// Points the client at another API root. Used for mirrors and for testing with wiremock.
    pub fn with_root_url(mut self, root_url: &str) -> Result<Self, Error> {
        let mut root_url = Url::parse(root_url)?;
        if !root_url.path().ends_with('/') {
            let path = format!("{}/", root_url.path());
            root_url.set_path(&path);
        }
        self.root_url = root_url;
        Ok(self)
    }

    pub fn root_url(&self) -> &Url {
        &self.root_url
    }

    fn get_url<Q: Query>(&self, path: &str, query: Option<&Q>) -> Result<Url, Error> {
        let url = self.root_url.join(path)?;
        Ok(match query {
            Some(query) => query.add_to_url(&url),
            None => url,
        })
    }

    async fn get<T, Q>(&self, path: &str, query: Option<&Q>) -> Result<T, Error>
    where
        T: DeserializeOwned,
        Q: Query,
    {
        let url = self.get_url(path, query)?;
        tracing::debug!(%url, "GET");
        let resp = self
            .http
            .get(url)
            .header("accept", "application/json")
            .send()
            .await?;

        let status = resp.status();
        tracing::debug!(status = status.as_u16(), "response received");

        if status != StatusCode::OK {
            // The snippet is diagnostic only; an unreadable body keeps the status error.
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: truncate_body(&body),
            });
        }

        let body = resp.text().await?;
        decode(&body)
    }

    /// Lists the IDs of all objects, optionally restricted to those updated
    /// after a date and/or belonging to some departments.
    pub async fn objects(&self, options: &ObjectsOptions) -> Result<ObjectsResult, Error> {
        self.get::<ObjectsResult, ObjectsOptions>("objects", Some(options))
            .await
    }

    /// Fetches the full open-access record for one object.
    pub async fn object(&self, options: &ObjectOptions) -> Result<ObjectResult, Error> {
        self.get::<ObjectResult, ObjectsOptions>(&options.path(), None)
            .await
    }

    /// Lists all departments.
    pub async fn departments(&self) -> Result<DepartmentsResult, Error> {
        self.get::<DepartmentsResult, ObjectsOptions>("departments", None)
            .await
    }

    /// Lists the IDs of objects matching a search. The options are validated
    /// before any request is made.
    pub async fn search(&self, options: &SearchOptions) -> Result<ObjectsResult, Error> {
        options.validate()?;
        self.get::<ObjectsResult, SearchOptions>("search", Some(options))
            .await
    }
}

fn default_root() -> Url {
    Url::parse(DEFAULT_ROOT).expect("DEFAULT_ROOT is a valid URL")
}

/// Decodes a response body that must be a JSON object.
///
/// serde accepts a JSON array for a struct, so the top-level shape is checked first.
fn decode<T: DeserializeOwned>(body: &str) -> Result<T, Error> {
    let value: serde_json::Value = serde_json::from_str(body)?;
    let kind = match value {
        serde_json::Value::Object(_) => return Ok(serde_json::from_value(value)?),
        serde_json::Value::Array(_) => "array",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Null => "null",
    };
    Err(Error::Decode(serde::de::Error::invalid_type(
        Unexpected::Other(kind),
        &"a JSON object",
    )))
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}
