//! HTTP client for the NSW BioNet OData API.

use std::time::Duration;

use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    query::{Query, SightingQuery},
    types::{ODataResponse, SightingRecord},
    Error,
};

const DEFAULT_BASE_URL: &str = "https://data.bionet.nsw.gov.au/biosvcapp/odata";
const SIGHTINGS_PATH: &str = "/SpeciesSightings_CoreData";

/// Basic-auth credentials for licensed BioNet access. Anonymous queries only
/// see the public subset of records.
#[derive(Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// HTTP client for the BioNet OData service.
///
/// One request per call: each request builds a fresh `reqwest::Client` with
/// a 30-second timeout, and the connection is scoped to the call. There is
/// no retry logic and no shared state across calls.
pub struct Client {
    /// OData service root. Defaults to `https://data.bionet.nsw.gov.au/biosvcapp/odata`.
    base_api_url: String,
    credentials: Option<Credentials>,
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl Client {
    /// Creates a new anonymous client pointing at the production BioNet service.
    pub fn new() -> Self {
        Self {
            base_api_url: DEFAULT_BASE_URL.to_string(),
            credentials: None,
        }
    }

    /// Creates a new client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_api_url: base_url.to_string(),
            credentials: None,
        }
    }

    /// Attaches basic-auth credentials for licensed access.
    pub fn with_credentials(mut self, username: &str, password: &str) -> Self {
        self.credentials = Some(Credentials {
            username: username.to_string(),
            password: password.to_string(),
        });
        self
    }

    fn get_url(&self, path: &str, query: Option<&impl Query>) -> Result<Url, Error> {
        let url = Url::parse(format!("{}{}", &self.base_api_url, path).as_str()).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::RequestFailed
        })?;
        Ok(match query {
            Some(query) => query.add_to_url(&url),
            None => url,
        })
    }

    async fn get<T>(&self, url: Url) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        tracing::debug!("GET {}", url);
        let client = reqwest::Client::builder()
            .user_agent(concat!("bionet_api/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::RequestFailed
            })?;

        let mut request = client.get(url).header("accept", "application/json");
        if let Some(creds) = &self.credentials {
            request = request.basic_auth(&creds.username, Some(&creds.password));
        }

        let resp = request.send().await.map_err(|e| {
            tracing::error!("Failed to get resource: {}", e);
            Error::RequestFailed
        })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::RequestFailed
        })?;

        if !status.is_success() {
            let snippet = truncate_body(&body);
            tracing::error!("Request failed with status {}: {}", status, snippet);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }

        let parsed = serde_json::from_str::<T>(&body).map_err(|e| {
            let snippet = truncate_body(&body);
            tracing::error!("Failed to parse resource: {} | body: {}", e, snippet);
            Error::UnexpectedResponse
        })?;

        Ok(parsed)
    }

    /// Fetches fauna sighting records matching the given query.
    ///
    /// Records come back in API response order, truncated to
    /// `query.common.max_records` if the server over-returns. Fails with
    /// [`Error::InvalidQuery`] before any network I/O if the record limit is
    /// not positive.
    pub async fn get_sightings(
        &self,
        query: &SightingQuery,
    ) -> Result<Vec<SightingRecord>, Error> {
        if query.common.max_records <= 0 {
            return Err(Error::InvalidQuery(format!(
                "max_records must be positive, got {}",
                query.common.max_records
            )));
        }
        let url = self.get_url(SIGHTINGS_PATH, Some(query))?;
        let resp: ODataResponse<SightingRecord> = self.get(url).await?;
        let mut records = resp.value;
        if records.len() > query.common.max_records as usize {
            records.truncate(query.common.max_records as usize);
        }
        Ok(records)
    }

    /// Checks that the sightings collection is reachable and serving the
    /// expected envelope, using a minimal one-record probe.
    pub async fn ping(&self) -> Result<(), Error> {
        let mut url = self.get_url(SIGHTINGS_PATH, None::<&SightingQuery>)?;
        url.query_pairs_mut()
            .append_pair("$top", "1")
            .append_pair("$select", "ScientificName");
        let _: ODataResponse<serde_json::Value> = self.get(url).await?;
        Ok(())
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        // Back off to a char boundary; slicing mid-codepoint panics.
        let mut cut = MAX;
        while !body.is_char_boundary(cut) {
            cut -= 1;
        }
        format!("{}...[truncated]", &body[..cut])
    }
}

#[cfg(test)]
mod tests {
    use super::truncate_body;

    #[test]
    fn truncate_body_short_passthrough() {
        assert_eq!(truncate_body("Internal Server Error"), "Internal Server Error");
    }

    #[test]
    fn truncate_body_multibyte_straddling_limit() {
        let body = format!("{}é{}", "x".repeat(1999), "y".repeat(100));
        let snippet = truncate_body(&body);
        assert!(snippet.ends_with("...[truncated]"));
        assert!(snippet.starts_with(&"x".repeat(1999)));
        // The two-byte 'é' straddles the limit and must be dropped whole.
        assert_eq!(snippet.len(), 1999 + "...[truncated]".len());
    }
}
