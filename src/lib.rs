mod document;
pub use document::{load_root, load_root_with, load_stations, load_stations_with, parse_document};
mod error;
pub use error::{Error, SourceError};
mod extra;
pub use extra::Extra;
mod get_network;
mod location;
pub use location::Location;
mod mapper;
pub use mapper::{map_root, map_stations, Mapper, Strategy};
mod network;
pub use network::Network;
mod path;
pub use path::{FieldPath, Segment};
pub mod present;
mod root;
pub use root::Root;
mod source;
pub use source::Source;
mod station;
pub use station::Station;
mod validation;
pub use validation::{JsonKind, Problem, ValidationError, ValidationErrors};
use std::time::Duration;
use tracing::debug;

pub const BASE_URL: &str = "https://api.citybik.es/v2";
pub const DEFAULT_NETWORK: &str = "cyclopolis-rhodes";
const DEFAULT_TIMEOUT_SECS: u64 = 60;

pub struct Gateway {
    client: reqwest::Client,
    base_url: String,
}

impl Gateway {
    pub fn new(timeout: Option<Duration>) -> Result<Gateway, Error> {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            "Content-Type",
            reqwest::header::HeaderValue::from_static("application/json"),
        );
        headers.insert(
            "Accept",
            reqwest::header::HeaderValue::from_static("application/json"),
        );

        let timeout = match timeout {
            Some(t) => t,
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        let client = match reqwest::ClientBuilder::new()
            .default_headers(headers)
            .timeout(timeout)
            .build()
        {
            Ok(r) => r,
            Err(err) => return Err(SourceError::Client(err.to_string()).into()),
        };

        Ok(Gateway {
            client,
            base_url: BASE_URL.to_string(),
        })
    }

    /// Point the gateway at another API root (trailing slashes are dropped).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        let url = url.into();
        self.base_url = url.trim_end_matches('/').to_string();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn network_url(&self, network: &str) -> String {
        format!("{}/networks/{}", self.base_url, network)
    }

    /// Fetch a document's text with a single GET. There is no retry.
    pub async fn get_document(&self, url: &str) -> Result<String, Error> {
        debug!(url, "fetching document");

        let res = match self.client.get(url).send().await {
            Ok(r) => r,
            Err(err) => return Err(SourceError::Network(err.to_string()).into()),
        };

        let status = res.status().as_u16();
        let text = res
            .text()
            .await
            .unwrap_or_else(|_| String::from("Could not retrieve body text."));

        if !(200..=299).contains(&status) {
            return Err(match status {
                404 => SourceError::NotFound,
                429 => SourceError::Throttling,
                _ => SourceError::Api {
                    status,
                    message: text,
                },
            }
            .into());
        }

        debug!(status, bytes = text.len(), "document received");
        Ok(text)
    }
}
