use crate::{Error, Gateway, SourceError};
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;
use tracing::debug;

/// Where document text comes from.
#[derive(Debug, Clone)]
pub enum Source {
    /// A saved API response on disk. Handy during development to avoid
    /// being throttled.
    Fixture(PathBuf),

    /// The live API.
    Live {
        base_url: String,
        network: String,
        timeout: Option<Duration>,
    },
}

impl Source {
    pub async fn read(&self) -> Result<String, Error> {
        match self {
            Source::Fixture(path) => {
                debug!(path = %path.display(), "reading fixture");
                tokio::fs::read_to_string(path).await.map_err(|err| {
                    SourceError::Fixture {
                        path: path.clone(),
                        message: err.to_string(),
                    }
                    .into()
                })
            }
            Source::Live {
                base_url,
                network,
                timeout,
            } => {
                let gateway = Gateway::new(*timeout)?.with_base_url(base_url.as_str());
                gateway.get_document(&gateway.network_url(network)).await
            }
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Source::Fixture(path) => write!(f, "fixture {}", path.display()),
            Source::Live {
                base_url, network, ..
            } => write!(f, "network {} at {}", network, base_url),
        }
    }
}
