use crate::{Error, Network};
use serde::Serialize;

/// The whole API response.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Root {
    pub network: Network,
}

impl Root {
    pub fn with_company(self, company: Vec<String>) -> Root {
        Root {
            network: self.network.with_company(company),
        }
    }

    /// Encode back into the API's document shape. Absent optional fields are omitted.
    pub fn to_json_pretty(&self) -> Result<String, Error> {
        serde_json::to_string_pretty(self).map_err(|err| {
            Error::Serialization(format!("Could not serialize network ({}).", err))
        })
    }
}
