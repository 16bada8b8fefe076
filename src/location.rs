use serde::Serialize;

/// Where a network operates. The API reports coordinates as strings here.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Location {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<String>,
}
