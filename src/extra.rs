use serde::Serialize;

/// Network-specific station details. Only some networks report them.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Extra {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slots: Option<i64>,
}
