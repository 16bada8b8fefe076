use crate::Extra;
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Serialize;
use std::fmt;

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Station {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    pub name: String,

    pub free_bikes: i64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_slots: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra: Option<Extra>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,

    /// Kept as the API sent it; see [`Station::observed_at`] for the parsed form.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

impl Station {
    /// When the station last reported, if the timestamp is present and readable.
    ///
    /// Timestamps without an offset are taken to be UTC.
    pub fn observed_at(&self) -> Option<DateTime<Utc>> {
        let timestamp = self.timestamp.as_deref()?;

        if let Ok(t) = DateTime::parse_from_rfc3339(timestamp) {
            return Some(t.with_timezone(&Utc));
        }

        NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%dT%H:%M:%S%.f")
            .ok()
            .map(|t| t.and_utc())
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} | Free Bikes: {}", self.name, self.free_bikes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn station(timestamp: Option<&str>) -> Station {
        Station {
            id: None,
            name: "Station A".to_string(),
            free_bikes: 3,
            empty_slots: None,
            extra: None,
            latitude: None,
            longitude: None,
            timestamp: timestamp.map(str::to_string),
        }
    }

    #[test]
    fn display_line() {
        assert_eq!(station(None).to_string(), "Station A | Free Bikes: 3");
    }

    #[test]
    fn observed_at_rfc3339() {
        let s = station(Some("2018-03-08T11:47:41.446000Z"));
        let expected = Utc.with_ymd_and_hms(2018, 3, 8, 11, 47, 41).unwrap()
            + chrono::Duration::microseconds(446_000);
        assert_eq!(s.observed_at(), Some(expected));
    }

    #[test]
    fn observed_at_without_offset_is_utc() {
        let s = station(Some("2018-03-08T11:47:41"));
        assert_eq!(
            s.observed_at(),
            Some(Utc.with_ymd_and_hms(2018, 3, 8, 11, 47, 41).unwrap())
        );
    }

    #[test]
    fn observed_at_absent_or_garbage() {
        assert_eq!(station(None).observed_at(), None);
        assert_eq!(station(Some("yesterday")).observed_at(), None);
    }
}
