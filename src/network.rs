use crate::{Location, Station};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Network {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<Vec<String>>,

    pub location: Location,

    pub stations: Vec<Station>,
}

impl Network {
    /// Copy of this network with `company` replaced.
    pub fn with_company(self, company: Vec<String>) -> Network {
        Network {
            company: Some(company),
            ..self
        }
    }

    /// Most recent report time across all stations.
    pub fn latest_update(&self) -> Option<DateTime<Utc>> {
        self.stations.iter().filter_map(Station::observed_at).max()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn station(name: &str, timestamp: Option<&str>) -> Station {
        Station {
            id: None,
            name: name.to_string(),
            free_bikes: 1,
            empty_slots: None,
            extra: None,
            latitude: None,
            longitude: None,
            timestamp: timestamp.map(str::to_string),
        }
    }

    fn network(stations: Vec<Station>) -> Network {
        Network {
            id: Some("cyclopolis-rhodes".to_string()),
            name: Some("Cyclopolis".to_string()),
            href: Some("/v2/networks/cyclopolis-rhodes".to_string()),
            company: Some(vec!["Cyclopolis Systems".to_string()]),
            location: Location {
                city: Some("Rhodes".to_string()),
                country: Some("GR".to_string()),
                latitude: None,
                longitude: None,
            },
            stations,
        }
    }

    #[test]
    fn with_company_replaces_only_company() {
        let original = network(vec![station("A", None)]);
        let updated = original
            .clone()
            .with_company(vec!["Systems Cyclopolis".to_string()]);

        assert_eq!(updated.company, Some(vec!["Systems Cyclopolis".to_string()]));
        assert_eq!(updated.stations, original.stations);
        assert_eq!(updated.location, original.location);
        assert_eq!(updated.id, original.id);
    }

    #[test]
    fn latest_update_skips_unreadable_timestamps() {
        let n = network(vec![
            station("A", Some("2018-03-08T11:47:41Z")),
            station("B", None),
            station("C", Some("2018-03-08T12:00:00Z")),
            station("D", Some("not a time")),
        ]);
        assert_eq!(
            n.latest_update(),
            Some(Utc.with_ymd_and_hms(2018, 3, 8, 12, 0, 0).unwrap())
        );
    }

    #[test]
    fn latest_update_empty() {
        assert_eq!(network(vec![]).latest_update(), None);
    }
}
