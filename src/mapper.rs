//! Mapping of decoded JSON documents onto records.
//!
//! The walk is a single top-down pass. Every record shape lists its fields
//! explicitly below; keys not listed there are ignored. Scalars are kind-checked
//! right before they are stored in a record field.

use crate::{
    Extra, FieldPath, JsonKind, Location, Network, Root, Station, ValidationError,
    ValidationErrors,
};
use serde_json::{Map, Value};
use tracing::{debug, trace};

/// What to do after the first validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Stop and report that failure alone.
    #[default]
    FailFast,
    /// Keep walking and report every failure.
    CollectAll,
}

/// A fail-fast walk has recorded its error and is unwinding.
struct Halt;

/// `Ok(None)` means the node failed validation and the walk continues.
type Step<T> = Result<Option<T>, Halt>;

type Object = Map<String, Value>;

pub struct Mapper {
    strategy: Strategy,
    errors: Vec<ValidationError>,
}

/// Map a whole document, stopping at the first failure.
pub fn map_root(document: &Value) -> Result<Root, ValidationError> {
    Mapper::new(Strategy::FailFast)
        .map_root(document)
        .map_err(ValidationErrors::into_first)
}

/// Map only `network.stations`, stopping at the first failure.
pub fn map_stations(document: &Value) -> Result<Vec<Station>, ValidationError> {
    Mapper::new(Strategy::FailFast)
        .map_stations(document)
        .map_err(ValidationErrors::into_first)
}

impl Mapper {
    pub fn new(strategy: Strategy) -> Mapper {
        Mapper {
            strategy,
            errors: Vec::new(),
        }
    }

    pub fn map_root(mut self, document: &Value) -> Result<Root, ValidationErrors> {
        let step = self.root(document, &FieldPath::root());
        let root = self.finish(step)?;
        debug!(
            stations = root.network.stations.len(),
            "mapped network document"
        );
        Ok(root)
    }

    /// Validate the station list and nothing else of the network record.
    ///
    /// The document still needs `network` and `network.stations`, and every
    /// station is validated in full.
    pub fn map_stations(mut self, document: &Value) -> Result<Vec<Station>, ValidationErrors> {
        let step = self.station_list(document, &FieldPath::root());
        let stations = self.finish(step)?;
        debug!(stations = stations.len(), "mapped station list");
        Ok(stations)
    }

    fn finish<T>(self, step: Step<T>) -> Result<T, ValidationErrors> {
        let mut errors = self.errors.into_iter();
        match (step, errors.next()) {
            (Ok(Some(value)), None) => Ok(value),
            (_, Some(first)) => Err(ValidationErrors::new(first, errors.collect())),
            (_, None) => unreachable!("mapping stopped without recording an error"),
        }
    }

    fn fail<T>(&mut self, err: ValidationError) -> Step<T> {
        trace!(%err, "validation failure");
        self.errors.push(err);
        match self.strategy {
            Strategy::FailFast => Err(Halt),
            Strategy::CollectAll => Ok(None),
        }
    }

    // Records.

    fn root(&mut self, value: &Value, path: &FieldPath) -> Step<Root> {
        let Some(object) = self.object(value, path)? else {
            return Ok(None);
        };
        let network = self.required(object, path, "network", Self::network)?;
        Ok(network.map(|network| Root { network }))
    }

    fn network(&mut self, value: &Value, path: &FieldPath) -> Step<Network> {
        let Some(object) = self.object(value, path)? else {
            return Ok(None);
        };

        // Stations go first so a broken station is reported even when the
        // network metadata is incomplete too.
        let stations = self.required(object, path, "stations", Self::stations)?;
        let id = self.optional(object, path, "id", Self::string)?;
        let name = self.optional(object, path, "name", Self::string)?;
        let href = self.optional(object, path, "href", Self::string)?;
        let company = self.optional(object, path, "company", Self::strings)?;
        let location = self.required(object, path, "location", Self::location)?;

        let (Some(stations), Some(id), Some(name), Some(href), Some(company), Some(location)) =
            (stations, id, name, href, company, location)
        else {
            return Ok(None);
        };

        Ok(Some(Network {
            id,
            name,
            href,
            company,
            location,
            stations,
        }))
    }

    fn station_list(&mut self, value: &Value, path: &FieldPath) -> Step<Vec<Station>> {
        let Some(object) = self.object(value, path)? else {
            return Ok(None);
        };
        self.required(object, path, "network", Self::network_stations)
    }

    fn network_stations(&mut self, value: &Value, path: &FieldPath) -> Step<Vec<Station>> {
        let Some(object) = self.object(value, path)? else {
            return Ok(None);
        };
        self.required(object, path, "stations", Self::stations)
    }

    fn location(&mut self, value: &Value, path: &FieldPath) -> Step<Location> {
        let Some(object) = self.object(value, path)? else {
            return Ok(None);
        };

        let city = self.optional(object, path, "city", Self::string)?;
        let country = self.optional(object, path, "country", Self::string)?;
        let latitude = self.optional(object, path, "latitude", Self::string)?;
        let longitude = self.optional(object, path, "longitude", Self::string)?;

        let (Some(city), Some(country), Some(latitude), Some(longitude)) =
            (city, country, latitude, longitude)
        else {
            return Ok(None);
        };

        Ok(Some(Location {
            city,
            country,
            latitude,
            longitude,
        }))
    }

    fn station(&mut self, value: &Value, path: &FieldPath) -> Step<Station> {
        let Some(object) = self.object(value, path)? else {
            return Ok(None);
        };

        let id = self.optional(object, path, "id", Self::string)?;
        let name = self.required(object, path, "name", Self::string)?;
        let free_bikes = self.required(object, path, "free_bikes", Self::integer)?;
        let empty_slots = self.optional(object, path, "empty_slots", Self::integer)?;
        let extra = self.optional(object, path, "extra", Self::extra)?;
        let latitude = self.optional(object, path, "latitude", Self::float)?;
        let longitude = self.optional(object, path, "longitude", Self::float)?;
        let timestamp = self.optional(object, path, "timestamp", Self::string)?;

        let (
            Some(id),
            Some(name),
            Some(free_bikes),
            Some(empty_slots),
            Some(extra),
            Some(latitude),
            Some(longitude),
            Some(timestamp),
        ) = (
            id,
            name,
            free_bikes,
            empty_slots,
            extra,
            latitude,
            longitude,
            timestamp,
        )
        else {
            return Ok(None);
        };

        Ok(Some(Station {
            id,
            name,
            free_bikes,
            empty_slots,
            extra,
            latitude,
            longitude,
            timestamp,
        }))
    }

    fn extra(&mut self, value: &Value, path: &FieldPath) -> Step<Extra> {
        let Some(object) = self.object(value, path)? else {
            return Ok(None);
        };
        let slots = self.optional(object, path, "slots", Self::integer)?;
        Ok(slots.map(|slots| Extra { slots }))
    }

    // Fields.

    fn required<T, F>(
        &mut self,
        object: &Object,
        path: &FieldPath,
        key: &'static str,
        map: F,
    ) -> Step<T>
    where
        F: FnOnce(&mut Mapper, &Value, &FieldPath) -> Step<T>,
    {
        let path = path.key(key);
        match object.get(key) {
            Some(value) => map(self, value, &path),
            None => self.fail(ValidationError::missing(path)),
        }
    }

    /// Absent and `null` both map to `Some(None)`.
    fn optional<T, F>(
        &mut self,
        object: &Object,
        path: &FieldPath,
        key: &'static str,
        map: F,
    ) -> Step<Option<T>>
    where
        F: FnOnce(&mut Mapper, &Value, &FieldPath) -> Step<T>,
    {
        let path = path.key(key);
        match object.get(key) {
            None | Some(Value::Null) => Ok(Some(None)),
            Some(value) => Ok(map(self, value, &path)?.map(Some)),
        }
    }

    // Collections.

    fn list<T, F>(&mut self, value: &Value, path: &FieldPath, mut map: F) -> Step<Vec<T>>
    where
        F: FnMut(&mut Mapper, &Value, &FieldPath) -> Step<T>,
    {
        let items = match value {
            Value::Array(items) => items,
            other => return self.fail(ValidationError::wrong_kind(path.clone(), JsonKind::Array, other)),
        };

        let mut mapped = Vec::with_capacity(items.len());
        let mut complete = true;
        for (i, item) in items.iter().enumerate() {
            match map(self, item, &path.index(i))? {
                Some(item) => mapped.push(item),
                None => complete = false,
            }
        }

        Ok(complete.then_some(mapped))
    }

    fn stations(&mut self, value: &Value, path: &FieldPath) -> Step<Vec<Station>> {
        self.list(value, path, Self::station)
    }

    fn strings(&mut self, value: &Value, path: &FieldPath) -> Step<Vec<String>> {
        self.list(value, path, Self::string)
    }

    // Scalars.

    fn object<'v>(&mut self, value: &'v Value, path: &FieldPath) -> Step<&'v Object> {
        match value {
            Value::Object(object) => Ok(Some(object)),
            other => self.fail(ValidationError::wrong_kind(path.clone(), JsonKind::Object, other)),
        }
    }

    fn string(&mut self, value: &Value, path: &FieldPath) -> Step<String> {
        match value {
            Value::String(s) => Ok(Some(s.clone())),
            other => self.fail(ValidationError::wrong_kind(path.clone(), JsonKind::String, other)),
        }
    }

    fn integer(&mut self, value: &Value, path: &FieldPath) -> Step<i64> {
        match value.as_i64() {
            Some(n) => Ok(Some(n)),
            None => self.fail(ValidationError::wrong_kind(path.clone(), JsonKind::Integer, value)),
        }
    }

    /// Any JSON number is accepted as a float.
    fn float(&mut self, value: &Value, path: &FieldPath) -> Step<f64> {
        match value.as_f64() {
            Some(n) => Ok(Some(n)),
            None => self.fail(ValidationError::wrong_kind(path.clone(), JsonKind::Float, value)),
        }
    }
}
