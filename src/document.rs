//! Text to records: JSON decoding followed by mapping.

use crate::{Error, Mapper, Root, Station, Strategy};
use serde_json::Value;

/// Decode document text. Nothing is mapped if the text is not valid JSON.
pub fn parse_document(text: &str) -> Result<Value, Error> {
    serde_json::from_str(text).map_err(|err| Error::Syntax {
        line: err.line(),
        column: err.column(),
        message: syntax_message(&err),
    })
}

pub fn load_root(text: &str) -> Result<Root, Error> {
    load_root_with(text, Strategy::FailFast)
}

pub fn load_root_with(text: &str, strategy: Strategy) -> Result<Root, Error> {
    let document = parse_document(text)?;
    Ok(Mapper::new(strategy).map_root(&document)?)
}

pub fn load_stations(text: &str) -> Result<Vec<Station>, Error> {
    load_stations_with(text, Strategy::FailFast)
}

pub fn load_stations_with(text: &str, strategy: Strategy) -> Result<Vec<Station>, Error> {
    let document = parse_document(text)?;
    Ok(Mapper::new(strategy).map_stations(&document)?)
}

// serde_json appends " at line L column C" to its messages; the position is
// reported separately.
fn syntax_message(err: &serde_json::Error) -> String {
    let message = err.to_string();
    let suffix = format!(" at line {} column {}", err.line(), err.column());
    match message.strip_suffix(&suffix) {
        Some(stripped) => stripped.to_string(),
        None => message,
    }
}
