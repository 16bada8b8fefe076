//! Console rendering of stations.

use crate::Station;
use std::io::{self, Write};

/// `"<name> | Free Bikes: <free_bikes>"`
pub fn render_station(station: &Station) -> String {
    station.to_string()
}

/// Write one line per station, in the order given.
pub fn write_stations<W: Write>(mut out: W, stations: &[Station]) -> io::Result<()> {
    for station in stations {
        writeln!(out, "{}", render_station(station))?;
    }
    out.flush()
}
