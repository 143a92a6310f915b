//! Station records extracted from Overpass elements.

use crate::overpass::{Element, OverpassResponse};

/// A station's name and position.
///
/// Fields are `None` when the source element lacked them; nothing is
/// validated here.
#[derive(Debug, Clone, PartialEq)]
pub struct StationRecord {
    pub name: Option<String>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

impl StationRecord {
    /// A record with every field present.
    pub fn new(name: impl Into<String>, lat: f64, lon: f64) -> Self {
        Self {
            name: Some(name.into()),
            lat: Some(lat),
            lon: Some(lon),
        }
    }

    fn from_element(element: &Element) -> Self {
        Self {
            name: element.name().map(str::to_owned),
            lat: element.lat,
            lon: element.lon,
        }
    }
}

/// Build one record per node element, in response order.
///
/// Ways and relations are skipped regardless of their fields.
pub fn extract_stations(response: &OverpassResponse) -> Vec<StationRecord> {
    response
        .elements
        .iter()
        .filter(|e| e.is_node())
        .map(StationRecord::from_element)
        .collect()
}
