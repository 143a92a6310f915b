//! Overpass API response DTOs.
//!
//! Only the fields the station pipeline reads are modelled. Everything is
//! optional except `elements`, because Overpass omits fields rather than
//! sending nulls (ways carry no coordinates, `out skel` drops tags).

use serde::Deserialize;

/// Top-level `[out:json]` response.
#[derive(Debug, Clone, Deserialize)]
pub struct OverpassResponse {
    /// Matched OSM elements, in no particular order.
    pub elements: Vec<Element>,

    /// Runtime problem reported by the server alongside a 200 status.
    pub remark: Option<String>,
}

/// A single OSM element: node, way or relation.
#[derive(Debug, Clone, Deserialize)]
pub struct Element {
    #[serde(rename = "type")]
    pub kind: String,

    pub tags: Option<ElementTags>,

    pub lat: Option<f64>,

    pub lon: Option<f64>,
}

impl Element {
    /// Whether this element is a point feature.
    pub fn is_node(&self) -> bool {
        self.kind == "node"
    }

    /// The `name` tag, if the element has one.
    pub fn name(&self) -> Option<&str> {
        self.tags.as_ref()?.name.as_deref()
    }
}

/// OSM tags. Only `name` is read.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ElementTags {
    pub name: Option<String>,
}
