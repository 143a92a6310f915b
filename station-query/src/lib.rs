//! Station coordinate lookup for hand-maintained line data.
//!
//! Queries the OpenStreetMap Overpass API for the stations of Toronto's
//! Line 6 Finch West and prints them west to east as `new Station(...)`
//! lines, ready to paste into a JavaScript station list.

pub mod overpass;
pub mod report;
pub mod stations;
