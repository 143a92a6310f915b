//! Station records and their copy-paste rendering.
//!
//! Turns Overpass node elements into name/lat/lon records, orders them
//! west to east, and prints them as `new Station(...)` lines.

mod format;
mod record;
mod sort;

pub use format::{
    REPORT_HEADER, REPORT_SEPARATOR, format_station_line, write_report, write_station_list,
};
pub use record::{StationRecord, extract_stations};
pub use sort::sort_west_to_east;
