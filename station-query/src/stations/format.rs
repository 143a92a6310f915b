//! Rendering stations as `new Station(...)` lines for `lines.js`.
//!
//! The output is pasted by hand into a JavaScript station list, so the
//! indentation and trailing comma are part of the format.

use std::io::{self, Write};

use super::record::StationRecord;

/// Heading printed above the station list.
pub const REPORT_HEADER: &str = "Line 6 Finch West LRT Stations:";

/// Separator printed under the heading.
pub const REPORT_SEPARATOR: &str = "--------------------------------";

const INDENT: &str = "            ";

/// Format one station as a constructor call.
///
/// A missing name becomes an empty string and a missing coordinate becomes
/// `null`.
pub fn format_station_line(station: &StationRecord) -> String {
    format!(
        "{INDENT}new Station(\"{}\", {}, {}),",
        escape_name(station.name.as_deref().unwrap_or_default()),
        format_coord(station.lat),
        format_coord(station.lon),
    )
}

/// Write one line per station, in the given order.
pub fn write_station_list<W: Write>(out: &mut W, stations: &[StationRecord]) -> io::Result<()> {
    for station in stations {
        writeln!(out, "{}", format_station_line(station))?;
    }
    Ok(())
}

/// Write the heading, separator, and station list.
pub fn write_report<W: Write>(out: &mut W, stations: &[StationRecord]) -> io::Result<()> {
    writeln!(out, "{REPORT_HEADER}")?;
    writeln!(out, "{REPORT_SEPARATOR}")?;
    write_station_list(out, stations)
}

/// Shortest round-trip decimal, always with a fractional part (`43.0`).
fn format_coord(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:?}"),
        None => "null".to_string(),
    }
}

fn escape_name(name: &str) -> String {
    name.replace('\\', "\\\\").replace('"', "\\\"")
}
