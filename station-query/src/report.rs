//! The fetch, extract, sort, print pipeline.

use std::io::Write;

use tracing::info;

use crate::overpass::{OverpassClient, OverpassError};
use crate::stations::{extract_stations, sort_west_to_east, write_report};

/// Errors from a report run.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// Fetching from Overpass failed
    #[error("fetch failed: {0}")]
    Fetch(#[from] OverpassError),

    /// Writing the report failed
    #[error("write failed: {0}")]
    Output(#[from] std::io::Error),
}

/// Fetch the stations, order them west to east, and write the report.
///
/// Nothing is written unless the fetch succeeds. Returns the number of
/// stations written.
pub async fn run<W: Write>(client: &OverpassClient, out: &mut W) -> Result<usize, ReportError> {
    let response = client.fetch().await?;

    let stations = extract_stations(&response);
    info!(
        elements = response.elements.len(),
        stations = stations.len(),
        "extracted stations"
    );

    let sorted = sort_west_to_east(&stations);
    write_report(out, &sorted)?;
    out.flush()?;

    Ok(sorted.len())
}
