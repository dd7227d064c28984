use crate::gps_processor::RawData;
use crate::import_data::CSV_EXTENSION;
use anyhow::Result;
use std::{fs::File, io::Write};

/// Appends `.csv` unless the name already mentions it.
pub fn csv_output_path(file_path: &str) -> String {
    if file_path.contains(CSV_EXTENSION) {
        file_path.to_owned()
    } else {
        format!("{file_path}{CSV_EXTENSION}")
    }
}

pub fn route_to_csv<W: Write>(route: &[RawData], writer: W) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    for data in route {
        writer.serialize(data)?;
    }
    writer.flush()?;
    Ok(())
}

/// Writes `route` to `file_path` (with `.csv` appended when missing) and
/// returns the path actually written.
pub fn route_to_csv_file(route: &[RawData], file_path: &str) -> Result<String> {
    let file_path = csv_output_path(file_path);
    route_to_csv(route, File::create(&file_path)?)?;
    info!("Wrote {} points to {file_path}", route.len());
    Ok(file_path)
}

/// Structured dump of the route, one `[lat, lon, timestamp]` array per point.
pub fn route_to_pretty_json(route: &[RawData]) -> Result<String> {
    Ok(serde_json::to_string_pretty(route)?)
}
