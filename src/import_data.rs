use crate::gps_processor::RawData;
use anyhow::{Context, Result};
use std::{fs::File, io::Read, path::Path};

pub const CSV_EXTENSION: &str = ".csv";

/// Reads a headerless `latitude,longitude,epoch_seconds` file. Any malformed
/// row fails the whole load.
pub fn load_csv(file_path: &str) -> Result<Vec<RawData>> {
    if !file_path.contains(CSV_EXTENSION) {
        bail!("expected a {CSV_EXTENSION} file, got: {file_path}");
    }
    let file = File::open(Path::new(file_path))
        .with_context(|| format!("failed to open {file_path}"))?;
    let route = load_csv_from_reader(file)?;
    info!("Read {} points from {file_path}", route.len());
    Ok(route)
}

pub fn load_csv_from_reader<R: Read>(reader: R) -> Result<Vec<RawData>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut route = Vec::new();
    for (i, result) in reader.deserialize::<RawData>().enumerate() {
        let data = result.with_context(|| format!("invalid row {}", i + 1))?;
        route.push(data);
    }
    Ok(route)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_rows_in_order() {
        let data = "51.5007,-0.1246,1326378718\n 51.5008 , -0.1247 , 1326378723\n";
        let route = load_csv_from_reader(data.as_bytes()).unwrap();
        assert_eq!(
            route,
            vec![
                RawData::new(51.5007, -0.1246, 1326378718),
                RawData::new(51.5008, -0.1247, 1326378723),
            ]
        );
    }

    #[test]
    fn malformed_row_names_its_line() {
        let data = "51.5007,-0.1246,1326378718\nnot,a,number\n";
        let err = load_csv_from_reader(data.as_bytes()).unwrap_err();
        assert_eq!(err.to_string(), "invalid row 2");
    }

    #[test]
    fn missing_column_is_an_error() {
        assert!(load_csv_from_reader("51.5007,-0.1246\n".as_bytes()).is_err());
    }

    #[test]
    fn rejects_other_extensions() {
        assert!(load_csv("points.txt").is_err());
    }
}
