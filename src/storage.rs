use crate::models::RegionRecord;
use crate::report::TABLE_COLUMNS;
use anyhow::Result;
use chrono::Local;
use csv::WriterBuilder;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Save ranked regions as CSV with the fixed header.
pub fn save_csv<P: AsRef<Path>>(regions: &[RegionRecord], path: P) -> Result<()> {
    let mut wtr = WriterBuilder::new().from_path(path)?;
    wtr.serialize(TABLE_COLUMNS)?;
    for r in regions {
        wtr.serialize((
            &r.region,
            r.total_population,
            r.elderly_population,
            r.fertile_female_population,
            r.aging_ratio,
            r.decline_risk_index,
        ))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Save ranked regions as a pretty JSON array.
pub fn save_json<P: AsRef<Path>>(regions: &[RegionRecord], path: P) -> Result<()> {
    let mut f = File::create(path)?;
    let s = serde_json::to_string_pretty(regions)?;
    f.write_all(s.as_bytes())?;
    Ok(())
}

/// Artifact file name embedding the current date, e.g.
/// `population_report_20250101.csv`.
pub fn dated_file_name(stem: &str, ext: &str) -> String {
    format!("{}_{}.{}", stem, Local::now().format("%Y%m%d"), ext)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn write_csv_and_json() {
        let dir = tempdir().unwrap();
        let csvp = dir.path().join("x.csv");
        let jsonp = dir.path().join("x.json");
        let regions = vec![RegionRecord {
            region: "서울특별시".into(),
            total_population: 9_411_260,
            elderly_population: 1_750_000,
            fertile_female_population: 1_100_000,
            aging_ratio: 18.594,
            decline_risk_index: 0.629,
        }];
        save_csv(&regions, &csvp).unwrap();
        save_json(&regions, &jsonp).unwrap();
        assert!(csvp.exists());
        assert!(jsonp.exists());
    }
}
