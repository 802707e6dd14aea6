use chrono::Local;
use regpop_rs::models::RegionRecord;
use regpop_rs::storage::{dated_file_name, save_csv, save_json};
use tempfile::tempdir;

fn sample_regions() -> Vec<RegionRecord> {
    vec![
        RegionRecord {
            region: "전라남도".into(),
            total_population: 1_790_550,
            elderly_population: 470_000,
            fertile_female_population: 85_000,
            aging_ratio: 26.248,
            decline_risk_index: 0.181,
        },
        RegionRecord {
            region: "세종특별자치시".into(),
            total_population: 380_440,
            elderly_population: 40_000,
            fertile_female_population: 55_000,
            aging_ratio: 10.514,
            decline_risk_index: 1.375,
        },
    ]
}

#[test]
fn csv_has_fixed_header_and_row_per_region() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("table.csv");
    save_csv(&sample_regions(), &path).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let mut lines = text.lines();
    assert_eq!(
        lines.next().unwrap(),
        "region,total_population,elderly_population,fertile_female_population,aging_ratio_pct,decline_risk_index"
    );
    let first = lines.next().unwrap();
    assert!(first.starts_with("전라남도,1790550,470000,85000,"));
    assert_eq!(lines.count(), 1);
}

#[test]
fn json_round_trips() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("table.json");
    let regions = sample_regions();
    save_json(&regions, &path).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let back: Vec<RegionRecord> = serde_json::from_str(&text).unwrap();
    assert_eq!(back, regions);
}

#[test]
fn dated_file_name_embeds_today() {
    let name = dated_file_name("population_report", "csv");
    let today = Local::now().format("%Y%m%d").to_string();
    assert_eq!(name, format!("population_report_{today}.csv"));
}
