//! The three report projections over a ranked region sequence.
//!
//! Each projection is a pure function; rendering and file I/O live in the
//! `storage`, `map`, and `viz` collaborators.

use crate::coords;
use crate::models::{RegionRecord, RiskTier};
use serde::Serialize;

/// Fixed column order of the tabular export.
pub const TABLE_COLUMNS: [&str; 6] = [
    "region",
    "total_population",
    "elderly_population",
    "fertile_female_population",
    "aging_ratio_pct",
    "decline_risk_index",
];

/// One map marker for a region with known coordinates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapMarker {
    pub region: String,
    /// `[latitude, longitude]`
    pub coords: [f64; 2],
    pub radius: f64,
    pub tier: RiskTier,
    /// Popup HTML: region name, aging ratio to one decimal, decline risk
    /// index to two decimals.
    pub popup: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct MapProjection {
    pub markers: Vec<MapMarker>,
    /// Regions without a coordinate-table entry. They stay in the table and
    /// chart projections; only the map omits them.
    pub unmapped: usize,
}

/// Project ranked regions onto map markers.
///
/// Marker radius is `aging_ratio * 0.8`; the tier comes from
/// [`RiskTier::from_index`].
pub fn map_projection(regions: &[RegionRecord]) -> MapProjection {
    let table = coords::coordinate_table();
    let mut markers = Vec::with_capacity(regions.len());
    let mut unmapped = 0usize;

    for r in regions {
        match table.get(r.region.as_str()) {
            Some(&coords) => markers.push(MapMarker {
                region: r.region.clone(),
                coords,
                radius: r.aging_ratio * 0.8,
                tier: RiskTier::from_index(r.decline_risk_index),
                popup: format!(
                    "<b>{}</b><br>Aging ratio: {:.1}%<br>Decline risk index: {:.2}",
                    r.region, r.aging_ratio, r.decline_risk_index
                ),
            }),
            None => unmapped += 1,
        }
    }

    MapProjection { markers, unmapped }
}

/// Aligned series for the dual-axis chart, in engine (ranked) order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    /// Bar series: total population per region.
    pub totals: Vec<u64>,
    /// Line series: aging ratio (%) per region.
    pub ratios: Vec<f64>,
}

/// Project ranked regions onto the two aligned chart series.
pub fn chart_series(regions: &[RegionRecord]) -> ChartSeries {
    let mut series = ChartSeries {
        labels: Vec::with_capacity(regions.len()),
        totals: Vec::with_capacity(regions.len()),
        ratios: Vec::with_capacity(regions.len()),
    };
    for r in regions {
        series.labels.push(r.region.clone());
        series.totals.push(r.total_population);
        series.ratios.push(r.aging_ratio);
    }
    series
}
