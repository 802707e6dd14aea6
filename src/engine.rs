//! Indicator computation and ranking.
//!
//! Degenerate records (non-numeric counts, elderly > total, zero
//! denominators) are excluded from the ranked output, logged as warnings, and
//! returned in [`EngineOutput::skipped`] so callers can report a count. No
//! sentinel NaNs flow downstream; enriched records always carry defined,
//! finite indicators.

use crate::models::{DataError, RawRegionRecord, RegionRecord, parse_count};
use log::warn;

/// A region excluded from the ranked output, with the reason.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedRegion {
    pub region: String,
    pub reason: DataError,
}

/// Result of a compute pass.
#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    /// Enriched records, sorted descending by aging ratio. The sort is
    /// stable: ties keep their fetch order.
    pub regions: Vec<RegionRecord>,
    pub skipped: Vec<SkippedRegion>,
}

/// Normalize, validate, enrich, and rank the raw records.
///
/// One bad record never aborts the run; it lands in `skipped` instead.
pub fn compute(records: &[RawRegionRecord]) -> EngineOutput {
    let mut regions = Vec::with_capacity(records.len());
    let mut skipped = Vec::new();

    for raw in records {
        match enrich(raw) {
            Ok(record) => regions.push(record),
            Err(reason) => {
                warn!("skipping region {:?}: {reason}", raw.region);
                skipped.push(SkippedRegion {
                    region: raw.region.clone(),
                    reason,
                });
            }
        }
    }

    // Ratios are finite by construction, so total_cmp gives a total order.
    regions.sort_by(|a, b| b.aging_ratio.total_cmp(&a.aging_ratio));

    EngineOutput { regions, skipped }
}

fn enrich(raw: &RawRegionRecord) -> Result<RegionRecord, DataError> {
    let total = parse_count(&raw.region, "total_population", &raw.total_population)?;
    let elderly = parse_count(&raw.region, "elderly_population", &raw.elderly_population)?;
    let fertile = parse_count(
        &raw.region,
        "fertile_female_population",
        &raw.fertile_female_population,
    )?;

    // The source does not enforce this invariant; a >100% aging ratio would
    // propagate nonsense.
    if elderly > total {
        return Err(DataError::ImplausibleCounts {
            region: raw.region.clone(),
            elderly,
            total,
        });
    }
    if total == 0 {
        return Err(DataError::ZeroDenominator {
            region: raw.region.clone(),
            denominator: "total population",
            indicator: "aging ratio",
        });
    }
    if elderly == 0 {
        return Err(DataError::ZeroDenominator {
            region: raw.region.clone(),
            denominator: "elderly population",
            indicator: "decline risk index",
        });
    }

    Ok(RegionRecord {
        region: raw.region.clone(),
        total_population: total,
        elderly_population: elderly,
        fertile_female_population: fertile,
        aging_ratio: elderly as f64 / total as f64 * 100.0,
        decline_risk_index: fertile as f64 / elderly as f64,
    })
}
