use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Response envelope returned by the open-data endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope {
    /// Some responses encode the paging counters as **strings**, others as
    /// numbers. Accept both and normalize to `u32`.
    #[serde(deserialize_with = "de_u32_from_string_or_number")]
    pub page: u32,
    #[serde(rename = "perPage", deserialize_with = "de_u32_from_string_or_number")]
    pub per_page: u32,
    #[serde(rename = "totalCount", deserialize_with = "de_u32_from_string_or_number")]
    pub total_count: u32,
    pub data: Vec<RawRegionRecord>,
}

/// Serde helper: parse `u32` from either a JSON number or a string.
fn de_u32_from_string_or_number<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    struct U32Visitor;

    impl<'de> Visitor<'de> for U32Visitor {
        type Value = u32;

        fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
            write!(f, "a string or integer representing a non-negative number")
        }

        fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(v as u32)
        }

        fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            if v < 0 {
                return Err(E::custom("negative value for u32"));
            }
            Ok(v as u32)
        }

        fn visit_str<E>(self, s: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            s.parse::<u32>().map_err(E::custom)
        }
    }

    deserializer.deserialize_any(U32Visitor)
}

/// Raw record as delivered by the provider (one per administrative region).
///
/// The population fields arrive as thousands-separated strings
/// (`"9,411,260"`); normalization happens in the engine so a parse failure is
/// attributable to a specific region and field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRegionRecord {
    #[serde(rename = "행정구역")]
    pub region: String,
    #[serde(rename = "총 인구수")]
    pub total_population: String,
    #[serde(rename = "65세 이상 인구수")]
    pub elderly_population: String,
    #[serde(rename = "가임 여성인구")]
    pub fertile_female_population: String,
}

/// Enriched record used by this crate (one row = one ranked region).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RegionRecord {
    pub region: String,
    pub total_population: u64,
    pub elderly_population: u64,
    pub fertile_female_population: u64,
    /// Elderly share of the total population, in percent.
    pub aging_ratio: f64,
    /// Fertile female population divided by elderly population. Lower values
    /// indicate higher demographic risk.
    pub decline_risk_index: f64,
}

/// Per-record data problems. These are skip-and-count errors, never fatal to
/// the run.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DataError {
    #[error("region {region:?}: field {field:?} is not a count: {value:?}")]
    MalformedField {
        region: String,
        field: &'static str,
        value: String,
    },
    #[error("region {region:?}: elderly population {elderly} exceeds total population {total}")]
    ImplausibleCounts {
        region: String,
        elderly: u64,
        total: u64,
    },
    #[error("region {region:?}: {denominator} is zero, {indicator} is undefined")]
    ZeroDenominator {
        region: String,
        denominator: &'static str,
        indicator: &'static str,
    },
}

/// Parse a population count that may carry thousands separators.
///
/// Non-numeric input is a `DataError::MalformedField` naming the region and
/// field; it is never coerced to zero.
pub fn parse_count(region: &str, field: &'static str, raw: &str) -> Result<u64, DataError> {
    let cleaned: String = raw.trim().chars().filter(|c| *c != ',').collect();
    if cleaned.is_empty() || !cleaned.chars().all(|c| c.is_ascii_digit()) {
        return Err(DataError::MalformedField {
            region: region.to_string(),
            field,
            value: raw.to_string(),
        });
    }
    cleaned.parse::<u64>().map_err(|_| DataError::MalformedField {
        region: region.to_string(),
        field,
        value: raw.to_string(),
    })
}

/// Three-way bucketing of the decline risk index for map display.
///
/// Boundaries are inclusive on the upper side: an index of exactly 0.5 is
/// `Amber`, exactly 1.0 is `Blue`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskTier {
    Red,
    Amber,
    Blue,
}

impl RiskTier {
    pub fn from_index(index: f64) -> Self {
        if index < 0.5 {
            RiskTier::Red
        } else if index < 1.0 {
            RiskTier::Amber
        } else {
            RiskTier::Blue
        }
    }

    /// CSS color name used for the map marker stroke/fill.
    pub fn marker_color(self) -> &'static str {
        match self {
            RiskTier::Red => "red",
            RiskTier::Amber => "orange",
            RiskTier::Blue => "blue",
        }
    }
}
