//! Synchronous client for the regional population endpoint.
//!
//! `fetch_live` performs exactly one bounded HTTP GET and reports failures as
//! typed [`TransportError`]s; `fetch_with_fallback` makes the recovery
//! decision one level up, substituting the embedded dataset on any transport
//! failure so callers never see an error from this module.

use crate::models::{Envelope, RawRegionRecord};
use log::{info, warn};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC};
use reqwest::blocking::Client as HttpClient;
use reqwest::redirect::Policy;
use std::time::Duration;
use thiserror::Error;

/// Default endpoint serving the regional demographic records.
pub const DEFAULT_ENDPOINT: &str =
    "https://api.odcloud.kr/api/15061057/v1/uddi:d3106ebc-3d23-424d-84f5-5a522501a4e1_201909181116";

/// Environment variable holding the access credential.
pub const SERVICE_KEY_ENV: &str = "REGPOP_SERVICE_KEY";
/// Environment variable overriding the page size.
pub const PER_PAGE_ENV: &str = "REGPOP_PER_PAGE";

const DEFAULT_PER_PAGE: u32 = 20;
const TIMEOUT_SECS: u64 = 10;

/// Provenance of a fetched record set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Live,
    Fallback,
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceKind::Live => write!(f, "live"),
            SourceKind::Fallback => write!(f, "fallback"),
        }
    }
}

/// Transport-level failures of the single fetch attempt.
///
/// All variants trigger the same fallback action, but they stay distinct so
/// the logs can tell a timeout from a malformed body.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request timed out")]
    Timeout(#[source] reqwest::Error),
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),
    #[error("request failed with HTTP {0}")]
    Status(reqwest::StatusCode),
    #[error("could not decode response body: {0}")]
    Decode(#[source] reqwest::Error),
}

// Allow -, _, . unescaped; everything else in the credential gets encoded.
const SAFE: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.');

#[derive(Debug, Clone)]
pub struct Client {
    pub base_url: String,
    service_key: String,
    page: u32,
    per_page: u32,
    http: HttpClient,
}

impl Default for Client {
    fn default() -> Self {
        Self::from_env()
    }
}

impl Client {
    /// Build a client with an explicit credential and page size.
    pub fn new(service_key: impl Into<String>, per_page: u32) -> Self {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(TIMEOUT_SECS)) // total request timeout
            .connect_timeout(Duration::from_secs(5)) // connect timeout
            .redirect(Policy::limited(5)) // cap redirects
            .user_agent(concat!("regpop_rs/", env!("CARGO_PKG_VERSION"))) // set user agent
            .build()
            .expect("reqwest client build");
        Self {
            base_url: DEFAULT_ENDPOINT.into(),
            service_key: service_key.into(),
            page: 1,
            per_page,
            http,
        }
    }

    /// Build a client from `REGPOP_SERVICE_KEY` / `REGPOP_PER_PAGE`.
    ///
    /// A missing credential is not an error here: the request is still
    /// attempted and the resulting non-200 response degrades to the fallback
    /// dataset like any other transport failure.
    pub fn from_env() -> Self {
        let service_key = std::env::var(SERVICE_KEY_ENV).unwrap_or_default();
        let per_page = std::env::var(PER_PAGE_ENV)
            .ok()
            .and_then(|v| v.parse::<u32>().ok())
            .unwrap_or(DEFAULT_PER_PAGE);
        Self::new(service_key, per_page)
    }

    /// Perform the single live fetch attempt.
    ///
    /// One GET with `page`, `perPage`, and `serviceKey` query parameters; no
    /// retry. Returns the raw records of the envelope's `data` array.
    pub fn fetch_live(&self) -> Result<Vec<RawRegionRecord>, TransportError> {
        let url = format!(
            "{}?page={}&perPage={}&serviceKey={}",
            self.base_url,
            self.page,
            self.per_page,
            percent_encoding::utf8_percent_encode(&self.service_key, SAFE)
        );

        let resp = self.http.get(&url).send().map_err(|e| {
            if e.is_timeout() {
                TransportError::Timeout(e)
            } else {
                TransportError::Network(e)
            }
        })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(TransportError::Status(status));
        }

        let envelope: Envelope = resp.json().map_err(|e| {
            if e.is_timeout() {
                TransportError::Timeout(e)
            } else {
                TransportError::Decode(e)
            }
        })?;
        Ok(envelope.data)
    }

    /// Fetch the record set, degrading to the embedded dataset on any
    /// transport failure. Never fails outward.
    ///
    /// The returned [`SourceKind`] tells callers (and the log) which
    /// provenance the records have.
    pub fn fetch_with_fallback(&self) -> (Vec<RawRegionRecord>, SourceKind) {
        match self.fetch_live() {
            Ok(records) => {
                info!(
                    "live fetch succeeded: {} region records from {}",
                    records.len(),
                    self.base_url
                );
                (records, SourceKind::Live)
            }
            Err(e) => {
                warn!("live fetch failed ({e}); loading the embedded fallback dataset");
                (fallback_records(), SourceKind::Fallback)
            }
        }
    }
}

/// Embedded dataset substituted when the endpoint is unreachable.
/// Counts keep the provider's thousands-separated encoding.
const FALLBACK_ROWS: [(&str, &str, &str, &str); 17] = [
    ("서울특별시", "9,411,260", "1,750,000", "1,100,000"),
    ("부산광역시", "3,290,120", "760,000", "310,000"),
    ("대구광역시", "2,350,440", "520,000", "220,000"),
    ("인천광역시", "2,980,110", "510,000", "320,000"),
    ("광주광역시", "1,410,550", "250,000", "140,000"),
    ("대전광역시", "1,440,220", "280,000", "150,000"),
    ("울산광역시", "1,100,330", "180,000", "110,000"),
    ("세종특별자치시", "380,440", "40,000", "55,000"),
    ("경기도", "13,600,000", "2,100,000", "1,800,000"),
    ("강원특별자치도", "1,530,220", "360,000", "80,000"),
    ("충청북도", "1,590,110", "330,000", "120,000"),
    ("충청남도", "2,120,440", "460,000", "160,000"),
    ("전북특별자치도", "1,750,330", "410,000", "110,000"),
    ("전라남도", "1,790,550", "470,000", "85,000"),
    ("경상북도", "2,540,110", "620,000", "130,000"),
    ("경상남도", "3,250,880", "680,000", "210,000"),
    ("제주특별자치도", "670,220", "120,000", "65,000"),
];

/// The fixed fallback dataset, in its canonical order.
pub fn fallback_records() -> Vec<RawRegionRecord> {
    FALLBACK_ROWS
        .iter()
        .map(|&(region, total, elderly, fertile)| RawRegionRecord {
            region: region.into(),
            total_population: total.into(),
            elderly_population: elderly.into(),
            fertile_female_population: fertile.into(),
        })
        .collect()
}
