//! regpop_rs
//!
//! A lightweight Rust library for retrieving, analyzing, mapping, and
//! charting regional population aging and decline-risk statistics. Pairs
//! with the `regpop` CLI.
//!
//! ### Features
//! - Fetch regional demographic records from an open-data endpoint, with a
//!   deterministic embedded fallback dataset when the endpoint is unreachable
//! - Derive aging ratio and decline risk index per region and rank regions
//! - Save the ranked table as CSV or JSON
//! - Generate an interactive HTML map and a dual-axis SVG/PNG chart
//!
//! ### Example
//! ```no_run
//! use regpop_rs::{Client, engine, map, report, storage};
//!
//! let client = Client::from_env();
//! let (records, source) = client.fetch_with_fallback();
//! eprintln!("data source: {source}");
//!
//! let ranked = engine::compute(&records);
//! storage::save_csv(&ranked.regions, "population_report.csv")?;
//! map::write_map_html(&report::map_projection(&ranked.regions), "population_analysis_map.html")?;
//! regpop_rs::viz::plot_dual_axis(
//!     &report::chart_series(&ranked.regions),
//!     "population_chart.svg",
//!     1400,
//!     700,
//!     "Regional population report",
//! )?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod api;
pub mod coords;
pub mod engine;
pub mod map;
pub mod models;
pub mod report;
pub mod storage;
pub mod viz;

pub use api::{Client, SourceKind};
pub use models::{RawRegionRecord, RegionRecord, RiskTier};
