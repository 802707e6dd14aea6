use anyhow::Result;
use chrono::Local;
use clap::{Args, Parser, Subcommand};
use log::error;
use std::path::PathBuf;
use regpop_rs::api::{self, SourceKind};
use regpop_rs::{Client, engine, map, report, storage, viz};

#[derive(Parser, Debug)]
#[command(
    name = "regpop",
    version,
    about = "Fetch, rank & report regional population aging and decline risk"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch data (falling back to the embedded dataset) and write the
    /// table, map, and chart artifacts.
    Report(ReportArgs),
}

#[derive(Args, Debug)]
struct ReportArgs {
    /// Directory for the generated artifacts.
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
    /// Table CSV path (default: <out-dir>/population_report_<date>.csv).
    #[arg(long)]
    table: Option<PathBuf>,
    /// Also write the table as JSON next to the CSV.
    #[arg(long, default_value_t = false)]
    json: bool,
    /// Map HTML path (default: <out-dir>/population_analysis_map_<date>.html).
    #[arg(long)]
    map_file: Option<PathBuf>,
    /// Chart path, .svg or .png (default: <out-dir>/population_chart_<date>.svg).
    #[arg(long)]
    plot: Option<PathBuf>,
    /// Width of the chart (default 1400).
    #[arg(long, default_value_t = 1400)]
    width: u32,
    /// Height of the chart (default 700).
    #[arg(long, default_value_t = 700)]
    height: u32,
    /// Skip the live fetch and use the embedded dataset.
    #[arg(long, default_value_t = false)]
    offline: bool,
    /// Print the ranked table to stdout.
    #[arg(long, default_value_t = false)]
    print: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Report(args) => cmd_report(args),
    }
}

fn cmd_report(args: ReportArgs) -> Result<()> {
    std::fs::create_dir_all(&args.out_dir)?;

    let (records, source) = if args.offline {
        (api::fallback_records(), SourceKind::Fallback)
    } else {
        Client::from_env().fetch_with_fallback()
    };
    eprintln!("Data source: {source}");

    let ranked = engine::compute(&records);
    if !ranked.skipped.is_empty() {
        eprintln!("Skipped {} region(s) with unusable data", ranked.skipped.len());
    }

    if args.print {
        print_table(&ranked.regions);
    }

    // Emission order is table, map, chart; the table is the most valuable
    // recoverable artifact and must be attempted first. A failing artifact
    // never blocks the remaining ones.
    let mut failed = 0usize;

    let table_path = args
        .table
        .unwrap_or_else(|| args.out_dir.join(storage::dated_file_name("population_report", "csv")));
    match storage::save_csv(&ranked.regions, &table_path) {
        Ok(()) => eprintln!("Saved {} rows to {}", ranked.regions.len(), table_path.display()),
        Err(e) => {
            error!("table export failed: {e:#}");
            failed += 1;
        }
    }

    if args.json {
        let json_path = table_path.with_extension("json");
        match storage::save_json(&ranked.regions, &json_path) {
            Ok(()) => eprintln!("Saved JSON table to {}", json_path.display()),
            Err(e) => {
                error!("json export failed: {e:#}");
                failed += 1;
            }
        }
    }

    let map_path = args.map_file.unwrap_or_else(|| {
        args.out_dir
            .join(storage::dated_file_name("population_analysis_map", "html"))
    });
    let projection = report::map_projection(&ranked.regions);
    if projection.unmapped > 0 {
        eprintln!(
            "{} region(s) without known coordinates omitted from the map",
            projection.unmapped
        );
    }
    match map::write_map_html(&projection, &map_path) {
        Ok(()) => eprintln!(
            "Wrote map with {} markers to {}",
            projection.markers.len(),
            map_path.display()
        ),
        Err(e) => {
            error!("map export failed: {e:#}");
            failed += 1;
        }
    }

    let plot_path = args
        .plot
        .unwrap_or_else(|| args.out_dir.join(storage::dated_file_name("population_chart", "svg")));
    let title = format!("Regional population report ({})", Local::now().format("%Y-%m"));
    match viz::plot_dual_axis(
        &report::chart_series(&ranked.regions),
        &plot_path,
        args.width,
        args.height,
        &title,
    ) {
        Ok(()) => eprintln!("Wrote chart to {}", plot_path.display()),
        Err(e) => {
            error!("chart export failed: {e:#}");
            failed += 1;
        }
    }

    if failed > 0 {
        anyhow::bail!("{failed} artifact(s) failed");
    }
    Ok(())
}

fn print_table(regions: &[regpop_rs::RegionRecord]) {
    println!(
        "{:<12} {:>14} {:>12} {:>14} {:>10} {:>8}",
        "region", "total", "elderly", "fertile_female", "aging_%", "risk"
    );
    for r in regions {
        println!(
            "{:<12} {:>14} {:>12} {:>14} {:>10.1} {:>8.2}",
            r.region,
            r.total_population,
            r.elderly_population,
            r.fertile_female_population,
            r.aging_ratio,
            r.decline_risk_index
        );
    }
}
