//! CLI entry point for the CIJ video-statistics report.
//!
//! Provides subcommands for writing the full chart bundle, summarizing a
//! single metric, printing coverage curves, and printing level
//! correlations.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::Utc;
use cij_stats::aggregate::correlation::LevelCorrelation;
use cij_stats::aggregate::metric::Metric;
use cij_stats::loader::load_dataset;
use cij_stats::output::{ChartIndexEntry, ReportIndex, print_json, write_json, write_rows_tsv};
use cij_stats::report::{ChartRequest, Report};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "cij_stats")]
#[command(about = "Chart data for the CIJ video statistics report", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute every chart variant and write JSON for the report front-end
    Report {
        /// Directory containing stats.tsv, coverage.tsv, and metrics.tsv
        #[arg(short, long, default_value = "data")]
        data_dir: String,

        /// Directory to write per-chart JSON and the index to
        #[arg(short, long, default_value = "charts")]
        output_dir: String,
    },
    /// Print one metric's chart data as JSON
    Summarize {
        /// Metric key (wpm, sps, msl, repetition, rareness, vocab98,
        /// grammar, word_origin)
        #[arg(value_name = "METRIC")]
        metric: String,

        #[arg(short, long, default_value = "data")]
        data_dir: String,

        /// Attach the per-level reference median markers
        #[arg(short = 'm', long, default_value_t = false)]
        show_medians: bool,

        /// Optional: TSV file to write the chart rows to
        #[arg(short, long)]
        tsv: Option<String>,
    },
    /// Print the vocabulary-coverage curve as JSON
    Coverage {
        #[arg(short, long, default_value = "data")]
        data_dir: String,

        /// Restrict the view to coverage >= 90%
        #[arg(short, long, default_value_t = false)]
        zoom: bool,
    },
    /// Print correlations between the numeric columns and level
    Correlate {
        #[arg(short, long, default_value = "data")]
        data_dir: String,

        /// Sort by descending absolute correlation
        #[arg(short, long, default_value_t = false)]
        sort: bool,

        /// Print the full matrix instead of the level view
        #[arg(short, long, default_value_t = false)]
        full: bool,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/cij_stats.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("cij_stats.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse().unwrap()));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse().unwrap()));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Report {
            data_dir,
            output_dir,
        } => {
            let dataset = load_dataset(Path::new(&data_dir))?;
            write_report(Report::new(dataset), Path::new(&output_dir))?;
        }
        Commands::Summarize {
            metric,
            data_dir,
            show_medians,
            tsv,
        } => {
            let metric = parse_metric(&metric)?;
            let dataset = load_dataset(Path::new(&data_dir))?;
            let mut report = Report::new(dataset);
            let chart = report.chart(ChartRequest::Summary {
                metric,
                show_reference_markers: show_medians,
            });
            print_json(chart.as_ref())?;
            if let Some(tsv) = tsv {
                write_rows_tsv(Path::new(&tsv), chart.as_ref())?;
            }
        }
        Commands::Coverage { data_dir, zoom } => {
            let dataset = load_dataset(Path::new(&data_dir))?;
            let mut report = Report::new(dataset);
            let chart = report.chart(ChartRequest::Coverage { zoom });
            print_json(chart.as_ref())?;
        }
        Commands::Correlate {
            data_dir,
            sort,
            full,
        } => {
            let dataset = load_dataset(Path::new(&data_dir))?;
            let mut report = Report::new(dataset);
            if full {
                print_json(report.correlation().as_ref())?;
            } else {
                let view: Vec<LevelCorrelation> = report.level_correlations(sort)?;
                print_json(&view)?;
            }
        }
    }

    Ok(())
}

fn parse_metric(key: &str) -> Result<Metric> {
    Metric::from_key(key).ok_or_else(|| {
        let known: Vec<&str> = Metric::ALL.iter().map(|m| m.key()).collect();
        anyhow::anyhow!("unknown metric `{key}`; expected one of: {}", known.join(", "))
    })
}

/// Writes every chart variant the UI toggles can request, plus the
/// coverage curves, correlation views, and an index.
fn write_report(mut report: Report, output_dir: &Path) -> Result<()> {
    let mut entries = Vec::new();

    for metric in Metric::ALL {
        let chart = report.chart(ChartRequest::Summary {
            metric,
            show_reference_markers: false,
        });
        entries.push(write_chart(output_dir, &format!("{}.json", metric.key()), &chart)?);

        // the "show medians" variant only exists for metrics with markers
        let marked = report.chart(ChartRequest::Summary {
            metric,
            show_reference_markers: true,
        });
        if !marked.markers.is_empty() {
            entries.push(write_chart(
                output_dir,
                &format!("{}_medians.json", metric.key()),
                &marked,
            )?);
        }
    }

    for (zoom, file) in [(false, "coverage.json"), (true, "coverage_zoom.json")] {
        let chart = report.chart(ChartRequest::Coverage { zoom });
        entries.push(write_chart(output_dir, file, &chart)?);
    }

    write_json(&output_dir.join("correlation.json"), report.correlation().as_ref())?;
    let view = report.level_correlations(true)?;
    write_json(&output_dir.join("level_correlations.json"), &view)?;

    let index = ReportIndex {
        generated_at: Utc::now(),
        charts: entries,
    };
    write_json(&output_dir.join("index.json"), &index)?;

    info!(output_dir = %output_dir.display(), "Report written");
    Ok(())
}

fn write_chart(
    output_dir: &Path,
    file: &str,
    chart: &cij_stats::aggregate::chart::ChartData,
) -> Result<ChartIndexEntry> {
    let path: PathBuf = output_dir.join(file);
    write_json(&path, chart)?;
    Ok(ChartIndexEntry {
        file: file.to_string(),
        title: chart.title.clone(),
        rows: chart.rows.len(),
    })
}
