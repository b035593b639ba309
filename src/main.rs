mod chart;
mod input;
mod logging;
mod model;
mod pipeline;
mod report;

use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use thiserror::Error;

use crate::chart::ChartError;
use crate::input::InputError;
use crate::pipeline::stage1_load::run_stage1;
use crate::pipeline::stage2_aggregate::{AggregateError, run_stage2};
use crate::pipeline::stage3_charts::{ChartKind, run_stage3};
use crate::pipeline::stage4_report::{Stage4Input, run_stage4};
use crate::report::ReportError;
use crate::report::text::{
    render_breakdown, render_complete, render_computing, render_intro, render_loading,
    render_saving_bar, render_saving_pie,
};

pub const DEFAULT_INPUT: &str = "ROBO-GAP_dataset.csv";
pub const DEFAULT_BAR_OUT: &str = "gender_distribution_bar.png";
pub const DEFAULT_PIE_OUT: &str = "gender_distribution_pie.png";

fn main() {
    let args = Args::parse();
    logging::init_logging(&args.log_level);
    if let Err(err) = run(RunConfig::from(args)) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

#[derive(Debug, Error)]
enum AppError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Aggregate(#[from] AggregateError),
    #[error(transparent)]
    Chart(#[from] ChartError),
    #[error(transparent)]
    Report(#[from] ReportError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Tally perceived robot gender categories in the ROBO-GAP dataset and save
/// bar and pie charts of the distribution.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Dataset to analyse (CSV, TSV, optionally gzipped)
    #[arg(long, default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Where to save the bar chart
    #[arg(long, default_value = DEFAULT_BAR_OUT)]
    bar_out: PathBuf,

    /// Where to save the pie chart
    #[arg(long, default_value = DEFAULT_PIE_OUT)]
    pie_out: PathBuf,

    /// Field delimiter; defaults to tab for .tsv files and comma otherwise
    #[arg(long, value_parser = parse_delimiter)]
    delimiter: Option<u8>,

    /// Also write a JSON summary of the counts to this path
    #[arg(long)]
    summary_json: Option<PathBuf>,

    /// Diagnostic log level (overridden by RUST_LOG)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

#[derive(Debug, Clone)]
struct RunConfig {
    input: PathBuf,
    bar_out: PathBuf,
    pie_out: PathBuf,
    delimiter: Option<u8>,
    summary_json: Option<PathBuf>,
}

impl From<Args> for RunConfig {
    fn from(a: Args) -> Self {
        RunConfig {
            input: a.input,
            bar_out: a.bar_out,
            pie_out: a.pie_out,
            delimiter: a.delimiter,
            summary_json: a.summary_json,
        }
    }
}

fn parse_delimiter(raw: &str) -> Result<u8, String> {
    match raw {
        "\\t" | "tab" | "\t" => Ok(b'\t'),
        _ => {
            let mut chars = raw.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) if c.is_ascii() => Ok(c as u8),
                _ => Err(format!(
                    "delimiter must be a single ASCII character, got '{raw}'"
                )),
            }
        }
    }
}

fn run(config: RunConfig) -> Result<(), AppError> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    out.write_all(render_intro().as_bytes())?;
    out.write_all(render_loading(&config.input).as_bytes())?;
    out.flush()?;
    let stage1 = run_stage1(&config.input, config.delimiter)?;

    out.write_all(render_computing().as_bytes())?;
    let aggregation = run_stage2(&stage1.dataset)?;
    out.write_all(render_breakdown(&aggregation.counts).as_bytes())?;

    out.write_all(render_saving_bar(&config.bar_out).as_bytes())?;
    out.flush()?;
    run_stage3(&aggregation.counts, ChartKind::Bar, &config.bar_out)?;

    out.write_all(render_saving_pie(&config.pie_out).as_bytes())?;
    out.flush()?;
    run_stage3(&aggregation.counts, ChartKind::Pie, &config.pie_out)?;

    if let Some(summary_path) = &config.summary_json {
        run_stage4(
            &Stage4Input {
                input_path: &stage1.spec.path,
                aggregation: &aggregation,
                bar_path: &config.bar_out,
                pie_path: &config.pie_out,
            },
            summary_path,
        )?;
    }

    out.write_all(render_complete().as_bytes())?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
