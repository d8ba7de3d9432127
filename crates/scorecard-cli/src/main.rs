use std::io::IsTerminal;
use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use clap::{Parser, ValueEnum};
use log::debug;
use scorecard_core::{export_csv, load_comparison, report, Color, Style};

#[derive(Debug, Parser)]
#[command(
    name = "scorecard",
    version,
    about = "Analyze AI model performance comparison results"
)]
struct Cli {
    /// Comparison result JSON file
    #[arg(long, default_value = "comparison_result.json")]
    data: PathBuf,

    /// Render an additional chart
    #[arg(long, value_enum)]
    chart: Option<ChartKind>,

    /// Export the ranked data next to the input file
    #[arg(long, value_enum)]
    export: Option<ExportKind>,

    /// Number of top models to show in the ranking table and score chart
    #[arg(long, default_value_t = 8)]
    top: usize,

    /// Disable ANSI colors (implied when stdout is not a terminal)
    #[arg(long)]
    no_color: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ChartKind {
    Scores,
    Radar,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ExportKind {
    Csv,
    Excel,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let style = if cli.no_color || !std::io::stdout().is_terminal() {
        Style::Plain
    } else {
        Style::Ansi
    };
    debug!("style={style:?} top={}", cli.top);
    run(cli, style)
}

fn run(cli: Cli, style: Style) -> Result<()> {
    // Reject unsupported choices before any report is printed.
    if matches!(cli.export, Some(ExportKind::Excel)) {
        bail!("excel export is not supported; use --export csv");
    }

    let data = load_comparison(&cli.data)?;
    let ranked = data.ranked();

    print!(
        "{}",
        report::header("AI Model Performance Comparison", style)
    );
    println!("{}", data.quiz_metadata.topic);
    println!("Date: {}", data.quiz_metadata.date);
    println!();
    print!("{}", report::ranking_table(&ranked, cli.top, style));
    print!("{}", report::statistics(&data.summary_statistics, style));
    print!("{}", report::category_breakdown(&ranked, style));
    print!("{}", report::issues(&ranked, style));
    print!("{}", report::key_findings(&data.key_findings, style));

    match cli.chart {
        Some(ChartKind::Scores) => print!("{}", report::score_chart(&ranked, cli.top, style)),
        Some(ChartKind::Radar) => print!("{}", report::radar_notice(style)),
        None => {}
    }

    if matches!(cli.export, Some(ExportKind::Csv)) {
        let dir = export_dir(&cli.data);
        let path = export_csv(&ranked, dir)?;
        println!(
            "{} Data exported to: {}",
            style.paint(Color::Green, "✓"),
            path.display()
        );
    }

    Ok(())
}

/// The export lands next to the input file.
fn export_dir(data: &Path) -> &Path {
    match data.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}
