//! Text renderers. Every function returns a `String` so the output is
//! testable and the caller decides where it goes; styling comes in as a
//! [`Style`] value per call.

use tabled::{Table, Tabled};

use crate::grade::Grade;
use crate::style::{Color, Style};
use crate::types::{Category, ModelRecord, SummaryStats};

/// Bar width for the per-category breakdown.
const CATEGORY_BAR_WIDTH: usize = 30;
/// Bar width for the overall score chart.
const CHART_BAR_WIDTH: usize = 50;
/// The category breakdown always shows this many models, independent of
/// any row cap applied to the other reports.
const BREAKDOWN_TOP: usize = 5;

/// A proportional bar of `width` cells. The filled length truncates
/// toward zero, so a 20/25 score at width 30 fills 24 cells, not 25.
pub fn bar(value: f64, max: f64, width: usize) -> String {
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);
    let mut out = "█".repeat(filled);
    out.push_str(&"░".repeat(width - filled));
    out
}

/// Section banner: a 70-column rule, the centered title, another rule.
pub fn header(text: &str, style: Style) -> String {
    let rule = "=".repeat(70);
    format!(
        "\n{}\n{}\n{}\n\n",
        style.paint_bold(Color::Header, &rule),
        style.paint_bold(Color::Header, &format!("{text:^70}")),
        style.paint_bold(Color::Header, &rule)
    )
}

#[derive(Tabled)]
struct RankingRow {
    #[tabled(rename = "Rank")]
    rank: String,
    #[tabled(rename = "Model")]
    model: String,
    #[tabled(rename = "Score")]
    score: String,
    #[tabled(rename = "Grade")]
    grade: String,
}

/// Ranking table for the top `limit` models. The top three rank cells
/// are highlighted; that is cosmetic only.
pub fn ranking_table(ranked: &[&ModelRecord], limit: usize, style: Style) -> String {
    let rows: Vec<RankingRow> = ranked
        .iter()
        .take(limit)
        .enumerate()
        .map(|(i, model)| {
            let rank = i + 1;
            let rank = if rank <= 3 {
                style.paint(Color::Green, &format!("#{rank}"))
            } else {
                rank.to_string()
            };
            let grade = Grade::from_score(model.weighted_score);
            RankingRow {
                rank,
                model: model.name.clone(),
                score: format!("{:.1}", model.weighted_score),
                grade: style.paint(grade.color(), grade.letter()),
            }
        })
        .collect();

    let mut out = Table::new(rows).to_string();
    out.push('\n');
    out
}

/// Embedded summary statistics, printed verbatim. The hallucination
/// counters are shown against `total_models` rather than a hard-coded
/// denominator.
pub fn statistics(stats: &SummaryStats, style: Style) -> String {
    let mut out = header("Summary Statistics", style);
    out.push_str(&format!(
        "Total Models Evaluated: {}\n",
        style.paint(Color::Bold, &stats.total_models.to_string())
    ));
    out.push_str(&format!(
        "Average Score: {}\n",
        style.paint(Color::Bold, &format!("{:.2}/100", stats.average_score))
    ));
    out.push_str(&format!(
        "Highest Score: {}\n",
        style.paint(Color::Green, &format!("{}/100", stats.highest_score))
    ));
    out.push_str(&format!(
        "Lowest Score: {}\n",
        style.paint(Color::Red, &format!("{}/100", stats.lowest_score))
    ));
    out.push_str(&format!(
        "Median Score: {}\n",
        style.paint(Color::Bold, &format!("{:.1}/100", stats.median_score))
    ));
    out.push_str(&format!(
        "Standard Deviation: {}\n",
        style.paint(Color::Bold, &format!("{:.1}", stats.standard_deviation))
    ));
    out.push_str(&format!(
        "\nPerfect Hallucination Scores: {}\n",
        style.paint(
            Color::Green,
            &format!(
                "{}/{}",
                stats.models_perfect_hallucination_score, stats.total_models
            )
        )
    ));
    out.push_str(&format!(
        "Models with Hallucinations: {}\n",
        style.paint(
            Color::Red,
            &format!("{}/{}", stats.models_with_hallucinations, stats.total_models)
        )
    ));
    out
}

/// Per-category bars for the top five ranked models.
pub fn category_breakdown(ranked: &[&ModelRecord], style: Style) -> String {
    let mut out = header("Score Breakdown by Category", style);
    for category in Category::ALL {
        out.push_str(&format!(
            "\n{}\n",
            style.paint(
                Color::Bold,
                &format!("{} (Max: {})", category.label(), category.max())
            )
        ));
        out.push_str(&format!("{}\n", "-".repeat(60)));

        for model in ranked.iter().take(BREAKDOWN_TOP) {
            let score = model.scores.get(category);
            let max = category.max();
            // >= 80% of the category max is green, >= 60% yellow.
            let color = if score * 5 >= max * 4 {
                Color::Green
            } else if score * 5 >= max * 3 {
                Color::Yellow
            } else {
                Color::Red
            };
            out.push_str(&format!(
                "{:<25} {} [{}]\n",
                model.name,
                style.paint(color, &format!("{score}/{max}")),
                bar(score as f64, max as f64, CATEGORY_BAR_WIDTH)
            ));
        }
    }
    out
}

/// Hallucinations and unsupported assumptions, in ranked order. The
/// all-clear line appears only when no model in the whole set has
/// either list non-empty.
pub fn issues(ranked: &[&ModelRecord], style: Style) -> String {
    let mut out = header("Hallucinations and Assumptions", style);

    let mut has_issues = false;
    for model in ranked {
        if !model.has_issues() {
            continue;
        }
        has_issues = true;
        out.push_str(&format!("\n{}\n", style.paint(Color::Red, &model.name)));
        if !model.hallucinations.is_empty() {
            out.push_str(&format!(
                "  {}\n",
                style.paint(Color::Yellow, "⚠ Hallucinations:")
            ));
            for h in &model.hallucinations {
                out.push_str(&format!("    • {h}\n"));
            }
        }
        if !model.assumptions_without_evidence.is_empty() {
            out.push_str(&format!(
                "  {}\n",
                style.paint(Color::Yellow, "⚠ Assumptions Without Evidence:")
            ));
            for a in &model.assumptions_without_evidence {
                out.push_str(&format!("    • {a}\n"));
            }
        }
    }

    if !has_issues {
        out.push_str(&format!(
            "{}\n",
            style.paint(
                Color::Green,
                "No hallucinations or unsupported assumptions found!"
            )
        ));
    }
    out
}

/// Key findings as a numbered list, input order preserved.
pub fn key_findings(findings: &[String], style: Style) -> String {
    let mut out = header("Key Findings", style);
    for (i, finding) in findings.iter().enumerate() {
        out.push_str(&format!("{}. {}\n", i + 1, finding));
    }
    out
}

/// Weighted-score bars for the top `limit` models against a fixed
/// maximum of 100. The color bands here are coarser than the grade
/// bins and deliberately kept separate from them.
pub fn score_chart(ranked: &[&ModelRecord], limit: usize, style: Style) -> String {
    let mut out = header("Score Chart", style);
    for model in ranked.iter().take(limit) {
        let score = model.weighted_score;
        let color = if score >= 90.0 {
            Color::Green
        } else if score >= 70.0 {
            Color::Cyan
        } else if score >= 50.0 {
            Color::Yellow
        } else {
            Color::Red
        };
        out.push_str(&format!(
            "{} {} {}\n",
            style.paint(color, &format!("{score:5.1}")),
            bar(score, 100.0, CHART_BAR_WIDTH),
            model.name
        ));
    }
    out
}

/// Radar charts are not rendered here; point at the CSV export instead.
pub fn radar_notice(style: Style) -> String {
    format!(
        "\n{}\n",
        style.paint(
            Color::Yellow,
            "Note: For radar charts, import the CSV file into Excel or use a visualization tool."
        )
    )
}
