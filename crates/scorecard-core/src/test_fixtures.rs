//! Builders shared by the unit tests.

use crate::types::{CategoryScores, ComparisonData, ModelRecord, QuizMetadata, SummaryStats};

pub fn record(name: &str, weighted_score: f64) -> ModelRecord {
    ModelRecord {
        name: name.to_string(),
        weighted_score,
        scores: CategoryScores {
            problem_recognition: 25,
            technical_accuracy: 25,
            solution_quality: 20,
            completeness: 15,
            no_hallucinations: 10,
            documentation_usage: 5,
        },
        hallucinations: Vec::new(),
        assumptions_without_evidence: Vec::new(),
    }
}

pub fn record_with_issues(
    name: &str,
    weighted_score: f64,
    hallucinations: &[&str],
    assumptions: &[&str],
) -> ModelRecord {
    let mut model = record(name, weighted_score);
    model.hallucinations = hallucinations.iter().map(|s| s.to_string()).collect();
    model.assumptions_without_evidence = assumptions.iter().map(|s| s.to_string()).collect();
    model
}

pub fn data_with(models: Vec<ModelRecord>) -> ComparisonData {
    let total = models.len() as u32;
    ComparisonData {
        quiz_metadata: QuizMetadata {
            topic: "Fixture quiz".to_string(),
            date: "2025-11-02".to_string(),
        },
        ai_models: models,
        summary_statistics: SummaryStats {
            total_models: total,
            average_score: 0.0,
            highest_score: 0.0,
            lowest_score: 0.0,
            median_score: 0.0,
            standard_deviation: 0.0,
            models_perfect_hallucination_score: 0,
            models_with_hallucinations: 0,
        },
        key_findings: Vec::new(),
    }
}
