use serde::{Deserialize, Serialize};

/// One evaluated model as it appears in the comparison result file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelRecord {
	pub name: String,
	/// Aggregate 0-100 score computed upstream; never recomputed here.
	pub weighted_score: f64,
	pub scores: CategoryScores,
	pub hallucinations: Vec<String>,
	pub assumptions_without_evidence: Vec<String>,
}

impl ModelRecord {
	pub fn has_issues(&self) -> bool {
		!self.hallucinations.is_empty() || !self.assumptions_without_evidence.is_empty()
	}
}

/// Sub-scores for the six fixed categories. Each is bounded by the
/// category maximum in [`Category::max`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryScores {
	pub problem_recognition: u32,
	pub technical_accuracy: u32,
	pub solution_quality: u32,
	pub completeness: u32,
	pub no_hallucinations: u32,
	pub documentation_usage: u32,
}

impl CategoryScores {
	pub fn get(&self, category: Category) -> u32 {
		match category {
			Category::ProblemRecognition => self.problem_recognition,
			Category::TechnicalAccuracy => self.technical_accuracy,
			Category::SolutionQuality => self.solution_quality,
			Category::Completeness => self.completeness,
			Category::NoHallucinations => self.no_hallucinations,
			Category::DocumentationUsage => self.documentation_usage,
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
	ProblemRecognition,
	TechnicalAccuracy,
	SolutionQuality,
	Completeness,
	NoHallucinations,
	DocumentationUsage,
}

impl Category {
	pub const ALL: [Category; 6] = [
		Category::ProblemRecognition,
		Category::TechnicalAccuracy,
		Category::SolutionQuality,
		Category::Completeness,
		Category::NoHallucinations,
		Category::DocumentationUsage,
	];

	pub fn label(self) -> &'static str {
		match self {
			Category::ProblemRecognition => "Problem Recognition",
			Category::TechnicalAccuracy => "Technical Accuracy",
			Category::SolutionQuality => "Solution Quality",
			Category::Completeness => "Completeness",
			Category::NoHallucinations => "No Hallucinations",
			Category::DocumentationUsage => "Documentation Usage",
		}
	}

	pub fn max(self) -> u32 {
		match self {
			Category::ProblemRecognition => 25,
			Category::TechnicalAccuracy => 25,
			Category::SolutionQuality => 20,
			Category::Completeness => 15,
			Category::NoHallucinations => 10,
			Category::DocumentationUsage => 5,
		}
	}
}

/// Aggregates computed upstream and embedded in the input file.
/// Displayed verbatim; recomputing them here could silently diverge
/// from the source data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryStats {
	pub total_models: u32,
	pub average_score: f64,
	pub highest_score: f64,
	pub lowest_score: f64,
	pub median_score: f64,
	pub standard_deviation: f64,
	pub models_perfect_hallucination_score: u32,
	pub models_with_hallucinations: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizMetadata {
	pub topic: String,
	pub date: String,
}

/// Root document, loaded once per run and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonData {
	pub quiz_metadata: QuizMetadata,
	pub ai_models: Vec<ModelRecord>,
	pub summary_statistics: SummaryStats,
	pub key_findings: Vec<String>,
}

impl ComparisonData {
	/// Models sorted by weighted score, highest first. The sort is
	/// stable, so ties keep their input order. Every report that shows
	/// a rank derives it from this ordering.
	pub fn ranked(&self) -> Vec<&ModelRecord> {
		let mut models: Vec<&ModelRecord> = self.ai_models.iter().collect();
		models.sort_by(|a, b| {
			b.weighted_score
				.partial_cmp(&a.weighted_score)
				.unwrap_or(std::cmp::Ordering::Equal)
		});
		models
	}
}
