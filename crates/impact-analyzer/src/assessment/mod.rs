//! Rule-based environmental impact assessment.
//!
//! The pipeline is a pure function of its inputs: the description is scanned
//! for sustainability signals, the category baseline is adjusted per
//! dimension, the dimensions are weighted into an overall score, and each
//! dimension gets a one-sentence explanation. Lexicon and baseline tables are
//! static and shared read-only, so an analyzer can be used from any number of
//! threads at once.

pub mod baseline;
pub mod domain;
pub mod explanation;
pub mod extraction;
pub mod lexicon;
pub mod router;
pub mod scoring;
pub mod service;
pub mod validation;

#[cfg(test)]
mod tests;

pub use baseline::{BaselineTable, FALLBACK_CATEGORY};
pub use domain::{
    AssessmentRequest, Dimension, DimensionBreakdown, Explanations, ImpactScore, ScoreRating,
    ScoringContext,
};
pub use explanation::explain;
pub use extraction::{extract, ExtractionResult, FeatureExtractor, FeatureFlags};
pub use lexicon::Lexicon;
pub use router::assessment_router;
pub use scoring::{
    aggregate, score_carbon, score_dimensions, score_energy, score_materials, score_water,
    DimensionWeights, WEIGHTS,
};
pub use service::{AssessmentService, ComparedProduct, ComparisonError, ComparisonResult};
pub use validation::{prepare, AssessmentLimits, ValidationError};

/// Stateless scorer combining the extractor with the baseline table.
#[derive(Debug, Clone, Copy)]
pub struct ImpactAnalyzer {
    extractor: FeatureExtractor,
    baselines: &'static BaselineTable,
}

impl Default for ImpactAnalyzer {
    fn default() -> Self {
        Self::standard()
    }
}

impl ImpactAnalyzer {
    pub fn standard() -> Self {
        Self::new(Lexicon::standard(), BaselineTable::standard())
    }

    pub fn new(lexicon: &'static Lexicon, baselines: &'static BaselineTable) -> Self {
        Self {
            extractor: FeatureExtractor::new(lexicon),
            baselines,
        }
    }

    /// Score a request as given. Callers are expected to have run
    /// [`prepare`] first; an empty description simply yields no signals.
    pub fn assess(&self, request: &AssessmentRequest) -> ImpactScore {
        self.score(
            &request.category,
            &request.description,
            request.location.as_deref(),
        )
    }

    pub fn score(&self, category: &str, description: &str, location: Option<&str>) -> ImpactScore {
        let extraction = self.extractor.extract(description);
        let context = ScoringContext {
            category,
            description,
            extraction: &extraction,
            location,
        };

        let baseline = self.baselines.lookup(category);
        let breakdown = score_dimensions(baseline, &context);
        let overall_score = aggregate(&breakdown);
        let explanations = explain(&breakdown, &context);

        ImpactScore {
            overall_score,
            breakdown,
            explanations,
        }
    }
}

/// Assess a request with the standard lexicon and baselines.
pub fn assess(request: &AssessmentRequest) -> ImpactScore {
    ImpactAnalyzer::standard().assess(request)
}
