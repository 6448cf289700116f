use serde::{Deserialize, Serialize};
use tracing::info;

use super::domain::{AssessmentRequest, ImpactScore};
use super::validation::{prepare, AssessmentLimits, ValidationError};
use super::ImpactAnalyzer;

/// Boundary service: validates requests, runs the analyzer and logs results.
#[derive(Debug, Clone, Default)]
pub struct AssessmentService {
    analyzer: ImpactAnalyzer,
    limits: AssessmentLimits,
}

impl AssessmentService {
    pub fn new(limits: AssessmentLimits) -> Self {
        Self {
            analyzer: ImpactAnalyzer::standard(),
            limits,
        }
    }

    pub fn assess(&self, request: AssessmentRequest) -> Result<ImpactScore, ValidationError> {
        let request = prepare(request, &self.limits)?;
        let score = self.analyzer.assess(&request);

        info!(
            product = %request.name,
            category = %request.category,
            overall_score = score.overall_score,
            "assessment completed"
        );

        Ok(score)
    }

    /// Assess several products in input order. The first invalid product
    /// rejects the whole comparison.
    pub fn compare(
        &self,
        requests: Vec<AssessmentRequest>,
    ) -> Result<ComparisonResult, ComparisonError> {
        if requests.is_empty() {
            return Err(ComparisonError::Empty);
        }

        let products = requests
            .into_iter()
            .enumerate()
            .map(|(index, request)| {
                let position = index + 1;
                let name = request.name.trim().to_string();
                self.assess(request)
                    .map(|score| ComparedProduct {
                        id: format!("product-{position}"),
                        name,
                        score,
                    })
                    .map_err(|source| ComparisonError::InvalidProduct { position, source })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ComparisonResult { products })
    }
}

/// Side-by-side assessment of several products.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub products: Vec<ComparedProduct>,
}

impl ComparisonResult {
    /// Highest overall score; the earliest product wins ties.
    pub fn best(&self) -> Option<&ComparedProduct> {
        self.products.iter().fold(None, |best, product| match best {
            Some(current) if current.score.overall_score >= product.score.overall_score => {
                Some(current)
            }
            _ => Some(product),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparedProduct {
    pub id: String,
    pub name: String,
    pub score: ImpactScore,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ComparisonError {
    #[error("at least one product is required for a comparison")]
    Empty,
    #[error("product {position} rejected: {source}")]
    InvalidProduct {
        position: usize,
        #[source]
        source: ValidationError,
    },
}
