use clap::Args;
use impact_analyzer::assessment::{
    AssessmentRequest, AssessmentService, ComparisonResult, Dimension, ImpactScore, WEIGHTS,
};
use impact_analyzer::config::AppConfig;
use impact_analyzer::error::AppError;
use std::fmt;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct AssessArgs {
    /// Product name
    #[arg(long)]
    pub(crate) name: String,
    /// Product category (e.g. Electronics, Clothing, Packaging)
    #[arg(long)]
    pub(crate) category: String,
    /// Free-text product description (defaults to "Product: <name>")
    #[arg(long, default_value = "")]
    pub(crate) description: String,
    /// Manufacturing location
    #[arg(long)]
    pub(crate) location: Option<String>,
    /// Number of units assessed
    #[arg(long)]
    pub(crate) quantity: Option<f64>,
    /// Print the raw JSON score instead of a text report
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct CompareArgs {
    /// JSON file holding an array of assessment requests
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Print the raw JSON comparison instead of a table
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_assess(args: AssessArgs) -> Result<(), AppError> {
    let AssessArgs {
        name,
        category,
        description,
        location,
        quantity,
        json,
    } = args;

    let service = load_service()?;
    let request = AssessmentRequest {
        name: name.clone(),
        description,
        category: category.clone(),
        quantity,
        location,
    };
    let score = service.assess(request)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&score)?);
    } else {
        let report = ScoreReport {
            name: name.trim(),
            category: category.trim(),
            score: &score,
        };
        print!("{report}");
    }
    Ok(())
}

pub(crate) fn run_compare(args: CompareArgs) -> Result<(), AppError> {
    let CompareArgs { input, json } = args;

    let raw = std::fs::read_to_string(&input)?;
    let requests: Vec<AssessmentRequest> = serde_json::from_str(&raw)?;

    let service = load_service()?;
    let result = service.compare(requests)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", ComparisonReport(&result));
    }
    Ok(())
}

fn load_service() -> Result<AssessmentService, AppError> {
    let config = AppConfig::load()?;
    Ok(AssessmentService::new(config.assessment.limits()))
}

/// Text report for a single assessment.
pub(crate) struct ScoreReport<'a> {
    pub(crate) name: &'a str,
    pub(crate) category: &'a str,
    pub(crate) score: &'a ImpactScore,
}

impl fmt::Display for ScoreReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let score = self.score;
        writeln!(f, "Environmental impact: {} ({})", self.name, self.category)?;
        writeln!(
            f,
            "Overall score {}/100 ({})",
            score.overall_score,
            score.rating()
        )?;
        writeln!(f, "Breakdown:")?;
        for dimension in Dimension::ALL {
            writeln!(
                f,
                "  - {:<9} {:>3}  (weight {:>2}%)  {}",
                dimension.label(),
                score.breakdown.get(dimension),
                WEIGHTS.percent(dimension),
                score.explanations.get(dimension)
            )?;
        }
        Ok(())
    }
}

/// Side-by-side table for a comparison, followed by the best product.
pub(crate) struct ComparisonReport<'a>(pub(crate) &'a ComparisonResult);

impl fmt::Display for ComparisonReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:<24} {:>7} {:>6} {:>5} {:>6} {:>9}",
            "Product", "Overall", "Carbon", "Water", "Energy", "Materials"
        )?;
        for product in &self.0.products {
            let breakdown = &product.score.breakdown;
            writeln!(
                f,
                "{:<24} {:>7} {:>6} {:>5} {:>6} {:>9}",
                product.name,
                product.score.overall_score,
                breakdown.carbon,
                breakdown.water,
                breakdown.energy,
                breakdown.materials
            )?;
        }
        if let Some(best) = self.0.best() {
            writeln!(
                f,
                "Best overall: {} ({}/100, {})",
                best.name,
                best.score.overall_score,
                best.score.rating()
            )?;
        }
        Ok(())
    }
}
