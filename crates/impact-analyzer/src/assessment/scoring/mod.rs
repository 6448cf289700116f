mod rules;
mod weights;

pub use rules::{score_carbon, score_energy, score_materials, score_water};
pub use weights::{aggregate, DimensionWeights, WEIGHTS};

use super::domain::{DimensionBreakdown, ScoringContext};

/// Apply the four dimension rules to a category baseline.
pub fn score_dimensions(
    baseline: DimensionBreakdown,
    context: &ScoringContext<'_>,
) -> DimensionBreakdown {
    DimensionBreakdown {
        carbon: score_carbon(baseline.carbon, context),
        water: score_water(baseline.water, context),
        energy: score_energy(baseline.energy, context),
        materials: score_materials(baseline.materials, context),
    }
}

/// Constrain a raw adjusted score to `0..=100`.
pub(crate) fn clamp_score(raw: i32) -> u8 {
    raw.clamp(0, 100) as u8
}
