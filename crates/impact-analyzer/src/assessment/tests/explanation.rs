use super::common::with_context;
use crate::assessment::{explain, BaselineTable, DimensionBreakdown, ImpactAnalyzer};

fn explain_text(description: &str, breakdown: DimensionBreakdown) -> crate::assessment::Explanations {
    with_context(description, None, |ctx| explain(&breakdown, ctx))
}

const NEUTRAL: DimensionBreakdown = DimensionBreakdown::new(50, 50, 50, 50);

#[test]
fn carbon_prefers_renewable_over_carbon_neutral() {
    let both = explain_text("renewable and carbon neutral", NEUTRAL);
    assert_eq!(
        both.carbon,
        "Uses renewable energy sources, reducing carbon footprint."
    );

    let neutral_only = explain_text("carbon neutral shipping", NEUTRAL);
    assert_eq!(
        neutral_only.carbon,
        "Manufactured with carbon-neutral processes."
    );
}

#[test]
fn score_bands_apply_without_signals() {
    let high = explain_text("", DimensionBreakdown::new(70, 70, 70, 70));
    assert!(high.carbon.starts_with("Low carbon"));
    assert!(high.water.starts_with("Minimal water"));
    assert!(high.energy.starts_with("Excellent energy"));
    assert!(high.materials.starts_with("Materials are sustainably sourced"));

    let moderate = explain_text("", NEUTRAL);
    assert!(moderate.carbon.starts_with("Moderate carbon"));
    assert!(moderate.water.starts_with("Moderate water"));
    assert!(moderate.energy.starts_with("Average energy"));
    assert!(moderate.materials.starts_with("Materials have moderate"));

    let low = explain_text("", DimensionBreakdown::new(49, 49, 49, 49));
    assert!(low.carbon.starts_with("High carbon"));
    assert!(low.water.starts_with("High water"));
    assert!(low.energy.starts_with("High energy"));
    assert!(low.materials.starts_with("Materials raise"));
}

#[test]
fn water_and_energy_name_their_signals() {
    let explanations = explain_text("water efficient, energy efficient", NEUTRAL);
    assert_eq!(explanations.water, "Designed with water conservation in mind.");
    assert_eq!(
        explanations.energy,
        "Designed for optimal energy performance and minimal consumption."
    );
}

#[test]
fn materials_list_certifications_by_name() {
    let explanations = explain_text("FSC certified oak", NEUTRAL);
    assert_eq!(explanations.materials, "Certified (fsc).");
}

#[test]
fn materials_join_at_most_two_signals() {
    let explanations = explain_text("recycled bamboo, gots", NEUTRAL);
    assert_eq!(
        explanations.materials,
        "Contains recycled content and uses renewable materials."
    );
}

#[test]
fn materials_drop_certifications_once_a_sustainable_keyword_matches() {
    let explanations = explain_text("recycled oak, FSC", NEUTRAL);
    assert_eq!(
        explanations.materials,
        "Contains recycled content and uses renewable materials."
    );
    assert!(!explanations.materials.contains("fsc"));
}

#[test]
fn every_explanation_is_present_for_every_category() {
    let analyzer = ImpactAnalyzer::standard();
    for category in BaselineTable::standard().categories() {
        let score = analyzer.score(category, "", None);
        let explanations = &score.explanations;
        for text in [
            &explanations.carbon,
            &explanations.water,
            &explanations.energy,
            &explanations.materials,
        ] {
            assert!(!text.is_empty(), "{category} produced an empty explanation");
        }
    }
}
