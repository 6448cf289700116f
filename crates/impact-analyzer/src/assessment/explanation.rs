use super::domain::{DimensionBreakdown, Explanations, ScoringContext};
use super::extraction::ExtractionResult;

/// Score band used when no dimension-specific signal explains the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Band {
    Low,
    Moderate,
    High,
}

impl Band {
    fn of(score: u8) -> Self {
        if score >= 70 {
            Band::Low
        } else if score >= 50 {
            Band::Moderate
        } else {
            Band::High
        }
    }
}

/// Build one sentence per dimension from its score and triggering signals.
pub fn explain(breakdown: &DimensionBreakdown, context: &ScoringContext<'_>) -> Explanations {
    Explanations {
        carbon: carbon_explanation(breakdown.carbon, context),
        water: water_explanation(breakdown.water, context),
        energy: energy_explanation(breakdown.energy, context),
        materials: materials_explanation(breakdown.materials, context.extraction),
    }
}

fn carbon_explanation(score: u8, context: &ScoringContext<'_>) -> String {
    if context.has_keyword("renewable") {
        return "Uses renewable energy sources, reducing carbon footprint.".to_string();
    }
    if context.has_keyword("carbon neutral") {
        return "Manufactured with carbon-neutral processes.".to_string();
    }

    match Band::of(score) {
        Band::Low => "Low carbon manufacturing process with minimal transportation impact.",
        Band::Moderate => "Moderate carbon footprint. Consider sourcing with lower-carbon methods.",
        Band::High => "High carbon footprint due to manufacturing process and/or transportation.",
    }
    .to_string()
}

fn water_explanation(score: u8, context: &ScoringContext<'_>) -> String {
    if context.has_keyword("water efficient") {
        return "Designed with water conservation in mind.".to_string();
    }

    match Band::of(score) {
        Band::Low => "Minimal water consumption in production and use.",
        Band::Moderate => "Moderate water usage. Could be reduced with efficient alternatives.",
        Band::High => {
            "High water consumption, especially relevant for textile and agricultural products."
        }
    }
    .to_string()
}

fn energy_explanation(score: u8, context: &ScoringContext<'_>) -> String {
    if context.has_keyword("energy efficient") {
        return "Designed for optimal energy performance and minimal consumption.".to_string();
    }

    match Band::of(score) {
        Band::Low => "Excellent energy efficiency over product lifetime.",
        Band::Moderate => "Average energy profile. Modern efficient alternatives may be available.",
        Band::High => "High energy consumption. Consider energy-efficient alternatives.",
    }
    .to_string()
}

/// At most this many material signals are folded into one sentence.
const MAX_MATERIAL_SIGNALS: usize = 2;

fn materials_explanation(score: u8, extraction: &ExtractionResult) -> String {
    let mut signals = Vec::new();
    if extraction.features.is_recycled {
        signals.push("contains recycled content".to_string());
    }
    if extraction.features.is_renewable {
        signals.push("uses renewable materials".to_string());
    }
    if !extraction.certifications.is_empty() {
        let names: Vec<&str> = extraction.certifications.iter().copied().collect();
        signals.push(format!("certified ({})", names.join(", ")));
    }

    if !signals.is_empty() {
        signals.truncate(MAX_MATERIAL_SIGNALS);
        return sentence(&signals.join(" and "));
    }

    match Band::of(score) {
        Band::Low => "Materials are sustainably sourced and managed.",
        Band::Moderate => "Materials have moderate sustainability profile. Look for certifications.",
        Band::High => "Materials raise sustainability concerns. Consider alternatives.",
    }
    .to_string()
}

fn sentence(clause: &str) -> String {
    let mut chars = clause.chars();
    match chars.next() {
        Some(first) => format!("{}{}.", first.to_uppercase(), chars.as_str()),
        None => String::new(),
    }
}
