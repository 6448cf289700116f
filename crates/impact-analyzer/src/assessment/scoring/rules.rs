use super::super::domain::ScoringContext;
use super::super::lexicon::HIGH_EMISSION_REGIONS;
use super::clamp_score;

/// Bonus per distinct certification detected.
const CERTIFICATION_BONUS: i32 = 10;

pub fn score_carbon(baseline: u8, context: &ScoringContext<'_>) -> u8 {
    let mut score = i32::from(baseline);
    let features = &context.extraction.features;

    if context.has_keyword("renewable") {
        score += 15;
    }
    if context.has_keyword("carbon neutral") {
        score += 20;
    }
    if context.has_keyword("net zero") {
        score += 20;
    }
    if features.is_local_manufactured {
        score += 10;
    }

    if context.has_keyword("coal") {
        score -= 15;
    }
    if context.has_keyword("fossil fuel") {
        score -= 15;
    }
    if context.has_keyword("petroleum") {
        score -= 10;
    }
    if context.location.is_some_and(is_high_emission_region) {
        score -= 10;
    }

    clamp_score(score)
}

pub fn score_water(baseline: u8, context: &ScoringContext<'_>) -> u8 {
    let mut score = i32::from(baseline);

    if context.has_keyword("water efficient") {
        score += 15;
    }
    if context.has_keyword("drip irrigation") {
        score += 10;
    }

    if context.has_keyword("water intensive") {
        score -= 15;
    }
    if context.has_keyword("dyeing") {
        score -= 10;
    }
    if context.has_material("cotton") {
        score -= 5;
    }

    clamp_score(score)
}

pub fn score_energy(baseline: u8, context: &ScoringContext<'_>) -> u8 {
    let mut score = i32::from(baseline);

    if context.extraction.features.has_energy_efficiency {
        score += 15;
    }
    if context.has_keyword("led") {
        score += 10;
    }
    if context.has_keyword("renewable energy") {
        score += 12;
    }

    if context.has_keyword("energy intensive") {
        score -= 15;
    }
    if context.has_keyword("high power consumption") {
        score -= 10;
    }

    clamp_score(score)
}

pub fn score_materials(baseline: u8, context: &ScoringContext<'_>) -> u8 {
    let mut score = i32::from(baseline);
    let extraction = context.extraction;

    if extraction.features.is_recycled {
        score += 15;
    }
    if extraction.features.is_renewable {
        score += 10;
    }
    if context.has_keyword("biodegradable") {
        score += 12;
    }
    score += extraction.certifications.len() as i32 * CERTIFICATION_BONUS;

    if context.has_material("plastic") {
        score -= 8;
    }
    if context.has_keyword("virgin") {
        score -= 10;
    }

    clamp_score(score)
}

/// Case-insensitive substring match against the high-emission region list.
pub(crate) fn is_high_emission_region(location: &str) -> bool {
    let location = location.to_lowercase();
    HIGH_EMISSION_REGIONS
        .iter()
        .any(|region| location.contains(region))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_match_ignores_case_and_surrounding_text() {
        assert!(is_high_emission_region("Shenzhen, CHINA"));
        assert!(is_high_emission_region("Ho Chi Minh City, Vietnam"));
        assert!(!is_high_emission_region("Portugal"));
        assert!(!is_high_emission_region(""));
    }
}
