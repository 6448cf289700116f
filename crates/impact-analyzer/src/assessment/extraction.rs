use serde::Serialize;
use std::collections::BTreeSet;

use super::lexicon::Lexicon;

/// Structured signal set derived from a product description.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ExtractionResult {
    pub keywords: BTreeSet<&'static str>,
    pub materials: BTreeSet<&'static str>,
    pub certifications: BTreeSet<&'static str>,
    pub features: FeatureFlags,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureFlags {
    pub is_recycled: bool,
    pub is_renewable: bool,
    pub is_local_manufactured: bool,
    pub has_energy_efficiency: bool,
}

/// Scans descriptions against a lexicon. Matching is case-insensitive
/// substring containment; there is no tokenization.
#[derive(Debug, Clone, Copy)]
pub struct FeatureExtractor {
    lexicon: &'static Lexicon,
}

impl Default for FeatureExtractor {
    fn default() -> Self {
        Self::new(Lexicon::standard())
    }
}

impl FeatureExtractor {
    pub fn new(lexicon: &'static Lexicon) -> Self {
        Self { lexicon }
    }

    pub fn extract(&self, description: &str) -> ExtractionResult {
        let text = description.to_lowercase();
        let lexicon = self.lexicon;

        let keywords = matches(&text, lexicon.keyword_phrases());
        let materials = matches(&text, lexicon.materials.iter().copied());
        let certifications = matches(&text, lexicon.certifications.iter().copied());

        let any_sustainable = contains_any(&text, lexicon.sustainable_materials);
        let features = FeatureFlags {
            is_recycled: any_sustainable || materials.contains("recycled"),
            is_renewable: any_sustainable
                || materials.contains("bamboo")
                || materials.contains("cotton"),
            is_local_manufactured: contains_any(&text, lexicon.regional_locations),
            has_energy_efficiency: contains_any(&text, lexicon.energy_efficient),
        };

        ExtractionResult {
            keywords,
            materials,
            certifications,
            features,
        }
    }
}

/// Extract signals using the standard lexicon.
pub fn extract(description: &str) -> ExtractionResult {
    FeatureExtractor::default().extract(description)
}

fn matches(
    text: &str,
    phrases: impl Iterator<Item = &'static str>,
) -> BTreeSet<&'static str> {
    phrases.filter(|phrase| text.contains(phrase)).collect()
}

fn contains_any(text: &str, phrases: &[&str]) -> bool {
    phrases.iter().any(|phrase| text.contains(phrase))
}
