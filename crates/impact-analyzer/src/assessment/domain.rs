use serde::{Deserialize, Serialize};
use std::fmt;

use super::extraction::ExtractionResult;

/// Product submitted for assessment.
///
/// Every field defaults so that a payload missing `name` or `category` still
/// deserializes and can be rejected by validation with a degraded score.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AssessmentRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl AssessmentRequest {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            category: category.into(),
            quantity: None,
            location: None,
        }
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}

/// The four weighted sustainability axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Carbon,
    Water,
    Energy,
    Materials,
}

impl Dimension {
    pub const ALL: [Dimension; 4] = [
        Dimension::Carbon,
        Dimension::Water,
        Dimension::Energy,
        Dimension::Materials,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Dimension::Carbon => "Carbon",
            Dimension::Water => "Water",
            Dimension::Energy => "Energy",
            Dimension::Materials => "Materials",
        }
    }
}

/// Per-dimension scores, each in `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DimensionBreakdown {
    pub carbon: u8,
    pub water: u8,
    pub energy: u8,
    pub materials: u8,
}

impl DimensionBreakdown {
    pub const fn new(carbon: u8, water: u8, energy: u8, materials: u8) -> Self {
        Self {
            carbon,
            water,
            energy,
            materials,
        }
    }

    pub fn get(&self, dimension: Dimension) -> u8 {
        match dimension {
            Dimension::Carbon => self.carbon,
            Dimension::Water => self.water,
            Dimension::Energy => self.energy,
            Dimension::Materials => self.materials,
        }
    }
}

/// Natural-language justification for each dimension score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Explanations {
    pub carbon: String,
    pub water: String,
    pub energy: String,
    pub materials: String,
}

impl Explanations {
    pub fn get(&self, dimension: Dimension) -> &str {
        match dimension {
            Dimension::Carbon => &self.carbon,
            Dimension::Water => &self.water,
            Dimension::Energy => &self.energy,
            Dimension::Materials => &self.materials,
        }
    }
}

/// Final assessment artifact returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactScore {
    pub overall_score: u8,
    pub breakdown: DimensionBreakdown,
    pub explanations: Explanations,
}

impl ImpactScore {
    pub fn rating(&self) -> ScoreRating {
        ScoreRating::from_score(self.overall_score)
    }

    /// Zero-valued score used by the HTTP boundary when a request cannot be
    /// assessed, so clients always receive the same shape.
    pub fn degraded(summary: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            overall_score: 0,
            breakdown: DimensionBreakdown::default(),
            explanations: Explanations {
                carbon: summary.into(),
                water: NOT_ASSESSED.to_string(),
                energy: NOT_ASSESSED.to_string(),
                materials: detail.into(),
            },
        }
    }
}

const NOT_ASSESSED: &str = "Not assessed.";

/// Display band for an overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreRating {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl ScoreRating {
    pub fn from_score(score: u8) -> Self {
        match score {
            80..=u8::MAX => ScoreRating::Excellent,
            60..=79 => ScoreRating::Good,
            40..=59 => ScoreRating::Fair,
            _ => ScoreRating::Poor,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScoreRating::Excellent => "Excellent",
            ScoreRating::Good => "Good",
            ScoreRating::Fair => "Fair",
            ScoreRating::Poor => "Poor",
        }
    }
}

impl fmt::Display for ScoreRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Inputs bundled for the dimension scorers and explanation rules.
#[derive(Debug, Clone, Copy)]
pub struct ScoringContext<'a> {
    pub category: &'a str,
    pub description: &'a str,
    pub extraction: &'a ExtractionResult,
    pub location: Option<&'a str>,
}

impl ScoringContext<'_> {
    pub fn has_keyword(&self, phrase: &str) -> bool {
        self.extraction.keywords.contains(phrase)
    }

    pub fn has_material(&self, material: &str) -> bool {
        self.extraction.materials.contains(material)
    }
}
