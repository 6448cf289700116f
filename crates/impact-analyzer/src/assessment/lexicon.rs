//! Trigger phrases for sustainability signals.
//!
//! Every phrase is lower-case and matched as a literal substring of the
//! lower-cased description, so multi-word phrases match as written.

/// Read-only phrase tables consulted by the feature extractor.
#[derive(Debug)]
pub struct Lexicon {
    pub sustainable_materials: &'static [&'static str],
    pub harmful_materials: &'static [&'static str],
    pub carbon_high: &'static [&'static str],
    pub carbon_low: &'static [&'static str],
    pub water_high: &'static [&'static str],
    pub water_low: &'static [&'static str],
    pub energy_efficient: &'static [&'static str],
    pub energy_inefficient: &'static [&'static str],
    pub certifications: &'static [&'static str],
    pub regional_locations: &'static [&'static str],
    pub materials: &'static [&'static str],
}

impl Lexicon {
    pub fn standard() -> &'static Lexicon {
        &STANDARD_LEXICON
    }

    /// All keyword phrases, in table order. Materials and locations are
    /// scanned separately and are not part of the keyword set.
    pub fn keyword_phrases(&self) -> impl Iterator<Item = &'static str> + '_ {
        [
            self.sustainable_materials,
            self.harmful_materials,
            self.carbon_high,
            self.carbon_low,
            self.water_high,
            self.water_low,
            self.energy_efficient,
            self.energy_inefficient,
            self.certifications,
        ]
        .into_iter()
        .flat_map(|phrases| phrases.iter().copied())
    }
}

static STANDARD_LEXICON: Lexicon = Lexicon {
    sustainable_materials: &[
        "recycled",
        "recycle",
        "reused",
        "upcycled",
        "biodegradable",
        "compostable",
    ],
    harmful_materials: &[
        "plastic",
        "petroleum",
        "virgin",
        "synthetic",
        "styrofoam",
        "non-degradable",
    ],
    carbon_high: &[
        "coal",
        "petroleum",
        "fossil fuel",
        "high emissions",
        "carbon intensive",
    ],
    carbon_low: &[
        "renewable",
        "carbon neutral",
        "net zero",
        "solar",
        "wind",
        "hydro",
    ],
    water_high: &["water intensive", "dyeing", "cotton", "beef", "irrigation"],
    water_low: &[
        "water efficient",
        "drought resistant",
        "drip irrigation",
        "recycled water",
    ],
    energy_efficient: &[
        "energy efficient",
        "low power",
        "led",
        "optimized",
        "renewable energy",
    ],
    energy_inefficient: &["energy intensive", "high power consumption", "incandescent"],
    certifications: &[
        "fsc",
        "gots",
        "cradle-to-cradle",
        "iso 14001",
        "b corp",
        "fair trade",
        "organic",
        "carbon trust",
    ],
    regional_locations: &["local", "domestic", "regional", "made in"],
    materials: &[
        "aluminium",
        "steel",
        "plastic",
        "cotton",
        "wool",
        "silk",
        "polyester",
        "bamboo",
        "cork",
        "rubber",
        "glass",
        "ceramic",
        "leather",
        "recycled",
    ],
};

/// Locations whose manufacturing is penalized on the carbon axis.
pub(crate) const HIGH_EMISSION_REGIONS: &[&str] = &["china", "india", "bangladesh", "vietnam"];
