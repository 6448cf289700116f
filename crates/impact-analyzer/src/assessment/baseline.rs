use super::domain::DimensionBreakdown;

/// Category used whenever a lookup misses.
pub const FALLBACK_CATEGORY: &str = "Other";

/// Static per-category starting scores.
#[derive(Debug)]
pub struct BaselineTable {
    entries: &'static [(&'static str, DimensionBreakdown)],
    fallback: DimensionBreakdown,
}

impl BaselineTable {
    pub fn standard() -> &'static BaselineTable {
        &STANDARD_BASELINES
    }

    /// Exact, case-sensitive lookup. Unknown categories receive the `Other`
    /// baseline; this is policy, not an error.
    pub fn lookup(&self, category: &str) -> DimensionBreakdown {
        self.entries
            .iter()
            .find(|(name, _)| *name == category)
            .map(|(_, baseline)| *baseline)
            .unwrap_or(self.fallback)
    }

    pub fn contains(&self, category: &str) -> bool {
        self.entries.iter().any(|(name, _)| *name == category)
    }

    pub fn categories(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(name, _)| *name)
    }
}

const OTHER: DimensionBreakdown = DimensionBreakdown::new(50, 50, 50, 50);

static STANDARD_BASELINES: BaselineTable = BaselineTable {
    entries: &[
        ("Electronics", DimensionBreakdown::new(45, 60, 50, 40)),
        ("Clothing", DimensionBreakdown::new(50, 30, 60, 45)),
        ("Food & Beverage", DimensionBreakdown::new(40, 35, 55, 50)),
        ("Packaging", DimensionBreakdown::new(35, 70, 65, 35)),
        ("Furniture", DimensionBreakdown::new(50, 65, 60, 50)),
        ("Transportation", DimensionBreakdown::new(30, 75, 40, 55)),
        ("Energy", DimensionBreakdown::new(50, 60, 55, 60)),
        (FALLBACK_CATEGORY, OTHER),
    ],
    fallback: OTHER,
};
