use super::super::domain::{Dimension, DimensionBreakdown};

/// Fixed contribution of each dimension to the overall score, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DimensionWeights {
    pub carbon: u32,
    pub water: u32,
    pub energy: u32,
    pub materials: u32,
}

pub const WEIGHTS: DimensionWeights = DimensionWeights {
    carbon: 40,
    water: 25,
    energy: 20,
    materials: 15,
};

const _: () = assert!(
    WEIGHTS.carbon + WEIGHTS.water + WEIGHTS.energy + WEIGHTS.materials == 100,
    "dimension weights must sum to 100%"
);

impl DimensionWeights {
    pub fn percent(&self, dimension: Dimension) -> u32 {
        match dimension {
            Dimension::Carbon => self.carbon,
            Dimension::Water => self.water,
            Dimension::Energy => self.energy,
            Dimension::Materials => self.materials,
        }
    }
}

/// Weighted overall score. Computed in integer hundredths so the result is
/// exact; halves round up.
pub fn aggregate(breakdown: &DimensionBreakdown) -> u8 {
    let weighted: u32 = Dimension::ALL
        .iter()
        .map(|dimension| u32::from(breakdown.get(*dimension)) * WEIGHTS.percent(*dimension))
        .sum();
    // weighted <= 100 * 100, so the rounded quotient always fits.
    ((weighted + 50) / 100) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_sum_to_one_hundred() {
        let total: u32 = Dimension::ALL.iter().map(|d| WEIGHTS.percent(*d)).sum();
        assert_eq!(total, 100);
        assert_eq!(WEIGHTS.percent(Dimension::Carbon), 40);
        assert_eq!(WEIGHTS.percent(Dimension::Materials), 15);
    }

    #[test]
    fn aggregate_rounds_half_up() {
        // 45*0.4 + 60*0.25 + 50*0.2 + 40*0.15 = 49
        assert_eq!(aggregate(&DimensionBreakdown::new(45, 60, 50, 40)), 49);
        // 50*0.4 + 50*0.25 + 50*0.2 + 51*0.15 = 50.15
        assert_eq!(aggregate(&DimensionBreakdown::new(50, 50, 50, 51)), 50);
        // 0*0.4 + 2*0.25 + 0 + 0 = 0.5
        assert_eq!(aggregate(&DimensionBreakdown::new(0, 2, 0, 0)), 1);
        // 0*0.4 + 1*0.25 + 0 + 1*0.15 = 0.40
        assert_eq!(aggregate(&DimensionBreakdown::new(0, 1, 0, 1)), 0);
    }

    #[test]
    fn aggregate_spans_full_range() {
        assert_eq!(aggregate(&DimensionBreakdown::new(0, 0, 0, 0)), 0);
        assert_eq!(aggregate(&DimensionBreakdown::new(100, 100, 100, 100)), 100);
    }
}
