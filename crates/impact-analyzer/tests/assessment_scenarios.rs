use impact_analyzer::assessment::{
    assess, AssessmentRequest, BaselineTable, DimensionBreakdown, ImpactAnalyzer, ScoreRating,
    FALLBACK_CATEGORY,
};

#[test]
fn recycled_renewable_bottle_scores_above_baseline() {
    let request = AssessmentRequest::new(
        "Eco Bottle",
        "100% recycled aluminium, renewable energy manufacturing, carbon neutral",
        "Other",
    );

    let score = assess(&request);

    assert_eq!(score.breakdown, DimensionBreakdown::new(85, 50, 87, 75));
    assert_eq!(score.overall_score, 75);
    assert_eq!(score.rating(), ScoreRating::Good);
    assert_eq!(
        score.explanations.carbon,
        "Uses renewable energy sources, reducing carbon footprint."
    );
    assert_eq!(
        score.explanations.materials,
        "Contains recycled content and uses renewable materials."
    );
}

#[test]
fn virgin_plastic_toy_scores_below_baseline() {
    let request = AssessmentRequest::new(
        "Plastic Toy",
        "virgin plastic, petroleum-based, high power consumption",
        "Other",
    );

    let score = assess(&request);

    assert!(score.breakdown.materials < 50);
    assert!(score.breakdown.carbon < 50);
    assert!(score.breakdown.energy < 50);
    assert_eq!(score.breakdown, DimensionBreakdown::new(40, 50, 40, 32));
    assert_eq!(score.overall_score, 41);
    assert_eq!(score.rating(), ScoreRating::Fair);
}

#[test]
fn empty_description_keeps_category_baseline() {
    let request = AssessmentRequest::new("Laptop", "", "Electronics");

    let score = assess(&request);

    assert_eq!(score.breakdown, DimensionBreakdown::new(45, 60, 50, 40));
    assert_eq!(score.overall_score, 49);
}

#[test]
fn unknown_category_falls_back_to_other() {
    let table = BaselineTable::standard();
    let other = table.lookup(FALLBACK_CATEGORY);
    for category in ["Spaceships", "", "electronics", "Other "] {
        assert_eq!(table.lookup(category), other, "{category:?} should fall back");
    }

    let score = assess(&AssessmentRequest::new("Rocket", "", "Spaceships"));
    assert_eq!(score.breakdown, DimensionBreakdown::new(50, 50, 50, 50));
    assert_eq!(score.overall_score, 50);
}

#[test]
fn repeated_assessments_are_identical() {
    let analyzer = ImpactAnalyzer::standard();
    let request = AssessmentRequest::new(
        "Jacket",
        "Organic cotton, GOTS certified, water intensive dyeing, made in Bangladesh",
        "Clothing",
    )
    .with_location("Dhaka, Bangladesh");

    let first = analyzer.assess(&request);
    for _ in 0..10 {
        assert_eq!(analyzer.assess(&request), first);
    }
}

#[test]
fn every_score_stays_in_range() {
    let analyzer = ImpactAnalyzer::standard();
    let descriptions = [
        "",
        "coal fossil fuel petroleum energy intensive high power consumption virgin plastic",
        "water intensive dyeing cotton",
        "renewable carbon neutral net zero local water efficient drip irrigation",
        "energy efficient led renewable energy recycled biodegradable fsc gots b corp \
         cradle-to-cradle iso 14001 fair trade organic carbon trust",
    ];
    let categories: Vec<_> = BaselineTable::standard()
        .categories()
        .chain(["Unlisted"])
        .collect();

    for category in &categories {
        for description in descriptions {
            for location in [None, Some("China")] {
                let score = analyzer.score(category, description, location);
                let breakdown = score.breakdown;
                for value in [
                    score.overall_score,
                    breakdown.carbon,
                    breakdown.water,
                    breakdown.energy,
                    breakdown.materials,
                ] {
                    assert!(value <= 100, "{category}/{description}: {value}");
                }
            }
        }
    }
}

#[test]
fn analyzer_is_shareable_across_threads() {
    let analyzer = ImpactAnalyzer::standard();
    let request = AssessmentRequest::new("Chair", "FSC certified oak, made locally", "Furniture");
    let expected = analyzer.assess(&request);

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let request = request.clone();
            std::thread::spawn(move || analyzer.assess(&request))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().expect("thread completes"), expected);
    }
}
