//! Tests for turning archive records into catalog summaries

use crate::category::PlanetCategory;
use crate::summary::{ArchiveHabitability, ExoplanetSummary, describe, group_thousands};
use crate::test_fixtures::{kepler_452b, teegarden_b, trappist_1e, wasp_12b};

// ========== Category ==========

#[test]
fn test_category_boundaries() {
    assert_eq!(PlanetCategory::from_radius(1.0), PlanetCategory::Terrestrial);
    assert_eq!(PlanetCategory::from_radius(1.25), PlanetCategory::SuperEarth);
    assert_eq!(PlanetCategory::from_radius(2.0), PlanetCategory::NeptuneLike);
    assert_eq!(PlanetCategory::from_radius(6.0), PlanetCategory::GasGiant);
}

// ========== Summary fields ==========

#[test]
fn test_kepler_452b_summary() {
    let summary = ExoplanetSummary::from_record(&kepler_452b());
    assert_eq!(summary.id, "kepler-452-b");
    assert_eq!(summary.name, "Kepler-452 b");
    assert_eq!(summary.kind, "real");
    assert_eq!(summary.category, PlanetCategory::SuperEarth);
    assert_eq!(summary.distance, "1,400 light-years");
    assert_eq!(summary.mass, "5.00 Earth masses");
    assert_eq!(summary.radius, "1.63 Earth radii");
    assert_eq!(summary.orbital_period, "384.8 days");
    assert_eq!(summary.temperature, "265 K (-8°C)");
    assert_eq!(summary.discovery_year, "2015");
    assert_eq!(summary.discovery_method, "Transit");
    assert_eq!(summary.host_star, "Kepler-452");
    assert_eq!(
        summary.image,
        "/placeholder.svg?height=400&width=600&query=super%20earth%20exoplanet%20larger%20than%20earth"
    );
}

#[test]
fn test_summary_serializes_camel_case() {
    let value = serde_json::to_value(ExoplanetSummary::from_record(&trappist_1e())).unwrap();
    assert_eq!(value["type"], "real");
    assert_eq!(value["category"], "Terrestrial");
    assert_eq!(value["hostStar"], "TRAPPIST-1");
    assert_eq!(value["discoveryYear"], "2017");
    assert_eq!(value["distance"], "41 light-years");
}

// ========== Description ==========

#[test]
fn test_describe_long_year() {
    let record = kepler_452b();
    assert_eq!(
        describe(&record, PlanetCategory::SuperEarth),
        "A super-earth exoplanet orbiting Kepler-452. \
         This planet orbits within a moderate temperature range. \
         Its year is longer than Earth's, taking over a year to complete one orbit."
    );
}

#[test]
fn test_describe_hot_short_orbit() {
    let record = wasp_12b();
    assert_eq!(
        describe(&record, PlanetCategory::GasGiant),
        "A gas giant exoplanet orbiting WASP-12. \
         Its close orbit results in extremely high temperatures. \
         It completes an orbit in just days, racing around its host star."
    );
}

#[test]
fn test_describe_cold_medium_orbit() {
    let mut record = trappist_1e();
    record.pl_eqt = 150.0;
    record.pl_orbper = 100.0;
    assert_eq!(
        describe(&record, PlanetCategory::Terrestrial),
        "A terrestrial exoplanet orbiting TRAPPIST-1. \
         Located far from its star, this world experiences frigid temperatures. "
    );
}

// ========== Habitability note ==========

#[test]
fn test_habitability_tiers() {
    assert_eq!(
        ArchiveHabitability::classify(&wasp_12b()),
        ArchiveHabitability::GasGiant
    );
    assert_eq!(
        ArchiveHabitability::classify(&teegarden_b()),
        ArchiveHabitability::Potentially
    );
    assert_eq!(
        ArchiveHabitability::classify(&trappist_1e()),
        ArchiveHabitability::MarginallyCold
    );

    let mut warm = teegarden_b();
    warm.pl_eqt = 373.15; // 100 °C
    assert_eq!(
        ArchiveHabitability::classify(&warm),
        ArchiveHabitability::MarginallyHot
    );

    let mut frozen = teegarden_b();
    frozen.pl_eqt = 173.15; // −100 °C
    assert_eq!(
        ArchiveHabitability::classify(&frozen),
        ArchiveHabitability::Extreme
    );
}

#[test]
fn test_habitability_boundaries() {
    let at = |celsius: f64| {
        let mut record = teegarden_b();
        record.pl_eqt = celsius + 273.15;
        ArchiveHabitability::classify(&record)
    };
    assert_eq!(at(0.0), ArchiveHabitability::Potentially);
    assert_eq!(at(50.0), ArchiveHabitability::Potentially);
    assert_eq!(at(51.0), ArchiveHabitability::MarginallyHot);
    assert_eq!(at(150.0), ArchiveHabitability::Extreme);
    assert_eq!(at(-1.0), ArchiveHabitability::MarginallyCold);
    assert_eq!(at(-50.0), ArchiveHabitability::Extreme);
}

#[test]
fn test_radius_limit_is_exclusive() {
    let mut record = teegarden_b();
    record.pl_rade = 2.0;
    assert_eq!(
        ArchiveHabitability::classify(&record),
        ArchiveHabitability::GasGiant
    );
}

#[test]
fn test_habitability_message_in_summary() {
    let summary = ExoplanetSummary::from_record(&teegarden_b());
    assert_eq!(
        summary.habitability,
        "Potentially habitable - Temperature range could allow liquid water on the surface."
    );
}

// ========== Formatting ==========

#[test]
fn test_group_thousands() {
    assert_eq!(group_thousands(0), "0");
    assert_eq!(group_thousands(999), "999");
    assert_eq!(group_thousands(1400), "1,400");
    assert_eq!(group_thousands(1_234_567), "1,234,567");
    assert_eq!(group_thousands(-12_000), "-12,000");
}
