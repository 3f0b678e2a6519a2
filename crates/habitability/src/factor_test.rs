//! Tests for the individual scoring factors

use approx::assert_relative_eq;

use crate::factor::{
    Factor, FactorCategory, score_atmosphere, score_axial_tilt, score_habitable_zone, score_mass,
    score_magnetic_field, score_planet_type, score_radius, score_tectonics, score_water_coverage,
};
use crate::planet_config::{AtmosphereType, PlanetConfig, PlanetType, StarType};

fn earth() -> PlanetConfig {
    PlanetConfig::earth_like()
}

// ========== Structure ==========

#[test]
fn test_planet_type() {
    let rocky = score_planet_type(&earth());
    assert_eq!(rocky.points, 25.0);
    assert_eq!(rocky.category, FactorCategory::Structure);

    for planet_type in [PlanetType::GasGiant, PlanetType::IceGiant, PlanetType::Other] {
        let config = PlanetConfig {
            planet_type,
            ..earth()
        };
        let factor = score_planet_type(&config);
        assert_eq!(factor.points, 0.0, "{planet_type:?} should score 0");
        assert_eq!(factor.description, "Gas giants cannot support surface life");
    }
}

// ========== Physical ==========

#[test]
fn test_mass_boundaries() {
    for (mass, expected) in [(0.5, 15.0), (2.0, 15.0), (1.0, 15.0), (0.49, 0.0), (2.01, 0.0)] {
        let config = PlanetConfig { mass, ..earth() };
        assert_eq!(score_mass(&config).points, expected, "mass {mass}");
    }
}

#[test]
fn test_mass_descriptions() {
    let small = score_mass(&PlanetConfig { mass: 0.1, ..earth() });
    assert_eq!(small.description, "Too small to retain substantial atmosphere");

    let large = score_mass(&PlanetConfig { mass: 10.0, ..earth() });
    assert_eq!(large.description, "Too massive, likely a gas giant");
    assert_eq!(large.category, FactorCategory::Physical);
}

#[test]
fn test_radius_in_band() {
    for radius in [0.8, 1.0, 1.5] {
        let factor = score_radius(&PlanetConfig { radius, ..earth() });
        assert_eq!(factor.points, 10.0, "radius {radius}");
        assert_eq!(factor.description, "Size supports Earth-like surface gravity");
    }
}

#[test]
fn test_radius_partial_credit() {
    // |2.0 − 1.15| × 5 = 4.25 penalty
    let factor = score_radius(&PlanetConfig { radius: 2.0, ..earth() });
    assert_relative_eq!(factor.points, 5.75, epsilon = 1e-9);
    assert_eq!(factor.description, "Size affects surface gravity significantly");

    // |0.5 − 1.15| × 5 = 3.25 penalty
    let small = score_radius(&PlanetConfig { radius: 0.5, ..earth() });
    assert_relative_eq!(small.points, 6.75, epsilon = 1e-9);
}

#[test]
fn test_radius_partial_credit_floors_at_zero() {
    let factor = score_radius(&PlanetConfig { radius: 11.2, ..earth() });
    assert_eq!(factor.points, 0.0);
}

#[test]
fn test_radius_nan_scores_zero() {
    let factor = score_radius(&PlanetConfig {
        radius: f64::NAN,
        ..earth()
    });
    assert_eq!(factor.points, 0.0);
}

// ========== Location ==========

#[test]
fn test_habitable_zone_within() {
    let config = earth();
    let zone = config.star_type.habitable_zone();
    let factor = score_habitable_zone(&config, &zone, 32.8);
    assert_eq!(factor.points, 20.0);
    assert_eq!(factor.category, FactorCategory::Location);
    assert_eq!(
        factor.description,
        "Located in habitable zone (liquid water possible)"
    );
}

#[test]
fn test_habitable_zone_too_close_mentions_temperature() {
    let config = PlanetConfig {
        distance: 0.39,
        ..earth()
    };
    let zone = config.star_type.habitable_zone();
    let factor = score_habitable_zone(&config, &zone, 217.2);
    assert_eq!(factor.points, 0.0);
    assert_eq!(factor.description, "Too close to star (217°C - too hot)");
}

#[test]
fn test_habitable_zone_too_far_mentions_temperature() {
    let config = PlanetConfig {
        distance: 5.2,
        star_type: StarType::SunLike,
        ..earth()
    };
    let zone = config.star_type.habitable_zone();
    let factor = score_habitable_zone(&config, &zone, -138.9);
    assert_eq!(factor.points, 0.0);
    assert_eq!(factor.description, "Too far from star (-139°C - too cold)");
}

// ========== Atmosphere ==========

#[test]
fn test_atmosphere_points() {
    let cases = [
        (AtmosphereType::NitrogenOxygen, 15.0),
        (AtmosphereType::CarbonDioxide, 5.0),
        (AtmosphereType::HydrogenHelium, 0.0),
        (AtmosphereType::None, 0.0),
        (AtmosphereType::Other, 0.0),
    ];
    for (atmosphere, expected) in cases {
        let config = PlanetConfig {
            atmosphere,
            ..earth()
        };
        assert_eq!(score_atmosphere(&config).points, expected, "{atmosphere:?}");
    }
}

#[test]
fn test_atmosphere_descriptions() {
    let none = score_atmosphere(&PlanetConfig {
        atmosphere: AtmosphereType::None,
        ..earth()
    });
    assert_eq!(none.description, "No atmosphere - no protection from radiation");

    let giant = score_atmosphere(&PlanetConfig {
        atmosphere: AtmosphereType::HydrogenHelium,
        ..earth()
    });
    assert_eq!(giant.description, "Gas giant atmosphere, unsuitable for life");
}

// ========== Surface ==========

#[test]
fn test_water_coverage_bands() {
    let cases = [
        (30.0, 10.0),
        (70.0, 10.0),
        (90.0, 10.0),
        (29.9, 5.0),
        (95.0, 5.0),
        (0.5, 5.0),
        (0.0, 0.0),
    ];
    for (water, expected) in cases {
        let config = PlanetConfig {
            water_coverage_percent: water,
            ..earth()
        };
        assert_eq!(score_water_coverage(&config).points, expected, "water {water}");
    }
}

#[test]
fn test_water_coverage_descriptions_include_percentage() {
    let optimal = score_water_coverage(&earth());
    assert_eq!(optimal.description, "Optimal water coverage (70%)");

    let some = score_water_coverage(&PlanetConfig {
        water_coverage_percent: 12.5,
        ..earth()
    });
    assert_eq!(some.description, "Some water present (12.5%)");

    let dry = score_water_coverage(&PlanetConfig {
        water_coverage_percent: 0.0,
        ..earth()
    });
    assert_eq!(dry.description, "No liquid water detected");
}

// ========== Protection, geology, climate ==========

#[test]
fn test_magnetic_field() {
    assert_eq!(score_magnetic_field(&earth()).points, 5.0);
    let exposed = score_magnetic_field(&PlanetConfig {
        has_magnetic_field: false,
        ..earth()
    });
    assert_eq!(exposed.points, 0.0);
    assert_eq!(exposed.category, FactorCategory::Protection);
}

#[test]
fn test_tectonics() {
    assert_eq!(score_tectonics(&earth()).points, 5.0);
    let stagnant = score_tectonics(&PlanetConfig {
        has_tectonic_activity: false,
        ..earth()
    });
    assert_eq!(stagnant.points, 0.0);
    assert_eq!(stagnant.category, FactorCategory::Geology);
}

#[test]
fn test_axial_tilt_bands() {
    let cases = [
        (15.0, 5.0),
        (23.5, 5.0),
        (35.0, 5.0),
        (0.0, 2.0),
        (14.9, 2.0),
        (35.1, 0.0),
        (90.0, 0.0),
    ];
    for (tilt, expected) in cases {
        let config = PlanetConfig {
            axial_tilt_degrees: tilt,
            ..earth()
        };
        assert_eq!(score_axial_tilt(&config).points, expected, "tilt {tilt}");
    }
}

// ========== Factor metadata ==========

#[test]
fn test_max_points_total_110() {
    let total: f64 = Factor::ALL.iter().map(Factor::max_points).sum();
    assert_eq!(total, 110.0);
}

#[test]
fn test_is_optimal() {
    assert!(score_mass(&earth()).is_optimal());
    assert!(!score_axial_tilt(&PlanetConfig {
        axial_tilt_degrees: 5.0,
        ..earth()
    })
    .is_optimal());
}
