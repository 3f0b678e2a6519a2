//! Tests for the catalog service and its response envelope

use approx::assert_relative_eq;

use crate::catalog::Catalog;
use crate::config::ArchiveConfig;
use crate::error::{ArchiveError, Result};
use crate::record::{ArchiveRecord, parse_records};
use crate::source::{ExoplanetSource, StaticSource};
use crate::test_fixtures;

/// Source whose every request fails, like an unreachable archive
struct UnreachableSource;

impl ExoplanetSource for UnreachableSource {
    fn fetch_recent(&self, _limit: usize) -> Result<Vec<ArchiveRecord>> {
        Err(ArchiveError::Status(503))
    }

    fn search(&self, _name: &str) -> Result<Option<ArchiveRecord>> {
        Err(ArchiveError::Request("connection refused".to_string()))
    }
}

fn catalog() -> Catalog<StaticSource> {
    Catalog::with_defaults(StaticSource::new(test_fixtures::all()))
}

// ========== Records ==========

#[test]
fn test_equilibrium_celsius() {
    assert_relative_eq!(
        test_fixtures::kepler_452b().equilibrium_celsius(),
        -8.15,
        epsilon = 1e-9
    );
}

#[test]
fn test_parse_records() {
    let json = r#"[{
        "pl_name": "Kepler-452 b", "hostname": "Kepler-452", "sy_dist": 429.5,
        "pl_bmasse": 5.0, "pl_rade": 1.63, "pl_orbper": 384.8, "pl_eqt": 265.0,
        "disc_year": 2015, "discoverymethod": "Transit"
    }]"#;
    let records = parse_records(json).unwrap();
    assert_eq!(records, vec![test_fixtures::kepler_452b()]);
}

#[test]
fn test_parse_records_rejects_missing_columns() {
    let err = parse_records(r#"[{"pl_name": "Kepler-452 b"}]"#).unwrap_err();
    assert!(matches!(err, ArchiveError::Decode(_)));
}

// ========== Static source ==========

#[test]
fn test_static_source_newest_first() {
    let source = StaticSource::new(test_fixtures::all());
    let names: Vec<String> = source
        .fetch_recent(3)
        .unwrap()
        .into_iter()
        .map(|r| r.pl_name)
        .collect();
    assert_eq!(names, ["Teegarden's Star b", "TRAPPIST-1 e", "Kepler-452 b"]);
}

#[test]
fn test_static_source_search_is_case_insensitive() {
    let source = StaticSource::new(test_fixtures::all());
    let found = source.search("trappist").unwrap().unwrap();
    assert_eq!(found.pl_name, "TRAPPIST-1 e");
    assert!(source.search("Gliese").unwrap().is_none());
}

// ========== Limit parsing ==========

#[test]
fn test_parse_limit() {
    let catalog = catalog();
    assert_eq!(catalog.parse_limit(None), 50);
    assert_eq!(catalog.parse_limit(Some("10")), 10);
    assert_eq!(catalog.parse_limit(Some(" 12abc")), 12);
    assert_eq!(catalog.parse_limit(Some("abc")), 50);
    assert_eq!(catalog.parse_limit(Some("")), 50);
}

#[test]
fn test_parse_limit_uses_configured_default() {
    let config = ArchiveConfig::from_toml_str("default_limit = 5").unwrap();
    let catalog = Catalog::new(StaticSource::default(), config);
    assert_eq!(catalog.parse_limit(None), 5);
}

// ========== List ==========

#[test]
fn test_list_success() {
    let response = catalog().list(Some(2));
    assert!(response.is_success());
    assert_eq!(response.status, 200);
    assert_eq!(response.count, Some(2));

    let data = response.data.unwrap();
    assert_eq!(data[0].name, "Teegarden's Star b");
    assert_eq!(data[1].name, "TRAPPIST-1 e");
}

#[test]
fn test_list_defaults_to_configured_limit() {
    let response = catalog().list(None);
    assert_eq!(response.count, Some(4));
}

#[test]
fn test_list_json_shape() {
    let json = serde_json::to_value(catalog().list(Some(1))).unwrap();
    assert_eq!(json["success"], true);
    assert_eq!(json["count"], 1);
    assert_eq!(json["data"][0]["id"], "teegarden's-star-b");
    assert!(json.get("error").is_none());
    assert!(json.get("status").is_none());
}

#[test]
fn test_list_source_failure() {
    let catalog = Catalog::with_defaults(UnreachableSource);
    let response = catalog.list(None);
    assert!(!response.is_success());
    assert_eq!(response.status, 500);
    assert_eq!(response.error.as_deref(), Some("Failed to fetch exoplanets"));
    assert!(response.data.is_none());
}

// ========== Search ==========

#[test]
fn test_search_found() {
    let response = catalog().search(Some("kepler-452"));
    assert_eq!(response.status, 200);
    assert!(response.count.is_none());
    assert_eq!(response.data.unwrap().host_star, "Kepler-452");
}

#[test]
fn test_search_requires_name() {
    for name in [None, Some(""), Some("   ")] {
        let response = catalog().search(name);
        assert_eq!(response.status, 400);
        assert_eq!(response.error.as_deref(), Some("Planet name is required"));
    }
}

#[test]
fn test_search_not_found() {
    let response = catalog().search(Some("Gliese 581 g"));
    assert_eq!(response.status, 404);
    assert_eq!(response.error.as_deref(), Some("Exoplanet not found"));
}

#[test]
fn test_search_source_failure() {
    let response = Catalog::with_defaults(UnreachableSource).search(Some("Kepler"));
    assert_eq!(response.status, 500);
    assert_eq!(response.error.as_deref(), Some("Failed to search exoplanet"));

    let json = serde_json::to_string(&response).unwrap();
    assert_eq!(
        json,
        r#"{"success":false,"error":"Failed to search exoplanet"}"#
    );
}
