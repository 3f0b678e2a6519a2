//! Archive records shared by the unit tests

use crate::record::ArchiveRecord;

fn record(
    pl_name: &str,
    hostname: &str,
    sy_dist: f64,
    pl_bmasse: f64,
    pl_rade: f64,
    pl_orbper: f64,
    pl_eqt: f64,
    disc_year: i32,
    discoverymethod: &str,
) -> ArchiveRecord {
    ArchiveRecord {
        pl_name: pl_name.to_string(),
        hostname: hostname.to_string(),
        sy_dist,
        pl_bmasse,
        pl_rade,
        pl_orbper,
        pl_eqt,
        disc_year,
        discoverymethod: discoverymethod.to_string(),
        pl_letter: None,
    }
}

pub fn kepler_452b() -> ArchiveRecord {
    record("Kepler-452 b", "Kepler-452", 429.5, 5.0, 1.63, 384.8, 265.0, 2015, "Transit")
}

pub fn wasp_12b() -> ArchiveRecord {
    record("WASP-12 b", "WASP-12", 427.2, 446.0, 20.7, 1.09, 2580.0, 2008, "Transit")
}

pub fn trappist_1e() -> ArchiveRecord {
    record("TRAPPIST-1 e", "TRAPPIST-1", 12.43, 0.69, 0.92, 6.1, 251.0, 2017, "Transit")
}

pub fn teegarden_b() -> ArchiveRecord {
    record(
        "Teegarden's Star b",
        "Teegarden's Star",
        3.83,
        1.05,
        1.02,
        4.91,
        277.0,
        2019,
        "Radial Velocity",
    )
}

pub fn all() -> Vec<ArchiveRecord> {
    vec![kepler_452b(), wasp_12b(), trappist_1e(), teegarden_b()]
}
