//! Embedded reference catalogs.
//!
//! The dropdown catalogs (countries, positions, clubs) and the scout widget
//! fixtures are JSON documents under `data/reference/`, compiled into the
//! binary with `include_str!` and parsed once on first access. No file I/O
//! at runtime.

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::models::Player;

/// Nationality dropdown source (~193 entries).
pub const COUNTRIES_JSON: &str = include_str!("../../../../data/reference/countries.json");

/// Position catalog grouped by category.
pub const POSITIONS_JSON: &str = include_str!("../../../../data/reference/positions.json");

/// Club catalog grouped by league tier, plus the general pool.
pub const CLUBS_JSON: &str = include_str!("../../../../data/reference/clubs.json");

/// Sample leagues/teams/roster for the scout widget.
pub const SCOUT_FIXTURES_JSON: &str = include_str!("../../../../data/reference/scout_fixtures.json");

/// One selectable position: short code plus display text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionEntry {
    pub value: String,
    pub text: String,
}

/// Positions grouped by the four form categories.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PositionCatalog {
    pub goalkeeper: Vec<PositionEntry>,
    pub defender: Vec<PositionEntry>,
    pub midfielder: Vec<PositionEntry>,
    pub attacker: Vec<PositionEntry>,
}

impl PositionCatalog {
    /// Entries for a category key as used by the registration form.
    pub fn category(&self, key: &str) -> Option<&[PositionEntry]> {
        match key {
            "goalkeeper" => Some(&self.goalkeeper),
            "defender" => Some(&self.defender),
            "midfielder" => Some(&self.midfielder),
            "attacker" => Some(&self.attacker),
            _ => None,
        }
    }

    pub fn all(&self) -> impl Iterator<Item = &PositionEntry> {
        self.goalkeeper
            .iter()
            .chain(&self.defender)
            .chain(&self.midfielder)
            .chain(&self.attacker)
    }
}

/// Clubs by league tier; `general` covers street and university football.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClubCatalog {
    pub npfl: Vec<String>,
    pub nnl1: Vec<String>,
    pub nnl2: Vec<String>,
    pub academy: Vec<String>,
    pub general: Vec<String>,
}

impl ClubCatalog {
    /// Clubs for a tier key, or `None` for unknown keys.
    pub fn tier(&self, key: &str) -> Option<&[String]> {
        match key {
            "npfl" => Some(&self.npfl),
            "nnl1" => Some(&self.nnl1),
            "nnl2" => Some(&self.nnl2),
            "academy" => Some(&self.academy),
            _ => None,
        }
    }

    /// Every club, tier order first, then the general pool. Source for the
    /// club-association dropdown.
    pub fn all_clubs(&self) -> Vec<&str> {
        self.npfl
            .iter()
            .chain(&self.nnl1)
            .chain(&self.nnl2)
            .chain(&self.academy)
            .chain(&self.general)
            .map(String::as_str)
            .collect()
    }
}

/// Hard-coded sample data the scout widget ships with.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoutFixtures {
    pub leagues: Vec<String>,
    pub teams: Vec<String>,
    pub players: Vec<Player>,
}

pub fn get_countries() -> &'static [String] {
    static COUNTRIES: OnceLock<Vec<String>> = OnceLock::new();
    COUNTRIES.get_or_init(|| {
        serde_json::from_str(COUNTRIES_JSON).expect("embedded countries.json must parse")
    })
}

pub fn get_position_catalog() -> &'static PositionCatalog {
    static POSITIONS: OnceLock<PositionCatalog> = OnceLock::new();
    POSITIONS.get_or_init(|| {
        serde_json::from_str(POSITIONS_JSON).expect("embedded positions.json must parse")
    })
}

pub fn get_club_catalog() -> &'static ClubCatalog {
    static CLUBS: OnceLock<ClubCatalog> = OnceLock::new();
    CLUBS.get_or_init(|| serde_json::from_str(CLUBS_JSON).expect("embedded clubs.json must parse"))
}

pub fn get_scout_fixtures() -> &'static ScoutFixtures {
    static FIXTURES: OnceLock<ScoutFixtures> = OnceLock::new();
    FIXTURES.get_or_init(|| {
        serde_json::from_str(SCOUT_FIXTURES_JSON).expect("embedded scout_fixtures.json must parse")
    })
}
