//! Reference data module.
//!
//! Read-only catalogs consumed by the registration form and the scout
//! widget, embedded in the binary at compile time.

pub mod embedded;

pub use embedded::{
    get_club_catalog, get_countries, get_position_catalog, get_scout_fixtures, ClubCatalog,
    PositionCatalog, PositionEntry, ScoutFixtures,
};
