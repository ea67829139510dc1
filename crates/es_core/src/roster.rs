//! Roster search for the scout widget's player picker.

use crate::models::Player;

/// Queries shorter than this return no results (the dropdown stays hidden).
pub const MIN_QUERY_LEN: usize = 2;

/// Case-insensitive substring search over name, position, and club.
/// Roster order is preserved.
pub fn search<'a>(roster: &'a [Player], term: &str) -> Vec<&'a Player> {
    let term = term.trim().to_lowercase();
    if term.chars().count() < MIN_QUERY_LEN {
        return Vec::new();
    }
    roster
        .iter()
        .filter(|p| {
            p.name.to_lowercase().contains(&term)
                || p.position.to_lowercase().contains(&term)
                || p.club.to_lowercase().contains(&term)
        })
        .collect()
}
