//! JSON boundary for the player-dashboard edit endpoints.

use crate::dashboard::parse_awards;
use crate::models::{AwardsUpdate, BioUpdate};

/// Build the outbound `/api/update-player-bio` body.
pub fn build_bio_update_json(player_id: u32, bio: &str) -> Result<String, String> {
    let update = BioUpdate { player_id, bio: bio.to_string() };
    serde_json::to_string(&update).map_err(|e| format!("Failed to serialize bio update: {}", e))
}

/// Build the outbound `/api/update-player-awards` body from editor text
/// (one award per line).
pub fn build_awards_update_json(player_id: u32, awards_text: &str) -> Result<String, String> {
    let update = AwardsUpdate { player_id, awards: parse_awards(awards_text) };
    serde_json::to_string(&update).map_err(|e| format!("Failed to serialize awards update: {}", e))
}
