//! Player dashboard: inline-editable bio and awards sections.
//!
//! The DOM shows either the stored value or a placeholder; edits are sent to
//! the backend and only applied locally once the backend confirms. A failed
//! update leaves the stored value untouched.

use crate::error::{Result, ScoutError};
use crate::models::{ApiResponse, AwardsUpdate, BioUpdate};

pub const EMPTY_BIO_PLACEHOLDER: &str = "No bio available.";
pub const EMPTY_AWARDS_PLACEHOLDER: &str = "No awards recorded.";

/// Awards are edited as one award per line; blank lines are dropped.
pub fn parse_awards(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Editable profile sections for one player.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerProfile {
    pub player_id: u32,
    bio: String,
    awards: Vec<String>,
}

impl PlayerProfile {
    pub fn new(player_id: u32) -> Self {
        Self { player_id, ..Default::default() }
    }

    pub fn bio(&self) -> &str {
        &self.bio
    }

    pub fn awards(&self) -> &[String] {
        &self.awards
    }

    /// Bio text for display, falling back to the placeholder.
    pub fn bio_display(&self) -> &str {
        if self.bio.trim().is_empty() {
            EMPTY_BIO_PLACEHOLDER
        } else {
            &self.bio
        }
    }

    /// Awards lines for display, falling back to the placeholder.
    pub fn awards_display(&self) -> Vec<String> {
        if self.awards.is_empty() {
            vec![EMPTY_AWARDS_PLACEHOLDER.to_string()]
        } else {
            self.awards.clone()
        }
    }

    /// Outbound payload for a bio edit.
    pub fn bio_update(&self, bio: impl Into<String>) -> BioUpdate {
        BioUpdate { player_id: self.player_id, bio: bio.into() }
    }

    /// Outbound payload for an awards edit, parsed from editor text.
    pub fn awards_update(&self, text: &str) -> AwardsUpdate {
        AwardsUpdate { player_id: self.player_id, awards: parse_awards(text) }
    }

    /// Apply the backend verdict on a bio edit.
    pub fn apply_bio_response(&mut self, update: BioUpdate, response: &ApiResponse) -> Result<()> {
        if response.success {
            self.bio = update.bio;
            Ok(())
        } else {
            let message = response.message_or_default().to_string();
            log::warn!("bio update for player {} failed: {message}", self.player_id);
            Err(ScoutError::UpdateRejected(message))
        }
    }

    /// Apply the backend verdict on an awards edit.
    pub fn apply_awards_response(
        &mut self,
        update: AwardsUpdate,
        response: &ApiResponse,
    ) -> Result<()> {
        if response.success {
            self.awards = update.awards;
            Ok(())
        } else {
            let message = response.message_or_default().to_string();
            log::warn!("awards update for player {} failed: {message}", self.player_id);
            Err(ScoutError::UpdateRejected(message))
        }
    }
}
