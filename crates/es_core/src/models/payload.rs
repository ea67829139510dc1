//! Wire payloads exchanged with the backend.
//!
//! Field names are part of the API contract and must not change; the structs
//! below serialize to exactly the JSON the endpoints expect.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::scout::counters::StatCounters;

/// Match setup chosen before stat entry begins. All fields are required at
/// submission time; empty strings count as missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchSetup {
    pub home_team: String,
    pub away_team: String,
    pub match_date: Option<NaiveDate>,
    pub league: String,
}

impl MatchSetup {
    /// Names of setup fields that are still missing, in form order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.home_team.trim().is_empty() {
            missing.push("home_team");
        }
        if self.away_team.trim().is_empty() {
            missing.push("away_team");
        }
        if self.match_date.is_none() {
            missing.push("match_date");
        }
        if self.league.trim().is_empty() {
            missing.push("league");
        }
        missing
    }
}

/// Outbound body for `/api/submit-match-stats`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchStatsPayload {
    pub player_id: u32,
    pub home_team: String,
    pub away_team: String,
    pub match_date: NaiveDate,
    pub league: String,
    pub stats: StatCounters,
    pub performance_rating: f64,
    /// "M:SS" elapsed match time at submission.
    pub match_duration: String,
    pub extra_time: u32,
}

/// Outbound body for `/api/update-player-bio`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BioUpdate {
    pub player_id: u32,
    pub bio: String,
}

/// Outbound body for `/api/update-player-awards`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AwardsUpdate {
    pub player_id: u32,
    pub awards: Vec<String>,
}

/// Inbound response shared by all three endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ApiResponse {
    pub fn ok() -> Self {
        Self { success: true, message: None }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self { success: false, message: Some(message.into()) }
    }

    /// Failure message, or a generic fallback when the backend sent none.
    pub fn message_or_default(&self) -> &str {
        self.message.as_deref().unwrap_or("unknown error")
    }
}
