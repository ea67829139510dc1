//! Live performance rating.
//!
//! Pure weighted sum over [`StatCounters`], clamped to the 1.0..=10.0 band
//! shown on the widget. Recomputed in full after every counter mutation;
//! with seventeen small tallies there is nothing worth caching.

use super::counters::StatCounters;

/// Rating shown before any event has been recorded.
pub const BASE_RATING: f64 = 6.0;
pub const MIN_RATING: f64 = 1.0;
pub const MAX_RATING: f64 = 10.0;

/// Per-event weights. Positive events raise the rating, negative lower it.
pub mod weights {
    pub const GOAL: f64 = 1.0;
    pub const SHOT_ON: f64 = 0.2;
    pub const PASS_SUCCESSFUL: f64 = 0.05;
    pub const CROSS_SUCCESSFUL: f64 = 0.1;
    pub const INTERCEPTION: f64 = 0.3;
    pub const TACKLE: f64 = 0.2;
    pub const CLEARANCE: f64 = 0.1;
    pub const GK_SAVE: f64 = 0.4;

    pub const SHOT_OFF: f64 = 0.1;
    pub const PASS_UNSUCCESSFUL: f64 = 0.05;
    pub const CROSS_UNSUCCESSFUL: f64 = 0.05;
    pub const YELLOW_CARD: f64 = 0.5;
    pub const RED_CARD: f64 = 2.0;
    pub const FOUL: f64 = 0.1;
    pub const OFFSIDE: f64 = 0.2;
}

/// Compute the live rating for the given counters.
pub fn live_rating(counters: &StatCounters) -> f64 {
    let mut rating = BASE_RATING;

    rating += counters.goals as f64 * weights::GOAL;
    rating += counters.shots_on as f64 * weights::SHOT_ON;
    rating += (counters.short_passes_successful + counters.long_passes_successful) as f64
        * weights::PASS_SUCCESSFUL;
    rating += counters.crosses_successful as f64 * weights::CROSS_SUCCESSFUL;
    rating += counters.interceptions as f64 * weights::INTERCEPTION;
    rating += counters.tackles as f64 * weights::TACKLE;
    rating += counters.clearances as f64 * weights::CLEARANCE;
    rating += counters.gk_saves as f64 * weights::GK_SAVE;

    rating -= counters.shots_off as f64 * weights::SHOT_OFF;
    rating -= (counters.short_passes_unsuccessful + counters.long_passes_unsuccessful) as f64
        * weights::PASS_UNSUCCESSFUL;
    rating -= counters.crosses_unsuccessful as f64 * weights::CROSS_UNSUCCESSFUL;
    rating -= counters.yellow_cards as f64 * weights::YELLOW_CARD;
    rating -= counters.red_cards as f64 * weights::RED_CARD;
    rating -= counters.fouls as f64 * weights::FOUL;
    rating -= counters.offsides as f64 * weights::OFFSIDE;

    rating.clamp(MIN_RATING, MAX_RATING)
}
