pub mod payload;
pub mod player;

pub use payload::{ApiResponse, AwardsUpdate, BioUpdate, MatchSetup, MatchStatsPayload};
pub use player::Player;
