//! # es_core - Enejistats client-side core
//!
//! Domain logic behind the Enejistats site pages, kept free of any DOM or
//! transport concerns so it can be embedded behind thin UI wrappers:
//!
//! - live match-stat entry (scout widget): clock, counters, rating, session
//! - weekly leaderboard: filtering, pagination, week navigation
//! - player dashboard: inline bio/awards editing
//! - registration: validation and club-catalog resolution
//! - embedded reference catalogs (countries, positions, clubs)
//!
//! Rendering, routing, and network plumbing stay outside; this crate owns
//! the state machines, the pure functions, and the wire payload shapes.

pub mod api;
pub mod dashboard;
pub mod data;
pub mod error;
pub mod leaderboard;
pub mod models;
pub mod registration;
pub mod roster;
pub mod scout;

pub use error::{Result, ScoutError};
pub use models::{ApiResponse, AwardsUpdate, BioUpdate, MatchSetup, MatchStatsPayload, Player};
pub use scout::{
    live_rating, Half, LiveSession, MatchClock, Metric, ScoutSession, StatCounters, TickDriver,
    BASE_RATING, TICK_INTERVAL,
};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
