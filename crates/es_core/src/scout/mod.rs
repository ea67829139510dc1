//! Live match-stat entry widget core: clock, counters, rating, session.

pub mod clock;
pub mod counters;
pub mod rating;
pub mod session;
pub mod timer;

pub use clock::{Half, MatchClock};
pub use counters::{Metric, StatCounters};
pub use rating::{live_rating, BASE_RATING, MAX_RATING, MIN_RATING};
pub use session::ScoutSession;
pub use timer::{LiveSession, SharedSession, TickDriver, TICK_INTERVAL};
