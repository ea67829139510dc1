//! Live stat-entry session.
//!
//! One [`ScoutSession`] owns everything the widget mutates: the selected
//! player, the counters, the clock, the displayed rating, and the
//! substitution annotation. Handlers receive it explicitly; there is no
//! module-level shared state.

use crate::error::{Result, ScoutError};
use crate::models::{ApiResponse, MatchSetup, MatchStatsPayload, Player};
use crate::scout::clock::MatchClock;
use crate::scout::counters::{Metric, StatCounters};
use crate::scout::rating::{self, live_rating};

/// Mutable state behind a single live stat-entry widget.
#[derive(Debug, Clone)]
pub struct ScoutSession {
    selected: Option<Player>,
    pub counters: StatCounters,
    pub clock: MatchClock,
    live_rating: f64,
    substituted_at: Option<String>,
}

impl Default for ScoutSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoutSession {
    pub fn new() -> Self {
        Self {
            selected: None,
            counters: StatCounters::new(),
            clock: MatchClock::new(),
            live_rating: rating::BASE_RATING,
            substituted_at: None,
        }
    }

    /// Currently selected player, if any.
    pub fn selected(&self) -> Option<&Player> {
        self.selected.as_ref()
    }

    /// Rating currently on display.
    pub fn live_rating(&self) -> f64 {
        self.live_rating
    }

    /// Substitution timestamp recorded this session, if any.
    pub fn substituted_at(&self) -> Option<&str> {
        self.substituted_at.as_deref()
    }

    /// Make `player` the subject of stat entry. Counters start from zero for
    /// a newly selected player.
    pub fn select_player(&mut self, player: Player) {
        log::info!("tracking player {} ({})", player.name, player.id);
        self.selected = Some(player);
        self.counters.reset();
        self.live_rating = rating::BASE_RATING;
        self.substituted_at = None;
    }

    /// Apply a delta to a metric by wire name. Unknown names are ignored;
    /// known ones clamp at zero and refresh the displayed rating.
    pub fn update_metric(&mut self, name: &str, delta: i64) {
        let Some(metric) = Metric::from_key(name) else {
            log::debug!("ignoring unknown metric {name:?}");
            return;
        };
        self.apply_metric(metric, delta);
    }

    /// Typed variant of [`Self::update_metric`].
    pub fn apply_metric(&mut self, metric: Metric, delta: i64) {
        self.counters.apply(metric, delta);
        self.live_rating = live_rating(&self.counters);
    }

    /// Record a substitution at the current clock time. Requires a selected
    /// player and a clock that has run past the first minute; on failure
    /// nothing is mutated.
    pub fn record_substitution(&mut self) -> Result<String> {
        let player = self.selected.as_ref().ok_or(ScoutError::NoPlayerSelected)?;
        if self.clock.minutes() == 0 {
            return Err(ScoutError::ClockNotStarted);
        }
        let timestamp = self.clock.duration();
        log::info!("{} substituted at {}", player.name, timestamp);
        self.substituted_at = Some(timestamp.clone());
        Ok(timestamp)
    }

    /// Build the submission payload for the current session. Fails without
    /// producing a partial payload if no player is selected or the match
    /// setup is incomplete.
    pub fn build_submission(&self, setup: &MatchSetup) -> Result<MatchStatsPayload> {
        let player = self.selected.as_ref().ok_or(ScoutError::NoPlayerSelected)?;
        let missing = setup.missing_fields();
        if !missing.is_empty() {
            return Err(ScoutError::IncompleteMatchSetup { missing });
        }
        let match_date = setup
            .match_date
            .ok_or(ScoutError::IncompleteMatchSetup { missing: vec!["match_date"] })?;

        Ok(MatchStatsPayload {
            player_id: player.id,
            home_team: setup.home_team.clone(),
            away_team: setup.away_team.clone(),
            match_date,
            league: setup.league.clone(),
            stats: self.counters,
            performance_rating: self.live_rating,
            match_duration: self.clock.duration(),
            extra_time: self.clock.extra_time(),
        })
    }

    /// Apply the backend's verdict on a submission. Success resets the whole
    /// session; failure keeps counters and clock intact so the user can
    /// retry, and surfaces the backend message.
    pub fn apply_submission_response(&mut self, response: &ApiResponse) -> Result<()> {
        if response.success {
            log::info!("match statistics submitted, resetting session");
            self.reset_all();
            Ok(())
        } else {
            let message = response.message_or_default().to_string();
            log::warn!("match statistics submission failed: {message}");
            Err(ScoutError::SubmissionRejected(message))
        }
    }

    /// Zero every counter, restore the base rating, clear the selection and
    /// any substitution annotation, and reset the clock.
    pub fn reset_all(&mut self) {
        self.counters.reset();
        self.live_rating = rating::BASE_RATING;
        self.selected = None;
        self.substituted_at = None;
        self.clock.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_player() -> Player {
        Player {
            id: 1,
            name: "John Doe".to_string(),
            position: "ST".to_string(),
            club: "Rivers United".to_string(),
        }
    }

    fn sample_setup() -> MatchSetup {
        MatchSetup {
            home_team: "Rivers United".to_string(),
            away_team: "Enyimba".to_string(),
            match_date: NaiveDate::from_ymd_opt(2025, 3, 14),
            league: "Nigerian Professional Football League".to_string(),
        }
    }

    #[test]
    fn unknown_metric_is_silently_ignored() {
        let mut session = ScoutSession::new();
        session.update_metric("ownGoals", 3);
        assert!(session.counters.is_zeroed());
        assert_eq!(session.live_rating(), rating::BASE_RATING);
    }

    #[test]
    fn metric_update_refreshes_rating() {
        let mut session = ScoutSession::new();
        session.update_metric("goals", 2);
        session.update_metric("shotsOn", 3);
        assert!((session.live_rating() - 8.6).abs() < 1e-9);
    }

    #[test]
    fn selecting_a_player_starts_from_zero() {
        let mut session = ScoutSession::new();
        session.update_metric("goals", 1);
        session.select_player(sample_player());
        assert!(session.counters.is_zeroed());
        assert_eq!(session.live_rating(), rating::BASE_RATING);
    }

    #[test]
    fn substitution_requires_selected_player() {
        let mut session = ScoutSession::new();
        for _ in 0..90 {
            session.clock.tick();
        }
        assert!(matches!(
            session.record_substitution(),
            Err(ScoutError::NoPlayerSelected)
        ));
        assert_eq!(session.substituted_at(), None);
    }

    #[test]
    fn substitution_requires_running_clock() {
        let mut session = ScoutSession::new();
        session.select_player(sample_player());
        session.clock.tick(); // 0:01, still within the first minute
        assert!(matches!(
            session.record_substitution(),
            Err(ScoutError::ClockNotStarted)
        ));
    }

    #[test]
    fn substitution_timestamp_format() {
        let mut session = ScoutSession::new();
        session.select_player(sample_player());
        for _ in 0..(60 + 7) {
            session.clock.tick();
        }
        assert_eq!(session.record_substitution().unwrap(), "1:07");
        assert_eq!(session.substituted_at(), Some("1:07"));
    }

    #[test]
    fn submission_requires_player() {
        let session = ScoutSession::new();
        assert!(matches!(
            session.build_submission(&sample_setup()),
            Err(ScoutError::NoPlayerSelected)
        ));
    }

    #[test]
    fn submission_requires_complete_setup() {
        let mut session = ScoutSession::new();
        session.select_player(sample_player());
        let mut setup = sample_setup();
        setup.league.clear();
        setup.match_date = None;
        match session.build_submission(&setup) {
            Err(ScoutError::IncompleteMatchSetup { missing }) => {
                assert_eq!(missing, vec!["match_date", "league"]);
            }
            other => panic!("expected IncompleteMatchSetup, got {other:?}"),
        }
    }

    #[test]
    fn submission_payload_reflects_session() {
        let mut session = ScoutSession::new();
        session.select_player(sample_player());
        session.update_metric("goals", 1);
        session.update_metric("tackles", 2);
        for _ in 0..(12 * 60 + 34) {
            session.clock.tick();
        }
        session.clock.add_extra_time();

        let payload = session.build_submission(&sample_setup()).unwrap();
        assert_eq!(payload.player_id, 1);
        assert_eq!(payload.stats.goals, 1);
        assert_eq!(payload.stats.tackles, 2);
        assert!((payload.performance_rating - 7.4).abs() < 1e-9);
        assert_eq!(payload.match_duration, "12:34");
        assert_eq!(payload.extra_time, 1);
    }

    #[test]
    fn successful_submission_resets_everything() {
        let mut session = ScoutSession::new();
        session.select_player(sample_player());
        session.update_metric("goals", 1);
        session.clock.start();
        for _ in 0..61 {
            session.clock.tick();
        }
        let _ = session.record_substitution().unwrap();

        session.apply_submission_response(&ApiResponse::ok()).unwrap();
        assert!(session.counters.is_zeroed());
        assert_eq!(session.live_rating(), rating::BASE_RATING);
        assert!(session.selected().is_none());
        assert_eq!(session.substituted_at(), None);
        assert_eq!(session.clock, MatchClock::new());
    }

    #[test]
    fn failed_submission_keeps_state_for_retry() {
        let mut session = ScoutSession::new();
        session.select_player(sample_player());
        session.update_metric("goals", 1);
        for _ in 0..61 {
            session.clock.tick();
        }

        let err = session
            .apply_submission_response(&ApiResponse::failure("database unavailable"))
            .unwrap_err();
        assert!(matches!(err, ScoutError::SubmissionRejected(ref m) if m == "database unavailable"));
        assert_eq!(session.counters.goals, 1);
        assert_eq!(session.clock.minutes(), 1);
        assert!(session.selected().is_some());
    }

    #[test]
    fn reset_all_restores_initial_state() {
        let mut session = ScoutSession::new();
        session.select_player(sample_player());
        session.update_metric("interceptions", 4);
        session.clock.start();
        session.clock.tick();
        session.reset_all();

        assert!(session.counters.is_zeroed());
        assert_eq!(session.live_rating(), rating::BASE_RATING);
        assert!(session.selected().is_none());
        assert_eq!(session.clock, MatchClock::new());
    }
}
