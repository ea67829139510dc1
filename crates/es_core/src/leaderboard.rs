//! Weekly leaderboard: filter, paginate, week navigation.
//!
//! Entries come from the backend in rank order; this module only slices and
//! filters them for display. Sample data mirrors the placeholder dataset the
//! page ships with (87 entries, scores in the 70..100 band).

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Fixed page size.
pub const PER_PAGE: usize = 20;

/// Number of entries in the placeholder dataset.
pub const SAMPLE_SIZE: usize = 87;

const SAMPLE_POSITIONS: [&str; 4] = ["Striker", "Midfielder", "Defender", "Goalkeeper"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub id: u32,
    pub rank: u32,
    pub name: String,
    pub position: String,
    /// Weekly score, one decimal place.
    pub score: f32,
    pub img: String,
}

/// One page of a (possibly filtered) leaderboard.
#[derive(Debug, Clone, PartialEq)]
pub struct LeaderboardPage {
    pub entries: Vec<LeaderboardEntry>,
    /// 1-based page number actually shown.
    pub page: usize,
    pub page_count: usize,
}

/// Display state for the leaderboard view: current week and page.
#[derive(Debug, Clone)]
pub struct Leaderboard {
    entries: Vec<LeaderboardEntry>,
    week: u32,
    page: usize,
}

impl Leaderboard {
    pub fn new(entries: Vec<LeaderboardEntry>) -> Self {
        Self { entries, week: 1, page: 1 }
    }

    pub fn entries(&self) -> &[LeaderboardEntry] {
        &self.entries
    }

    pub fn week(&self) -> u32 {
        self.week
    }

    pub fn page_no(&self) -> usize {
        self.page
    }

    pub fn goto_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    /// Move the week cursor; weeks are floored at 1.
    pub fn change_week(&mut self, delta: i32) -> u32 {
        let next = self.week as i64 + delta as i64;
        self.week = next.max(1) as u32;
        log::debug!("leaderboard week -> {}", self.week);
        self.week
    }

    /// Current page of entries matching `filter` (empty filter shows all).
    pub fn visible(&self, filter: &str) -> LeaderboardPage {
        let filtered = filter_entries(&self.entries, filter);
        page(&filtered, self.page)
    }
}

/// Case-insensitive substring filter on name or position.
pub fn filter_entries(entries: &[LeaderboardEntry], term: &str) -> Vec<LeaderboardEntry> {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return entries.to_vec();
    }
    entries
        .iter()
        .filter(|e| {
            e.name.to_lowercase().contains(&term) || e.position.to_lowercase().contains(&term)
        })
        .cloned()
        .collect()
}

/// Slice out a 1-based page. Out-of-range pages return an empty slice but
/// still report the total page count.
pub fn page(entries: &[LeaderboardEntry], page_no: usize) -> LeaderboardPage {
    let page_no = page_no.max(1);
    let page_count = entries.len().div_ceil(PER_PAGE);
    let start = (page_no - 1).saturating_mul(PER_PAGE);
    let slice = if start < entries.len() {
        let end = (start + PER_PAGE).min(entries.len());
        entries[start..end].to_vec()
    } else {
        Vec::new()
    };
    LeaderboardPage { entries: slice, page: page_no, page_count }
}

/// Deterministic stand-in for the backend dataset: 87 ranked players with
/// uniform scores in [70, 100), rounded to one decimal.
pub fn sample_entries(seed: u64) -> Vec<LeaderboardEntry> {
    let mut rng = StdRng::seed_from_u64(seed);
    (1..=SAMPLE_SIZE as u32)
        .map(|i| {
            let score: f32 = rng.gen_range(70.0..100.0);
            LeaderboardEntry {
                id: i,
                rank: i,
                name: format!("Player {i}"),
                position: SAMPLE_POSITIONS[(i as usize - 1) % SAMPLE_POSITIONS.len()].to_string(),
                score: (score * 10.0).round() / 10.0,
                img: format!("https://via.placeholder.com/60?text=P{i}"),
            }
        })
        .collect()
}
