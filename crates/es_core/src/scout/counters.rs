//! Per-match event counters for a single tracked player.
//!
//! The metric set is closed: the wire format, the rating formula, and the
//! update protocol all agree on exactly these seventeen tallies. Updates go
//! through [`StatCounters::apply`], which clamps at zero so no counter can
//! ever go negative.

use serde::{Deserialize, Serialize};

/// The closed set of recognized metrics, keyed by their wire names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    Goals,
    ShotsOn,
    ShotsOff,
    ShortPassesSuccessful,
    ShortPassesUnsuccessful,
    LongPassesSuccessful,
    LongPassesUnsuccessful,
    CrossesSuccessful,
    CrossesUnsuccessful,
    Interceptions,
    Tackles,
    Clearances,
    GkSaves,
    YellowCards,
    RedCards,
    Fouls,
    Offsides,
}

impl Metric {
    pub const ALL: [Metric; 17] = [
        Metric::Goals,
        Metric::ShotsOn,
        Metric::ShotsOff,
        Metric::ShortPassesSuccessful,
        Metric::ShortPassesUnsuccessful,
        Metric::LongPassesSuccessful,
        Metric::LongPassesUnsuccessful,
        Metric::CrossesSuccessful,
        Metric::CrossesUnsuccessful,
        Metric::Interceptions,
        Metric::Tackles,
        Metric::Clearances,
        Metric::GkSaves,
        Metric::YellowCards,
        Metric::RedCards,
        Metric::Fouls,
        Metric::Offsides,
    ];

    /// Wire key for this metric (camelCase, matching the stats payload).
    pub fn key(&self) -> &'static str {
        match self {
            Metric::Goals => "goals",
            Metric::ShotsOn => "shotsOn",
            Metric::ShotsOff => "shotsOff",
            Metric::ShortPassesSuccessful => "shortPassesSuccessful",
            Metric::ShortPassesUnsuccessful => "shortPassesUnsuccessful",
            Metric::LongPassesSuccessful => "longPassesSuccessful",
            Metric::LongPassesUnsuccessful => "longPassesUnsuccessful",
            Metric::CrossesSuccessful => "crossesSuccessful",
            Metric::CrossesUnsuccessful => "crossesUnsuccessful",
            Metric::Interceptions => "interceptions",
            Metric::Tackles => "tackles",
            Metric::Clearances => "clearances",
            Metric::GkSaves => "gkSaves",
            Metric::YellowCards => "yellowCards",
            Metric::RedCards => "redCards",
            Metric::Fouls => "fouls",
            Metric::Offsides => "offsides",
        }
    }

    /// Parse a wire key. Unknown keys return `None`; callers in the update
    /// protocol treat that as a silent no-op.
    pub fn from_key(key: &str) -> Option<Metric> {
        Metric::ALL.iter().copied().find(|m| m.key() == key)
    }
}

/// Non-negative tallies for every recognized metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatCounters {
    pub goals: u32,
    pub shots_on: u32,
    pub shots_off: u32,
    pub short_passes_successful: u32,
    pub short_passes_unsuccessful: u32,
    pub long_passes_successful: u32,
    pub long_passes_unsuccessful: u32,
    pub crosses_successful: u32,
    pub crosses_unsuccessful: u32,
    pub interceptions: u32,
    pub tackles: u32,
    pub clearances: u32,
    pub gk_saves: u32,
    pub yellow_cards: u32,
    pub red_cards: u32,
    pub fouls: u32,
    pub offsides: u32,
}

impl StatCounters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, metric: Metric) -> u32 {
        match metric {
            Metric::Goals => self.goals,
            Metric::ShotsOn => self.shots_on,
            Metric::ShotsOff => self.shots_off,
            Metric::ShortPassesSuccessful => self.short_passes_successful,
            Metric::ShortPassesUnsuccessful => self.short_passes_unsuccessful,
            Metric::LongPassesSuccessful => self.long_passes_successful,
            Metric::LongPassesUnsuccessful => self.long_passes_unsuccessful,
            Metric::CrossesSuccessful => self.crosses_successful,
            Metric::CrossesUnsuccessful => self.crosses_unsuccessful,
            Metric::Interceptions => self.interceptions,
            Metric::Tackles => self.tackles,
            Metric::Clearances => self.clearances,
            Metric::GkSaves => self.gk_saves,
            Metric::YellowCards => self.yellow_cards,
            Metric::RedCards => self.red_cards,
            Metric::Fouls => self.fouls,
            Metric::Offsides => self.offsides,
        }
    }

    fn slot_mut(&mut self, metric: Metric) -> &mut u32 {
        match metric {
            Metric::Goals => &mut self.goals,
            Metric::ShotsOn => &mut self.shots_on,
            Metric::ShotsOff => &mut self.shots_off,
            Metric::ShortPassesSuccessful => &mut self.short_passes_successful,
            Metric::ShortPassesUnsuccessful => &mut self.short_passes_unsuccessful,
            Metric::LongPassesSuccessful => &mut self.long_passes_successful,
            Metric::LongPassesUnsuccessful => &mut self.long_passes_unsuccessful,
            Metric::CrossesSuccessful => &mut self.crosses_successful,
            Metric::CrossesUnsuccessful => &mut self.crosses_unsuccessful,
            Metric::Interceptions => &mut self.interceptions,
            Metric::Tackles => &mut self.tackles,
            Metric::Clearances => &mut self.clearances,
            Metric::GkSaves => &mut self.gk_saves,
            Metric::YellowCards => &mut self.yellow_cards,
            Metric::RedCards => &mut self.red_cards,
            Metric::Fouls => &mut self.fouls,
            Metric::Offsides => &mut self.offsides,
        }
    }

    /// Apply a signed delta to a metric, clamping the result at zero.
    pub fn apply(&mut self, metric: Metric, delta: i64) {
        let slot = self.slot_mut(metric);
        let next = (*slot as i64).saturating_add(delta);
        *slot = next.clamp(0, u32::MAX as i64) as u32;
    }

    /// Set every counter back to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_zeroed(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_keys_round_trip() {
        for metric in Metric::ALL {
            assert_eq!(Metric::from_key(metric.key()), Some(metric));
        }
        assert_eq!(Metric::from_key("ownGoals"), None);
        assert_eq!(Metric::from_key(""), None);
    }

    #[test]
    fn apply_clamps_at_zero() {
        let mut counters = StatCounters::new();
        counters.apply(Metric::Tackles, -5);
        assert_eq!(counters.tackles, 0);
        counters.apply(Metric::Tackles, 3);
        counters.apply(Metric::Tackles, -10);
        assert_eq!(counters.tackles, 0);
    }

    #[test]
    fn apply_accumulates() {
        let mut counters = StatCounters::new();
        counters.apply(Metric::Goals, 1);
        counters.apply(Metric::Goals, 1);
        counters.apply(Metric::Goals, -1);
        assert_eq!(counters.goals, 1);
    }

    #[test]
    fn reset_zeroes_everything() {
        let mut counters = StatCounters::new();
        for metric in Metric::ALL {
            counters.apply(metric, 4);
        }
        assert!(!counters.is_zeroed());
        counters.reset();
        assert!(counters.is_zeroed());
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let mut counters = StatCounters::new();
        counters.apply(Metric::GkSaves, 2);
        let value = serde_json::to_value(counters).unwrap();
        let map = value.as_object().unwrap();
        assert_eq!(map.len(), Metric::ALL.len());
        for metric in Metric::ALL {
            assert!(map.contains_key(metric.key()), "missing key {}", metric.key());
        }
        assert_eq!(value["gkSaves"], 2);
        assert_eq!(value["shortPassesSuccessful"], 0);
    }

    #[cfg(all(test, feature = "proptest"))]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: any delta sequence leaves every counter >= 0 and
            /// below the saturation ceiling.
            #[test]
            fn prop_counters_never_negative(
                deltas in proptest::collection::vec((0usize..17, -20i64..20i64), 0..200)
            ) {
                let mut counters = StatCounters::new();
                for (idx, delta) in deltas {
                    counters.apply(Metric::ALL[idx], delta);
                    for metric in Metric::ALL {
                        // u32 cannot go negative; assert the clamp kept values sane
                        prop_assert!(counters.get(metric) <= 200 * 20);
                    }
                }
            }
        }
    }
}
