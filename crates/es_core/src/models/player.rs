use serde::{Deserialize, Serialize};

/// Roster entry supplied by the backend. The scout widget only reads these;
/// identity is the numeric `id`, the rest is display data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: u32,
    pub name: String,
    pub position: String,
    pub club: String,
}

impl Player {
    /// "Name - Position - Club" line used in the search dropdown.
    pub fn summary(&self) -> String {
        format!("{} - {} - {}", self.name, self.position, self.club)
    }
}
