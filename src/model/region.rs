use serde::{Deserialize, Serialize};

use super::faction::Faction;

/// Authority and faction power share a single 0..=100 budget per region.
pub const POWER_BUDGET: f64 = 100.0;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Region {
    /// Centralized control, 0..=100. Values above 100 are tolerated but leave
    /// the region permanently exempt from balancing.
    pub authority: f64,
    /// Ordered roster; order is preserved across mutations and serialization.
    #[serde(default)]
    pub factions: Vec<Faction>,
}

impl Region {
    pub fn new(authority: f64) -> Self {
        Self {
            authority,
            factions: Vec::new(),
        }
    }

    /// Power left for factions to divide among themselves. Negative when
    /// authority exceeds the budget.
    pub fn available_power(&self) -> f64 {
        POWER_BUDGET - self.authority
    }

    pub fn total_power(&self) -> f64 {
        self.factions.iter().map(|f| f.power).sum()
    }

    pub fn faction(&self, name: &str) -> Option<&Faction> {
        self.factions.iter().find(|f| f.name == name)
    }

    pub fn faction_mut(&mut self, name: &str) -> Option<&mut Faction> {
        self.factions.iter_mut().find(|f| f.name == name)
    }
}
