use serde::{Deserialize, Serialize};

/// Derived per-region summary, computed on demand from the ledger.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RegionStats {
    pub region: String,
    pub authority: f64,
    pub faction_count: usize,
    pub total_faction_power: f64,
    /// Name of the strongest faction, or "None" for an empty roster.
    pub most_powerful_faction: String,
    pub most_powerful_faction_power: f64,
    /// Number of interaction record endpoints held by this region's factions.
    pub interaction_count: usize,
}
