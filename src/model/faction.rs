use serde::{Deserialize, Serialize};

/// Every faction enters a region at this power; the balance pass immediately
/// redistributes it against the region's available power.
pub const STARTING_POWER: f64 = 50.0;

fn unknown_leader() -> String {
    "Unknown".to_string()
}

fn no_description() -> String {
    "No description".to_string()
}

fn no_goals() -> String {
    "No goals".to_string()
}

/// Optional descriptive fields supplied when adding a faction to a region.
#[derive(Debug, Clone, Default)]
pub struct FactionDetails {
    pub leader: Option<String>,
    pub description: Option<String>,
    pub goals: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Faction {
    pub name: String,
    pub power: f64,
    #[serde(default = "unknown_leader")]
    pub leader: String,
    #[serde(default = "no_description")]
    pub description: String,
    #[serde(default = "no_goals")]
    pub goals: String,
}

impl Faction {
    pub fn new(name: &str, details: FactionDetails) -> Self {
        Self {
            name: name.to_string(),
            power: STARTING_POWER,
            leader: details.leader.unwrap_or_else(unknown_leader),
            description: details.description.unwrap_or_else(no_description),
            goals: details.goals.unwrap_or_else(no_goals),
        }
    }
}
