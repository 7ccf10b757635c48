pub mod faction;
pub mod interaction;
pub mod ledger;
pub mod log;
pub mod region;
pub mod stats;

pub use faction::{Faction, FactionDetails, STARTING_POWER};
pub use interaction::{Endpoint, Interaction, InteractionKind, InteractionRecord};
pub use ledger::Ledger;
pub use log::{EventLog, LogEntry};
pub use region::{POWER_BUDGET, Region};
pub use stats::RegionStats;
