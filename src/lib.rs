pub mod balance;
pub mod codec;
pub mod model;
pub mod sim;
pub mod store;

pub use balance::balance_power;
pub use codec::{export_json, import_json};
pub use model::{
    EventLog, Faction, FactionDetails, Interaction, InteractionKind, InteractionRecord, Ledger,
    LogEntry, Region, RegionStats,
};
pub use sim::roll_dice;
pub use store::{JsonFileStore, LedgerBroadcast, LedgerStore, StoreError};
