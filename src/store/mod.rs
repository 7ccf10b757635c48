use std::fmt;
use std::io;

use crate::model::Ledger;

mod json_file;

pub use json_file::JsonFileStore;

/// Where a ledger document lives between sessions. The core never reads
/// ambient state; the host wires an implementation in at the edges.
pub trait LedgerStore {
    fn load(&self) -> Result<Ledger, StoreError>;
    fn save(&self, ledger: &Ledger) -> Result<(), StoreError>;
}

/// Propagates a committed ledger to other observers. Fire-and-forget: the
/// core calls this after a mutation transaction, never during one.
pub trait LedgerBroadcast {
    fn publish(&self, ledger: &Ledger);
}

#[derive(Debug)]
pub enum StoreError {
    Io(io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Io(e) => write!(f, "ledger store i/o error: {e}"),
            StoreError::Parse(e) => write!(f, "ledger store parse error: {e}"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Io(e) => Some(e),
            StoreError::Parse(e) => Some(e),
        }
    }
}

impl From<io::Error> for StoreError {
    fn from(e: io::Error) -> Self {
        StoreError::Io(e)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::Parse(e)
    }
}
