use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use super::{LedgerStore, StoreError};
use crate::codec;
use crate::model::Ledger;

/// File-backed ledger store: one pretty-printed JSON document per path.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl LedgerStore for JsonFileStore {
    /// Read and decode the document. Regions are re-balanced on the way in,
    /// same as any other imported text.
    fn load(&self) -> Result<Ledger, StoreError> {
        let text = fs::read_to_string(&self.path)?;
        Ok(codec::import_json(&text)?)
    }

    fn save(&self, ledger: &Ledger) -> Result<(), StoreError> {
        let mut writer = BufWriter::new(File::create(&self.path)?);
        serde_json::to_writer_pretty(&mut writer, ledger)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        Ok(())
    }
}
