use crate::model::Ledger;

/// Serialize the full ledger as human-readable JSON.
pub fn export_json(ledger: &Ledger) -> String {
    serde_json::to_string_pretty(ledger).expect("ledger serializes infallibly")
}

/// Parse a ledger from JSON text.
///
/// On success every decoded region is re-balanced before the ledger is
/// returned, repairing invariant violations introduced by hand-edited or
/// stale documents. A parse failure yields only the error; the caller's
/// existing state is never touched, since a fresh ledger is built here.
pub fn import_json(text: &str) -> Result<Ledger, serde_json::Error> {
    let mut ledger: Ledger = serde_json::from_str(text)?;
    ledger.normalize_all();
    Ok(ledger)
}
