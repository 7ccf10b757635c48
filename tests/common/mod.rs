use regional_factions::model::FactionDetails;
use regional_factions::{InteractionKind, Ledger};

/// Two regions, three factions, one cross-region war:
/// - Coast (authority 40): Corsairs, Tidewardens
/// - Highlands (authority 20): Clans
/// - Corsairs at war with Clans
pub fn build_test_ledger() -> Ledger {
    let mut ledger = Ledger::new();
    ledger.set_region("Coast", 40.0);
    ledger.set_region("Highlands", 20.0);
    ledger.add_faction(
        "Coast",
        "Corsairs",
        FactionDetails {
            leader: Some("Captain Vane".to_string()),
            description: Some("Raiders of the tidal straits".to_string()),
            goals: Some("Control the shipping lanes".to_string()),
        },
    );
    ledger.add_faction("Coast", "Tidewardens", FactionDetails::default());
    ledger.add_faction("Highlands", "Clans", FactionDetails::default());
    ledger.set_interaction(
        "Coast",
        "Corsairs",
        "Highlands",
        "Clans",
        InteractionKind::War,
    );
    ledger
}

/// Faction powers of a region, in roster order.
pub fn region_powers(ledger: &Ledger, region: &str) -> Vec<f64> {
    ledger
        .region(region)
        .map(|r| r.factions.iter().map(|f| f.power).collect())
        .unwrap_or_default()
}
