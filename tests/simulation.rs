use rand::SeedableRng;
use rand::rngs::SmallRng;

use regional_factions::model::FactionDetails;
use regional_factions::{EventLog, roll_dice};

mod common;
use common::{build_test_ledger, region_powers};

#[test]
fn coast_scenario_resums_to_available_power() {
    let mut ledger = build_test_ledger();
    // Corsairs equal-split to 60 when added alone, then [60, 50] shrank
    // proportionally to the 60 budget
    let powers = region_powers(&ledger, "Coast");
    assert!((powers[0] - 60.0 * 60.0 / 110.0).abs() < 1e-6);
    assert!((powers[1] - 50.0 * 60.0 / 110.0).abs() < 1e-6);

    let mut rng = SmallRng::seed_from_u64(1);
    let mut log = EventLog::new();
    let entries = roll_dice(&mut ledger, &mut rng, &mut log);

    let coast_total: f64 = region_powers(&ledger, "Coast").iter().sum();
    assert!(
        (coast_total - 60.0).abs() < 1e-6,
        "coast total {coast_total} after turn"
    );

    // The war shows up in the log from the Corsairs' side
    assert!(
        entries
            .iter()
            .any(|e| e.region == "Coast" && e.message == "Corsairs is at war with Clans"),
        "missing war entry: {entries:?}"
    );
    // Highlands has a single faction and is skipped, so Clans' side of the
    // war never fires and Clans' power is untouched
    assert!(entries.iter().all(|e| e.region == "Coast"));
    assert_eq!(region_powers(&ledger, "Highlands"), vec![80.0]);
}

#[test]
fn same_seed_same_turn() {
    let mut first = build_test_ledger();
    let mut second = build_test_ledger();
    let mut log_a = EventLog::new();
    let mut log_b = EventLog::new();

    let entries_a = roll_dice(&mut first, &mut SmallRng::seed_from_u64(99), &mut log_a);
    let entries_b = roll_dice(&mut second, &mut SmallRng::seed_from_u64(99), &mut log_b);

    assert_eq!(entries_a, entries_b);
    assert_eq!(first, second);
}

#[test]
fn every_faction_logs_a_fluctuation() {
    let mut ledger = build_test_ledger();
    let mut rng = SmallRng::seed_from_u64(5);
    let mut log = EventLog::new();
    let entries = roll_dice(&mut ledger, &mut rng, &mut log);

    for name in ["Corsairs", "Tidewardens"] {
        assert!(
            entries
                .iter()
                .any(|e| e.message.starts_with(&format!("{name} power changed by "))),
            "no fluctuation entry for {name}"
        );
    }
}

#[test]
fn intra_region_war_logs_both_sides() {
    let mut ledger = build_test_ledger();
    ledger.set_interaction(
        "Coast",
        "Corsairs",
        "Coast",
        "Tidewardens",
        regional_factions::InteractionKind::War,
    );

    let mut rng = SmallRng::seed_from_u64(3);
    let mut log = EventLog::new();
    let entries = roll_dice(&mut ledger, &mut rng, &mut log);

    // One record, applied once from each endpoint as its owner is processed
    assert!(
        entries
            .iter()
            .any(|e| e.message == "Corsairs is at war with Tidewardens")
    );
    assert!(
        entries
            .iter()
            .any(|e| e.message == "Tidewardens is at war with Corsairs")
    );
}

#[test]
fn event_log_accumulates_across_turns() {
    let mut ledger = build_test_ledger();
    let mut rng = SmallRng::seed_from_u64(11);
    let mut log = EventLog::new();

    let first = roll_dice(&mut ledger, &mut rng, &mut log);
    let second = roll_dice(&mut ledger, &mut rng, &mut log);
    assert_eq!(log.len(), first.len() + second.len());
    assert_eq!(&log.entries()[..first.len()], &first[..]);

    log.clear();
    assert!(log.is_empty());
}

#[test]
fn over_authority_region_survives_a_turn_unbalanced() {
    let mut ledger = build_test_ledger();
    ledger.set_region("Badlands", 120.0);
    ledger.add_faction("Badlands", "Marauders", FactionDetails::default());
    ledger.add_faction("Badlands", "Nomads", FactionDetails::default());

    let mut rng = SmallRng::seed_from_u64(17);
    let mut log = EventLog::new();
    roll_dice(&mut ledger, &mut rng, &mut log);

    // The convergence loop drives powers toward the unreachable negative
    // target and the balance pass refuses to touch the region, so the roster
    // ends the turn clamped at zero rather than summing to -20
    let badlands: f64 = region_powers(&ledger, "Badlands").iter().sum();
    assert!(badlands >= 0.0);
    for power in region_powers(&ledger, "Badlands") {
        assert!(power >= 0.0);
    }
}

#[test]
fn turn_with_dangling_interaction_target_still_balances() {
    let mut ledger = build_test_ledger();
    ledger.remove_region("Highlands");

    let mut rng = SmallRng::seed_from_u64(23);
    let mut log = EventLog::new();
    let entries = roll_dice(&mut ledger, &mut rng, &mut log);

    // The war's counterpart no longer resolves: no interaction entry, no
    // effect, but the turn itself proceeds normally
    assert!(entries.iter().all(|e| !e.message.contains("is at war with")));
    let coast_total: f64 = region_powers(&ledger, "Coast").iter().sum();
    assert!((coast_total - 60.0).abs() < 1e-6);
}
