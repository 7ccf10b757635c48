use rand::{Rng, RngCore};

use crate::balance::balance_power;
use crate::model::{EventLog, Ledger, LogEntry};

/// Per-faction uniform fluctuation bounds for one turn, inclusive.
const FLUCTUATION_MIN: i32 = -10;
const FLUCTUATION_MAX: i32 = 10;

/// Convergence stops once the region total is within this of its target.
const CONVERGENCE_TOLERANCE: f64 = 0.1;

/// Hard cap on convergence iterations. The loop is not guaranteed to reach
/// the tolerance; this cap is its only liveness guarantee, and the final
/// balance pass repairs whatever residual it leaves behind.
const MAX_CONVERGENCE_ITERATIONS: u32 = 100;

/// Run one simulated turn over every region of the ledger.
///
/// Regions with fewer than two factions are skipped entirely. For each
/// processed region, in roster order:
///
/// 1. every faction's power shifts by a uniform draw in [-10, 10], clamped
///    at a floor of 0;
/// 2. every interaction the faction participates in applies its fixed power
///    effect to the acting faction only, provided the counterpart still
///    resolves (it may live in another region). The counterpart gets the
///    same record applied from its own side when its turn comes;
/// 3. a bounded random-adjustment loop nudges the region total back toward
///    its available power;
/// 4. a final balance pass restores the conservation invariant.
///
/// Callers own the randomness: pass `SmallRng::seed_from_u64(seed)` for a
/// deterministic turn. Emitted entries are returned and also appended to
/// `log`.
pub fn roll_dice(ledger: &mut Ledger, rng: &mut dyn RngCore, log: &mut EventLog) -> Vec<LogEntry> {
    let mut entries = Vec::new();
    let region_names: Vec<String> = ledger.regions.keys().cloned().collect();

    for region_name in &region_names {
        let Some(region) = ledger.regions.get(region_name) else {
            continue;
        };
        if region.factions.len() < 2 {
            continue;
        }
        let target = region.available_power();
        let roster: Vec<String> = region.factions.iter().map(|f| f.name.clone()).collect();

        for faction_name in &roster {
            let delta = rng.random_range(FLUCTUATION_MIN..=FLUCTUATION_MAX);
            let Some(faction) = ledger.faction_mut(region_name, faction_name) else {
                continue;
            };
            faction.power += f64::from(delta);
            if faction.power < 0.0 {
                faction.power = 0.0;
            }
            let signed = if delta > 0 {
                format!("+{delta}")
            } else {
                delta.to_string()
            };
            entries.push(LogEntry::new(
                region_name,
                format!("{faction_name} power changed by {signed}"),
            ));

            for view in ledger.interactions_of(region_name, faction_name) {
                if ledger.faction(&view.region, &view.target).is_none() {
                    tracing::warn!(
                        "roll_dice: interaction target {}/{} no longer resolves",
                        view.region,
                        view.target
                    );
                    continue;
                }
                if let Some(faction) = ledger.faction_mut(region_name, faction_name) {
                    faction.power += view.kind.power_effect();
                }
                entries.push(LogEntry::new(
                    region_name,
                    format!("{faction_name} {} {}", view.kind.description(), view.target),
                ));
            }
        }

        let Some(region) = ledger.regions.get_mut(region_name) else {
            continue;
        };
        let count = region.factions.len();
        let mut current = region.total_power();
        let mut iterations = 0;
        while (current - target).abs() > CONVERGENCE_TOLERANCE
            && iterations < MAX_CONVERGENCE_ITERATIONS
        {
            let difference = current - target;
            let pick = rng.random_range(0..count);
            let faction = &mut region.factions[pick];
            faction.power -= difference / count as f64;
            if faction.power < 0.0 {
                faction.power = 0.0;
            }
            current = region.total_power();
            iterations += 1;
        }

        balance_power(region);
    }

    log.extend(entries.iter().cloned());
    entries
}
