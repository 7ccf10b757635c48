use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::faction::{Faction, FactionDetails};
use super::interaction::{Endpoint, Interaction, InteractionKind, InteractionRecord};
use super::region::Region;
use super::stats::RegionStats;
use crate::balance::balance_power;

/// The full persisted document: regions with their faction rosters, the
/// faction-name reverse index, and the interaction relation set.
///
/// Mutators follow a tolerant no-op policy: naming a region or faction that
/// does not exist leaves the ledger unchanged and reports `false` instead of
/// failing. Interactive callers routinely race ahead of stale UI state, so
/// a miss is not an error.
///
/// Nothing here is internally synchronized. Embedders sharing a ledger
/// across actors must treat each operation (especially a simulated turn) as
/// one exclusive critical section, or the conservation invariant can be
/// observed mid-repair.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Ledger {
    #[serde(default)]
    pub regions: BTreeMap<String, Region>,
    /// Reverse index: faction name -> names of regions it belongs to.
    /// A key exists iff the faction is currently in at least one region.
    #[serde(default)]
    pub faction_regions: BTreeMap<String, Vec<String>>,
    /// One record per unordered faction pair. Per-faction views are derived
    /// via [`Ledger::interactions_of`], never stored.
    #[serde(default)]
    pub interactions: Vec<InteractionRecord>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a region, or update its authority in place if it already
    /// exists. Repeated calls are idempotent.
    pub fn set_region(&mut self, name: &str, authority: f64) {
        match self.regions.get_mut(name) {
            Some(region) => region.authority = authority,
            None => {
                self.regions.insert(name.to_string(), Region::new(authority));
            }
        }
    }

    /// Remove a region outright. Interaction records other factions hold
    /// pointing into the removed region are left in place; they simply stop
    /// resolving during simulation. Reverse-index entries for the removed
    /// roster also go stale: only [`Ledger::remove_faction`] prunes them, so
    /// the "member of at least one region" reading of the index is suspended
    /// for regions deleted this way.
    pub fn remove_region(&mut self, name: &str) -> bool {
        self.regions.remove(name).is_some()
    }

    pub fn region(&self, name: &str) -> Option<&Region> {
        self.regions.get(name)
    }

    /// Add a faction to a region, creating the region with authority 0 if it
    /// does not exist yet. The faction starts at power 50 and the region is
    /// re-balanced immediately.
    pub fn add_faction(&mut self, region_name: &str, faction_name: &str, details: FactionDetails) {
        let region = self
            .regions
            .entry(region_name.to_string())
            .or_insert_with(|| Region::new(0.0));
        region.factions.push(Faction::new(faction_name, details));
        balance_power(region);

        self.faction_regions
            .entry(faction_name.to_string())
            .or_default()
            .push(region_name.to_string());
    }

    /// Remove a faction from a region's roster, prune the reverse index
    /// (dropping the key once the faction belongs to no region), and
    /// re-balance the remaining roster.
    pub fn remove_faction(&mut self, region_name: &str, faction_name: &str) -> bool {
        let Some(region) = self.regions.get_mut(region_name) else {
            return false;
        };
        let Some(index) = region.factions.iter().position(|f| f.name == faction_name) else {
            return false;
        };
        region.factions.remove(index);
        balance_power(region);

        if let Some(regions) = self.faction_regions.get_mut(faction_name) {
            if let Some(pos) = regions.iter().position(|r| r == region_name) {
                regions.remove(pos);
            }
            if regions.is_empty() {
                self.faction_regions.remove(faction_name);
            }
        }
        true
    }

    pub fn faction(&self, region_name: &str, faction_name: &str) -> Option<&Faction> {
        self.regions.get(region_name)?.faction(faction_name)
    }

    pub fn faction_mut(&mut self, region_name: &str, faction_name: &str) -> Option<&mut Faction> {
        self.regions.get_mut(region_name)?.faction_mut(faction_name)
    }

    /// Register an interaction between two factions. No-op unless both
    /// factions resolve. Setting an already-connected pair again replaces the
    /// kind in place rather than adding a second record.
    pub fn set_interaction(
        &mut self,
        region_a: &str,
        faction_a: &str,
        region_b: &str,
        faction_b: &str,
        kind: InteractionKind,
    ) -> bool {
        if self.faction(region_a, faction_a).is_none() || self.faction(region_b, faction_b).is_none()
        {
            tracing::warn!(
                "set_interaction: unresolved pair {region_a}/{faction_a} - {region_b}/{faction_b}"
            );
            return false;
        }
        let a = Endpoint::new(region_a, faction_a);
        let b = Endpoint::new(region_b, faction_b);
        match self.interactions.iter_mut().find(|r| r.connects(&a, &b)) {
            Some(record) => record.kind = kind,
            None => self.interactions.push(InteractionRecord::new(kind, a, b)),
        }
        true
    }

    /// Remove the interaction between two factions, in either endpoint order.
    /// Calling it again is a no-op.
    pub fn remove_interaction(
        &mut self,
        region_a: &str,
        faction_a: &str,
        region_b: &str,
        faction_b: &str,
    ) -> bool {
        let a = Endpoint::new(region_a, faction_a);
        let b = Endpoint::new(region_b, faction_b);
        let before = self.interactions.len();
        self.interactions.retain(|r| !r.connects(&a, &b));
        self.interactions.len() != before
    }

    /// Derive the given faction's view of the relation set: one entry per
    /// record it participates in, naming the counterpart.
    pub fn interactions_of(&self, region_name: &str, faction_name: &str) -> Vec<Interaction> {
        self.interactions
            .iter()
            .filter_map(|record| {
                let counterpart = record.counterpart_of(region_name, faction_name)?;
                Some(Interaction {
                    kind: record.kind,
                    target: counterpart.faction.clone(),
                    region: counterpart.region.clone(),
                })
            })
            .collect()
    }

    /// Re-run the balance pass on a single region by name.
    pub fn normalize_region(&mut self, name: &str) -> bool {
        match self.regions.get_mut(name) {
            Some(region) => {
                balance_power(region);
                true
            }
            None => false,
        }
    }

    /// Re-run the balance pass on every region. Used after decoding a ledger
    /// from external text, repairing hand-edited or stale documents.
    pub fn normalize_all(&mut self) {
        for region in self.regions.values_mut() {
            balance_power(region);
        }
    }

    /// Compute summary statistics for a region, or None if it does not exist.
    pub fn region_stats(&self, region_name: &str) -> Option<RegionStats> {
        let region = self.regions.get(region_name)?;
        let mut most_powerful = "None".to_string();
        let mut most_power = 0.0;
        for faction in &region.factions {
            if faction.power > most_power {
                most_powerful = faction.name.clone();
                most_power = faction.power;
            }
        }
        let interaction_count = region
            .factions
            .iter()
            .map(|f| self.interactions_of(region_name, &f.name).len())
            .sum();
        Some(RegionStats {
            region: region_name.to_string(),
            authority: region.authority,
            faction_count: region.factions.len(),
            total_faction_power: region.total_power(),
            most_powerful_faction: most_powerful,
            most_powerful_faction_power: most_power,
            interaction_count,
        })
    }
}
