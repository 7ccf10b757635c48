use serde::de;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InteractionKind {
    War,
    Alliance,
    Trade,
}

impl InteractionKind {
    /// Fixed power delta applied to a faction when this interaction fires
    /// during a simulated turn.
    pub fn power_effect(self) -> f64 {
        match self {
            InteractionKind::War => -10.0,
            InteractionKind::Alliance => 5.0,
            InteractionKind::Trade => 3.0,
        }
    }

    /// Connective phrase used in log messages: "<faction> <phrase> <target>".
    pub fn description(self) -> &'static str {
        match self {
            InteractionKind::War => "is at war with",
            InteractionKind::Alliance => "is allied with",
            InteractionKind::Trade => "has a trade agreement with",
        }
    }
}

impl Serialize for InteractionKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let s = match self {
            InteractionKind::War => "war",
            InteractionKind::Alliance => "alliance",
            InteractionKind::Trade => "trade",
        };
        serializer.serialize_str(s)
    }
}

impl<'de> Deserialize<'de> for InteractionKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            "war" => Ok(InteractionKind::War),
            "alliance" => Ok(InteractionKind::Alliance),
            "trade" => Ok(InteractionKind::Trade),
            _ => Err(de::Error::custom(format!("unknown interaction kind: {s}"))),
        }
    }
}

/// One side of an interaction record: a faction addressed by region and name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Endpoint {
    pub region: String,
    pub faction: String,
}

impl Endpoint {
    pub fn new(region: &str, faction: &str) -> Self {
        Self {
            region: region.to_string(),
            faction: faction.to_string(),
        }
    }

    pub fn matches(&self, region: &str, faction: &str) -> bool {
        self.region == region && self.faction == faction
    }
}

/// A typed relationship between two factions, keyed by the unordered pair of
/// its endpoints. The ledger holds one record per pair; setting the same pair
/// again replaces the kind in place rather than adding a second record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InteractionRecord {
    pub kind: InteractionKind,
    pub endpoints: [Endpoint; 2],
}

impl InteractionRecord {
    pub fn new(kind: InteractionKind, a: Endpoint, b: Endpoint) -> Self {
        Self {
            kind,
            endpoints: [a, b],
        }
    }

    /// True if this record joins the two given factions, in either order.
    pub fn connects(&self, a: &Endpoint, b: &Endpoint) -> bool {
        let [e0, e1] = &self.endpoints;
        (e0 == a && e1 == b) || (e0 == b && e1 == a)
    }

    /// The opposite endpoint as seen from the given faction, or None if the
    /// faction is not part of this record.
    pub fn counterpart_of(&self, region: &str, faction: &str) -> Option<&Endpoint> {
        let [e0, e1] = &self.endpoints;
        if e0.matches(region, faction) {
            Some(e1)
        } else if e1.matches(region, faction) {
            Some(e0)
        } else {
            None
        }
    }
}

/// A faction-local view of an interaction record: the counterpart as seen
/// from one endpoint. Derived by query, never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct Interaction {
    pub kind: InteractionKind,
    /// Name of the faction on the other side.
    pub target: String,
    /// Region the target faction belongs to.
    pub region: String,
}
