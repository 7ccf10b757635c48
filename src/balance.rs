use crate::model::Region;

/// Totals within this of the target count as already balanced. Without the
/// slack, a proportional shrink that lands a few ULPs under target would
/// send the next call down the equal-split branch and wipe the distribution.
const BALANCE_EPSILON: f64 = 1e-9;

/// Enforce the per-region power budget: after this call, faction power sums
/// to the region's available power (100 - authority).
///
/// Two deliberate exemptions:
/// - an empty roster is left alone;
/// - a region whose authority exceeds 100 is never rebalanced and can stay
///   in an inconsistent state indefinitely.
///
/// When the roster holds too much power it is shrunk proportionally, keeping
/// the relative distribution. When it holds too little, the prior
/// distribution is discarded and every faction gets an equal share.
/// Idempotent: a second consecutive call finds the total already on target.
pub fn balance_power(region: &mut Region) {
    let count = region.factions.len();
    let available = region.available_power();
    if count == 0 || available < 0.0 {
        return;
    }

    let total = region.total_power();
    if (total - available).abs() <= BALANCE_EPSILON {
        return;
    }
    if total > available {
        let scale = available / total;
        for faction in &mut region.factions {
            faction.power *= scale;
        }
    } else if total < available {
        let share = available / count as f64;
        for faction in &mut region.factions {
            faction.power = share;
        }
    }
}
