//! Purchase rules and income accrual.
//!
//! Costs escalate geometrically so the difficulty curve stays steep: auto
//! units grow by 1.5x (floored to keep the displayed price integral) and
//! multiplier upgrades triple while the multiplier itself doubles.

use crate::skins::{SkinCatalog, SkinPrice};
use crate::state::Progress;

/// Price growth applied after each auto-unit purchase.
pub const AUTO_UNIT_COST_GROWTH: f64 = 1.5;
/// Price growth applied after each multiplier purchase.
pub const MULTIPLIER_COST_GROWTH: f64 = 3.0;
/// Factor applied to the multiplier on each upgrade.
pub const MULTIPLIER_STEP: f64 = 2.0;

/// Cadence of the passive income tick.
pub const TICK_INTERVAL_MS: i32 = 1_000;
/// Cadence of the dirty-gated persistence flush.
pub const FLUSH_INTERVAL_MS: i32 = 5_000;
/// Cadence of the leaderboard sync.
pub const SYNC_INTERVAL_MS: i32 = 30_000;

/// One manual click.
pub fn click(progress: &mut Progress) {
    progress.add_currency(progress.multiplier);
}

/// One passive income tick. Applied once per timer fire; missed intervals are
/// never replayed retroactively.
pub fn auto_tick(progress: &mut Progress) {
    progress.add_currency(f64::from(progress.auto_units) * progress.multiplier);
}

/// Buy one auto-income generator. Returns `false` without touching state when
/// the price is not covered.
pub fn buy_auto_unit(progress: &mut Progress) -> bool {
    let cost = progress.auto_unit_cost;
    if progress.spend(cost).is_err() {
        return false;
    }
    progress.auto_units += 1;
    progress.auto_unit_cost = (cost * AUTO_UNIT_COST_GROWTH).floor();
    log::info!(
        "auto unit purchased: owned={} cost={} next_cost={}",
        progress.auto_units,
        cost,
        progress.auto_unit_cost
    );
    true
}

/// Buy one multiplier upgrade. Returns `false` without touching state when
/// the price is not covered.
pub fn buy_multiplier(progress: &mut Progress) -> bool {
    let cost = progress.multiplier_cost;
    if progress.spend(cost).is_err() {
        return false;
    }
    progress.multiplier *= MULTIPLIER_STEP;
    progress.multiplier_cost *= MULTIPLIER_COST_GROWTH;
    log::info!(
        "multiplier purchased: multiplier={} next_cost={}",
        progress.multiplier,
        progress.multiplier_cost
    );
    true
}

/// Outcome of a skin selection attempt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SkinSelection {
    /// Already unlocked; the active skin switched for free.
    Switched,
    /// Cost paid, skin unlocked and made active.
    Purchased,
    /// Reward skin claimed; the reward was credited unconditionally.
    Claimed { reward: f64 },
    /// Locked and unaffordable; state untouched.
    Denied,
    /// No such skin in the catalog.
    Unknown,
}

/// Unlock and/or select a skin according to its catalog entry.
pub fn select_skin(progress: &mut Progress, catalog: &SkinCatalog, skin_id: &str) -> SkinSelection {
    let Some(skin) = catalog.find(skin_id) else {
        log::error!("skin '{skin_id}' is not in the catalog");
        return SkinSelection::Unknown;
    };

    if progress.is_unlocked(skin_id) {
        let _ = progress.set_active_skin(skin_id);
        return SkinSelection::Switched;
    }

    match skin.price {
        SkinPrice::Reward { amount } => {
            progress.add_currency(amount);
            progress.unlock_skin(skin_id);
            let _ = progress.set_active_skin(skin_id);
            log::info!("reward skin '{skin_id}' claimed: reward={amount}");
            SkinSelection::Claimed { reward: amount }
        }
        SkinPrice::Purchasable { cost } => {
            if progress.spend(cost).is_err() {
                return SkinSelection::Denied;
            }
            progress.unlock_skin(skin_id);
            let _ = progress.set_active_skin(skin_id);
            log::info!("skin '{skin_id}' unlocked: cost={cost}");
            SkinSelection::Purchased
        }
    }
}
