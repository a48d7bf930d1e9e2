//! P/L curve computation across a simulated price window.

use serde::Serialize;

use crate::constants::sweep;
use crate::types::enums::LegAction;
use crate::types::leg::Leg;
use crate::types::option_chain::OptionChainData;

use super::premium::resolve_premium;

/// One sample of the P/L curve: aggregate profit at a simulated underlying
/// price. Derived and ephemeral — recomputed whenever the legs, spot, or
/// live premiums change, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PayoffPoint {
    /// Simulated underlying price.
    pub price: f64,
    /// Aggregate P/L across all legs at that price.
    pub profit: f64,
}

/// Compute the P/L curve for a set of legs around a spot price.
///
/// Samples `[spot × 0.7, spot × 1.3]` in [`sweep::STEPS`] increments. At
/// each sample price, every leg contributes
/// `±(intrinsic − premium) × quantity` (positive sign when buying,
/// negative when selling), and profits are rounded to two decimals for
/// display stability.
///
/// Returns an empty curve when `spot_price` is non-finite or non-positive —
/// that signals "insufficient data to chart", not an error. Legs that fail
/// [`Leg::is_computable`] are skipped so a single malformed leg cannot turn
/// the whole aggregate into NaN; callers needing strict validation should
/// pre-filter.
pub fn compute_payoff(legs: &[Leg], spot_price: f64) -> Vec<PayoffPoint> {
    sweep_curve(legs, spot_price, |leg| leg.premium)
}

/// Compute the P/L curve with premiums resolved against a live chain
/// snapshot.
///
/// Identical to [`compute_payoff`] except that each leg's premium goes
/// through [`resolve_premium`] first, so the chart, the strategy table, and
/// any export all price legs from the same quotes.
pub fn compute_payoff_with_chain(
    legs: &[Leg],
    spot_price: f64,
    chain: &OptionChainData,
) -> Vec<PayoffPoint> {
    sweep_curve(legs, spot_price, |leg| resolve_premium(leg, chain))
}

/// Shared sweep. `premium_of` is resolved once per leg, outside the price
/// loop — premiums do not depend on the simulated price.
fn sweep_curve(legs: &[Leg], spot_price: f64, premium_of: impl Fn(&Leg) -> f64) -> Vec<PayoffPoint> {
    if !spot_price.is_finite() || spot_price <= 0.0 {
        return Vec::new();
    }

    let priced: Vec<(&Leg, f64)> = legs.iter().map(|leg| (leg, premium_of(leg))).collect();

    let lower = spot_price * sweep::LOWER;
    let upper = spot_price * sweep::UPPER;
    let step = (upper - lower) / sweep::STEPS as f64;

    let mut points = Vec::with_capacity(sweep::STEPS + 1);
    for i in 0..=sweep::STEPS {
        let price = lower + step * i as f64;
        let mut profit = 0.0;

        for &(leg, premium) in &priced {
            if !leg.is_computable() || !premium.is_finite() {
                continue;
            }
            let intrinsic = leg.intrinsic_value(price);
            let per_contract = match leg.action {
                LegAction::Buy => intrinsic - premium,
                LegAction::Sell => premium - intrinsic,
            };
            profit += per_contract * f64::from(leg.quantity);
        }

        points.push(PayoffPoint {
            price: round_to(price, sweep::PROFIT_DECIMALS),
            profit: round_to(profit, sweep::PROFIT_DECIMALS),
        });
    }
    points
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    fn long_call() -> Leg {
        Leg::call(LegAction::Buy, 100.0, 1, 5.0)
    }

    #[test]
    fn empty_legs_give_flat_zero_curve() {
        let points = compute_payoff(&[], 100.0);
        assert_eq!(points.len(), sweep::STEPS + 1);
        assert!(points.iter().all(|p| p.profit == 0.0));
    }

    #[test]
    fn invalid_spot_gives_empty_curve() {
        let legs = vec![long_call()];
        assert!(compute_payoff(&legs, 0.0).is_empty());
        assert!(compute_payoff(&legs, -10.0).is_empty());
        assert!(compute_payoff(&legs, f64::NAN).is_empty());
        assert!(compute_payoff(&legs, f64::INFINITY).is_empty());
    }

    #[test]
    fn long_call_profit_and_capped_loss() {
        // Strike 100, premium 5, spot 100 — window is [70, 130].
        let points = compute_payoff(&[long_call()], 100.0);

        // Far below strike the loss is capped at the premium.
        let below = points.iter().find(|p| (p.price - 90.1).abs() < 0.2).unwrap();
        assert!((below.profit - -5.0).abs() < 1e-9);

        // Above strike the curve is intrinsic minus premium.
        let above = points.iter().find(|p| (p.price - 120.1).abs() < 0.2).unwrap();
        assert!((above.profit - (above.price - 100.0 - 5.0)).abs() < 0.02);
    }

    #[test]
    fn long_call_deep_itm_sample() {
        // Wider spot so 150 lands inside the window: spot 120 → [84, 156].
        let points = compute_payoff(&[long_call()], 120.0);
        let at_150 = points.iter().find(|p| (p.price - 150.0).abs() < 0.2).unwrap();
        // profit ≈ 150 − 100 − 5
        assert!((at_150.profit - 45.0).abs() < 0.4);
    }

    #[test]
    fn quantity_scales_linearly() {
        let one = compute_payoff(&[Leg::call(LegAction::Buy, 100.0, 1, 5.0)], 100.0);
        let three = compute_payoff(&[Leg::call(LegAction::Buy, 100.0, 3, 5.0)], 100.0);
        // Tolerance covers per-point rounding on both curves.
        for (a, b) in one.iter().zip(&three) {
            assert!((b.profit - a.profit * 3.0).abs() < 0.05);
        }
    }

    #[test]
    fn sell_side_mirrors_buy_side() {
        let bought = compute_payoff(&[Leg::put(LegAction::Buy, 100.0, 1, 4.0)], 100.0);
        let sold = compute_payoff(&[Leg::put(LegAction::Sell, 100.0, 1, 4.0)], 100.0);
        for (a, b) in bought.iter().zip(&sold) {
            assert!((a.profit + b.profit).abs() < 1e-9);
        }
    }

    #[test]
    fn nan_strike_leg_never_poisons_the_aggregate() {
        let legs = vec![long_call(), Leg::call(LegAction::Buy, f64::NAN, 1, 5.0)];
        let with_bad = compute_payoff(&legs, 100.0);
        let without = compute_payoff(&legs[..1], 100.0);
        assert!(with_bad.iter().all(|p| p.profit.is_finite()));
        assert_eq!(with_bad, without);
    }

    #[test]
    fn idempotent_for_identical_inputs() {
        let legs = vec![
            Leg::call(LegAction::Sell, 200.0, 2, 3.0),
            Leg::put(LegAction::Buy, 185.0, 1, 1.5),
        ];
        let a = compute_payoff(&legs, 195.0);
        let b = compute_payoff(&legs, 195.0);
        assert_eq!(a, b);
    }

    #[test]
    fn iron_condor_net_credit_at_center() {
        // Sell call 200 @ 3, buy call 205 @ 1.5, sell put 190 @ 2.5,
        // buy put 185 @ 1 — net credit 3.0 per share.
        let legs = vec![
            Leg::call(LegAction::Sell, 200.0, 1, 3.0),
            Leg::call(LegAction::Buy, 205.0, 1, 1.5),
            Leg::put(LegAction::Sell, 190.0, 1, 2.5),
            Leg::put(LegAction::Buy, 185.0, 1, 1.0),
        ];
        let points = compute_payoff(&legs, 195.0);
        let center = points.iter().find(|p| (p.price - 195.0).abs() < 0.2).unwrap();
        assert!((center.profit - 3.0).abs() < 0.02);
    }
}
