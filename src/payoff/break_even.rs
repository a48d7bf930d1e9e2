//! Break-even extraction from a sampled P/L curve.

use super::engine::PayoffPoint;

/// Find every price where the P/L curve crosses zero.
///
/// Scans adjacent sample pairs; a sign change (or an exact zero) between
/// two samples yields one crossing, located by linear interpolation:
/// `p₁ + (0 − y₁)/(y₂ − y₁) × (p₂ − p₁)`.
///
/// Returns every crossing in ascending price order — an iron condor yields
/// two, a vertical spread one, and a curve that never changes sign yields
/// none (a valid outcome for an all-profit or all-loss strategy, not an
/// error). Callers that only chart a single marker take the first.
pub fn break_evens(points: &[PayoffPoint]) -> Vec<f64> {
    let mut crossings = Vec::new();

    for (i, point) in points.iter().enumerate() {
        if point.profit == 0.0 {
            // A run of consecutive zero samples is one crossing, at the
            // run's first price.
            if i == 0 || points[i - 1].profit != 0.0 {
                crossings.push(point.price);
            }
        } else if let Some(next) = points.get(i + 1) {
            if next.profit != 0.0 && point.profit.signum() != next.profit.signum() {
                let t = (0.0 - point.profit) / (next.profit - point.profit);
                crossings.push(point.price + t * (next.price - point.price));
            }
        }
    }

    crossings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payoff::engine::compute_payoff;
    use crate::types::enums::LegAction;
    use crate::types::leg::Leg;

    fn curve(profits: &[(f64, f64)]) -> Vec<PayoffPoint> {
        profits
            .iter()
            .map(|&(price, profit)| PayoffPoint { price, profit })
            .collect()
    }

    #[test]
    fn single_crossing_is_interpolated() {
        let points = curve(&[(90.0, -10.0), (100.0, -2.0), (110.0, 6.0)]);
        let be = break_evens(&points);
        assert_eq!(be.len(), 1);
        // Between 100 and 110: 100 + (2/8)·10 = 102.5
        assert!((be[0] - 102.5).abs() < 1e-9);
    }

    #[test]
    fn monotonic_curve_has_no_crossing() {
        // Deep ITM long call: profitable across the whole window.
        let legs = vec![Leg::call(LegAction::Buy, 10.0, 1, 1.0)];
        let points = compute_payoff(&legs, 100.0);
        assert!(points.iter().all(|p| p.profit > 0.0));
        assert!(break_evens(&points).is_empty());
    }

    #[test]
    fn exact_zero_sample_counts_once() {
        let points = curve(&[(90.0, -5.0), (100.0, 0.0), (110.0, 5.0)]);
        let be = break_evens(&points);
        assert_eq!(be, vec![100.0]);
    }

    #[test]
    fn long_call_break_even_at_strike_plus_premium() {
        let legs = vec![Leg::call(LegAction::Buy, 100.0, 1, 5.0)];
        let be = break_evens(&compute_payoff(&legs, 100.0));
        assert_eq!(be.len(), 1);
        assert!((be[0] - 105.0).abs() < 0.05);
    }

    #[test]
    fn iron_condor_break_evens_bracket_short_strikes() {
        // Net credit 3.0: break-evens at 190 − 3 and 200 + 3.
        let legs = vec![
            Leg::call(LegAction::Sell, 200.0, 1, 3.0),
            Leg::call(LegAction::Buy, 205.0, 1, 1.5),
            Leg::put(LegAction::Sell, 190.0, 1, 2.5),
            Leg::put(LegAction::Buy, 185.0, 1, 1.0),
        ];
        let be = break_evens(&compute_payoff(&legs, 195.0));
        assert_eq!(be.len(), 2);
        assert!((be[0] - 187.0).abs() < 0.05);
        assert!((be[1] - 203.0).abs() < 0.05);
    }

    #[test]
    fn empty_curve_has_no_crossings() {
        assert!(break_evens(&[]).is_empty());
    }
}
