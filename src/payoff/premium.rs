//! Premium resolution against a live option-chain snapshot.

use crate::constants::ADJACENT_STRIKE_MAX_DISTANCE;
use crate::types::leg::Leg;
use crate::types::option_chain::{OptionChainData, OptionQuote};

/// Resolve the effective premium for a leg from live quotes.
///
/// Fallback chain, applied in order:
///
/// 1. bid/ask midpoint of the quote at the leg's exact strike (same side);
/// 2. midpoint of the nearest adjacent strike within
///    [`ADJACENT_STRIKE_MAX_DISTANCE`] — option chains are sparse at the
///    wings and an exact strike match often does not exist;
/// 3. the leg's stored premium.
///
/// The midpoint is only used when both bid and ask are positive and finite
/// (see [`OptionQuote::midpoint`]). Every payoff surface resolves premiums
/// through this one function so a leg is never priced differently on the
/// chart than in the table or an export.
pub fn resolve_premium(leg: &Leg, chain: &OptionChainData) -> f64 {
    let quotes = chain.side(leg.option_type);

    if let Some(mid) = exact_match(quotes, leg.strike) {
        return mid;
    }

    if let Some((strike, mid)) = nearest_adjacent(quotes, leg.strike) {
        tracing::debug!(
            leg_strike = leg.strike,
            quote_strike = strike,
            "no exact-strike quote, using adjacent strike premium"
        );
        return mid;
    }

    leg.premium
}

fn exact_match(quotes: &[OptionQuote], strike: f64) -> Option<f64> {
    quotes
        .iter()
        .find(|q| q.strike == strike)
        .and_then(OptionQuote::midpoint)
}

/// Nearest quote with a usable midpoint within the adjacency cap.
fn nearest_adjacent(quotes: &[OptionQuote], strike: f64) -> Option<(f64, f64)> {
    quotes
        .iter()
        .filter_map(|q| q.midpoint().map(|mid| (q.strike, mid)))
        .filter(|&(s, _)| (s - strike).abs() <= ADJACENT_STRIKE_MAX_DISTANCE)
        .min_by(|&(a, _), &(b, _)| {
            (a - strike).abs().total_cmp(&(b - strike).abs())
        })
}
