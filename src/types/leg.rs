//! Leg type — one option position inside a multi-leg strategy.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::enums::{LegAction, OptionType};

/// One option position: side, direction, strike, size, and cost.
///
/// This is the canonical shape every upstream payload is normalized into.
/// Providers disagree on field names (`strike` vs `strike_price`, `qty` vs
/// `quantity`), so the variants are absorbed here with serde aliases and the
/// rest of the crate only ever sees these fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Leg {
    /// Call or put.
    #[serde(rename = "type", alias = "option_type")]
    pub option_type: OptionType,
    /// Buy (long) or sell (short).
    #[serde(alias = "side")]
    pub action: LegAction,
    /// Strike price. Must be finite and positive to enter the payoff math.
    #[serde(alias = "strike_price")]
    pub strike: f64,
    /// Contract count.
    #[serde(alias = "qty")]
    pub quantity: u32,
    /// Premium paid (buy) or received (sell) per contract. May be superseded
    /// by a live bid/ask midpoint when a chain snapshot is available.
    #[serde(default, alias = "premium_price")]
    pub premium: f64,
    /// Contract expiry. Informational; not used in payoff math.
    #[serde(default)]
    pub expiry: Option<NaiveDate>,
}

impl Leg {
    /// Create a leg with no expiry attached.
    pub fn new(
        option_type: OptionType,
        action: LegAction,
        strike: f64,
        quantity: u32,
        premium: f64,
    ) -> Self {
        Self {
            option_type,
            action,
            strike,
            quantity,
            premium,
            expiry: None,
        }
    }

    /// Shorthand for a call leg.
    pub fn call(action: LegAction, strike: f64, quantity: u32, premium: f64) -> Self {
        Self::new(OptionType::Call, action, strike, quantity, premium)
    }

    /// Shorthand for a put leg.
    pub fn put(action: LegAction, strike: f64, quantity: u32, premium: f64) -> Self {
        Self::new(OptionType::Put, action, strike, quantity, premium)
    }

    /// Whether this leg may enter the payoff aggregate.
    ///
    /// A leg with a non-finite or non-positive strike, or a non-finite
    /// premium, is excluded from computation rather than allowed to corrupt
    /// the curve. Callers wanting strict validation should pre-filter with
    /// this before handing legs to the engine.
    pub fn is_computable(&self) -> bool {
        self.strike.is_finite() && self.strike > 0.0 && self.premium.is_finite()
    }

    /// Intrinsic value of one contract at underlying price `price`:
    /// `max(φ(S − K), 0)` where `φ = +1` for a call, `−1` for a put.
    pub fn intrinsic_value(&self, price: f64) -> f64 {
        (self.option_type.sign() * (price - self.strike)).max(0.0)
    }
}
