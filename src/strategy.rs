//! Strategy state container — explicit ownership of the builder state.
//!
//! The strategy builder's state (selected symbol, spot price, legs, live
//! chain snapshot) lives in one [`StrategyState`] value mutated only through
//! [`StrategyState::apply`]. Chart data is derived from the current state on
//! demand, so recomputation triggers are deterministic and the whole thing
//! is testable without any rendering layer.

use crate::payoff::{self, PayoffPoint};
use crate::types::leg::Leg;
use crate::types::option_chain::OptionChainData;

/// Mutations the strategy builder can apply.
#[derive(Debug, Clone)]
pub enum StrategyAction {
    /// Select a new underlying. Clears spot, legs, and chain — every
    /// price-dependent piece of state belongs to the old symbol.
    SetSymbol(String),
    /// Set the spot price directly (manual override or quote fetch).
    SetSpot(f64),
    /// Append a leg.
    AddLeg(Leg),
    /// Replace the leg at `index`. Out of range is a no-op.
    UpdateLeg(usize, Leg),
    /// Remove the leg at `index`. Out of range is a no-op.
    RemoveLeg(usize),
    /// Remove all legs.
    ClearLegs,
    /// Install a fresh chain snapshot and refresh spot from it.
    ApplyChain(OptionChainData),
}

/// The strategy builder's complete state.
#[derive(Debug, Clone, Default)]
pub struct StrategyState {
    symbol: Option<String>,
    spot: Option<f64>,
    legs: Vec<Leg>,
    chain: Option<OptionChainData>,
}

impl StrategyState {
    /// Empty state: no symbol, no legs, nothing to chart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently selected symbol.
    pub fn symbol(&self) -> Option<&str> {
        self.symbol.as_deref()
    }

    /// Current spot price, if known.
    pub fn spot(&self) -> Option<f64> {
        self.spot
    }

    /// Current legs.
    pub fn legs(&self) -> &[Leg] {
        &self.legs
    }

    /// Current chain snapshot, if one has been applied.
    pub fn chain(&self) -> Option<&OptionChainData> {
        self.chain.as_ref()
    }

    /// Apply one action, mutating the state in place.
    pub fn apply(&mut self, action: StrategyAction) {
        match action {
            StrategyAction::SetSymbol(symbol) => {
                self.symbol = Some(symbol);
                self.spot = None;
                self.legs.clear();
                self.chain = None;
            }
            StrategyAction::SetSpot(spot) => {
                self.spot = Some(spot);
            }
            StrategyAction::AddLeg(leg) => {
                self.legs.push(leg);
            }
            StrategyAction::UpdateLeg(index, leg) => {
                if let Some(slot) = self.legs.get_mut(index) {
                    *slot = leg;
                }
            }
            StrategyAction::RemoveLeg(index) => {
                if index < self.legs.len() {
                    self.legs.remove(index);
                }
            }
            StrategyAction::ClearLegs => {
                self.legs.clear();
            }
            StrategyAction::ApplyChain(chain) => {
                self.spot = Some(chain.last_price);
                self.chain = Some(chain);
            }
        }
    }

    /// Derive the P/L curve from the current state.
    ///
    /// Premiums come from the chain snapshot when one is installed, through
    /// the same resolution chain every other surface uses. With no spot
    /// price the curve is empty ("add legs to see payoff diagram").
    pub fn curve(&self) -> Vec<PayoffPoint> {
        let Some(spot) = self.spot else {
            return Vec::new();
        };
        match &self.chain {
            Some(chain) => payoff::compute_payoff_with_chain(&self.legs, spot, chain),
            None => payoff::compute_payoff(&self.legs, spot),
        }
    }

    /// Derive the break-even prices from the current state.
    pub fn break_evens(&self) -> Vec<f64> {
        payoff::break_evens(&self.curve())
    }
}
