#![allow(missing_docs)]
//! Option Chain types — chain snapshot, per-strike quotes, expiry list.

use serde::Deserialize;

use crate::types::enums::OptionType;

// ---------------------------------------------------------------------------
// Request
// ---------------------------------------------------------------------------

/// Request body for fetching the option chain.
///
/// Used by `POST /v1/chains`.
#[derive(Debug, Clone, serde::Serialize)]
pub struct OptionChainRequest {
    /// Underlying symbol (e.g. `"SPY"`).
    pub symbol: String,
    /// Expiry date (YYYY-MM-DD).
    pub expiry: String,
}

// ---------------------------------------------------------------------------
// Quote
// ---------------------------------------------------------------------------

/// Quoted market data for a single call or put contract.
///
/// Upstream chain providers are inconsistent about field names
/// (`bid`/`bid_price`, `strike`/`strike_price`); the aliases below absorb
/// every variant at the deserialization boundary so nothing downstream has
/// to branch on them.
#[derive(Debug, Clone, Deserialize)]
pub struct OptionQuote {
    #[serde(alias = "strike_price")]
    pub strike: f64,
    #[serde(default, alias = "bid_price")]
    pub bid: Option<f64>,
    #[serde(default, alias = "ask_price")]
    pub ask: Option<f64>,
    #[serde(default, alias = "last")]
    pub last_price: Option<f64>,
    #[serde(default)]
    pub open_interest: Option<i64>,
    #[serde(default)]
    pub implied_volatility: Option<f64>,
    #[serde(default)]
    pub volume: Option<i64>,
}

impl OptionQuote {
    /// Bid/ask midpoint, available only when both sides are positive and
    /// finite. A one-sided or crossed-out quote yields `None` and the caller
    /// falls through to the next premium source.
    pub fn midpoint(&self) -> Option<f64> {
        match (self.bid, self.ask) {
            (Some(bid), Some(ask))
                if bid.is_finite() && ask.is_finite() && bid > 0.0 && ask > 0.0 =>
            {
                Some((bid + ask) / 2.0)
            }
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Chain Snapshot
// ---------------------------------------------------------------------------

/// Inner data envelope of the option chain response.
///
/// Calls and puts are kept as separate strike-sorted lists: premium
/// resolution scans for the nearest strike, which a keyed map cannot do
/// without collecting anyway.
#[derive(Debug, Clone, Deserialize)]
pub struct OptionChainData {
    /// Last traded price of the underlying.
    #[serde(alias = "last")]
    pub last_price: f64,
    /// Call quotes across all strikes.
    #[serde(default)]
    pub calls: Vec<OptionQuote>,
    /// Put quotes across all strikes.
    #[serde(default)]
    pub puts: Vec<OptionQuote>,
}

impl OptionChainData {
    /// Quotes for the given side.
    pub fn side(&self, option_type: OptionType) -> &[OptionQuote] {
        match option_type {
            OptionType::Call => &self.calls,
            OptionType::Put => &self.puts,
        }
    }

    /// Sort both sides by strike and drop quotes with a non-finite strike.
    ///
    /// Called once at ingestion; the premium-resolution scans assume finite
    /// strikes but not any particular order.
    pub fn normalize(&mut self) {
        for quotes in [&mut self.calls, &mut self.puts] {
            quotes.retain(|q| q.strike.is_finite());
            quotes.sort_by(|a, b| a.strike.total_cmp(&b.strike));
        }
    }
}

/// Response from `POST /v1/chains`.
#[derive(Debug, Clone, Deserialize)]
pub struct OptionChainResponse {
    pub data: OptionChainData,
    pub status: String,
}

// ---------------------------------------------------------------------------
// Expiry List Response
// ---------------------------------------------------------------------------

/// Response from `GET /v1/chains/{symbol}/expiries`.
#[derive(Debug, Clone, Deserialize)]
pub struct ExpiryListResponse {
    /// List of expiry dates (YYYY-MM-DD).
    pub data: Vec<String>,
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn midpoint_requires_two_positive_finite_sides() {
        let quote = |bid, ask| OptionQuote {
            strike: 100.0,
            bid,
            ask,
            last_price: None,
            open_interest: None,
            implied_volatility: None,
            volume: None,
        };
        assert_eq!(quote(Some(4.0), Some(6.0)).midpoint(), Some(5.0));
        assert_eq!(quote(Some(0.0), Some(6.0)).midpoint(), None);
        assert_eq!(quote(Some(4.0), None).midpoint(), None);
        assert_eq!(quote(Some(f64::NAN), Some(6.0)).midpoint(), None);
        assert_eq!(quote(Some(-1.0), Some(6.0)).midpoint(), None);
    }

    #[test]
    fn deserializes_provider_field_variants() {
        let chain: OptionChainData = serde_json::from_str(
            r#"{
                "last": 101.5,
                "calls": [
                    {"strike_price": 100.0, "bid_price": 4.0, "ask_price": 4.4},
                    {"strike": 105.0, "bid": 1.8, "ask": 2.0, "last": 1.9}
                ],
                "puts": []
            }"#,
        )
        .unwrap();
        assert_eq!(chain.last_price, 101.5);
        assert_eq!(chain.calls.len(), 2);
        assert_eq!(chain.calls[0].bid, Some(4.0));
        assert_eq!(chain.calls[1].last_price, Some(1.9));
    }

    #[test]
    fn normalize_sorts_and_drops_bad_strikes() {
        let bare = |strike| OptionQuote {
            strike,
            bid: None,
            ask: None,
            last_price: None,
            open_interest: None,
            implied_volatility: None,
            volume: None,
        };
        let mut chain = OptionChainData {
            last_price: 100.0,
            calls: vec![bare(110.0), bare(90.0), bare(f64::NAN)],
            puts: vec![],
        };
        chain.normalize();
        let strikes: Vec<f64> = chain.calls.iter().map(|q| q.strike).collect();
        assert_eq!(strikes, vec![90.0, 110.0]);
    }
}
