#![allow(missing_docs)]
//! Market Quote types — spot price snapshots.

use serde::Deserialize;

// ---------------------------------------------------------------------------
// Spot Quote response
// ---------------------------------------------------------------------------

/// Spot snapshot for a single underlying.
#[derive(Debug, Clone, Deserialize)]
pub struct SpotQuote {
    pub symbol: String,
    #[serde(alias = "last")]
    pub last_price: f64,
    #[serde(default)]
    pub prev_close: Option<f64>,
    #[serde(default)]
    pub change_percent: Option<f64>,
    /// Epoch timestamp (seconds) of the quote.
    #[serde(default)]
    pub updated_at: Option<i64>,
}

/// Response from `GET /v1/quotes/{symbol}`.
#[derive(Debug, Clone, Deserialize)]
pub struct SpotQuoteResponse {
    pub data: SpotQuote,
    pub status: String,
}
