//! Market Quote endpoints — spot price snapshots.

use crate::client::OptLabClient;
use crate::error::Result;
use crate::types::market_quote::*;

impl OptLabClient {
    /// Retrieve the spot quote for an underlying symbol.
    ///
    /// The quote is a cached snapshot on the backend; during market hours it
    /// refreshes on a staleness window of a few seconds.
    ///
    /// **Endpoint:** `GET /v1/quotes/{symbol}`
    pub async fn get_spot_quote(&self, symbol: &str) -> Result<SpotQuoteResponse> {
        self.get(&format!("/v1/quotes/{symbol}")).await
    }
}
