//! Option Chain endpoints — chain snapshots, expiry list.

use crate::client::OptLabClient;
use crate::error::Result;
use crate::types::option_chain::*;

impl OptLabClient {
    /// Retrieve the option chain for a given underlying and expiry.
    ///
    /// Returns bid/ask, last price, OI, volume and IV across all strikes,
    /// already normalized: quotes are strike-sorted and entries with a
    /// non-finite strike are dropped.
    ///
    /// **Endpoint:** `POST /v1/chains`
    pub async fn get_option_chain(&self, req: &OptionChainRequest) -> Result<OptionChainResponse> {
        let mut resp: OptionChainResponse = self.post("/v1/chains", req).await?;
        resp.data.normalize();
        Ok(resp)
    }

    /// Retrieve all active expiry dates for an underlying.
    ///
    /// **Endpoint:** `GET /v1/chains/{symbol}/expiries`
    pub async fn get_expiry_list(&self, symbol: &str) -> Result<ExpiryListResponse> {
        self.get(&format!("/v1/chains/{symbol}/expiries")).await
    }
}
