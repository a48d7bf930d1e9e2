//! REST API endpoint implementations.
//!
//! Each sub-module adds high-level `async` methods to
//! [`OptLabClient`](crate::client::OptLabClient) via `impl` blocks. All
//! methods handle JSON serialization, HTTP transport, and error mapping
//! automatically.
//!
//! ## Usage
//!
//! Simply import the relevant types and call methods on your `OptLabClient`:
//!
//! ```no_run
//! use optlab_rs::OptLabClient;
//!
//! # #[tokio::main]
//! # async fn main() -> optlab_rs::Result<()> {
//! let client = OptLabClient::new("api-key")?;
//! let quote = client.get_spot_quote("SPY").await?;
//! let expiries = client.get_expiry_list("SPY").await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! | Module | Endpoints | Description |
//! |---|---|---|
//! | [`market_quote`] | 1 | Spot price snapshots |
//! | [`option_chain`] | 2 | Option chain, expiry lists |
//! | [`reports`] | 3 | AI report generation, task polling |

pub mod market_quote;
pub mod option_chain;
pub mod reports;
