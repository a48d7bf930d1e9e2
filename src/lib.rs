//! # optlab-rs
//!
//! Rust toolkit for options-strategy research: payoff curves, break-even
//! analysis, option chain normalization, and a typed async client for the
//! OptLab research API.
//!
//! ## Quick Start
//!
//! ```
//! use optlab_rs::payoff::{break_evens, compute_payoff};
//! use optlab_rs::types::enums::LegAction;
//! use optlab_rs::types::leg::Leg;
//!
//! let legs = vec![Leg::call(LegAction::Buy, 100.0, 1, 5.0)];
//! let curve = compute_payoff(&legs, 100.0);
//! let be = break_evens(&curve);
//! assert!((be[0] - 105.0).abs() < 0.05);
//! ```
//!
//! Fetching live data requires a client:
//!
//! ```no_run
//! use optlab_rs::client::OptLabClient;
//!
//! #[tokio::main]
//! async fn main() -> optlab_rs::error::Result<()> {
//!     let client = OptLabClient::new("your-api-key")?;
//!     let chain = client
//!         .get_option_chain(&optlab_rs::types::option_chain::OptionChainRequest {
//!             symbol: "SPY".into(),
//!             expiry: "2026-09-18".into(),
//!         })
//!         .await?;
//!     println!("spot = {}", chain.data.last_price);
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod client;
pub mod constants;
pub mod error;
pub mod payoff;
pub mod strategy;
pub mod types;

/// Re-export the main client type at crate root for convenience.
pub use client::OptLabClient;
/// Re-export the error type and Result alias.
pub use error::{OptLabError, Result};
