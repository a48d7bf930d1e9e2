//! Payoff engine — P/L curves, break-evens, premium resolution.
//!
//! A pure, synchronous transform from a strategy (legs + spot price,
//! optionally a live chain snapshot) to the data a payoff chart needs:
//!
//! - [`engine::compute_payoff`] — sample the aggregate P/L across a price
//!   window around spot
//! - [`break_even::break_evens`] — extract every zero crossing from the
//!   sampled curve
//! - [`premium::resolve_premium`] — pick each leg's effective premium from
//!   live quotes with a deterministic fallback chain
//!
//! No I/O, no shared state: identical inputs always produce identical
//! output, so every UI surface (chart, table, export) derives from the same
//! numbers.

pub mod break_even;
pub mod engine;
pub mod premium;

pub use break_even::break_evens;
pub use engine::{PayoffPoint, compute_payoff, compute_payoff_with_chain};
pub use premium::resolve_premium;
