//! Request and response types for the OptLab API, and the canonical
//! strategy data model.
//!
//! This module contains the strongly-typed structs used for serializing
//! requests and deserializing responses, plus the canonical [`leg::Leg`]
//! shape that every heterogeneous upstream payload is normalized into
//! before it reaches the payoff engine.
//!
//! ## Organization
//!
//! - [`enums`] — Shared enumerations (option type, leg action, task state)
//! - [`leg`] — The canonical strategy leg
//! - [`market_quote`] — Spot quote types
//! - [`option_chain`] — Option chain snapshot and expiry list types
//! - [`reports`] — AI report generation and background task types
//!
//! All enums are re-exported at the module root via `pub use enums::*`.

pub mod enums;
pub mod leg;
pub mod market_quote;
pub mod option_chain;
pub mod reports;

pub use enums::*;
