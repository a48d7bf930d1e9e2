//! Constants for the OptLab API and the payoff engine.
//!
//! Contains the API base URL, the payoff sweep parameters, and polling
//! values for background report tasks. These are used internally by
//! [`OptLabClient`](crate::client::OptLabClient) and [`crate::payoff`],
//! but are also exported for advanced usage.

// ---------------------------------------------------------------------------
// Base URLs
// ---------------------------------------------------------------------------

/// Base URL for the OptLab research REST API.
pub const API_BASE_URL: &str = "https://api.optlab.io";

// ---------------------------------------------------------------------------
// Payoff sweep
// ---------------------------------------------------------------------------

/// Payoff sweep parameters.
///
/// The P/L curve is sampled over `[spot × LOWER, spot × UPPER]` in
/// [`STEPS`](sweep::STEPS) increments. The window and step count are sized
/// for a chart a few hundred pixels wide; neither is a hard requirement of
/// the math.
pub mod sweep {
    /// Lower bound of the simulation window, as a multiple of spot.
    pub const LOWER: f64 = 0.7;
    /// Upper bound of the simulation window, as a multiple of spot.
    pub const UPPER: f64 = 1.3;
    /// Number of price steps across the window.
    pub const STEPS: usize = 200;
    /// Decimal places profits are rounded to for display stability.
    pub const PROFIT_DECIMALS: i32 = 2;
}

// ---------------------------------------------------------------------------
// Premium resolution
// ---------------------------------------------------------------------------

/// Maximum strike distance at which an adjacent quote may stand in for a
/// missing exact-strike quote during premium resolution.
pub const ADJACENT_STRIKE_MAX_DISTANCE: f64 = 10.0;

// ---------------------------------------------------------------------------
// Report task polling
// ---------------------------------------------------------------------------

/// Polling configuration for background report tasks.
pub mod polling {
    /// Seconds between task status polls.
    pub const INTERVAL_SECS: u64 = 2;
    /// Maximum number of polls before giving up on a task.
    pub const MAX_ATTEMPTS: u32 = 90;
}
