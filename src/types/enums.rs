//! Shared enum types that map directly to OptLab API string values.
//!
//! Variant names serialize in lowercase to match the JSON wire format used
//! by the OptLab backend and the option-chain providers it proxies.

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Option Type
// ---------------------------------------------------------------------------

/// Call or put side of an option contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionType {
    /// A call option (right to buy).
    Call,
    /// A put option (right to sell).
    Put,
}

impl OptionType {
    /// +1 for Call, −1 for Put.
    ///
    /// Lets intrinsic value be written once as `max(φ(S − K), 0)`.
    pub fn sign(self) -> f64 {
        match self {
            Self::Call => 1.0,
            Self::Put => -1.0,
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Call => write!(f, "call"),
            Self::Put => write!(f, "put"),
        }
    }
}

// ---------------------------------------------------------------------------
// Leg Action
// ---------------------------------------------------------------------------

/// Buy (long) or sell (short) side of a leg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LegAction {
    Buy,
    Sell,
}

impl fmt::Display for LegAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Buy => write!(f, "buy"),
            Self::Sell => write!(f, "sell"),
        }
    }
}

// ---------------------------------------------------------------------------
// Task State
// ---------------------------------------------------------------------------

/// State of a background report-generation task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskState {
    /// Queued, not yet picked up by a worker.
    Pending,
    /// A worker is generating the report.
    Running,
    /// Finished; the report is ready to fetch.
    Succeeded,
    /// The task failed; see the status payload for the reason.
    Failed,
}

impl TaskState {
    /// Whether the task has reached a terminal state.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Succeeded | Self::Failed)
    }
}
