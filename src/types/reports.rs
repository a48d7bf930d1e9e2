#![allow(missing_docs)]
//! Report types — AI report generation requests, background tasks, reports.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::leg::Leg;

// ---------------------------------------------------------------------------
// Generate Report Request
// ---------------------------------------------------------------------------

/// Request body for generating a strategy research report.
///
/// Used by `POST /v1/reports`.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateReportRequest {
    /// Underlying symbol the report is about.
    pub symbol: String,
    /// Strategy legs to analyze (may be empty for a plain market report).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub legs: Vec<Leg>,
    /// Free-form focus prompt forwarded to the report generator.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focus: Option<String>,
}

// ---------------------------------------------------------------------------
// Task Status
// ---------------------------------------------------------------------------

/// Status payload of a background report task.
#[derive(Debug, Clone, Deserialize)]
pub struct TaskStatus {
    pub task_id: String,
    pub state: crate::types::enums::TaskState,
    /// Completion fraction in `[0, 1]`, when the worker reports it.
    #[serde(default)]
    pub progress: Option<f64>,
    /// Identifier of the finished report (set once `state` is `succeeded`).
    #[serde(default)]
    pub report_id: Option<String>,
    /// Failure reason (set once `state` is `failed`).
    #[serde(default)]
    pub error: Option<String>,
}

/// Response from `POST /v1/reports` — the accepted task handle.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateReportResponse {
    pub data: TaskStatus,
    pub status: String,
}

/// Response from `GET /v1/tasks/{task_id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct TaskStatusResponse {
    pub data: TaskStatus,
    pub status: String,
}

// ---------------------------------------------------------------------------
// Report
// ---------------------------------------------------------------------------

/// A finished research report.
#[derive(Debug, Clone, Deserialize)]
pub struct Report {
    pub report_id: String,
    pub symbol: String,
    /// Report body as markdown.
    pub body: String,
    pub created_at: DateTime<Utc>,
}

/// Response from `GET /v1/reports/{report_id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportResponse {
    pub data: Report,
    pub status: String,
}
