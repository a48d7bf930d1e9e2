//! Report endpoints — AI report generation and background task polling.

use std::time::Duration;

use crate::client::OptLabClient;
use crate::constants::polling;
use crate::error::{OptLabError, Result};
use crate::types::enums::TaskState;
use crate::types::reports::*;

impl OptLabClient {
    /// Submit a report-generation request.
    ///
    /// Report generation runs as a background task on the backend; the
    /// response carries the task handle to poll with
    /// [`get_task_status`](Self::get_task_status).
    ///
    /// **Endpoint:** `POST /v1/reports`
    pub async fn generate_report(
        &self,
        req: &GenerateReportRequest,
    ) -> Result<GenerateReportResponse> {
        self.post("/v1/reports", req).await
    }

    /// Retrieve the status of a background report task.
    ///
    /// **Endpoint:** `GET /v1/tasks/{task_id}`
    pub async fn get_task_status(&self, task_id: &str) -> Result<TaskStatusResponse> {
        self.get(&format!("/v1/tasks/{task_id}")).await
    }

    /// Retrieve a finished report.
    ///
    /// **Endpoint:** `GET /v1/reports/{report_id}`
    pub async fn get_report(&self, report_id: &str) -> Result<ReportResponse> {
        self.get(&format!("/v1/reports/{report_id}")).await
    }

    /// Poll a report task until it finishes, then fetch the report.
    ///
    /// Polls every [`polling::INTERVAL_SECS`] seconds, up to
    /// [`polling::MAX_ATTEMPTS`] times. A task that ends in the `failed`
    /// state yields [`OptLabError::TaskFailed`]; one that never reaches a
    /// terminal state yields [`OptLabError::TaskTimeout`].
    pub async fn wait_for_report(&self, task_id: &str) -> Result<Report> {
        for attempt in 1..=polling::MAX_ATTEMPTS {
            let status = self.get_task_status(task_id).await?.data;
            tracing::debug!(
                task_id,
                state = ?status.state,
                progress = status.progress,
                attempt,
                "report task poll"
            );

            match status.state {
                TaskState::Succeeded => {
                    let report_id = status.report_id.ok_or_else(|| {
                        OptLabError::InvalidArgument(format!(
                            "task {task_id} succeeded without a report id"
                        ))
                    })?;
                    return Ok(self.get_report(&report_id).await?.data);
                }
                TaskState::Failed => {
                    return Err(OptLabError::TaskFailed {
                        task_id: task_id.to_owned(),
                        reason: status.error.unwrap_or_else(|| "unknown".to_owned()),
                    });
                }
                TaskState::Pending | TaskState::Running => {
                    tokio::time::sleep(Duration::from_secs(polling::INTERVAL_SECS)).await;
                }
            }
        }

        Err(OptLabError::TaskTimeout {
            task_id: task_id.to_owned(),
            attempts: polling::MAX_ATTEMPTS,
        })
    }
}
