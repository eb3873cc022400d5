use crate::credential::CredentialProvider;
use crate::errors::AttendanceError;
use crate::models::{ClassStatus, Notice};
use crate::remote::{AttendanceApi, Increments};
use crate::routine::{DayKey, classes_for};
use chrono::NaiveDate;
use std::collections::HashMap;
use tracing::{info, warn};

pub const BATCH_SUCCESS: &str = "Attendance updated successfully for selected classes.";
pub const BATCH_NOTHING: &str = "No classes were marked; nothing to update.";
pub const BATCH_FAILED: &str = "Some updates failed:";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchResult {
    /// `"<label>: <status>"` per class that went through.
    pub successes: Vec<String>,
    /// `"<label>: <error message>"` per class whose calls failed.
    pub failures: Vec<String>,
}

impl BatchResult {
    pub fn notice(&self) -> Notice {
        if !self.failures.is_empty() {
            let mut text = String::from(BATCH_FAILED);
            for line in &self.failures {
                text.push('\n');
                text.push_str(line);
            }
            return Notice::error(text);
        }

        if self.successes.is_empty() {
            Notice::success(BATCH_NOTHING)
        } else {
            Notice::success(BATCH_SUCCESS)
        }
    }
}

/// Walks `day`'s classes in routine order and issues the remote calls each
/// selected status requires. Calls are awaited one at a time; a failure only
/// ends the sequence of the class it belongs to.
pub async fn submit(
    api: &dyn AttendanceApi,
    day: DayKey,
    statuses: &HashMap<String, ClassStatus>,
    credentials: &dyn CredentialProvider,
    date: NaiveDate,
) -> BatchResult {
    let mut result = BatchResult::default();

    for class in classes_for(day) {
        let status = statuses.get(class.id).copied().unwrap_or_default();
        if status == ClassStatus::Pending {
            continue;
        }

        match apply_status(api, credentials, class.course_name, status, date).await {
            Ok(()) => result
                .successes
                .push(format!("{}: {}", class.label, status.as_str())),
            Err(err) => {
                warn!(class = class.id, status = status.as_str(), "class update failed: {err}");
                result.failures.push(format!("{}: {err}", class.label));
            }
        }
    }

    info!(
        day = day.name(),
        successes = result.successes.len(),
        failures = result.failures.len(),
        "attendance batch finished"
    );
    result
}

async fn apply_status(
    api: &dyn AttendanceApi,
    credentials: &dyn CredentialProvider,
    course_name: &str,
    status: ClassStatus,
    date: NaiveDate,
) -> Result<(), AttendanceError> {
    match status {
        ClassStatus::Pending => Ok(()),
        ClassStatus::Attended => {
            update_attendance(api, credentials, course_name, Increments::ATTENDED).await
        }
        ClassStatus::Absent => {
            update_attendance(api, credentials, course_name, Increments::ABSENT).await?;
            mark_absent(api, credentials, course_name, date).await
        }
        ClassStatus::Cancelled => mark_cancelled(api, credentials, course_name, date).await,
    }
}

async fn update_attendance(
    api: &dyn AttendanceApi,
    credentials: &dyn CredentialProvider,
    course_name: &str,
    increments: Increments,
) -> Result<(), AttendanceError> {
    let secret = credentials.secret()?;
    api.update_attendance(course_name, increments, secret).await
}

async fn mark_absent(
    api: &dyn AttendanceApi,
    credentials: &dyn CredentialProvider,
    course_name: &str,
    date: NaiveDate,
) -> Result<(), AttendanceError> {
    let secret = credentials.secret()?;
    api.mark_absent(course_name, date, secret).await
}

async fn mark_cancelled(
    api: &dyn AttendanceApi,
    credentials: &dyn CredentialProvider,
    course_name: &str,
    date: NaiveDate,
) -> Result<(), AttendanceError> {
    let secret = credentials.secret()?;
    api.mark_cancelled(course_name, date, secret).await
}
