use crate::credential::CredentialProvider;
use crate::errors::AttendanceError;
use crate::models::Notice;
use crate::remote::{AttendanceApi, iso_date};
use chrono::NaiveDate;
use tracing::{info, warn};

pub const MISSING_COURSE: &str = "Please select a course for the extra class.";
pub const MISSING_SECRET: &str = "Please enter the secret word.";

/// Records one class held outside the weekly routine. The service bumps the
/// course's counters as part of the same call.
pub async fn record_extra_class(
    api: &dyn AttendanceApi,
    course_name: &str,
    iso: &str,
    credentials: &dyn CredentialProvider,
) -> Result<NaiveDate, AttendanceError> {
    if course_name.trim().is_empty() {
        return Err(AttendanceError::MissingSelection(MISSING_COURSE));
    }
    let secret = credentials.secret()?;
    let date = NaiveDate::parse_from_str(iso.trim(), "%Y-%m-%d")
        .map_err(|_| AttendanceError::InvalidDate)?;

    api.record_extra(course_name, date, secret).await?;
    info!(course = course_name, date = %date, "extra class recorded");
    Ok(date)
}

/// Notice for the outcome of [`record_extra_class`].
pub fn extra_notice(course_name: &str, result: &Result<NaiveDate, AttendanceError>) -> Notice {
    match result {
        Ok(date) => Notice::success(format!(
            "Extra class added successfully for {course_name} on {}. Attendance has been updated.",
            iso_date(*date)
        )),
        Err(AttendanceError::MissingCredential) => Notice::error(MISSING_SECRET),
        Err(err @ (AttendanceError::MissingSelection(_) | AttendanceError::InvalidDate)) => {
            Notice::error(err.to_string())
        }
        Err(err) => {
            warn!(course = course_name, "extra class failed: {err}");
            Notice::error(format!("Failed to add extra class: {err}"))
        }
    }
}
