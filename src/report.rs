use crate::errors::AttendanceError;
use crate::models::{AttendanceRecord, StatusRow};
use crate::remote::AttendanceApi;

pub const LOW_ATTENDANCE_THRESHOLD: u32 = 75;

/// Rounded share of attended classes; zero when nothing was held yet.
pub fn calculate_percentage(attended: u64, total: u64) -> u32 {
    if total == 0 {
        return 0;
    }
    (attended as f64 / total as f64 * 100.0).round() as u32
}

pub fn is_low_attendance(percentage: u32) -> bool {
    percentage < LOW_ATTENDANCE_THRESHOLD
}

pub fn build_rows(records: &[AttendanceRecord]) -> Vec<StatusRow> {
    records
        .iter()
        .map(|record| {
            let percentage = calculate_percentage(record.attended, record.total);
            StatusRow {
                key: record
                    .id
                    .clone()
                    .unwrap_or_else(|| record.course_name.clone()),
                course_name: record.course_name.clone(),
                attended: record.attended,
                total: record.total,
                percentage,
                low_attendance: is_low_attendance(percentage),
            }
        })
        .collect()
}

pub async fn fetch_status_report(api: &dyn AttendanceApi) -> Result<Vec<StatusRow>, AttendanceError> {
    let records = api.list_attendance().await?;
    Ok(build_rows(&records))
}
