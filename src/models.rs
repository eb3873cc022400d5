use crate::routine::DayKey;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassStatus {
    #[default]
    Pending,
    Attended,
    Absent,
    Cancelled,
}

impl ClassStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ClassStatus::Pending => "pending",
            ClassStatus::Attended => "attended",
            ClassStatus::Absent => "absent",
            ClassStatus::Cancelled => "cancelled",
        }
    }
}

/// Per-course counters as stored by the remote service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    pub course_name: String,
    pub attended: u64,
    pub total: u64,
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == NoticeKind::Error
    }
}

#[derive(Debug, Deserialize)]
pub struct SelectDayRequest {
    pub day: DayKey,
}

#[derive(Debug, Deserialize)]
pub struct SetStatusRequest {
    pub class_id: String,
    pub status: ClassStatus,
}

#[derive(Debug, Deserialize)]
pub struct SubmitRequest {
    #[serde(default)]
    pub secret: String,
}

#[derive(Debug, Deserialize)]
pub struct ExtraClassRequest {
    #[serde(default)]
    pub course_name: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub secret: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ClassView {
    pub id: &'static str,
    pub course_name: &'static str,
    pub label: &'static str,
    pub status: ClassStatus,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExtraFormView {
    pub course_name: String,
    pub date: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionView {
    pub selected_day: DayKey,
    pub days: Vec<DayKey>,
    pub classes: Vec<ClassView>,
    pub courses: Vec<&'static str>,
    pub is_submitting: bool,
    pub is_submitting_extra: bool,
    pub extra: ExtraFormView,
    pub notice: Option<Notice>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusRow {
    pub key: String,
    pub course_name: String,
    pub attended: u64,
    pub total: u64,
    pub percentage: u32,
    pub low_attendance: bool,
}

#[derive(Debug, Serialize)]
pub struct StatusReportResponse {
    pub rows: Vec<StatusRow>,
}
