//! Recording stand-in for the remote attendance service used by unit tests.

use crate::errors::AttendanceError;
use crate::models::AttendanceRecord;
use crate::remote::{AttendanceApi, Increments};
use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::HashMap;
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Update {
        course_name: String,
        increments: Increments,
    },
    Absent {
        course_name: String,
        date: NaiveDate,
    },
    Cancelled {
        course_name: String,
        date: NaiveDate,
    },
    Extra {
        course_name: String,
        date: NaiveDate,
    },
    List,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Update,
    Absent,
    Cancel,
    Extra,
}

#[derive(Default)]
pub struct RecordingApi {
    calls: Mutex<Vec<Call>>,
    failures: HashMap<(Endpoint, String), AttendanceError>,
    records: Option<Vec<AttendanceRecord>>,
}

impl RecordingApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(mut self, endpoint: Endpoint, course_name: &str, err: AttendanceError) -> Self {
        self.failures.insert((endpoint, course_name.to_string()), err);
        self
    }

    pub fn with_records(mut self, records: Vec<AttendanceRecord>) -> Self {
        self.records = Some(records);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call, endpoint: Endpoint, course_name: &str) -> Result<(), AttendanceError> {
        self.calls.lock().unwrap().push(call);
        match self.failures.get(&(endpoint, course_name.to_string())) {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl AttendanceApi for RecordingApi {
    async fn update_attendance(
        &self,
        course_name: &str,
        increments: Increments,
        _secret: &str,
    ) -> Result<(), AttendanceError> {
        let call = Call::Update {
            course_name: course_name.to_string(),
            increments,
        };
        self.record(call, Endpoint::Update, course_name)
    }

    async fn mark_absent(
        &self,
        course_name: &str,
        date: NaiveDate,
        _secret: &str,
    ) -> Result<(), AttendanceError> {
        let call = Call::Absent {
            course_name: course_name.to_string(),
            date,
        };
        self.record(call, Endpoint::Absent, course_name)
    }

    async fn mark_cancelled(
        &self,
        course_name: &str,
        date: NaiveDate,
        _secret: &str,
    ) -> Result<(), AttendanceError> {
        let call = Call::Cancelled {
            course_name: course_name.to_string(),
            date,
        };
        self.record(call, Endpoint::Cancel, course_name)
    }

    async fn record_extra(
        &self,
        course_name: &str,
        date: NaiveDate,
        _secret: &str,
    ) -> Result<(), AttendanceError> {
        let call = Call::Extra {
            course_name: course_name.to_string(),
            date,
        };
        self.record(call, Endpoint::Extra, course_name)
    }

    async fn list_attendance(&self) -> Result<Vec<AttendanceRecord>, AttendanceError> {
        self.calls.lock().unwrap().push(Call::List);
        self.records
            .clone()
            .ok_or_else(|| AttendanceError::remote(crate::remote::LIST_FALLBACK))
    }
}
