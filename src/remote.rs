use crate::config::Config;
use crate::errors::AttendanceError;
use crate::models::AttendanceRecord;
use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::{Client, Method, Response, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

pub const UPDATE_FALLBACK: &str = "Failed to update attendance";
pub const ABSENT_FALLBACK: &str = "Failed to mark absent";
pub const CANCEL_FALLBACK: &str = "Failed to mark cancelled";
pub const EXTRA_FALLBACK: &str = "Failed to add extra class";
pub const LIST_FALLBACK: &str = "Failed to fetch attendance data";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Increments {
    pub attended: u32,
    pub total: u32,
}

impl Increments {
    pub const ATTENDED: Increments = Increments {
        attended: 1,
        total: 1,
    };
    pub const ABSENT: Increments = Increments {
        attended: 0,
        total: 1,
    };
}

/// The remote attendance service. Every call is one-shot and independent.
#[async_trait]
pub trait AttendanceApi: Send + Sync {
    async fn update_attendance(
        &self,
        course_name: &str,
        increments: Increments,
        secret: &str,
    ) -> Result<(), AttendanceError>;

    async fn mark_absent(
        &self,
        course_name: &str,
        date: NaiveDate,
        secret: &str,
    ) -> Result<(), AttendanceError>;

    async fn mark_cancelled(
        &self,
        course_name: &str,
        date: NaiveDate,
        secret: &str,
    ) -> Result<(), AttendanceError>;

    async fn record_extra(
        &self,
        course_name: &str,
        date: NaiveDate,
        secret: &str,
    ) -> Result<(), AttendanceError>;

    async fn list_attendance(&self) -> Result<Vec<AttendanceRecord>, AttendanceError>;
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct UpdateBody<'a> {
    course_name: &'a str,
    increment_attended: u32,
    increment_total: u32,
    secret: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DatedBody<'a> {
    course_name: &'a str,
    date: String,
    secret: &'a str,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

#[derive(Debug, Clone)]
pub struct HttpAttendanceClient {
    http: Client,
    api_base: String,
    status_api_base: String,
}

impl HttpAttendanceClient {
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        let http = Client::builder().timeout(config.request_timeout).build()?;
        Ok(Self {
            http,
            api_base: config.api_base.clone(),
            status_api_base: config.status_api_base.clone(),
        })
    }

    async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: &B,
        conflict_ok: bool,
        fallback: &str,
    ) -> Result<Response, AttendanceError> {
        let url = format!("{}{path}", self.api_base);
        debug!(%method, %url, "calling attendance service");
        let response = self.http.request(method, url.as_str()).json(body).send().await?;
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }
        if conflict_ok && status == StatusCode::CONFLICT {
            debug!(%url, "already recorded, treating conflict as success");
            return Ok(response);
        }

        let message = error_message(response, fallback).await;
        warn!(%url, %status, "attendance service rejected request: {message}");
        Err(AttendanceError::RemoteRequestFailed { message })
    }
}

async fn error_message(response: Response, fallback: &str) -> String {
    response
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(|body| body.message)
        .filter(|message| !message.trim().is_empty())
        .unwrap_or_else(|| fallback.to_string())
}

pub fn iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[async_trait]
impl AttendanceApi for HttpAttendanceClient {
    async fn update_attendance(
        &self,
        course_name: &str,
        increments: Increments,
        secret: &str,
    ) -> Result<(), AttendanceError> {
        let body = UpdateBody {
            course_name,
            increment_attended: increments.attended,
            increment_total: increments.total,
            secret,
        };
        self.send(Method::PATCH, "/update", &body, false, UPDATE_FALLBACK)
            .await?;
        Ok(())
    }

    async fn mark_absent(
        &self,
        course_name: &str,
        date: NaiveDate,
        secret: &str,
    ) -> Result<(), AttendanceError> {
        let body = DatedBody {
            course_name,
            date: iso_date(date),
            secret,
        };
        self.send(Method::POST, "/absent", &body, true, ABSENT_FALLBACK)
            .await?;
        Ok(())
    }

    async fn mark_cancelled(
        &self,
        course_name: &str,
        date: NaiveDate,
        secret: &str,
    ) -> Result<(), AttendanceError> {
        let body = DatedBody {
            course_name,
            date: iso_date(date),
            secret,
        };
        self.send(Method::POST, "/cancel", &body, true, CANCEL_FALLBACK)
            .await?;
        Ok(())
    }

    async fn record_extra(
        &self,
        course_name: &str,
        date: NaiveDate,
        secret: &str,
    ) -> Result<(), AttendanceError> {
        let body = DatedBody {
            course_name,
            date: iso_date(date),
            secret,
        };
        let response = self
            .send(Method::POST, "/extra", &body, false, EXTRA_FALLBACK)
            .await?;
        response
            .json::<serde_json::Value>()
            .await
            .map_err(|err| AttendanceError::remote(format!("Unreadable response: {err}")))?;
        Ok(())
    }

    async fn list_attendance(&self) -> Result<Vec<AttendanceRecord>, AttendanceError> {
        let url = format!("{}/", self.status_api_base);
        debug!(%url, "fetching attendance records");
        let response = self.http.get(url.as_str()).send().await?;
        if !response.status().is_success() {
            warn!(%url, status = %response.status(), "attendance listing failed");
            return Err(AttendanceError::remote(LIST_FALLBACK));
        }
        response
            .json::<Vec<AttendanceRecord>>()
            .await
            .map_err(|err| {
                warn!(%url, "attendance listing was not a record array: {err}");
                AttendanceError::remote(LIST_FALLBACK)
            })
    }
}
