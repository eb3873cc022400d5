use crate::remote::AttendanceApi;
use crate::session::HomeSession;
use chrono::NaiveDate;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub api: Arc<dyn AttendanceApi>,
    pub session: Arc<Mutex<HomeSession>>,
}

impl AppState {
    pub fn new(api: Arc<dyn AttendanceApi>, today: NaiveDate) -> Self {
        Self {
            api,
            session: Arc::new(Mutex::new(HomeSession::new(today))),
        }
    }
}
