use crate::models::{ClassStatus, ClassView, ExtraFormView, Notice, SessionView};
use crate::remote::iso_date;
use crate::routine::{self, DayKey, RoutineClass};
use chrono::NaiveDate;
use std::collections::HashMap;

/// Status selections for the day currently on screen.
#[derive(Debug, Clone)]
pub struct StatusStore {
    day: DayKey,
    statuses: HashMap<String, ClassStatus>,
}

impl StatusStore {
    pub fn new(day: DayKey) -> Self {
        Self {
            day,
            statuses: HashMap::new(),
        }
    }

    pub fn day(&self) -> DayKey {
        self.day
    }

    pub fn classes(&self) -> &'static [RoutineClass] {
        routine::classes_for(self.day)
    }

    pub fn statuses(&self) -> &HashMap<String, ClassStatus> {
        &self.statuses
    }

    pub fn status_of(&self, class_id: &str) -> ClassStatus {
        self.statuses.get(class_id).copied().unwrap_or_default()
    }

    /// Switches day and forgets every selection made for the previous one.
    pub fn select_day(&mut self, day: DayKey) {
        self.day = day;
        self.statuses.clear();
    }

    /// Returns `false` when the class is not scheduled on the current day.
    pub fn set_status(&mut self, class_id: &str, status: ClassStatus) -> bool {
        match routine::find_class(self.day, class_id) {
            Some(class) => {
                self.statuses.insert(class.id.to_string(), status);
                true
            }
            None => false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtraClassForm {
    pub course_name: String,
    pub date: String,
}

impl ExtraClassForm {
    pub fn reset(&mut self, today: NaiveDate) {
        self.course_name.clear();
        self.date = iso_date(today);
    }
}

/// Everything the home page shows besides the static routine.
#[derive(Debug, Clone)]
pub struct HomeSession {
    pub store: StatusStore,
    pub extra: ExtraClassForm,
    pub is_submitting: bool,
    pub is_submitting_extra: bool,
    pub notice: Option<Notice>,
}

impl HomeSession {
    pub fn new(today: NaiveDate) -> Self {
        let mut extra = ExtraClassForm::default();
        extra.reset(today);
        Self {
            store: StatusStore::new(DayKey::for_date(today)),
            extra,
            is_submitting: false,
            is_submitting_extra: false,
            notice: None,
        }
    }

    pub fn select_day(&mut self, day: DayKey) {
        self.store.select_day(day);
        self.notice = None;
    }

    pub fn begin_submit(&mut self) {
        self.is_submitting = true;
        self.notice = None;
    }

    /// `day` is the day the batch was taken from. Its notice is dropped if
    /// the user switched days while it was in flight.
    pub fn finish_submit(&mut self, day: DayKey, notice: Notice) {
        self.is_submitting = false;
        if self.store.day() == day {
            self.notice = Some(notice);
        }
    }

    pub fn begin_extra(&mut self) {
        self.is_submitting_extra = true;
        self.notice = None;
    }

    pub fn finish_extra(&mut self, notice: Notice, reset_to: Option<NaiveDate>) {
        self.is_submitting_extra = false;
        if let Some(today) = reset_to {
            self.extra.reset(today);
        }
        self.notice = Some(notice);
    }

    pub fn view(&self) -> SessionView {
        let classes = self
            .store
            .classes()
            .iter()
            .map(|class| ClassView {
                id: class.id,
                course_name: class.course_name,
                label: class.label,
                status: self.store.status_of(class.id),
            })
            .collect();

        SessionView {
            selected_day: self.store.day(),
            days: DayKey::ALL.to_vec(),
            classes,
            courses: routine::all_courses(),
            is_submitting: self.is_submitting,
            is_submitting_extra: self.is_submitting_extra,
            extra: ExtraFormView {
                course_name: self.extra.course_name.clone(),
                date: self.extra.date.clone(),
            },
            notice: self.notice.clone(),
        }
    }
}
