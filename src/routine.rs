use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DayKey {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl DayKey {
    pub const ALL: [DayKey; 5] = [
        DayKey::Monday,
        DayKey::Tuesday,
        DayKey::Wednesday,
        DayKey::Thursday,
        DayKey::Friday,
    ];

    pub fn name(self) -> &'static str {
        match self {
            DayKey::Monday => "Monday",
            DayKey::Tuesday => "Tuesday",
            DayKey::Wednesday => "Wednesday",
            DayKey::Thursday => "Thursday",
            DayKey::Friday => "Friday",
        }
    }

    /// Weekend dates fall back to Monday.
    pub fn for_date(date: NaiveDate) -> Self {
        match date.weekday() {
            Weekday::Tue => DayKey::Tuesday,
            Weekday::Wed => DayKey::Wednesday,
            Weekday::Thu => DayKey::Thursday,
            Weekday::Fri => DayKey::Friday,
            Weekday::Mon | Weekday::Sat | Weekday::Sun => DayKey::Monday,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoutineClass {
    pub id: &'static str,
    pub course_name: &'static str,
    pub label: &'static str,
}

const fn class(id: &'static str, course_name: &'static str) -> RoutineClass {
    RoutineClass {
        id,
        course_name,
        label: course_name,
    }
}

const MONDAY: &[RoutineClass] = &[
    class("mon-coi", "CoI"),
    class("mon-es-lab", "ES_lab"),
    class("mon-cd", "CD"),
    class("mon-bct", "BCT"),
];

const TUESDAY: &[RoutineClass] = &[class("tue-aiml-lab", "AIML_lab")];

const WEDNESDAY: &[RoutineClass] = &[
    class("wed-cd-lab", "CD_lab"),
    class("wed-aiml", "AIML"),
    class("wed-cd", "CD"),
];

const THURSDAY: &[RoutineClass] = &[
    class("thu-aiml", "AIML"),
    class("thu-cd", "CD"),
    class("thu-bct", "BCT"),
];

const FRIDAY: &[RoutineClass] = &[
    class("fri-coi", "CoI"),
    class("fri-communication", "Communication"),
    class("fri-aiml", "AIML"),
    class("fri-cd", "CD"),
];

pub fn classes_for(day: DayKey) -> &'static [RoutineClass] {
    match day {
        DayKey::Monday => MONDAY,
        DayKey::Tuesday => TUESDAY,
        DayKey::Wednesday => WEDNESDAY,
        DayKey::Thursday => THURSDAY,
        DayKey::Friday => FRIDAY,
    }
}

pub fn find_class(day: DayKey, class_id: &str) -> Option<&'static RoutineClass> {
    classes_for(day).iter().find(|class| class.id == class_id)
}

/// Sorted, de-duplicated course names across the whole week.
pub fn all_courses() -> Vec<&'static str> {
    DayKey::ALL
        .iter()
        .flat_map(|day| classes_for(*day).iter().map(|class| class.course_name))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
