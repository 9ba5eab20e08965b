use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An examination paper as returned by the backend `exams` table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Exam {
    pub id: String,
    pub subject: String,
    pub paper_code: String,
    pub exam_date: String,
    pub exam_time: String,
    pub session: i32,
    pub duration: String,
    pub description: Option<String>,
    pub price: f64,
    pub image_url: Option<String>,
    pub category: Option<String>,
}

impl Exam {
    /// Calendar day of the exam. `exam_date` arrives as an ISO date string
    /// and is kept verbatim; records with an unparseable date get None here
    /// and are excluded from date-filtered views.
    pub fn exam_day(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.exam_date, "%Y-%m-%d").ok()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DateMode {
    Today,
    ThisWeek,
    NextWeek,
    Custom,
}

/// What the user is currently narrowing the catalogue by. Default is fully
/// permissive: empty query, no date mode.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    pub query: String,
    pub date_mode: Option<DateMode>,
    pub custom_date: Option<NaiveDate>,
}
