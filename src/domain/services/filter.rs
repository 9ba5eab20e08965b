use crate::domain::model::{DateMode, Exam, FilterCriteria};
use chrono::{Datelike, Duration, NaiveDate};

/// Narrows `records` by the free-text query and then by the date selector.
/// Both steps are AND-combined. Pure: `today` is passed in explicitly so the
/// same inputs always produce the same output.
pub fn filter(records: &[Exam], criteria: &FilterCriteria, today: NaiveDate) -> Vec<Exam> {
    records
        .iter()
        .filter(|exam| matches_query(exam, &criteria.query))
        .filter(|exam| matches_date(exam, criteria, today))
        .cloned()
        .collect()
}

/// Today's exams, used to seed the highlight slideshow.
pub fn todays(records: &[Exam], today: NaiveDate) -> Vec<Exam> {
    let criteria = FilterCriteria {
        date_mode: Some(DateMode::Today),
        ..FilterCriteria::default()
    };
    filter(records, &criteria, today)
}

fn matches_query(exam: &Exam, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    exam.subject.to_lowercase().contains(&needle)
        || exam.paper_code.to_lowercase().contains(&needle)
        || exam
            .description
            .as_deref()
            .unwrap_or("")
            .to_lowercase()
            .contains(&needle)
}

fn matches_date(exam: &Exam, criteria: &FilterCriteria, today: NaiveDate) -> bool {
    let Some(mode) = criteria.date_mode else {
        return true;
    };

    // Custom mode without a chosen date narrows nothing.
    if mode == DateMode::Custom && criteria.custom_date.is_none() {
        return true;
    }

    let Some(day) = exam.exam_day() else {
        tracing::warn!(
            "Skipping exam {} from date filter: unparseable exam_date '{}'",
            exam.id,
            exam.exam_date
        );
        return false;
    };

    match mode {
        DateMode::Today => day == today,
        DateMode::ThisWeek => {
            let monday = today - Duration::days(today.weekday().num_days_from_monday() as i64);
            let sunday = monday + Duration::days(6);
            day >= monday && day <= sunday
        }
        DateMode::NextWeek => {
            // Half-open: [today + 7, today + 14).
            day >= today + Duration::days(7) && day < today + Duration::days(14)
        }
        DateMode::Custom => criteria.custom_date == Some(day),
    }
}
