use crate::domain::model::{DateMode, Exam, FilterCriteria};
use crate::domain::services::cart::{AddOutcome, Cart};
use crate::domain::services::filter;
use chrono::NaiveDate;

/// Session state for one storefront view: the fetched catalogue, the active
/// filter selections, and the cart. All mutation goes through the setters
/// here; the filtering itself stays in the pure domain services, so the
/// filtered list is derived on demand rather than stored.
///
/// `today` is always an explicit parameter. The facade never reads the
/// system clock, which keeps every view deterministic under test.
#[derive(Debug, Clone)]
pub struct Storefront {
    exams: Vec<Exam>,
    query: String,
    date_mode: Option<DateMode>,
    selected_date: Option<NaiveDate>,
    cart: Cart,
}

impl Storefront {
    /// Opens a storefront over an already-fetched catalogue. The default
    /// view shows today's exams, matching the landing page.
    pub fn new(exams: Vec<Exam>) -> Self {
        Self {
            exams,
            query: String::new(),
            date_mode: Some(DateMode::Today),
            selected_date: None,
            cart: Cart::new(),
        }
    }

    pub fn exams(&self) -> &[Exam] {
        &self.exams
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// `None` disables date narrowing entirely.
    pub fn set_filter_mode(&mut self, mode: Option<DateMode>) {
        self.date_mode = mode;
    }

    pub fn set_selected_date(&mut self, date: Option<NaiveDate>) {
        self.selected_date = date;
    }

    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            query: self.query.clone(),
            date_mode: self.date_mode,
            custom_date: self.selected_date,
        }
    }

    pub fn filtered_exams(&self, today: NaiveDate) -> Vec<Exam> {
        filter::filter(&self.exams, &self.criteria(), today)
    }

    /// Seed list for the rotating highlight view.
    pub fn todays_exams(&self, today: NaiveDate) -> Vec<Exam> {
        filter::todays(&self.exams, today)
    }

    pub fn add_to_cart(&mut self, exam: Exam) -> AddOutcome {
        self.cart.add(exam)
    }

    /// Convenience for callers that hold an id rather than the record.
    /// Returns None when the id is not in the catalogue.
    pub fn add_to_cart_by_id(&mut self, id: &str) -> Option<AddOutcome> {
        let exam = self.exams.iter().find(|e| e.id == id)?.clone();
        Some(self.cart.add(exam))
    }

    pub fn remove_from_cart(&mut self, id: &str) -> Option<Exam> {
        self.cart.remove(id)
    }

    pub fn cart_items(&self) -> &[Exam] {
        self.cart.items()
    }

    pub fn cart_total(&self) -> f64 {
        self.cart.total()
    }

    pub fn cart_count(&self) -> usize {
        self.cart.count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exam(id: &str, date: &str, price: f64) -> Exam {
        Exam {
            id: id.to_string(),
            subject: format!("Subject {}", id),
            paper_code: format!("{}/1", id),
            exam_date: date.to_string(),
            exam_time: "8:00 AM".to_string(),
            session: 1,
            duration: "2h".to_string(),
            description: None,
            price,
            image_url: None,
            category: None,
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 11, 5).unwrap()
    }

    // The walkthrough scenario: A today at 500, B tomorrow at 300.
    fn storefront() -> Storefront {
        Storefront::new(vec![
            exam("A", "2025-11-05", 500.0),
            exam("B", "2025-11-06", 300.0),
        ])
    }

    #[test]
    fn test_defaults_to_todays_view() {
        let store = storefront();
        let filtered = store.filtered_exams(today());
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "A");
    }

    #[test]
    fn test_cart_walkthrough() {
        let mut store = storefront();

        assert_eq!(store.add_to_cart_by_id("A"), Some(AddOutcome::Added));
        assert_eq!(store.cart_count(), 1);

        assert_eq!(store.add_to_cart_by_id("A"), Some(AddOutcome::AlreadyInCart));
        assert_eq!(store.cart_count(), 1);
        assert_eq!(store.cart_total(), 500.0);

        assert!(store.remove_from_cart("A").is_some());
        assert!(store.cart_items().is_empty());
        assert_eq!(store.cart_total(), 0.0);
    }

    #[test]
    fn test_add_unknown_id() {
        let mut store = storefront();
        assert_eq!(store.add_to_cart_by_id("missing"), None);
        assert_eq!(store.cart_count(), 0);
    }

    #[test]
    fn test_search_and_mode_setters_drive_derived_view() {
        let mut store = storefront();

        store.set_filter_mode(None);
        assert_eq!(store.filtered_exams(today()).len(), 2);

        store.set_search_query("subject b");
        let filtered = store.filtered_exams(today());
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "B");

        store.set_search_query("");
        store.set_filter_mode(Some(DateMode::Custom));
        store.set_selected_date(NaiveDate::from_ymd_opt(2025, 11, 6));
        let filtered = store.filtered_exams(today());
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "B");
    }

    #[test]
    fn test_todays_exams_ignores_other_filters() {
        let mut store = storefront();
        store.set_search_query("no such exam");
        store.set_filter_mode(Some(DateMode::NextWeek));

        let highlights = store.todays_exams(today());
        assert_eq!(highlights.len(), 1);
        assert_eq!(highlights[0].id, "A");
    }

    #[test]
    fn test_empty_catalogue() {
        let store = Storefront::new(Vec::new());
        assert!(store.filtered_exams(today()).is_empty());
        assert!(store.todays_exams(today()).is_empty());
    }
}
