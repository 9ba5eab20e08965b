use crate::domain::model::Exam;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    /// Not an error: the caller surfaces an informational notice.
    AlreadyInCart,
}

/// Session shopping cart. Insertion order is preserved and each exam id
/// appears at most once. Never persisted; dropped with the session.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    items: Vec<Exam>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, exam: Exam) -> AddOutcome {
        if self.items.iter().any(|item| item.id == exam.id) {
            return AddOutcome::AlreadyInCart;
        }
        self.items.push(exam);
        AddOutcome::Added
    }

    /// Removes and returns the exam with the given id, if present.
    pub fn remove(&mut self, id: &str) -> Option<Exam> {
        let index = self.items.iter().position(|item| item.id == id)?;
        Some(self.items.remove(index))
    }

    pub fn total(&self) -> f64 {
        self.items.iter().map(|item| item.price).sum()
    }

    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn items(&self) -> &[Exam] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
