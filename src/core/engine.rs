use crate::core::store::Storefront;
use crate::domain::ports::ExamSource;
use crate::utils::error::Result;

/// Ties an exam source to a storefront session: one fetch at startup, then
/// everything downstream works off the in-memory catalogue.
pub struct StorefrontEngine<S: ExamSource> {
    source: S,
}

impl<S: ExamSource> StorefrontEngine<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Fetches the catalogue and opens a storefront over it. A fetch failure
    /// propagates so the caller can fall back to an empty storefront and
    /// show the notice.
    pub async fn open(&self) -> Result<Storefront> {
        tracing::info!("Loading exam catalogue...");
        let exams = self.source.list_exams().await?;
        tracing::info!("Loaded {} exam records", exams.len());
        Ok(Storefront::new(exams))
    }
}
