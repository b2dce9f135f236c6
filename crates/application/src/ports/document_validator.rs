//! Document validation port

use shelltpl_domain::RenderResult;

/// Port for checking a template document before expansion.
///
/// Implementations report the first problem as
/// [`RenderError::MalformedDocument`](shelltpl_domain::RenderError::MalformedDocument).
pub trait DocumentValidator: Send + Sync {
    /// Validates the raw document text.
    ///
    /// # Errors
    /// Returns an error if the document is rejected.
    fn validate(&self, document: &str) -> RenderResult<()>;
}

/// Validator that accepts every document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoValidation;

impl DocumentValidator for NoValidation {
    fn validate(&self, _document: &str) -> RenderResult<()> {
        Ok(())
    }
}

impl<V: DocumentValidator + ?Sized> DocumentValidator for &V {
    fn validate(&self, document: &str) -> RenderResult<()> {
        (**self).validate(document)
    }
}
