//! YAML document validator adapter

use shelltpl_application::ports::DocumentValidator;
use shelltpl_domain::{RenderError, RenderResult};
use tracing::debug;

use crate::serialization::{chunk_documents, decode_document, is_blank_document};

/// Validates templates as YAML document streams using `serde_yaml`.
///
/// Every non-blank document must decode as a mapping. The first decoder
/// error is reported unchanged as
/// [`RenderError::MalformedDocument`].
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlChunkValidator;

impl YamlChunkValidator {
    /// Creates a new YAML validator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl DocumentValidator for YamlChunkValidator {
    fn validate(&self, document: &str) -> RenderResult<()> {
        for (index, chunk) in chunk_documents(document).into_iter().enumerate() {
            if is_blank_document(chunk) {
                continue;
            }
            debug!(index, bytes = chunk.len(), "validating yaml document");
            decode_document(chunk).map_err(|e| RenderError::malformed(e.to_string()))?;
        }
        Ok(())
    }
}
