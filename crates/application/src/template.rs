//! Shell-style templates
//!
//! A [`ShellTemplate`] owns the raw document and renders it against an
//! [`Environment`], validating the document first.

use shelltpl_domain::{Environment, RenderError, RenderResult, TemplateOptions};
use tracing::debug;

use crate::ports::{DocumentValidator, NoValidation};
use crate::variable_resolver::envsubst;

/// A renderable template.
pub trait Template {
    /// Renders the template against `env`.
    ///
    /// # Errors
    /// Returns an error if the document is invalid or a reference cannot be
    /// substituted.
    fn render(&self, env: &Environment) -> RenderResult<Vec<u8>>;
}

/// Template that expands `$NAME`, `${NAME}` and `$$` references.
///
/// The content is immutable after construction, so one template can be
/// rendered any number of times, from any thread, with different
/// environments.
#[derive(Debug, Clone)]
pub struct ShellTemplate<V = NoValidation> {
    content: Vec<u8>,
    options: TemplateOptions,
    validator: V,
}

impl ShellTemplate<NoValidation> {
    /// Creates a template that skips document validation.
    pub fn new(content: impl Into<Vec<u8>>, options: TemplateOptions) -> Self {
        Self::with_validator(content, options, NoValidation)
    }
}

impl<V: DocumentValidator> ShellTemplate<V> {
    /// Creates a template that checks the document with `validator` before
    /// every render.
    pub fn with_validator(
        content: impl Into<Vec<u8>>,
        options: TemplateOptions,
        validator: V,
    ) -> Self {
        Self {
            content: content.into(),
            options,
            validator,
        }
    }

    /// Returns the raw template content.
    #[must_use]
    pub fn content(&self) -> &[u8] {
        &self.content
    }

    /// Returns the options the template was built with.
    #[must_use]
    pub const fn options(&self) -> TemplateOptions {
        self.options
    }

    /// Returns the validator.
    #[must_use]
    pub const fn validator(&self) -> &V {
        &self.validator
    }

    /// Renders the template and returns the result as a `String`.
    ///
    /// # Errors
    /// Same as [`Template::render`].
    pub fn render_to_string(&self, env: &Environment) -> RenderResult<String> {
        debug!(
            bytes = self.content.len(),
            ignore_unset = self.options.ignore_unset,
            "rendering shell template"
        );
        let text = std::str::from_utf8(&self.content)
            .map_err(|e| RenderError::malformed(e.to_string()))?;
        self.validator.validate(text)?;
        envsubst(text, env, self.options.ignore_unset)
    }
}

impl<V: DocumentValidator> Template for ShellTemplate<V> {
    fn render(&self, env: &Environment) -> RenderResult<Vec<u8>> {
        self.render_to_string(env).map(String::into_bytes)
    }
}
