//! shelltpl - Shell-style variable expansion for YAML documents
//!
//! Expands `$NAME`, `${NAME}` and `$$` references in a YAML document after
//! checking that every document in the stream is valid YAML.
//!
//! # Usage
//!
//! ```
//! use shelltpl::{Environment, Template, TemplateOptions, Value, new_template};
//!
//! let template = new_template("replicas: $REPLICAS\n", TemplateOptions::default());
//!
//! let mut env = Environment::new();
//! env.insert("REPLICAS".to_string(), Value::from(3_i64));
//!
//! assert_eq!(template.render(&env).unwrap(), b"replicas: 3\n");
//! ```

pub use shelltpl_application::{
    DocumentValidator, NoValidation, ShellTemplate, Template, envsubst, expand_with_positions,
    parse_name,
    variable_resolver::{extract_variable_names, find_unresolved},
};
pub use shelltpl_domain::{
    Environment, Number, Position, RenderError, RenderResult, TemplateOptions, Value,
};
pub use shelltpl_infrastructure::YamlChunkValidator;

/// A shell template that validates its content as a YAML stream.
pub type YamlShellTemplate = ShellTemplate<YamlChunkValidator>;

/// Creates a template whose content is checked as YAML before every render.
pub fn new_template(content: impl Into<Vec<u8>>, options: TemplateOptions) -> YamlShellTemplate {
    ShellTemplate::with_validator(content, options, YamlChunkValidator::new())
}

/// Renders `content` once against `env`.
///
/// # Errors
/// Returns an error if the content is not valid YAML or a reference cannot be
/// substituted.
pub fn render(
    content: impl Into<Vec<u8>>,
    env: &Environment,
    options: TemplateOptions,
) -> RenderResult<Vec<u8>> {
    new_template(content, options).render(env)
}
