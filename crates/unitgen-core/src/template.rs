//! Template store.
//!
//! Templates use Handlebars syntax:
//! - `{{field}}` substitutes a context field
//! - `{{#each ids as |id|}} ... {{/each}}` repeats its body once per element, in order
//!
//! Generated Rust only ever uses single braces, so template text never needs escaping.
//! Built-in templates are embedded from `templates/` at compile time.

use std::fmt;

use handlebars::Handlebars;
use tracing::debug;

use crate::error::{Error, Result};

/// Built-in single-unit template source.
pub const SINGLE_TEMPLATE: &str = include_str!("../templates/single.rs.hbs");

/// Built-in aggregate template source.
pub const AGGREGATE_TEMPLATE: &str = include_str!("../templates/aggregate.rs.hbs");

/// Names of the two built-in templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateName {
    Single,
    Aggregate,
}

impl TemplateName {
    pub const ALL: [TemplateName; 2] = [TemplateName::Single, TemplateName::Aggregate];

    pub fn as_str(self) -> &'static str {
        match self {
            TemplateName::Single => "single",
            TemplateName::Aggregate => "aggregate",
        }
    }

    /// Built-in template text for this name.
    pub fn source(self) -> &'static str {
        match self {
            TemplateName::Single => SINGLE_TEMPLATE,
            TemplateName::Aggregate => AGGREGATE_TEMPLATE,
        }
    }
}

impl fmt::Display for TemplateName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Compiled, named templates ready for rendering.
pub struct TemplateStore {
    registry: Handlebars<'static>,
    names: Vec<String>,
}

impl TemplateStore {
    /// Create a store holding the two built-in templates.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TemplateSyntax`] if a built-in template is malformed.
    pub fn new() -> Result<Self> {
        let mut store = Self::empty();
        for name in TemplateName::ALL {
            store.register(name.as_str(), name.source())?;
        }
        Ok(store)
    }

    /// Create a store with the built-in templates.
    ///
    /// # Panics
    ///
    /// Panics if a built-in template fails to compile. That is a defect in the
    /// templates shipped with this crate, never a runtime condition.
    pub fn builtin() -> Self {
        match Self::new() {
            Ok(store) => store,
            Err(err) => panic!("built-in template is invalid: {}", err),
        }
    }

    /// Create a store with no templates registered.
    ///
    /// Rendering is strict (a missing field is an error) and never HTML-escapes.
    pub fn empty() -> Self {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(true);
        registry.register_escape_fn(handlebars::no_escape);
        Self {
            registry,
            names: Vec::new(),
        }
    }

    /// Compile and register a template, replacing any previous one with the same name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TemplateSyntax`] on unmatched placeholder or block delimiters.
    pub fn register(&mut self, name: &str, text: &str) -> Result<()> {
        self.registry
            .register_template_string(name, text)
            .map_err(|e| Error::TemplateSyntax {
                name: name.to_string(),
                message: e.to_string(),
            })?;

        if !self.names.iter().any(|n| n == name) {
            self.names.push(name.to_string());
        }
        debug!(template = name, "registered template");
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.registry.has_template(name)
    }

    /// Registered template names, in registration order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub(crate) fn registry(&self) -> &Handlebars<'static> {
        &self.registry
    }
}

impl fmt::Debug for TemplateStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TemplateStore")
            .field("names", &self.names)
            .finish_non_exhaustive()
    }
}
