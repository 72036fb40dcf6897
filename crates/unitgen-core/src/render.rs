//! Render engine: binds a context to a named template and produces source text.

use std::path::{Path, PathBuf};

use serde::ser::Error as _;
use serde::{Serialize, Serializer};
use tracing::debug;

use crate::error::{Error, Result};
use crate::template::{TemplateName, TemplateStore};
use crate::unit::UnitId;

/// Data a template is rendered against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RenderContext {
    /// One unit, for the single-unit template.
    Single { id: UnitId },

    /// Every unit in registry order plus the absolute generation root.
    Aggregate {
        ids: Vec<UnitId>,
        #[serde(serialize_with = "serialize_rust_literal")]
        base_dir: PathBuf,
    },
}

impl RenderContext {
    pub fn single(id: UnitId) -> Self {
        RenderContext::Single { id }
    }

    pub fn aggregate(ids: &[UnitId], base_dir: impl Into<PathBuf>) -> Self {
        RenderContext::Aggregate {
            ids: ids.to_vec(),
            base_dir: base_dir.into(),
        }
    }
}

/// Escape `text` so it can sit between the quotes of a Rust string literal.
pub fn escape_rust_literal(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            c => escaped.push(c),
        }
    }
    escaped
}

/// Paths that are not valid UTF-8 are refused: a lossy conversion would point the
/// generated `#[path]` attribute at a different directory.
fn serialize_rust_literal<S: Serializer>(path: &Path, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    let text = path.to_str().ok_or_else(|| {
        S::Error::custom(format!("base directory {} is not valid UTF-8", path.display()))
    })?;
    serializer.serialize_str(&escape_rust_literal(text))
}

/// Renders registered templates. Pure: never touches the filesystem.
#[derive(Debug)]
pub struct RenderEngine {
    store: TemplateStore,
    syntax_check: bool,
}

impl RenderEngine {
    pub fn new(store: TemplateStore) -> Self {
        Self {
            store,
            syntax_check: true,
        }
    }

    /// Enable or disable parsing rendered output as a Rust file.
    pub fn with_syntax_check(mut self, enabled: bool) -> Self {
        self.syntax_check = enabled;
        self
    }

    pub fn store(&self) -> &TemplateStore {
        &self.store
    }

    /// Render the single-unit template for `id`.
    pub fn render_single(&self, id: UnitId) -> Result<String> {
        self.render(TemplateName::Single.as_str(), &RenderContext::single(id))
    }

    /// Render the aggregate template over `ids` in order, rooted at `base_dir`.
    pub fn render_aggregate(&self, ids: &[UnitId], base_dir: &Path) -> Result<String> {
        self.render(
            TemplateName::Aggregate.as_str(),
            &RenderContext::aggregate(ids, base_dir),
        )
    }

    /// Render any registered template against a context.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] if the template is unknown, references a field the
    /// context lacks, or (with the syntax check on) produces text that is not valid Rust.
    pub fn render(&self, name: &str, context: &RenderContext) -> Result<String> {
        let render_error = |message: String| Error::Render {
            template: name.to_string(),
            message,
        };

        if !self.store.contains(name) {
            return Err(render_error("template is not registered".to_string()));
        }

        let text = self
            .store
            .registry()
            .render(name, context)
            .map_err(|e| render_error(e.to_string()))?;

        if self.syntax_check {
            syn::parse_file(&text)
                .map_err(|e| render_error(format!("generated source is not valid Rust: {}", e)))?;
        }

        debug!(template = name, bytes = text.len(), "rendered template");
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(value: u32) -> UnitId {
        UnitId::new(value).unwrap()
    }

    fn engine() -> RenderEngine {
        RenderEngine::new(TemplateStore::builtin())
    }

    #[test]
    fn test_single_substitutes_id_at_selection_sites_only() {
        let text = engine().render_single(id(7)).unwrap();

        assert!(text.contains("#[path = \"../../day7.rs\"]"));
        assert!(text.contains("Unit::new(7, unit::solve)"));
        assert_eq!(text.matches('7').count(), 2);
        assert!(!text.contains("{{"));
    }

    #[test]
    fn test_aggregate_follows_registry_order() {
        let text = engine()
            .render_aggregate(&[id(3), id(1), id(2)], Path::new("/work"))
            .unwrap();

        let pos = |needle: &str| text.find(needle).unwrap_or_else(|| panic!("missing {}", needle));
        assert!(pos("Unit::new(3,") < pos("Unit::new(1,"));
        assert!(pos("Unit::new(1,") < pos("Unit::new(2,"));
        assert!(pos("pub mod day3;") < pos("pub mod day1;"));
        assert!(pos("pub mod day1;") < pos("pub mod day2;"));
        assert_eq!(text.matches("#[path = \"/work/src\"]").count(), 1);
    }

    #[test]
    fn test_aggregate_output_is_valid_rust() {
        let text = engine()
            .render_aggregate(&[id(1), id(2)], Path::new("/work"))
            .unwrap();
        let file = syn::parse_file(&text).unwrap();
        assert!(file.items.iter().any(|item| matches!(item, syn::Item::Fn(f) if f.sig.ident == "main")));
    }

    #[test]
    fn test_base_dir_is_escaped() {
        let text = engine()
            .render_aggregate(&[id(1)], Path::new(r#"C:\aoc "2024""#))
            .unwrap();
        assert!(text.contains(r#"#[path = "C:\\aoc \"2024\"/src"]"#));
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_base_dir_is_render_error() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let base = Path::new(OsStr::from_bytes(b"/work/\xff"));
        let err = engine().render_aggregate(&[id(1)], base).unwrap_err();
        assert!(matches!(err, Error::Render { ref template, .. } if template == "aggregate"));
    }

    #[test]
    fn test_missing_field_is_render_error() {
        let mut store = TemplateStore::empty();
        store.register("needs_ids", "{{base_dir}}").unwrap();
        let engine = RenderEngine::new(store).with_syntax_check(false);

        let err = engine
            .render("needs_ids", &RenderContext::single(id(1)))
            .unwrap_err();
        assert!(matches!(err, Error::Render { ref template, .. } if template == "needs_ids"));
    }

    #[test]
    fn test_unknown_template_is_render_error() {
        let err = engine()
            .render("nope", &RenderContext::single(id(1)))
            .unwrap_err();
        assert!(matches!(err, Error::Render { .. }));
    }

    #[test]
    fn test_invalid_rust_is_rejected_when_checking() {
        let mut store = TemplateStore::empty();
        store.register("bad", "fn main( {{id}}").unwrap();
        let checked = RenderEngine::new(store);
        assert!(checked.render("bad", &RenderContext::single(id(1))).is_err());
    }

    #[test]
    fn test_render_is_deterministic() {
        let engine = engine();
        let ids = [id(5), id(4)];
        let first = engine.render_aggregate(&ids, Path::new("/w")).unwrap();
        let second = engine.render_aggregate(&ids, Path::new("/w")).unwrap();
        assert_eq!(first, second);
    }
}
