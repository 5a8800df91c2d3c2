//! Cached rendering against an element store
//!
//! [`Renderer`] is the page-level entry point: it accepts either literal
//! template source or the identifier of an element whose text content
//! is the source. Identifier lookups go through the [`ElementSource`]
//! collaborator (the document, treated as an opaque id-to-text lookup)
//! and the compiled result is cached, so repeated renders skip both the
//! lookup and recompilation. The cache is plain state owned by the
//! renderer; two renderers never share entries.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use serde_json::Value;

use crate::error::{PagekitError, Result};
use crate::template::engine::Template;

/// Source of template text keyed by element identifier.
pub trait ElementSource {
    /// Text content of the element with the given id, if it exists.
    fn text_content(&self, id: &str) -> Option<String>;
}

impl ElementSource for HashMap<String, String> {
    fn text_content(&self, id: &str) -> Option<String> {
        self.get(id).cloned()
    }
}

impl<S: ElementSource + ?Sized> ElementSource for &S {
    fn text_content(&self, id: &str) -> Option<String> {
        (**self).text_content(id)
    }
}

/// Renders templates by literal source or element identifier, caching
/// compiled templates per identifier.
pub struct Renderer<S> {
    source: S,
    cache: HashMap<String, Template>,
}

impl<S: ElementSource> Renderer<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            cache: HashMap::new(),
        }
    }

    /// Render a template given either literal source or an element id.
    ///
    /// An argument containing a `{{` marker is compiled directly and
    /// not cached (it is already literal source). Anything else is
    /// treated as an element identifier: the element's text content is
    /// compiled once and cached under that id, and later calls with the
    /// same id touch neither the element store nor the compiler.
    pub fn render(&mut self, source_or_id: &str, data: &Value) -> Result<String> {
        if is_literal_source(source_or_id) {
            let template = Template::compile(source_or_id)?;
            return Ok(template.render(data)?);
        }
        let template = self.template(source_or_id)?;
        Ok(template.render(data)?)
    }

    /// Compile (or fetch from cache) the template for an element id.
    ///
    /// Cache entries are immutable once populated.
    pub fn template(&mut self, id: &str) -> Result<&Template> {
        match self.cache.entry(id.to_string()) {
            Entry::Occupied(slot) => Ok(slot.into_mut()),
            Entry::Vacant(slot) => {
                let source = self
                    .source
                    .text_content(id)
                    .ok_or_else(|| PagekitError::ElementNotFound(id.to_string()))?;
                let template = Template::compile(&source)?;
                Ok(slot.insert(template))
            }
        }
    }

    /// Number of cached templates.
    pub fn cached_len(&self) -> usize {
        self.cache.len()
    }
}

fn is_literal_source(source_or_id: &str) -> bool {
    source_or_id.contains("{{")
}
