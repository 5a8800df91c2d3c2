//! Template module - compiled string templates for HTML fragments
//!
//! A minimal substitution engine for generating markup from structured
//! data. Templates compile once into an instruction list and render any
//! number of times against `serde_json` data.
//!
//! ## Philosophy
//!
//! - **No code generation**: templates compile to a small instruction
//!   list walked by a safe evaluator; expressions are dotted property
//!   lookups, never executable code
//! - **Raw interpolation**: values are emitted verbatim; callers escape
//!   untrusted text with [`crate::escape_html`] themselves
//! - **Explicit caching**: compiled templates are cached per
//!   [`Renderer`], keyed by element identifier - no module-level state
//! - **JSON data mapping**: anything `serde_json::Value` can represent
//!   can be rendered
//!
//! ## Syntax
//!
//! - Basic placeholders: `{{key}}` or `{{ key }}` (spaces optional)
//! - Nested access: `{{nested.key}}` or `{{ nested.key }}`
//! - List iteration: `{{each items |item|}} ... {{/each}}`
//! - Conditionals: `{{if key}} ... {{/if}}`
//! - Escape sequences: `\{{literal}}` or `\{{ literal }}`

pub mod engine;
pub mod error;
pub mod renderer;

pub use engine::{render, Template};
pub use error::TemplateError;
pub use renderer::{ElementSource, Renderer};
