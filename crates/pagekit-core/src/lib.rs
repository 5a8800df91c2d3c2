// Core modules
pub mod debounce;
pub mod error;
pub mod escape;
pub mod template;

// Re-export commonly used types
pub use debounce::{Debouncer, Fire};
pub use error::{PagekitError, Result};
pub use escape::escape_html;
pub use template::{ElementSource, Renderer, Template, TemplateError};
