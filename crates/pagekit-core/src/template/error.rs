//! Template error types

use thiserror::Error;

/// Template compilation and rendering errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// Malformed template syntax (compile time)
    #[error("Malformed syntax at line {line}: {message}")]
    MalformedSyntax {
        /// Error message
        message: String,
        /// Line number where the error occurred
        line: usize,
    },

    /// Key not found in the data object (render time)
    #[error("Undefined key '{key}' at line {line}")]
    UndefinedKey {
        /// The key that was not found
        key: String,
        /// Line number of the placeholder
        line: usize,
    },

    /// Array used where a scalar value is expected
    #[error("Array '{key}' used outside of {{{{each}}}} context at line {line}. Use {{{{each {key} |item|}}}} ... {{{{/each}}}}")]
    ArrayInScalarPosition {
        /// The key that resolved to an array
        key: String,
        /// Line number of the placeholder
        line: usize,
    },

    /// Object used where a scalar value is expected
    #[error("Object '{key}' cannot be used directly in a placeholder at line {line}. Use nested keys like {key}.field")]
    ObjectInScalarPosition {
        /// The key that resolved to an object
        key: String,
        /// Line number of the placeholder
        line: usize,
    },

    /// `{{each}}` over a value that is not an array
    #[error("Key '{key}' is not an array at line {line}")]
    NotAnArray {
        /// The key the loop iterates over
        key: String,
        /// Line number of the {{each}} tag
        line: usize,
    },
}
