use thiserror::Error;

#[derive(Error, Debug)]
pub enum PagekitError {
    // Template errors
    #[error("TEMPLATE_ERROR: {0}")]
    Template(#[from] crate::template::TemplateError),

    // Renderer errors
    #[error("ELEMENT_NOT_FOUND: no element with id '{0}'")]
    ElementNotFound(String),
}

pub type Result<T> = std::result::Result<T, PagekitError>;
