#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Project not found: {0}")]
    ProjectNotFound(String),

    #[error("Failed to read catalog file {path}: {reason}")]
    CatalogRead { path: String, reason: String },

    #[error("Invalid catalog: {0}")]
    InvalidCatalog(#[from] devfund_core::catalog::CatalogError),
}
