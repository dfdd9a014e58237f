//! Error types for vitrine.
//!
//! The animation core itself is total - fog and timeline math cannot fail.
//! Errors only arise at the edges: loading the catalog document and
//! misconfiguring the showcase builder.

use std::fmt;

/// Errors that can occur while loading the product catalog.
#[derive(Debug)]
pub enum CatalogError {
    /// Failed to read the catalog file from disk.
    Io(std::io::Error),
    /// The document was not valid catalog JSON.
    Parse(serde_json::Error),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Io(e) => write!(f, "Failed to read catalog file: {}", e),
            CatalogError::Parse(e) => write!(f, "Failed to parse catalog JSON: {}", e),
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogError::Io(e) => Some(e),
            CatalogError::Parse(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for CatalogError {
    fn from(e: std::io::Error) -> Self {
        CatalogError::Io(e)
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        CatalogError::Parse(e)
    }
}

/// Errors that can occur when assembling or running a showcase.
#[derive(Debug)]
pub enum ShowcaseError {
    /// No presenter provided.
    NoPresenter,
    /// Catalog loading failed (strict mode; the lenient path logs and
    /// falls back to an empty catalog instead).
    Catalog(CatalogError),
}

impl fmt::Display for ShowcaseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShowcaseError::NoPresenter => {
                write!(f, "No presenter provided. Use .with_presenter() to set one.")
            }
            ShowcaseError::Catalog(e) => write!(f, "Catalog error: {}", e),
        }
    }
}

impl std::error::Error for ShowcaseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ShowcaseError::Catalog(e) => Some(e),
            ShowcaseError::NoPresenter => None,
        }
    }
}

impl From<CatalogError> for ShowcaseError {
    fn from(e: CatalogError) -> Self {
        ShowcaseError::Catalog(e)
    }
}
