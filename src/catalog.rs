//! Product catalog: the immutable ordered list the showcase cycles through.
//!
//! The catalog is loaded once at startup from a JSON document shaped:
//!
//! ```json
//! { "products": [
//!     { "name": "GT-R Nismo", "price": "$220,000",
//!       "meta": "600hp | AWD", "image_url": "assets/gtr.png" }
//! ] }
//! ```
//!
//! After load it never changes. The sequencer reads products by cycle index
//! modulo length; an empty catalog is a valid (permanently idle) state, not
//! an error.

use crate::error::CatalogError;
use serde::Deserialize;
use std::path::Path;

/// One catalog entry. Immutable once loaded; the sequencer only ever
/// borrows it.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Product {
    /// Display name (drives the per-glyph reveal).
    pub name: String,
    /// Price line, preformatted.
    pub price: String,
    /// Spec/meta line, preformatted.
    pub meta: String,
    /// Resource handle for the product image.
    pub image_url: String,
}

#[derive(Deserialize)]
struct CatalogDoc {
    #[serde(default)]
    products: Vec<Product>,
}

/// The ordered, fixed-after-load product list.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog directly from products (tests, embedded data).
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// An empty catalog. The sequencer treats this as a permanent no-op.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse a catalog from its JSON document.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let doc: CatalogDoc = serde_json::from_str(json)?;
        Ok(Self {
            products: doc.products,
        })
    }

    /// Read and parse the catalog file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Read the catalog file, falling back to an empty catalog on failure.
    ///
    /// A missing or malformed document is logged and swallowed - the
    /// showcase then stays idle indefinitely rather than crashing. There is
    /// no retry.
    pub fn load_or_empty(path: impl AsRef<Path>) -> Self {
        match Self::load(path.as_ref()) {
            Ok(catalog) => {
                tracing::info!(
                    products = catalog.len(),
                    path = %path.as_ref().display(),
                    "catalog loaded"
                );
                catalog
            }
            Err(err) => {
                tracing::warn!(
                    path = %path.as_ref().display(),
                    error = %err,
                    "failed to load catalog, showcase will stay idle"
                );
                Self::empty()
            }
        }
    }

    /// Number of products.
    #[inline]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// True when there is nothing to display.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// All products, in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// The product shown on cycle `index`: `products[index mod len]`.
    ///
    /// Returns `None` only for an empty catalog, so the monotonically
    /// increasing cycle counter wraps deterministically and never panics.
    pub fn cycle_product(&self, index: usize) -> Option<&Product> {
        if self.products.is_empty() {
            None
        } else {
            Some(&self.products[index % self.products.len()])
        }
    }
}
