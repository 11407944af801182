//! # Catalog
//!
//! Product records and the built-in seed catalog.
//!
//! Catalog order is display order. Items are plain values: once built they
//! are only cloned and compared, never edited in place.

use serde::{Deserialize, Serialize};

/// One product record.
///
/// `sku` is a stock-keeping code but is not guaranteed unique: the seed
/// catalog itself lists `NICEHAT` twice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub sku: String,
    pub name: String,
    pub image_url: String,
    /// Breadcrumb, root to leaf (e.g. `["Men", "Accessories", "Hats"]`).
    #[serde(default)]
    pub department: Vec<String>,
    pub price: f64,
}

impl CatalogItem {
    pub fn new(
        sku: impl Into<String>,
        name: impl Into<String>,
        image_url: impl Into<String>,
        department: &[&str],
        price: f64,
    ) -> Self {
        Self {
            sku: sku.into(),
            name: name.into(),
            image_url: image_url.into(),
            department: department.iter().map(|d| d.to_string()).collect(),
            price,
        }
    }

    /// Last path segment of `image_url` (the whole string if it has no `/`).
    pub fn image_file_name(&self) -> &str {
        self.image_url
            .rsplit('/')
            .next()
            .unwrap_or(self.image_url.as_str())
    }
}

/// The catalog shown when no `[[products]]` are configured.
pub fn seed_catalog() -> Vec<CatalogItem> {
    vec![
        CatalogItem::new(
            "NICEHAT",
            "A Nice Black Hat",
            "/resources/images/products/black-hat.jpg",
            &["Men", "Accessories", "Hats"],
            29.99,
        ),
        CatalogItem::new(
            "NEATOJACKET",
            "Blue Jacket",
            "/resources/images/products/blue-jacket.jpg",
            &["Women", "Apparel", "Jackets & Vests"],
            238.99,
        ),
        CatalogItem::new(
            "NICEHAT",
            "A Nice Black Hat",
            "/resources/images/products/black-hat.jpg",
            &["Men", "Accessories", "Hats"],
            29.9,
        ),
    ]
}
