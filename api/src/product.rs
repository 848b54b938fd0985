use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::{Level, instrument};

use crate::{DATA_ROOT, PRODUCT_ASSETS_DIR, fetch_json};

// bucket used by sections that are not split into categories
pub const DEFAULT_BUCKET: &str = "default";

// products listed under this category get a distinct card style, but the
// category is otherwise an ordinary one
pub const EXCLUSIVE_CATEGORY: &str = "exclusive";

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Product {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    // file name relative to the section's asset folder
    pub image: String,
}

// products of one section, keyed by category id (or DEFAULT_BUCKET)
//
// keys that do not match any category are kept but never looked up, which is what
// makes stray products disappear from the page
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ProductCatalog(HashMap<String, Vec<Product>>);

impl ProductCatalog {
    pub fn bucket(&self, key: &str) -> &[Product] {
        self.0.get(key).map(Vec::as_slice).unwrap_or_default()
    }
}

impl From<HashMap<String, Vec<Product>>> for ProductCatalog {
    fn from(map: HashMap<String, Vec<Product>>) -> Self {
        ProductCatalog(map)
    }
}

pub fn products_url(section_id: &str) -> String {
    format!("{DATA_ROOT}/products/{section_id}Products.json")
}

pub fn image_url(section_id: &str, image: &str) -> String {
    format!("{PRODUCT_ASSETS_DIR}/{section_id}/{image}")
}

#[instrument(level = Level::DEBUG)]
pub async fn load_products(section_id: &str) -> anyhow::Result<ProductCatalog> {
    fetch_json(&products_url(section_id)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_buckets() {
        let catalog: ProductCatalog = serde_json::from_str(
            r#"{
                "default": [
                    {"name": "Empanada", "description": "Carne cortada a cuchillo", "price": 1800, "image": "empanada.jpg"},
                    {"name": "Provoleta", "price": 5200.5, "image": "provoleta.jpg"}
                ],
                "exclusive": []
            }"#,
        )
        .unwrap();

        let defaults = catalog.bucket(DEFAULT_BUCKET);
        assert_eq!(defaults.len(), 2);
        assert_eq!(defaults[0].name, "Empanada");
        assert_eq!(defaults[1].description, "");
        assert!(catalog.bucket(EXCLUSIVE_CATEGORY).is_empty());
        assert!(catalog.bucket("missing").is_empty());
    }

    #[test]
    fn asset_paths() {
        assert_eq!(products_url("grill"), "data/products/grillProducts.json");
        assert_eq!(
            image_url("grill", "asado.webp"),
            "assets/products/grill/asado.webp"
        );
    }
}
