use serde::{Deserialize, Serialize};
use tracing::{Level, instrument};

use crate::{DATA_ROOT, SECTIONS_URL, fetch_json};

// structs and types

// a top-level menu division
//
// the id doubles as the dom anchor (section-{id}) and as the lookup key for the
// per-section category and product files
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Section {
    pub id: String,
    pub name: String,
    #[serde(rename = "hasCategories", default)]
    pub has_categories: bool,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Category {
    pub id: String,
    pub name: String,
}

pub fn categories_url(section_id: &str) -> String {
    format!("{DATA_ROOT}/categories/{section_id}Categories.json")
}

// loaders

#[instrument(level = Level::DEBUG)]
pub async fn load_sections() -> anyhow::Result<Vec<Section>> {
    fetch_json(SECTIONS_URL).await
}

// failures are handed back as-is; the menu load sequence decides that a missing
// category file just means no category blocks
#[instrument(level = Level::DEBUG)]
pub async fn load_categories(section_id: &str) -> anyhow::Result<Vec<Category>> {
    fetch_json(&categories_url(section_id)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sections_keep_source_order() {
        let sections: Vec<Section> = serde_json::from_str(
            r#"[
                {"id": "drinks", "name": "Bebidas", "hasCategories": true},
                {"id": "starters", "name": "Entradas", "hasCategories": false},
                {"id": "desserts", "name": "Postres"}
            ]"#,
        )
        .unwrap();

        let ids: Vec<&str> = sections.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["drinks", "starters", "desserts"]);
        assert!(sections[0].has_categories);
        assert!(!sections[2].has_categories);
    }

    #[test]
    fn category_file_path() {
        assert_eq!(
            categories_url("drinks"),
            "data/categories/drinksCategories.json"
        );
    }
}
