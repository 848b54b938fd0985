use std::fmt;

use serde::{
    Deserialize, Deserializer, Serialize,
    de::{MapAccess, Visitor},
};
use tracing::{Level, instrument};

use crate::{THEMES_DIR, THEMES_URL, fetch_json};

pub const DEFAULT_THEME: &str = "default";

// a visual skin for the page
//
// festive themes carry an inclusive [start, end] range of MM-DD dates, which may wrap
// across the new year; the default theme usually has none
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Theme {
    #[serde(rename = "dateRange", default)]
    pub date_range: Option<Vec<String>>,
    pub class: String,
    #[serde(rename = "cssFile", default)]
    pub css_file: Option<String>,
}

// the theme table, in the order the keys appear in themes.json
//
// when ranges overlap, the first declared theme wins, so the document order has to
// survive deserialization instead of going through a HashMap
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ThemeTable(Vec<(String, Theme)>);

impl ThemeTable {
    pub fn new(entries: Vec<(String, Theme)>) -> Self {
        ThemeTable(entries)
    }

    pub fn get(&self, key: &str) -> Option<&Theme> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, theme)| theme)
    }

    pub fn default_theme(&self) -> Option<&Theme> {
        self.get(DEFAULT_THEME)
    }

    // every entry except the default, in declared order
    pub fn festive(&self) -> impl Iterator<Item = (&str, &Theme)> {
        self.0
            .iter()
            .filter(|(key, _)| key != DEFAULT_THEME)
            .map(|(key, theme)| (key.as_str(), theme))
    }
}

struct ThemeTableVisitor;

impl<'de> Visitor<'de> for ThemeTableVisitor {
    type Value = ThemeTable;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of theme names to themes")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));

        while let Some((key, theme)) = access.next_entry::<String, Theme>()? {
            entries.push((key, theme));
        }

        Ok(ThemeTable(entries))
    }
}

impl<'de> Deserialize<'de> for ThemeTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(ThemeTableVisitor)
    }
}

pub fn stylesheet_url(css_file: &str) -> String {
    format!("{THEMES_DIR}/{css_file}")
}

#[instrument(level = Level::DEBUG)]
pub async fn load_themes() -> anyhow::Result<ThemeTable> {
    fetch_json(THEMES_URL).await
}
