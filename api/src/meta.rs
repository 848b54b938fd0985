use serde::{Deserialize, Serialize};
use tracing::{Level, instrument};

use crate::{META_URL, fetch_json};

// branding shown in the page header
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Meta {
    pub title: String,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub social: Vec<Social>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Social {
    pub name: String,
    pub url: String,
    pub icon: String,
}

impl Meta {
    pub fn page_title(&self) -> String {
        format!("{} — Menú", self.title)
    }
}

// the page cannot render without the metadata, so failures go straight to the caller
#[instrument(level = Level::DEBUG)]
pub async fn load_meta() -> anyhow::Result<Meta> {
    fetch_json(META_URL).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_meta_with_socials() {
        let meta: Meta = serde_json::from_str(
            r#"{
                "title": "La Esquina",
                "logo": "assets/logo.png",
                "social": [
                    {"name": "Instagram", "url": "https://instagram.com/x", "icon": "assets/ig.svg"},
                    {"name": "WhatsApp", "url": "https://wa.me/1", "icon": "assets/wa.svg"}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(meta.logo.as_deref(), Some("assets/logo.png"));
        assert_eq!(meta.social.len(), 2);
        assert_eq!(meta.social[1].name, "WhatsApp");
    }

    #[test]
    fn logo_and_social_are_optional() {
        let meta: Meta = serde_json::from_str(r#"{"title": "Bar"}"#).unwrap();

        assert_eq!(meta.logo, None);
        assert!(meta.social.is_empty());
        assert_eq!(meta.page_title(), "Bar — Menú");
    }

    #[test]
    fn socials_sharing_a_url_are_all_kept() {
        let meta: Meta = serde_json::from_str(
            r#"{
                "title": "La Esquina",
                "social": [
                    {"name": "Reservas", "url": "https://wa.me/1", "icon": "assets/cal.svg"},
                    {"name": "WhatsApp", "url": "https://wa.me/1", "icon": "assets/wa.svg"}
                ]
            }"#,
        )
        .unwrap();

        let names: Vec<&str> = meta.social.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Reservas", "WhatsApp"]);
        assert_eq!(meta.social[0].url, meta.social[1].url);
    }
}
