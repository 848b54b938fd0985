use async_trait::async_trait;
use tracing::{Level, debug, error, info, instrument, warn};

use api::{
    meta::Meta,
    product::ProductCatalog,
    section::{Category, Section},
};

use crate::menu::{SectionView, build_section};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LoadStatus {
    Loading,
    Ready,
    Failed,
}

// where the menu data comes from
//
// the browser build goes through gloo-net; anything else (tests, mostly) can hand
// back canned data. futures here are not Send, since everything runs on the one
// browser thread
#[async_trait(?Send)]
pub trait MenuLoader {
    async fn meta(&self) -> anyhow::Result<Meta>;

    async fn sections(&self) -> anyhow::Result<Vec<Section>>;

    async fn categories(&self, section_id: &str) -> anyhow::Result<Vec<Category>>;

    async fn products(&self, section_id: &str) -> anyhow::Result<ProductCatalog>;
}

// where the loaded menu goes
pub trait MenuSink {
    // called once, after both the metadata and the section list are in
    fn index(&mut self, meta: Meta, sections: Vec<Section>);

    // called per section, in section order
    fn section(&mut self, view: SectionView);
}

// a broken category or product file only costs its own section, so both are
// downgraded to "no data" here
pub async fn load_section<L: MenuLoader>(loader: &L, section: &Section) -> SectionView {
    let categories = if section.has_categories {
        loader.categories(&section.id).await.unwrap_or_else(|err| {
            warn!({ section = %section.id }, "no categories loaded: {err}");
            Vec::new()
        })
    } else {
        Vec::new()
    };

    let catalog = loader.products(&section.id).await.unwrap_or_else(|err| {
        warn!({ section = %section.id }, "no products loaded: {err}");
        ProductCatalog::default()
    });

    build_section(section, &categories, &catalog)
}

// the main load sequence
//
// metadata and the section list are all-or-nothing; after that, sections are
// fetched and handed to the sink one at a time so they show up in order as they
// arrive
#[instrument(level = Level::DEBUG, skip(loader, sink))]
pub async fn load_menu<L: MenuLoader, S: MenuSink>(loader: &L, sink: &mut S) -> LoadStatus {
    let index = async { anyhow::Ok((loader.meta().await?, loader.sections().await?)) };
    let (meta, sections) = match index.await {
        Ok(val) => val,
        Err(err) => {
            error!("failed to load menu: {err}");
            return LoadStatus::Failed;
        }
    };

    sink.index(meta, sections.clone());

    for section in sections.iter() {
        debug!({ section = %section.id }, "loading section");
        sink.section(load_section(loader, section).await);
    }

    info!("loaded {} sections", sections.len());
    LoadStatus::Ready
}
