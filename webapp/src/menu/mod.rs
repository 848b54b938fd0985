use async_trait::async_trait;
use dioxus::prelude::*;
use gloo_console::error as console_error;
use tracing::error;

use api::{
    meta::{Meta, load_meta},
    product::{ProductCatalog, load_products},
    section::{Category, Section, load_categories, load_sections},
};
use common::{
    config::{MenuConfig, read_config},
    load::{MenuLoader, MenuSink},
    menu::SectionView,
};

use crate::dom;

pub mod scroll;
pub mod section;
use section::SectionBlock;

pub use common::load::LoadStatus;

pub const LOAD_FAILED_MESSAGE: &str = "No se pudo cargar el menú. Intenta recargar.";

// shared page state
//
// provided once by the App component and pulled out with use_context() by the
// header, nav, search bar and menu root
#[derive(Clone, Copy)]
pub struct MenuContext {
    pub config: Signal<MenuConfig>,
    pub meta: Signal<Option<Meta>>,
    pub sections: Signal<Vec<Section>>,
    pub views: Signal<Vec<SectionView>>,
    pub search: Signal<String>,
    pub status: Signal<LoadStatus>,
}

pub fn use_menu_context_provider() -> MenuContext {
    let config = use_signal(MenuConfig::default);
    let meta = use_signal(|| None);
    let sections = use_signal(Vec::new);
    let views = use_signal(Vec::new);
    let search = use_signal(String::new);
    let status = use_signal(|| LoadStatus::Loading);

    use_context_provider(|| MenuContext {
        config,
        meta,
        sections,
        views,
        search,
        status,
    })
}

impl MenuSink for MenuContext {
    fn index(&mut self, meta: Meta, sections: Vec<Section>) {
        self.meta.set(Some(meta));
        self.sections.set(sections);
    }

    fn section(&mut self, view: SectionView) {
        self.views.write().push(view);
    }
}

// the static json files next to the page
pub struct HttpLoader;

#[async_trait(?Send)]
impl MenuLoader for HttpLoader {
    async fn meta(&self) -> anyhow::Result<Meta> {
        load_meta().await
    }

    async fn sections(&self) -> anyhow::Result<Vec<Section>> {
        load_sections().await
    }

    async fn categories(&self, section_id: &str) -> anyhow::Result<Vec<Category>> {
        load_categories(section_id).await
    }

    async fn products(&self, section_id: &str) -> anyhow::Result<ProductCatalog> {
        load_products(section_id).await
    }
}

pub async fn load_menu(mut ctx: MenuContext) {
    ctx.config.set(read_config().await);

    let status = common::load::load_menu(&HttpLoader, &mut ctx).await;
    ctx.status.set(status);
}

#[component]
pub fn MenuRoot() -> Element {
    let ctx = use_context::<MenuContext>();
    let status = ctx.status;
    let search = ctx.search;
    let config = ctx.config;

    // filtering works on the cards already in the page, so it reruns whenever the
    // search term changes
    use_effect(move || {
        let term = search();

        if let Err(err) = dom::filter_menu(&term) {
            console_error!(format!("failed to filter menu: {err}"));
        }
    });

    // scroll tracking starts once every section is on the page
    use_effect(move || {
        if status() != LoadStatus::Ready {
            return;
        }

        if let Err(err) = scroll::install(&config.peek().scroll) {
            error!("failed to start scroll tracking: {err}");
        }
    });

    let views = ctx.views.read().clone();

    rsx! {
        main { id: dom::MENU_ROOT_ID,
            if status() == LoadStatus::Failed {
                p { "{LOAD_FAILED_MESSAGE}" }
            } else {
                for view in views {
                    SectionBlock { key: "{view.id}", view: view.clone() }
                }
            }
        }
    }
}
