use dioxus::prelude::*;
use tracing::debug;

use common::filter::normalize_term;

use crate::menu::{LoadStatus, MenuContext};

// the search box only comes alive once every section is on the page
#[component]
pub fn SearchBar() -> Element {
    let ctx = use_context::<MenuContext>();
    let mut search = ctx.search;
    let status = ctx.status;

    rsx! {
        div { class: "search-bar",
            input {
                id: "search",
                r#type: "search",
                placeholder: "Buscar en el menú",
                autocomplete: "off",
                disabled: status() != LoadStatus::Ready,
                oninput: move |event: FormEvent| {
                    let term = normalize_term(&event.value());
                    debug!("filtering menu for {term:?}");
                    search.set(term);
                },
            }
        }
    }
}
