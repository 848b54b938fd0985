use dioxus::prelude::*;

use common::menu::{SectionBody, SectionView};

#[derive(Clone, PartialEq, Props)]
pub struct SectionBlockProps {
    view: SectionView,
}

// one menu section
//
// grids arrive as ready-made markup and are inserted in a single shot; the search
// filter later toggles the cards inside them directly
#[component]
pub fn SectionBlock(props: SectionBlockProps) -> Element {
    let anchor = props.view.anchor();
    let SectionView { name, body, .. } = props.view;

    rsx! {
        section { class: "section-block", id: "{anchor}",
            div { class: "section-header",
                h2 { "{name}" }
            }
            match body {
                SectionBody::Flat { grid } => rsx! {
                    div { class: "products-grid", dangerous_inner_html: "{grid}" }
                },
                SectionBody::Categorized(categories) => rsx! {
                    for category in categories {
                        div {
                            key: "{category.id}",
                            class: "category-block",
                            id: "{anchor}-{category.id}",
                            h3 { class: "category-title", "{category.name}" }
                            div {
                                class: "products-grid",
                                dangerous_inner_html: "{category.grid}",
                            }
                        }
                    }
                },
            }
        }
    }
}
