use dioxus::prelude::*;
use gloo_console::error as console_error;

use api::section::Section;
use common::menu::section_anchor;

use crate::{dom, menu::MenuContext};

#[derive(Clone, PartialEq, Props)]
struct NavLinkProps {
    section: Section,
}

// the active class on these links is owned by the scroll tracker, not by the vdom
#[component]
fn NavLink(props: NavLinkProps) -> Element {
    let Section { id, name, .. } = props.section;
    let anchor = section_anchor(&id);
    let target = id.clone();

    rsx! {
        a {
            href: "#{anchor}",
            "data-id": "{id}",
            onclick: move |event: MouseEvent| {
                event.prevent_default();
                if let Err(err) = dom::scroll_to_section(&target) {
                    console_error!(format!("failed to scroll to section: {err}"));
                }
            },
            "{name}"
        }
    }
}

#[component]
pub fn SectionsNav() -> Element {
    let ctx = use_context::<MenuContext>();
    let sections = ctx.sections.read().clone();

    rsx! {
        nav { id: dom::SECTIONS_NAV_ID, class: "sections-nav",
            for section in sections {
                NavLink { key: "{section.id}", section: section.clone() }
            }
        }
    }
}
