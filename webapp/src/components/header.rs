use chrono::Datelike;
use dioxus::prelude::*;
use gloo_console::error as console_error;

use api::meta::Social;

use crate::{dom, menu::MenuContext};

#[derive(Clone, PartialEq, Props)]
struct SocialLinkProps {
    social: Social,
}

#[component]
fn SocialLink(props: SocialLinkProps) -> Element {
    let Social { name, url, icon } = props.social;

    rsx! {
        a {
            class: "social-btn",
            href: "{url}",
            target: "_blank",
            rel: "noopener noreferrer",
            aria_label: "{name}",
            img { src: "{icon}", alt: "" }
        }
    }
}

#[component]
pub fn Header() -> Element {
    let ctx = use_context::<MenuContext>();
    let meta = ctx.meta;

    use_effect(move || {
        if let Some(meta) = &*meta.read() {
            if let Err(err) = dom::set_title(&meta.page_title()) {
                console_error!(format!("failed to set page title: {err}"));
            }
        }
    });

    // nothing is branded until the menu index has loaded
    let (logo, socials) = match &*meta.read() {
        Some(meta) => (meta.logo.clone(), meta.social.clone()),
        None => (None, Vec::new()),
    };

    rsx! {
        header { class: "menu-header",
            if let Some(logo) = logo {
                img { class: "logo", src: "{logo}", alt: "" }
            } else {
                img { class: "logo", alt: "" }
            }
            nav { class: "socials",
                // entries may share a url, so the position is the only stable key
                for (i, social) in socials.into_iter().enumerate() {
                    SocialLink { key: "{i}", social }
                }
            }
        }
    }
}

#[component]
pub fn Footer() -> Element {
    let ctx = use_context::<MenuContext>();
    let loaded = ctx.meta.read().is_some();
    let year = chrono::Local::now().year();

    rsx! {
        footer { class: "menu-footer",
            span { id: "year",
                if loaded {
                    "{year}"
                }
            }
        }
    }
}
