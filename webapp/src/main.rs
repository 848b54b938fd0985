#![allow(non_snake_case)]
use dioxus::prelude::*;

use tracing::Level;

mod dom;
mod style;
mod theme;

mod components;
use components::{
    header::{Footer, Header},
    navigation::SectionsNav,
    search_bar::SearchBar,
};

mod menu;
use menu::MenuRoot;

fn main() {
    dioxus_logger::init(Level::DEBUG).expect("failed to init logger");
    launch(App);
}

#[component]
pub fn App() -> Element {
    let ctx = menu::use_menu_context_provider();

    // the theme is fire and forget: the menu neither waits for it nor cares if it fails
    use_hook(|| spawn(theme::apply_theme()));

    use_future(move || menu::load_menu(ctx));

    rsx! {
        style { "{style::MENU_STYLES}" }
        Header {}
        SearchBar {}
        SectionsNav {}
        MenuRoot {}
        Footer {}
    }
}
