use gloo_console::error as console_error;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
    ScrollToOptions, Window,
};

use common::{
    filter::{MenuTree, filter_products},
    menu::section_anchor,
    scroll::NavGeometry,
};

// ids and classes shared between the rendered markup and the code poking at it
pub const MENU_ROOT_ID: &str = "menu-root";
pub const SECTIONS_NAV_ID: &str = "sections-nav";
pub const SECTION_BLOCK: &str = ".section-block";
pub const CATEGORY_BLOCK: &str = ".category-block";
pub const PRODUCT_CARD: &str = ".product-card";
pub const ACTIVE_CLASS: &str = "active";

pub fn js_error(err: JsValue) -> anyhow::Error {
    anyhow::Error::msg(format!("{err:?}"))
}

pub fn window() -> anyhow::Result<Window> {
    web_sys::window().ok_or_else(|| anyhow::Error::msg("no global window"))
}

pub fn document() -> anyhow::Result<Document> {
    window()?
        .document()
        .ok_or_else(|| anyhow::Error::msg("window has no document"))
}

pub fn element_by_id(id: &str) -> anyhow::Result<Element> {
    document()?
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::Error::msg(format!("no element with id {id}")))
}

pub fn select_all(root: &Element, selector: &str) -> anyhow::Result<Vec<Element>> {
    let nodes = root.query_selector_all(selector).map_err(js_error)?;

    Ok((0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

fn is_displayed(element: &Element) -> bool {
    match element.dyn_ref::<HtmlElement>() {
        Some(html) => html
            .style()
            .get_property_value("display")
            .map(|display| display != "none")
            .unwrap_or(true),
        None => true,
    }
}

fn set_displayed(element: &Element, visible: bool) {
    let Some(html) = element.dyn_ref::<HtmlElement>() else {
        return;
    };

    let style = html.style();
    let result = if visible {
        style.remove_property("display").map(|_| ())
    } else {
        style.set_property("display", "none")
    };

    if let Err(err) = result {
        console_error!(format!("failed to update display: {err:?}"));
    }
}

// the rendered menu, as seen by the search filter
pub struct DomMenu {
    root: Element,
}

impl DomMenu {
    pub fn new() -> anyhow::Result<Self> {
        Ok(DomMenu {
            root: element_by_id(MENU_ROOT_ID)?,
        })
    }

    fn select(&self, root: &Element, selector: &str) -> Vec<Element> {
        select_all(root, selector).unwrap_or_else(|err| {
            console_error!(format!("failed to query {selector}: {err}"));
            Vec::new()
        })
    }
}

impl MenuTree for DomMenu {
    type Card = Element;
    type Block = Element;

    fn cards(&self) -> Vec<Element> {
        self.select(&self.root, PRODUCT_CARD)
    }

    fn card_text(&self, card: &Element) -> (String, String) {
        (
            card.get_attribute("data-name").unwrap_or_default(),
            card.get_attribute("data-desc").unwrap_or_default(),
        )
    }

    fn set_card_visible(&self, card: &Element, visible: bool) {
        set_displayed(card, visible);
    }

    fn categories(&self) -> Vec<Element> {
        self.select(&self.root, CATEGORY_BLOCK)
    }

    fn sections(&self) -> Vec<Element> {
        self.select(&self.root, SECTION_BLOCK)
    }

    fn has_visible_card(&self, block: &Element) -> bool {
        self.select(block, PRODUCT_CARD).iter().any(is_displayed)
    }

    fn set_block_visible(&self, block: &Element, visible: bool) {
        set_displayed(block, visible);
    }
}

pub fn filter_menu(term: &str) -> anyhow::Result<()> {
    filter_products(&DomMenu::new()?, term);

    Ok(())
}

// viewport tops of all rendered sections, in document order
pub fn section_tops() -> anyhow::Result<Vec<(String, f64)>> {
    let root = element_by_id(MENU_ROOT_ID)?;

    Ok(select_all(&root, SECTION_BLOCK)?
        .into_iter()
        .map(|section| {
            let id = section.id();
            let id = id.strip_prefix("section-").unwrap_or(&id).to_owned();
            (id, section.get_bounding_client_rect().top())
        })
        .collect())
}

pub fn scroll_to_section(section_id: &str) -> anyhow::Result<()> {
    let section = element_by_id(&section_anchor(section_id))?;

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    section.scroll_into_view_with_scroll_into_view_options(&options);

    Ok(())
}

// mark exactly one nav link as active and hand it back
pub fn set_active_link(nav: &Element, section_id: &str) -> anyhow::Result<Option<Element>> {
    let mut active = None;

    for link in select_all(nav, "a")? {
        let is_active = link.get_attribute("data-id").as_deref() == Some(section_id);
        link.class_list()
            .toggle_with_force(ACTIVE_CLASS, is_active)
            .map_err(js_error)?;

        if is_active {
            active = Some(link);
        }
    }

    Ok(active)
}

pub fn center_link(nav: &Element, link: &Element) -> anyhow::Result<()> {
    let offset_left = |element: &Element| {
        element
            .dyn_ref::<HtmlElement>()
            .map(|html| f64::from(html.offset_left()))
            .ok_or_else(|| anyhow::Error::msg("nav element is not an html element"))
    };

    let geometry = NavGeometry {
        nav_offset_left: offset_left(nav)?,
        nav_width: nav.get_bounding_client_rect().width(),
        link_offset_left: offset_left(link)?,
        link_width: link.get_bounding_client_rect().width(),
    };

    let options = ScrollToOptions::new();
    options.set_left(geometry.centered_scroll_left());
    options.set_behavior(ScrollBehavior::Smooth);
    nav.scroll_to_with_scroll_to_options(&options);

    Ok(())
}

pub fn set_title(title: &str) -> anyhow::Result<()> {
    document()?.set_title(title);

    Ok(())
}

pub fn add_body_class(class: &str) -> anyhow::Result<()> {
    document()?
        .body()
        .ok_or_else(|| anyhow::Error::msg("document has no body"))?
        .class_list()
        .add_1(class)
        .map_err(js_error)
}

pub fn append_stylesheet(href: &str) -> anyhow::Result<()> {
    let document = document()?;

    let link = document.create_element("link").map_err(js_error)?;
    link.set_attribute("rel", "stylesheet").map_err(js_error)?;
    link.set_attribute("href", href).map_err(js_error)?;

    document
        .head()
        .ok_or_else(|| anyhow::Error::msg("document has no head"))?
        .append_child(&link)
        .map_err(js_error)?;

    Ok(())
}
