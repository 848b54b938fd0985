use constcat::concat;
use gloo_net::http::Request;
use serde::de::DeserializeOwned;

pub mod meta;
pub mod product;
pub mod section;
pub mod theme;

// every resource is fetched relative to the page origin, so the same build works
// whether the menu is served from / or from a subfolder behind a proxy
pub const DATA_ROOT: &str = "data";

pub const META_URL: &str = concat!(DATA_ROOT, "/meta.json");
pub const SECTIONS_URL: &str = concat!(DATA_ROOT, "/sections/sections.json");
pub const THEMES_DIR: &str = concat!(DATA_ROOT, "/themes");
pub const THEMES_URL: &str = concat!(THEMES_DIR, "/themes.json");
pub const CONFIG_URL: &str = concat!(DATA_ROOT, "/config.toml");

pub const PRODUCT_ASSETS_DIR: &str = "assets/products";

// fetch a resource and make sure the server actually answered with it
//
// static hosts tend to answer a missing file with a 404 html page, so the status has
// to be checked before handing the body to the parser
async fn fetch(url: &str) -> anyhow::Result<gloo_net::http::Response> {
    let resp = Request::get(url).send().await?;

    if !resp.ok() {
        return Err(anyhow::Error::msg(format!(
            "failed to fetch {url}: {} {}",
            resp.status(),
            resp.status_text()
        )));
    }

    Ok(resp)
}

pub async fn fetch_json<T: DeserializeOwned>(url: &str) -> anyhow::Result<T> {
    Ok(fetch(url).await?.json().await?)
}

pub async fn fetch_text(url: &str) -> anyhow::Result<String> {
    Ok(fetch(url).await?.text().await?)
}
