use serde::{Deserialize, Serialize};
use tracing::{Level, debug, instrument, warn};

use api::{CONFIG_URL, fetch_text};

// menu configuration
//
// only presentation tuning lives here; the data layout under data/ is fixed by the
// page contract and is not configurable
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct MenuConfig {
    #[serde(default)]
    pub scroll: ScrollConfig,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ScrollConfig {
    // distance in px from the top of the viewport that a section has to cross
    // before it becomes the active one
    #[serde(default = "default_threshold")]
    pub threshold: f64,

    // coalesce scroll and resize events to one update per animation frame
    #[serde(default = "default_per_frame")]
    pub per_frame: bool,
}

fn default_threshold() -> f64 {
    500.0
}

fn default_per_frame() -> bool {
    true
}

impl Default for ScrollConfig {
    fn default() -> Self {
        ScrollConfig {
            threshold: default_threshold(),
            per_frame: default_per_frame(),
        }
    }
}

// in order to extract the config table from a larger document, we need to specify it
// as a subtable of the root node, i.e. a substruct
#[derive(Debug, Deserialize, Serialize)]
struct TomlConfigFile {
    #[serde(default)]
    config: MenuConfig,
}

pub fn parse_config(doc: &str) -> anyhow::Result<MenuConfig> {
    let data: TomlConfigFile = toml::from_str(doc)?;

    Ok(data.config)
}

// the config file is optional, so anything short of a good parse falls back to the
// defaults instead of holding up the page
#[instrument(level = Level::DEBUG)]
pub async fn read_config() -> MenuConfig {
    let doc = match fetch_text(CONFIG_URL).await {
        Ok(doc) => doc,
        Err(err) => {
            debug!("using default config: {err}");
            return MenuConfig::default();
        }
    };

    match parse_config(&doc) {
        Ok(config) => config,
        Err(err) => {
            warn!("failed to parse config file, using defaults: {err}");
            MenuConfig::default()
        }
    }
}
