use tracing::{Level, debug, error, info, instrument};

use api::theme::{load_themes, stylesheet_url};
use common::theme::{MonthDay, select_theme};

use crate::dom;

// festive theming
//
// this runs on its own task next to the menu load; it only touches the body class
// list and the head, so it does not matter which of the two finishes first
pub async fn apply_theme() {
    if let Err(err) = try_apply_theme().await {
        error!("failed to apply theme: {err}");
    }
}

#[instrument(level = Level::DEBUG)]
async fn try_apply_theme() -> anyhow::Result<()> {
    let table = load_themes().await?;

    let today = MonthDay::today();
    debug!("selecting theme for {today}");

    let (key, theme) = select_theme(&table, today)?;
    dom::add_body_class(&theme.class)?;
    info!({ theme = key, class = %theme.class }, "applied theme");

    if let Some(css_file) = &theme.css_file {
        let href = stylesheet_url(css_file);
        debug!("loading theme stylesheet {href}");
        dom::append_stylesheet(&href)?;
    }

    Ok(())
}
