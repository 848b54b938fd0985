use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

use gloo_console::error as console_error;
use tracing::debug;
use wasm_bindgen::{JsCast, closure::Closure};
use web_sys::AddEventListenerOptions;

use common::{config::ScrollConfig, scroll::ScrollTracker};

use crate::dom;

// recompute the active section from the live layout and move the nav highlight
fn update_active(tracker: &mut ScrollTracker) -> anyhow::Result<()> {
    let Some(active) = tracker.update(dom::section_tops()?) else {
        return Ok(());
    };
    debug!("active section is now {active}");

    let nav = dom::element_by_id(dom::SECTIONS_NAV_ID)?;
    if let Some(link) = dom::set_active_link(&nav, &active)? {
        dom::center_link(&nav, &link)?;
    }

    Ok(())
}

// hook the tracker up to window scroll and resize events
//
// the tracker state lives in the listener itself; the listeners are never removed,
// since the menu stays on the page until it is unloaded
pub fn install(config: &ScrollConfig) -> anyhow::Result<()> {
    let window = dom::window()?;
    let tracker = Rc::new(RefCell::new(ScrollTracker::new(config.threshold)));

    let update: Rc<dyn Fn()> = Rc::new(move || {
        if let Err(err) = update_active(&mut tracker.borrow_mut()) {
            console_error!(format!("failed to update active section: {err}"));
        }
    });

    let on_event: Closure<dyn FnMut()> = if config.per_frame {
        // any number of events between two frames collapse into one update
        let pending = Rc::new(Cell::new(false));

        let on_frame: Closure<dyn FnMut()> = {
            let pending = pending.clone();
            let update = update.clone();
            Closure::new(move || {
                pending.set(false);
                update();
            })
        };

        let window = window.clone();
        Closure::new(move || {
            if pending.replace(true) {
                return;
            }

            if let Err(err) = window.request_animation_frame(on_frame.as_ref().unchecked_ref()) {
                pending.set(false);
                console_error!(format!("failed to schedule frame: {err:?}"));
            }
        })
    } else {
        let update = update.clone();
        Closure::new(move || update())
    };

    let options = AddEventListenerOptions::new();
    options.set_passive(true);

    for event in ["scroll", "resize"] {
        window
            .add_event_listener_with_callback_and_add_event_listener_options(
                event,
                on_event.as_ref().unchecked_ref(),
                &options,
            )
            .map_err(dom::js_error)?;
    }
    on_event.forget();

    // highlight the right link before the first scroll
    update();

    Ok(())
}
