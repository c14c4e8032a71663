use aarohan_core::input::action_for_key;
use aarohan_core::Action;
use web_sys as web;

use crate::app::{self, SharedApp};
use crate::dom;

pub fn handle_global_keydown(ev: &web::KeyboardEvent, app: &SharedApp) {
    let Some(action) = action_for_key(&ev.key()) else {
        return;
    };
    if action == Action::Escape {
        if !app.borrow().site.hub().any_open() {
            return;
        }
        ev.prevent_default();
    }
    app::dispatch(app, action);
}

pub fn wire_global_keydown(app: SharedApp) {
    if let Some(window) = web::window() {
        dom::add_listener(&window, "keydown", move |ev: web::KeyboardEvent| {
            handle_global_keydown(&ev, &app);
        });
    }
}
