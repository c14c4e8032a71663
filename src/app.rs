use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use aarohan_core::content::Anchor;
use aarohan_core::{Action, Outcome, Site, SiteError, SubmissionTicket};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

use crate::constants::NAV_SCROLL_OFFSET_PX;
use crate::{dom, ui};

pub struct App {
    pub site: Site,
    pub document: web::Document,
}

pub type SharedApp = Rc<RefCell<App>>;

impl App {
    pub fn new(site: Site, document: web::Document) -> SharedApp {
        Rc::new(RefCell::new(Self { site, document }))
    }
}

/// Apply `action`, carry out its follow-up and re-render.
pub fn dispatch(app: &SharedApp, action: Action) {
    let result = app.borrow_mut().site.apply(action);
    match result {
        Ok(Outcome::SubmissionStarted { ticket, delay }) => {
            schedule_completion(app.clone(), ticket, delay)
        }
        Ok(Outcome::ScrollTo(anchor)) => scroll_to_anchor(&app.borrow(), anchor),
        Ok(Outcome::Changed | Outcome::Unchanged) => {}
        // shown inline from the form state
        Err(SiteError::Validation(e)) => log::info!("[passes] {}", e),
        Err(e) => log::warn!("[app] {}", e),
    }
    let app = app.borrow();
    ui::sync(&app.document, &app.site);
}

fn schedule_completion(app: SharedApp, ticket: SubmissionTicket, delay: Duration) {
    spawn_local(async move {
        if let Err(e) = sleep(delay).await {
            log::error!("[passes] submission timer failed: {:?}", e);
            return;
        }
        // a close in the meantime invalidates the ticket; the form ignores it
        dispatch(&app, Action::CompleteSubmission(ticket));
    });
}

async fn sleep(delay: Duration) -> Result<(), JsValue> {
    let ms = delay.as_millis().min(i32::MAX as u128) as i32;
    let promise = js_sys::Promise::new(&mut |resolve, reject| {
        match web::window() {
            Some(w) => {
                if let Err(e) =
                    w.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
                {
                    _ = reject.call1(&JsValue::NULL, &e);
                }
            }
            None => {
                _ = reject.call1(&JsValue::NULL, &JsValue::from_str("no window"));
            }
        }
    });
    JsFuture::from(promise).await.map(|_| ())
}

fn scroll_to_anchor(app: &App, anchor: Anchor) {
    let target = match anchor {
        Anchor::Hero => 0.0,
        _ => match app.document.get_element_by_id(anchor.id()) {
            Some(el) => (dom::page_top(&el) - NAV_SCROLL_OFFSET_PX).max(0.0),
            None => {
                log::warn!("[nav] missing #{}", anchor.id());
                return;
            }
        },
    };
    app.site.hub().scroll_to(target, false);
}
