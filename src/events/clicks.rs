use aarohan_core::content::{dom_ids, Anchor, ScheduleDay};
use aarohan_core::{Action, CloseReason, SurfaceId};
use web_sys as web;

use crate::app::{self, SharedApp};
use crate::{dom, overlay};

fn close_action(surface: SurfaceId, reason: CloseReason) -> Action {
    match surface {
        SurfaceId::ArtistDetail => Action::CloseArtist(reason),
        SurfaceId::EventDetail => Action::CloseEvent(reason),
        SurfaceId::Schedule => Action::CloseSchedule(reason),
        SurfaceId::Booking => Action::CloseBooking(reason),
        SurfaceId::MobileMenu => Action::CloseMenu(reason),
    }
}

fn wire_action(document: &web::Document, element_id: &str, app: &SharedApp, action: Action) {
    let app = app.clone();
    dom::add_click_listener(document, element_id, move |ev: web::MouseEvent| {
        ev.prevent_default();
        app::dispatch(&app, action.clone());
    });
}

/// Card grids use one delegated listener reading `data-index`.
fn wire_grid(document: &web::Document, grid_id: &str, app: &SharedApp, to_action: fn(usize) -> Action) {
    let app = app.clone();
    dom::add_click_listener(document, grid_id, move |ev: web::MouseEvent| {
        if let Some(i) = dom::closest_index(&ev) {
            app::dispatch(&app, to_action(i));
        }
    });
}

/// Backdrops and close controls carry `data-close`.
fn wire_modal_dismissal(document: &web::Document, app: &SharedApp, surface: SurfaceId) {
    let app = app.clone();
    dom::add_click_listener(document, overlay::element_id(surface), move |ev: web::MouseEvent| {
        let Some(control) = dom::closest(&ev, "[data-close]") else {
            return;
        };
        let reason = match control.get_attribute("data-close").as_deref() {
            Some("backdrop") => CloseReason::Backdrop,
            _ => CloseReason::CloseButton,
        };
        app::dispatch(&app, close_action(surface, reason));
    });
}

/// Every `a[data-anchor]` on the page scrolls smoothly instead of jumping.
fn wire_anchor_links(document: &web::Document, app: &SharedApp) {
    let app = app.clone();
    dom::add_listener(document, "click", move |ev: web::MouseEvent| {
        let Some(link) = dom::closest(&ev, "a[data-anchor]") else {
            return;
        };
        let anchor = link
            .get_attribute("data-anchor")
            .and_then(|a| Anchor::from_href(&a));
        if let Some(anchor) = anchor {
            ev.prevent_default();
            app::dispatch(&app, Action::Navigate(anchor));
        }
    });
}

pub fn wire_clicks(document: &web::Document, app: &SharedApp) {
    for id in [
        dom_ids::HERO_BOOKING,
        dom_ids::NAV_BOOKING,
        dom_ids::MENU_BOOKING,
        dom_ids::PASSES_BOOKING,
    ] {
        wire_action(document, id, app, Action::OpenBooking);
    }
    wire_action(document, dom_ids::MENU_TOGGLE, app, Action::ToggleMenu);
    wire_action(document, dom_ids::SCHEDULE_OPEN, app, Action::OpenSchedule);

    wire_grid(document, dom_ids::LINEUP_GRID, app, Action::SelectArtist);
    wire_grid(document, dom_ids::EVENTS_GRID, app, Action::SelectEvent);

    for surface in SurfaceId::ALL {
        wire_modal_dismissal(document, app, surface);
    }

    let tabs_app = app.clone();
    dom::add_click_listener(document, dom_ids::SCHEDULE_TABS, move |ev: web::MouseEvent| {
        let day = dom::closest(&ev, "[data-day]")
            .and_then(|tab| tab.get_attribute("data-day"))
            .and_then(|label| ScheduleDay::from_label(&label));
        if let Some(day) = day {
            app::dispatch(&tabs_app, Action::SelectDay(day));
        }
    });

    wire_anchor_links(document, app);
}
