use aarohan_core::content::dom_ids;
use aarohan_core::SurfaceId;
use web_sys as web;

use crate::constants::{HIDDEN_CLASS, NAV_HIDDEN_CLASS};
use crate::dom;

pub fn element_id(surface: SurfaceId) -> &'static str {
    match surface {
        SurfaceId::ArtistDetail => dom_ids::ARTIST_MODAL,
        SurfaceId::EventDetail => dom_ids::EVENT_MODAL,
        SurfaceId::Schedule => dom_ids::SCHEDULE_MODAL,
        SurfaceId::Booking => dom_ids::BOOKING_MODAL,
        SurfaceId::MobileMenu => dom_ids::MOBILE_MENU,
    }
}

#[inline]
pub fn show(document: &web::Document, element_id: &str) {
    if let Some(el) = document.get_element_by_id(element_id) {
        _ = el.class_list().remove_1(HIDDEN_CLASS);
        // fallback for environments without the stylesheet
        _ = el.set_attribute("style", "");
        _ = el.set_attribute("aria-hidden", "false");
    }
}

#[inline]
pub fn hide(document: &web::Document, element_id: &str) {
    if let Some(el) = document.get_element_by_id(element_id) {
        _ = el.class_list().add_1(HIDDEN_CLASS);
        _ = el.set_attribute("style", "display:none");
        _ = el.set_attribute("aria-hidden", "true");
    }
}

#[inline]
pub fn is_hidden(document: &web::Document, element_id: &str) -> bool {
    if let Some(el) = document.get_element_by_id(element_id) {
        if el.class_list().contains(HIDDEN_CLASS) {
            return true;
        }
        return el
            .get_attribute("style")
            .map(|s| s.contains("display:none"))
            .unwrap_or(false);
    }
    false
}

/// Make the element for `surface` match its open flag. Touches the DOM only on change.
pub fn sync_surface(document: &web::Document, surface: SurfaceId, open: bool) {
    let id = element_id(surface);
    match (open, is_hidden(document, id)) {
        (true, true) => show(document, id),
        (false, false) => hide(document, id),
        _ => {}
    }
}

/// The nav bar slides away while any modal is up.
pub fn set_nav_hidden(document: &web::Document, hidden: bool) {
    if let Some(nav) = document.get_element_by_id(dom_ids::NAV) {
        dom::set_class(&nav, NAV_HIDDEN_CLASS, hidden);
    }
}
