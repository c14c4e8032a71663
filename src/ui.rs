//! Markup for the data-driven parts of the page and per-dispatch syncing.
//!
//! Static copy lives in `index.html`; cards, modal bodies, the schedule and
//! the gallery are generated here from the content tables.

use aarohan_core::content::{
    dom_ids, Artist, Event, EventIcon, Link, ScheduleDay, ARTISTS, EVENTS, FOOTER_EXPLORE,
    FOOTER_RESOURCES, GALLERY, SHOWCASE,
};
use aarohan_core::{FormPhase, PassType, Site, SurfaceId};
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::{ACTIVE_CLASS, SUBMITTING_LABEL, SUBMIT_LABEL};
use crate::{dom, overlay};

fn icon_glyph(icon: EventIcon) -> &'static str {
    match icon {
        EventIcon::Music => "♪",
        EventIcon::Crown => "♛",
        EventIcon::Palette => "✎",
        EventIcon::Trophy => "🏆",
    }
}

fn artist_card(index: usize, artist: &Artist) -> String {
    format!(
        "<article class='artist-card' data-index='{index}'>\
           <img src='{}' alt='{}' loading='lazy'>\
           <div class='artist-meta'><h3>{}</h3><p>{}</p></div>\
         </article>",
        artist.image, artist.name, artist.name, artist.role
    )
}

fn event_card(index: usize, event: &Event) -> String {
    format!(
        "<article class='event-card glass' data-index='{index}'>\
           <div class='event-head'><span class='event-icon'>{}</span><span class='event-date'>{}</span></div>\
           <h3>{}</h3><p class='event-subtitle'>{}</p><hr>\
           <p class='event-prize'>Prize: <strong>{}</strong></p>\
           <p class='event-cta'>Tap for details &rarr;</p>\
         </article>",
        icon_glyph(event.icon),
        event.date,
        event.title,
        event.subtitle,
        event.prize
    )
}

fn link_list(links: &[Link]) -> String {
    links
        .iter()
        .map(|l| match l.anchor {
            Some(a) => format!("<li><a href='#{}' data-anchor='{}'>{}</a></li>", a.id(), a.id(), l.label),
            None => format!("<li><a href='#'>{}</a></li>", l.label),
        })
        .collect()
}

/// Render every content-driven block once at start-up.
pub fn mount_content(document: &web::Document) {
    let lineup: String = ARTISTS.iter().enumerate().map(|(i, a)| artist_card(i, a)).collect();
    dom::set_html(document, dom_ids::LINEUP_GRID, &lineup);

    let events: String = EVENTS.iter().enumerate().map(|(i, e)| event_card(i, e)).collect();
    dom::set_html(document, dom_ids::EVENTS_GRID, &events);

    let tabs: String = ScheduleDay::ALL
        .iter()
        .map(|d| format!("<button type='button' data-day='{0}'>{0}</button>", d.label()))
        .collect();
    dom::set_html(document, dom_ids::SCHEDULE_TABS, &tabs);

    let tiles: String = GALLERY
        .iter()
        .map(|img| {
            format!(
                "<figure class='{}'><img src='{}' alt='Gallery' loading='lazy'>\
                 <figcaption>View Full</figcaption></figure>",
                img.span.class(),
                img.url
            )
        })
        .collect();
    dom::set_html(document, dom_ids::GALLERY_WALL, &tiles);

    let video = format!(
        "<video autoplay muted loop playsinline poster='{}'><source src='{}' type='video/mp4'></video>\
         <div class='showcase-caption'><h3>{}</h3><p>{}</p></div>",
        SHOWCASE.poster, SHOWCASE.video, SHOWCASE.title, SHOWCASE.credit
    );
    dom::set_html(document, dom_ids::SHOWCASE_VIDEO, &video);

    let passes: String = PassType::ALL
        .iter()
        .map(|p| format!("<option>{}</option>", p.label()))
        .collect();
    dom::set_html(document, dom_ids::FIELD_PASS, &passes);

    dom::set_html(document, dom_ids::FOOTER_EXPLORE, &link_list(FOOTER_EXPLORE));
    dom::set_html(document, dom_ids::FOOTER_RESOURCES, &link_list(FOOTER_RESOURCES));
}

fn artist_body(artist: &Artist) -> String {
    let tracks: String = artist.tracks.iter().map(|t| format!("<li>{t}</li>")).collect();
    format!(
        "<img class='modal-image' src='{}' alt='{}'>\
         <div class='modal-copy'>\
           <span class='modal-kicker'>{}</span><h3>{}</h3>\
           <p class='modal-meta'>{} • {}</p>\
           <p>{}</p>\
           <h4>Top Tracks</h4><ul class='tracks'>{}</ul>\
         </div>",
        artist.image, artist.name, artist.role, artist.name, artist.time, artist.stage, artist.bio, tracks
    )
}

fn event_body(event: &Event) -> String {
    let rules: String = event.rules.iter().map(|r| format!("<li>{r}</li>")).collect();
    format!(
        "<img class='modal-image' src='{}' alt='{}'>\
         <div class='modal-copy'>\
           <h3>{}</h3><p class='modal-kicker'>{}</p>\
           <p class='modal-meta'>{} • {}</p>\
           <p>{}</p>\
           <h4>Rules &amp; Guidelines</h4><ul class='rules'>{}</ul>\
           <button type='button' class='register'>Register Now</button>\
         </div>",
        event.image, event.title, event.title, event.subtitle, event.date, event.time, event.description, rules
    )
}

fn schedule_list(day: ScheduleDay) -> String {
    day.items()
        .iter()
        .map(|item| {
            format!(
                "<li class='timeline-item'><div class='timeline-head'>\
                 <span class='timeline-time'>{}</span><span class='timeline-kind'>{}</span></div>\
                 <h4>{}</h4><p class='timeline-loc'>{}</p></li>",
                item.time, item.kind, item.title, item.location
            )
        })
        .collect()
}

/// Bring the DOM in line with `site` after an action.
pub fn sync(document: &web::Document, site: &Site) {
    let hub = site.hub();
    for surface in SurfaceId::ALL {
        overlay::sync_surface(document, surface, hub.is_open(surface));
    }

    if let Some(artist) = site.lineup.selected() {
        dom::set_html(document, dom_ids::ARTIST_BODY, &artist_body(artist));
    }
    if let Some(event) = site.competitions.selected_event() {
        dom::set_html(document, dom_ids::EVENT_BODY, &event_body(event));
    }

    if site.competitions.schedule_open() {
        let day = site.competitions.active_day();
        dom::set_html(document, dom_ids::SCHEDULE_LIST, &schedule_list(day));
        if let Ok(tabs) = document.query_selector_all(&format!("#{} [data-day]", dom_ids::SCHEDULE_TABS)) {
            for i in 0..tabs.length() {
                if let Some(tab) = tabs.item(i).and_then(|n| n.dyn_into::<web::Element>().ok()) {
                    let active = tab.get_attribute("data-day").as_deref() == Some(day.label());
                    dom::set_class(&tab, ACTIVE_CLASS, active);
                }
            }
        }
    }

    if let Some(toggle) = document.get_element_by_id(dom_ids::MENU_TOGGLE) {
        let open = site.navigation.menu_open();
        toggle.set_text_content(Some(if open { "✕" } else { "☰" }));
        _ = toggle.set_attribute("aria-expanded", if open { "true" } else { "false" });
    }

    sync_booking(document, site);
}

fn set_inputs_disabled(document: &web::Document, disabled: bool) {
    for id in [dom_ids::FIELD_NAME, dom_ids::FIELD_EMAIL, dom_ids::FIELD_PHONE] {
        if let Some(input) = document
            .get_element_by_id(id)
            .and_then(|e| e.dyn_into::<web::HtmlInputElement>().ok())
        {
            input.set_disabled(disabled);
        }
    }
    if let Some(select) = document
        .get_element_by_id(dom_ids::FIELD_PASS)
        .and_then(|e| e.dyn_into::<web::HtmlSelectElement>().ok())
    {
        select.set_disabled(disabled);
    }
}

fn sync_booking(document: &web::Document, site: &Site) {
    let passes = &site.passes;
    let form_el = document.get_element_by_id(dom_ids::BOOKING_FORM);

    if !passes.is_open() {
        // the draft was discarded with the modal; clear what the inputs show
        if let Some(form) = form_el.and_then(|f| f.dyn_into::<web::HtmlFormElement>().ok()) {
            form.reset();
        }
        set_inputs_disabled(document, false);
        return;
    }

    let phase = passes.phase();
    set_inputs_disabled(document, !passes.form().accepts_edits());
    if let Some(button) = document
        .get_element_by_id(dom_ids::BOOKING_SUBMIT)
        .and_then(|b| b.dyn_into::<web::HtmlButtonElement>().ok())
    {
        button.set_disabled(!passes.form().submit_enabled());
        button.set_text_content(Some(if phase == FormPhase::Submitting {
            SUBMITTING_LABEL
        } else {
            SUBMIT_LABEL
        }));
    }

    let error = passes.form().last_error().map(|e| e.to_string()).unwrap_or_default();
    dom::set_text(document, dom_ids::BOOKING_ERROR, &error);

    let success = phase == FormPhase::Success;
    if success {
        overlay::hide(document, dom_ids::BOOKING_FORM);
        overlay::show(document, dom_ids::BOOKING_SUCCESS);
    } else {
        overlay::show(document, dom_ids::BOOKING_FORM);
        overlay::hide(document, dom_ids::BOOKING_SUCCESS);
    }
}
