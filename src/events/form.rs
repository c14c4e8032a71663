use aarohan_core::content::dom_ids;
use aarohan_core::{Action, Field, PassType};
use web_sys as web;

use crate::app::{self, SharedApp};
use crate::dom;

fn field_for(element_id: &str) -> Option<Field> {
    match element_id {
        id if id == dom_ids::FIELD_NAME => Some(Field::Name),
        id if id == dom_ids::FIELD_EMAIL => Some(Field::Email),
        id if id == dom_ids::FIELD_PHONE => Some(Field::Phone),
        _ => None,
    }
}

/// Mirror inputs into the reservation draft and route submit through the site.
pub fn wire_booking_form(document: &web::Document, app: &SharedApp) {
    let Some(form) = document.get_element_by_id(dom_ids::BOOKING_FORM) else {
        log::warn!("[passes] missing #{}", dom_ids::BOOKING_FORM);
        return;
    };

    let input_app = app.clone();
    dom::add_listener(&form, "input", move |ev: web::Event| {
        let Some(target) = ev.target() else { return };
        let id = wasm_bindgen::JsCast::dyn_ref::<web::Element>(&target)
            .map(|el| el.id())
            .unwrap_or_default();
        if let Some(field) = field_for(&id) {
            let value = dom::field_value(&target);
            app::dispatch(&input_app, Action::EditField(field, value));
        }
    });

    let change_app = app.clone();
    dom::add_listener(&form, "change", move |ev: web::Event| {
        let Some(target) = ev.target() else { return };
        if let Some(pass) = PassType::from_label(&dom::field_value(&target)) {
            app::dispatch(&change_app, Action::SelectPass(pass));
        }
    });

    let submit_app = app.clone();
    dom::add_listener(&form, "submit", move |ev: web::Event| {
        // validation happens in the draft; errors render inline
        ev.prevent_default();
        app::dispatch(&submit_app, Action::SubmitReservation);
    });
}
