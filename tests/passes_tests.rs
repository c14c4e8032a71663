// Host-side tests for the reservation form and the booking modal.

mod common;

use aarohan_core::{
    Action, CloseReason, Field, FormPhase, Outcome, PassType, Reservation, ReservationForm, Site,
    SiteError, SiteParams, ValidationError,
};
use common::harness;

fn valid_draft(form: &mut ReservationForm) {
    form.set_field(Field::Name, "Asha Rao");
    form.set_field(Field::Email, "asha@college.edu");
    form.set_field(Field::Phone, "+91 98765 43210");
}

fn fill_booking(site: &mut Site) {
    for (field, value) in [
        (Field::Name, "Asha Rao"),
        (Field::Email, "asha@college.edu"),
        (Field::Phone, "9876543210"),
    ] {
        site.apply(Action::EditField(field, value.to_string()))
            .expect("edit");
    }
}

#[test]
fn validation_reports_first_problem() {
    let mut r = Reservation::default();
    assert_eq!(r.validate(), Err(ValidationError::MissingField(Field::Name)));
    r.name = "  ".into();
    assert_eq!(r.validate(), Err(ValidationError::MissingField(Field::Name)));
    r.name = "Asha".into();
    assert_eq!(r.validate(), Err(ValidationError::MissingField(Field::Email)));
    r.email = "asha".into();
    assert_eq!(r.validate(), Err(ValidationError::MalformedEmail));
    r.email = "asha@college.edu".into();
    assert_eq!(r.validate(), Err(ValidationError::MissingField(Field::Phone)));
    r.phone = "12345".into();
    assert_eq!(r.validate(), Err(ValidationError::MalformedPhone));
    r.phone = "98765-43210".into();
    assert_eq!(r.validate(), Ok(()));
}

#[test]
fn email_and_phone_shapes() {
    let mut r = Reservation {
        name: "Asha".into(),
        phone: "9876543210".into(),
        ..Default::default()
    };
    for bad in ["a@b", "@college.edu", "a@.edu", "a@college.", "a b@college.edu", "a@b@c.d"] {
        r.email = bad.into();
        assert_eq!(r.validate(), Err(ValidationError::MalformedEmail), "{bad}");
    }
    r.email = "a@b.co".into();
    for bad in ["123456", "1234567890123456", "98765abc10"] {
        r.phone = bad.into();
        assert_eq!(r.validate(), Err(ValidationError::MalformedPhone), "{bad}");
    }
    for good in ["1234567", "(022) 2345-6789", "+1 555 010 9999"] {
        r.phone = good.into();
        assert_eq!(r.validate(), Ok(()), "{good}");
    }
}

#[test]
fn pass_type_labels_round_trip() {
    assert_eq!(PassType::default(), PassType::DayOneOnly);
    for p in PassType::ALL {
        assert_eq!(PassType::from_label(p.label()), Some(p));
    }
    assert_eq!(PassType::from_label("VIP"), None);
}

#[test]
fn invalid_submit_stays_editing_and_keeps_error() {
    let mut form = ReservationForm::new();
    form.set_field(Field::Name, "Asha");
    let err = form.submit().unwrap_err();
    assert_eq!(
        err,
        SiteError::Validation(ValidationError::MissingField(Field::Email))
    );
    assert_eq!(form.phase(), FormPhase::Editing);
    assert!(form.submit_enabled());
    assert_eq!(
        form.last_error(),
        Some(ValidationError::MissingField(Field::Email))
    );

    // editing clears the inline error
    form.set_field(Field::Email, "asha@college.edu");
    assert_eq!(form.last_error(), None);
}

#[test]
fn form_goes_through_each_phase_once() {
    let mut form = ReservationForm::new();
    valid_draft(&mut form);
    form.set_pass_type(PassType::AllAccess);

    let ticket = form.submit().expect("valid draft");
    assert_eq!(form.phase(), FormPhase::Submitting);
    assert!(!form.submit_enabled());
    assert_eq!(form.submit(), Err(SiteError::SubmissionInProgress));
    assert!(!form.set_field(Field::Name, "Someone Else"));
    assert!(!form.set_pass_type(PassType::DayTwoOnly));

    assert!(form.complete(ticket));
    assert_eq!(form.phase(), FormPhase::Success);
    assert!(!form.complete(ticket));
    assert_eq!(form.phase(), FormPhase::Success);
    assert_eq!(form.draft().name, "Asha Rao");
    assert_eq!(form.draft().pass_type, PassType::AllAccess);
}

#[test]
fn discard_invalidates_pending_ticket() {
    let mut form = ReservationForm::new();
    valid_draft(&mut form);
    let stale = form.submit().expect("valid draft");
    form.discard();
    assert_eq!(form.phase(), FormPhase::Editing);
    assert_eq!(form.draft(), &Reservation::default());

    valid_draft(&mut form);
    let fresh = form.submit().expect("valid draft");
    assert_ne!(stale, fresh);
    assert!(!form.complete(stale));
    assert_eq!(form.phase(), FormPhase::Submitting);
    assert!(form.complete(fresh));
}

#[test]
fn booking_submission_reaches_success_once() {
    let h = harness();
    let mut site = Site::new(h.hub.clone(), SiteParams::default());
    site.apply(Action::OpenBooking).expect("open");
    fill_booking(&mut site);
    site.apply(Action::SelectPass(PassType::DayTwoOnly)).expect("pass");

    let outcome = site.apply(Action::SubmitReservation).expect("submit");
    let Outcome::SubmissionStarted { ticket, delay } = outcome else {
        panic!("expected a started submission, got {outcome:?}");
    };
    assert_eq!(delay, SiteParams::default().submit_delay);
    assert_eq!(site.passes.phase(), FormPhase::Submitting);
    assert!(!site.passes.form().submit_enabled());

    // a double click while submitting is rejected
    assert_eq!(
        site.apply(Action::SubmitReservation),
        Err(SiteError::SubmissionInProgress)
    );

    assert_eq!(
        site.apply(Action::CompleteSubmission(ticket)),
        Ok(Outcome::Changed)
    );
    assert_eq!(site.passes.phase(), FormPhase::Success);
    assert_eq!(
        site.apply(Action::CompleteSubmission(ticket)),
        Ok(Outcome::Unchanged)
    );
    assert!(h.hub.is_locked());
}

#[test]
fn completion_after_close_changes_nothing() {
    let h = harness();
    let mut site = Site::new(h.hub.clone(), SiteParams::default());
    site.apply(Action::OpenBooking).expect("open");
    fill_booking(&mut site);
    let Ok(Outcome::SubmissionStarted { ticket, .. }) = site.apply(Action::SubmitReservation)
    else {
        panic!("submission did not start");
    };

    site.apply(Action::CloseBooking(CloseReason::Backdrop))
        .expect("close");
    assert!(!h.hub.any_open());

    assert_eq!(
        site.apply(Action::CompleteSubmission(ticket)),
        Ok(Outcome::Unchanged)
    );
    assert!(!site.passes.is_open());
    assert_eq!(site.passes.phase(), FormPhase::Editing);
    assert!(!h.hub.is_locked());

    // reopening shows a fresh form that the old ticket cannot finish
    site.apply(Action::OpenBooking).expect("reopen");
    assert_eq!(site.passes.form().draft(), &Reservation::default());
    assert_eq!(
        site.apply(Action::CompleteSubmission(ticket)),
        Ok(Outcome::Unchanged)
    );
    assert_eq!(site.passes.phase(), FormPhase::Editing);
}

#[test]
fn form_is_fresh_after_success_and_close() {
    let h = harness();
    let mut site = Site::new(h.hub, SiteParams::default());
    site.apply(Action::OpenBooking).expect("open");
    fill_booking(&mut site);
    let Ok(Outcome::SubmissionStarted { ticket, .. }) = site.apply(Action::SubmitReservation)
    else {
        panic!("submission did not start");
    };
    site.apply(Action::CompleteSubmission(ticket)).expect("complete");
    site.apply(Action::CloseBooking(CloseReason::CloseButton))
        .expect("close");
    site.apply(Action::OpenBooking).expect("reopen");
    assert_eq!(site.passes.phase(), FormPhase::Editing);
    assert!(site.passes.form().submit_enabled());
}

#[test]
fn inputs_are_frozen_until_the_form_is_discarded() {
    let h = harness();
    let mut site = Site::new(h.hub.clone(), SiteParams::default());
    site.apply(Action::OpenBooking).expect("open");
    assert!(site.passes.form().accepts_edits());
    fill_booking(&mut site);
    let Ok(Outcome::SubmissionStarted { ticket, .. }) = site.apply(Action::SubmitReservation)
    else {
        panic!("submission did not start");
    };

    assert!(!site.passes.form().accepts_edits());
    assert_eq!(
        site.apply(Action::EditField(Field::Name, "Changed".to_string())),
        Ok(Outcome::Unchanged)
    );
    assert_eq!(
        site.apply(Action::SelectPass(PassType::AllAccess)),
        Ok(Outcome::Unchanged)
    );
    assert_eq!(site.passes.form().draft().name, "Asha Rao");

    site.apply(Action::CompleteSubmission(ticket)).expect("complete");
    assert!(!site.passes.form().accepts_edits());

    // the success panel's close button dismisses the modal
    assert_eq!(
        site.apply(Action::CloseBooking(CloseReason::CloseButton)),
        Ok(Outcome::Changed)
    );
    assert!(!h.hub.is_locked());
    assert!(site.passes.form().accepts_edits());
}

#[test]
fn edits_and_submit_need_an_open_booking() {
    let h = harness();
    let mut site = Site::new(h.hub, SiteParams::default());
    assert_eq!(
        site.apply(Action::EditField(Field::Name, "Asha".into())),
        Ok(Outcome::Unchanged)
    );
    assert_eq!(
        site.apply(Action::SubmitReservation),
        Err(SiteError::BookingClosed)
    );
}

#[test]
fn invalid_submission_keeps_button_enabled() {
    let h = harness();
    let mut site = Site::new(h.hub, SiteParams::default());
    site.apply(Action::OpenBooking).expect("open");
    site.apply(Action::EditField(Field::Name, "Asha".into()))
        .expect("edit");
    site.apply(Action::EditField(Field::Email, "not-an-email".into()))
        .expect("edit");
    assert_eq!(
        site.apply(Action::SubmitReservation),
        Err(SiteError::Validation(ValidationError::MalformedEmail))
    );
    assert!(site.passes.form().submit_enabled());
    assert_eq!(
        site.passes.form().last_error().map(|e| e.to_string()),
        Some("email address is malformed".to_string())
    );
}
