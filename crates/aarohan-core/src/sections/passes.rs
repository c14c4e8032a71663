use crate::error::{Result, SiteError};
use crate::hub::OverlayHub;
use crate::modal::{CloseReason, Modal, Transition};
use crate::overlay::SurfaceId;
use crate::reservation::{Field, FormPhase, PassType, ReservationForm, SubmissionTicket};

/// Booking modal wrapping the reservation form.
pub struct Passes {
    booking: Modal<()>,
    form: ReservationForm,
}

impl Passes {
    pub fn new(hub: &OverlayHub) -> Self {
        Self {
            booking: Modal::new(hub.register(SurfaceId::Booking)),
            form: ReservationForm::new(),
        }
    }

    pub fn open(&mut self) -> Transition {
        self.booking.open(())
    }

    /// Closing throws away the draft and any submission still in flight.
    pub fn close(&mut self, reason: CloseReason) -> bool {
        self.form.discard();
        self.booking.close(reason)
    }

    pub fn edit(&mut self, field: Field, value: &str) -> bool {
        self.booking.is_open() && self.form.set_field(field, value)
    }

    pub fn select_pass(&mut self, pass_type: PassType) -> bool {
        self.booking.is_open() && self.form.set_pass_type(pass_type)
    }

    pub fn submit(&mut self) -> Result<SubmissionTicket> {
        if !self.booking.is_open() {
            return Err(SiteError::BookingClosed);
        }
        self.form.submit()
    }

    pub fn complete(&mut self, ticket: SubmissionTicket) -> bool {
        self.booking.is_open() && self.form.complete(ticket)
    }

    pub fn is_open(&self) -> bool {
        self.booking.is_open()
    }

    pub fn phase(&self) -> FormPhase {
        self.form.phase()
    }

    pub fn form(&self) -> &ReservationForm {
        &self.form
    }
}
