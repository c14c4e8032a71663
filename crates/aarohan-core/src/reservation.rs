//! Ticket reservation form: `Editing -> Submitting -> Success`.
//!
//! Submission is simulated. `submit` hands out a ticket and the caller
//! delivers it back through `complete` once the delay has elapsed. Discarding
//! the form bumps its generation, so a ticket issued before the discard can
//! no longer move the form to `Success`.

use std::fmt;

use crate::constants::{PHONE_DIGITS_MAX, PHONE_DIGITS_MIN};
use crate::error::{Result, SiteError, ValidationError};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PassType {
    #[default]
    DayOneOnly,
    DayTwoOnly,
    AllAccess,
}

impl PassType {
    pub const ALL: [PassType; 3] = [PassType::DayOneOnly, PassType::DayTwoOnly, PassType::AllAccess];

    pub fn label(self) -> &'static str {
        match self {
            PassType::DayOneOnly => "Day 1 Only",
            PassType::DayTwoOnly => "Day 2 Only",
            PassType::AllAccess => "All Access (3 Days)",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.label() == label)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Phone,
}

impl Field {
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Full Name",
            Field::Email => "College Email",
            Field::Phone => "Phone",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Reservation {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub pass_type: PassType,
}

impl Reservation {
    pub fn validate(&self) -> std::result::Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingField(Field::Name));
        }
        let email = self.email.trim();
        if email.is_empty() {
            return Err(ValidationError::MissingField(Field::Email));
        }
        if !is_plausible_email(email) {
            return Err(ValidationError::MalformedEmail);
        }
        let phone = self.phone.trim();
        if phone.is_empty() {
            return Err(ValidationError::MissingField(Field::Phone));
        }
        if !is_plausible_phone(phone) {
            return Err(ValidationError::MalformedPhone);
        }
        Ok(())
    }
}

fn is_plausible_email(email: &str) -> bool {
    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    !local.is_empty()
        && !email.contains(char::is_whitespace)
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

fn is_plausible_phone(phone: &str) -> bool {
    let allowed = |c: char| c.is_ascii_digit() || matches!(c, ' ' | '+' | '-' | '(' | ')');
    let digits = phone.chars().filter(char::is_ascii_digit).count();
    phone.chars().all(allowed) && (PHONE_DIGITS_MIN..=PHONE_DIGITS_MAX).contains(&digits)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormPhase {
    Editing,
    Submitting,
    Success,
}

/// Proof of a pending submission. Only the newest one can complete.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubmissionTicket {
    generation: u64,
}

#[derive(Debug)]
pub struct ReservationForm {
    draft: Reservation,
    phase: FormPhase,
    generation: u64,
    pending: Option<SubmissionTicket>,
    last_error: Option<ValidationError>,
}

impl Default for ReservationForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ReservationForm {
    pub fn new() -> Self {
        Self {
            draft: Reservation::default(),
            phase: FormPhase::Editing,
            generation: 0,
            pending: None,
            last_error: None,
        }
    }

    /// Inputs are frozen once a submission is under way.
    pub fn accepts_edits(&self) -> bool {
        self.phase == FormPhase::Editing
    }

    pub fn set_field(&mut self, field: Field, value: &str) -> bool {
        if !self.accepts_edits() {
            return false;
        }
        let slot = match field {
            Field::Name => &mut self.draft.name,
            Field::Email => &mut self.draft.email,
            Field::Phone => &mut self.draft.phone,
        };
        slot.clear();
        slot.push_str(value);
        self.last_error = None;
        true
    }

    pub fn set_pass_type(&mut self, pass_type: PassType) -> bool {
        if !self.accepts_edits() {
            return false;
        }
        self.draft.pass_type = pass_type;
        true
    }

    pub fn submit(&mut self) -> Result<SubmissionTicket> {
        match self.phase {
            FormPhase::Editing => {}
            FormPhase::Submitting | FormPhase::Success => {
                return Err(SiteError::SubmissionInProgress)
            }
        }
        if let Err(e) = self.draft.validate() {
            self.last_error = Some(e);
            return Err(e.into());
        }
        self.generation += 1;
        let ticket = SubmissionTicket {
            generation: self.generation,
        };
        self.pending = Some(ticket);
        self.phase = FormPhase::Submitting;
        self.last_error = None;
        log::info!("[passes] submitting {} pass", self.draft.pass_type.label());
        Ok(ticket)
    }

    /// Deliver a finished submission. Stale tickets are ignored.
    pub fn complete(&mut self, ticket: SubmissionTicket) -> bool {
        if self.phase != FormPhase::Submitting || self.pending != Some(ticket) {
            log::info!("[passes] ignoring stale submission completion");
            return false;
        }
        self.pending = None;
        self.phase = FormPhase::Success;
        log::info!("[passes] reservation confirmed");
        true
    }

    /// Drop everything typed so far and invalidate any pending ticket.
    pub fn discard(&mut self) {
        self.draft = Reservation::default();
        self.phase = FormPhase::Editing;
        self.pending = None;
        self.last_error = None;
        self.generation += 1;
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn submit_enabled(&self) -> bool {
        self.phase == FormPhase::Editing
    }

    pub fn draft(&self) -> &Reservation {
        &self.draft
    }

    pub fn last_error(&self) -> Option<ValidationError> {
        self.last_error
    }
}
