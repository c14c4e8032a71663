//! Page-level state: every section plus the hub they report to.
//!
//! The web front-end turns DOM events into `Action`s, applies them here and
//! re-renders from the resulting state. Booking can be opened from the hero,
//! the navigation and the passes section; all of them send the same action.

use std::time::Duration;

use crate::constants::SUBMIT_DELAY_MS;
use crate::content::{Anchor, ScheduleDay};
use crate::error::Result;
use crate::hub::OverlayHub;
use crate::modal::CloseReason;
use crate::overlay::SurfaceId;
use crate::reservation::{Field, PassType, SubmissionTicket};
use crate::sections::{Competitions, Lineup, Navigation, Passes};

#[derive(Clone, Debug)]
pub struct SiteParams {
    pub submit_delay: Duration,
}

impl Default for SiteParams {
    fn default() -> Self {
        Self {
            submit_delay: Duration::from_millis(SUBMIT_DELAY_MS),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    SelectArtist(usize),
    CloseArtist(CloseReason),
    SelectEvent(usize),
    CloseEvent(CloseReason),
    OpenSchedule,
    CloseSchedule(CloseReason),
    SelectDay(ScheduleDay),
    OpenBooking,
    CloseBooking(CloseReason),
    EditField(Field, String),
    SelectPass(PassType),
    SubmitReservation,
    CompleteSubmission(SubmissionTicket),
    ToggleMenu,
    CloseMenu(CloseReason),
    Navigate(Anchor),
    /// Dismiss the most recently opened surface.
    Escape,
    NextDay,
    PreviousDay,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    Changed,
    Unchanged,
    /// Deliver `ticket` back as `CompleteSubmission` after `delay`.
    SubmissionStarted {
        ticket: SubmissionTicket,
        delay: Duration,
    },
    ScrollTo(Anchor),
}

impl Outcome {
    fn from_changed(changed: bool) -> Self {
        if changed {
            Outcome::Changed
        } else {
            Outcome::Unchanged
        }
    }
}

pub struct Site {
    hub: OverlayHub,
    pub navigation: Navigation,
    pub lineup: Lineup,
    pub competitions: Competitions,
    pub passes: Passes,
    params: SiteParams,
}

impl Site {
    pub fn new(hub: OverlayHub, params: SiteParams) -> Self {
        Self {
            navigation: Navigation::new(&hub),
            lineup: Lineup::new(&hub),
            competitions: Competitions::new(&hub),
            passes: Passes::new(&hub),
            hub,
            params,
        }
    }

    pub fn apply(&mut self, action: Action) -> Result<Outcome> {
        let outcome = match action {
            Action::SelectArtist(i) => {
                self.lineup.select(i)?;
                Outcome::Changed
            }
            Action::CloseArtist(reason) => Outcome::from_changed(self.lineup.close(reason)),
            Action::SelectEvent(i) => {
                self.competitions.select_event(i)?;
                Outcome::Changed
            }
            Action::CloseEvent(reason) => {
                Outcome::from_changed(self.competitions.close_event(reason))
            }
            Action::OpenSchedule => {
                self.competitions.open_schedule();
                Outcome::Changed
            }
            Action::CloseSchedule(reason) => {
                Outcome::from_changed(self.competitions.close_schedule(reason))
            }
            Action::SelectDay(day) => Outcome::from_changed(self.competitions.select_day(day)),
            Action::NextDay => self.step_day(ScheduleDay::next),
            Action::PreviousDay => self.step_day(ScheduleDay::previous),
            Action::OpenBooking => {
                self.navigation.close_menu(CloseReason::Navigation);
                self.passes.open();
                Outcome::Changed
            }
            Action::CloseBooking(reason) => Outcome::from_changed(self.passes.close(reason)),
            Action::EditField(field, value) => {
                Outcome::from_changed(self.passes.edit(field, &value))
            }
            Action::SelectPass(pass) => Outcome::from_changed(self.passes.select_pass(pass)),
            Action::SubmitReservation => {
                let ticket = self.passes.submit()?;
                Outcome::SubmissionStarted {
                    ticket,
                    delay: self.params.submit_delay,
                }
            }
            Action::CompleteSubmission(ticket) => {
                Outcome::from_changed(self.passes.complete(ticket))
            }
            Action::ToggleMenu => {
                self.navigation.toggle_menu();
                Outcome::Changed
            }
            Action::CloseMenu(reason) => {
                Outcome::from_changed(self.navigation.close_menu(reason))
            }
            Action::Navigate(anchor) => Outcome::ScrollTo(self.navigation.follow(anchor)),
            Action::Escape => self.escape(),
        };
        Ok(outcome)
    }

    /// Arrow keys flip schedule days, but only while the popup is showing.
    fn step_day(&mut self, step: fn(ScheduleDay) -> ScheduleDay) -> Outcome {
        if !self.competitions.schedule_open() {
            return Outcome::Unchanged;
        }
        let day = step(self.competitions.active_day());
        Outcome::from_changed(self.competitions.select_day(day))
    }

    fn escape(&mut self) -> Outcome {
        let Some(top) = self.hub.topmost() else {
            return Outcome::Unchanged;
        };
        let reason = CloseReason::Escape;
        let changed = match top {
            SurfaceId::ArtistDetail => self.lineup.close(reason),
            SurfaceId::EventDetail => self.competitions.close_event(reason),
            SurfaceId::Schedule => self.competitions.close_schedule(reason),
            SurfaceId::Booking => self.passes.close(reason),
            SurfaceId::MobileMenu => self.navigation.close_menu(reason),
        };
        Outcome::from_changed(changed)
    }

    pub fn hub(&self) -> &OverlayHub {
        &self.hub
    }

    pub fn params(&self) -> &SiteParams {
        &self.params
    }
}
