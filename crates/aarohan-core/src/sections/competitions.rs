use crate::content::{Event, ScheduleDay, ScheduleItem, EVENTS};
use crate::error::{Result, SiteError};
use crate::hub::OverlayHub;
use crate::modal::{CloseReason, Modal, Transition};
use crate::overlay::SurfaceId;

/// Competition cards, the event detail modal and the schedule popup.
///
/// The schedule's active day lives outside the popup's modal state, so the
/// last chosen day is still selected when the popup is reopened.
pub struct Competitions {
    events: &'static [Event],
    detail: Modal<usize>,
    schedule: Modal<()>,
    active_day: ScheduleDay,
}

impl Competitions {
    pub fn new(hub: &OverlayHub) -> Self {
        Self {
            events: EVENTS,
            detail: Modal::new(hub.register(SurfaceId::EventDetail)),
            schedule: Modal::new(hub.register(SurfaceId::Schedule)),
            active_day: ScheduleDay::default(),
        }
    }

    pub fn select_event(&mut self, index: usize) -> Result<Transition> {
        if index >= self.events.len() {
            return Err(SiteError::UnknownItem {
                section: "competitions",
                index,
            });
        }
        log::info!("[competitions] open {}", self.events[index].title);
        Ok(self.detail.open(index))
    }

    pub fn close_event(&mut self, reason: CloseReason) -> bool {
        self.detail.close(reason)
    }

    pub fn open_schedule(&mut self) -> Transition {
        self.schedule.open(())
    }

    pub fn close_schedule(&mut self, reason: CloseReason) -> bool {
        self.schedule.close(reason)
    }

    pub fn select_day(&mut self, day: ScheduleDay) -> bool {
        if self.active_day == day {
            return false;
        }
        self.active_day = day;
        true
    }

    pub fn selected_event(&self) -> Option<&'static Event> {
        let events = self.events;
        self.detail.payload().map(|i| &events[*i])
    }

    pub fn event_open(&self) -> bool {
        self.detail.is_open()
    }

    pub fn schedule_open(&self) -> bool {
        self.schedule.is_open()
    }

    pub fn active_day(&self) -> ScheduleDay {
        self.active_day
    }

    pub fn schedule_items(&self) -> &'static [ScheduleItem] {
        self.active_day.items()
    }

    pub fn events(&self) -> &'static [Event] {
        self.events
    }
}
