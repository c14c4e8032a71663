// Host-side tests for section behaviour routed through `Site::apply`.

mod common;

use aarohan_core::content::{Anchor, ScheduleDay, ARTISTS, EVENTS, FOOTER_EXPLORE, NAV_LINKS};
use aarohan_core::input::action_for_key;
use aarohan_core::{Action, CloseReason, Outcome, Site, SiteError, SiteParams, SurfaceId};
use common::{harness, Harness};

fn site() -> (Site, Harness) {
    let h = harness();
    let site = Site::new(h.hub.clone(), SiteParams::default());
    (site, h)
}

#[test]
fn every_section_registers_closed() {
    let (_site, h) = site();
    for id in SurfaceId::ALL {
        assert!(h.hub.is_registered(id), "{}", id.name());
        assert!(!h.hub.is_open(id));
    }
    assert!(!h.hub.is_locked());
    assert!(h.hub.driver_running());
}

#[test]
fn artist_click_locks_and_backdrop_unlocks() {
    let (mut site, h) = site();
    site.apply(Action::SelectArtist(1)).expect("select");
    assert_eq!(site.lineup.selected().map(|a| a.name), Some(ARTISTS[1].name));
    assert!(h.hub.is_locked());
    assert!(h.frozen());
    assert!(!h.hub.driver_running());

    let out = site
        .apply(Action::CloseArtist(CloseReason::Backdrop))
        .expect("close");
    assert_eq!(out, Outcome::Changed);
    assert!(site.lineup.selected().is_none());
    assert!(!h.hub.is_locked());
    assert!(!h.frozen());
    assert!(h.hub.driver_running());
}

#[test]
fn unknown_card_index_is_an_error() {
    let (mut site, h) = site();
    assert_eq!(
        site.apply(Action::SelectArtist(ARTISTS.len())),
        Err(SiteError::UnknownItem {
            section: "lineup",
            index: ARTISTS.len()
        })
    );
    assert!(matches!(
        site.apply(Action::SelectEvent(EVENTS.len())),
        Err(SiteError::UnknownItem { .. })
    ));
    assert!(!h.hub.any_open());
}

#[test]
fn event_detail_shows_selected_event() {
    let (mut site, h) = site();
    site.apply(Action::SelectEvent(2)).expect("select");
    assert!(site.competitions.event_open());
    assert_eq!(
        site.competitions.selected_event().map(|e| e.title),
        Some(EVENTS[2].title)
    );
    assert!(h.hub.is_locked());
    site.apply(Action::CloseEvent(CloseReason::CloseButton))
        .expect("close");
    assert!(!h.hub.is_locked());
}

#[test]
fn schedule_day_survives_close_and_reopen() {
    let (mut site, _h) = site();
    site.apply(Action::OpenSchedule).expect("open");
    assert_eq!(site.competitions.active_day(), ScheduleDay::Day1);
    assert_eq!(
        site.apply(Action::SelectDay(ScheduleDay::Day2)),
        Ok(Outcome::Changed)
    );
    assert_eq!(
        site.apply(Action::SelectDay(ScheduleDay::Day2)),
        Ok(Outcome::Unchanged)
    );
    site.apply(Action::CloseSchedule(CloseReason::Backdrop))
        .expect("close");
    site.apply(Action::OpenSchedule).expect("reopen");
    assert_eq!(site.competitions.active_day(), ScheduleDay::Day2);
    assert_eq!(
        site.competitions.schedule_items().len(),
        ScheduleDay::Day2.items().len()
    );
}

#[test]
fn arrow_keys_step_days_only_while_schedule_is_open() {
    let (mut site, _h) = site();
    assert_eq!(site.apply(Action::NextDay), Ok(Outcome::Unchanged));
    assert_eq!(site.competitions.active_day(), ScheduleDay::Day1);

    site.apply(Action::OpenSchedule).expect("open");
    assert_eq!(site.apply(Action::NextDay), Ok(Outcome::Changed));
    assert_eq!(site.competitions.active_day(), ScheduleDay::Day2);
    // two days, so stepping wraps around
    assert_eq!(site.apply(Action::NextDay), Ok(Outcome::Changed));
    assert_eq!(site.competitions.active_day(), ScheduleDay::Day1);
    assert_eq!(site.apply(Action::PreviousDay), Ok(Outcome::Changed));
    assert_eq!(site.competitions.active_day(), ScheduleDay::Day2);
}

#[test]
fn escape_closes_most_recent_surface_first() {
    let (mut site, h) = site();
    site.apply(Action::OpenSchedule).expect("schedule");
    site.apply(Action::OpenBooking).expect("booking");
    assert_eq!(h.hub.topmost(), Some(SurfaceId::Booking));

    assert_eq!(site.apply(Action::Escape), Ok(Outcome::Changed));
    assert!(!site.passes.is_open());
    assert!(site.competitions.schedule_open());
    assert!(h.hub.is_locked());

    assert_eq!(site.apply(Action::Escape), Ok(Outcome::Changed));
    assert!(!site.competitions.schedule_open());
    assert!(!h.hub.is_locked());

    assert_eq!(site.apply(Action::Escape), Ok(Outcome::Unchanged));
}

#[test]
fn keys_map_to_actions() {
    assert_eq!(action_for_key("Escape"), Some(Action::Escape));
    assert_eq!(action_for_key("Esc"), Some(Action::Escape));
    assert_eq!(action_for_key("ArrowRight"), Some(Action::NextDay));
    assert_eq!(action_for_key("ArrowLeft"), Some(Action::PreviousDay));
    assert_eq!(action_for_key("Enter"), None);
}

#[test]
fn mobile_menu_counts_as_an_overlay() {
    let (mut site, h) = site();
    site.apply(Action::ToggleMenu).expect("toggle");
    assert!(site.navigation.menu_open());
    assert!(h.hub.is_locked());
    site.apply(Action::ToggleMenu).expect("toggle");
    assert!(!site.navigation.menu_open());
    assert!(!h.hub.is_locked());
}

#[test]
fn menu_close_button_only_ever_closes() {
    let (mut site, h) = site();
    assert_eq!(
        site.apply(Action::CloseMenu(CloseReason::CloseButton)),
        Ok(Outcome::Unchanged)
    );
    assert!(!site.navigation.menu_open());
    assert!(!h.hub.is_locked());

    site.apply(Action::ToggleMenu).expect("toggle");
    assert_eq!(
        site.apply(Action::CloseMenu(CloseReason::CloseButton)),
        Ok(Outcome::Changed)
    );
    assert!(!site.navigation.menu_open());
    assert!(!h.hub.is_locked());

    // a repeated dismissal does not reopen it
    assert_eq!(
        site.apply(Action::CloseMenu(CloseReason::Backdrop)),
        Ok(Outcome::Unchanged)
    );
    assert!(!site.navigation.menu_open());
}

#[test]
fn navigating_closes_menu_and_scrolls() {
    let (mut site, h) = site();
    site.apply(Action::ToggleMenu).expect("toggle");
    assert_eq!(
        site.apply(Action::Navigate(Anchor::Lineup)),
        Ok(Outcome::ScrollTo(Anchor::Lineup))
    );
    assert!(!site.navigation.menu_open());
    assert!(!h.hub.is_locked());
    assert!(h.hub.driver_running());
}

#[test]
fn booking_from_menu_swaps_menu_for_modal() {
    let (mut site, h) = site();
    site.apply(Action::ToggleMenu).expect("toggle");
    site.apply(Action::OpenBooking).expect("book");
    assert!(!site.navigation.menu_open());
    assert!(site.passes.is_open());
    assert_eq!(h.hub.topmost(), Some(SurfaceId::Booking));
    // the lock never dropped in between
    assert_eq!(h.calls.borrow().freezes, 1);
    assert_eq!(h.calls.borrow().releases, 0);
}

#[test]
fn dropping_the_site_while_open_unlocks() {
    let (mut site, h) = site();
    site.apply(Action::SelectArtist(0)).expect("select");
    site.apply(Action::OpenSchedule).expect("schedule");
    drop(site);
    assert!(!h.hub.any_open());
    assert!(!h.hub.is_locked());
    assert!(!h.frozen());
}

#[test]
fn anchors_resolve_from_hrefs() {
    assert_eq!(Anchor::from_href("#"), Some(Anchor::Hero));
    assert_eq!(Anchor::from_href(""), Some(Anchor::Hero));
    assert_eq!(Anchor::from_href("#gallery"), Some(Anchor::Gallery));
    assert_eq!(Anchor::from_href("passes"), Some(Anchor::Passes));
    assert_eq!(Anchor::from_href("#tickets"), None);
    for a in Anchor::ALL {
        assert_eq!(Anchor::from_href(a.id()), Some(a));
    }
}

#[test]
fn content_tables_are_populated() {
    assert_eq!(EVENTS.len(), 4);
    assert_eq!(ARTISTS.len(), 3);
    for day in ScheduleDay::ALL {
        assert_eq!(day.items().len(), 5);
        assert_eq!(ScheduleDay::from_label(day.label()), Some(day));
    }
    assert!(NAV_LINKS.iter().all(|l| l.anchor.is_some()));
    assert!(FOOTER_EXPLORE.iter().any(|l| l.anchor.is_some()));
}
