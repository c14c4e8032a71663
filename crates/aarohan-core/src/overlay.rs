//! Aggregation of "is any overlay open" across independently owned sections.
//!
//! Sections never talk to each other. Each one reports the latest state of its
//! own surfaces here and the registry answers a single question: is anything
//! open right now. The answer is always derived from the reports, never stored.

use fnv::FnvHashMap;
use smallvec::SmallVec;

/// Every modal-like surface on the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SurfaceId {
    ArtistDetail,
    EventDetail,
    Schedule,
    Booking,
    MobileMenu,
}

impl SurfaceId {
    pub const ALL: [SurfaceId; 5] = [
        SurfaceId::ArtistDetail,
        SurfaceId::EventDetail,
        SurfaceId::Schedule,
        SurfaceId::Booking,
        SurfaceId::MobileMenu,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SurfaceId::ArtistDetail => "artist-detail",
            SurfaceId::EventDetail => "event-detail",
            SurfaceId::Schedule => "schedule",
            SurfaceId::Booking => "booking",
            SurfaceId::MobileMenu => "mobile-menu",
        }
    }
}

/// Aggregate state before and after a single report.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OverlayChange {
    pub was_open: bool,
    pub now_open: bool,
}

impl OverlayChange {
    #[inline]
    pub fn is_edge(&self) -> bool {
        self.was_open != self.now_open
    }

    #[inline]
    pub fn opened(&self) -> bool {
        !self.was_open && self.now_open
    }

    #[inline]
    pub fn closed(&self) -> bool {
        self.was_open && !self.now_open
    }
}

/// One registration of a surface. A surface id may be registered more than
/// once while a section is remounted; each registration reports separately.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Registration {
    id: SurfaceId,
    serial: u64,
}

impl Registration {
    pub fn id(&self) -> SurfaceId {
        self.id
    }
}

#[derive(Debug, Default)]
pub struct OverlayRegistry {
    reports: FnvHashMap<Registration, bool>,
    next_serial: u64,
    // open registrations, oldest first; Escape dismisses the last one
    open_order: SmallVec<[Registration; 4]>,
}

impl OverlayRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a closed report for `id` and return its registration.
    pub fn register(&mut self, id: SurfaceId) -> Registration {
        let reg = Registration {
            id,
            serial: self.next_serial,
        };
        self.next_serial += 1;
        self.reports.insert(reg, false);
        reg
    }

    /// Record the latest state reported by `reg`. Reporting the same state
    /// twice changes nothing. Reports from a retracted registration are ignored.
    pub fn notify_open_changed(&mut self, reg: Registration, is_open: bool) -> OverlayChange {
        let was_open = self.any_open();
        let Some(slot) = self.reports.get_mut(&reg) else {
            return OverlayChange {
                was_open,
                now_open: was_open,
            };
        };
        *slot = is_open;
        if is_open {
            if !self.open_order.contains(&reg) {
                self.open_order.push(reg);
            }
        } else {
            self.open_order.retain(|r| *r != reg);
        }
        OverlayChange {
            was_open,
            now_open: self.any_open(),
        }
    }

    /// Forget `reg` entirely. Its last report no longer counts; other
    /// registrations of the same surface are untouched.
    pub fn retract(&mut self, reg: Registration) -> OverlayChange {
        let was_open = self.any_open();
        self.reports.remove(&reg);
        self.open_order.retain(|r| *r != reg);
        OverlayChange {
            was_open,
            now_open: self.any_open(),
        }
    }

    pub fn any_open(&self) -> bool {
        self.reports.values().any(|open| *open)
    }

    pub fn open_count(&self) -> usize {
        self.reports.values().filter(|open| **open).count()
    }

    pub fn is_open(&self, id: SurfaceId) -> bool {
        self.reports.iter().any(|(r, open)| r.id == id && *open)
    }

    pub fn is_registered(&self, id: SurfaceId) -> bool {
        self.reports.keys().any(|r| r.id == id)
    }

    pub fn registered_count(&self) -> usize {
        self.reports.len()
    }

    /// Most recently opened surface that is still open.
    pub fn topmost(&self) -> Option<SurfaceId> {
        self.open_order.last().map(|r| r.id)
    }
}
