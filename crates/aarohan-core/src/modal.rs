use crate::hub::SurfaceHandle;
use crate::overlay::SurfaceId;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ModalState<P> {
    Closed,
    Open(P),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CloseReason {
    CloseButton,
    Backdrop,
    Escape,
    Navigation,
}

/// Result of asking a modal to open.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    Opened,
    /// Already open; the payload was swapped for a different one.
    Replaced,
    Unchanged,
}

/// One modal surface: `Closed -> Open(payload) -> Closed`.
///
/// Every call reports the resulting open flag through the surface handle.
/// The registry treats repeated reports as no-ops.
pub struct Modal<P> {
    state: ModalState<P>,
    surface: SurfaceHandle,
}

impl<P: PartialEq> Modal<P> {
    pub fn new(surface: SurfaceHandle) -> Self {
        Self {
            state: ModalState::Closed,
            surface,
        }
    }

    pub fn open(&mut self, payload: P) -> Transition {
        let transition = match &self.state {
            ModalState::Closed => Transition::Opened,
            ModalState::Open(current) if *current == payload => Transition::Unchanged,
            ModalState::Open(_) => Transition::Replaced,
        };
        self.state = ModalState::Open(payload);
        self.surface.report(true);
        transition
    }

    /// Close the modal. Returns `false` when it was already closed.
    pub fn close(&mut self, reason: CloseReason) -> bool {
        let was_open = self.is_open();
        self.state = ModalState::Closed;
        self.surface.report(false);
        if was_open {
            log::debug!("[modal] {} closed ({:?})", self.surface.id().name(), reason);
        }
        was_open
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, ModalState::Open(_))
    }

    pub fn payload(&self) -> Option<&P> {
        match &self.state {
            ModalState::Open(p) => Some(p),
            ModalState::Closed => None,
        }
    }

    pub fn state(&self) -> &ModalState<P> {
        &self.state
    }

    pub fn id(&self) -> SurfaceId {
        self.surface.id()
    }
}
