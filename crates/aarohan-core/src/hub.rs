//! The single notification channel between sections and the scroll lock.
//!
//! Sections hold a `SurfaceHandle` per modal surface. Dropping the handle
//! retracts the surface's report, so a section that goes away while open can
//! never leave the page locked.

use std::cell::RefCell;
use std::rc::Rc;

use crate::overlay::{OverlayChange, OverlayRegistry, Registration, SurfaceId};
use crate::scroll::ScrollLockController;

type Listener = Box<dyn FnMut(bool)>;

struct HubInner {
    registry: OverlayRegistry,
    controller: ScrollLockController,
    listeners: Vec<Listener>,
}

/// Shared owner of the overlay registry and the scroll-lock controller.
#[derive(Clone)]
pub struct OverlayHub {
    inner: Rc<RefCell<HubInner>>,
    // retractions from handles dropped while `inner` was borrowed
    deferred: Rc<RefCell<Vec<Registration>>>,
}

impl OverlayHub {
    pub fn new(controller: ScrollLockController) -> Self {
        Self {
            inner: Rc::new(RefCell::new(HubInner {
                registry: OverlayRegistry::new(),
                controller,
                listeners: Vec::new(),
            })),
            deferred: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Register a surface and announce it closed.
    ///
    /// Registering an id that is already registered is allowed; a remounted
    /// section is built before the old one is dropped. Each handle only ever
    /// speaks for its own registration.
    pub fn register(&self, id: SurfaceId) -> SurfaceHandle {
        let reg = {
            let mut inner = self.inner.borrow_mut();
            if inner.registry.is_registered(id) {
                log::debug!("[overlay] {} registered again", id.name());
            }
            inner.registry.register(id)
        };
        SurfaceHandle {
            reg,
            hub: self.clone(),
        }
    }

    /// Call `listener` with the new aggregate whenever it flips.
    pub fn subscribe(&self, listener: impl FnMut(bool) + 'static) {
        self.inner.borrow_mut().listeners.push(Box::new(listener));
    }

    fn report(&self, reg: Registration, is_open: bool) -> OverlayChange {
        let change = {
            let mut inner = self.inner.borrow_mut();
            let change = inner.registry.notify_open_changed(reg, is_open);
            inner.controller.apply(change.now_open);
            change
        };
        if change.is_edge() {
            log::info!(
                "[overlay] {} open={} -> any_open={}",
                reg.id().name(),
                is_open,
                change.now_open
            );
            self.notify_listeners(change.now_open);
        }
        self.drain_deferred();
        change
    }

    fn retract(&self, reg: Registration) {
        let change = match self.inner.try_borrow_mut() {
            Ok(mut inner) => {
                let change = inner.registry.retract(reg);
                inner.controller.apply(change.now_open);
                change
            }
            Err(_) => {
                log::debug!("[overlay] hub busy, deferring retraction of {}", reg.id().name());
                self.deferred.borrow_mut().push(reg);
                return;
            }
        };
        if change.is_edge() {
            log::info!("[overlay] {} retracted -> any_open=false", reg.id().name());
            self.notify_listeners(change.now_open);
        }
        self.drain_deferred();
    }

    fn drain_deferred(&self) {
        loop {
            let next = self.deferred.borrow_mut().pop();
            let Some(reg) = next else { break };
            self.retract(reg);
        }
    }

    fn notify_listeners(&self, any_open: bool) {
        // Listeners run outside the borrow so they may query the hub.
        let mut listeners = std::mem::take(&mut self.inner.borrow_mut().listeners);
        for listener in listeners.iter_mut() {
            listener(any_open);
        }
        let mut inner = self.inner.borrow_mut();
        listeners.append(&mut inner.listeners);
        inner.listeners = listeners;
    }

    pub fn any_open(&self) -> bool {
        self.inner.borrow().registry.any_open()
    }

    pub fn open_count(&self) -> usize {
        self.inner.borrow().registry.open_count()
    }

    pub fn is_open(&self, id: SurfaceId) -> bool {
        self.inner.borrow().registry.is_open(id)
    }

    pub fn is_registered(&self, id: SurfaceId) -> bool {
        self.inner.borrow().registry.is_registered(id)
    }

    pub fn topmost(&self) -> Option<SurfaceId> {
        self.inner.borrow().registry.topmost()
    }

    pub fn is_locked(&self) -> bool {
        self.inner.borrow().controller.is_locked()
    }

    pub fn driver_running(&self) -> bool {
        self.inner.borrow().controller.driver_running()
    }

    pub fn tick_scroll(&self, dt_sec: f32) -> Option<f32> {
        self.inner.borrow_mut().controller.tick(dt_sec)
    }

    pub fn wheel(&self, delta_px: f32) {
        self.inner.borrow_mut().controller.wheel(delta_px);
    }

    pub fn scroll_to(&self, target_px: f32, immediate: bool) {
        self.inner.borrow_mut().controller.scroll_to(target_px, immediate);
    }

    /// Unconditionally unlock; used when the page is torn down.
    pub fn teardown(&self) {
        self.inner.borrow_mut().controller.teardown();
        self.drain_deferred();
    }
}

/// Registration of one surface. Retracts its report when dropped.
pub struct SurfaceHandle {
    reg: Registration,
    hub: OverlayHub,
}

impl SurfaceHandle {
    pub fn id(&self) -> SurfaceId {
        self.reg.id()
    }

    pub fn report(&self, is_open: bool) -> OverlayChange {
        self.hub.report(self.reg, is_open)
    }
}

impl Drop for SurfaceHandle {
    fn drop(&mut self) {
        self.hub.retract(self.reg);
    }
}
