// Shared fakes for host-side tests. Records every call the scroll-lock
// controller makes so tests can assert on side effects, not just flags.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use aarohan_core::{OverlayHub, ScrollDriver, ScrollLockController, SmoothScroll, ViewportLock};

#[derive(Debug, Default)]
pub struct Calls {
    pub freezes: usize,
    pub releases: usize,
    pub starts: usize,
    pub stops: usize,
}

pub type CallLog = Rc<RefCell<Calls>>;

pub struct FakeViewport {
    calls: CallLog,
    pub frozen: Rc<RefCell<bool>>,
}

impl ViewportLock for FakeViewport {
    fn freeze(&mut self) {
        self.calls.borrow_mut().freezes += 1;
        *self.frozen.borrow_mut() = true;
    }

    fn release(&mut self) {
        self.calls.borrow_mut().releases += 1;
        *self.frozen.borrow_mut() = false;
    }
}

/// Wraps a real `SmoothScroll` and counts start/stop.
pub struct FakeDriver {
    calls: CallLog,
    inner: SmoothScroll,
}

impl ScrollDriver for FakeDriver {
    fn start(&mut self) {
        self.calls.borrow_mut().starts += 1;
        self.inner.start();
    }

    fn stop(&mut self) {
        self.calls.borrow_mut().stops += 1;
        self.inner.stop();
    }

    fn is_running(&self) -> bool {
        self.inner.is_running()
    }

    fn tick(&mut self, dt_sec: f32) -> Option<f32> {
        self.inner.tick(dt_sec)
    }

    fn wheel(&mut self, delta_px: f32) {
        self.inner.wheel(delta_px);
    }

    fn scroll_to(&mut self, target_px: f32, immediate: bool) {
        self.inner.scroll_to(target_px, immediate);
    }
}

pub struct Harness {
    pub hub: OverlayHub,
    pub calls: CallLog,
    pub frozen: Rc<RefCell<bool>>,
}

impl Harness {
    pub fn frozen(&self) -> bool {
        *self.frozen.borrow()
    }
}

pub fn controller() -> (ScrollLockController, CallLog, Rc<RefCell<bool>>) {
    let calls: CallLog = Rc::new(RefCell::new(Calls::default()));
    let frozen = Rc::new(RefCell::new(false));
    let controller = ScrollLockController::new(
        Box::new(FakeViewport {
            calls: calls.clone(),
            frozen: frozen.clone(),
        }),
        Box::new(FakeDriver {
            calls: calls.clone(),
            inner: SmoothScroll::default(),
        }),
    );
    (controller, calls, frozen)
}

pub fn harness() -> Harness {
    let (controller, calls, frozen) = controller();
    Harness {
        hub: OverlayHub::new(controller),
        calls,
        frozen,
    }
}
