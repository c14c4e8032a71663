//! Scroll locking and the smooth-scroll driver.
//!
//! `ScrollLockController` is the only owner of the viewport lock and of the
//! driver. Everything else reaches them through `OverlayHub`.

use crate::constants::{
    SCROLL_LERP, SCROLL_REFERENCE_FPS, SCROLL_SETTLE_EPSILON, SCROLL_WHEEL_MULTIPLIER,
};

/// Viewport-level scroll suppression (e.g. `overflow: hidden` on the page).
pub trait ViewportLock {
    fn freeze(&mut self);
    fn release(&mut self);
}

/// A per-frame scroll animation that can be paused while a modal is up.
pub trait ScrollDriver {
    fn start(&mut self);
    fn stop(&mut self);
    fn is_running(&self) -> bool;
    /// Advance one frame. Returns the new offset when the position moved.
    fn tick(&mut self, dt_sec: f32) -> Option<f32>;
    fn wheel(&mut self, delta_px: f32);
    fn scroll_to(&mut self, target_px: f32, immediate: bool);
}

/// Eased scrolling toward a target offset.
///
/// Wheel input moves the target; every tick closes a fixed fraction of the
/// remaining distance (normalised to 60 Hz) until it settles.
#[derive(Clone, Debug)]
pub struct SmoothScroll {
    current: f32,
    target: f32,
    limit: f32,
    lerp: f32,
    wheel_multiplier: f32,
    running: bool,
    animating: bool,
}

impl Default for SmoothScroll {
    fn default() -> Self {
        Self::new(SCROLL_LERP, SCROLL_WHEEL_MULTIPLIER)
    }
}

impl SmoothScroll {
    pub fn new(lerp: f32, wheel_multiplier: f32) -> Self {
        Self {
            current: 0.0,
            target: 0.0,
            limit: f32::MAX,
            lerp: lerp.clamp(0.001, 1.0),
            wheel_multiplier,
            running: true,
            animating: false,
        }
    }

    /// Largest reachable offset (document height minus viewport height).
    pub fn set_limit(&mut self, limit_px: f32) {
        self.limit = limit_px.max(0.0);
        self.target = self.target.clamp(0.0, self.limit);
        self.current = self.current.clamp(0.0, self.limit);
    }

    /// Adopt an offset that changed outside the driver (scrollbar drag,
    /// keyboard paging). Ignored mid-animation.
    pub fn sync(&mut self, actual_px: f32) {
        if !self.animating {
            self.current = actual_px.clamp(0.0, self.limit);
            self.target = self.current;
        }
    }

    pub fn position(&self) -> f32 {
        self.current
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn is_animating(&self) -> bool {
        self.animating
    }
}

impl ScrollDriver for SmoothScroll {
    fn start(&mut self) {
        self.running = true;
    }

    fn stop(&mut self) {
        self.running = false;
        self.target = self.current;
        self.animating = false;
    }

    fn is_running(&self) -> bool {
        self.running
    }

    fn tick(&mut self, dt_sec: f32) -> Option<f32> {
        if !self.running || !self.animating {
            return None;
        }
        let alpha = 1.0 - (-self.lerp * SCROLL_REFERENCE_FPS * dt_sec.max(0.0)).exp();
        self.current += (self.target - self.current) * alpha;
        if (self.target - self.current).abs() < SCROLL_SETTLE_EPSILON {
            self.current = self.target;
            self.animating = false;
        }
        Some(self.current)
    }

    fn wheel(&mut self, delta_px: f32) {
        if !self.running {
            return;
        }
        self.target = (self.target + delta_px * self.wheel_multiplier).clamp(0.0, self.limit);
        self.animating = self.target != self.current;
    }

    fn scroll_to(&mut self, target_px: f32, immediate: bool) {
        if !self.running {
            return;
        }
        self.target = target_px.clamp(0.0, self.limit);
        if immediate {
            self.current = self.target;
            self.animating = false;
        } else {
            self.animating = self.target != self.current;
        }
    }
}

/// Turns the overlay aggregate into the two page-level side effects.
pub struct ScrollLockController {
    viewport: Box<dyn ViewportLock>,
    driver: Box<dyn ScrollDriver>,
    locked: bool,
}

impl ScrollLockController {
    pub fn new(viewport: Box<dyn ViewportLock>, mut driver: Box<dyn ScrollDriver>) -> Self {
        driver.start();
        Self {
            viewport,
            driver,
            locked: false,
        }
    }

    /// Bring the lock in line with `any_open`. Returns whether anything changed.
    pub fn apply(&mut self, any_open: bool) -> bool {
        if any_open == self.locked {
            return false;
        }
        if any_open {
            self.viewport.freeze();
            self.driver.stop();
        } else {
            self.viewport.release();
            self.driver.start();
        }
        self.locked = any_open;
        log::debug!("[scroll] locked={}", self.locked);
        true
    }

    /// Release the lock and restart the driver whatever the current state.
    pub fn teardown(&mut self) {
        self.viewport.release();
        self.driver.start();
        self.locked = false;
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn driver_running(&self) -> bool {
        self.driver.is_running()
    }

    pub fn tick(&mut self, dt_sec: f32) -> Option<f32> {
        self.driver.tick(dt_sec)
    }

    pub fn wheel(&mut self, delta_px: f32) {
        self.driver.wheel(delta_px);
    }

    pub fn scroll_to(&mut self, target_px: f32, immediate: bool) {
        self.driver.scroll_to(target_px, immediate);
    }
}

impl Drop for ScrollLockController {
    fn drop(&mut self) {
        if self.locked {
            self.teardown();
        }
    }
}
