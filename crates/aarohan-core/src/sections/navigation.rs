use crate::content::Anchor;
use crate::hub::OverlayHub;
use crate::modal::{CloseReason, Modal};
use crate::overlay::SurfaceId;

/// Top navigation with its full-screen mobile menu.
pub struct Navigation {
    menu: Modal<()>,
}

impl Navigation {
    pub fn new(hub: &OverlayHub) -> Self {
        Self {
            menu: Modal::new(hub.register(SurfaceId::MobileMenu)),
        }
    }

    pub fn toggle_menu(&mut self) -> bool {
        if self.menu.is_open() {
            self.menu.close(CloseReason::CloseButton);
        } else {
            self.menu.open(());
        }
        self.menu.is_open()
    }

    pub fn close_menu(&mut self, reason: CloseReason) -> bool {
        self.menu.close(reason)
    }

    /// Following a link always dismisses the menu first.
    pub fn follow(&mut self, anchor: Anchor) -> Anchor {
        self.menu.close(CloseReason::Navigation);
        log::info!("[nav] -> #{}", anchor.id());
        anchor
    }

    pub fn menu_open(&self) -> bool {
        self.menu.is_open()
    }
}
