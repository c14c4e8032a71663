pub mod constants;
pub mod content;
pub mod error;
pub mod hub;
pub mod input;
pub mod modal;
pub mod overlay;
pub mod reservation;
pub mod scene;
pub mod scroll;
pub mod sections;
pub mod site;

pub use error::*;
pub use hub::{OverlayHub, SurfaceHandle};
pub use modal::{CloseReason, Modal, ModalState, Transition};
pub use overlay::{OverlayChange, OverlayRegistry, Registration, SurfaceId};
pub use reservation::*;
pub use scroll::{ScrollDriver, ScrollLockController, SmoothScroll, ViewportLock};
pub use site::{Action, Outcome, Site, SiteParams};
