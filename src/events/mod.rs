pub mod clicks;
pub mod form;
pub mod keyboard;
pub mod pointer;

pub use clicks::wire_clicks;
pub use form::wire_booking_form;
pub use keyboard::wire_global_keydown;
pub use pointer::{wire_pointer_handlers, PointerWiring};
