//! Browser-independent animation state for the page.
//!
//! The components under `app` own the signals and the browser subscriptions;
//! the transitions and the class/transform strings they render come from here.

pub mod cursor;
pub mod hero;
pub mod reveal;

pub use cursor::{CursorStyle, HoverEvent, PointerPosition};
pub use hero::{Entrance, Stagger};
pub use reveal::{RevealEvent, RevealState};
