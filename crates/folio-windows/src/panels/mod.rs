//! Panels hosted by window frames
//!
//! Each panel implements [`Panel`](crate::Panel). Panels that act on the
//! desktop (Finder, Photos) take the [`WindowStore`](crate::WindowStore) as an
//! argument rather than holding one.

mod contact;
mod finder;
mod photos;
mod terminal;
mod viewers;

pub use contact::{Contact, ContactView};
pub use finder::{Finder, FinderAction, FinderView, LocationStore, SidebarEntry};
pub use photos::{Photos, PhotosView};
pub use terminal::{Terminal, TerminalView};
pub use viewers::{ImageView, ImageViewer, TextView, TextViewer};
