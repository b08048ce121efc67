//! Folio Window System
//!
//! State and behavior behind the desktop shell: which windows are open, how
//! they stack, and what each panel shows.
//!
//! # Core Concepts
//!
//! - [`WindowRegistry`]: fixed table of window entries with open/close/focus
//! - [`WindowStore`]: shared, observable handle to a registry (cloned into every consumer)
//! - [`WindowPayload`]: typed per-panel data passed at open time
//! - [`WindowFrame`]: generic container adding visibility, entrance and drag to any [`Panel`]
//! - [`catalog`]: static navigation, dock and Finder content
//! - [`Desktop`], [`Dock`], [`NavBar`]: shell entry points that open windows
//!
//! # Example
//!
//! ```rust
//! use folio_windows::{WindowId, WindowStore, INITIAL_Z_INDEX};
//!
//! let store = WindowStore::new();
//! store.open(WindowId::Finder, None);
//! store.open(WindowId::Contact, None);
//! store.focus(WindowId::Finder);
//!
//! assert_eq!(store.z_index(WindowId::Finder), INITIAL_Z_INDEX + 3);
//! assert_eq!(store.topmost(), Some(WindowId::Finder));
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod catalog;
pub mod hover;
pub mod panels;

mod frame;
mod id;
mod payload;
mod registry;
mod shell;
mod store;

// Re-exports
pub use frame::{Entrance, Panel, Point, Transform, WindowFrame, DEFAULT_HEADER_HEIGHT};
pub use id::{ParseWindowIdError, WindowId};
pub use payload::{ImageFile, TextFile, WindowPayload};
pub use registry::{WindowEntry, WindowRegistry, INITIAL_Z_INDEX};
pub use shell::{Desktop, Dock, NavBar, WindowControls};
pub use store::{WindowEvent, WindowEventKind, WindowStore};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
