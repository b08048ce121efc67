//! Shared window store
//!
//! Provides [`WindowStore`], a cloneable handle to one [`WindowRegistry`].
//! Every panel, the dock and the nav bar receive a clone instead of reaching
//! for a global.

use crate::id::WindowId;
use crate::payload::WindowPayload;
use crate::registry::{parse_known, WindowEntry, WindowRegistry};
use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;

/// What happened to a window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowEventKind {
    /// Window became (or stayed) visible and was raised
    Opened,
    /// Window was hidden and reset
    Closed,
    /// Window was raised
    Focused,
}

/// Notification sent to store listeners after each mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowEvent {
    /// Affected window
    pub id: WindowId,
    /// Kind of mutation
    pub kind: WindowEventKind,
    /// Stacking value after the mutation
    pub z_index: i32,
}

type Listener = Arc<dyn Fn(&WindowEvent) + Send + Sync>;

/// Cloneable, observable handle to a window registry
///
/// Clones share the same registry.
#[derive(Clone, Default)]
pub struct WindowStore {
    registry: Arc<RwLock<WindowRegistry>>,
    listeners: Arc<RwLock<Vec<Listener>>>,
}

impl WindowStore {
    /// Store over a fresh registry
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store over an existing registry
    #[must_use]
    pub fn with_registry(registry: WindowRegistry) -> Self {
        Self {
            registry: Arc::new(RwLock::new(registry)),
            listeners: Arc::default(),
        }
    }

    /// Register a listener called after every mutation of a known window
    pub fn subscribe<F>(&self, listener: F)
    where
        F: Fn(&WindowEvent) + Send + Sync + 'static,
    {
        self.listeners.write().push(Arc::new(listener));
    }

    /// Open a window on top
    pub fn open(&self, id: WindowId, data: Option<WindowPayload>) {
        let z_index = self.registry.write().open(id, data);
        tracing::info!("Opened window {} at z-index {}", id, z_index);
        self.emit(WindowEvent {
            id,
            kind: WindowEventKind::Opened,
            z_index,
        });
    }

    /// Close a window
    pub fn close(&self, id: WindowId) {
        let z_index = {
            let mut registry = self.registry.write();
            registry.close(id);
            registry.z_index(id)
        };
        tracing::info!("Closed window {}", id);
        self.emit(WindowEvent {
            id,
            kind: WindowEventKind::Closed,
            z_index,
        });
    }

    /// Raise a window
    pub fn focus(&self, id: WindowId) {
        let z_index = self.registry.write().focus(id);
        tracing::debug!("Focused window {} at z-index {}", id, z_index);
        self.emit(WindowEvent {
            id,
            kind: WindowEventKind::Focused,
            z_index,
        });
    }

    /// Open by string key; unknown keys are ignored
    pub fn open_key(&self, key: &str, data: Option<WindowPayload>) -> bool {
        match parse_known(key) {
            Some(id) => {
                self.open(id, data);
                true
            }
            None => false,
        }
    }

    /// Close by string key; unknown keys are ignored
    pub fn close_key(&self, key: &str) -> bool {
        match parse_known(key) {
            Some(id) => {
                self.close(id);
                true
            }
            None => false,
        }
    }

    /// Focus by string key; unknown keys are ignored
    pub fn focus_key(&self, key: &str) -> bool {
        match parse_known(key) {
            Some(id) => {
                self.focus(id);
                true
            }
            None => false,
        }
    }

    /// Copy of one entry
    #[must_use]
    pub fn get(&self, id: WindowId) -> WindowEntry {
        self.registry.read().get(id).clone()
    }

    /// Whether a window is visible
    #[must_use]
    pub fn is_open(&self, id: WindowId) -> bool {
        self.registry.read().is_open(id)
    }

    /// Stacking value of a window
    #[must_use]
    pub fn z_index(&self, id: WindowId) -> i32 {
        self.registry.read().z_index(id)
    }

    /// Copy of a window's payload
    #[must_use]
    pub fn data(&self, id: WindowId) -> Option<WindowPayload> {
        self.registry.read().data(id).cloned()
    }

    /// Open window painted on top
    #[must_use]
    pub fn topmost(&self) -> Option<WindowId> {
        self.registry.read().topmost()
    }

    /// Open windows from bottom to top
    #[must_use]
    pub fn paint_order(&self) -> Vec<WindowId> {
        self.registry.read().paint_order()
    }

    /// Copy of the whole registry
    #[must_use]
    pub fn snapshot(&self) -> WindowRegistry {
        self.registry.read().clone()
    }

    /// Run a closure against the registry under a read lock
    pub fn read<R>(&self, f: impl FnOnce(&WindowRegistry) -> R) -> R {
        f(&self.registry.read())
    }

    fn emit(&self, event: WindowEvent) {
        // Clone out so listeners may call back into the store
        let listeners: Vec<Listener> = self.listeners.read().clone();
        for listener in listeners {
            listener(&event);
        }
    }
}

impl fmt::Debug for WindowStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WindowStore")
            .field("registry", &*self.registry.read())
            .field("listeners", &self.listeners.read().len())
            .finish()
    }
}
