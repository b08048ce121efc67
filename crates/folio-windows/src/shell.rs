//! Desktop chrome: dock, navigation bar, desktop folders and window controls

use crate::catalog::{
    DockApp, FinderFolder, Locations, NavIcon, NavLink, DOCK_APPS, LOCATIONS, NAV_ICONS, NAV_LINKS,
};
use crate::id::WindowId;
use crate::panels::Finder;
use crate::store::WindowStore;

/// Application dock
#[derive(Debug, Clone, Copy, Default)]
pub struct Dock;

impl Dock {
    /// Dock icon click: open a closed window, close an open one
    ///
    /// Disabled apps ignore the click. Returns whether the window is open afterwards.
    pub fn toggle(store: &WindowStore, app: &DockApp) -> bool {
        if !app.can_open {
            return store.is_open(app.id);
        }
        if store.is_open(app.id) {
            store.close(app.id);
            false
        } else {
            store.open(app.id, None);
            true
        }
    }

    /// Toggle by dock key; keys not in the dock are ignored
    pub fn toggle_key(store: &WindowStore, key: &str) -> Option<bool> {
        let app = DOCK_APPS.iter().find(|app| app.id.as_str() == key)?;
        Some(Self::toggle(store, app))
    }
}

/// Top navigation bar
#[derive(Debug, Clone, Copy, Default)]
pub struct NavBar;

impl NavBar {
    /// Links, left to right
    #[inline]
    #[must_use]
    pub fn links() -> &'static [NavLink] {
        &NAV_LINKS
    }

    /// Status icons on the right of the bar
    #[inline]
    #[must_use]
    pub fn icons() -> &'static [NavIcon] {
        &NAV_ICONS
    }

    /// Link click opens its target window
    pub fn activate(store: &WindowStore, link: &NavLink) {
        store.open(link.target, None);
    }
}

/// Project folder shortcuts on the desktop
#[derive(Debug, Clone, Copy, Default)]
pub struct Desktop;

impl Desktop {
    /// Work projects shown as desktop folders
    pub fn projects() -> impl Iterator<Item = &'static FinderFolder> {
        let locations: &'static Locations = &LOCATIONS;
        locations.work.folders()
    }

    /// Folder click: show the project in the Finder, then bring the Finder up
    pub fn open_project(store: &WindowStore, finder: &mut Finder, project: &FinderFolder) {
        finder.select(project);
        store.open(WindowId::Finder, None);
    }
}

/// Traffic-light row in a window header
///
/// Only the close control acts; minimize and maximize are decorative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowControls {
    target: WindowId,
}

impl WindowControls {
    /// Controls for one window
    #[inline]
    #[must_use]
    pub fn new(target: WindowId) -> Self {
        Self { target }
    }

    /// Window these controls act on
    #[inline]
    #[must_use]
    pub fn target(&self) -> WindowId {
        self.target
    }

    /// Close button
    pub fn close(&self, store: &WindowStore) {
        store.close(self.target);
    }
}
