//! Window registry
//!
//! Single source of truth for which windows are visible and how they stack.
//! The key set is fixed at construction; operations only rewrite entries.

use crate::id::WindowId;
use crate::payload::WindowPayload;
use indexmap::IndexMap;
use serde::Serialize;

/// Baseline stacking value every entry starts at and returns to on close
pub const INITIAL_Z_INDEX: i32 = 1000;

/// Per-window state
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowEntry {
    /// Visibility flag
    pub is_open: bool,
    /// Stacking order, higher paints on top
    pub z_index: i32,
    /// Payload supplied at open time
    pub data: Option<WindowPayload>,
}

impl WindowEntry {
    /// Closed entry at the baseline stacking value
    #[inline]
    #[must_use]
    pub fn closed() -> Self {
        Self {
            is_open: false,
            z_index: INITIAL_Z_INDEX,
            data: None,
        }
    }
}

impl Default for WindowEntry {
    fn default() -> Self {
        Self::closed()
    }
}

/// Fixed table of window entries
///
/// Entries iterate in registration order ([`WindowId::ALL`]).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowRegistry {
    windows: IndexMap<WindowId, WindowEntry>,
    /// Written by open/focus, never read back
    next_index: i32,
}

impl WindowRegistry {
    /// Registry with every known window closed at the baseline
    #[must_use]
    pub fn new() -> Self {
        Self {
            windows: WindowId::ALL
                .into_iter()
                .map(|id| (id, WindowEntry::closed()))
                .collect(),
            next_index: INITIAL_Z_INDEX + 1,
        }
    }

    /// Open a window on top of every other
    ///
    /// A `None` payload keeps whatever the entry already carries.
    /// Returns the new stacking value.
    pub fn open(&mut self, id: WindowId, data: Option<WindowPayload>) -> i32 {
        let z = self.max_z_index() + 1;
        let entry = self.entry_mut(id);
        entry.is_open = true;
        entry.z_index = z;
        if data.is_some() {
            entry.data = data;
        }
        self.next_index = z + 1;
        z
    }

    /// Close a window, dropping its payload and stacking position
    pub fn close(&mut self, id: WindowId) {
        let entry = self.entry_mut(id);
        entry.is_open = false;
        entry.z_index = INITIAL_Z_INDEX;
        entry.data = None;
    }

    /// Raise a window above every other without touching visibility or data
    ///
    /// Returns the new stacking value.
    pub fn focus(&mut self, id: WindowId) -> i32 {
        let z = self.max_z_index() + 1;
        self.entry_mut(id).z_index = z;
        self.next_index = z + 1;
        z
    }

    /// [`open`](Self::open) by string key; unknown keys are ignored
    pub fn open_key(&mut self, key: &str, data: Option<WindowPayload>) -> bool {
        match parse_known(key) {
            Some(id) => {
                self.open(id, data);
                true
            }
            None => false,
        }
    }

    /// [`close`](Self::close) by string key; unknown keys are ignored
    pub fn close_key(&mut self, key: &str) -> bool {
        match parse_known(key) {
            Some(id) => {
                self.close(id);
                true
            }
            None => false,
        }
    }

    /// [`focus`](Self::focus) by string key; unknown keys are ignored
    pub fn focus_key(&mut self, key: &str) -> bool {
        match parse_known(key) {
            Some(id) => {
                self.focus(id);
                true
            }
            None => false,
        }
    }

    /// Entry for a window
    #[inline]
    #[must_use]
    pub fn get(&self, id: WindowId) -> &WindowEntry {
        // Every WindowId is inserted by `new` and never removed
        &self.windows[&id]
    }

    /// Whether a window is visible
    #[inline]
    #[must_use]
    pub fn is_open(&self, id: WindowId) -> bool {
        self.get(id).is_open
    }

    /// Stacking value of a window
    #[inline]
    #[must_use]
    pub fn z_index(&self, id: WindowId) -> i32 {
        self.get(id).z_index
    }

    /// Payload of a window
    #[inline]
    #[must_use]
    pub fn data(&self, id: WindowId) -> Option<&WindowPayload> {
        self.get(id).data.as_ref()
    }

    /// Highest stacking value across all entries
    #[must_use]
    pub fn max_z_index(&self) -> i32 {
        self.windows
            .values()
            .map(|entry| entry.z_index)
            .max()
            .unwrap_or(INITIAL_Z_INDEX)
    }

    /// Bookkeeping counter left by the last open/focus
    #[inline]
    #[must_use]
    pub fn next_index(&self) -> i32 {
        self.next_index
    }

    /// All entries in registration order
    pub fn iter(&self) -> impl Iterator<Item = (WindowId, &WindowEntry)> {
        self.windows.iter().map(|(id, entry)| (*id, entry))
    }

    /// Ids of open windows in registration order
    #[must_use]
    pub fn open_windows(&self) -> Vec<WindowId> {
        self.iter()
            .filter(|(_, entry)| entry.is_open)
            .map(|(id, _)| id)
            .collect()
    }

    /// Open windows from bottom to top
    ///
    /// Equal stacking values keep registration order.
    #[must_use]
    pub fn paint_order(&self) -> Vec<WindowId> {
        let mut open: Vec<(WindowId, i32)> = self
            .iter()
            .filter(|(_, entry)| entry.is_open)
            .map(|(id, entry)| (id, entry.z_index))
            .collect();
        // stable sort
        open.sort_by_key(|(_, z)| *z);
        open.into_iter().map(|(id, _)| id).collect()
    }

    /// Open window painted on top, if any
    #[must_use]
    pub fn topmost(&self) -> Option<WindowId> {
        self.paint_order().last().copied()
    }

    /// Number of registered windows
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.windows.len()
    }

    /// Always false; the key set is never empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    fn entry_mut(&mut self, id: WindowId) -> &mut WindowEntry {
        self.windows.entry(id).or_default()
    }
}

impl Default for WindowRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a window key, logging keys that name no window
pub(crate) fn parse_known(key: &str) -> Option<WindowId> {
    match key.parse() {
        Ok(id) => Some(id),
        Err(err) => {
            tracing::debug!("Ignoring window operation: {}", err);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payload::ImageFile;
    use pretty_assertions::assert_eq;

    fn image(name: &str) -> WindowPayload {
        WindowPayload::Image(ImageFile {
            id: 1,
            name: name.into(),
            icon: "/images/image.png".into(),
            image_url: Some(format!("/images/{name}")),
        })
    }

    #[test]
    fn registry_new_all_closed() {
        let registry = WindowRegistry::new();
        assert_eq!(registry.len(), 11);
        for (_, entry) in registry.iter() {
            assert_eq!(entry, &WindowEntry::closed());
        }
        assert_eq!(registry.next_index(), INITIAL_Z_INDEX + 1);
        assert!(registry.topmost().is_none());
    }

    #[test]
    fn registry_iterates_in_registration_order() {
        let registry = WindowRegistry::new();
        let ids: Vec<WindowId> = registry.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, WindowId::ALL.to_vec());
    }

    #[test]
    fn open_raises_above_max() {
        let mut registry = WindowRegistry::new();
        let z = registry.open(WindowId::Finder, None);
        assert_eq!(z, INITIAL_Z_INDEX + 1);
        assert!(registry.is_open(WindowId::Finder));
        assert!(registry.data(WindowId::Finder).is_none());
        assert_eq!(registry.next_index(), INITIAL_Z_INDEX + 2);
    }

    #[test]
    fn scenario_finder_contact_focus() {
        let mut registry = WindowRegistry::new();
        registry.open(WindowId::Finder, None);
        registry.open(WindowId::Contact, None);
        assert_eq!(registry.z_index(WindowId::Contact), INITIAL_Z_INDEX + 2);

        registry.focus(WindowId::Finder);
        assert_eq!(registry.z_index(WindowId::Finder), INITIAL_Z_INDEX + 3);
        assert!(registry.is_open(WindowId::Finder));
        assert_eq!(registry.topmost(), Some(WindowId::Finder));
        assert_eq!(
            registry.paint_order(),
            vec![WindowId::Contact, WindowId::Finder]
        );
    }

    #[test]
    fn open_without_payload_keeps_previous_data() {
        let mut registry = WindowRegistry::new();
        registry.open(WindowId::ImgFile, Some(image("a.png")));
        registry.open(WindowId::ImgFile, None);
        assert_eq!(registry.data(WindowId::ImgFile), Some(&image("a.png")));

        registry.open(WindowId::ImgFile, Some(image("b.png")));
        assert_eq!(registry.data(WindowId::ImgFile), Some(&image("b.png")));
    }

    #[test]
    fn close_resets_entry() {
        let mut registry = WindowRegistry::new();
        registry.open(WindowId::ImgFile, Some(image("a.png")));
        registry.close(WindowId::ImgFile);
        assert_eq!(registry.get(WindowId::ImgFile), &WindowEntry::closed());

        // reopening recomputes from the current max, not the old position
        registry.open(WindowId::Finder, None);
        let z = registry.open(WindowId::ImgFile, None);
        assert_eq!(z, INITIAL_Z_INDEX + 2);
        assert!(registry.data(WindowId::ImgFile).is_none());
    }

    #[test]
    fn close_twice_same_as_once() {
        let mut registry = WindowRegistry::new();
        registry.open(WindowId::Safari, None);
        registry.close(WindowId::Safari);
        let once = registry.clone();
        registry.close(WindowId::Safari);
        assert_eq!(registry, once);
    }

    #[test]
    fn focus_closed_window_keeps_it_closed() {
        let mut registry = WindowRegistry::new();
        registry.focus(WindowId::Trash);
        assert!(!registry.is_open(WindowId::Trash));
        assert_eq!(registry.z_index(WindowId::Trash), INITIAL_Z_INDEX + 1);
        // closed windows never appear in paint order
        assert!(registry.paint_order().is_empty());
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let mut registry = WindowRegistry::new();
        registry.open(WindowId::Finder, None);
        let before = registry.clone();

        assert!(!registry.open_key("nonexistent", Some(image("x.png"))));
        assert!(!registry.close_key("nonexistent"));
        assert!(!registry.focus_key("nonexistent"));
        assert_eq!(registry, before);
    }

    #[test]
    fn key_operations_accept_known_keys() {
        let mut registry = WindowRegistry::new();
        assert!(registry.open_key("txtfile", None));
        assert!(registry.is_open(WindowId::TextFile));
        assert!(registry.focus_key("textfile"));
        assert!(registry.close_key("textfile"));
        assert!(!registry.is_open(WindowId::TextFile));
    }

    #[test]
    fn paint_order_ties_keep_registration_order() {
        let mut registry = WindowRegistry::new();
        registry.entry_mut(WindowId::Trash).is_open = true;
        registry.entry_mut(WindowId::Finder).is_open = true;
        assert_eq!(
            registry.paint_order(),
            vec![WindowId::Finder, WindowId::Trash]
        );
    }

    #[test]
    fn snapshot_matches_store_shape() {
        let mut registry = WindowRegistry::new();
        registry.open(WindowId::Finder, None);
        let value = serde_json::to_value(&registry).unwrap();
        assert_eq!(
            value["windows"]["finder"],
            serde_json::json!({ "isOpen": true, "zIndex": 1001, "data": null })
        );
        assert_eq!(value["nextIndex"], 1002);
        assert_eq!(value["windows"]["contact"]["isOpen"], false);
    }
}
