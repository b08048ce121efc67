//! Finder panel
//!
//! Browses the static location tree and dispatches file clicks: PDFs open the
//! resume, folders navigate, links leave the desktop, and text/image files
//! open their viewer with the file as payload.

use crate::catalog::{FileType, FinderFile, FinderFolder, FinderNode, LOCATIONS};
use crate::frame::Panel;
use crate::id::WindowId;
use crate::payload::WindowPayload;
use crate::store::WindowStore;

/// Folder currently shown by the Finder
#[derive(Debug, Clone, PartialEq)]
pub struct LocationStore {
    active: FinderFolder,
}

impl LocationStore {
    /// Starts at the work location
    #[must_use]
    pub fn new() -> Self {
        Self {
            active: LOCATIONS.work.clone(),
        }
    }

    /// Shown folder
    #[inline]
    #[must_use]
    pub fn active(&self) -> &FinderFolder {
        &self.active
    }

    /// Show another folder
    pub fn set_active(&mut self, folder: FinderFolder) {
        self.active = folder;
    }

    /// Back to the work location
    pub fn reset(&mut self) {
        self.active = LOCATIONS.work.clone();
    }
}

impl Default for LocationStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Outcome of clicking a Finder item
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FinderAction {
    /// A window was opened
    Opened(WindowId),
    /// The Finder moved into a folder
    Navigated(u32),
    /// Link to open outside the desktop
    External(String),
    /// Nothing to do for this item
    Ignored,
}

/// Sidebar row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarEntry {
    /// Folder id
    pub id: u32,
    /// Label
    pub name: String,
    /// Icon path
    pub icon: String,
    /// Whether this folder is the one shown
    pub active: bool,
}

/// Rendered Finder window
#[derive(Debug, Clone, PartialEq)]
pub struct FinderView {
    /// Top-level locations
    pub favorites: Vec<SidebarEntry>,
    /// Project folders under work
    pub work: Vec<SidebarEntry>,
    /// Contents of the active folder
    pub content: Vec<FinderNode>,
}

/// File browser bound to [`WindowId::Finder`]
#[derive(Debug, Clone, Default)]
pub struct Finder {
    locations: LocationStore,
}

impl Finder {
    /// Finder at the work location
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Navigation state
    #[inline]
    #[must_use]
    pub fn locations(&self) -> &LocationStore {
        &self.locations
    }

    /// Sidebar click
    pub fn select(&mut self, folder: &FinderFolder) {
        self.locations.set_active(folder.clone());
    }

    /// Content click
    pub fn open_item(&mut self, store: &WindowStore, item: &FinderNode) -> FinderAction {
        match item {
            FinderNode::Folder(folder) => {
                self.select(folder);
                FinderAction::Navigated(folder.id)
            }
            FinderNode::File(file) => open_file(store, file),
        }
    }
}

fn open_file(store: &WindowStore, file: &FinderFile) -> FinderAction {
    match (file.file_type, file.href.as_ref()) {
        (FileType::Pdf, _) => {
            store.open(WindowId::Resume, None);
            FinderAction::Opened(WindowId::Resume)
        }
        (FileType::Fig | FileType::Url, Some(href)) => FinderAction::External(href.clone()),
        _ => {
            let Ok(id) = file.window_key().parse::<WindowId>() else {
                tracing::debug!("No window for {} file {}", file.file_type, file.name);
                return FinderAction::Ignored;
            };
            store.open(id, WindowPayload::from_finder_file(file));
            FinderAction::Opened(id)
        }
    }
}

fn sidebar_entries<'a>(
    folders: impl Iterator<Item = &'a FinderFolder>,
    active: &FinderFolder,
) -> Vec<SidebarEntry> {
    folders
        .map(|folder| SidebarEntry {
            id: folder.id,
            name: folder.name.clone(),
            icon: folder.icon.clone(),
            active: folder.id == active.id,
        })
        .collect()
}

impl Panel for Finder {
    type View = FinderView;

    fn window_id(&self) -> WindowId {
        WindowId::Finder
    }

    fn view(&self, _payload: Option<&WindowPayload>) -> Option<FinderView> {
        let active = self.locations.active();
        Some(FinderView {
            favorites: sidebar_entries(LOCATIONS.all().into_iter(), active),
            work: sidebar_entries(LOCATIONS.work.folders(), active),
            content: active.children.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file_named<'a>(folder: &'a FinderFolder, name: &str) -> &'a FinderNode {
        folder
            .children
            .iter()
            .find(|node| node.name() == name)
            .unwrap()
    }

    #[test]
    fn starts_at_work() {
        let finder = Finder::new();
        assert_eq!(finder.locations().active().name, "Work");
        let view = finder.view(None).unwrap();
        assert!(view.favorites[0].active);
        assert_eq!(view.content.len(), 3);
    }

    #[test]
    fn folder_navigates_without_touching_registry() {
        let store = WindowStore::new();
        let mut finder = Finder::new();
        let project = LOCATIONS.work.children[1].clone();

        let action = finder.open_item(&store, &project);
        assert_eq!(action, FinderAction::Navigated(6));
        assert_eq!(finder.locations().active().name, "AI Resume Analyzer");
        assert_eq!(store.snapshot(), crate::WindowRegistry::new());

        let view = finder.view(None).unwrap();
        assert!(view.work.iter().any(|entry| entry.id == 6 && entry.active));
    }

    #[test]
    fn pdf_opens_resume() {
        let store = WindowStore::new();
        let mut finder = Finder::new();
        let action = finder.open_item(&store, &LOCATIONS.resume.children[0]);
        assert_eq!(action, FinderAction::Opened(WindowId::Resume));
        assert!(store.is_open(WindowId::Resume));
        assert!(store.data(WindowId::Resume).is_none());
    }

    #[test]
    fn links_are_external() {
        let store = WindowStore::new();
        let mut finder = Finder::new();
        let nike = LOCATIONS.work.folders().next().unwrap();

        let action = finder.open_item(&store, file_named(nike, "nike.com"));
        assert!(
            matches!(action, FinderAction::External(href) if href.starts_with("https://youtu.be"))
        );

        let action = finder.open_item(&store, file_named(nike, "Design.fig"));
        assert_eq!(action, FinderAction::External("https://google.com".into()));
        assert!(store.paint_order().is_empty());
    }

    #[test]
    fn text_file_opens_text_viewer_with_payload() {
        let store = WindowStore::new();
        let mut finder = Finder::new();
        let about = &LOCATIONS.about;

        let action = finder.open_item(&store, file_named(about, "about-me.txt"));
        assert_eq!(action, FinderAction::Opened(WindowId::TextFile));
        let payload = store.data(WindowId::TextFile).unwrap();
        assert_eq!(payload.as_text().unwrap().description.len(), 3);
    }

    #[test]
    fn image_file_opens_image_viewer() {
        let store = WindowStore::new();
        let mut finder = Finder::new();
        let action = finder.open_item(&store, &LOCATIONS.trash.children[0]);
        assert_eq!(action, FinderAction::Opened(WindowId::ImgFile));
        assert_eq!(
            store.data(WindowId::ImgFile).unwrap().name(),
            "trash1.png"
        );
    }

    #[test]
    fn url_without_href_is_ignored() {
        let store = WindowStore::new();
        let mut finder = Finder::new();
        let orphan = FinderNode::File(FinderFile::new(
            9,
            "broken.com",
            "/images/safari.png",
            FileType::Url,
        ));
        assert_eq!(finder.open_item(&store, &orphan), FinderAction::Ignored);
        assert_eq!(store.snapshot(), crate::WindowRegistry::new());
    }

    #[test]
    fn reset_returns_to_work() {
        let mut finder = Finder::new();
        finder.select(&LOCATIONS.trash);
        assert_eq!(finder.locations().active().name, "Trash");
        finder.locations.reset();
        assert_eq!(finder.locations().active().name, "Work");
    }
}
