use crate::catalog::{GalleryItem, PhotoLink, GALLERY, PHOTOS_LINKS};
use crate::frame::Panel;
use crate::id::WindowId;
use crate::payload::{ImageFile, WindowPayload};
use crate::store::WindowStore;

/// Rendered photos window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhotosView {
    /// Sidebar entries
    pub links: &'static [PhotoLink],
    /// Gallery thumbnails
    pub gallery: &'static [GalleryItem],
}

/// Photo gallery bound to [`WindowId::Photos`]
#[derive(Debug, Clone, Copy, Default)]
pub struct Photos;

impl Photos {
    /// New gallery panel
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Gallery thumbnails
    #[inline]
    #[must_use]
    pub fn gallery(&self) -> &'static [GalleryItem] {
        &GALLERY
    }

    /// Open a thumbnail in the image viewer
    pub fn open_gallery_item(&self, store: &WindowStore, item: &GalleryItem) {
        let payload = WindowPayload::Image(ImageFile {
            id: item.id,
            name: "Gallery image".to_string(),
            icon: "/images/image.png".to_string(),
            image_url: Some(item.img.to_string()),
        });
        store.open(WindowId::ImgFile, Some(payload));
    }
}

impl Panel for Photos {
    type View = PhotosView;

    fn window_id(&self) -> WindowId {
        WindowId::Photos
    }

    fn view(&self, _payload: Option<&WindowPayload>) -> Option<PhotosView> {
        Some(PhotosView {
            links: &PHOTOS_LINKS,
            gallery: &GALLERY,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gallery_item_opens_image_viewer() {
        let store = WindowStore::new();
        let photos = Photos::new();
        let item = photos.gallery()[2];
        photos.open_gallery_item(&store, &item);

        assert!(store.is_open(WindowId::ImgFile));
        let payload = store.data(WindowId::ImgFile).unwrap();
        let image = payload.as_image().unwrap();
        assert_eq!(image.id, 3);
        assert_eq!(image.image_url.as_deref(), Some("/images/gal3.png"));
    }

    #[test]
    fn second_thumbnail_replaces_payload() {
        let store = WindowStore::new();
        let photos = Photos::new();
        photos.open_gallery_item(&store, &photos.gallery()[0]);
        photos.open_gallery_item(&store, &photos.gallery()[1]);

        let payload = store.data(WindowId::ImgFile).unwrap();
        assert_eq!(payload.as_image().unwrap().id, 2);
    }

    #[test]
    fn view_lists_sidebar_and_gallery() {
        let view = Photos.view(None).unwrap();
        assert_eq!(view.links.len(), 5);
        assert_eq!(view.gallery.len(), 4);
    }
}
