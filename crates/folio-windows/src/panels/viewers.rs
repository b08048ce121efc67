//! Payload-driven file viewers
//!
//! Both viewers render nothing unless their window carries a matching payload.

use crate::frame::Panel;
use crate::id::WindowId;
use crate::payload::WindowPayload;

/// Rendered image window
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageView {
    /// Header title
    pub title: String,
    /// Image to show, if the file has one
    pub image_url: Option<String>,
}

/// Image file viewer bound to [`WindowId::ImgFile`]
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageViewer;

impl Panel for ImageViewer {
    type View = ImageView;

    fn window_id(&self) -> WindowId {
        WindowId::ImgFile
    }

    fn view(&self, payload: Option<&WindowPayload>) -> Option<ImageView> {
        let image = payload?.as_image()?;
        Some(ImageView {
            title: image.name.clone(),
            image_url: image.image_url.clone(),
        })
    }
}

/// Rendered text window
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextView {
    /// Header title
    pub title: String,
    /// Heading above the body
    pub subtitle: Option<String>,
    /// Header image
    pub image_url: Option<String>,
    /// Body paragraphs
    pub paragraphs: Vec<String>,
}

/// Text file viewer bound to [`WindowId::TextFile`]
#[derive(Debug, Clone, Copy, Default)]
pub struct TextViewer;

impl Panel for TextViewer {
    type View = TextView;

    fn window_id(&self) -> WindowId {
        WindowId::TextFile
    }

    fn view(&self, payload: Option<&WindowPayload>) -> Option<TextView> {
        let text = payload?.as_text()?;
        Some(TextView {
            title: text.name.clone(),
            subtitle: text.subtitle.clone(),
            image_url: text.image_url.clone(),
            paragraphs: text.description.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payload::{ImageFile, TextFile};

    fn image() -> WindowPayload {
        WindowPayload::Image(ImageFile {
            id: 1,
            name: "me.png".into(),
            icon: "/images/image.png".into(),
            image_url: Some("/images/me.jpeg".into()),
        })
    }

    fn text() -> WindowPayload {
        WindowPayload::Text(TextFile {
            id: 4,
            name: "about-me.txt".into(),
            icon: "/images/txt.png".into(),
            subtitle: Some("Meet the Developer".into()),
            image_url: None,
            description: vec!["Hello".into()],
        })
    }

    #[test]
    fn image_viewer_renders_payload() {
        let view = ImageViewer.view(Some(&image())).unwrap();
        assert_eq!(view.title, "me.png");
        assert_eq!(view.image_url.as_deref(), Some("/images/me.jpeg"));
    }

    #[test]
    fn viewers_render_nothing_without_payload() {
        assert!(ImageViewer.view(None).is_none());
        assert!(TextViewer.view(None).is_none());
    }

    #[test]
    fn viewers_ignore_foreign_payload() {
        assert!(ImageViewer.view(Some(&text())).is_none());
        assert!(TextViewer.view(Some(&image())).is_none());
    }

    #[test]
    fn text_viewer_renders_paragraphs() {
        let view = TextViewer.view(Some(&text())).unwrap();
        assert_eq!(view.subtitle.as_deref(), Some("Meet the Developer"));
        assert_eq!(view.paragraphs, vec!["Hello".to_string()]);
    }
}
