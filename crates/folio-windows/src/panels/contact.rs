use crate::catalog::{Social, SOCIALS};
use crate::frame::Panel;
use crate::id::WindowId;
use crate::payload::WindowPayload;
use serde::Serialize;

/// Rendered contact card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContactView {
    /// Window title
    pub title: &'static str,
    /// Card heading
    pub heading: &'static str,
    /// Invitation under the heading
    pub blurb: &'static str,
    /// Profile buttons, in card order
    pub socials: &'static [Social],
}

/// Contact card bound to [`WindowId::Contact`]
#[derive(Debug, Clone, Copy, Default)]
pub struct Contact;

impl Contact {
    /// New contact panel
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Profile with the given label
    #[must_use]
    pub fn social(&self, text: &str) -> Option<&'static Social> {
        SOCIALS.iter().find(|social| social.text == text)
    }
}

impl Panel for Contact {
    type View = ContactView;

    fn window_id(&self) -> WindowId {
        WindowId::Contact
    }

    fn view(&self, _payload: Option<&WindowPayload>) -> Option<ContactView> {
        Some(ContactView {
            title: "Contact Me",
            heading: "Let's Contact",
            blurb: "Got an idea? A bug to squash? Or just want to talk tech? I'm in.",
            socials: &SOCIALS,
        })
    }
}
