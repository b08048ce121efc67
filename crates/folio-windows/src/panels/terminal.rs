use crate::catalog::{TechCategory, TECH_STACK};
use crate::frame::Panel;
use crate::id::WindowId;
use crate::payload::WindowPayload;
use serde::Serialize;

/// Rendered skills terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TerminalView {
    /// Command shown at the prompt
    pub command: &'static str,
    /// Technology groups, one row each
    pub categories: &'static [TechCategory],
    /// Number of technologies across all groups
    pub total: usize,
}

/// Skills listing bound to [`WindowId::Terminal`]
#[derive(Debug, Clone, Copy, Default)]
pub struct Terminal;

impl Terminal {
    /// New terminal panel
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Entries of one group
    #[must_use]
    pub fn category(&self, name: &str) -> Option<&'static [&'static str]> {
        TECH_STACK
            .iter()
            .find(|group| group.category == name)
            .map(|group| group.items)
    }
}

impl Panel for Terminal {
    type View = TerminalView;

    fn window_id(&self) -> WindowId {
        WindowId::Terminal
    }

    fn view(&self, _payload: Option<&WindowPayload>) -> Option<TerminalView> {
        Some(TerminalView {
            command: "show tech stack",
            categories: &TECH_STACK,
            total: TECH_STACK.iter().map(|group| group.items.len()).sum(),
        })
    }
}
