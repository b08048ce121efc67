//! Window frames
//!
//! [`WindowFrame`] wraps any [`Panel`] with the behavior every desktop window
//! shares: show/hide bound to the registry, a one-shot entrance transition on
//! open, stacking bound to the registry's z-index, and dragging by the header.

use crate::id::WindowId;
use crate::payload::WindowPayload;
use crate::store::WindowStore;
use std::time::Duration;

/// Height of the draggable header strip, in pixels
pub const DEFAULT_HEADER_HEIGHT: f32 = 40.0;

/// Content hosted inside a window frame
pub trait Panel {
    /// What the panel renders
    type View;

    /// Registry entry this panel is bound to
    fn window_id(&self) -> WindowId;

    /// Render for the current payload
    ///
    /// Panels that need a payload return `None` when it is missing.
    fn view(&self, payload: Option<&WindowPayload>) -> Option<Self::View>;
}

/// Pointer position in desktop pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Horizontal offset
    pub x: f32,
    /// Vertical offset
    pub y: f32,
}

impl Point {
    /// New point
    #[inline]
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Visual transform animated by the entrance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// Uniform scale
    pub scale: f32,
    /// Opacity, 0..=1
    pub opacity: f32,
    /// Vertical offset in pixels
    pub y: f32,
}

impl Transform {
    /// Resting transform
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        opacity: 1.0,
        y: 0.0,
    };
}

/// Entrance transition played when a window opens
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entrance {
    /// Starting transform
    pub from: Transform,
    /// Final transform
    pub to: Transform,
    /// Length of the transition
    pub duration: Duration,
    /// Easing curve name
    pub ease: &'static str,
}

impl Default for Entrance {
    fn default() -> Self {
        Self {
            from: Transform {
                scale: 0.5,
                opacity: 0.0,
                y: 150.0,
            },
            to: Transform::IDENTITY,
            duration: Duration::from_millis(500),
            ease: "power3.out",
        }
    }
}

/// Positioned, draggable container around a panel
#[derive(Debug)]
pub struct WindowFrame<P: Panel> {
    panel: P,
    origin: Point,
    width: f32,
    height: f32,
    header_height: f32,
    visible: bool,
    z_index: i32,
    entrance: Option<Entrance>,
    drag_anchor: Option<Point>,
}

impl<P: Panel> WindowFrame<P> {
    /// Hidden frame at the desktop origin
    #[must_use]
    pub fn new(panel: P) -> Self {
        Self {
            panel,
            origin: Point::default(),
            width: 640.0,
            height: 480.0,
            header_height: DEFAULT_HEADER_HEIGHT,
            visible: false,
            z_index: crate::registry::INITIAL_Z_INDEX,
            entrance: None,
            drag_anchor: None,
        }
    }

    /// Place the frame
    #[must_use]
    pub fn at(mut self, origin: Point) -> Self {
        self.origin = origin;
        self
    }

    /// Resize the frame
    #[must_use]
    pub fn with_size(mut self, width: f32, height: f32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Change the draggable header strip
    #[must_use]
    pub fn with_header_height(mut self, header_height: f32) -> Self {
        self.header_height = header_height;
        self
    }

    /// Registry id of the hosted panel
    #[inline]
    #[must_use]
    pub fn window_id(&self) -> WindowId {
        self.panel.window_id()
    }

    /// Hosted panel
    #[inline]
    pub fn panel(&self) -> &P {
        &self.panel
    }

    /// Hosted panel, mutably
    #[inline]
    pub fn panel_mut(&mut self) -> &mut P {
        &mut self.panel
    }

    /// Whether the frame is shown
    #[inline]
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Stacking value as of the last sync
    #[inline]
    #[must_use]
    pub fn z_index(&self) -> i32 {
        self.z_index
    }

    /// Top-left corner
    #[inline]
    #[must_use]
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Whether a drag is in progress
    #[inline]
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag_anchor.is_some()
    }

    /// Re-read registry state
    ///
    /// Arms the entrance when the window goes from closed to open.
    pub fn sync(&mut self, store: &WindowStore) {
        let entry = store.get(self.window_id());
        if entry.is_open && !self.visible {
            self.entrance = Some(Entrance::default());
        }
        if !entry.is_open {
            self.entrance = None;
            self.drag_anchor = None;
        }
        self.visible = entry.is_open;
        self.z_index = entry.z_index;
    }

    /// Consume the armed entrance, if any
    pub fn take_entrance(&mut self) -> Option<Entrance> {
        self.entrance.take()
    }

    /// Whether a point lies in the header strip
    #[must_use]
    pub fn in_header(&self, point: Point) -> bool {
        point.x >= self.origin.x
            && point.x <= self.origin.x + self.width
            && point.y >= self.origin.y
            && point.y <= self.origin.y + self.header_height
    }

    /// Pointer pressed; starts a drag and raises the window when on the header
    pub fn press(&mut self, store: &WindowStore, point: Point) -> bool {
        if !self.visible || !self.in_header(point) {
            return false;
        }
        let id = self.window_id();
        store.focus(id);
        self.z_index = store.z_index(id);
        self.drag_anchor = Some(point);
        true
    }

    /// Pointer moved; follows it while dragging
    pub fn drag_to(&mut self, point: Point) {
        if let Some(anchor) = self.drag_anchor {
            self.origin.x += point.x - anchor.x;
            self.origin.y += point.y - anchor.y;
            self.drag_anchor = Some(point);
        }
    }

    /// Pointer released
    pub fn release(&mut self) {
        self.drag_anchor = None;
    }

    /// Panel view for the current payload, `None` while hidden
    pub fn view(&self, store: &WindowStore) -> Option<P::View> {
        if !self.visible {
            return None;
        }
        let payload = store.data(self.window_id());
        self.panel.view(payload.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::INITIAL_Z_INDEX;

    #[derive(Debug, Default)]
    struct Counter {
        clicks: u32,
    }

    impl Panel for Counter {
        type View = u32;

        fn window_id(&self) -> WindowId {
            WindowId::Terminal
        }

        fn view(&self, _payload: Option<&WindowPayload>) -> Option<u32> {
            Some(self.clicks)
        }
    }

    fn open_frame(store: &WindowStore) -> WindowFrame<Counter> {
        store.open(WindowId::Terminal, None);
        let mut frame = WindowFrame::new(Counter::default()).at(Point::new(100.0, 100.0));
        frame.sync(store);
        frame
    }

    #[test]
    fn new_frame_hidden() {
        let store = WindowStore::new();
        let mut frame = WindowFrame::new(Counter::default());
        frame.sync(&store);
        assert!(!frame.is_visible());
        assert!(frame.take_entrance().is_none());
        assert!(frame.view(&store).is_none());
    }

    #[test]
    fn entrance_plays_once_per_open() {
        let store = WindowStore::new();
        let mut frame = open_frame(&store);

        let entrance = frame.take_entrance().unwrap();
        assert_eq!(entrance.from.scale, 0.5);
        assert_eq!(entrance.to, Transform::IDENTITY);
        assert_eq!(entrance.duration, Duration::from_millis(500));

        // focus while open does not replay
        store.focus(WindowId::Terminal);
        frame.sync(&store);
        assert!(frame.take_entrance().is_none());

        store.close(WindowId::Terminal);
        frame.sync(&store);
        store.open(WindowId::Terminal, None);
        frame.sync(&store);
        assert!(frame.take_entrance().is_some());
    }

    #[test]
    fn panel_state_survives_hide() {
        let store = WindowStore::new();
        let mut frame = open_frame(&store);
        frame.panel_mut().clicks = 7;

        store.close(WindowId::Terminal);
        frame.sync(&store);
        assert!(frame.view(&store).is_none());

        store.open(WindowId::Terminal, None);
        frame.sync(&store);
        assert_eq!(frame.view(&store), Some(7));
    }

    #[test]
    fn press_on_header_focuses() {
        let store = WindowStore::new();
        let mut frame = open_frame(&store);
        store.open(WindowId::Contact, None);
        assert_eq!(store.topmost(), Some(WindowId::Contact));

        assert!(frame.press(&store, Point::new(150.0, 110.0)));
        assert_eq!(store.topmost(), Some(WindowId::Terminal));
        assert_eq!(frame.z_index(), INITIAL_Z_INDEX + 3);
        assert!(store.is_open(WindowId::Terminal));
    }

    #[test]
    fn press_outside_header_ignored() {
        let store = WindowStore::new();
        let mut frame = open_frame(&store);
        let before = store.snapshot();

        assert!(!frame.press(&store, Point::new(150.0, 300.0)));
        assert!(!frame.is_dragging());
        assert_eq!(store.snapshot(), before);
    }

    #[test]
    fn drag_moves_origin_only() {
        let store = WindowStore::new();
        let mut frame = open_frame(&store);

        frame.press(&store, Point::new(120.0, 120.0));
        let after_press = store.snapshot();
        frame.drag_to(Point::new(170.0, 90.0));
        frame.drag_to(Point::new(180.0, 100.0));
        frame.release();

        assert_eq!(frame.origin(), Point::new(160.0, 80.0));
        assert!(!frame.is_dragging());
        assert_eq!(store.snapshot(), after_press);

        // no anchor, no movement
        frame.drag_to(Point::new(0.0, 0.0));
        assert_eq!(frame.origin(), Point::new(160.0, 80.0));
    }

    #[test]
    fn hidden_frame_cannot_be_dragged() {
        let store = WindowStore::new();
        let mut frame = WindowFrame::new(Counter::default());
        frame.sync(&store);
        assert!(!frame.press(&store, Point::new(10.0, 10.0)));
        assert!(!store.is_open(WindowId::Terminal));
    }

    #[test]
    fn closing_mid_drag_cancels_drag() {
        let store = WindowStore::new();
        let mut frame = open_frame(&store);
        frame.press(&store, Point::new(120.0, 120.0));
        store.close(WindowId::Terminal);
        frame.sync(&store);
        assert!(!frame.is_dragging());
    }
}
