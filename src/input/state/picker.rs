//! Selection state machine and picker state.

use crate::draw::{Color, Hsv};
use crate::wheel::{SelectorSize, WHEEL_RADIUS, clamp_to_disc, color_to_point, point_to_color};
use log::debug;

/// Callback invoked when the user commits a color by releasing the pointer.
pub type ColorSelectedListener = Box<dyn FnMut(Hsv)>;

/// Current gesture state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionState {
    /// No gesture in progress; the selector shows the last committed color
    Idle,
    /// Pointer is down and the selector follows it
    Tracking,
}

/// Selector location as an offset from the wheel center.
///
/// Always lies inside the wheel disc.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SelectorPosition {
    pub x: f64,
    pub y: f64,
}

/// Color picker state driven by touch input and programmatic updates.
///
/// Holds the selector position and marker size, and notifies a listener when
/// a gesture ends with a selection. Hosts translate their native pointer
/// events to widget-local coordinates and call the `on_touch_*` methods.
pub struct ColorPicker {
    /// Current selector offset from the wheel center
    pub selector: SelectorPosition,
    /// Marker half-size used for layout and the clamp inset
    pub selector_size: SelectorSize,
    /// Gesture state machine
    pub state: SelectionState,
    /// Whether the host should repaint the marker
    pub needs_redraw: bool,
    /// Listener for committed selections
    on_color_selected: Option<ColorSelectedListener>,
}

impl ColorPicker {
    /// Creates a picker with the selector at the wheel center.
    pub fn new(selector_size: SelectorSize) -> Self {
        Self {
            selector: SelectorPosition::default(),
            selector_size,
            state: SelectionState::Idle,
            needs_redraw: true,
            on_color_selected: None,
        }
    }

    /// Creates a picker showing `color`.
    pub fn with_color(selector_size: SelectorSize, color: Hsv) -> Self {
        let mut picker = Self::new(selector_size);
        picker.set_color(color);
        picker
    }

    /// Registers the listener notified on release, replacing any previous one.
    pub fn set_on_color_selected(&mut self, listener: impl FnMut(Hsv) + 'static) {
        self.on_color_selected = Some(Box::new(listener));
    }

    /// Removes the selection listener.
    pub fn clear_on_color_selected(&mut self) {
        self.on_color_selected = None;
    }

    /// Moves the selector to the point showing `color`.
    ///
    /// Colors whose saturation maps outside the wheel are clamped onto it.
    /// Does not notify the listener, so a host can echo a selected color
    /// back without a feedback loop.
    pub fn set_color(&mut self, color: Hsv) {
        let (x, y) = color_to_point(color);
        let (x, y) = clamp_to_disc(f64::from(x), f64::from(y), self.selector_size);
        debug!("set_color {:?} -> selector ({x:.1}, {y:.1})", color);
        self.move_selector(x, y);
    }

    /// Same as [`set_color`](Self::set_color) for a packed `0xAARRGGBB` color.
    pub fn set_argb(&mut self, argb: u32) {
        self.set_color(Hsv::from_argb(argb));
    }

    /// Puts the selector back at the center and ends any gesture.
    pub fn reset(&mut self) {
        self.state = SelectionState::Idle;
        self.move_selector(0.0, 0.0);
    }

    /// Color under the selector.
    pub fn selected_color(&self) -> Hsv {
        point_to_color(self.selector.x, self.selector.y)
    }

    /// Color under the selector as RGBA.
    pub fn selected_rgba(&self) -> Color {
        self.selected_color().to_color()
    }

    /// Selector center in widget-local coordinates.
    pub fn marker_center(&self) -> (f64, f64) {
        let (cx, cy) = self.selector_size.center();
        (cx + self.selector.x, cy + self.selector.y)
    }

    /// Top-left corner of the marker in widget-local coordinates.
    pub fn marker_origin(&self) -> (f64, f64) {
        let r = f64::from(WHEEL_RADIUS);
        (r + self.selector.x, r + self.selector.y)
    }

    /// Clamps a widget-local point and moves the selector there.
    pub(super) fn track_local(&mut self, local_x: f64, local_y: f64) {
        let (x, y) = self.selector_size.to_offset(local_x, local_y);
        let (x, y) = clamp_to_disc(x, y, self.selector_size);
        self.move_selector(x, y);
    }

    /// Reports the current selection to the listener.
    pub(super) fn notify_selected(&mut self) -> Hsv {
        let color = self.selected_color();
        if let Some(listener) = self.on_color_selected.as_mut() {
            listener(color);
        }
        color
    }

    fn move_selector(&mut self, x: f64, y: f64) {
        let position = SelectorPosition { x, y };
        if position != self.selector {
            self.selector = position;
            self.needs_redraw = true;
        }
    }
}

impl std::fmt::Debug for ColorPicker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ColorPicker")
            .field("selector", &self.selector)
            .field("selector_size", &self.selector_size)
            .field("state", &self.state)
            .field("needs_redraw", &self.needs_redraw)
            .field("has_listener", &self.on_color_selected.is_some())
            .finish()
    }
}
