use crate::draw::Hsv;
use crate::input::events::TouchPhase;

use super::{ColorPicker, SelectionState};

impl ColorPicker {
    /// Processes a pointer press.
    ///
    /// # Arguments
    /// * `x` - Widget-local X coordinate
    /// * `y` - Widget-local Y coordinate
    ///
    /// # Behavior
    /// Starts tracking and moves the selector to the (clamped) point.
    pub fn on_touch_press(&mut self, x: f64, y: f64) {
        self.state = SelectionState::Tracking;
        self.track_local(x, y);
    }

    /// Processes pointer motion.
    ///
    /// The selector follows the pointer, clamped to the wheel. No color is
    /// reported until release.
    pub fn on_touch_move(&mut self, x: f64, y: f64) {
        self.track_local(x, y);
    }

    /// Processes a pointer release.
    ///
    /// # Behavior
    /// - Moves the selector to the final (clamped) point
    /// - Returns to Idle
    /// - Notifies the listener with the color under the selector and returns it
    pub fn on_touch_release(&mut self, x: f64, y: f64) -> Hsv {
        self.track_local(x, y);
        self.state = SelectionState::Idle;
        self.notify_selected()
    }

    /// Abandons the current gesture without reporting a color.
    ///
    /// The selector stays where the gesture left it.
    pub fn on_touch_cancel(&mut self) {
        self.state = SelectionState::Idle;
    }

    /// Dispatches a touch event by phase.
    ///
    /// Returns the selected color for [`TouchPhase::Release`], `None` otherwise.
    pub fn handle_touch(&mut self, phase: TouchPhase, x: f64, y: f64) -> Option<Hsv> {
        match phase {
            TouchPhase::Press => {
                self.on_touch_press(x, y);
                None
            }
            TouchPhase::Move => {
                self.on_touch_move(x, y);
                None
            }
            TouchPhase::Release => Some(self.on_touch_release(x, y)),
            TouchPhase::Cancel => {
                self.on_touch_cancel();
                None
            }
        }
    }
}
