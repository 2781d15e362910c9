//! Generic touch event types for host integration.

/// Phase of a pointer/touch gesture as reported by the host.
///
/// Hosts map their native events (mouse buttons, touch actions) onto these
/// phases and feed them to [`ColorPicker::handle_touch`].
///
/// [`ColorPicker::handle_touch`]: super::ColorPicker::handle_touch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchPhase {
    /// Finger down / primary button pressed
    Press,
    /// Pointer moved while pressed
    Move,
    /// Finger lifted / button released (commits the selection)
    Release,
    /// Gesture aborted by the host (no selection is reported)
    Cancel,
}

impl TouchPhase {
    /// Parses a phase name as used on the command line.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "press" | "down" => Some(Self::Press),
            "move" | "motion" => Some(Self::Move),
            "release" | "up" => Some(Self::Release),
            "cancel" => Some(Self::Cancel),
            _ => None,
        }
    }
}
