mod picker;
mod touch;

pub use picker::{ColorPicker, ColorSelectedListener, SelectionState, SelectorPosition};
