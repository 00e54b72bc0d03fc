//! Immediate-mode GUI boundary
//!
//! Minimal surface the configuration panel renders against. A real
//! binding forwards these calls to the GUI toolkit; tests drive the
//! panel with a scripted implementation. Widget methods return true
//! when the user changed or clicked the widget this frame.

use autotod_core::panel::InputField;

/// One frame of an immediate-mode panel surface.
pub trait PanelUi {
    /// Open the panel window. Returns false when the window is
    /// collapsed; sets `open` to false when the user closes it.
    fn begin_window(&mut self, title: &str, open: &mut bool) -> bool;

    /// Close the window opened by [`PanelUi::begin_window`].
    fn end_window(&mut self);

    /// Plain text line.
    fn label(&mut self, text: &str);

    /// Status line; `highlighted` distinguishes the armed display from
    /// the dimmed standby one.
    fn status(&mut self, text: &str, highlighted: bool);

    /// Horizontal separator.
    fn separator(&mut self);

    /// Editable bounded text field. Returns true when the text changed.
    fn text_field(&mut self, label: &str, field: &mut InputField) -> bool;

    /// Bounded slider. Returns true when the value changed.
    fn slider(&mut self, label: &str, value: &mut f32, min: f32, max: f32) -> bool;

    /// Push button. Returns true when clicked this frame.
    fn button(&mut self, label: &str) -> bool;
}
