//! Translates winit keyboard events into scrolling commands.

use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{Key, NamedKey};

/// What a key press asks the driver to do.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Command {
    /// Move the scroll offset by (dx, dy).
    Scroll(i32, i32),
    /// Return to the configured scroll offset.
    Reset,
    Quit,
}

pub(crate) fn translate_keyboard(event: &KeyEvent, step: i32) -> Option<Command> {
    // Key repeats arrive as further presses, which keeps held arrows scrolling.
    if event.state != ElementState::Pressed {
        return None;
    }
    translate_key(&event.logical_key, step)
}

/// Arrow keys and hjkl move the camera, so the background scrolls the
/// opposite way.
pub(crate) fn translate_key(key: &Key, step: i32) -> Option<Command> {
    let cmd = match key {
        Key::Named(named) => match named {
            NamedKey::ArrowLeft => Command::Scroll(step, 0),
            NamedKey::ArrowRight => Command::Scroll(-step, 0),
            NamedKey::ArrowUp => Command::Scroll(0, step),
            NamedKey::ArrowDown => Command::Scroll(0, -step),
            NamedKey::Home => Command::Reset,
            NamedKey::Escape => Command::Quit,
            _ => return None,
        },
        Key::Character(s) => match s.as_str() {
            "h" => Command::Scroll(step, 0),
            "l" => Command::Scroll(-step, 0),
            "k" => Command::Scroll(0, step),
            "j" => Command::Scroll(0, -step),
            "0" => Command::Reset,
            "q" => Command::Quit,
            _ => return None,
        },
        _ => return None,
    };
    Some(cmd)
}
