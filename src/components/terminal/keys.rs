//! Browser key names to editor events.

use folio_core::KeyEvent;

/// What the terminal does with a keydown.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Feed the event to the editor.
    Edit(KeyEvent),
    /// Read the clipboard, then feed a [`KeyEvent::Paste`].
    Paste,
}

/// Maps a `KeyboardEvent.key` value and its modifier state.
///
/// Returns `None` for keys the terminal leaves to the browser, which
/// includes every other Ctrl/Cmd shortcut.
pub fn map_key(key: &str, ctrl: bool, meta: bool) -> Option<KeyAction> {
    let action = match key {
        "Enter" => KeyAction::Edit(KeyEvent::Enter),
        "Tab" => KeyAction::Edit(KeyEvent::Tab),
        "Backspace" => KeyAction::Edit(KeyEvent::Backspace),
        "ArrowUp" => KeyAction::Edit(KeyEvent::Up),
        "ArrowDown" => KeyAction::Edit(KeyEvent::Down),
        "ArrowLeft" => KeyAction::Edit(KeyEvent::Left),
        "ArrowRight" => KeyAction::Edit(KeyEvent::Right),
        _ => {
            let mut chars = key.chars();
            let (Some(c), None) = (chars.next(), chars.next()) else {
                return None;
            };
            if ctrl || meta {
                return match c.to_ascii_lowercase() {
                    'v' => Some(KeyAction::Paste),
                    'c' => Some(KeyAction::Edit(KeyEvent::Copy)),
                    _ => None,
                };
            }
            KeyAction::Edit(KeyEvent::Char(c))
        }
    };
    Some(action)
}
