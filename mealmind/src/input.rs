//! Keyboard input decoupled from crossterm so tests can drive the app with
//! plain values.

use crossterm::event::{KeyCode, KeyEvent as CrosstermKeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Enter,
    Esc,
    Tab,
    Backspace,
    Up,
    Down,
    Left,
    Right,
    PageUp,
    PageDown,
    Home,
    End,
    /// Anything the app has no binding for (function keys, media keys, ...)
    Unmapped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl KeyEvent {
    pub fn new(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::default(),
        }
    }

    pub fn with_ctrl(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers {
                ctrl: true,
                ..Default::default()
            },
        }
    }

    /// The character this event would insert into the ingredient box.
    ///
    /// Chords and control characters never produce text.
    pub fn typed_char(&self) -> Option<char> {
        match self.key {
            Key::Char(c) if !self.modifiers.ctrl && !self.modifiers.alt && !c.is_control() => {
                Some(c)
            }
            _ => None,
        }
    }
}

impl From<KeyCode> for Key {
    fn from(code: KeyCode) -> Self {
        match code {
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Enter => Key::Enter,
            KeyCode::Esc => Key::Esc,
            KeyCode::Tab | KeyCode::BackTab => Key::Tab,
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            KeyCode::PageUp => Key::PageUp,
            KeyCode::PageDown => Key::PageDown,
            KeyCode::Home => Key::Home,
            KeyCode::End => Key::End,
            _ => Key::Unmapped,
        }
    }
}

impl From<CrosstermKeyEvent> for KeyEvent {
    fn from(event: CrosstermKeyEvent) -> Self {
        Self {
            key: Key::from(event.code),
            modifiers: Modifiers {
                ctrl: event.modifiers.contains(KeyModifiers::CONTROL),
                alt: event.modifiers.contains(KeyModifiers::ALT),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crossterm_conversion() {
        let event = CrosstermKeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL);
        assert_eq!(KeyEvent::from(event), KeyEvent::with_ctrl(Key::Char('u')));

        let event = CrosstermKeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT);
        assert_eq!(KeyEvent::from(event), KeyEvent::new(Key::Tab));

        assert_eq!(Key::from(KeyCode::F(5)), Key::Unmapped);
    }

    #[test]
    fn test_typed_char() {
        assert_eq!(KeyEvent::new(Key::Char(',')).typed_char(), Some(','));
        assert_eq!(KeyEvent::new(Key::Char('é')).typed_char(), Some('é'));
        assert_eq!(KeyEvent::with_ctrl(Key::Char('u')).typed_char(), None);
        assert_eq!(KeyEvent::new(Key::Char('\0')).typed_char(), None);
        assert_eq!(KeyEvent::new(Key::Enter).typed_char(), None);

        let alt = KeyEvent {
            key: Key::Char('x'),
            modifiers: Modifiers {
                alt: true,
                ..Default::default()
            },
        };
        assert_eq!(alt.typed_char(), None);
    }
}
