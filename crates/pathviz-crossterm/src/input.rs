//! Terminal events translated into the small input vocabulary the
//! visualizer understands.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

/// A keyboard key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Escape,
}

/// What the mouse did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MouseAction {
    /// Left button pressed or dragged.
    Main,
    /// Right button pressed or dragged.
    Secondary,
    Release,
}

/// A translated input event. Mouse positions are terminal cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Input {
    Key(Key),
    Mouse {
        action: MouseAction,
        column: u16,
        line: u16,
    },
    Resize {
        width: u16,
        height: u16,
    },
    /// Ctrl+C.
    Quit,
}

fn translate_key(ke: KeyEvent) -> Option<Input> {
    if ke.kind != KeyEventKind::Press {
        return None;
    }
    if ke.modifiers.contains(KeyModifiers::CONTROL) && ke.code == KeyCode::Char('c') {
        return Some(Input::Quit);
    }
    let key = match ke.code {
        KeyCode::Char(c) => Key::Char(c.to_ascii_lowercase()),
        KeyCode::Esc => Key::Escape,
        _ => return None,
    };
    Some(Input::Key(key))
}

fn translate_mouse(me: MouseEvent) -> Option<Input> {
    let action = match me.kind {
        MouseEventKind::Down(MouseButton::Left) | MouseEventKind::Drag(MouseButton::Left) => {
            MouseAction::Main
        }
        MouseEventKind::Down(MouseButton::Right) | MouseEventKind::Drag(MouseButton::Right) => {
            MouseAction::Secondary
        }
        MouseEventKind::Up(_) => MouseAction::Release,
        _ => return None,
    };
    Some(Input::Mouse {
        action,
        column: me.column,
        line: me.row,
    })
}

/// Translate a crossterm event. Key releases, repeats, middle-button,
/// motion, scroll and focus events yield `None`.
pub fn translate(ev: Event) -> Option<Input> {
    match ev {
        Event::Key(ke) => translate_key(ke),
        Event::Mouse(me) => translate_mouse(me),
        Event::Resize(width, height) => Some(Input::Resize { width, height }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn key_press() {
        let ev = Event::Key(KeyEvent::new(KeyCode::Char('M'), KeyModifiers::SHIFT));
        assert_eq!(translate(ev), Some(Input::Key(Key::Char('m'))));
        let ev = Event::Key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));
        assert_eq!(translate(ev), Some(Input::Key(Key::Escape)));
    }

    #[test]
    fn key_release_ignored() {
        let ev = Event::Key(KeyEvent::new_with_kind(
            KeyCode::Char('q'),
            KeyModifiers::NONE,
            KeyEventKind::Release,
        ));
        assert_eq!(translate(ev), None);
    }

    #[test]
    fn ctrl_c_quits() {
        let ev = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(translate(ev), Some(Input::Quit));
    }

    #[test]
    fn drags_paint() {
        assert_eq!(
            translate(mouse(MouseEventKind::Drag(MouseButton::Left), 4, 2)),
            Some(Input::Mouse {
                action: MouseAction::Main,
                column: 4,
                line: 2
            })
        );
        assert_eq!(
            translate(mouse(MouseEventKind::Down(MouseButton::Right), 0, 0)),
            Some(Input::Mouse {
                action: MouseAction::Secondary,
                column: 0,
                line: 0
            })
        );
        assert_eq!(translate(mouse(MouseEventKind::ScrollUp, 0, 0)), None);
        assert_eq!(translate(mouse(MouseEventKind::Moved, 3, 3)), None);
        assert_eq!(translate(mouse(MouseEventKind::Down(MouseButton::Middle), 3, 3)), None);
    }

    #[test]
    fn resize() {
        assert_eq!(
            translate(Event::Resize(80, 24)),
            Some(Input::Resize {
                width: 80,
                height: 24
            })
        );
    }
}
