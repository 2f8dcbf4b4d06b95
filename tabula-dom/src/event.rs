use crossterm::event::{
    Event as CrosstermEvent, KeyEventKind, MouseEvent, MouseEventKind,
};

/// Host input events, already reduced to what widgets care about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Key press
    Key { key: Key, modifiers: Modifiers },
    /// Mouse button pressed at a position
    Click { x: u16, y: u16, button: MouseButton },
    /// Mouse wheel
    Scroll { x: u16, y: u16, delta_y: i16 },
    /// Terminal resized
    Resize { width: u16, height: u16 },
}

impl Event {
    /// Convert a raw crossterm event, dropping the ones nothing handles
    /// (key releases, mouse moves, focus and paste events).
    pub fn from_crossterm(event: CrosstermEvent) -> Option<Self> {
        match event {
            CrosstermEvent::Key(key) if key.kind != KeyEventKind::Release => Some(Event::Key {
                key: key.code.into(),
                modifiers: key.modifiers.into(),
            }),
            CrosstermEvent::Mouse(mouse) => Self::from_mouse(mouse),
            CrosstermEvent::Resize(width, height) => Some(Event::Resize { width, height }),
            _ => None,
        }
    }

    fn from_mouse(mouse: MouseEvent) -> Option<Self> {
        let (x, y) = (mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(button) => Some(Event::Click {
                x,
                y,
                button: button.into(),
            }),
            MouseEventKind::ScrollUp => Some(Event::Scroll { x, y, delta_y: -1 }),
            MouseEventKind::ScrollDown => Some(Event::Scroll { x, y, delta_y: 1 }),
            _ => None,
        }
    }
}

/// Simplified key representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Backspace,
    Delete,
    Tab,
    BackTab,
    Escape,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    Insert,
    F(u8),
    Unsupported,
}

/// Key modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shift() -> Self {
        Self {
            shift: true,
            ..Default::default()
        }
    }

    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Default::default()
        }
    }

    pub fn alt() -> Self {
        Self {
            alt: true,
            ..Default::default()
        }
    }

    pub fn none(&self) -> bool {
        !self.shift && !self.ctrl && !self.alt
    }
}

/// Mouse button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

impl From<crossterm::event::KeyCode> for Key {
    fn from(code: crossterm::event::KeyCode) -> Self {
        use crossterm::event::KeyCode;
        match code {
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Enter => Key::Enter,
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Delete => Key::Delete,
            KeyCode::Tab => Key::Tab,
            KeyCode::BackTab => Key::BackTab,
            KeyCode::Esc => Key::Escape,
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            KeyCode::Home => Key::Home,
            KeyCode::End => Key::End,
            KeyCode::PageUp => Key::PageUp,
            KeyCode::PageDown => Key::PageDown,
            KeyCode::Insert => Key::Insert,
            KeyCode::F(n) => Key::F(n),
            _ => Key::Unsupported,
        }
    }
}

impl From<crossterm::event::KeyModifiers> for Modifiers {
    fn from(mods: crossterm::event::KeyModifiers) -> Self {
        use crossterm::event::KeyModifiers;
        Self {
            shift: mods.contains(KeyModifiers::SHIFT),
            ctrl: mods.contains(KeyModifiers::CONTROL),
            alt: mods.contains(KeyModifiers::ALT),
        }
    }
}

impl From<crossterm::event::MouseButton> for MouseButton {
    fn from(btn: crossterm::event::MouseButton) -> Self {
        use crossterm::event::MouseButton as CtBtn;
        match btn {
            CtBtn::Left => MouseButton::Left,
            CtBtn::Right => MouseButton::Right,
            CtBtn::Middle => MouseButton::Middle,
        }
    }
}
