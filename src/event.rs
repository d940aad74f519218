use crossterm::event::{Event as CrosstermEvent, KeyEventKind, MouseEventKind};

/// Input signals the classifier consumes.
///
/// Container-scoped signals (`PointerDown`, `Wheel`, `TouchStart`) carry a
/// position and are routed by rect containment; `Scroll` carries the
/// container id directly. The rest are window-scoped and reach every
/// attachment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Pointer button pressed at a position.
    PointerDown {
        x: u16,
        y: u16,
        button: PointerButton,
    },
    /// Pointer button released anywhere in the window.
    PointerUp {
        x: u16,
        y: u16,
        button: PointerButton,
    },
    /// Pointer left the window entirely.
    PointerLeave,
    /// Key pressed anywhere in the window.
    KeyDown { key: Key, modifiers: Modifiers },
    /// Wheel tick over a position.
    Wheel {
        x: u16,
        y: u16,
        delta_x: i16,
        delta_y: i16,
    },
    /// Touch contact started at a position.
    TouchStart { x: u16, y: u16 },
    /// A container's scroll position may have changed.
    Scroll { target: String },
}

/// Simplified key representation.
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
}

impl Key {
    /// Keys that scroll a container when pressed (arrows, paging, Home/End).
    pub fn is_navigation(&self) -> bool {
        matches!(
            self,
            Key::Up
                | Key::Down
                | Key::Left
                | Key::Right
                | Key::PageUp
                | Key::PageDown
                | Key::Home
                | Key::End
        )
    }
}

/// Key modifiers.
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

    pub fn none(&self) -> bool {
        !self.shift && !self.ctrl && !self.alt
    }
}

/// Pointer button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    Left,
    Right,
    Middle,
}

impl Event {
    /// Map a raw crossterm event to a classifier signal.
    ///
    /// Wheel ticks become unit deltas. Terminal focus loss stands in for
    /// the pointer leaving the window. Crossterm has no touch events, so
    /// `TouchStart` is never produced here; hosts with touch input
    /// synthesize it themselves.
    pub fn from_crossterm(raw: &CrosstermEvent) -> Option<Self> {
        match raw {
            CrosstermEvent::Key(key_event) => {
                // Only process key press events (not release/repeat on some terminals)
                if key_event.kind != KeyEventKind::Press {
                    return None;
                }
                Some(Event::KeyDown {
                    key: key_event.code.into(),
                    modifiers: key_event.modifiers.into(),
                })
            }
            CrosstermEvent::Mouse(mouse) => {
                let x = mouse.column;
                let y = mouse.row;
                match mouse.kind {
                    MouseEventKind::Down(button) => Some(Event::PointerDown {
                        x,
                        y,
                        button: button.into(),
                    }),
                    MouseEventKind::Up(button) => Some(Event::PointerUp {
                        x,
                        y,
                        button: button.into(),
                    }),
                    MouseEventKind::ScrollUp => Some(Event::Wheel {
                        x,
                        y,
                        delta_x: 0,
                        delta_y: -1,
                    }),
                    MouseEventKind::ScrollDown => Some(Event::Wheel {
                        x,
                        y,
                        delta_x: 0,
                        delta_y: 1,
                    }),
                    MouseEventKind::ScrollLeft => Some(Event::Wheel {
                        x,
                        y,
                        delta_x: -1,
                        delta_y: 0,
                    }),
                    MouseEventKind::ScrollRight => Some(Event::Wheel {
                        x,
                        y,
                        delta_x: 1,
                        delta_y: 0,
                    }),
                    _ => None,
                }
            }
            CrosstermEvent::FocusLost => Some(Event::PointerLeave),
            _ => None,
        }
    }
}

// Conversion from crossterm types
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
            _ => Key::Char('\0'), // Placeholder for unsupported keys
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

impl From<crossterm::event::MouseButton> for PointerButton {
    fn from(btn: crossterm::event::MouseButton) -> Self {
        use crossterm::event::MouseButton as CtBtn;
        match btn {
            CtBtn::Left => PointerButton::Left,
            CtBtn::Right => PointerButton::Right,
            CtBtn::Middle => PointerButton::Middle,
        }
    }
}
