use std::fmt;

/// Keyboard key identifier.
///
/// Only the movement keys have their own variants; every other key is carried
/// as `Other` with the platform key code so it can be logged and ignored.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    W,
    A,
    S,
    D,
    /// Platform-dependent key the engine does not track.
    Other(u32),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum KeyState {
    Pressed,
    Released,
}

/// Mouse button identifier.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Other(u16),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum MouseButtonState {
    Pressed,
    Released,
}

/// Platform-agnostic input events emitted by a surface backend.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum InputEvent {
    Key { key: Key, state: KeyState },

    /// Pointer moved; position in surface pixels.
    PointerMoved { x: i32, y: i32 },

    PointerButton {
        button: MouseButton,
        state: MouseButtonState,
    },
}

impl InputEvent {
    pub fn key_pressed(key: Key) -> Self {
        Self::Key { key, state: KeyState::Pressed }
    }

    pub fn key_released(key: Key) -> Self {
        Self::Key { key, state: KeyState::Released }
    }

    pub fn button_pressed(button: MouseButton) -> Self {
        Self::PointerButton { button, state: MouseButtonState::Pressed }
    }

    pub fn button_released(button: MouseButton) -> Self {
        Self::PointerButton { button, state: MouseButtonState::Released }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Other(code) => write!(f, "key#{code}"),
            other => write!(f, "{other:?}"),
        }
    }
}
