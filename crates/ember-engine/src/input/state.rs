use super::types::{InputEvent, Key, KeyState, MouseButton, MouseButtonState};

/// Latest known state of the tracked keys and the mouse.
///
/// Sticky: a key or button stays down across frames until its release event
/// arrives. Mutated only by the engine's event drain; callbacks get `&Self`.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    pub key_w: bool,
    pub key_a: bool,
    pub key_s: bool,
    pub key_d: bool,

    /// Pointer position in surface pixels.
    pub mouse_pos: (i32, i32),
    pub mouse_left: bool,
    pub mouse_right: bool,
}

/// Boolean field of an [`InputSnapshot`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum InputField {
    KeyW,
    KeyA,
    KeyS,
    KeyD,
    MouseLeft,
    MouseRight,
}

/// A single snapshot mutation.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Transition {
    Set(InputField, bool),
    MoveTo(i32, i32),
}

/// Which input devices feed the snapshot.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct InputFilter {
    pub keyboard: bool,
    pub mouse: bool,
}

impl Default for InputFilter {
    fn default() -> Self {
        Self { keyboard: true, mouse: true }
    }
}

const KEY_TABLE: [(Key, InputField); 4] = [
    (Key::W, InputField::KeyW),
    (Key::A, InputField::KeyA),
    (Key::S, InputField::KeyS),
    (Key::D, InputField::KeyD),
];

const BUTTON_TABLE: [(MouseButton, InputField); 2] = [
    (MouseButton::Left, InputField::MouseLeft),
    (MouseButton::Right, InputField::MouseRight),
];

/// Maps an event to the snapshot mutation it causes, if any.
///
/// Untracked keys/buttons and events from disabled devices map to `None`.
pub fn transition(event: &InputEvent, filter: InputFilter) -> Option<Transition> {
    match *event {
        InputEvent::Key { key, state } if filter.keyboard => {
            let field = KEY_TABLE.iter().find(|(k, _)| *k == key)?.1;
            Some(Transition::Set(field, state == KeyState::Pressed))
        }

        InputEvent::PointerMoved { x, y } if filter.mouse => Some(Transition::MoveTo(x, y)),

        InputEvent::PointerButton { button, state } if filter.mouse => {
            let field = BUTTON_TABLE.iter().find(|(b, _)| *b == button)?.1;
            Some(Transition::Set(field, state == MouseButtonState::Pressed))
        }

        _ => None,
    }
}

impl InputSnapshot {
    /// Folds one event into the snapshot. Returns whether anything changed hands.
    pub fn apply_event(&mut self, event: &InputEvent, filter: InputFilter) -> bool {
        match transition(event, filter) {
            Some(t) => {
                self.apply(t);
                true
            }
            None => false,
        }
    }

    pub fn apply(&mut self, transition: Transition) {
        match transition {
            Transition::Set(field, down) => *self.field_mut(field) = down,
            Transition::MoveTo(x, y) => self.mouse_pos = (x, y),
        }
    }

    pub fn get(&self, field: InputField) -> bool {
        match field {
            InputField::KeyW => self.key_w,
            InputField::KeyA => self.key_a,
            InputField::KeyS => self.key_s,
            InputField::KeyD => self.key_d,
            InputField::MouseLeft => self.mouse_left,
            InputField::MouseRight => self.mouse_right,
        }
    }

    fn field_mut(&mut self, field: InputField) -> &mut bool {
        match field {
            InputField::KeyW => &mut self.key_w,
            InputField::KeyA => &mut self.key_a,
            InputField::KeyS => &mut self.key_s,
            InputField::KeyD => &mut self.key_d,
            InputField::MouseLeft => &mut self.mouse_left,
            InputField::MouseRight => &mut self.mouse_right,
        }
    }

    /// Movement axis from W/A/S/D: `(-1..=1, -1..=1)`, +Y down.
    pub fn movement(&self) -> (i32, i32) {
        let x = i32::from(self.key_d) - i32::from(self.key_a);
        let y = i32::from(self.key_s) - i32::from(self.key_w);
        (x, y)
    }
}
