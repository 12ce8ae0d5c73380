//! Platform-agnostic input handling system
use std::collections::HashSet;

/// Abstract movement directions a held key can stand for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveIntent {
    Forward,
    Back,
    StrafeLeft,
    StrafeRight,
    Up,
    Down,
}

/// Platform-independent input events
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    IntentPressed(MoveIntent),
    IntentReleased(MoveIntent),

    /// Absolute cursor position; converted to deltas by [`MouseTracker`]
    CursorMoved { x: f64, y: f64 },
    /// Raw relative motion, already a delta
    MouseMotion { dx: f32, dy: f32 },
    CursorLeft,
    CursorEntered,

    PlaceRequested,
    FocusLost,
}

/// Turns absolute cursor positions into since-last-sample deltas.
///
/// After a reset the next position only re-anchors the tracker, so the
/// cursor coming back in somewhere else does not whip the camera around.
#[derive(Debug, Default, Clone)]
pub struct MouseTracker {
    last: Option<(f64, f64)>,
}

impl MouseTracker {
    pub fn sample(&mut self, x: f64, y: f64) -> Option<(f32, f32)> {
        let delta = self
            .last
            .map(|(lx, ly)| ((x - lx) as f32, (y - ly) as f32));
        self.last = Some((x, y));
        delta
    }

    pub fn reset(&mut self) {
        self.last = None;
    }
}

/// Look and place input, kept in arrival order so each mouse sample is
/// clamped on its own and a place uses the camera as it was at the click
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PendingAction {
    Look { dx: f32, dy: f32 },
    Place,
}

/// What the frame loop consumes at the top of each tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputSnapshot {
    pub held: HashSet<MoveIntent>,
    pub actions: Vec<PendingAction>,
}

/// Input accumulated between ticks
#[derive(Debug, Default)]
pub struct InputState {
    pub held: HashSet<MoveIntent>,
    pending: Vec<PendingAction>,
    mouse: MouseTracker,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process an input event and update state
    pub fn process_event(&mut self, event: &InputEvent) {
        match event {
            InputEvent::IntentPressed(intent) => {
                self.held.insert(*intent);
            }
            InputEvent::IntentReleased(intent) => {
                self.held.remove(intent);
            }
            InputEvent::CursorMoved { x, y } => {
                if let Some((dx, dy)) = self.mouse.sample(*x, *y) {
                    self.push_look(dx, dy);
                }
            }
            InputEvent::MouseMotion { dx, dy } => self.push_look(*dx, *dy),
            InputEvent::CursorLeft | InputEvent::CursorEntered => self.mouse.reset(),
            InputEvent::PlaceRequested => self.pending.push(PendingAction::Place),
            InputEvent::FocusLost => {
                self.clear_intents();
                self.mouse.reset();
            }
        }
    }

    pub fn clear_intents(&mut self) {
        self.held.clear();
    }

    fn push_look(&mut self, dx: f32, dy: f32) {
        if dx != 0.0 || dy != 0.0 {
            self.pending.push(PendingAction::Look { dx, dy });
        }
    }

    /// Held intents stay held; pending actions are drained
    pub fn snapshot(&mut self) -> InputSnapshot {
        InputSnapshot {
            held: self.held.clone(),
            actions: std::mem::take(&mut self.pending),
        }
    }
}

pub mod native {
    use super::*;
    use winit::event::{ElementState, MouseButton};
    use winit::keyboard::KeyCode;

    /// Key mapping configuration
    #[derive(Clone, Debug)]
    pub struct KeyBindings {
        pub forward: KeyCode,
        pub back: KeyCode,
        pub strafe_left: KeyCode,
        pub strafe_right: KeyCode,
        pub up: KeyCode,
        pub down: KeyCode,
        pub place: MouseButton,
    }

    impl Default for KeyBindings {
        fn default() -> Self {
            Self {
                forward: KeyCode::KeyW,
                back: KeyCode::KeyS,
                strafe_left: KeyCode::KeyA,
                strafe_right: KeyCode::KeyD,
                up: KeyCode::KeyE,
                down: KeyCode::KeyQ,
                place: MouseButton::Right,
            }
        }
    }

    impl KeyBindings {
        pub fn intent_for(&self, code: KeyCode) -> Option<MoveIntent> {
            match code {
                c if c == self.forward => Some(MoveIntent::Forward),
                c if c == self.back => Some(MoveIntent::Back),
                c if c == self.strafe_left => Some(MoveIntent::StrafeLeft),
                c if c == self.strafe_right => Some(MoveIntent::StrafeRight),
                c if c == self.up => Some(MoveIntent::Up),
                c if c == self.down => Some(MoveIntent::Down),
                _ => None,
            }
        }

        pub fn key_to_input(&self, code: KeyCode, state: ElementState) -> Option<InputEvent> {
            let intent = self.intent_for(code)?;
            Some(match state {
                ElementState::Pressed => InputEvent::IntentPressed(intent),
                ElementState::Released => InputEvent::IntentReleased(intent),
            })
        }

        pub fn mouse_to_input(&self, button: MouseButton, state: ElementState) -> Option<InputEvent> {
            (button == self.place && state == ElementState::Pressed).then_some(InputEvent::PlaceRequested)
        }
    }
}
