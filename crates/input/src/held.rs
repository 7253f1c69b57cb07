//! Held-key tracking for terminals without key-release events.
//!
//! The platformer wants level signals ("is left held right now") and a
//! jump edge, but most terminals only deliver press/repeat events. A key
//! therefore counts as held from its latest event until either a real
//! release arrives or it goes silent for a timeout.

use std::time::Instant;

use crossterm::event::KeyCode;

use crate::types::InputState;

// A single tap must not read as a sustained hold, and a held key's
// repeat events arrive well inside this window on every common terminal.
const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u64 = 150;

/// Logical keys the platformer cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Left,
    Right,
    Up,
    Down,
    Jump,
}

const SLOT_COUNT: usize = 5;

fn slot_for(code: KeyCode) -> Option<Slot> {
    match code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Slot::Left),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Slot::Right),
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(Slot::Up),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(Slot::Down),
        KeyCode::Char(' ') => Some(Slot::Jump),
        _ => None,
    }
}

/// Tracks which movement keys are currently held.
///
/// Owns the jump edge: a fresh Space press sets `InputState::jump`; the
/// engine clears it when the jump is consumed, and press repeats never
/// re-set it while the key stays held.
#[derive(Debug, Clone)]
pub struct HeldKeys {
    last_seen: [Option<Instant>; SLOT_COUNT],
    timeout_ms: u64,
}

impl HeldKeys {
    pub fn new() -> Self {
        Self {
            last_seen: [None; SLOT_COUNT],
            timeout_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
        }
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Feed a press or repeat event.
    pub fn key_press(&mut self, code: KeyCode, input: &mut InputState) {
        let Some(slot) = slot_for(code) else {
            return;
        };

        if slot == Slot::Jump && self.last_seen[slot as usize].is_none() {
            // Fresh press only: a repeat of a held Space is not an edge.
            input.jump = true;
        }
        self.last_seen[slot as usize] = Some(Instant::now());
    }

    /// Feed a real release event (terminals that support them).
    pub fn key_release(&mut self, code: KeyCode, input: &mut InputState) {
        let Some(slot) = slot_for(code) else {
            return;
        };

        self.last_seen[slot as usize] = None;
        if slot == Slot::Jump {
            input.jump = false;
        }
    }

    /// Expire silent keys and rewrite the axis signals for this frame.
    ///
    /// The jump flag is only touched when the Space slot expires; its
    /// set/clear is otherwise owned by `key_press` and the engine.
    pub fn update(&mut self, input: &mut InputState) {
        for idx in 0..SLOT_COUNT {
            if let Some(seen) = self.last_seen[idx] {
                if seen.elapsed().as_millis() as u64 > self.timeout_ms {
                    self.last_seen[idx] = None;
                    if idx == Slot::Jump as usize {
                        input.jump = false;
                    }
                }
            }
        }

        input.left = self.axis(Slot::Left);
        input.right = self.axis(Slot::Right);
        input.up = self.axis(Slot::Up);
        input.down = self.axis(Slot::Down);
    }

    /// Forget everything held (demo switch or reset).
    pub fn reset(&mut self, input: &mut InputState) {
        self.last_seen = [None; SLOT_COUNT];
        *input = InputState::default();
    }

    fn axis(&self, slot: Slot) -> f32 {
        if self.last_seen[slot as usize].is_some() {
            1.0
        } else {
            0.0
        }
    }
}

impl Default for HeldKeys {
    fn default() -> Self {
        Self::new()
    }
}
