/// Input layer — wraps the event channel fed by the reader thread.
///
/// Two deliberately separate query models, matching how the loop consumes
/// them: `drain` hands out the discrete events that arrived since the last
/// frame (quit, restart), while `held` is an idempotent snapshot of the four
/// directional keys.  The snapshot is rebuilt from press/repeat/release
/// events with a freshness window so it also works on terminals that never
/// report key releases.

use std::collections::HashMap;
use std::sync::mpsc;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use sky_dodge::entities::Held;

/// A key is considered "held" if its last press/repeat event arrived within
/// this many frames.  Covers terminals that don't emit key-release events:
/// the OS key-repeat rate is ≥ 15 Hz, so a window of 4 frames (80 ms at
/// 50 FPS) is always refreshed before expiry.
const HOLD_WINDOW: u64 = 4;

/// Discrete, one-shot requests pulled out of the event queue.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Quit,
    Restart,
}

pub struct Input {
    rx: mpsc::Receiver<Event>,
    /// Maps each live key → the frame it was last seen (press or repeat).
    key_frame: HashMap<KeyCode, u64>,
}

impl Input {
    pub fn new(rx: mpsc::Receiver<Event>) -> Input {
        Input {
            rx,
            key_frame: HashMap::new(),
        }
    }

    /// Forget all held keys.  Called when a new run starts, since frame
    /// numbers begin again at zero.
    pub fn reset(&mut self) {
        self.key_frame.clear();
    }

    /// Consume every event that arrived since the last frame (non-blocking)
    /// and return the discrete actions among them.
    pub fn drain(&mut self, frame: u64) -> Vec<Action> {
        let mut actions = Vec::new();
        while let Ok(ev) = self.rx.try_recv() {
            let Event::Key(KeyEvent {
                code,
                kind,
                modifiers,
                ..
            }) = ev
            else {
                continue;
            };
            match kind {
                KeyEventKind::Press => {
                    self.key_frame.insert(code.clone(), frame);
                    match code {
                        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                            actions.push(Action::Quit);
                        }
                        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                            actions.push(Action::Quit);
                        }
                        KeyCode::Char('r') | KeyCode::Char('R') => {
                            actions.push(Action::Restart);
                        }
                        _ => {}
                    }
                }
                // Repeat: refresh timestamp so the key stays "held"
                KeyEventKind::Repeat => {
                    self.key_frame.insert(code.clone(), frame);
                }
                // Release: drop the key immediately (keyboard-enhancement path)
                KeyEventKind::Release => {
                    self.key_frame.remove(&code);
                }
            }
        }
        actions
    }

    fn is_held(&self, key: KeyCode, frame: u64) -> bool {
        self.key_frame
            .get(&key)
            .map(|&last| frame.saturating_sub(last) <= HOLD_WINDOW)
            .unwrap_or(false)
    }

    /// Snapshot of the four directional keys (arrows and WASD).
    pub fn held(&self, frame: u64) -> Held {
        Held {
            up: self.is_held(KeyCode::Up, frame)
                || self.is_held(KeyCode::Char('w'), frame)
                || self.is_held(KeyCode::Char('W'), frame),
            down: self.is_held(KeyCode::Down, frame)
                || self.is_held(KeyCode::Char('s'), frame)
                || self.is_held(KeyCode::Char('S'), frame),
            left: self.is_held(KeyCode::Left, frame)
                || self.is_held(KeyCode::Char('a'), frame)
                || self.is_held(KeyCode::Char('A'), frame),
            right: self.is_held(KeyCode::Right, frame)
                || self.is_held(KeyCode::Char('d'), frame)
                || self.is_held(KeyCode::Char('D'), frame),
        }
    }

    /// Block until the user picks an action on the game-over screen.
    /// A closed channel counts as quitting.
    pub fn next_action(&mut self) -> Action {
        loop {
            let Ok(ev) = self.rx.recv() else {
                return Action::Quit;
            };
            if let Event::Key(KeyEvent {
                code,
                kind: KeyEventKind::Press,
                modifiers,
                ..
            }) = ev
            {
                match code {
                    KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                        return Action::Quit;
                    }
                    KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                        return Action::Quit;
                    }
                    KeyCode::Char('r') | KeyCode::Char('R') => return Action::Restart,
                    _ => {}
                }
            }
        }
    }
}
