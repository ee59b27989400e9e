// Input handling with per-key behavior
//
// Navigation keys repeat while held. Action keys (hide, load more, quit)
// fire once per press, with a debounce for terminals that never send
// release events. Holding `d` must not wipe out the whole feed.

use crossterm::event::KeyCode;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Minimum gap between two triggers of the same action key without a release
const ACTION_DEBOUNCE: Duration = Duration::from_millis(150);

/// How a key behaves when pressed/held
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyBehavior {
    /// Fire once per press
    Action,
    /// Fire on press, then keep firing at `interval` while held
    Repeat { interval: Duration },
}

#[derive(Debug, Default)]
struct KeyState {
    held: bool,
    last_fired: Option<Instant>,
}

/// Tracks key state and decides whether a press should trigger its action
pub struct InputHandler {
    states: HashMap<KeyCode, KeyState>,
    behaviors: HashMap<KeyCode, KeyBehavior>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            states: HashMap::new(),
            behaviors: HashMap::new(),
        }
    }

    pub fn configure_keys(&mut self, keys: &[KeyCode], behavior: KeyBehavior) {
        for key in keys {
            self.behaviors.insert(*key, behavior);
        }
    }

    /// Returns true if the key's action should run now
    pub fn handle_key_press(&mut self, key: KeyCode) -> bool {
        self.handle_key_press_at(key, Instant::now())
    }

    fn handle_key_press_at(&mut self, key: KeyCode, now: Instant) -> bool {
        let behavior = self
            .behaviors
            .get(&key)
            .copied()
            .unwrap_or(KeyBehavior::Action);
        let state = self.states.entry(key).or_default();

        let gap = match behavior {
            KeyBehavior::Action => ACTION_DEBOUNCE,
            KeyBehavior::Repeat { interval } => interval,
        };

        let fire = !state.held
            || state
                .last_fired
                .map_or(true, |last| now.duration_since(last) >= gap);

        state.held = true;
        if fire {
            state.last_fired = Some(now);
        }
        fire
    }

    pub fn handle_key_release(&mut self, key: KeyCode) {
        if let Some(state) = self.states.get_mut(&key) {
            state.held = false;
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        let mut handler = Self::new();
        handler.configure_keys(
            &[
                KeyCode::Up,
                KeyCode::Down,
                KeyCode::Char('j'),
                KeyCode::Char('k'),
            ],
            KeyBehavior::Repeat {
                interval: Duration::from_millis(50),
            },
        );
        handler
    }
}
