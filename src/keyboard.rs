use std::{
    collections::HashMap,
    time::{Duration, Instant},
};

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use crate::controller::KeyState;

/// How long a key counts as held after a press or repeat when the terminal
/// never tells us about releases.
pub const FALLBACK_HOLD: Duration = Duration::from_millis(150);

/// Held key tracking on top of terminal key events.
///
/// Terminals speaking the kitty keyboard protocol report releases, which gives
/// exact held state. Everything else only sends presses and auto-repeats, so
/// a key is considered held for `FALLBACK_HOLD` after the latest one.
#[derive(Debug)]
pub struct Keyboard {
    held: HashMap<KeyCode, Instant>,
    reports_releases: bool,
    now: Instant,
}

impl Keyboard {
    pub fn new(reports_releases: bool) -> Self {
        Self {
            held: HashMap::new(),
            reports_releases,
            now: Instant::now(),
        }
    }

    pub fn reports_releases(&self) -> bool {
        self.reports_releases
    }

    pub fn handle_key_event(&mut self, key_event: KeyEvent, at: Instant) {
        match key_event.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => {
                self.held.insert(key_event.code, at);
            }
            KeyEventKind::Release => {
                self.held.remove(&key_event.code);
            }
        }
    }

    /// Move the clock used by `is_pressed` and drop expired fallback holds.
    pub fn refresh(&mut self, now: Instant) {
        self.now = now;
        if !self.reports_releases {
            self.held
                .retain(|_, last_seen| now.saturating_duration_since(*last_seen) < FALLBACK_HOLD);
        }
    }

    /// Forget everything, e.g. after a pause when releases may have been missed.
    pub fn clear(&mut self) {
        self.held.clear();
    }
}

impl KeyState for Keyboard {
    fn is_pressed(&self, key: KeyCode) -> bool {
        match self.held.get(&key) {
            Some(_) if self.reports_releases => true,
            Some(last_seen) => self.now.saturating_duration_since(*last_seen) < FALLBACK_HOLD,
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventState, KeyModifiers};

    fn key(code: KeyCode, kind: KeyEventKind) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn press_and_release_with_release_reporting() {
        let start = Instant::now();
        let mut keyboard = Keyboard::new(true);
        assert!(keyboard.reports_releases());

        keyboard.handle_key_event(key(KeyCode::Up, KeyEventKind::Press), start);
        keyboard.refresh(start + Duration::from_secs(5));
        assert!(keyboard.is_pressed(KeyCode::Up));
        assert!(!keyboard.is_pressed(KeyCode::Down));

        keyboard.handle_key_event(key(KeyCode::Up, KeyEventKind::Release), start);
        assert!(!keyboard.is_pressed(KeyCode::Up));
    }

    #[test]
    fn fallback_hold_expires() {
        let start = Instant::now();
        let mut keyboard = Keyboard::new(false);
        assert!(!keyboard.reports_releases());

        keyboard.handle_key_event(key(KeyCode::Down, KeyEventKind::Press), start);
        keyboard.refresh(start + FALLBACK_HOLD / 2);
        assert!(keyboard.is_pressed(KeyCode::Down));

        keyboard.refresh(start + FALLBACK_HOLD);
        assert!(!keyboard.is_pressed(KeyCode::Down));
    }

    #[test]
    fn repeats_extend_the_hold() {
        let start = Instant::now();
        let mut keyboard = Keyboard::new(false);

        keyboard.handle_key_event(key(KeyCode::Down, KeyEventKind::Press), start);
        let later = start + FALLBACK_HOLD - Duration::from_millis(10);
        keyboard.handle_key_event(key(KeyCode::Down, KeyEventKind::Repeat), later);
        keyboard.refresh(start + FALLBACK_HOLD + Duration::from_millis(20));
        assert!(keyboard.is_pressed(KeyCode::Down));
    }

    #[test]
    fn clear_drops_held_keys() {
        let start = Instant::now();
        let mut keyboard = Keyboard::new(true);
        keyboard.handle_key_event(key(KeyCode::Up, KeyEventKind::Press), start);
        keyboard.clear();
        assert!(!keyboard.is_pressed(KeyCode::Up));
    }
}
