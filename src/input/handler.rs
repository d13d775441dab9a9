use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::game::{Direction, KeyState};

/// What a key event means to the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Steer(Direction),
    Quit,
    None,
}

/// Turns crossterm key events into the held-key state sampled each frame.
///
/// Terminals that report key releases keep a key held until its release
/// arrives. Everywhere else a key only counts for the frame its press (or
/// auto-repeat) event arrived in.
pub struct InputHandler {
    held: KeyState,
    reports_release: bool,
}

impl InputHandler {
    pub fn new(reports_release: bool) -> Self {
        Self {
            held: KeyState::none(),
            reports_release,
        }
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) -> KeyAction {
        let action = Self::map_key(key);

        if let KeyAction::Steer(direction) = action {
            match key.kind {
                KeyEventKind::Press | KeyEventKind::Repeat => self.held.set(direction, true),
                KeyEventKind::Release => self.held.set(direction, false),
            }
        }

        // Only act on presses for host commands, not on release
        if action == KeyAction::Quit && key.kind == KeyEventKind::Release {
            return KeyAction::None;
        }

        action
    }

    /// Keys held for the frame being run
    pub fn keys(&self) -> KeyState {
        self.held
    }

    /// Forget press-only keys once the frame has consumed them
    pub fn end_frame(&mut self) {
        if !self.reports_release {
            self.held = KeyState::none();
        }
    }

    fn map_key(key: KeyEvent) -> KeyAction {
        // Handle Ctrl+C
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        match key.code {
            // Movement - Arrow keys
            KeyCode::Up => KeyAction::Steer(Direction::Up),
            KeyCode::Down => KeyAction::Steer(Direction::Down),
            KeyCode::Left => KeyAction::Steer(Direction::Left),
            KeyCode::Right => KeyAction::Steer(Direction::Right),

            // Movement - WASD
            KeyCode::Char('w') | KeyCode::Char('W') => KeyAction::Steer(Direction::Up),
            KeyCode::Char('s') | KeyCode::Char('S') => KeyAction::Steer(Direction::Down),
            KeyCode::Char('a') | KeyCode::Char('A') => KeyAction::Steer(Direction::Left),
            KeyCode::Char('d') | KeyCode::Char('D') => KeyAction::Steer(Direction::Right),

            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => KeyAction::Quit,

            _ => KeyAction::None,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn release(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn test_arrow_keys() {
        let mut handler = InputHandler::default();

        let up = KeyEvent::new(KeyCode::Up, KeyModifiers::NONE);
        assert_eq!(handler.handle_key_event(up), KeyAction::Steer(Direction::Up));

        let down = KeyEvent::new(KeyCode::Down, KeyModifiers::NONE);
        assert_eq!(
            handler.handle_key_event(down),
            KeyAction::Steer(Direction::Down)
        );

        let left = KeyEvent::new(KeyCode::Left, KeyModifiers::NONE);
        assert_eq!(
            handler.handle_key_event(left),
            KeyAction::Steer(Direction::Left)
        );

        let right = KeyEvent::new(KeyCode::Right, KeyModifiers::NONE);
        assert_eq!(
            handler.handle_key_event(right),
            KeyAction::Steer(Direction::Right)
        );
    }

    #[test]
    fn test_wasd_keys() {
        let mut handler = InputHandler::default();

        let w = KeyEvent::new(KeyCode::Char('w'), KeyModifiers::NONE);
        assert_eq!(handler.handle_key_event(w), KeyAction::Steer(Direction::Up));

        let a = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        assert_eq!(handler.handle_key_event(a), KeyAction::Steer(Direction::Left));

        let s = KeyEvent::new(KeyCode::Char('s'), KeyModifiers::NONE);
        assert_eq!(handler.handle_key_event(s), KeyAction::Steer(Direction::Down));

        let d = KeyEvent::new(KeyCode::Char('D'), KeyModifiers::SHIFT);
        assert_eq!(
            handler.handle_key_event(d),
            KeyAction::Steer(Direction::Right)
        );
    }

    #[test]
    fn test_quit_keys() {
        let mut handler = InputHandler::default();

        let q = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        assert_eq!(handler.handle_key_event(q), KeyAction::Quit);

        let esc = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        assert_eq!(handler.handle_key_event(esc), KeyAction::Quit);

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handler.handle_key_event(ctrl_c), KeyAction::Quit);

        assert_eq!(handler.handle_key_event(release(KeyCode::Esc)), KeyAction::None);
    }

    #[test]
    fn test_unknown_key() {
        let mut handler = InputHandler::default();

        let x = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE);
        assert_eq!(handler.handle_key_event(x), KeyAction::None);
        assert_eq!(handler.keys(), KeyState::none());
    }

    #[test]
    fn test_press_only_keys_last_one_frame() {
        let mut handler = InputHandler::new(false);

        handler.handle_key_event(KeyEvent::new(KeyCode::Up, KeyModifiers::NONE));
        handler.handle_key_event(KeyEvent::new(KeyCode::Left, KeyModifiers::NONE));
        assert_eq!(
            handler.keys(),
            KeyState {
                up: true,
                left: true,
                ..KeyState::none()
            }
        );

        handler.end_frame();
        assert_eq!(handler.keys(), KeyState::none());
    }

    #[test]
    fn test_held_keys_survive_until_release() {
        let mut handler = InputHandler::new(true);

        handler.handle_key_event(KeyEvent::new(KeyCode::Up, KeyModifiers::NONE));
        handler.end_frame();
        assert_eq!(handler.keys(), KeyState::only(Direction::Up));

        handler.handle_key_event(release(KeyCode::Up));
        assert_eq!(handler.keys(), KeyState::none());
    }
}
