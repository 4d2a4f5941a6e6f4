//! Keyboard mapping for the paddle game
//!
//! Codes follow `KeyboardEvent.code`: arrows or A/D steer, Space serves.

use crate::sim::{Direction, PaddleGame};

/// What a key means to the paddle game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Steer(Direction),
    Serve,
}

/// Map a key code to its action. Unknown codes map to `None`.
pub fn key_action(code: &str) -> Option<KeyAction> {
    match code {
        "ArrowLeft" | "KeyA" => Some(KeyAction::Steer(Direction::Left)),
        "ArrowRight" | "KeyD" => Some(KeyAction::Steer(Direction::Right)),
        "Space" => Some(KeyAction::Serve),
        _ => None,
    }
}

/// Apply a key press or release. Returns true if the key was recognised.
///
/// Serve only acts on key-down and only while the ball is out of play.
pub fn dispatch_key(game: &mut PaddleGame, code: &str, pressed: bool) -> bool {
    match key_action(code) {
        Some(KeyAction::Steer(direction)) => {
            if pressed {
                game.key_down(direction);
            } else {
                game.key_up(direction);
            }
            true
        }
        Some(KeyAction::Serve) => {
            if pressed && !game.is_running() {
                game.serve();
            }
            true
        }
        None => false,
    }
}

/// Whether a DOM keyboard event type is a press (`keydown`) or a release
/// (`keyup`). Other event types map to `None`.
pub fn key_event_pressed(event_type: &str) -> Option<bool> {
    match event_type {
        "keydown" => Some(true),
        "keyup" => Some(false),
        _ => None,
    }
}

/// Apply a raw keyboard event by type and code. Returns true if the key was
/// recognised, which tells the host to suppress the browser default.
pub fn dispatch_key_event(game: &mut PaddleGame, event_type: &str, code: &str) -> bool {
    match key_event_pressed(event_type) {
        Some(pressed) => dispatch_key(game, code, pressed),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_map() {
        assert_eq!(key_action("KeyA"), Some(KeyAction::Steer(Direction::Left)));
        assert_eq!(key_action("ArrowRight"), Some(KeyAction::Steer(Direction::Right)));
        assert_eq!(key_action("Space"), Some(KeyAction::Serve));
        assert_eq!(key_action("KeyW"), None);
    }

    #[test]
    fn test_dispatch_steering() {
        let mut game = PaddleGame::new(5);
        assert!(dispatch_key(&mut game, "KeyD", true));
        assert!(game.input().move_right);
        assert!(dispatch_key(&mut game, "KeyD", false));
        assert!(!game.input().move_right);
        assert!(!dispatch_key(&mut game, "Enter", true));
    }

    #[test]
    fn test_space_does_nothing_while_running() {
        let mut game = PaddleGame::new(5);
        let ball = *game.ball();
        assert!(dispatch_key(&mut game, "Space", true));
        assert_eq!(*game.ball(), ball);
    }

    #[test]
    fn test_event_types() {
        assert_eq!(key_event_pressed("keydown"), Some(true));
        assert_eq!(key_event_pressed("keyup"), Some(false));
        assert_eq!(key_event_pressed("keypress"), None);
    }

    #[test]
    fn test_dispatch_key_event_press_and_release() {
        let mut game = PaddleGame::new(5);
        assert!(dispatch_key_event(&mut game, "keydown", "ArrowLeft"));
        assert!(game.input().move_left);
        assert!(dispatch_key_event(&mut game, "keyup", "ArrowLeft"));
        assert!(!game.input().move_left);

        // Unknown type or code is not handled and leaves input alone
        assert!(!dispatch_key_event(&mut game, "keypress", "ArrowLeft"));
        assert!(!dispatch_key_event(&mut game, "keydown", "KeyQ"));
        assert!(!game.input().move_left);
    }

    #[test]
    fn test_space_keydown_serves_after_miss() {
        let mut game = PaddleGame::new(5);
        game.place_ball(glam::Vec2::new(20.0, 1000.0), glam::Vec2::new(0.0, 1.0));
        game.advance_frame();
        assert!(!game.is_running());

        assert!(dispatch_key_event(&mut game, "keyup", "Space"));
        assert!(!game.is_running());
        assert!(dispatch_key_event(&mut game, "keydown", "Space"));
        assert!(game.is_running());
    }
}
