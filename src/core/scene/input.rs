//! Key mapping from window events to player moves.

use winit::keyboard::KeyCode;

use crate::core::scene::player::Direction;

/// Maps a pressed key to a movement direction. Arrows and WASD.
pub fn map_key(code: KeyCode) -> Option<Direction> {
    match code {
        KeyCode::ArrowUp | KeyCode::KeyW => Some(Direction::Up),
        KeyCode::ArrowDown | KeyCode::KeyS => Some(Direction::Down),
        KeyCode::ArrowLeft | KeyCode::KeyA => Some(Direction::Left),
        KeyCode::ArrowRight | KeyCode::KeyD => Some(Direction::Right),
        _ => None,
    }
}

/// Q quits, as in the original drivers; Escape too.
pub fn is_quit(code: KeyCode) -> bool {
    matches!(code, KeyCode::KeyQ | KeyCode::Escape)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_and_wasd_map_to_the_same_directions() {
        assert_eq!(map_key(KeyCode::ArrowUp), Some(Direction::Up));
        assert_eq!(map_key(KeyCode::KeyW), Some(Direction::Up));
        assert_eq!(map_key(KeyCode::ArrowDown), Some(Direction::Down));
        assert_eq!(map_key(KeyCode::KeyS), Some(Direction::Down));
        assert_eq!(map_key(KeyCode::ArrowLeft), Some(Direction::Left));
        assert_eq!(map_key(KeyCode::KeyA), Some(Direction::Left));
        assert_eq!(map_key(KeyCode::ArrowRight), Some(Direction::Right));
        assert_eq!(map_key(KeyCode::KeyD), Some(Direction::Right));
    }

    #[test]
    fn unrelated_keys_do_not_move() {
        assert_eq!(map_key(KeyCode::Space), None);
        assert_eq!(map_key(KeyCode::Enter), None);
    }

    #[test]
    fn quit_keys() {
        assert!(is_quit(KeyCode::KeyQ));
        assert!(is_quit(KeyCode::Escape));
        assert!(!is_quit(KeyCode::KeyW));
    }
}
