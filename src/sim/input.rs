//! Held directional input

use glam::Vec2;

/// One of the four movement keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
}

const KEY_COUNT: usize = 4;

impl Key {
    /// Map a DOM `KeyboardEvent.key` name to a movement key
    pub fn from_key_name(name: &str) -> Option<Self> {
        match name {
            "ArrowUp" => Some(Key::Up),
            "ArrowDown" => Some(Key::Down),
            "ArrowLeft" => Some(Key::Left),
            "ArrowRight" => Some(Key::Right),
            _ => None,
        }
    }

    const fn index(self) -> usize {
        match self {
            Key::Up => 0,
            Key::Down => 1,
            Key::Left => 2,
            Key::Right => 3,
        }
    }
}

/// Which movement keys are currently held down
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeldKeys {
    down: [bool; KEY_COUNT],
}

impl HeldKeys {
    pub fn set(&mut self, key: Key, is_down: bool) {
        self.down[key.index()] = is_down;
    }

    pub fn is_down(&self, key: Key) -> bool {
        self.down[key.index()]
    }

    pub fn clear(&mut self) {
        self.down = [false; KEY_COUNT];
    }

    /// Unit direction of travel, or zero when nothing (or only opposites) is held
    ///
    /// Diagonals are normalized so they are no faster than straight moves.
    pub fn direction(&self) -> Vec2 {
        let mut dir = Vec2::ZERO;
        if self.is_down(Key::Up) {
            dir.y -= 1.0;
        }
        if self.is_down(Key::Down) {
            dir.y += 1.0;
        }
        if self.is_down(Key::Left) {
            dir.x -= 1.0;
        }
        if self.is_down(Key::Right) {
            dir.x += 1.0;
        }
        dir.normalize_or_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_key_names() {
        assert_eq!(Key::from_key_name("ArrowLeft"), Some(Key::Left));
        assert_eq!(Key::from_key_name("a"), None);
    }

    #[test]
    fn test_opposites_cancel() {
        let mut keys = HeldKeys::default();
        keys.set(Key::Left, true);
        keys.set(Key::Right, true);
        assert_eq!(keys.direction(), Vec2::ZERO);

        keys.set(Key::Up, true);
        assert_eq!(keys.direction(), Vec2::new(0.0, -1.0));
    }

    #[test]
    fn test_repeat_press_is_idempotent() {
        let mut once = HeldKeys::default();
        once.set(Key::Down, true);

        let mut twice = HeldKeys::default();
        twice.set(Key::Down, true);
        twice.set(Key::Down, true);

        assert_eq!(once, twice);
    }

    proptest! {
        #[test]
        fn direction_is_unit_or_zero(up: bool, down: bool, left: bool, right: bool) {
            let mut keys = HeldKeys::default();
            keys.set(Key::Up, up);
            keys.set(Key::Down, down);
            keys.set(Key::Left, left);
            keys.set(Key::Right, right);

            let len = keys.direction().length();
            prop_assert!(len == 0.0 || (len - 1.0).abs() < 1e-6);
        }
    }
}
