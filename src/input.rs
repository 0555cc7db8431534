//! Keyboard-to-action translation. Both environments bind the same four
//! arrow keys to the codes 0..=3 but assign them different semantics.

use crate::{grid, Action};

/// Lander action codes.
pub const FIRE_LEFT: Action = 0;
pub const FIRE_MAIN: Action = 1;
pub const FIRE_RIGHT: Action = 2;
pub const NO_OP: Action = 3;

/// The four mapped keys. Anything else never reaches the mapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrowKey {
    Left = 0,
    Down = 1,
    Right = 2,
    Up = 3,
}

/// Fixed per-environment binding of [`ArrowKey`] to action codes.
#[derive(Debug, Clone, Copy)]
pub struct InputMapper {
    bindings: [Action; 4],
}

impl InputMapper {
    /// Arrows move the agent in the pressed direction.
    pub fn frozen_lake() -> Self {
        Self {
            bindings: [grid::LEFT, grid::DOWN, grid::RIGHT, grid::UP],
        }
    }

    /// Left/right/down fire the side and main engines; up coasts.
    pub fn lunar_lander() -> Self {
        Self {
            bindings: [FIRE_LEFT, FIRE_MAIN, FIRE_RIGHT, NO_OP],
        }
    }

    pub fn action_for(&self, key: ArrowKey) -> Action {
        self.bindings[key as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frozen_lake_binds_arrows_to_directions() {
        let mapper = InputMapper::frozen_lake();
        assert_eq!(mapper.action_for(ArrowKey::Left), grid::LEFT);
        assert_eq!(mapper.action_for(ArrowKey::Down), grid::DOWN);
        assert_eq!(mapper.action_for(ArrowKey::Right), grid::RIGHT);
        assert_eq!(mapper.action_for(ArrowKey::Up), grid::UP);
    }

    #[test]
    fn lunar_lander_binds_arrows_to_engines() {
        let mapper = InputMapper::lunar_lander();
        assert_eq!(mapper.action_for(ArrowKey::Left), FIRE_LEFT);
        assert_eq!(mapper.action_for(ArrowKey::Down), FIRE_MAIN);
        assert_eq!(mapper.action_for(ArrowKey::Right), FIRE_RIGHT);
        assert_eq!(mapper.action_for(ArrowKey::Up), NO_OP);
    }
}
