use serde::{Deserialize, Serialize};

/// Configuration for a game session
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GameConfig {
    /// Half the playfield width in cells; legal cells span
    /// `[-half_width, half_width]` on both axes
    pub half_width: i32,
    /// Movement tick period in milliseconds
    pub tick_ms: u64,
    /// Never respawn food on a cell occupied by the snake
    pub fair_food: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            half_width: 5,
            tick_ms: 250,
            fair_food: false,
        }
    }
}

impl GameConfig {
    /// Create a configuration with a custom field size
    pub fn new(half_width: i32) -> Self {
        Self {
            half_width,
            ..Default::default()
        }
    }

    /// Create a tiny field for testing
    pub fn small() -> Self {
        Self::new(2)
    }
}
