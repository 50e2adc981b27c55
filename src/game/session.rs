use rand::rngs::ThreadRng;

use super::config::GameConfig;
use super::direction::Direction;
use super::grid::{Cell, Grid};
use super::scene::{ObjectId, ObjectKind, Scene};
use super::snake::{Segment, Snake};

/// Lifecycle of one game session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the first directional input; nothing moves
    Idle,
    /// The tick loop is advancing the snake
    Running,
    /// The snake hit the wall; terminal until `reset`
    GameOver,
}

/// The one edible cell on the field, with its visual proxy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Food {
    pub id: ObjectId,
    pub cell: Cell,
}

/// One game session: the single owner of all mutable game state.
///
/// The driver feeds it direction commands, the fixed tick, and the
/// post-game-over reset; the session pushes visual side effects to the
/// [`Scene`] it is handed.
pub struct GameSession {
    config: GameConfig,
    grid: Grid,
    pub phase: Phase,
    /// Direction the next tick will move in; `None` while idle or halted
    pub heading: Option<Direction>,
    pub snake: Snake,
    pub food: Food,
    rng: ThreadRng,
}

impl GameSession {
    /// Start a fresh session: random head and food, no body, waiting for
    /// the first keystroke.
    pub fn new(config: GameConfig, scene: &mut dyn Scene) -> Self {
        let grid = Grid::new(config.half_width);
        let mut rng = rand::thread_rng();

        let head = grid.random_cell(&mut rng);
        let food_cell = grid.random_cell(&mut rng);
        let head_id = scene.add(ObjectKind::Head, grid.to_world(head));
        let food_id = scene.add(ObjectKind::Food, grid.to_world(food_cell));

        Self {
            config,
            grid,
            phase: Phase::Idle,
            heading: None,
            snake: Snake::new(head, head_id),
            food: Food {
                id: food_id,
                cell: food_cell,
            },
            rng,
        }
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    /// Handle a directional keystroke.
    ///
    /// A request that exactly reverses the current heading is ignored
    /// (no 180-degree turns). Anything else is adopted immediately, so
    /// the last keystroke before a tick wins. The first adopted
    /// direction starts the game.
    pub fn on_direction(&mut self, requested: Direction) {
        if self.phase == Phase::GameOver {
            return;
        }
        if let Some(current) = self.heading {
            if current.is_opposite(requested) {
                return;
            }
        }
        self.heading = Some(requested);
        if self.phase == Phase::Idle {
            self.phase = Phase::Running;
        }
    }

    /// Stop the snake in place; the next directional keystroke resumes it
    pub fn halt(&mut self) {
        if self.phase == Phase::Running {
            self.heading = None;
        }
    }

    /// Advance the game by one fixed tick.
    ///
    /// Moves the head one cell along the heading, recycles the tail
    /// segment into the vacated cell, then re-evaluates the rules: past
    /// the wall the session ends; on the food cell the snake grows and
    /// the food respawns. A tick without a heading leaves everything
    /// untouched.
    pub fn on_tick(&mut self, scene: &mut dyn Scene) {
        if self.phase != Phase::Running {
            return;
        }
        let Some(heading) = self.heading else {
            return;
        };

        let new_head = self.snake.head.step(heading);
        if let Some(moved) = self.snake.advance(new_head) {
            scene.place(moved.id, self.grid.to_world(moved.cell));
        }
        scene.place(self.snake.id, self.grid.to_world(new_head));

        if self.grid.hits_wall(new_head) {
            self.phase = Phase::GameOver;
            scene.remove(self.snake.id);
            scene.game_over(self.snake.length());
        } else if new_head == self.food.cell {
            self.eat(scene);
        }
    }

    /// Reinitialize after (or during) a game: retire every visual proxy
    /// and start over with a fresh random layout.
    pub fn reset(&mut self, scene: &mut dyn Scene) {
        for segment in self.snake.trail.iter() {
            scene.remove(segment.id);
        }
        // The head proxy is already gone if the session ended at the wall
        scene.remove(self.snake.id);
        scene.remove(self.food.id);

        *self = Self::new(self.config, scene);
    }

    /// The head landed on the food: grow one segment on that cell, then
    /// move the food elsewhere.
    fn eat(&mut self, scene: &mut dyn Scene) {
        let cell = self.food.cell;
        let id = scene.add(ObjectKind::Segment, self.grid.to_world(cell));
        self.snake.grow(Segment { id, cell });

        self.food.cell = self.next_food_cell();
        scene.place(self.food.id, self.grid.to_world(self.food.cell));
    }

    /// Draw the next food cell. With `fair_food` set, sample until the
    /// cell is not under the snake; otherwise the first draw stands, even
    /// on the body.
    fn next_food_cell(&mut self) -> Cell {
        loop {
            let cell = self.grid.random_cell(&mut self.rng);
            if !self.config.fair_food {
                return cell;
            }
            if cell != self.snake.head && !self.snake.occupies(cell) {
                return cell;
            }
        }
    }
}
