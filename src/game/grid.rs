use rand::Rng;

use super::direction::Direction;

/// Edge length of one grid cell in world units
pub const CELL_SIZE: f32 = 1.0;

/// Height of the plane all objects sit on (cell-center of the bottom layer)
pub const Z_PLANE: f32 = CELL_SIZE / 2.0;

/// A cell on the playfield grid, centered at the origin with +y up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Cell offset by delta
    pub fn offset(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Neighboring cell one unit step in a direction
    pub fn step(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.offset(dx, dy)
    }
}

/// World-space position of a visual object, on the fixed z plane
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldPos {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// The playfield: a square grid of unit cells centered at the origin.
///
/// Cells with both coordinates in `[-half_width, half_width]` are legal
/// resting positions; anything beyond is the wall.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    half_width: i32,
}

impl Grid {
    pub fn new(half_width: i32) -> Self {
        Self { half_width }
    }

    pub fn half_width(&self) -> i32 {
        self.half_width
    }

    /// Check if a cell is a legal resting position (boundary inclusive)
    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.x.abs() <= self.half_width && cell.y.abs() <= self.half_width
    }

    /// Check if a cell is past the wall
    pub fn hits_wall(&self, cell: Cell) -> bool {
        !self.in_bounds(cell)
    }

    /// Draw a uniformly random cell from the spawn range.
    ///
    /// The range keeps a one-cell margin inside the walls so the head and
    /// food never spawn on the outermost row.
    pub fn random_cell(&self, rng: &mut impl Rng) -> Cell {
        let reach = self.half_width - 1;
        Cell {
            x: rng.gen_range(-reach..=reach),
            y: rng.gen_range(-reach..=reach),
        }
    }

    /// True if a cell lies within the spawn range
    pub fn in_spawn_range(&self, cell: Cell) -> bool {
        let reach = self.half_width - 1;
        cell.x.abs() <= reach && cell.y.abs() <= reach
    }

    /// Promote a grid cell to the world position of its center
    pub fn to_world(&self, cell: Cell) -> WorldPos {
        WorldPos {
            x: cell.x as f32 * CELL_SIZE,
            y: cell.y as f32 * CELL_SIZE,
            z: Z_PLANE,
        }
    }

    /// Demote a world position back to the grid cell containing it
    pub fn to_cell(&self, world: WorldPos) -> Cell {
        Cell {
            x: (world.x / CELL_SIZE).round() as i32,
            y: (world.y / CELL_SIZE).round() as i32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_step() {
        let cell = Cell::new(0, 0);
        assert_eq!(cell.step(Direction::Right), Cell::new(1, 0));
        assert_eq!(cell.step(Direction::Left), Cell::new(-1, 0));
        assert_eq!(cell.step(Direction::Up), Cell::new(0, 1));
        assert_eq!(cell.step(Direction::Down), Cell::new(0, -1));
    }

    #[test]
    fn test_wall_threshold() {
        let grid = Grid::new(5);

        // Boundary row is legal, one past it is the wall
        assert!(!grid.hits_wall(Cell::new(5, 0)));
        assert!(grid.hits_wall(Cell::new(6, 0)));
        assert!(!grid.hits_wall(Cell::new(-5, 0)));
        assert!(grid.hits_wall(Cell::new(-6, 0)));
        assert!(!grid.hits_wall(Cell::new(0, 5)));
        assert!(grid.hits_wall(Cell::new(0, 6)));
        assert!(grid.hits_wall(Cell::new(0, -6)));
        assert!(!grid.hits_wall(Cell::new(5, 5)));
    }

    #[test]
    fn test_random_cell_stays_off_the_wall() {
        let grid = Grid::new(5);
        let mut rng = rand::thread_rng();

        for _ in 0..200 {
            let cell = grid.random_cell(&mut rng);
            assert!(grid.in_spawn_range(cell));
            assert!(cell.x.abs() <= 4 && cell.y.abs() <= 4);
        }
    }

    #[test]
    fn test_world_round_trip() {
        let grid = Grid::new(5);

        for x in -5..=5 {
            for y in -5..=5 {
                let cell = Cell::new(x, y);
                let world = grid.to_world(cell);
                assert_eq!(grid.to_cell(world), cell);
                assert_eq!(world.z, Z_PLANE);
            }
        }
    }
}
