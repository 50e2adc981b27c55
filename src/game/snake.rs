use super::grid::Cell;
use super::scene::ObjectId;
use super::trail::Deque;

/// One body cell, keyed by the visual proxy standing in for it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub id: ObjectId,
    pub cell: Cell,
}

/// The snake: the player-controlled head plus a trail of body segments.
///
/// The head is not stored in the trail, so the snake is always
/// `trail.len() + 1` cells long. Segments are created on growth and then
/// recycled positionally forever; ordinary movement allocates nothing.
#[derive(Debug)]
pub struct Snake {
    /// Cell the head currently occupies
    pub head: Cell,
    /// Visual proxy for the head
    pub id: ObjectId,
    /// Body segments, nearest-to-head first
    pub trail: Deque<Segment>,
}

impl Snake {
    /// Create a bodiless snake at a starting cell
    pub fn new(head: Cell, id: ObjectId) -> Self {
        Self {
            head,
            id,
            trail: Deque::new(),
        }
    }

    /// Total length in cells, head included
    pub fn length(&self) -> usize {
        self.trail.len() + 1
    }

    /// Check if any trail segment occupies a cell (the head is not checked)
    pub fn occupies(&self, cell: Cell) -> bool {
        self.trail.iter().any(|segment| segment.cell == cell)
    }

    /// Move the head to `new_head`, recycling the tail segment into the
    /// cell the head vacates.
    ///
    /// Returns the recycled segment so its visual can be repositioned, or
    /// `None` for a bodiless snake (only the head moved).
    pub fn advance(&mut self, new_head: Cell) -> Option<Segment> {
        let vacated = self.head;
        self.head = new_head;

        let mut tail = self.trail.pop_back()?;
        tail.cell = vacated;
        self.trail.push_front(tail);
        Some(tail)
    }

    /// Append a freshly created segment at the tail end
    pub fn grow(&mut self, segment: Segment) {
        self.trail.push_back(segment);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segment(n: u32, x: i32, y: i32) -> Segment {
        Segment {
            id: ObjectId(n),
            cell: Cell::new(x, y),
        }
    }

    #[test]
    fn test_bodiless_advance_moves_only_the_head() {
        let mut snake = Snake::new(Cell::new(0, 0), ObjectId(0));

        assert_eq!(snake.advance(Cell::new(1, 0)), None);
        assert_eq!(snake.head, Cell::new(1, 0));
        assert_eq!(snake.length(), 1);
    }

    #[test]
    fn test_trail_follows_head() {
        let mut snake = Snake::new(Cell::new(0, 0), ObjectId(0));
        snake.grow(segment(1, -1, 0));

        let moved = snake.advance(Cell::new(1, 0)).unwrap();

        assert_eq!(snake.head, Cell::new(1, 0));
        assert_eq!(moved.id, ObjectId(1));
        assert_eq!(moved.cell, Cell::new(0, 0));
        assert_eq!(snake.trail.len(), 1);
        assert_eq!(snake.trail.front().unwrap().cell, Cell::new(0, 0));
    }

    #[test]
    fn test_long_trail_keeps_order() {
        // Head at (0,0), trail stretching left to (-3,0)
        let mut snake = Snake::new(Cell::new(0, 0), ObjectId(0));
        for n in 1..=3 {
            snake.grow(segment(n, -(n as i32), 0));
        }

        snake.advance(Cell::new(1, 0));

        // The old tail (-3,0) jumped to the vacated head cell; the rest
        // of the trail is untouched
        let cells: Vec<_> = snake.trail.iter().map(|s| s.cell).collect();
        assert_eq!(
            cells,
            vec![Cell::new(0, 0), Cell::new(-1, 0), Cell::new(-2, 0)]
        );
        assert_eq!(snake.length(), 4);
    }

    #[test]
    fn test_growth_extends_the_tail() {
        let mut snake = Snake::new(Cell::new(2, 2), ObjectId(0));
        snake.grow(segment(1, 1, 2));
        snake.grow(segment(2, 2, 2));

        assert_eq!(snake.length(), 3);
        assert_eq!(snake.trail.back().unwrap().id, ObjectId(2));
    }

    #[test]
    fn test_occupies_checks_trail_not_head() {
        let mut snake = Snake::new(Cell::new(0, 0), ObjectId(0));
        snake.grow(segment(1, -1, 0));

        assert!(snake.occupies(Cell::new(-1, 0)));
        assert!(!snake.occupies(Cell::new(0, 0)));
        assert!(!snake.occupies(Cell::new(3, 3)));
    }
}
