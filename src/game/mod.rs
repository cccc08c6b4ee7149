//! The Snake state machine: board, snake, apples, walls and the tick.

use std::collections::{HashSet, VecDeque};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;

use crate::display::Rgb;

/// A cell on the board.
///
/// Signed: the head sits one cell off the board between the move that
/// takes it out and the tick that detects the collision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighboring cell one step in `direction`.
    pub const fn step(self, direction: Direction) -> Self {
        match direction {
            Direction::Up => Self::new(self.x, self.y - 1),
            Direction::Down => Self::new(self.x, self.y + 1),
            Direction::Left => Self::new(self.x - 1, self.y),
            Direction::Right => Self::new(self.x + 1, self.y),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Whether `other` is the 180-degree reversal of `self`.
    pub const fn is_opposite(self, other: Self) -> bool {
        matches!(
            (self, other),
            (Self::Up, Self::Down)
                | (Self::Down, Self::Up)
                | (Self::Left, Self::Right)
                | (Self::Right, Self::Left)
        )
    }
}

/// Terminal tick outcomes.
///
/// A collision is the expected end of a session, not a bug: the caller
/// answers it by starting a fresh [`Board`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Collision {
    #[error("snake hit a wall")]
    Wall,
    #[error("snake left the board")]
    OutOfBounds,
    #[error("snake ran into its own tail")]
    Tail,
}

const INITIAL_LENGTH: usize = 8;

/// Head state. Owned by [`Board`]; the body is tracked separately as the
/// trail of previous head positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snake {
    head: Point,
    direction: Direction,
    length: usize,
}

impl Snake {
    pub const fn new(head: Point, direction: Direction) -> Self {
        Self::with_length(head, direction, INITIAL_LENGTH)
    }

    pub const fn with_length(head: Point, direction: Direction, length: usize) -> Self {
        Self {
            head,
            direction,
            length,
        }
    }

    pub const fn head(self) -> Point {
        self.head
    }

    pub const fn direction(self) -> Direction {
        self.direction
    }

    pub const fn length(self) -> usize {
        self.length
    }
}

/// One game session: bounds, the snake and its tail window, walls and
/// apples. Recreated from scratch after every collision.
#[derive(Debug, Clone)]
pub struct Board {
    max_x: i32,
    max_y: i32,
    snake: Snake,
    tail: VecDeque<Point>,
    walls: HashSet<Point>,
    apples: Vec<Point>,
    rng: StdRng,
}

impl Board {
    /// A fresh session with a random head, direction and one apple.
    pub fn new(max_x: i32, max_y: i32) -> Self {
        Self::with_rng(max_x, max_y, StdRng::from_os_rng())
    }

    /// Like [`Board::new`] with reproducible randomness.
    pub fn seeded(max_x: i32, max_y: i32, seed: u64) -> Self {
        Self::with_rng(max_x, max_y, StdRng::seed_from_u64(seed))
    }

    fn with_rng(max_x: i32, max_y: i32, mut rng: StdRng) -> Self {
        assert!(max_x > 0 && max_y > 0, "board needs positive bounds");
        let head = Point::new(rng.random_range(0..max_x), rng.random_range(0..max_y));
        let direction = Direction::ALL[rng.random_range(0..Direction::ALL.len())];
        let apple = Point::new(rng.random_range(0..max_x), rng.random_range(0..max_y));
        Self {
            max_x,
            max_y,
            snake: Snake::new(head, direction),
            tail: VecDeque::new(),
            walls: HashSet::new(),
            apples: vec![apple],
            rng,
        }
    }

    /// Assemble a board from explicit parts, for scripted demos and tests.
    pub fn from_parts(
        max_x: i32,
        max_y: i32,
        snake: Snake,
        tail: impl IntoIterator<Item = Point>,
        apples: Vec<Point>,
        seed: u64,
    ) -> Self {
        Self {
            max_x,
            max_y,
            snake,
            tail: tail.into_iter().collect(),
            walls: HashSet::new(),
            apples,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn add_wall(&mut self, wall: Point) {
        self.walls.insert(wall);
    }

    pub fn bounds(&self) -> (i32, i32) {
        (self.max_x, self.max_y)
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    /// Tail points, oldest first.
    pub fn tail(&self) -> impl ExactSizeIterator<Item = Point> + '_ {
        self.tail.iter().copied()
    }

    pub fn apples(&self) -> &[Point] {
        &self.apples
    }

    pub fn contains(&self, point: Point) -> bool {
        (0..self.max_x).contains(&point.x) && (0..self.max_y).contains(&point.y)
    }

    fn random_point(&mut self) -> Point {
        Point::new(
            self.rng.random_range(0..self.max_x),
            self.rng.random_range(0..self.max_y),
        )
    }

    /// Advance one tick.
    ///
    /// Collision checks run against the head position left by the
    /// previous tick, before anything else happens, so a failing tick
    /// leaves the board exactly as it was. Step order:
    ///
    /// 1. wall, bounds, then tail collision on the current head;
    /// 2. apple collision: grow by one and respawn that apple;
    /// 3. turn, unless `input` is absent or a 180-degree reversal;
    /// 4. slide the tail window and push the current head;
    /// 5. move the head one cell.
    pub fn tick(&mut self, input: Option<Direction>) -> Result<(), Collision> {
        let head = self.snake.head;

        if self.walls.contains(&head) {
            return Err(Collision::Wall);
        }
        if !self.contains(head) {
            return Err(Collision::OutOfBounds);
        }
        if self.tail.contains(&head) {
            return Err(Collision::Tail);
        }

        // The respawned apple is not checked against the snake, walls or
        // other apples. Known gap, kept as-is.
        if let Some(eaten) = self.apples.iter().position(|&apple| apple == head) {
            self.snake.length += 1;
            let relocated = self.random_point();
            self.apples[eaten] = relocated;
        }

        if let Some(turn) = input
            && !self.snake.direction.is_opposite(turn)
        {
            self.snake.direction = turn;
        }

        // Sliding window of the last `length` head positions.
        if self.tail.len() == self.snake.length {
            self.tail.pop_front();
        }
        self.tail.push_back(head);

        self.snake.head = head.step(self.snake.direction);
        Ok(())
    }

    /// Everything to draw, recomputed fresh on every call: head first,
    /// then the tail oldest to newest, then apples, then walls.
    ///
    /// Overlapping cells are emitted multiply; a renderer replaying the
    /// sequence in order makes later entries win, so walls cover apples
    /// and the snake.
    pub fn cells(&self) -> impl Iterator<Item = (Point, Rgb)> + '_ {
        std::iter::once((self.snake.head, Rgb::WHITE))
            .chain(self.tail.iter().map(|&point| (point, Rgb::WHITE)))
            .chain(self.apples.iter().map(|&point| (point, Rgb::RED)))
            .chain(self.walls.iter().map(|&point| (point, Rgb::BLUE)))
    }
}
