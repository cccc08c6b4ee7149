//! The fixed-interval game loop: poll input, tick, redraw, sleep.

use std::thread;
use std::time::Duration;

use crate::display::Matrix;
use crate::game::{Board, Collision, Direction};
use crate::layout;
use crate::{Keypad, LedStrip};

/// Length of one tick at speed factor 1.
const BASE_TICK: Duration = Duration::from_millis(50);

/// Default speed factor; higher is slower. 4 gives 200 ms per tick.
pub const DEFAULT_SPEED: u32 = 4;

/// What a frame did to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    Running,
    /// The session ended on a collision and a fresh board took its place.
    Restarted(Collision),
}

/// Drives one [`Board`] at a time at a fixed tick rate.
///
/// Single-threaded and synchronous: the sleep between ticks is the only
/// suspension point and the strip buffer has a single writer.
pub struct GameRunner {
    board: Board,
    tick_interval: Duration,
}

impl GameRunner {
    /// A runner on a full-panel board.
    pub fn new(speed_factor: u32) -> Self {
        Self::with_board(
            Board::new(layout::WIDTH as i32, layout::HEIGHT as i32),
            speed_factor,
        )
    }

    pub fn with_board(board: Board, speed_factor: u32) -> Self {
        Self {
            board,
            tick_interval: BASE_TICK * speed_factor.max(1),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    /// One loop iteration minus the sleep: advance the game, then redraw
    /// the whole surface and flush it.
    ///
    /// A collision ends the session and starts a fresh board on the same
    /// bounds; only a driver failure is an error.
    pub fn frame<S: LedStrip>(
        &mut self,
        input: Option<Direction>,
        matrix: &mut Matrix<S>,
    ) -> Result<FrameOutcome, S::Error> {
        let outcome = match self.board.tick(input) {
            Ok(()) => FrameOutcome::Running,
            Err(collision) => {
                let (max_x, max_y) = self.board.bounds();
                log::info!("game over ({collision}); restarting");
                self.board = Board::new(max_x, max_y);
                FrameOutcome::Restarted(collision)
            }
        };

        matrix.blank();
        for (point, color) in self.board.cells() {
            // The head sits one cell off the board until the next tick
            // calls the collision; clip it instead of mapping it onto
            // some unrelated pixel.
            if self.board.contains(point) {
                matrix.set(point.x as usize, point.y as usize, color);
            }
        }
        matrix.show()?;
        Ok(outcome)
    }

    /// Run forever, returning only on a driver failure.
    pub fn run<S: LedStrip, K: Keypad>(
        mut self,
        matrix: &mut Matrix<S>,
        keypad: &mut K,
    ) -> Result<(), S::Error> {
        loop {
            let input = match keypad.read_direction() {
                Ok(input) => input,
                Err(err) => {
                    // Input must never stall a tick.
                    log::warn!("keypad read failed: {err}");
                    None
                }
            };
            self.frame(input, matrix)?;
            thread::sleep(self.tick_interval);
        }
    }
}
