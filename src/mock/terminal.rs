use std::io::{self, Write};

use thiserror::Error;

use crate::LedStrip;
use crate::display::Rgb;
use crate::layout;

/// Error type for terminal flushes.
#[derive(Debug, Error)]
pub enum TerminalError {
    #[error("failed to write to terminal: {0}")]
    Io(#[from] io::Error),
}

/// Renders the panel as 24-bit ANSI cells on stdout.
///
/// Emulates the physical panel, crossed red/green wiring included, so
/// colors written through a [`Matrix`](crate::display::Matrix) come out
/// logically correct on screen. Each frame redraws in place.
#[derive(Debug, Clone)]
pub struct TerminalStrip {
    pixels: Vec<u32>,
    brightness: u8,
}

impl Default for TerminalStrip {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalStrip {
    pub fn new() -> Self {
        Self {
            pixels: vec![0; layout::LED_COUNT],
            brightness: 255,
        }
    }
}

impl LedStrip for TerminalStrip {
    type Error = TerminalError;

    fn set_pixel(&mut self, index: usize, color: u32) {
        self.pixels[index] = color;
    }

    fn pixel(&self, index: usize) -> u32 {
        self.pixels[index]
    }

    fn set_brightness(&mut self, level: u8) {
        self.brightness = level;
    }

    fn show(&mut self) -> Result<(), TerminalError> {
        render_panel(&mut io::stdout(), &self.pixels, self.brightness)
    }

    fn pixel_count(&self) -> usize {
        self.pixels.len()
    }
}

/// Render to any writer. Extracted for testability.
fn render_panel(w: &mut impl Write, pixels: &[u32], brightness: u8) -> Result<(), TerminalError> {
    let scale = |channel: u8| (u16::from(channel) * u16::from(brightness) / 255) as u8;

    write!(w, "\x1B[H")?; // cursor home; frames overwrite in place
    for y in 0..layout::HEIGHT {
        for x in 0..layout::WIDTH {
            // Read the buffer the way the crossed-wire panel lights it.
            let color = Rgb::from_packed(pixels[layout::led_index(x, y)]).swap_rg();
            if color == Rgb::BLACK {
                write!(w, "\x1b[0m  ")?;
            } else {
                write!(
                    w,
                    "\x1b[48;2;{};{};{}m  ",
                    scale(color.r),
                    scale(color.g),
                    scale(color.b)
                )?;
            }
        }
        writeln!(w, "\x1b[0m")?;
    }
    w.flush()?;
    Ok(())
}
