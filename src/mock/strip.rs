use thiserror::Error;

use crate::LedStrip;
use crate::layout;

/// Error injected through [`MockStrip::fail_next_show`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("injected show failure")]
pub struct ShowError;

/// In-memory strip for tests: buffers pixels and counts flushes.
#[derive(Debug, Clone)]
pub struct MockStrip {
    pixels: Vec<u32>,
    brightness: u8,
    shows: usize,
    fail_show: bool,
}

impl Default for MockStrip {
    fn default() -> Self {
        Self::new()
    }
}

impl MockStrip {
    /// A strip sized for the 32x32 panel.
    pub fn new() -> Self {
        Self::with_pixel_count(layout::LED_COUNT)
    }

    /// A strip with extra (or fewer) pixels, for exercising the
    /// unmapped supplemental region.
    pub fn with_pixel_count(count: usize) -> Self {
        Self {
            pixels: vec![0; count],
            brightness: 255,
            shows: 0,
            fail_show: false,
        }
    }

    /// Number of completed flushes.
    pub fn shows(&self) -> usize {
        self.shows
    }

    pub fn brightness(&self) -> u8 {
        self.brightness
    }

    /// Make the next [`show`](LedStrip::show) fail, to exercise driver
    /// error paths.
    pub fn fail_next_show(&mut self) {
        self.fail_show = true;
    }
}

impl LedStrip for MockStrip {
    type Error = ShowError;

    fn set_pixel(&mut self, index: usize, color: u32) {
        self.pixels[index] = color;
    }

    fn pixel(&self, index: usize) -> u32 {
        self.pixels[index]
    }

    fn set_brightness(&mut self, level: u8) {
        self.brightness = level;
    }

    fn show(&mut self) -> Result<(), ShowError> {
        if self.fail_show {
            self.fail_show = false;
            return Err(ShowError);
        }
        self.shows += 1;
        Ok(())
    }

    fn pixel_count(&self) -> usize {
        self.pixels.len()
    }
}
