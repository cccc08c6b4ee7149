//! The display surface: (x, y) pixel access over a serpentine strip.

use crate::LedStrip;
use crate::layout;

/// A 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);
    pub const RED: Self = Self::new(255, 0, 0);
    pub const BLUE: Self = Self::new(0, 0, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Pack as the driver's `0x00RRGGBB` word.
    pub const fn packed(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    pub const fn from_packed(word: u32) -> Self {
        Self::new((word >> 16) as u8, (word >> 8) as u8, word as u8)
    }

    /// Exchange the red and green channels.
    ///
    /// The panel's red and green data lines are crossed relative to the
    /// driver's logical order, so colors are swapped once on the way in
    /// and once on the way out. This matches the hardware as wired; it is
    /// not a bug to fix.
    pub const fn swap_rg(self) -> Self {
        Self::new(self.g, self.r, self.b)
    }
}

/// The display surface over the 32x32 serpentine panel.
///
/// Owns pixel access by panel coordinate; the underlying strip only ever
/// sees linear positions through [`layout::led_index`]. `set` and `get`
/// touch the in-process buffer only; [`show`](Matrix::show) is the single
/// operation with a hardware-visible effect.
#[derive(Debug)]
pub struct Matrix<S> {
    strip: S,
}

impl<S: LedStrip> Matrix<S> {
    pub fn new(strip: S) -> Self {
        Self { strip }
    }

    /// Set the cell at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics when the coordinate is outside the panel.
    pub fn set(&mut self, x: usize, y: usize, color: Rgb) {
        self.strip
            .set_pixel(layout::led_index(x, y), color.swap_rg().packed());
    }

    /// Read back the logical color at `(x, y)`, undoing the channel swap
    /// applied by [`set`](Matrix::set).
    pub fn get(&self, x: usize, y: usize) -> Rgb {
        Rgb::from_packed(self.strip.pixel(layout::led_index(x, y))).swap_rg()
    }

    /// Black out every pixel the strip exposes, including any chained
    /// past the mapped 32x32 region, so no stale pixels survive a frame.
    pub fn blank(&mut self) {
        for n in 0..self.strip.pixel_count() {
            self.strip.set_pixel(n, Rgb::BLACK.packed());
        }
    }

    /// Flush to the physical strip.
    pub fn show(&mut self) -> Result<(), S::Error> {
        self.strip.show()
    }

    /// Forward a brightness level, 0 (darkest) to 255 (brightest).
    pub fn set_brightness(&mut self, level: u8) {
        self.strip.set_brightness(level);
    }

    pub fn strip(&self) -> &S {
        &self.strip
    }
}
