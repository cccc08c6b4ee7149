use crate::game::Direction;

pub mod display;
pub mod game;
pub mod layout;
pub mod mock;
pub mod runner;

#[cfg(feature = "rpi")]
pub mod rpi;

/// Trait for driving a WS281x-style addressable LED strip.
///
/// Abstracts over the PWM/DMA hardware driver (Raspberry Pi) and the
/// mock/terminal strips used for tests and host runs. Colors are packed
/// `0x00RRGGBB` words, matching the driver's own convention.
pub trait LedStrip {
    /// Error type for flush failures.
    type Error: std::fmt::Debug + std::fmt::Display;

    /// Set the pixel at a linear strip position.
    ///
    /// Writes to the in-process buffer only; nothing is visible until
    /// [`show`](LedStrip::show).
    fn set_pixel(&mut self, index: usize, color: u32);

    /// Read back the buffered color at a linear strip position.
    fn pixel(&self, index: usize) -> u32;

    /// Scale the whole strip's brightness, 0 (darkest) to 255 (brightest).
    fn set_brightness(&mut self, level: u8);

    /// Flush the buffered pixel state to the physical strip.
    fn show(&mut self) -> Result<(), Self::Error>;

    /// Total number of addressable pixels on the strip.
    fn pixel_count(&self) -> usize;
}

/// Trait for reading the player's directional intent.
///
/// Mirrors [`LedStrip`] on the input side: implementations poll whatever
/// device is present (numeric keypad over evdev, scripted input in tests)
/// and report the currently held direction without blocking, so a tick
/// never stalls on absent input.
pub trait Keypad {
    /// Error type for device read failures.
    type Error: std::fmt::Debug + std::fmt::Display;

    /// Snapshot of the direction held right now, if any.
    fn read_direction(&mut self) -> Result<Option<Direction>, Self::Error>;
}

/// WS281x color-order variants recognized by the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StripVariant {
    Ws2811Rgb,
    Ws2811Grb,
    Ws2812,
    Sk6812Rgbw,
}

/// LED strip configuration, fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StripConfig {
    /// Number of pixels on the chained strip.
    pub pixel_count: usize,
    /// GPIO pin carrying the data signal (must support PWM, e.g. 18).
    pub gpio_pin: u8,
    /// Signal frequency in hertz, usually 800 kHz.
    pub frequency_hz: u32,
    /// DMA channel used to generate the signal.
    pub dma_channel: u8,
    /// Invert the signal (for NPN transistor level shifters).
    pub invert: bool,
    /// Initial brightness, 0 (darkest) to 255 (brightest).
    pub brightness: u8,
    /// PWM channel; 1 for GPIOs 13, 19, 41, 45 and 53, otherwise 0.
    pub channel: usize,
    /// Color order of the physical strip.
    pub strip_variant: StripVariant,
}

impl Default for StripConfig {
    /// Wiring of the 32x32 four-band panel: 1024 pixels on GPIO 18,
    /// 800 kHz signal on DMA channel 5, PWM channel 0.
    fn default() -> Self {
        Self {
            pixel_count: layout::LED_COUNT,
            gpio_pin: 18,
            frequency_hz: 800_000,
            dma_channel: 5,
            invert: false,
            brightness: 255,
            channel: 0,
            strip_variant: StripVariant::Ws2811Rgb,
        }
    }
}
