use rs_ws281x::{ChannelBuilder, Controller, ControllerBuilder, StripType, WS2811Error};

use crate::{LedStrip, StripConfig, StripVariant};

/// WS281x strip on the Raspberry Pi PWM/DMA driver.
///
/// The wrapped controller releases the DMA channel and GPIO pin when it
/// drops, so the hardware is cleaned up on every exit path out of the
/// game loop, error returns included.
pub struct Ws281xStrip {
    controller: Controller,
    channel: usize,
}

impl Ws281xStrip {
    /// Initialize the driver from an immutable configuration.
    ///
    /// Fails when the PWM/DMA setup is rejected: wrong pin, busy DMA
    /// channel, or missing permissions.
    pub fn open(config: StripConfig) -> Result<Self, WS2811Error> {
        let controller = ControllerBuilder::new()
            .freq(config.frequency_hz)
            .dma(i32::from(config.dma_channel))
            .channel(
                config.channel,
                ChannelBuilder::new()
                    .pin(i32::from(config.gpio_pin))
                    .count(config.pixel_count as i32)
                    .strip_type(strip_type(config.strip_variant))
                    .brightness(config.brightness)
                    .invert(config.invert)
                    .build(),
            )
            .build()?;
        Ok(Self {
            controller,
            channel: config.channel,
        })
    }
}

fn strip_type(variant: StripVariant) -> StripType {
    match variant {
        StripVariant::Ws2811Rgb => StripType::Ws2811Rgb,
        StripVariant::Ws2811Grb => StripType::Ws2811Grb,
        StripVariant::Ws2812 => StripType::Ws2812,
        StripVariant::Sk6812Rgbw => StripType::Sk6812Rgbw,
    }
}

impl LedStrip for Ws281xStrip {
    type Error = WS2811Error;

    fn set_pixel(&mut self, index: usize, color: u32) {
        // The driver buffer holds [blue, green, red, white] per pixel,
        // which is exactly the 0x00RRGGBB word in little-endian bytes.
        self.controller.leds_mut(self.channel)[index] = color.to_le_bytes();
    }

    fn pixel(&self, index: usize) -> u32 {
        u32::from_le_bytes(self.controller.leds(self.channel)[index])
    }

    fn set_brightness(&mut self, level: u8) {
        self.controller.set_brightness(self.channel, level);
    }

    fn show(&mut self) -> Result<(), WS2811Error> {
        self.controller.render()
    }

    fn pixel_count(&self) -> usize {
        self.controller.leds(self.channel).len()
    }
}
