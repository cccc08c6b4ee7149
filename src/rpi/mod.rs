//! Raspberry Pi hardware: the rpi_ws281x PWM/DMA driver and an evdev
//! numeric keypad.

mod keypad;
mod strip;

pub use keypad::EvdevKeypad;
pub use strip::Ws281xStrip;
