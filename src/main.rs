use std::process::ExitCode;

use led_snake::runner::{DEFAULT_SPEED, GameRunner};

#[cfg(feature = "rpi")]
fn main() -> ExitCode {
    use led_snake::StripConfig;
    use led_snake::display::Matrix;
    use led_snake::rpi::{EvdevKeypad, Ws281xStrip};

    env_logger::init();

    let config = StripConfig::default();
    let strip = match Ws281xStrip::open(config) {
        Ok(strip) => strip,
        Err(err) => {
            log::error!("LED driver initialization failed: {err}");
            return ExitCode::FAILURE;
        }
    };
    let mut keypad = match EvdevKeypad::open("/dev/input/event0") {
        Ok(keypad) => keypad,
        Err(err) => {
            log::error!("failed to open keypad device: {err}");
            return ExitCode::FAILURE;
        }
    };

    log::info!(
        "driving {} pixels on GPIO {}",
        config.pixel_count,
        config.gpio_pin
    );

    // Returning from main unwinds the matrix, which drops the driver and
    // releases its DMA channel and GPIO pin.
    let mut matrix = Matrix::new(strip);
    match GameRunner::new(DEFAULT_SPEED).run(&mut matrix, &mut keypad) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("LED driver failure: {err}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(not(feature = "rpi"))]
fn main() -> ExitCode {
    use led_snake::display::Matrix;
    use led_snake::mock::{ScriptedKeypad, TerminalStrip};

    // A lap around the board; once the script runs out the snake holds
    // its course until it hits the edge and the game restarts.
    const DEMO_SCRIPT: &str = "............dddddddddddd llllllllllllllllllll \
                               uuuuuuuuuuuuuuuuuuuu rrrrrrrrrrrrrrrrrrrr dddddddd";

    env_logger::init();

    let script = std::env::args().nth(1).unwrap_or_else(|| DEMO_SCRIPT.into());
    let mut keypad = match ScriptedKeypad::from_script(&script) {
        Ok(keypad) => keypad,
        Err(err) => {
            log::error!("bad input script: {err}");
            return ExitCode::FAILURE;
        }
    };

    print!("\x1B[2J"); // clear once; frames then redraw in place
    let mut matrix = Matrix::new(TerminalStrip::new());
    match GameRunner::new(DEFAULT_SPEED).run(&mut matrix, &mut keypad) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("terminal rendering failed: {err}");
            ExitCode::FAILURE
        }
    }
}
