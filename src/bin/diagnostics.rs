//! Prints the serpentine wiring table for the 32x32 panel and checks
//! that the mapping reaches every LED exactly once. Handy after rewiring
//! a band.

use led_snake::layout::{self, HEIGHT, LED_COUNT, WIDTH};

fn main() {
    let mut seen = [false; LED_COUNT];

    for y in 0..HEIGHT {
        for x in 0..WIDTH {
            let n = layout::led_index(x, y);
            print!("{n:4} ");
            seen[n] = true;
        }
        println!();
    }

    println!();
    println!(
        "corners: (0,0)->{} (31,0)->{} (0,31)->{} (31,31)->{}",
        layout::led_index(0, 0),
        layout::led_index(31, 0),
        layout::led_index(0, 31),
        layout::led_index(31, 31),
    );

    let unmapped = seen.iter().filter(|&&hit| !hit).count();
    if unmapped == 0 {
        println!("mapping covers all {LED_COUNT} LEDs");
    } else {
        println!("WARNING: {unmapped} LEDs unmapped");
    }
}
