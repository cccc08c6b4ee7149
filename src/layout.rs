//! Serpentine coordinate mapping for the 32x32 panel.
//!
//! The panel is four stacked 32x8 strips of 256 LEDs each, chained bottom
//! band first. Within a band each column is a vertical run of 8 LEDs, and
//! the run direction alternates with column parity:
//!
//! ```text
//! 1016 1015 ...  775      y in [0,8)    base 768, columns right-to-left
//!  512  527 ...  767      y in [8,16)   base 512, columns left-to-right
//!  504  503 ...  263      y in [16,24)  base 256, columns right-to-left
//!    0   15 ...  255      y in [24,32)  base 0,   columns left-to-right
//! ```

/// Panel width in cells.
pub const WIDTH: usize = 32;
/// Panel height in cells.
pub const HEIGHT: usize = 32;
/// Total LEDs on the chained panel.
pub const LED_COUNT: usize = WIDTH * HEIGHT;

/// Rows per serpentine band.
const BAND_ROWS: usize = 8;

const fn index_of(x: usize, y: usize) -> usize {
    let run = y % BAND_ROWS;
    let run = if x % 2 == 0 { run } else { BAND_ROWS - 1 - run };
    let (base, col) = match y / BAND_ROWS {
        0 => (768, WIDTH - 1 - x),
        1 => (512, x),
        2 => (256, WIDTH - 1 - x),
        _ => (0, x),
    };
    base + BAND_ROWS * col + run
}

/// Precomputed over the full domain: the mapping is pure and the domain
/// is fixed at 1024 points, so a table beats recomputing once per visible
/// cell per frame.
static INDEX_TABLE: [u16; LED_COUNT] = {
    let mut table = [0u16; LED_COUNT];
    let mut y = 0;
    while y < HEIGHT {
        let mut x = 0;
        while x < WIDTH {
            table[y * WIDTH + x] = index_of(x, y) as u16;
            x += 1;
        }
        y += 1;
    }
    table
};

/// Map a panel coordinate to its linear LED position.
///
/// # Panics
///
/// Panics when `x` or `y` is outside the panel. Out-of-range coordinates
/// are a caller bug and are never clamped.
pub fn led_index(x: usize, y: usize) -> usize {
    assert!(
        x < WIDTH && y < HEIGHT,
        "coordinate ({x}, {y}) outside the {WIDTH}x{HEIGHT} panel"
    );
    INDEX_TABLE[y * WIDTH + x] as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(0, 0, 1016; "top left")]
    #[test_case(31, 0, 775; "top right")]
    #[test_case(0, 31, 7; "bottom left")]
    #[test_case(31, 31, 248; "bottom right")]
    #[test_case(0, 24, 0; "strip origin")]
    #[test_case(31, 24, 255; "end of first band")]
    #[test_case(0, 8, 512; "third band origin")]
    fn known_positions(x: usize, y: usize, expected: usize) {
        assert_eq!(led_index(x, y), expected);
    }

    #[test]
    fn mapping_is_a_bijection() {
        let mut inverse = [None; LED_COUNT];
        for y in 0..HEIGHT {
            for x in 0..WIDTH {
                let n = led_index(x, y);
                assert!(n < LED_COUNT, "({x}, {y}) mapped out of range: {n}");
                assert_eq!(inverse[n], None, "index {n} mapped twice");
                inverse[n] = Some((x, y));
            }
        }
        assert!(inverse.iter().all(Option::is_some));
    }

    #[test]
    fn bands_stay_in_their_offset_range() {
        for y in 0..HEIGHT {
            let base = match y / BAND_ROWS {
                0 => 768,
                1 => 512,
                2 => 256,
                _ => 0,
            };
            for x in 0..WIDTH {
                let n = led_index(x, y);
                assert!(
                    (base..base + 256).contains(&n),
                    "({x}, {y}) -> {n} escaped band at offset {base}"
                );
            }
        }
    }

    #[test]
    fn column_parity_reverses_the_run() {
        // Even columns run top-down within a band, odd columns bottom-up.
        assert_eq!(led_index(0, 0) + 1, led_index(0, 1));
        assert_eq!(led_index(1, 0), led_index(1, 1) + 1);
    }

    #[test]
    #[should_panic(expected = "outside the 32x32 panel")]
    fn x_out_of_range_panics() {
        let _ = led_index(WIDTH, 0);
    }

    #[test]
    #[should_panic(expected = "outside the 32x32 panel")]
    fn y_out_of_range_panics() {
        let _ = led_index(0, HEIGHT);
    }
}
