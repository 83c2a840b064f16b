//! Color helpers behind [`Color`](crate::Color) parsing and terminal swatches.

/// Parses a `#RRGGBB` (or `RRGGBB`) hex string into an RGB triplet.
///
/// Returns `None` for anything that is not exactly six hex digits.
pub(crate) fn parse_hex_rgb(s: &str) -> Option<(u8, u8, u8)> {
    let digits = s.strip_prefix('#').unwrap_or(s);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

/// Maps an RGB triplet onto the nearest ANSI 256-color palette index.
///
/// Grays go to the 24-step grayscale ramp, everything else to the 6x6x6 cube.
/// Only used for terminal swatches of palette colors.
pub(crate) fn rgb_to_ansi256((r, g, b): (u8, u8, u8)) -> u8 {
    if r == g && g == b {
        return match r {
            0..=7 => 16,
            249..=255 => 231,
            gray => 232 + ((gray as u16 - 8) * 24 / 247) as u8,
        };
    }

    let cube = |c: u8| (c as u16 * 5 / 255) as u8;
    16 + 36 * cube(r) + 6 * cube(g) + cube(b)
}
