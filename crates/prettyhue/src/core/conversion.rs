use crate::Float;

/// Convert HSL coordinates to 8-bit RGB channels.
///
/// The hue is in degrees and need not be normalized; saturation and lightness
/// are unit fractions. The conversion follows the standard formula
///
/// ```text
/// k(n) = (n + hue/30) mod 12
/// a    = saturation × min(lightness, 1 − lightness)
/// f(n) = lightness − a × max(−1, min(k(n) − 3, 9 − k(n), 1))
/// ```
///
/// with the channel offsets 0, 8, and 4 for red, green, and blue. The offsets
/// are part of the formula's definition; reordering them rotates the hue.
pub(crate) fn hsl_to_rgb(hue: Float, saturation: Float, lightness: Float) -> (i32, i32, i32) {
    let k = |n: Float| (n + hue / 30.0) % 12.0;
    let a = saturation * lightness.min(1.0 - lightness);
    let f = |n: Float| lightness - a * (k(n) - 3.0).min(9.0 - k(n)).min(1.0).max(-1.0);

    (
        (255.0 * f(0.0)).round() as i32,
        (255.0 * f(8.0)).round() as i32,
        (255.0 * f(4.0)).round() as i32,
    )
}

/// Convert 8-bit RGB channels to displayable HSL coordinates.
///
/// This function returns the hue in rounded degrees as well as saturation and
/// lightness as rounded integer percentages. Saturation and lightness are
/// first rounded to one decimal as percentages and only then to integers,
/// which keeps values like 40.96% from collapsing prematurely.
///
/// The hue is *not* wrapped into `0..360`: when the maximum channel is red
/// and green is smaller than blue, the `mod 6` term goes negative and so does
/// the hue. Downstream formatting preserves the negative value.
pub(crate) fn rgb_to_hsl(red: i32, green: i32, blue: i32) -> (i32, i32, i32) {
    let r = red as Float / 255.0;
    let g = green as Float / 255.0;
    let b = blue as Float / 255.0;

    let cmin = r.min(g).min(b);
    let cmax = r.max(g).max(b);
    let delta = cmax - cmin;

    let hue = if delta == 0.0 {
        0.0
    } else if cmax == r {
        ((g - b) / delta) % 6.0
    } else if cmax == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };
    let hue = (hue * 60.0).round();

    let lightness = (cmax + cmin) / 2.0;
    let saturation = if delta == 0.0 {
        0.0
    } else {
        delta / (1.0 - (2.0 * lightness - 1.0).abs())
    };

    let saturation = (saturation * 1000.0).round() / 10.0;
    let lightness = (lightness * 1000.0).round() / 10.0;

    (
        hue as i32,
        saturation.round() as i32,
        lightness.round() as i32,
    )
}

/// Round the value to the given number of significant decimal digits.
///
/// The hex parser uses this helper to report a 2-digit hex alpha with the two
/// significant digits it actually resolves, so that `0x80` becomes 0.5 rather
/// than 0.5019607843137255.
pub(crate) fn round_significant(value: Float, digits: i32) -> Float {
    if value == 0.0 {
        return 0.0;
    }

    let magnitude = value.abs().log10().floor() as i32;
    let factor = (10.0 as Float).powi(digits - 1 - magnitude);
    (value * factor).round() / factor
}
