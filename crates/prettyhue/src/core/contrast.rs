use crate::Float;

/// The broadcast luma weights for red, green, and blue, scaled by 1000.
const YIQ_WEIGHTS: [i64; 3] = [299, 587, 114];

/// The luma above which a color counts as light and hence takes dark text.
const YIQ_THRESHOLD: i64 = 125;

/// Compute the YIQ luma for the given 8-bit RGB channels.
///
/// The luma is the weighted channel sum `(299·r + 587·g + 114·b) / 1000`,
/// rounded to the nearest integer. For in-range channels it falls into
/// `0..=255`.
pub(crate) fn yiq_luma(red: i32, green: i32, blue: i32) -> i64 {
    let [wr, wg, wb] = YIQ_WEIGHTS;
    let sum = red as i64 * wr + green as i64 * wg + blue as i64 * wb;
    (sum as Float / 1000.0).round() as i64
}

/// Determine whether the given channels describe a light color, i.e., one
/// that needs a dark contrast color for readable text.
pub(crate) fn use_dark_contrast(red: i32, green: i32, blue: i32) -> bool {
    yiq_luma(red, green, blue) > YIQ_THRESHOLD
}
