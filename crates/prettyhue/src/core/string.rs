use crate::core::conversion::{hsl_to_rgb, rgb_to_hsl, round_significant};
use crate::error::ColorFormatError;
use crate::object::Rgba;
use crate::Float;

/// Parse a color in hashed hexadecimal format.
///
/// The leading `#` is optional. Six digits encode the three RGB channels; an
/// eighth pair encodes the alpha as a byte, which this function divides by
/// 255 and rounds to two significant decimal digits, matching the resolution
/// of a two-digit hex alpha. Any other digit count and any non-hex character
/// are errors.
pub(crate) fn parse_hex(s: &str) -> Result<Rgba, ColorFormatError> {
    let digits = s.strip_prefix('#').unwrap_or(s);
    if digits.len() != 6 && digits.len() != 8 {
        return Err(ColorFormatError::BadHexLength(digits.len()));
    }

    fn parse_byte(s: &str, index: usize) -> Result<i32, ColorFormatError> {
        let t = s
            .get(2 * index..2 * (index + 1))
            .ok_or(ColorFormatError::MalformedHex)?;
        u8::from_str_radix(t, 16)
            .map(i32::from)
            .map_err(|_| ColorFormatError::MalformedHex)
    }

    let red = parse_byte(digits, 0)?;
    let green = parse_byte(digits, 1)?;
    let blue = parse_byte(digits, 2)?;
    let alpha = if digits.len() == 8 {
        round_significant(parse_byte(digits, 3)? as Float / 255.0, 2)
    } else {
        1.0
    };

    Ok(Rgba::new(red, green, blue, alpha))
}

// --------------------------------------------------------------------------------------------------------------------

/// Scan a comma- or space-separated channel list into its numbers.
///
/// The separator is the comma if the string contains one and whitespace
/// otherwise, which covers bare lists, the wrapped functional forms, and the
/// CSS Level-4 space-separated syntax in one pass. Literal `/` tokens are
/// dropped; every other token is reduced to its ASCII digits and decimal
/// points and parsed as a number, so that wrappers like `rgb(` and units like
/// `%` or `deg` simply fall away. The returned flag records whether the
/// string contained a `/`, in which case the caller must treat the fourth
/// number as a percentage.
fn scan_channels(s: &str) -> Result<(Vec<Float>, bool), ColorFormatError> {
    let slashed = s.contains('/');
    let tokens: Vec<&str> = if s.contains(',') {
        s.split(',').collect()
    } else {
        s.split_whitespace().collect()
    };

    let mut numbers = Vec::with_capacity(4);
    for token in tokens {
        if token == "/" {
            continue;
        }

        let digits: String = token
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '.')
            .collect();
        let number = digits
            .parse()
            .map_err(|_| ColorFormatError::MalformedNumber(token.trim().to_string()))?;
        numbers.push(number);
    }

    if numbers.len() < 3 || (slashed && numbers.len() < 4) {
        return Err(ColorFormatError::MissingChannel);
    } else if 4 < numbers.len() {
        return Err(ColorFormatError::TooManyChannels);
    }

    Ok((numbers, slashed))
}

/// Determine the alpha from an optional fourth number.
///
/// With the slash form, the number is a percentage and is divided by 100;
/// otherwise it already is a unit fraction. A missing number defaults to 1.
fn scan_alpha(numbers: &[Float], slashed: bool) -> Float {
    match numbers.get(3) {
        Some(&alpha) if slashed => alpha / 100.0,
        Some(&alpha) => alpha,
        None => 1.0,
    }
}

/// Round a channel number to its canonical integer value.
///
/// Channel tokens usually are integers already; a fractional channel such as
/// `79.5` rounds to the nearest integer because the canonical representation
/// stores integer channels.
fn to_channel(value: Float) -> i32 {
    value.round() as i32
}

/// Parse a color in RGB(A) format.
///
/// This function accepts the bare channel list (`79, 147, 62` or
/// `79, 147, 62, 0.5`), the wrapped forms (`rgb(79, 147, 62)`,
/// `rgba(79, 147, 62, 0.5)`), and the slash-alpha form
/// (`rgba(79 147 62 / 50%)`).
pub(crate) fn parse_rgb(s: &str) -> Result<Rgba, ColorFormatError> {
    let (numbers, slashed) = scan_channels(s)?;
    let alpha = scan_alpha(&numbers, slashed);

    Ok(Rgba::new(
        to_channel(numbers[0]),
        to_channel(numbers[1]),
        to_channel(numbers[2]),
        alpha,
    ))
}

/// Parse a color in HSL(A) format.
///
/// This function accepts the same separator, wrapping, and slash-alpha
/// variants as [`parse_rgb`], plus an optional `deg` suffix on the hue, which
/// the digit filter strips along with `%` signs. The hue is used as given,
/// without wrapping into `0..360`; saturation and lightness are percentages.
/// The channels are converted to RGB immediately, since the canonical
/// representation is RGB.
pub(crate) fn parse_hsl(s: &str) -> Result<Rgba, ColorFormatError> {
    let (numbers, slashed) = scan_channels(s)?;
    let alpha = scan_alpha(&numbers, slashed);

    let hue = numbers[0];
    let saturation = numbers[1] / 100.0;
    let lightness = numbers[2] / 100.0;

    let (red, green, blue) = hsl_to_rgb(hue, saturation, lightness);
    Ok(Rgba::new(red, green, blue, alpha))
}

// --------------------------------------------------------------------------------------------------------------------

fn wrap(body: String, prefix: &str, unwrap: bool) -> String {
    if unwrap {
        body
    } else {
        format!("{}({})", prefix, body)
    }
}

/// Format the channels in hashed hexadecimal notation, without alpha.
pub(crate) fn format_hex(rgba: Rgba, unwrap: bool) -> String {
    let hex = format!("{:02x}{:02x}{:02x}", rgba.red, rgba.green, rgba.blue);
    if unwrap {
        hex
    } else {
        format!("#{}", hex)
    }
}

/// Format the channels in hashed hexadecimal notation, with the alpha
/// appended as `round(alpha × 255)` in hex.
pub(crate) fn format_hexa(rgba: Rgba, unwrap: bool) -> String {
    let alpha = (rgba.alpha * 255.0).round() as i32;
    let hex = format!(
        "{:02x}{:02x}{:02x}{:02x}",
        rgba.red, rgba.green, rgba.blue, alpha
    );
    if unwrap {
        hex
    } else {
        format!("#{}", hex)
    }
}

/// Format the channels as a comma-separated RGB list.
pub(crate) fn format_rgb(rgba: Rgba, unwrap: bool) -> String {
    let body = format!("{}, {}, {}", rgba.red, rgba.green, rgba.blue);
    wrap(body, "rgb", unwrap)
}

/// Format the channels as a comma-separated RGBA list.
pub(crate) fn format_rgba(rgba: Rgba, unwrap: bool) -> String {
    let body = format!(
        "{}, {}, {}, {}",
        rgba.red, rgba.green, rgba.blue, rgba.alpha
    );
    wrap(body, "rgba", unwrap)
}

/// Format the channels as a comma-separated HSL list.
pub(crate) fn format_hsl(rgba: Rgba, unwrap: bool) -> String {
    let (hue, saturation, lightness) = rgb_to_hsl(rgba.red, rgba.green, rgba.blue);
    let body = format!("{}, {}%, {}%", hue, saturation, lightness);
    wrap(body, "hsl", unwrap)
}

/// Format the channels as a comma-separated HSLA list.
pub(crate) fn format_hsla(rgba: Rgba, unwrap: bool) -> String {
    let (hue, saturation, lightness) = rgb_to_hsl(rgba.red, rgba.green, rgba.blue);
    let body = format!("{}, {}%, {}%, {}", hue, saturation, lightness, rgba.alpha);
    wrap(body, "hsla", unwrap)
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{
        format_hex, format_hexa, format_hsl, format_hsla, format_rgb, format_rgba, parse_hex,
        parse_hsl, parse_rgb,
    };
    use crate::error::ColorFormatError;
    use crate::object::Rgba;
    use approx::assert_relative_eq;

    #[test]
    fn test_parse_hex() -> Result<(), ColorFormatError> {
        assert_eq!(parse_hex("#4f933e")?, Rgba::new(79, 147, 62, 1.0));
        assert_eq!(parse_hex("4f933e")?, Rgba::new(79, 147, 62, 1.0));
        assert_eq!(parse_hex("#4f933e80")?, Rgba::new(79, 147, 62, 0.5));
        assert_eq!(parse_hex("#4f933eff")?, Rgba::new(79, 147, 62, 1.0));
        assert_eq!(parse_hex("#4f933e00")?, Rgba::new(79, 147, 62, 0.0));

        assert_eq!(parse_hex("#fff"), Err(ColorFormatError::BadHexLength(3)));
        assert_eq!(parse_hex("#4f933e8"), Err(ColorFormatError::BadHexLength(7)));
        assert_eq!(parse_hex("#4f93ge"), Err(ColorFormatError::MalformedHex));
        assert_eq!(parse_hex("#💩💩💩"), Err(ColorFormatError::BadHexLength(12)));

        Ok(())
    }

    #[test]
    fn test_hex_alpha_precision() -> Result<(), ColorFormatError> {
        // Two significant digits, not two decimal places.
        assert_relative_eq!(parse_hex("#4f933e80")?.alpha, 0.5, epsilon = 0.01);
        assert_relative_eq!(parse_hex("#4f933e0a")?.alpha, 0.039, epsilon = 0.001);
        Ok(())
    }

    #[test]
    fn test_parse_rgb() -> Result<(), ColorFormatError> {
        let expected = Rgba::new(79, 147, 62, 1.0);
        assert_eq!(parse_rgb("79, 147, 62")?, expected);
        assert_eq!(parse_rgb("79 147 62")?, expected);
        assert_eq!(parse_rgb("rgb(79, 147, 62)")?, expected);
        assert_eq!(parse_rgb("rgb(79 147 62)")?, expected);

        assert_eq!(
            parse_rgb("rgba(79, 147, 62, 0.5)")?,
            Rgba::new(79, 147, 62, 0.5)
        );
        assert_eq!(
            parse_rgb("79, 147, 62, 0.25")?,
            Rgba::new(79, 147, 62, 0.25)
        );
        assert_eq!(
            parse_rgb("rgba(79 147 62 / 50%)")?,
            Rgba::new(79, 147, 62, 0.5)
        );

        assert_eq!(parse_rgb("79, 147"), Err(ColorFormatError::MissingChannel));
        assert_eq!(
            parse_rgb("rgb(79, 147, 62, 1, 0)"),
            Err(ColorFormatError::TooManyChannels)
        );
        assert_eq!(
            parse_rgb("79 147 62 /"),
            Err(ColorFormatError::MissingChannel)
        );
        assert_eq!(
            parse_rgb("rgb(79, nope, 62)"),
            Err(ColorFormatError::MalformedNumber("nope".to_string()))
        );

        Ok(())
    }

    #[test]
    fn test_parse_hsl() -> Result<(), ColorFormatError> {
        let expected = Rgba::new(79, 147, 62, 1.0);
        assert_eq!(parse_hsl("108, 41%, 41%")?, expected);
        assert_eq!(parse_hsl("hsl(108, 41%, 41%)")?, expected);
        assert_eq!(parse_hsl("hsl(108deg 41% 41%)")?, expected);
        assert_eq!(
            parse_hsl("hsla(108, 41%, 41%, 0.5)")?,
            Rgba::new(79, 147, 62, 0.5)
        );
        assert_eq!(
            parse_hsl("hsla(108deg 41% 41% / 50%)")?,
            Rgba::new(79, 147, 62, 0.5)
        );

        assert_eq!(
            parse_hsl("hsl(108, 41%)"),
            Err(ColorFormatError::MissingChannel)
        );

        Ok(())
    }

    #[test]
    fn test_format() {
        let green = Rgba::new(79, 147, 62, 0.5);
        assert_eq!(format_hex(green, false), "#4f933e");
        assert_eq!(format_hex(green, true), "4f933e");
        assert_eq!(format_hexa(green, false), "#4f933e80");
        assert_eq!(format_rgb(green, false), "rgb(79, 147, 62)");
        assert_eq!(format_rgb(green, true), "79, 147, 62");
        assert_eq!(format_rgba(green, false), "rgba(79, 147, 62, 0.5)");
        assert_eq!(format_hsl(green, false), "hsl(108, 41%, 41%)");
        assert_eq!(format_hsl(green, true), "108, 41%, 41%");
        assert_eq!(format_hsla(green, false), "hsla(108, 41%, 41%, 0.5)");

        let opaque = Rgba::new(79, 147, 62, 1.0);
        assert_eq!(format_rgba(opaque, true), "79, 147, 62, 1");
        assert_eq!(format_hexa(opaque, false), "#4f933eff");
    }

    #[test]
    fn test_zero_padding() {
        assert_eq!(format_hex(Rgba::new(1, 2, 3, 1.0), false), "#010203");
        assert_eq!(format_hexa(Rgba::new(0, 0, 0, 0.0), false), "#00000000");
    }
}
