//! One-shot conversion shortcuts.
//!
//! Each helper parses its input with the matching explicit [`Format`],
//! renders it in the target notation, and throws the intermediate [`Color`]
//! away. They exist for call sites that convert a single string and have no
//! use for the color object itself:
//!
//! ```
//! # use prettyhue::helpers::hex_to_hsl;
//! # use prettyhue::error::ColorFormatError;
//! assert_eq!(hex_to_hsl("#4f933e", false)?, "hsl(108, 41%, 41%)");
//! # Ok::<(), ColorFormatError>(())
//! ```
//!
//! The `unwrap` flag is the same as on the [`Color`] formatters: `true`
//! drops the functional wrapper or the leading `#`.

use crate::core::Format;
use crate::error::ColorFormatError;
use crate::object::Color;

/// Convert a HEX/HEXA string to an RGB string.
pub fn hex_to_rgb(hex: &str, unwrap: bool) -> Result<String, ColorFormatError> {
    Color::parse_as(hex, Format::Hex).map(|color| color.to_rgb(unwrap))
}

/// Convert a HEX/HEXA string to an RGBA string.
pub fn hex_to_rgba(hex: &str, unwrap: bool) -> Result<String, ColorFormatError> {
    Color::parse_as(hex, Format::Hex).map(|color| color.to_rgba(unwrap))
}

/// Convert a HEX/HEXA string to an HSL string.
pub fn hex_to_hsl(hex: &str, unwrap: bool) -> Result<String, ColorFormatError> {
    Color::parse_as(hex, Format::Hex).map(|color| color.to_hsl(unwrap))
}

/// Convert a HEX/HEXA string to an HSLA string.
pub fn hex_to_hsla(hex: &str, unwrap: bool) -> Result<String, ColorFormatError> {
    Color::parse_as(hex, Format::Hex).map(|color| color.to_hsla(unwrap))
}

/// Convert an RGB/RGBA string to a HEX string.
pub fn rgb_to_hex(rgb: &str, unwrap: bool) -> Result<String, ColorFormatError> {
    Color::parse_as(rgb, Format::Rgb).map(|color| color.to_hex(unwrap))
}

/// Convert an RGB/RGBA string to a HEXA string.
pub fn rgb_to_hexa(rgb: &str, unwrap: bool) -> Result<String, ColorFormatError> {
    Color::parse_as(rgb, Format::Rgb).map(|color| color.to_hexa(unwrap))
}

/// Convert an RGB/RGBA string to an HSL string.
pub fn rgb_to_hsl(rgb: &str, unwrap: bool) -> Result<String, ColorFormatError> {
    Color::parse_as(rgb, Format::Rgb).map(|color| color.to_hsl(unwrap))
}

/// Convert an RGB/RGBA string to an HSLA string.
pub fn rgb_to_hsla(rgb: &str, unwrap: bool) -> Result<String, ColorFormatError> {
    Color::parse_as(rgb, Format::Rgb).map(|color| color.to_hsla(unwrap))
}

/// Convert an HSL/HSLA string to a HEX string.
pub fn hsl_to_hex(hsl: &str, unwrap: bool) -> Result<String, ColorFormatError> {
    Color::parse_as(hsl, Format::Hsl).map(|color| color.to_hex(unwrap))
}

/// Convert an HSL/HSLA string to a HEXA string.
pub fn hsl_to_hexa(hsl: &str, unwrap: bool) -> Result<String, ColorFormatError> {
    Color::parse_as(hsl, Format::Hsl).map(|color| color.to_hexa(unwrap))
}

/// Convert an HSL/HSLA string to an RGB string.
pub fn hsl_to_rgb(hsl: &str, unwrap: bool) -> Result<String, ColorFormatError> {
    Color::parse_as(hsl, Format::Hsl).map(|color| color.to_rgb(unwrap))
}

/// Convert an HSL/HSLA string to an RGBA string.
pub fn hsl_to_rgba(hsl: &str, unwrap: bool) -> Result<String, ColorFormatError> {
    Color::parse_as(hsl, Format::Hsl).map(|color| color.to_rgba(unwrap))
}

#[cfg(test)]
mod test {
    use super::{hex_to_hsl, hex_to_rgb, hsl_to_hex, rgb_to_hex, rgb_to_hsla};
    use crate::error::ColorFormatError;

    #[test]
    fn test_shortcuts() -> Result<(), ColorFormatError> {
        assert_eq!(hex_to_rgb("#4f933e", false)?, "rgb(79, 147, 62)");
        assert_eq!(hex_to_rgb("4f933e", true)?, "79, 147, 62");
        assert_eq!(hex_to_hsl("#4f933e", false)?, "hsl(108, 41%, 41%)");
        assert_eq!(rgb_to_hex("rgb(79, 147, 62)", false)?, "#4f933e");
        assert_eq!(rgb_to_hex("79, 147, 62", false)?, "#4f933e");
        assert_eq!(
            rgb_to_hsla("rgba(79, 147, 62, 0.5)", false)?,
            "hsla(108, 41%, 41%, 0.5)"
        );
        assert_eq!(hsl_to_hex("hsl(108, 41%, 41%)", false)?, "#4f933e");
        Ok(())
    }

    #[test]
    fn test_shortcut_failure() {
        assert_eq!(
            hex_to_rgb("#4f933", false),
            Err(ColorFormatError::BadHexLength(5))
        );
    }
}
