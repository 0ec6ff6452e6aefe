mod contrast;
mod conversion;
mod format;
mod string;

// contrast
pub(crate) use contrast::use_dark_contrast;

// format
pub use format::Format;

// string
pub(crate) use string::{
    format_hex, format_hexa, format_hsl, format_hsla, format_rgb, format_rgba, parse_hex,
    parse_hsl, parse_rgb,
};
