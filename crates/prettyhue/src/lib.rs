//! # Pretty 🎨 Hue
//!
//! Prettyhue converts colors between the three textual notations that show up
//! everywhere in styling code — HEX(A), RGB(A), and HSL(A) — and derives a
//! readable contrast color, black or white, for any of them.
//!
//!
//! ## 1. Overview
//!
//! Prettyhue's main abstractions are:
//!
//!   * [`Color`] owns the **canonical color value** [`Rgba`], parsed once
//!     from a string, and exposes the six formatters [`Color::to_hex`],
//!     [`Color::to_hexa`], [`Color::to_rgb`], [`Color::to_rgba`],
//!     [`Color::to_hsl`], and [`Color::to_hsla`] as well as contrast
//!     derivation with [`Color::to_contrast`].
//!   * [`Format`] tags the three notations. [`Color::new`] guesses the tag
//!     from the string's leading characters; [`Color::parse_as`] takes it
//!     explicitly, which also unlocks bare channel lists like `79, 147, 62`.
//!   * The [`helpers`] module offers **one-shot conversion shortcuts** such
//!     as [`hex_to_hsl`](helpers::hex_to_hsl) for callers that don't care
//!     about the intermediate color object.
//!
//! Parsing is deliberately forgiving about notation — wrapped or bare lists,
//! commas or spaces, `%` and `deg` units, CSS Level-4 slash alphas — but
//! strict about content: malformed channels fail construction with a typed
//! [`error::ColorFormatError`] instead of smuggling not-a-numbers into the
//! canonical value.
//!
//!
//! ## 2. One-Two-Three: Colors!
//!
//! Parse a color, convert it, and pick readable text on top of it:
//!
//! ```
//! # use prettyhue::Color;
//! # use prettyhue::error::ColorFormatError;
//! // 1. Parse, guessing the format from the leading characters
//! let green = Color::new("#4f933e")?;
//!
//! // 2. Convert between notations
//! assert_eq!(green.to_rgb(false), "rgb(79, 147, 62)");
//! assert_eq!(green.to_hsl(false), "hsl(108, 41%, 41%)");
//!
//! // 3. Derive the readable contrast color
//! assert_eq!(green.to_contrast().to_hex(false), "#ffffff");
//! # Ok::<(), ColorFormatError>(())
//! ```
//! <div class=color-swatch>
//! <div style="background-color: #4f933e;"><span style="color: #fff;">Aa</span></div>
//! </div>
//!
//!
//! ## 3. Optional Features
//!
//! Prettyhue supports one feature flag:
//!
//!   - **`f64`** selects the eponymous type as floating point type [`Float`]
//!     instead of `f32`. This feature is enabled by default.

/// The floating point type in use.
#[cfg(feature = "f64")]
pub type Float = f64;
/// The floating point type in use.
#[cfg(not(feature = "f64"))]
pub type Float = f32;

mod core;
pub mod error;
pub mod helpers;
mod object;

pub use core::Format;
pub use object::{Color, ContrastOverrides, Rgba};
