use crate::core::{
    format_hex, format_hexa, format_hsl, format_hsla, format_rgb, format_rgba, parse_hex,
    parse_hsl, parse_rgb, use_dark_contrast, Format,
};
use crate::error::ColorFormatError;
use crate::Float;

/// The canonical color value.
///
/// Every notation this crate parses funnels into this one representation:
/// three integer channels and a floating point alpha. The channels are
/// semantically constrained to `0..=255` and the alpha to `0.0..=1.0`, but
/// neither constraint is enforced — out-of-range values are accepted as given
/// and simply are not guaranteed to round-trip meaningfully through the
/// formatters.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Rgba {
    /// The red channel.
    pub red: i32,
    /// The green channel.
    pub green: i32,
    /// The blue channel.
    pub blue: i32,
    /// The alpha as a unit fraction, 1 when the input had none.
    pub alpha: Float,
}

impl Rgba {
    /// Create a new canonical color value.
    #[inline]
    pub const fn new(red: i32, green: i32, blue: i32, alpha: Float) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }
}

const BLACK: Rgba = Rgba::new(0, 0, 0, 1.0);
const WHITE: Rgba = Rgba::new(255, 255, 255, 1.0);

// ====================================================================================================================

/// Override colors for contrast derivation.
///
/// [`Color::to_contrast_with`] substitutes the `dark` string for literal
/// black and the `light` string for literal white. Either field may be left
/// `None` to keep the default for that branch.
///
/// ```
/// # use prettyhue::ContrastOverrides;
/// let overrides = ContrastOverrides::default()
///     .with_dark("#2d0657")
///     .with_light("#03ff17");
/// assert_eq!(overrides.dark.as_deref(), Some("#2d0657"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContrastOverrides {
    /// The replacement for black, used against light colors.
    pub dark: Option<String>,
    /// The replacement for white, used against dark colors.
    pub light: Option<String>,
}

impl ContrastOverrides {
    /// Set the dark override.
    pub fn with_dark(mut self, color: impl Into<String>) -> Self {
        self.dark = Some(color.into());
        self
    }

    /// Set the light override.
    pub fn with_light(mut self, color: impl Into<String>) -> Self {
        self.light = Some(color.into());
        self
    }
}

// ====================================================================================================================

/// A color parsed from one of the three supported notations.
///
/// A color object owns one immutable [`Rgba`] value, produced exactly once at
/// construction from a HEX(A), RGB(A), or HSL(A) string. All other
/// operations read that value: the six formatters render it back into text,
/// wrapped or unwrapped, and [`Color::to_contrast`] derives a brand-new color
/// with readable contrast. Nothing mutates a color after construction, so
/// instances are freely usable across threads.
///
/// # Examples
///
/// ```
/// # use prettyhue::Color;
/// # use prettyhue::error::ColorFormatError;
/// let green = Color::new("#4f933e")?;
/// assert_eq!(green.to_rgb(false), "rgb(79, 147, 62)");
/// assert_eq!(green.to_hsl(false), "hsl(108, 41%, 41%)");
/// # Ok::<(), ColorFormatError>(())
/// ```
/// <div class=color-swatch>
/// <div style="background-color: #4f933e;"></div>
/// </div>
#[derive(Clone, Debug, PartialEq)]
pub struct Color {
    rgba: Rgba,
}

impl Color {
    /// Parse a color, guessing its format.
    ///
    /// The guess inspects the string's leading characters, exactly like
    /// [`Format::guess`]: `#` means hex, `rgb` means rgb, `hsl` means hsl.
    /// Bare channel lists cannot be guessed; parse them with
    /// [`Color::parse_as`] instead.
    ///
    /// ```
    /// # use prettyhue::Color;
    /// # use prettyhue::error::ColorFormatError;
    /// let sky = Color::new("rgba(79 147 62 / 50%)")?;
    /// assert_eq!(sky.rgba().alpha, 0.5);
    /// assert!(Color::new("79, 147, 62").is_err());
    /// # Ok::<(), ColorFormatError>(())
    /// ```
    pub fn new(s: &str) -> Result<Self, ColorFormatError> {
        Format::guess(s).and_then(|format| Self::parse_as(s, format))
    }

    /// Parse a color with an explicit format, skipping the guess.
    ///
    /// The explicit tag makes the bare channel lists parseable:
    ///
    /// ```
    /// # use prettyhue::{Color, Format};
    /// # use prettyhue::error::ColorFormatError;
    /// let bare = Color::parse_as("79, 147, 62", Format::Rgb)?;
    /// let wrapped = Color::parse_as("rgb(79, 147, 62)", Format::Rgb)?;
    /// assert_eq!(bare, wrapped);
    /// # Ok::<(), ColorFormatError>(())
    /// ```
    pub fn parse_as(s: &str, format: Format) -> Result<Self, ColorFormatError> {
        let lowercase = s.trim().to_ascii_lowercase(); // Keep around for fn scope
        let s = lowercase.as_str();

        let rgba = match format {
            Format::Hex => parse_hex(s),
            Format::Rgb => parse_rgb(s),
            Format::Hsl => parse_hsl(s),
        }?;

        Ok(Self::from_rgba(rgba))
    }

    /// Create a color directly from its canonical value.
    #[inline]
    pub const fn from_rgba(rgba: Rgba) -> Self {
        Self { rgba }
    }

    /// Access the canonical color value.
    ///
    /// The value is returned by copy; the color itself stays immutable.
    #[inline]
    pub const fn rgba(&self) -> Rgba {
        self.rgba
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Format this color in hashed hexadecimal notation, e.g., `#4f933e`.
    ///
    /// With `unwrap`, the leading `#` is omitted.
    pub fn to_hex(&self, unwrap: bool) -> String {
        format_hex(self.rgba, unwrap)
    }

    /// Format this color in hashed hexadecimal notation with alpha, e.g.,
    /// `#4f933e80`.
    ///
    /// The alpha is rendered as `round(alpha × 255)` in two hex digits. With
    /// `unwrap`, the leading `#` is omitted.
    ///
    /// ```
    /// # use prettyhue::Color;
    /// # use prettyhue::error::ColorFormatError;
    /// let green = Color::new("rgba(79, 147, 62, 0.5)")?;
    /// assert_eq!(green.to_hexa(false), "#4f933e80");
    /// # Ok::<(), ColorFormatError>(())
    /// ```
    pub fn to_hexa(&self, unwrap: bool) -> String {
        format_hexa(self.rgba, unwrap)
    }

    /// Format this color as an RGB channel list, e.g., `rgb(79, 147, 62)`.
    ///
    /// With `unwrap`, only the bare list `79, 147, 62` is returned.
    pub fn to_rgb(&self, unwrap: bool) -> String {
        format_rgb(self.rgba, unwrap)
    }

    /// Format this color as an RGBA channel list, e.g.,
    /// `rgba(79, 147, 62, 0.5)`.
    ///
    /// With `unwrap`, only the bare list is returned.
    ///
    /// ```
    /// # use prettyhue::Color;
    /// # use prettyhue::error::ColorFormatError;
    /// let green = Color::new("#4f933e80")?;
    /// assert_eq!(green.to_rgba(true), "79, 147, 62, 0.5");
    /// # Ok::<(), ColorFormatError>(())
    /// ```
    pub fn to_rgba(&self, unwrap: bool) -> String {
        format_rgba(self.rgba, unwrap)
    }

    /// Format this color as an HSL list, e.g., `hsl(108, 41%, 41%)`.
    ///
    /// Saturation and lightness are rounded to integer percentages. The hue
    /// is rounded to integer degrees but *not* wrapped into `0..360`: colors
    /// whose dominant channel is red with green trailing blue produce a
    /// negative hue, which is preserved as-is.
    ///
    /// ```
    /// # use prettyhue::Color;
    /// # use prettyhue::error::ColorFormatError;
    /// let raspberry = Color::new("rgb(200, 50, 100)")?;
    /// assert_eq!(raspberry.to_hsl(false), "hsl(-20, 60%, 49%)");
    /// # Ok::<(), ColorFormatError>(())
    /// ```
    pub fn to_hsl(&self, unwrap: bool) -> String {
        format_hsl(self.rgba, unwrap)
    }

    /// Format this color as an HSLA list, e.g., `hsla(108, 41%, 41%, 0.5)`.
    ///
    /// With `unwrap`, only the bare list is returned.
    pub fn to_hsla(&self, unwrap: bool) -> String {
        format_hsla(self.rgba, unwrap)
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Derive the readable contrast color, black or white.
    ///
    /// This method computes the YIQ luma `(299·r + 587·g + 114·b) / 1000`,
    /// rounded. A luma above 125 makes this color light, so the contrast is
    /// black; otherwise the contrast is white. The result is a brand-new
    /// color; the receiver is unchanged.
    ///
    /// ```
    /// # use prettyhue::Color;
    /// # use prettyhue::error::ColorFormatError;
    /// let eggplant = Color::new("#261245")?;
    /// assert_eq!(eggplant.to_contrast().to_hex(false), "#ffffff");
    ///
    /// let powder = Color::new("#7ddbff")?;
    /// assert_eq!(powder.to_contrast().to_hex(false), "#000000");
    /// # Ok::<(), ColorFormatError>(())
    /// ```
    /// <div class=color-swatch>
    /// <div style="background-color: #261245;"><span style="color: #fff;">Aa</span></div>
    /// <div style="background-color: #7ddbff;"><span style="color: #000;">Aa</span></div>
    /// </div>
    pub fn to_contrast(&self) -> Color {
        if self.is_light() {
            Self::from_rgba(BLACK)
        } else {
            Self::from_rgba(WHITE)
        }
    }

    /// Derive the readable contrast color with overrides.
    ///
    /// Same decision as [`Color::to_contrast`], except that the `dark`
    /// override replaces black and the `light` override replaces white when
    /// present. Since overrides are color strings, they re-enter
    /// construction and this method fails if the chosen override does not
    /// parse.
    ///
    /// ```
    /// # use prettyhue::{Color, ContrastOverrides};
    /// # use prettyhue::error::ColorFormatError;
    /// let overrides = ContrastOverrides::default()
    ///     .with_dark("#2d0657")
    ///     .with_light("#03ff17");
    /// let powder = Color::new("#7ddbff")?;
    /// assert_eq!(powder.to_contrast_with(&overrides)?.to_hex(false), "#2d0657");
    /// # Ok::<(), ColorFormatError>(())
    /// ```
    pub fn to_contrast_with(
        &self,
        overrides: &ContrastOverrides,
    ) -> Result<Color, ColorFormatError> {
        if self.is_light() {
            match &overrides.dark {
                Some(dark) => Self::new(dark),
                None => Ok(Self::from_rgba(BLACK)),
            }
        } else {
            match &overrides.light {
                Some(light) => Self::new(light),
                None => Ok(Self::from_rgba(WHITE)),
            }
        }
    }

    fn is_light(&self) -> bool {
        use_dark_contrast(self.rgba.red, self.rgba.green, self.rgba.blue)
    }
}

// ====================================================================================================================

impl std::str::FromStr for Color {
    type Err = ColorFormatError;

    /// Parse a color from its string representation, guessing the format.
    ///
    /// By implementing the `FromStr` trait, `str::parse` works just the same
    /// as [`Color::new`] — as long as type inference can determine what type
    /// to parse.
    ///
    /// ```
    /// # use prettyhue::Color;
    /// # use prettyhue::error::ColorFormatError;
    /// let green: Color = "hsl(108, 41%, 41%)".parse()?;
    /// assert_eq!(green.to_hex(false), "#4f933e");
    /// # Ok::<(), ColorFormatError>(())
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<&str> for Color {
    type Error = ColorFormatError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<String> for Color {
    type Error = ColorFormatError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value.as_str())
    }
}

impl From<Rgba> for Color {
    fn from(value: Rgba) -> Self {
        Self::from_rgba(value)
    }
}

impl std::fmt::Display for Color {
    /// Format this color as a wrapped RGB(A) list.
    ///
    /// A fully opaque color displays as `rgb(...)`; anything else displays
    /// as `rgba(...)` with its alpha.
    ///
    /// ```
    /// # use prettyhue::Color;
    /// # use prettyhue::error::ColorFormatError;
    /// let green = Color::new("#4f933e")?;
    /// assert_eq!(format!("{}", green), "rgb(79, 147, 62)");
    /// let glassy = Color::new("#4f933e80")?;
    /// assert_eq!(format!("{}", glassy), "rgba(79, 147, 62, 0.5)");
    /// # Ok::<(), ColorFormatError>(())
    /// ```
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.rgba.alpha == 1.0 {
            f.write_str(&self.to_rgb(false))
        } else {
            f.write_str(&self.to_rgba(false))
        }
    }
}

// ====================================================================================================================
