use crate::error::ColorFormatError;

/// The textual color formats.
///
/// A format tag selects one of the three notations this crate understands. It
/// doubles as the guess produced by [`Format::guess`] and as the explicit
/// dispatch for [`Color::parse_as`](crate::Color::parse_as), which skips
/// guessing altogether.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Format {
    /// The hashed hexadecimal notation, `#RRGGBB` or `#RRGGBBAA`.
    Hex,
    /// The comma- or space-separated channel list, bare or wrapped in
    /// `rgb(...)`/`rgba(...)`.
    Rgb,
    /// The equivalent channel list with hue, saturation, and lightness, bare
    /// or wrapped in `hsl(...)`/`hsla(...)`.
    Hsl,
}

fn has_prefix(s: &str, prefix: &str) -> bool {
    s.get(..prefix.len())
        .is_some_and(|p| p.eq_ignore_ascii_case(prefix))
}

impl Format {
    /// Guess the format from the string's leading characters.
    ///
    /// A leading `#` implies hex, a leading case-insensitive `rgb` implies
    /// rgb, and a leading case-insensitive `hsl` implies hsl. The string is
    /// trimmed first. Anything else is an error, since bare channel lists
    /// such as `79, 147, 62` carry no hint of their own format.
    ///
    /// ```
    /// # use prettyhue::Format;
    /// # use prettyhue::error::ColorFormatError;
    /// assert_eq!(Format::guess("#4f933e"), Ok(Format::Hex));
    /// assert_eq!(Format::guess("RGBA(79 147 62 / 50%)"), Ok(Format::Rgb));
    /// assert_eq!(Format::guess("hsl(108, 41%, 41%)"), Ok(Format::Hsl));
    /// assert_eq!(Format::guess(""), Err(ColorFormatError::UnguessableFormat));
    /// ```
    pub fn guess(s: &str) -> Result<Format, ColorFormatError> {
        let s = s.trim();
        if s.starts_with('#') {
            Ok(Self::Hex)
        } else if has_prefix(s, "rgb") {
            Ok(Self::Rgb)
        } else if has_prefix(s, "hsl") {
            Ok(Self::Hsl)
        } else {
            Err(ColorFormatError::UnguessableFormat)
        }
    }

    /// Access this format's name, which is `hex`, `rgb`, or `hsl`.
    pub const fn name(&self) -> &'static str {
        match *self {
            Self::Hex => "hex",
            Self::Rgb => "rgb",
            Self::Hsl => "hsl",
        }
    }
}

impl std::str::FromStr for Format {
    type Err = ColorFormatError;

    /// Parse a format tag from its name.
    ///
    /// The three recognized names are `hex`, `rgb`, and `hsl`, compared
    /// ignoring ASCII case. Any other name is an
    /// [`UnknownFormatTag`](ColorFormatError::UnknownFormatTag) error.
    ///
    /// ```
    /// # use prettyhue::Format;
    /// # use prettyhue::error::ColorFormatError;
    /// assert_eq!("rgb".parse::<Format>(), Ok(Format::Rgb));
    /// assert_eq!(
    ///     "invalid".parse::<Format>(),
    ///     Err(ColorFormatError::UnknownFormatTag("invalid".to_string()))
    /// );
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("hex") {
            Ok(Self::Hex)
        } else if s.eq_ignore_ascii_case("rgb") {
            Ok(Self::Rgb)
        } else if s.eq_ignore_ascii_case("hsl") {
            Ok(Self::Hsl)
        } else {
            Err(ColorFormatError::UnknownFormatTag(s.to_string()))
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod test {
    use super::Format;
    use crate::error::ColorFormatError;

    #[test]
    fn test_guess() {
        assert_eq!(Format::guess("#4f933e"), Ok(Format::Hex));
        assert_eq!(Format::guess("  #4f933e80  "), Ok(Format::Hex));
        assert_eq!(Format::guess("rgb(79, 147, 62)"), Ok(Format::Rgb));
        assert_eq!(Format::guess("Rgba(79 147 62 / 50%)"), Ok(Format::Rgb));
        assert_eq!(Format::guess("HSL(108, 41%, 41%)"), Ok(Format::Hsl));
        assert_eq!(Format::guess(""), Err(ColorFormatError::UnguessableFormat));
        assert_eq!(
            Format::guess("79, 147, 62"),
            Err(ColorFormatError::UnguessableFormat)
        );
        // Too short for any prefix, and not a hash.
        assert_eq!(Format::guess("rg"), Err(ColorFormatError::UnguessableFormat));
    }

    #[test]
    fn test_from_str() {
        assert_eq!("hex".parse(), Ok(Format::Hex));
        assert_eq!("RGB".parse(), Ok(Format::Rgb));
        assert_eq!("hsl".parse(), Ok(Format::Hsl));
        assert_eq!(
            "invalid".parse::<Format>(),
            Err(ColorFormatError::UnknownFormatTag("invalid".to_string()))
        );
        assert_eq!(Format::Hsl.to_string(), "hsl");
    }
}
