//! Utility module with prettyhue's errors.

/// An erroneous color format.
///
/// Every failure in this crate is a construction-time failure: either the
/// format of a color string cannot be determined, or the string cannot be
/// parsed as the determined format. Once a [`Color`](crate::Color) exists, no
/// operation on it can fail.
///
/// Unlike the loosey-goosey notations this crate parses, parse failures are
/// strict: a malformed channel is an error, never a silently propagated
/// not-a-number.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ColorFormatError {
    /// A color string that starts with neither `#`, `rgb`, nor `hsl` and
    /// hence supports no format guess. For example, `chartreuse` names a fine
    /// color but identifies no parseable format.
    #[error("unable to guess the color format; specify it explicitly")]
    UnguessableFormat,

    /// An explicit format tag other than `hex`, `rgb`, or `hsl`. For example,
    /// `cmyk` is not a recognized tag.
    #[error("unknown color format tag `{0}`; expected `hex`, `rgb`, or `hsl`")]
    UnknownFormatTag(String),

    /// A hex color with a digit count other than 6 or 8. For example, `#fff`
    /// has three digits, which this crate does not expand.
    #[error("hex color should have 6 or 8 digits but has {0}")]
    BadHexLength(usize),

    /// A hex color with a character that is not a hexadecimal digit. For
    /// example, `#4f93ge` has a `g` in its third channel.
    #[error("hex color should contain only hexadecimal digits but does not")]
    MalformedHex,

    /// A channel token that contains no parseable number. For example,
    /// `rgb(79, nope, 62)` has a malformed second channel.
    #[error("color channel `{0}` should be a number but is not")]
    MalformedNumber(String),

    /// A channel list with fewer than three numbers, or a slash-alpha form
    /// without the number after the slash. For example, `rgb(79, 147)` is
    /// missing its blue channel.
    #[error("color should have 3 or 4 channels but has fewer")]
    MissingChannel,

    /// A channel list with more than four numbers. For example,
    /// `rgb(1, 2, 3, 4, 5)` has one channel too many.
    #[error("color should have 3 or 4 channels but has more")]
    TooManyChannels,
}
