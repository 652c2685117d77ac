//! The bracket-like delimiter pairs tracked for balance.

use std::fmt;

/// One of the four tracked delimiter pairs.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Delimiter {
    /// `(` `)`
    Paren,
    /// `{` `}`
    Brace,
    /// `[` `]`
    Bracket,
    /// `<` `>`
    ///
    /// The same characters are comparison and generic operators outside
    /// markup tags, so code like `a < b` will be misreported. Disable with
    /// [`DelimiterSet::NoAngle`].
    Angle,
}

impl Delimiter {
    pub const ALL: [Delimiter; 4] = [
        Delimiter::Paren,
        Delimiter::Brace,
        Delimiter::Bracket,
        Delimiter::Angle,
    ];

    /// The opening character.
    pub const fn open(self) -> char {
        match self {
            Delimiter::Paren => '(',
            Delimiter::Brace => '{',
            Delimiter::Bracket => '[',
            Delimiter::Angle => '<',
        }
    }

    /// The closing character.
    pub const fn close(self) -> char {
        match self {
            Delimiter::Paren => ')',
            Delimiter::Brace => '}',
            Delimiter::Bracket => ']',
            Delimiter::Angle => '>',
        }
    }

    /// The delimiter opened by `byte`, if any.
    #[inline]
    pub const fn from_open(byte: u8) -> Option<Delimiter> {
        match byte {
            b'(' => Some(Delimiter::Paren),
            b'{' => Some(Delimiter::Brace),
            b'[' => Some(Delimiter::Bracket),
            b'<' => Some(Delimiter::Angle),
            _ => None,
        }
    }

    /// The delimiter closed by `byte`, if any.
    #[inline]
    pub const fn from_close(byte: u8) -> Option<Delimiter> {
        match byte {
            b')' => Some(Delimiter::Paren),
            b'}' => Some(Delimiter::Brace),
            b']' => Some(Delimiter::Bracket),
            b'>' => Some(Delimiter::Angle),
            _ => None,
        }
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.open(), self.close())
    }
}

/// Which delimiter pairs take part in a scan.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum DelimiterSet {
    /// `()`, `{}`, `[]` and `<>`.
    #[default]
    All,
    /// `()`, `{}` and `[]`; angle brackets are ignored.
    NoAngle,
}

impl DelimiterSet {
    #[inline]
    pub fn contains(self, delimiter: Delimiter) -> bool {
        match self {
            DelimiterSet::All => true,
            DelimiterSet::NoAngle => delimiter != Delimiter::Angle,
        }
    }

    /// Delimiters in this set, in declaration order.
    pub fn iter(self) -> impl Iterator<Item = Delimiter> {
        Delimiter::ALL.into_iter().filter(move |d| self.contains(*d))
    }
}
