//! [`Color`] and related data structures.

use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use std::sync::OnceLock;

use serde::de::Visitor;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Text color.
///
/// Two colors compare equal when they have the same RGB value, so
/// `Color::RED == Color::rgb(0xff, 0x55, 0x55)`.
#[derive(Clone, Copy, Debug)]
pub enum Color {
    /// One of the 16 named colors.
    Named(NamedColor),
    /// Arbitrary 24-bit color. Understood by 1.16+ clients only.
    Rgb(RgbColor),
}

/// 24-bit RGB color.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct RgbColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// The 16 named colors, in canonical palette order.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum NamedColor {
    /// Code: `0`, name: `black`
    Black = 0,
    /// Code: `1`, name: `dark_blue`
    DarkBlue,
    /// Code: `2`, name: `dark_green`
    DarkGreen,
    /// Code: `3`, name: `dark_aqua`
    DarkAqua,
    /// Code: `4`, name: `dark_red`
    DarkRed,
    /// Code: `5`, name: `dark_purple`
    DarkPurple,
    /// Code: `6`, name: `gold`
    Gold,
    /// Code: `7`, name: `gray`
    Gray,
    /// Code: `8`, name: `dark_gray`
    DarkGray,
    /// Code: `9`, name: `blue`
    Blue,
    /// Code: `a`, name: `green`
    Green,
    /// Code: `b`, name: `aqua`
    Aqua,
    /// Code: `c`, name: `red`
    Red,
    /// Code: `d`, name: `light_purple`
    LightPurple,
    /// Code: `e`, name: `yellow`
    Yellow,
    /// Code: `f`, name: `white`
    White,
}

/// Color parsing error.
#[derive(Clone, PartialEq, Eq, Debug, Error)]
pub enum ColorError {
    #[error("unknown color name \"{0}\"")]
    UnknownName(String),
    #[error("invalid hex color \"{0}\"")]
    BadHex(String),
}

impl Color {
    pub const BLACK: Self = Self::Named(NamedColor::Black);
    pub const DARK_BLUE: Self = Self::Named(NamedColor::DarkBlue);
    pub const DARK_GREEN: Self = Self::Named(NamedColor::DarkGreen);
    pub const DARK_AQUA: Self = Self::Named(NamedColor::DarkAqua);
    pub const DARK_RED: Self = Self::Named(NamedColor::DarkRed);
    pub const DARK_PURPLE: Self = Self::Named(NamedColor::DarkPurple);
    pub const GOLD: Self = Self::Named(NamedColor::Gold);
    pub const GRAY: Self = Self::Named(NamedColor::Gray);
    pub const DARK_GRAY: Self = Self::Named(NamedColor::DarkGray);
    pub const BLUE: Self = Self::Named(NamedColor::Blue);
    pub const GREEN: Self = Self::Named(NamedColor::Green);
    pub const AQUA: Self = Self::Named(NamedColor::Aqua);
    pub const RED: Self = Self::Named(NamedColor::Red);
    pub const LIGHT_PURPLE: Self = Self::Named(NamedColor::LightPurple);
    pub const YELLOW: Self = Self::Named(NamedColor::Yellow);
    pub const WHITE: Self = Self::Named(NamedColor::White);

    /// Constructs a new RGB color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb(RgbColor::new(r, g, b))
    }

    /// The RGB value of this color.
    pub const fn to_rgb(self) -> RgbColor {
        match self {
            Color::Named(named) => named.rgb(),
            Color::Rgb(rgb) => rgb,
        }
    }

    /// The named color itself, or the palette entry nearest to the RGB value.
    pub fn to_named(self) -> NamedColor {
        match self {
            Color::Named(named) => named,
            Color::Rgb(rgb) => rgb.nearest_named(),
        }
    }

    /// Lowercase `#rrggbb` form.
    pub fn hex(self) -> String {
        self.to_rgb().hex()
    }
}

impl RgbColor {
    /// Constructs a new color from red, green, and blue components.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Constructs a color from a packed `0xRRGGBB` integer. The upper byte is
    /// ignored.
    pub const fn from_u32(value: u32) -> Self {
        Self::new((value >> 16) as u8, (value >> 8) as u8, value as u8)
    }

    pub const fn to_u32(self) -> u32 {
        (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }

    /// Parses `#rrggbb` or `#rgb`. The leading `#` is optional and digits are
    /// case-insensitive.
    pub fn parse_hex(s: &str) -> Result<Self, ColorError> {
        let err = || ColorError::BadHex(s.to_owned());
        let digit = |d: u8| char::from(d).to_digit(16).map(|d| d as u8).ok_or_else(err);

        match *s.strip_prefix('#').unwrap_or(s).as_bytes() {
            [r0, r1, g0, g1, b0, b1] => Ok(Self::new(
                digit(r0)? << 4 | digit(r1)?,
                digit(g0)? << 4 | digit(g1)?,
                digit(b0)? << 4 | digit(b1)?,
            )),
            [r, g, b] => Ok(Self::new(
                digit(r)? * 17,
                digit(g)? * 17,
                digit(b)? * 17,
            )),
            _ => Err(err()),
        }
    }

    /// Lowercase `#rrggbb` form.
    pub fn hex(self) -> String {
        format!("{self}")
    }

    /// Squared euclidean distance in RGB space.
    pub const fn distance_squared(self, other: Self) -> u32 {
        let dr = self.r.abs_diff(other.r) as u32;
        let dg = self.g.abs_diff(other.g) as u32;
        let db = self.b.abs_diff(other.b) as u32;
        dr * dr + dg * dg + db * db
    }

    /// Finds the palette entry closest to this color.
    ///
    /// An exact match is returned immediately. Otherwise the entry with the
    /// smallest distance wins, and ties go to whichever comes first in
    /// [`NamedColor::ALL`].
    pub fn nearest_named(self) -> NamedColor {
        let mut best = NamedColor::Black;
        let mut best_distance = u32::MAX;

        for named in NamedColor::ALL {
            let distance = self.distance_squared(named.rgb());
            if distance == 0 {
                return named;
            }
            if distance < best_distance {
                best = named;
                best_distance = distance;
            }
        }

        best
    }
}

impl NamedColor {
    /// All named colors in canonical palette order.
    pub const ALL: [Self; 16] = [
        Self::Black,
        Self::DarkBlue,
        Self::DarkGreen,
        Self::DarkAqua,
        Self::DarkRed,
        Self::DarkPurple,
        Self::Gold,
        Self::Gray,
        Self::DarkGray,
        Self::Blue,
        Self::Green,
        Self::Aqua,
        Self::Red,
        Self::LightPurple,
        Self::Yellow,
        Self::White,
    ];

    /// Returns the legacy format code of the color (`0`-`9`, `a`-`f`).
    pub const fn code(self) -> char {
        b"0123456789abcdef"[self as usize] as char
    }

    /// Looks up a color by its legacy format code.
    pub fn from_code(code: char) -> Option<Self> {
        let index = code.to_digit(16)?;
        if code.is_ascii_uppercase() {
            return None;
        }
        Self::ALL.get(index as usize).copied()
    }

    /// Returns the identifier of the color.
    pub const fn name(self) -> &'static str {
        [
            "black",
            "dark_blue",
            "dark_green",
            "dark_aqua",
            "dark_red",
            "dark_purple",
            "gold",
            "gray",
            "dark_gray",
            "blue",
            "green",
            "aqua",
            "red",
            "light_purple",
            "yellow",
            "white",
        ][self as usize]
    }

    pub const fn rgb(self) -> RgbColor {
        RgbColor::from_u32(
            [
                0x000000, 0x0000aa, 0x00aa00, 0x00aaaa, 0xaa0000, 0xaa00aa, 0xffaa00, 0xaaaaaa,
                0x555555, 0x5555ff, 0x55ff55, 0x55ffff, 0xff5555, 0xff55ff, 0xffff55, 0xffffff,
            ][self as usize],
        )
    }

    /// Name-keyed table of the palette.
    pub fn by_name() -> &'static HashMap<&'static str, NamedColor> {
        static NAMES: OnceLock<HashMap<&'static str, NamedColor>> = OnceLock::new();

        NAMES.get_or_init(|| Self::ALL.into_iter().map(|c| (c.name(), c)).collect())
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::by_name().get(name).copied()
    }

    /// Returns the palette entry with exactly this RGB value, if any.
    pub fn exact(rgb: RgbColor) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.rgb() == rgb)
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        self.to_rgb() == other.to_rgb()
    }
}

impl Eq for Color {}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_rgb().hash(state);
    }
}

impl From<NamedColor> for RgbColor {
    fn from(value: NamedColor) -> Self {
        value.rgb()
    }
}

impl From<RgbColor> for Color {
    fn from(value: RgbColor) -> Self {
        Self::Rgb(value)
    }
}

impl From<NamedColor> for Color {
    fn from(value: NamedColor) -> Self {
        Self::Named(value)
    }
}

impl FromStr for Color {
    type Err = ColorError;

    /// Parses a palette name or a hex color.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.starts_with('#') {
            return Ok(Self::Rgb(RgbColor::parse_hex(s)?));
        }

        NamedColor::from_str(s).map(Self::Named)
    }
}

impl FromStr for NamedColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| ColorError::UnknownName(s.to_owned()))
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ColorVisitor;

        impl<'de> Visitor<'de> for ColorVisitor {
            type Value = Color;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "a hex color (#rrggbb) or a named color")
            }

            fn visit_str<E: serde::de::Error>(self, s: &str) -> Result<Self::Value, E> {
                s.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_str(ColorVisitor)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Color::Named(named) => named.fmt(f),
            Color::Rgb(rgb) => rgb.fmt(f),
        }
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for NamedColor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}
