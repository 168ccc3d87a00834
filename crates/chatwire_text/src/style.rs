use std::borrow::Cow;
use std::fmt;

use chatwire_ident::{ident, Ident};

use crate::{ClickEvent, Color, HoverEvent};

/// The font used when none is set.
pub const DEFAULT_FONT: Ident = ident!("minecraft:default");

/// One of the five boolean text attributes.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Decoration {
    /// Randomly cycling glyphs.
    Obfuscated,
    Bold,
    Strikethrough,
    Underlined,
    Italic,
}

impl Decoration {
    /// All decorations in canonical order. This is also the order of their
    /// legacy format codes (`k` to `o`).
    pub const ALL: [Self; 5] = [
        Self::Obfuscated,
        Self::Bold,
        Self::Strikethrough,
        Self::Underlined,
        Self::Italic,
    ];

    /// The JSON key of the decoration.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Obfuscated => "obfuscated",
            Self::Bold => "bold",
            Self::Strikethrough => "strikethrough",
            Self::Underlined => "underlined",
            Self::Italic => "italic",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.name() == name)
    }

    /// The legacy format code of the decoration.
    pub const fn code(self) -> char {
        match self {
            Self::Obfuscated => 'k',
            Self::Bold => 'l',
            Self::Strikethrough => 'm',
            Self::Underlined => 'n',
            Self::Italic => 'o',
        }
    }

    pub fn from_code(code: char) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.code() == code)
    }
}

impl fmt::Display for Decoration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Formatting of a [`Component`](crate::Component).
///
/// Every field is optional. An unset field inherits the value from the parent
/// component. Decorations are tri-state: `None` inherits, `Some(true)` turns
/// the decoration on and `Some(false)` turns it off.
#[derive(Clone, PartialEq, Default, Debug)]
pub struct Style {
    pub obfuscated: Option<bool>,
    pub bold: Option<bool>,
    pub strikethrough: Option<bool>,
    pub underlined: Option<bool>,
    pub italic: Option<bool>,
    pub font: Option<Ident>,
    pub color: Option<Color>,
    pub click_event: Option<ClickEvent>,
    pub hover_event: Option<HoverEvent>,
    /// Text inserted into the chat box when the component is shift-clicked.
    pub insertion: Option<Cow<'static, str>>,
}

impl Style {
    /// Returns `true` if no field is set.
    pub fn is_empty(&self) -> bool {
        Decoration::ALL.iter().all(|&d| self.decoration(d).is_none())
            && self.font.is_none()
            && self.color.is_none()
            && self.click_event.is_none()
            && self.hover_event.is_none()
            && self.insertion.is_none()
    }

    pub fn decoration(&self, decoration: Decoration) -> Option<bool> {
        match decoration {
            Decoration::Obfuscated => self.obfuscated,
            Decoration::Bold => self.bold,
            Decoration::Strikethrough => self.strikethrough,
            Decoration::Underlined => self.underlined,
            Decoration::Italic => self.italic,
        }
    }

    pub fn set_decoration(&mut self, decoration: Decoration, state: Option<bool>) {
        let slot = match decoration {
            Decoration::Obfuscated => &mut self.obfuscated,
            Decoration::Bold => &mut self.bold,
            Decoration::Strikethrough => &mut self.strikethrough,
            Decoration::Underlined => &mut self.underlined,
            Decoration::Italic => &mut self.italic,
        };
        *slot = state;
    }

    /// Iterates over the decorations that are explicitly set, in canonical
    /// order.
    pub fn decorations(&self) -> impl Iterator<Item = (Decoration, bool)> + '_ {
        Decoration::ALL
            .into_iter()
            .filter_map(|d| self.decoration(d).map(|state| (d, state)))
    }

    /// Fills every unset field of `self` from `parent`.
    ///
    /// This is how a child's effective style is derived from its ancestors.
    pub fn merge(&mut self, parent: &Style) {
        for d in Decoration::ALL {
            if self.decoration(d).is_none() {
                self.set_decoration(d, parent.decoration(d));
            }
        }

        macro_rules! inherit {
            ($($field:ident),*) => {
                $(
                    if self.$field.is_none() {
                        self.$field.clone_from(&parent.$field);
                    }
                )*
            };
        }

        inherit!(font, color, click_event, hover_event, insertion);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty() {
        let mut style = Style::default();
        assert!(style.is_empty());

        style.set_decoration(Decoration::Italic, Some(false));
        assert!(!style.is_empty());
        assert_eq!(style.italic, Some(false));

        style.set_decoration(Decoration::Italic, None);
        assert!(style.is_empty());

        style.insertion = Some("hi".into());
        assert!(!style.is_empty());
    }

    #[test]
    fn decoration_tables() {
        let codes: String = Decoration::ALL.iter().map(|d| d.code()).collect();
        assert_eq!(codes, "klmno");

        for d in Decoration::ALL {
            assert_eq!(Decoration::from_name(d.name()), Some(d));
            assert_eq!(Decoration::from_code(d.code()), Some(d));
        }
        assert_eq!(Decoration::from_name("blinking"), None);
    }

    #[test]
    fn merge_keeps_own_fields() {
        let parent = Style {
            bold: Some(true),
            italic: Some(true),
            color: Some(Color::RED),
            font: Some(DEFAULT_FONT),
            ..Default::default()
        };
        let mut child = Style {
            italic: Some(false),
            color: Some(Color::BLUE),
            ..Default::default()
        };

        child.merge(&parent);

        assert_eq!(child.bold, Some(true));
        assert_eq!(child.italic, Some(false));
        assert_eq!(child.color, Some(Color::BLUE));
        assert_eq!(child.font, Some(DEFAULT_FONT));
        assert_eq!(child.underlined, None);
    }
}
