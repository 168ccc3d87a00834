use std::borrow::Cow;
use std::{fmt, ops};

use crate::{IntoComponent, Style};

/// A node in a tree of formatted chat text.
///
/// Chat components are used in chat, window titles, disconnect messages,
/// written books, signs, and more. Each component has its own content, a
/// [`Style`] and an ordered list of children. Children are rendered after the
/// component's own content and inherit its style unless they override it.
///
/// # Examples
///
/// With [`IntoComponent`] in scope, you can write the following:
/// ```
/// use chatwire_text::{Color, IntoComponent};
///
/// let txt = "The text is ".into_component()
///     + "Red".color(Color::RED)
///     + ", "
///     + "Green".color(Color::GREEN)
///     + ", and also "
///     + "Blue".color(Color::BLUE)
///     + "!\nAnd maybe even "
///     + "Italic".italic()
///     + ".";
///
/// assert_eq!(
///     txt.to_string(),
///     "The text is Red, Green, and also Blue!\nAnd maybe even Italic."
/// );
/// ```
#[derive(Clone, PartialEq, Default, Debug)]
pub struct Component {
    pub content: Content,
    pub style: Style,
    pub children: Vec<Component>,
}

/// What a [`Component`] displays before its children.
#[derive(Clone, PartialEq, Debug)]
pub enum Content {
    /// Literal text.
    Text(Cow<'static, str>),
    /// A piece of text that will be translated on the client based on the
    /// client language. If no corresponding translation can be found, the
    /// key itself is used as the translated text.
    Translation {
        /// A translation key, corresponding to the identifiers found in
        /// loaded language files.
        key: Cow<'static, str>,
        /// Components inserted into the slots of the translated text.
        args: Vec<Component>,
    },
}

impl Default for Content {
    fn default() -> Self {
        Self::Text(Cow::Borrowed(""))
    }
}

impl Component {
    /// Constructs a new plain text component.
    pub fn text(text: impl Into<Cow<'static, str>>) -> Self {
        Self {
            content: Content::Text(text.into()),
            ..Default::default()
        }
    }

    /// Creates a translated component from the given translation key, with
    /// extra components to be inserted into the slots of the translation
    /// text.
    pub fn translate(key: impl Into<Cow<'static, str>>, args: impl Into<Vec<Component>>) -> Self {
        Self {
            content: Content::Translation {
                key: key.into(),
                args: args.into(),
            },
            ..Default::default()
        }
    }

    /// Returns the literal text of a text component, or `None` for a
    /// translation.
    pub fn as_text(&self) -> Option<&str> {
        match &self.content {
            Content::Text(text) => Some(text),
            Content::Translation { .. } => None,
        }
    }

    /// Returns `true` if neither this component nor any of its children
    /// displays anything.
    pub fn is_empty(&self) -> bool {
        let own = match &self.content {
            Content::Text(text) => text.is_empty(),
            Content::Translation { key, .. } => key.is_empty(),
        };

        own && self.children.iter().all(Component::is_empty)
    }

    /// Writes the unstyled text of this component and its children.
    ///
    /// Translations are written as their key followed by their numbered
    /// arguments, since the translated text isn't known here.
    pub fn write_string(&self, w: &mut impl fmt::Write) -> fmt::Result {
        match &self.content {
            Content::Text(text) => w.write_str(text)?,
            Content::Translation { key, args } => {
                w.write_str(key)?;

                if !args.is_empty() {
                    w.write_char('[')?;
                    for (i, arg) in args.iter().enumerate() {
                        if i > 0 {
                            w.write_str(", ")?;
                        }
                        write!(w, "{}=", i + 1)?;
                        arg.write_string(w)?;
                    }
                    w.write_char(']')?;
                }
            }
        }

        for child in &self.children {
            child.write_string(w)?;
        }

        Ok(())
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.write_string(f)
    }
}

impl<T: IntoComponent> ops::Add<T> for Component {
    type Output = Self;

    fn add(self, rhs: T) -> Self::Output {
        self.add_child(rhs)
    }
}

impl<T: IntoComponent> ops::AddAssign<T> for Component {
    fn add_assign(&mut self, rhs: T) {
        self.children.push(rhs.into_component());
    }
}

impl From<&'static str> for Component {
    fn from(value: &'static str) -> Self {
        Self::text(value)
    }
}

impl From<String> for Component {
    fn from(value: String) -> Self {
        Self::text(value)
    }
}

impl From<Cow<'static, str>> for Component {
    fn from(value: Cow<'static, str>) -> Self {
        Self::text(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty() {
        assert!(Component::default().is_empty());
        assert!((Component::text("") + "").is_empty());
        assert!(!(Component::text("") + "x").is_empty());
        assert!(!Component::translate("chat.type.text", Vec::new()).is_empty());
    }

    #[test]
    fn display_translation() {
        let args = [Component::text("Steve"), Component::text("hi")];
        let txt = Component::translate("chat.type.text", args) + "!";
        assert_eq!(txt.to_string(), "chat.type.text[1=Steve, 2=hi]!");
    }
}
