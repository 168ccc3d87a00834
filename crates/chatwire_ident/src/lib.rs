#![doc = include_str!("../README.md")]

use std::borrow::{Borrow, Cow};
use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Used internally by the `ident` macro. Not public API.
#[doc(hidden)]
pub use chatwire_ident_macros::parse_ident_str;

/// Creates a new [`Ident`] at compile time from a string literal. A compile
/// error is raised if the string is not a valid resource identifier.
///
/// The expression is usable in a `const` context.
///
/// # Examples
///
/// ```
/// # use chatwire_ident::{ident, Ident};
/// const DEFAULT_FONT: Ident = ident!("default");
///
/// assert_eq!(DEFAULT_FONT.as_str(), "minecraft:default");
/// ```
#[macro_export]
macro_rules! ident {
    ($string:literal) => {
        $crate::Ident::new_unchecked($crate::parse_ident_str!($string))
    };
}

/// The namespace assumed when an identifier is written without one.
pub const DEFAULT_NAMESPACE: &str = "minecraft";

/// A string which is guaranteed to be a valid resource identifier.
///
/// A resource identifier is a namespace and a value joined by a single colon,
/// for instance `minecraft:default` or `chatwire:frobnicator`. The namespace
/// must match `[a-z0-9_.-]+` and the value `[a-z0-9_.-/]+`.
///
/// While parsing, if the namespace is left off (the part before and including
/// the colon) then `minecraft:` is inserted at the beginning of the string.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ident {
    string: Cow<'static, str>,
}

/// The error type created when an [`Ident`] cannot be parsed from a
/// string. Contains the string that failed to parse.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Error)]
#[error("invalid resource identifier \"{0}\"")]
pub struct IdentError(pub String);

impl Ident {
    /// Parses and validates a resource identifier.
    pub fn new(string: impl Into<Cow<'static, str>>) -> Result<Self, IdentError> {
        let string = string.into();

        match string.split_once(':') {
            Some((namespace, value)) if valid_namespace(namespace) && valid_value(value) => {
                Ok(Self { string })
            }
            None if valid_value(&string) => Ok(Self {
                string: format!("{DEFAULT_NAMESPACE}:{string}").into(),
            }),
            _ => Err(IdentError(string.into_owned())),
        }
    }

    /// Builds an identifier from its two halves, validating each.
    pub fn from_parts(namespace: &str, value: &str) -> Result<Self, IdentError> {
        if valid_namespace(namespace) && valid_value(value) {
            Ok(Self {
                string: format!("{namespace}:{value}").into(),
            })
        } else {
            Err(IdentError(format!("{namespace}:{value}")))
        }
    }

    /// Used internally by the `ident` macro. Not public API.
    #[doc(hidden)]
    pub const fn new_unchecked(string: &'static str) -> Self {
        Self {
            string: Cow::Borrowed(string),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.string
    }

    /// Returns the namespace part of this identifier (the part before the
    /// colon).
    pub fn namespace(&self) -> &str {
        self.split().0
    }

    /// Returns the value part of this identifier (the part after the colon).
    pub fn value(&self) -> &str {
        self.split().1
    }

    pub fn into_inner(self) -> Cow<'static, str> {
        self.string
    }

    fn split(&self) -> (&str, &str) {
        // Every constructor leaves exactly one colon in the string.
        self.string
            .split_once(':')
            .unwrap_or((DEFAULT_NAMESPACE, &self.string))
    }
}

/// Checks a namespace against `[a-z0-9_.-]+`.
pub fn valid_namespace(s: &str) -> bool {
    !s.is_empty()
        && s
            .chars()
            .all(|c| matches!(c, 'a'..='z' | '0'..='9' | '_' | '.' | '-'))
}

/// Checks a value against `[a-z0-9_.-/]+`.
pub fn valid_value(s: &str) -> bool {
    !s.is_empty()
        && s
            .chars()
            .all(|c| matches!(c, 'a'..='z' | '0'..='9' | '_' | '.' | '-' | '/'))
}

impl AsRef<str> for Ident {
    fn as_ref(&self) -> &str {
        &self.string
    }
}

impl Borrow<str> for Ident {
    fn borrow(&self) -> &str {
        &self.string
    }
}

impl From<Ident> for String {
    fn from(value: Ident) -> Self {
        value.string.into_owned()
    }
}

impl FromStr for Ident {
    type Err = IdentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.to_owned())
    }
}

impl TryFrom<&str> for Ident {
    type Error = IdentError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value.to_owned())
    }
}

impl TryFrom<String> for Ident {
    type Error = IdentError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Debug for Ident {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.string, f)
    }
}

impl fmt::Display for Ident {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.string)
    }
}

impl Serialize for Ident {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.string)
    }
}

impl<'de> Deserialize<'de> for Ident {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ident::new(String::deserialize(deserializer)?).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_namespace_and_value() {
        let id = ident!("namespace:value");
        assert_eq!(id.namespace(), "namespace");
        assert_eq!(id.value(), "value");
    }

    #[test]
    fn parse_valid() {
        ident!("minecraft:whatever");
        ident!("_what-ever55_:.whatever/whatever123456789_");
        Ident::new("chatwire:frobnicator").unwrap();
        Ident::new("item/diamond_sword").unwrap();
    }

    #[test]
    fn parse_invalid() {
        for s in ["", ":", "foo:", ":bar", "foo:bar:baz", "Foo:bar", "foo/bar:baz", "a b"] {
            assert_eq!(Ident::new(s), Err(IdentError(s.into())), "{s:?}");
        }
    }

    #[test]
    fn default_namespace() {
        assert_eq!(ident!("minecraft:my.identifier"), ident!("my.identifier"));
        assert_eq!(Ident::new("stone").unwrap().as_str(), "minecraft:stone");
    }

    #[test]
    fn from_parts() {
        let id = Ident::from_parts("chatwire", "fonts/pixel").unwrap();
        assert_eq!(id.to_string(), "chatwire:fonts/pixel");
        assert!(Ident::from_parts("chat/wire", "x").is_err());
    }

    #[test]
    fn serde() {
        let id: Ident = serde_json::from_str(r#""uniform""#).unwrap();
        assert_eq!(id, ident!("minecraft:uniform"));
        assert_eq!(serde_json::to_string(&id).unwrap(), r#""minecraft:uniform""#);
        assert!(serde_json::from_str::<Ident>(r#""NOPE""#).is_err());
    }
}
