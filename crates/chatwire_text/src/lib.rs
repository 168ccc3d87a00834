#![doc = include_str!("../README.md")]

use std::io::Write;

pub use chatwire_ident::{ident, Ident, IdentError};

pub mod click;
pub mod color;
mod component;
mod error;
pub mod hover;
mod into_component;
pub mod json;
pub mod legacy;
mod plain;
mod style;
#[cfg(test)]
mod tests;

pub use click::{ClickAction, ClickEvent, CUSTOM_PAYLOAD_SEPARATOR};
pub use color::{Color, ColorError, NamedColor, RgbColor};
pub use component::{Component, Content};
pub use error::{Error, Result};
pub use hover::{BinaryTagHolder, HoverAction, HoverEvent, ShowEntity, ShowItem};
pub use into_component::IntoComponent;
pub use json::JsonCodec;
pub use legacy::LegacyCodec;
pub use plain::PlainCodec;
pub use style::{Decoration, Style, DEFAULT_FONT};

/// Converts between [`Component`] trees and one wire format.
///
/// Codecs are plain configuration values; encoding and decoding never touch
/// shared state, so one codec can serve any number of threads.
pub trait Codec {
    /// Encodes a component.
    fn marshal(&self, component: &Component) -> Result<Vec<u8>>;

    /// Decodes a component. Decoding stops at the first error.
    fn unmarshal(&self, data: &[u8]) -> Result<Component>;

    /// Encodes a component into `w`.
    ///
    /// The whole encoding is buffered first, so nothing is written if encoding
    /// fails. A failing writer can still leave partial output behind.
    fn marshal_to<W: Write>(&self, mut w: W, component: &Component) -> Result<()>
    where
        Self: Sized,
    {
        let buf = self.marshal(component)?;
        w.write_all(&buf)?;
        Ok(())
    }
}
