#![doc = include_str!("../README.md")]
#![deny(
    rustdoc::broken_intra_doc_links,
    rustdoc::private_intra_doc_links,
    rustdoc::missing_crate_level_docs,
    rustdoc::invalid_codeblock_attributes,
    rustdoc::invalid_rust_codeblocks,
    rustdoc::bare_urls,
    rustdoc::invalid_html_tags
)]
#![warn(
    trivial_casts,
    trivial_numeric_casts,
    unused_lifetimes,
    unused_import_braces,
    unreachable_pub,
    clippy::dbg_macro
)]

#[cfg(test)]
mod tests;

pub use chatwire_ident as ident;
pub use chatwire_text as text;

/// Contains the most frequently used items in chatwire projects.
///
/// This is usually glob imported like so:
///
/// ```
/// use chatwire::prelude::*; // Glob import.
///
/// let txt = "Hello".color(Color::AQUA) + ", " + "world".bold();
/// let json = JsonCodec::modern().marshal(&txt).unwrap();
/// # let _ = json;
/// ```
pub mod prelude {
    pub use chatwire_ident::{ident, Ident};
    pub use chatwire_text::{
        ClickEvent, Codec, Color, Component, Decoration, HoverEvent, IntoComponent, JsonCodec,
        LegacyCodec, NamedColor, PlainCodec, Style,
    };
}
