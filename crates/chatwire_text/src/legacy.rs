//! The linear format-code string format.
//!
//! Text is interspersed with two-character codes: a prefix character (`§` in
//! game, `&` in most configuration files) followed by one symbol out of
//! `0-9a-f` (colors), `k-o` (decorations) or `r` (reset). A prefix followed by
//! anything else is literal text.

use std::borrow::Cow;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::{ClickEvent, Codec, Color, Component, Content, Decoration, NamedColor, Result, Style};

/// The prefix character used by the game.
pub const SECTION_CHAR: char = '§';
/// The prefix character commonly used in configuration files and commands.
pub const AMPERSAND_CHAR: char = '&';
/// Marks an RGB color following the prefix character.
pub const HEX_CHAR: char = '#';

/// Codec for legacy format-code strings.
///
/// Only color, decorations and text survive encoding. Decoding never fails;
/// any input is representable, in the worst case as a single text leaf.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct LegacyCodec {
    /// The character starting every format code.
    pub format_char: char,
    /// The character between the prefix and the six hex digits of an RGB
    /// color. Only written when colors aren't downsampled.
    pub hex_char: char,
    /// Write RGB colors as the code of the nearest named color.
    pub downsample_color: bool,
    /// When decoding a string without format codes, turn the first URL found
    /// into an `open_url` click event. A URL without a scheme is linked with
    /// `https://` in front of it.
    pub clickable_urls: bool,
}

impl LegacyCodec {
    pub const fn section() -> Self {
        Self {
            format_char: SECTION_CHAR,
            hex_char: HEX_CHAR,
            downsample_color: true,
            clickable_urls: false,
        }
    }

    pub const fn ampersand() -> Self {
        Self {
            format_char: AMPERSAND_CHAR,
            ..Self::section()
        }
    }

    /// Encodes a component into a legacy string.
    pub fn to_legacy(&self, component: &Component) -> String {
        let mut out = String::new();
        let mut emitted = Emitted::default();
        self.encode(component, Emitted::default(), &mut emitted, &mut out);
        out
    }

    /// Decodes a legacy string. Only [`Content::Text`] nodes are produced.
    pub fn from_legacy(&self, input: &str) -> Component {
        let prefix = self.format_char;

        let mut parts = Vec::new();
        let mut current: Option<Component> = None;
        // Set once a color or reset code closed `current`.
        let mut reset = false;
        // Start of the text already taken by a node.
        let mut pos = input.len();
        let mut end = input.len();

        // Codes are read right to left, so each code applies to the text up to
        // the code read just before it.
        while let Some(at) = input[..end].rfind(prefix) {
            end = at;

            let code_at = at + prefix.len_utf8();
            let Some(format) = input[code_at..].chars().next().and_then(Format::from_code) else {
                trace!(at, "prefix not followed by a format code, keeping it as text");
                continue;
            };

            let from = code_at + 1;
            // Only possible when the prefix is itself a format symbol.
            if from > pos {
                trace!(at, "format code overlaps the next one, keeping it as text");
                continue;
            }

            if from != pos {
                let mut node = match current.take() {
                    None => Component::default(),
                    Some(prev) if reset => {
                        parts.push(prev);
                        reset = false;
                        Component::default()
                    }
                    Some(prev) => Component {
                        children: vec![prev],
                        ..Default::default()
                    },
                };
                node.content = Content::Text(valid_text(&input[from..pos]));
                current = Some(node);
            }

            let node = current.get_or_insert_with(Component::default);
            if !reset {
                reset = format.apply(&mut node.style);
            }

            pos = at;
        }

        parts.extend(current);
        parts.reverse();

        let mut root = Component {
            content: Content::Text(valid_text(&input[..pos])),
            children: parts,
            ..Default::default()
        };

        if self.clickable_urls && root.children.is_empty() {
            link_url(&mut root);
        }

        root
    }

    fn encode(&self, component: &Component, mut style: Emitted, emitted: &mut Emitted, out: &mut String) {
        style.apply(&component.style, self.downsample_color);

        // Empty leaves still carry trailing codes such as the `&l` in
        // `&cTest&l`.
        if let Content::Text(text) = &component.content {
            if !text.is_empty() || component.children.is_empty() {
                self.write_format(&style, emitted, out);
                out.push_str(text);
            }
        }

        for child in &component.children {
            self.encode(child, style, emitted, out);
        }
    }

    /// Brings the formatting already written to `out` up to `wanted`.
    fn write_format(&self, wanted: &Emitted, emitted: &mut Emitted, out: &mut String) {
        // Decorations can't be turned off one at a time, so dropping any of
        // them or changing color needs a full reset.
        if wanted.color != emitted.color || !emitted.decorations.is_subset(wanted.decorations) {
            match wanted.color {
                Some(color) => self.write_color(color, out),
                None => self.write_code('r', out),
            }
            for d in wanted.decorations.iter() {
                self.write_code(d.code(), out);
            }
            *emitted = *wanted;
            return;
        }

        for d in wanted.decorations.iter() {
            if !emitted.decorations.contains(d) {
                self.write_code(d.code(), out);
                emitted.decorations.insert(d);
            }
        }
    }

    fn write_color(&self, color: Color, out: &mut String) {
        match color {
            Color::Rgb(rgb) if !self.downsample_color => {
                out.push(self.format_char);
                out.push(self.hex_char);
                out.push_str(rgb.hex().trim_start_matches('#'));
            }
            _ => self.write_code(color.to_named().code(), out),
        }
    }

    fn write_code(&self, code: char, out: &mut String) {
        out.push(self.format_char);
        out.push(code);
    }
}

impl Default for LegacyCodec {
    fn default() -> Self {
        Self::section()
    }
}

impl Codec for LegacyCodec {
    fn marshal(&self, component: &Component) -> Result<Vec<u8>> {
        Ok(self.to_legacy(component).into_bytes())
    }

    fn unmarshal(&self, data: &[u8]) -> Result<Component> {
        Ok(self.from_legacy(&String::from_utf8_lossy(data)))
    }
}

/// One of the 22 format code symbols.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Format {
    Color(NamedColor),
    Decoration(Decoration),
    Reset,
}

impl Format {
    fn from_code(code: char) -> Option<Self> {
        if code == 'r' {
            return Some(Self::Reset);
        }

        NamedColor::from_code(code)
            .map(Self::Color)
            .or_else(|| Decoration::from_code(code).map(Self::Decoration))
    }

    /// Applies the format to `style`. Returns `true` if the code ends the
    /// node it is applied to.
    fn apply(self, style: &mut Style) -> bool {
        match self {
            Self::Color(color) => {
                style.color = Some(Color::Named(color));
                true
            }
            Self::Decoration(d) => {
                style.set_decoration(d, Some(true));
                false
            }
            Self::Reset => true,
        }
    }
}

/// Color and active decorations, either written so far or wanted by a node.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
struct Emitted {
    color: Option<Color>,
    decorations: DecorationSet,
}

impl Emitted {
    fn apply(&mut self, style: &Style, downsample: bool) {
        if let Some(color) = style.color {
            self.color = Some(if downsample {
                Color::Named(color.to_named())
            } else {
                color
            });
        }

        for (d, state) in style.decorations() {
            if state {
                self.decorations.insert(d);
            } else {
                self.decorations.remove(d);
            }
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
struct DecorationSet(u8);

impl DecorationSet {
    const fn bit(d: Decoration) -> u8 {
        1 << d as u8
    }

    fn contains(self, d: Decoration) -> bool {
        self.0 & Self::bit(d) != 0
    }

    fn insert(&mut self, d: Decoration) {
        self.0 |= Self::bit(d);
    }

    fn remove(&mut self, d: Decoration) {
        self.0 &= !Self::bit(d);
    }

    fn is_subset(self, other: Self) -> bool {
        self.0 & !other.0 == 0
    }

    /// Members in canonical order.
    fn iter(self) -> impl Iterator<Item = Decoration> {
        Decoration::ALL.into_iter().filter(move |&d| self.contains(d))
    }
}

/// Drops the replacement characters left by lossy UTF-8 decoding.
fn valid_text(s: &str) -> Cow<'static, str> {
    s.chars()
        .filter(|&c| c != char::REPLACEMENT_CHARACTER)
        .collect::<String>()
        .into()
}

fn url_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?:(https?)://)?([-\w_.]+\.\w{2,})(/\S*)?").expect("url pattern is valid")
    })
}

fn link_url(component: &mut Component) {
    if component.style.click_event.is_some() {
        return;
    }

    let Content::Text(text) = &component.content else {
        return;
    };

    let Some(caps) = url_regex().captures(text) else {
        return;
    };

    let url = &caps[0];
    let url = if caps.get(1).is_some() {
        url.to_owned()
    } else {
        format!("https://{url}")
    };

    component.style.click_event = Some(ClickEvent::OpenUrl(url.into()));
}
