//! The structured JSON chat format.
//!
//! Several dialects of the format exist in the wild. Clients before 1.21.5
//! use camelCase `clickEvent`/`hoverEvent` keys, a generic `value` field for
//! every click action and a `contents` wrapper around hover payloads. Clients
//! from 1.21.5 on use snake_case keys, action-specific click fields (`url`,
//! `command`, `page`, ...) and hover payloads inlined into the event object.
//!
//! [`JsonCodec`] writes exactly one dialect, picked by its flags, and reads
//! all of them.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{Codec, Component, Result};

mod decode;
mod encode;

/// Codec for the JSON chat format.
///
/// The flags only affect encoding. Decoding accepts every dialect regardless
/// of how the codec is configured.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct JsonCodec {
    /// Write every color as the nearest named color. Clients before 1.16 only
    /// understand named colors. When off, every color is written as
    /// `#rrggbb`, named ones included.
    pub downsample_color: bool,
    /// Also write the hover payload under the deprecated `value` key next to
    /// `contents`. Only has an effect together with
    /// [`legacy_hover_structure`](Self::legacy_hover_structure).
    pub legacy_hover_duplication: bool,
    /// Write `clickEvent`/`hoverEvent` instead of `click_event`/`hover_event`.
    pub legacy_field_names: bool,
    /// Write every click payload under `value` instead of the action-specific
    /// field.
    pub legacy_click_structure: bool,
    /// Wrap hover payloads in `contents` instead of inlining them, and name
    /// the entity fields `type`/`id` instead of `id`/`uuid`.
    pub legacy_hover_structure: bool,
}

impl JsonCodec {
    /// The 1.21.5+ dialect, downsampling colors.
    pub const fn modern() -> Self {
        Self {
            downsample_color: true,
            legacy_hover_duplication: true,
            legacy_field_names: false,
            legacy_click_structure: false,
            legacy_hover_structure: false,
        }
    }

    /// The dialect understood by 1.16 to 1.21.4 clients.
    pub const fn legacy() -> Self {
        Self {
            downsample_color: false,
            legacy_hover_duplication: true,
            legacy_field_names: true,
            legacy_click_structure: true,
            legacy_hover_structure: true,
        }
    }

    /// The dialect understood by clients before 1.16, which lack RGB colors.
    pub const fn pre_rgb() -> Self {
        Self {
            downsample_color: true,
            ..Self::legacy()
        }
    }

    /// Encodes a component into a JSON value.
    pub fn to_value(&self, component: &Component) -> Value {
        Value::Object(self.encode_component(component))
    }

    /// Decodes a component from an already parsed JSON value.
    pub fn from_value(&self, value: &Value) -> Result<Component> {
        decode::component(value)
    }
}

impl Default for JsonCodec {
    fn default() -> Self {
        Self::modern()
    }
}

impl Codec for JsonCodec {
    fn marshal(&self, component: &Component) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(&self.to_value(component))?)
    }

    fn unmarshal(&self, data: &[u8]) -> Result<Component> {
        let value: Value = serde_json::from_slice(data)?;
        decode::component(&value)
    }
}

/// JSON object keys. Slices list every name a field has had, newest first.
mod keys {
    pub(super) const TEXT: &str = "text";
    pub(super) const TRANSLATE: &str = "translate";
    pub(super) const WITH: &str = "with";
    pub(super) const EXTRA: &str = "extra";
    pub(super) const FONT: &str = "font";
    pub(super) const COLOR: &str = "color";
    pub(super) const INSERTION: &str = "insertion";

    pub(super) const CLICK_EVENT: &[&str] = &["click_event", "clickEvent"];
    pub(super) const HOVER_EVENT: &[&str] = &["hover_event", "hoverEvent"];

    pub(super) const ACTION: &str = "action";
    pub(super) const VALUE: &str = "value";
    pub(super) const CONTENTS: &str = "contents";

    pub(super) const URL: &str = "url";
    pub(super) const PATH: &str = "path";
    pub(super) const COMMAND: &str = "command";
    pub(super) const PAGE: &str = "page";
    pub(super) const DIALOG: &str = "dialog";
    pub(super) const ID: &str = "id";
    pub(super) const PAYLOAD: &str = "payload";

    pub(super) const COUNT: &str = "count";
    pub(super) const TAG: &str = "tag";

    pub(super) const UUID: &str = "uuid";
    pub(super) const TYPE: &str = "type";
    pub(super) const NAME: &str = "name";
}

/// Returns the first of `names` present in `obj`, with its value.
fn lookup<'a>(obj: &'a Map<String, Value>, names: &[&'static str]) -> Option<(&'static str, &'a Value)> {
    names
        .iter()
        .find_map(|&name| obj.get(name).map(|value| (name, value)))
}
