//! Reading every dialect of the JSON chat format.
//!
//! Unknown or unreadable event actions are dropped with a debug log; anything
//! structurally wrong is an error.

use std::borrow::Cow;

use chatwire_ident::Ident;
use serde_json::{Map, Value};
use tracing::debug;
use uuid::Uuid;

use super::{keys, lookup};
use crate::{
    BinaryTagHolder, ClickAction, ClickEvent, Color, Component, Content, Decoration, Error,
    HoverAction, HoverEvent, NamedColor, Result, RgbColor, ShowEntity, ShowItem, Style,
    CUSTOM_PAYLOAD_SEPARATOR,
};

type Object = Map<String, Value>;

pub(super) fn component(value: &Value) -> Result<Component> {
    match value {
        Value::Object(obj) => object(obj),
        Value::String(s) => Ok(Component::text(s.clone())),
        Value::Array(array) => list_root(array),
        Value::Bool(b) => Ok(Component::text(b.to_string())),
        Value::Number(n) => Ok(Component::text(n.to_string())),
        Value::Null => Err(Error::UnsupportedComponentKind("null".into())),
    }
}

/// An array is read as its first element with the rest appended to its
/// children.
fn list_root(array: &[Value]) -> Result<Component> {
    let (first, rest) = array.split_first().ok_or(Error::EmptyArray)?;

    let mut root = component(first)?;
    for value in rest {
        root.children.push(component(value)?);
    }

    Ok(root)
}

fn list(value: &Value, key: &str) -> Result<Vec<Component>> {
    let Value::Array(array) = value else {
        return Err(Error::malformed(format!("\"{key}\" must be an array")));
    };

    array.iter().map(component).collect()
}

fn object(obj: &Object) -> Result<Component> {
    let content = if let Some(text) = obj.get(keys::TEXT) {
        Content::Text(scalar(text, keys::TEXT)?)
    } else if let Some(key) = obj.get(keys::TRANSLATE) {
        let args = match obj.get(keys::WITH) {
            Some(with) => list(with, keys::WITH)?,
            None => Vec::new(),
        };

        Content::Translation {
            key: scalar(key, keys::TRANSLATE)?,
            args,
        }
    } else {
        debug!(?obj, "component has neither text nor translate, reading as empty text");
        Content::default()
    };

    let children = match obj.get(keys::EXTRA) {
        Some(extra) => list(extra, keys::EXTRA)?,
        None => Vec::new(),
    };

    Ok(Component {
        content,
        style: style(obj)?,
        children,
    })
}

/// Reads a string, or the string form of a number or boolean.
fn scalar(value: &Value, key: &str) -> Result<Cow<'static, str>> {
    match value {
        Value::String(s) => Ok(s.clone().into()),
        Value::Number(n) => Ok(n.to_string().into()),
        Value::Bool(b) => Ok(b.to_string().into()),
        _ => Err(Error::malformed(format!("\"{key}\" must be a string"))),
    }
}

fn string<'a>(value: &'a Value, key: &str) -> Result<&'a str> {
    value
        .as_str()
        .ok_or_else(|| Error::malformed(format!("\"{key}\" must be a string")))
}

fn style(obj: &Object) -> Result<Style> {
    let mut style = Style::default();

    if let Some(font) = obj.get(keys::FONT) {
        style.font = Some(Ident::new(string(font, keys::FONT)?.to_owned())?);
    }

    if let Some(color) = obj.get(keys::COLOR) {
        read_color(string(color, keys::COLOR)?, &mut style)?;
    }

    for decoration in Decoration::ALL {
        if let Some(value) = obj.get(decoration.name()) {
            style.set_decoration(decoration, Some(boolean(value, decoration.name())?));
        }
    }

    if let Some(insertion) = obj.get(keys::INSERTION) {
        style.insertion = Some(string(insertion, keys::INSERTION)?.to_owned().into());
    }

    if let Some((key, event)) = lookup(obj, keys::CLICK_EVENT) {
        let Value::Object(event) = event else {
            return Err(Error::malformed(format!("\"{key}\" must be an object")));
        };
        style.click_event = click_event(event);
    }

    if let Some((key, event)) = lookup(obj, keys::HOVER_EVENT) {
        let Value::Object(event) = event else {
            return Err(Error::malformed(format!("\"{key}\" must be an object")));
        };
        style.hover_event = hover_event(event)?;
    }

    Ok(style)
}

/// The `color` field also takes `reset`, which means no color, and the name
/// of a decoration, which turns that decoration on.
fn read_color(s: &str, style: &mut Style) -> Result<()> {
    if s.starts_with('#') {
        style.color = Some(Color::Rgb(RgbColor::parse_hex(s)?));
    } else if let Some(named) = NamedColor::from_name(s) {
        style.color = Some(Color::Named(named));
    } else if s == "reset" {
        style.color = None;
    } else if let Some(decoration) = Decoration::from_name(s) {
        style.set_decoration(decoration, Some(true));
    } else {
        return Err(Error::InvalidColor(s.to_owned()));
    }

    Ok(())
}

fn boolean(value: &Value, key: &str) -> Result<bool> {
    match value {
        Value::Bool(b) => Ok(*b),
        Value::String(s) => parse_bool(s)
            .ok_or_else(|| Error::malformed(format!("\"{key}\" is not a boolean: \"{s}\""))),
        _ => Err(Error::malformed(format!("\"{key}\" must be a boolean"))),
    }
}

fn parse_bool(s: &str) -> Option<bool> {
    match s {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Some(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Some(false),
        _ => None,
    }
}

fn click_event(obj: &Object) -> Option<ClickEvent> {
    let Some(name) = obj.get(keys::ACTION).and_then(Value::as_str) else {
        debug!(?obj, "click event without an action, dropping it");
        return None;
    };

    let action = match ClickAction::from_name(name) {
        Some(action) if action.is_readable() => action,
        _ => {
            debug!(action = name, "unknown or unreadable click action, dropping it");
            return None;
        }
    };

    // Older dialects put every payload under `value`.
    let value = match obj.get(keys::VALUE).and_then(Value::as_str) {
        Some(value) if !value.is_empty() => value.to_owned(),
        _ => click_field(action, obj),
    };

    if value.is_empty() {
        debug!(action = name, "click event without a value, dropping it");
        return None;
    }

    Some(ClickEvent::new(action, value))
}

fn click_field(action: ClickAction, obj: &Object) -> String {
    let field = |key: &str| {
        obj.get(key)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_owned()
    };

    match action {
        ClickAction::OpenUrl => field(keys::URL),
        ClickAction::OpenFile => field(keys::PATH),
        ClickAction::RunCommand | ClickAction::SuggestCommand => field(keys::COMMAND),
        ClickAction::ChangePage => match obj.get(keys::PAGE) {
            Some(Value::String(page)) => page.clone(),
            Some(Value::Number(page)) => match page.as_i64() {
                Some(page) => page.to_string(),
                None => page.as_f64().map_or_else(String::new, |p| (p as i64).to_string()),
            },
            _ => String::new(),
        },
        ClickAction::CopyToClipboard => field(keys::VALUE),
        ClickAction::ShowDialog => field(keys::DIALOG),
        ClickAction::Custom => {
            let id = field(keys::ID);
            let payload = field(keys::PAYLOAD);
            if id.is_empty() || payload.is_empty() {
                id
            } else {
                format!("{id}{CUSTOM_PAYLOAD_SEPARATOR}{payload}")
            }
        }
    }
}

fn hover_event(obj: &Object) -> Result<Option<HoverEvent>> {
    let Some(name) = obj.get(keys::ACTION).and_then(Value::as_str) else {
        debug!(?obj, "hover event without an action, dropping it");
        return Ok(None);
    };

    let action = match HoverAction::from_name(name) {
        Some(action) if action.is_readable() => action,
        _ => {
            debug!(action = name, "unknown or unreadable hover action, dropping it");
            return Ok(None);
        }
    };

    let wrapped = obj.contains_key(keys::CONTENTS) || obj.contains_key(keys::VALUE);

    let event = match action {
        HoverAction::ShowText => {
            if let Some(value) = obj.get(keys::VALUE) {
                Some(HoverEvent::ShowText(Box::new(show_text_value(value)?)))
            } else if let Some(contents) = obj.get(keys::CONTENTS) {
                Some(HoverEvent::ShowText(Box::new(component(contents)?)))
            } else {
                None
            }
        }
        HoverAction::ShowItem if obj.contains_key(keys::ID) && !wrapped => {
            Some(HoverEvent::ShowItem(show_item(obj)?))
        }
        HoverAction::ShowEntity
            if (obj.contains_key(keys::ID) || obj.contains_key(keys::TYPE)) && !wrapped =>
        {
            Some(HoverEvent::ShowEntity(show_entity(obj)?))
        }
        HoverAction::ShowItem | HoverAction::ShowEntity => {
            match obj.get(keys::CONTENTS).or_else(|| obj.get(keys::VALUE)) {
                Some(payload) => Some(wrapped_payload(action, payload)?),
                None => None,
            }
        }
    };

    if event.is_none() {
        debug!(action = name, "hover event without a payload, dropping it");
    }

    Ok(event)
}

/// A `show_text` value is a component. Very old clients wrote it as a string
/// holding nested JSON; a string that doesn't parse is plain text.
fn show_text_value(value: &Value) -> Result<Component> {
    if let Value::String(s) = value {
        let trimmed = s.trim_start();
        if trimmed.starts_with(['{', '[', '"']) {
            if let Ok(nested) = serde_json::from_str::<Value>(s) {
                return component(&nested);
            }
        }
    }

    component(value)
}

/// Reads a payload from `contents` or the old `value` field.
fn wrapped_payload(action: HoverAction, payload: &Value) -> Result<HoverEvent> {
    let nested;
    let payload = match payload {
        // Very old dialects nest the payload as a JSON string.
        Value::String(s) => {
            nested = serde_json::from_str::<Value>(s)?;
            &nested
        }
        _ => payload,
    };

    let Value::Object(obj) = payload else {
        return Err(Error::UnsupportedHoverAction(format!(
            "{action} with a non-object payload"
        )));
    };

    Ok(match action {
        HoverAction::ShowText => HoverEvent::ShowText(Box::new(object(obj)?)),
        HoverAction::ShowItem => HoverEvent::ShowItem(show_item(obj)?),
        HoverAction::ShowEntity => HoverEvent::ShowEntity(show_entity(obj)?),
    })
}

fn show_item(obj: &Object) -> Result<ShowItem> {
    let id = obj
        .get(keys::ID)
        .ok_or_else(|| Error::malformed("show_item hover event is missing an id"))?;

    let count = match obj.get(keys::COUNT) {
        None => 1,
        Some(Value::Number(n)) => {
            let count = n.as_i64().or_else(|| n.as_f64().map(|f| f as i64));
            count
                .and_then(|c| i32::try_from(c).ok())
                .ok_or_else(|| Error::malformed(format!("item count {n} is out of range")))?
        }
        Some(_) => return Err(Error::malformed("item count must be a number")),
    };

    let tag = match obj.get(keys::TAG) {
        Some(tag) => Some(BinaryTagHolder::new(string(tag, keys::TAG)?.to_owned())),
        None => None,
    };

    Ok(ShowItem {
        id: Ident::new(string(id, keys::ID)?.to_owned())?,
        count,
        tag,
    })
}

fn show_entity(obj: &Object) -> Result<ShowEntity> {
    let (kind, id) = match (obj.get(keys::UUID), obj.get(keys::TYPE)) {
        (Some(uuid), _) => (obj.get(keys::ID), uuid),
        (None, Some(kind)) => match obj.get(keys::ID) {
            Some(id) => (Some(kind), id),
            None => return Err(Error::malformed("show_entity hover event is missing a uuid")),
        },
        (None, None) => {
            return Err(Error::malformed(
                "show_entity hover event is missing its type and uuid",
            ))
        }
    };

    let kind = kind.ok_or_else(|| Error::malformed("show_entity hover event is missing a type"))?;

    let name = match obj.get(keys::NAME) {
        Some(name) => Some(Box::new(component(name)?)),
        None => None,
    };

    Ok(ShowEntity {
        kind: Ident::new(string(kind, keys::TYPE)?.to_owned())?,
        id: uuid(id)?,
        name,
    })
}

/// A UUID is either a hyphenated string or four big-endian 32-bit integers.
fn uuid(value: &Value) -> Result<Uuid> {
    match value {
        Value::String(s) => Ok(Uuid::parse_str(s)?),
        Value::Array(ints) if ints.len() == 4 => {
            let mut bits = 0_u128;
            for int in ints {
                let int = int
                    .as_i64()
                    .and_then(|i| i32::try_from(i).ok())
                    .ok_or_else(|| Error::malformed("uuid array must hold 32-bit integers"))?;
                bits = (bits << 32) | u128::from(int as u32);
            }
            Ok(Uuid::from_u128(bits))
        }
        _ => Err(Error::malformed(
            "uuid must be a string or an array of four integers",
        )),
    }
}
