use serde_json::{Map, Value};

use super::{keys, JsonCodec};
use crate::{ClickEvent, Color, Component, Content, HoverEvent, ShowEntity, ShowItem, Style};

type Object = Map<String, Value>;

impl JsonCodec {
    pub(super) fn encode_component(&self, component: &Component) -> Object {
        let mut obj = Object::new();

        match &component.content {
            Content::Text(text) => {
                obj.insert(keys::TEXT.into(), text.as_ref().into());
            }
            Content::Translation { key, args } => {
                obj.insert(keys::TRANSLATE.into(), key.as_ref().into());
                if !args.is_empty() {
                    obj.insert(keys::WITH.into(), self.encode_list(args));
                }
            }
        }

        if !component.children.is_empty() {
            obj.insert(keys::EXTRA.into(), self.encode_list(&component.children));
        }

        self.encode_style(&component.style, &mut obj);

        obj
    }

    fn encode_list(&self, components: &[Component]) -> Value {
        components
            .iter()
            .map(|c| Value::Object(self.encode_component(c)))
            .collect()
    }

    fn encode_style(&self, style: &Style, obj: &mut Object) {
        if let Some(font) = &style.font {
            obj.insert(keys::FONT.into(), font.as_str().into());
        }

        if let Some(color) = style.color {
            obj.insert(keys::COLOR.into(), self.encode_color(color).into());
        }

        for (decoration, state) in style.decorations() {
            obj.insert(decoration.name().into(), state.into());
        }

        if let Some(insertion) = &style.insertion {
            obj.insert(keys::INSERTION.into(), insertion.as_ref().into());
        }

        if let Some(event) = &style.click_event {
            let key = keys::CLICK_EVENT[usize::from(self.legacy_field_names)];
            obj.insert(key.into(), Value::Object(self.encode_click(event)));
        }

        if let Some(event) = &style.hover_event {
            let key = keys::HOVER_EVENT[usize::from(self.legacy_field_names)];
            obj.insert(key.into(), Value::Object(self.encode_hover(event)));
        }
    }

    /// Palette names when downsampling, `#rrggbb` for every color otherwise.
    fn encode_color(&self, color: Color) -> String {
        if self.downsample_color {
            color.to_named().name().to_owned()
        } else {
            color.hex()
        }
    }

    fn encode_click(&self, event: &ClickEvent) -> Object {
        let mut obj = Object::new();
        obj.insert(keys::ACTION.into(), event.action().name().into());

        if self.legacy_click_structure {
            obj.insert(keys::VALUE.into(), event.value().into());
            return obj;
        }

        match event {
            ClickEvent::OpenUrl(url) => {
                obj.insert(keys::URL.into(), url.as_ref().into());
            }
            ClickEvent::OpenFile(path) => {
                obj.insert(keys::PATH.into(), path.as_ref().into());
            }
            ClickEvent::RunCommand(command) | ClickEvent::SuggestCommand(command) => {
                obj.insert(keys::COMMAND.into(), command.as_ref().into());
            }
            ClickEvent::ChangePage(page) => {
                // Modern clients expect a number, but a page that isn't one
                // is still passed through.
                let page = match page.parse::<i32>() {
                    Ok(n) => Value::from(n),
                    Err(_) => Value::from(page.as_ref()),
                };
                obj.insert(keys::PAGE.into(), page);
            }
            ClickEvent::CopyToClipboard(text) => {
                obj.insert(keys::VALUE.into(), text.as_ref().into());
            }
            ClickEvent::ShowDialog(dialog) => {
                obj.insert(keys::DIALOG.into(), dialog.as_ref().into());
            }
            ClickEvent::Custom(_) => {
                if let Some((id, payload)) = event.custom_parts() {
                    obj.insert(keys::ID.into(), id.into());
                    if let Some(payload) = payload {
                        obj.insert(keys::PAYLOAD.into(), payload.into());
                    }
                }
            }
        }

        obj
    }

    fn encode_hover(&self, event: &HoverEvent) -> Object {
        let mut obj = Object::new();
        obj.insert(keys::ACTION.into(), event.action().name().into());

        if self.legacy_hover_structure {
            let contents = match event {
                HoverEvent::ShowText(text) => Value::Object(self.encode_component(text)),
                HoverEvent::ShowItem(item) => Value::Object(self.encode_item(item)),
                HoverEvent::ShowEntity(entity) => Value::Object(self.encode_entity(entity)),
            };

            if self.legacy_hover_duplication {
                obj.insert(keys::VALUE.into(), contents.clone());
            }
            obj.insert(keys::CONTENTS.into(), contents);

            return obj;
        }

        match event {
            HoverEvent::ShowText(text) => {
                obj.insert(keys::VALUE.into(), Value::Object(self.encode_component(text)));
            }
            HoverEvent::ShowItem(item) => obj.extend(self.encode_item(item)),
            HoverEvent::ShowEntity(entity) => obj.extend(self.encode_entity(entity)),
        }

        obj
    }

    fn encode_item(&self, item: &ShowItem) -> Object {
        let mut obj = Object::new();
        obj.insert(keys::ID.into(), item.id.as_str().into());
        obj.insert(keys::COUNT.into(), item.count.into());
        if let Some(tag) = &item.tag {
            obj.insert(keys::TAG.into(), tag.as_str().into());
        }
        obj
    }

    fn encode_entity(&self, entity: &ShowEntity) -> Object {
        // The legacy form names the type `type` and the uuid `id`; the modern
        // form names them `id` and `uuid`.
        let (type_key, uuid_key) = if self.legacy_hover_structure {
            (keys::TYPE, keys::ID)
        } else {
            (keys::ID, keys::UUID)
        };

        let mut obj = Object::new();
        obj.insert(type_key.into(), entity.kind.as_str().into());
        obj.insert(uuid_key.into(), entity.id.hyphenated().to_string().into());
        if let Some(name) = &entity.name {
            obj.insert(keys::NAME.into(), Value::Object(self.encode_component(name)));
        }
        obj
    }
}
