//! Provides the [`IntoComponent`] trait and implementations.

use std::borrow::Cow;

use chatwire_ident::Ident;
use uuid::Uuid;

use crate::{BinaryTagHolder, ClickEvent, Color, Component, HoverEvent, ShowEntity, ShowItem};

/// Trait for any data that can be converted to a [`Component`].
///
/// Also conveniently provides many useful methods for modifying a
/// [`Component`]'s style.
///
/// # Usage
///
/// ```
/// # use chatwire_text::{IntoComponent, NamedColor};
/// let mut my_text = "".into_component();
/// my_text = my_text.color(NamedColor::Red).bold();
/// my_text = my_text.add_child("CRABBBBB".obfuscated());
/// ```
pub trait IntoComponent: Sized {
    /// Converts to an owned [`Component`].
    fn into_component(self) -> Component;

    /// Sets the color of the text.
    fn color(self, color: impl Into<Color>) -> Component {
        let mut value = self.into_component();
        value.style.color = Some(color.into());
        value
    }
    /// Clears the color of the text. Color of the parent component will be
    /// used.
    fn clear_color(self) -> Component {
        let mut value = self.into_component();
        value.style.color = None;
        value
    }

    /// Sets the font of the text.
    fn font(self, font: Ident) -> Component {
        let mut value = self.into_component();
        value.style.font = Some(font);
        value
    }

    /// Makes the text bold.
    fn bold(self) -> Component {
        let mut value = self.into_component();
        value.style.bold = Some(true);
        value
    }
    /// Makes the text not bold.
    fn not_bold(self) -> Component {
        let mut value = self.into_component();
        value.style.bold = Some(false);
        value
    }
    /// Clears the `bold` property of the text. Property of the parent
    /// component will be used.
    fn clear_bold(self) -> Component {
        let mut value = self.into_component();
        value.style.bold = None;
        value
    }

    /// Makes the text italic.
    fn italic(self) -> Component {
        let mut value = self.into_component();
        value.style.italic = Some(true);
        value
    }
    /// Makes the text not italic.
    fn not_italic(self) -> Component {
        let mut value = self.into_component();
        value.style.italic = Some(false);
        value
    }

    /// Makes the text underlined.
    fn underlined(self) -> Component {
        let mut value = self.into_component();
        value.style.underlined = Some(true);
        value
    }
    /// Makes the text not underlined.
    fn not_underlined(self) -> Component {
        let mut value = self.into_component();
        value.style.underlined = Some(false);
        value
    }

    /// Adds a strikethrough effect to the text.
    fn strikethrough(self) -> Component {
        let mut value = self.into_component();
        value.style.strikethrough = Some(true);
        value
    }
    /// Removes the strikethrough effect from the text.
    fn not_strikethrough(self) -> Component {
        let mut value = self.into_component();
        value.style.strikethrough = Some(false);
        value
    }

    /// Makes the text obfuscated.
    fn obfuscated(self) -> Component {
        let mut value = self.into_component();
        value.style.obfuscated = Some(true);
        value
    }
    /// Makes the text not obfuscated.
    fn not_obfuscated(self) -> Component {
        let mut value = self.into_component();
        value.style.obfuscated = Some(false);
        value
    }

    /// Adds an `insertion` property to the text. When shift-clicked, the given
    /// text will be inserted into chat box for the client.
    fn insertion(self, insertion: impl Into<Cow<'static, str>>) -> Component {
        let mut value = self.into_component();
        value.style.insertion = Some(insertion.into());
        value
    }

    /// Sets the click event of the text.
    fn on_click(self, event: ClickEvent) -> Component {
        let mut value = self.into_component();
        value.style.click_event = Some(event);
        value
    }
    /// On click, opens the given URL. Has to be `http` or `https` protocol.
    fn on_click_open_url(self, url: impl Into<Cow<'static, str>>) -> Component {
        self.on_click(ClickEvent::OpenUrl(url.into()))
    }
    /// On click, sends a command. Doesn't actually have to be a command, can be
    /// a simple chat message.
    fn on_click_run_command(self, command: impl Into<Cow<'static, str>>) -> Component {
        self.on_click(ClickEvent::RunCommand(command.into()))
    }
    /// On click, copies the given text to the chat box.
    fn on_click_suggest_command(self, command: impl Into<Cow<'static, str>>) -> Component {
        self.on_click(ClickEvent::SuggestCommand(command.into()))
    }
    /// On click, turns the page of the opened book to the given number.
    /// Indexing starts at `1`.
    fn on_click_change_page(self, page: i32) -> Component {
        self.on_click(ClickEvent::change_page(page))
    }
    /// On click, copies the given text to clipboard.
    fn on_click_copy_to_clipboard(self, text: impl Into<Cow<'static, str>>) -> Component {
        self.on_click(ClickEvent::CopyToClipboard(text.into()))
    }
    /// On click, opens the given dialog.
    fn on_click_show_dialog(self, dialog: impl Into<Cow<'static, str>>) -> Component {
        self.on_click(ClickEvent::ShowDialog(dialog.into()))
    }
    /// On click, sends a custom payload to the server.
    fn on_click_custom(self, id: impl Into<Cow<'static, str>>, payload: Option<&str>) -> Component {
        self.on_click(ClickEvent::custom(id, payload))
    }

    /// Sets the hover event of the text.
    fn on_hover(self, event: HoverEvent) -> Component {
        let mut value = self.into_component();
        value.style.hover_event = Some(event);
        value
    }
    /// On mouse hover, shows the given text in a tooltip.
    fn on_hover_show_text(self, text: impl IntoComponent) -> Component {
        self.on_hover(HoverEvent::ShowText(Box::new(text.into_component())))
    }
    /// On mouse hover, shows an item tooltip.
    fn on_hover_show_item(self, id: Ident, count: i32, tag: Option<BinaryTagHolder>) -> Component {
        self.on_hover(HoverEvent::ShowItem(ShowItem { id, count, tag }))
    }
    /// On mouse hover, shows an entity's type, UUID and optional name.
    fn on_hover_show_entity(
        self,
        kind: Ident,
        id: Uuid,
        name: Option<Component>,
    ) -> Component {
        self.on_hover(HoverEvent::ShowEntity(ShowEntity {
            kind,
            id,
            name: name.map(Box::new),
        }))
    }

    /// Adds a child [`Component`].
    fn add_child(self, child: impl IntoComponent) -> Component {
        let mut value = self.into_component();
        value.children.push(child.into_component());
        value
    }
}

impl IntoComponent for Component {
    fn into_component(self) -> Component {
        self
    }
}

impl IntoComponent for &Component {
    fn into_component(self) -> Component {
        self.clone()
    }
}

impl IntoComponent for &'static str {
    fn into_component(self) -> Component {
        Component::text(self)
    }
}

impl IntoComponent for String {
    fn into_component(self) -> Component {
        Component::text(self)
    }
}

impl IntoComponent for &String {
    fn into_component(self) -> Component {
        Component::text(self.clone())
    }
}

impl IntoComponent for Cow<'static, str> {
    fn into_component(self) -> Component {
        Component::text(self)
    }
}

impl<T: IntoComponent, const N: usize> IntoComponent for [T; N] {
    fn into_component(self) -> Component {
        let mut txt = Component::text("");
        txt.children
            .extend(self.into_iter().map(IntoComponent::into_component));
        txt
    }
}

macro_rules! impl_primitives {
    ($($primitive:ty),+) => {
        $(
            impl IntoComponent for $primitive {
                fn into_component(self) -> Component {
                    Component::text(self.to_string())
                }
            }
        )+
    };
}

impl_primitives! {char, bool, f32, f64, isize, usize, i8, i16, i32, i64, i128, u8, u16, u32, u64, u128}

#[cfg(test)]
mod tests {
    use chatwire_ident::ident;

    use super::*;
    use crate::HoverAction;

    #[test]
    fn builders_set_style() {
        let txt = "hi"
            .color(Color::RED)
            .bold()
            .not_italic()
            .insertion("hey")
            .on_click_run_command("/hi")
            .on_hover_show_text("tip");

        assert_eq!(txt.style.color, Some(Color::RED));
        assert_eq!(txt.style.bold, Some(true));
        assert_eq!(txt.style.italic, Some(false));
        assert_eq!(txt.style.underlined, None);
        assert_eq!(txt.style.insertion.as_deref(), Some("hey"));
        assert_eq!(
            txt.style.click_event,
            Some(ClickEvent::RunCommand("/hi".into()))
        );
        assert_eq!(
            txt.style.hover_event.as_ref().map(HoverEvent::action),
            Some(HoverAction::ShowText)
        );

        let cleared = txt.clear_bold().clear_color();
        assert_eq!(cleared.style.bold, None);
        assert_eq!(cleared.style.color, None);
    }

    #[test]
    fn arrays_and_primitives() {
        let txt = ["a".into_component(), "b".bold()].into_component() + 5 + true;
        assert_eq!(txt.to_string(), "ab5true");
        assert_eq!(txt.children.len(), 4);
    }

    #[test]
    fn show_item_builder() {
        let txt = "sword".on_hover_show_item(ident!("diamond_sword"), 2, None);
        let Some(HoverEvent::ShowItem(item)) = txt.style.hover_event else {
            panic!("expected show_item");
        };
        assert_eq!(item.id.as_str(), "minecraft:diamond_sword");
        assert_eq!(item.count, 2);
    }
}
