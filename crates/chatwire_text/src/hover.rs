//! Hover events and the table of hover actions.

use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use chatwire_ident::Ident;
use uuid::Uuid;

use crate::Component;

/// The kind of a [`HoverEvent`].
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[allow(clippy::enum_variant_names)]
pub enum HoverAction {
    ShowText,
    ShowItem,
    ShowEntity,
}

impl HoverAction {
    pub const ALL: [Self; 3] = [Self::ShowText, Self::ShowItem, Self::ShowEntity];

    pub const fn name(self) -> &'static str {
        match self {
            Self::ShowText => "show_text",
            Self::ShowItem => "show_item",
            Self::ShowEntity => "show_entity",
        }
    }

    /// Whether events with this action are accepted when decoding.
    pub const fn is_readable(self) -> bool {
        true
    }

    /// Name-keyed table of every action.
    pub fn by_name() -> &'static HashMap<&'static str, HoverAction> {
        static NAMES: OnceLock<HashMap<&'static str, HoverAction>> = OnceLock::new();

        NAMES.get_or_init(|| Self::ALL.into_iter().map(|a| (a.name(), a)).collect())
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::by_name().get(name).copied()
    }
}

impl fmt::Display for HoverAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Action to take when mouse-hovering on the text.
#[derive(Clone, PartialEq, Debug)]
#[allow(clippy::enum_variant_names)]
pub enum HoverEvent {
    /// Displays a tooltip with the given text.
    ShowText(Box<Component>),
    /// Shows an item tooltip.
    ShowItem(ShowItem),
    /// Shows an entity's type, UUID and name.
    ShowEntity(ShowEntity),
}

/// Payload of [`HoverEvent::ShowItem`].
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ShowItem {
    /// Resource identifier of the item.
    pub id: Ident,
    /// Number of the items in the stack.
    pub count: i32,
    /// Item data in sNBT form, passed through untouched.
    pub tag: Option<BinaryTagHolder>,
}

/// Payload of [`HoverEvent::ShowEntity`].
#[derive(Clone, PartialEq, Debug)]
pub struct ShowEntity {
    /// Resource identifier of the entity type.
    pub kind: Ident,
    pub id: Uuid,
    /// Optional custom name for the entity.
    pub name: Option<Box<Component>>,
}

/// An opaque binary tag (NBT compound) in its string form.
///
/// The codecs never look inside; the raw string is written back as it was
/// read.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct BinaryTagHolder(pub Cow<'static, str>);

impl BinaryTagHolder {
    pub fn new(raw: impl Into<Cow<'static, str>>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BinaryTagHolder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl ShowItem {
    /// A single item without tag data.
    pub fn new(id: Ident) -> Self {
        Self {
            id,
            count: 1,
            tag: None,
        }
    }
}

impl HoverEvent {
    pub fn show_text(text: impl Into<Component>) -> Self {
        Self::ShowText(Box::new(text.into()))
    }

    pub fn action(&self) -> HoverAction {
        match self {
            Self::ShowText(_) => HoverAction::ShowText,
            Self::ShowItem(_) => HoverAction::ShowItem,
            Self::ShowEntity(_) => HoverAction::ShowEntity,
        }
    }
}

impl From<ShowItem> for HoverEvent {
    fn from(value: ShowItem) -> Self {
        Self::ShowItem(value)
    }
}

impl From<ShowEntity> for HoverEvent {
    fn from(value: ShowEntity) -> Self {
        Self::ShowEntity(value)
    }
}

#[cfg(test)]
mod tests {
    use chatwire_ident::ident;

    use super::*;

    #[test]
    fn action_table() {
        for action in HoverAction::ALL {
            assert_eq!(HoverAction::from_name(action.name()), Some(action));
            assert!(action.is_readable());
        }
        assert_eq!(HoverAction::from_name("show_achievement"), None);
    }

    #[test]
    fn event_actions() {
        let item = HoverEvent::from(ShowItem::new(ident!("diamond")));
        assert_eq!(item.action(), HoverAction::ShowItem);
        assert_eq!(HoverEvent::show_text("hi").action(), HoverAction::ShowText);
    }
}
