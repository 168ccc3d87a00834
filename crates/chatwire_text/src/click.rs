//! Click events and the table of click actions.

use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

/// Separates the id and payload packed into [`ClickEvent::Custom`].
///
/// The separator is not escaped, so an id containing `|` cannot be told apart
/// from an id/payload pair once packed.
pub const CUSTOM_PAYLOAD_SEPARATOR: char = '|';

/// The kind of a [`ClickEvent`].
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum ClickAction {
    OpenUrl,
    OpenFile,
    RunCommand,
    SuggestCommand,
    ChangePage,
    CopyToClipboard,
    ShowDialog,
    Custom,
}

impl ClickAction {
    pub const ALL: [Self; 8] = [
        Self::OpenUrl,
        Self::OpenFile,
        Self::RunCommand,
        Self::SuggestCommand,
        Self::ChangePage,
        Self::CopyToClipboard,
        Self::ShowDialog,
        Self::Custom,
    ];

    /// The value of the `action` field in JSON.
    pub const fn name(self) -> &'static str {
        match self {
            Self::OpenUrl => "open_url",
            Self::OpenFile => "open_file",
            Self::RunCommand => "run_command",
            Self::SuggestCommand => "suggest_command",
            Self::ChangePage => "change_page",
            Self::CopyToClipboard => "copy_to_clipboard",
            Self::ShowDialog => "show_dialog",
            Self::Custom => "custom",
        }
    }

    /// Whether events with this action are accepted when decoding.
    ///
    /// `open_file` is only ever sent by the client to itself (screenshot
    /// links), so it is dropped when received.
    pub const fn is_readable(self) -> bool {
        !matches!(self, Self::OpenFile)
    }

    /// Name-keyed table of every action.
    pub fn by_name() -> &'static HashMap<&'static str, ClickAction> {
        static NAMES: OnceLock<HashMap<&'static str, ClickAction>> = OnceLock::new();

        NAMES.get_or_init(|| Self::ALL.into_iter().map(|a| (a.name(), a)).collect())
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::by_name().get(name).copied()
    }
}

impl fmt::Display for ClickAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Action to take on click of the text.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum ClickEvent {
    /// Opens an URL
    OpenUrl(Cow<'static, str>),
    /// Opens a file on the client. Cannot be sent by a server.
    OpenFile(Cow<'static, str>),
    /// Sends a chat command. Doesn't actually have to be a command, can be a
    /// normal chat message.
    RunCommand(Cow<'static, str>),
    /// Replaces the contents of the chat box with the text, not necessarily a
    /// command.
    SuggestCommand(Cow<'static, str>),
    /// Only usable within written books. Changes the page of the book. Indexing
    /// starts at 1.
    ///
    /// Kept as a string since older clients accept any string here.
    ChangePage(Cow<'static, str>),
    /// Copies the given text to clipboard
    CopyToClipboard(Cow<'static, str>),
    /// Opens the dialog with the given identifier (1.21.6+).
    ShowDialog(Cow<'static, str>),
    /// Sends a custom payload to the server (1.21.6+). The id and optional
    /// payload are packed as `id|payload`, see [`ClickEvent::custom`].
    Custom(Cow<'static, str>),
}

impl ClickEvent {
    /// Builds an event from an action and its string value.
    ///
    /// A custom value ending in [`CUSTOM_PAYLOAD_SEPARATOR`] carries an empty
    /// payload and is stored as the bare id, like [`ClickEvent::custom`] does.
    pub fn new(action: ClickAction, value: impl Into<Cow<'static, str>>) -> Self {
        let value = value.into();
        match action {
            ClickAction::OpenUrl => Self::OpenUrl(value),
            ClickAction::OpenFile => Self::OpenFile(value),
            ClickAction::RunCommand => Self::RunCommand(value),
            ClickAction::SuggestCommand => Self::SuggestCommand(value),
            ClickAction::ChangePage => Self::ChangePage(value),
            ClickAction::CopyToClipboard => Self::CopyToClipboard(value),
            ClickAction::ShowDialog => Self::ShowDialog(value),
            ClickAction::Custom if value.ends_with(CUSTOM_PAYLOAD_SEPARATOR) => {
                let mut id = value.into_owned();
                id.pop();
                Self::Custom(id.into())
            }
            ClickAction::Custom => Self::Custom(value),
        }
    }

    /// A page change to a numbered page.
    pub fn change_page(page: i32) -> Self {
        Self::ChangePage(page.to_string().into())
    }

    /// A custom event. A non-empty payload is appended to the id after
    /// [`CUSTOM_PAYLOAD_SEPARATOR`].
    pub fn custom(id: impl Into<Cow<'static, str>>, payload: Option<&str>) -> Self {
        let id = id.into();
        match payload {
            Some(payload) if !payload.is_empty() => {
                Self::Custom(format!("{id}{CUSTOM_PAYLOAD_SEPARATOR}{payload}").into())
            }
            _ => Self::Custom(id),
        }
    }

    pub fn action(&self) -> ClickAction {
        match self {
            Self::OpenUrl(_) => ClickAction::OpenUrl,
            Self::OpenFile(_) => ClickAction::OpenFile,
            Self::RunCommand(_) => ClickAction::RunCommand,
            Self::SuggestCommand(_) => ClickAction::SuggestCommand,
            Self::ChangePage(_) => ClickAction::ChangePage,
            Self::CopyToClipboard(_) => ClickAction::CopyToClipboard,
            Self::ShowDialog(_) => ClickAction::ShowDialog,
            Self::Custom(_) => ClickAction::Custom,
        }
    }

    /// The single string payload of the event.
    pub fn value(&self) -> &str {
        match self {
            Self::OpenUrl(v)
            | Self::OpenFile(v)
            | Self::RunCommand(v)
            | Self::SuggestCommand(v)
            | Self::ChangePage(v)
            | Self::CopyToClipboard(v)
            | Self::ShowDialog(v)
            | Self::Custom(v) => v,
        }
    }

    /// Splits a custom event into its id and optional payload at the first
    /// separator. Returns `None` for other actions.
    pub fn custom_parts(&self) -> Option<(&str, Option<&str>)> {
        let Self::Custom(value) = self else {
            return None;
        };

        Some(match value.split_once(CUSTOM_PAYLOAD_SEPARATOR) {
            Some((id, payload)) if !payload.is_empty() => (id, Some(payload)),
            Some((id, _)) => (id, None),
            None => (value, None),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_table() {
        for action in ClickAction::ALL {
            assert_eq!(ClickAction::from_name(action.name()), Some(action));
            assert_eq!(ClickEvent::new(action, "x").action(), action);
        }
        assert_eq!(ClickAction::from_name("teleport"), None);
        assert!(!ClickAction::OpenFile.is_readable());
        assert!(ClickAction::Custom.is_readable());
    }

    #[test]
    fn custom_packing() {
        let event = ClickEvent::custom("evt", Some("data"));
        assert_eq!(event.value(), "evt|data");
        assert_eq!(event.custom_parts(), Some(("evt", Some("data"))));

        let event = ClickEvent::custom("evt", Some(""));
        assert_eq!(event.value(), "evt");
        assert_eq!(event.custom_parts(), Some(("evt", None)));

        assert_eq!(ClickEvent::new(ClickAction::Custom, "evt|"), event);
        assert_eq!(
            ClickEvent::new(ClickAction::Custom, "evt|data"),
            ClickEvent::custom("evt", Some("data"))
        );

        assert_eq!(ClickEvent::RunCommand("/a|b".into()).custom_parts(), None);
    }

    #[test]
    fn custom_separator_is_ambiguous() {
        // An id containing the separator reads back as an id/payload pair.
        let event = ClickEvent::custom("a|b", None);
        assert_eq!(event.custom_parts(), Some(("a", Some("b"))));
    }

    #[test]
    fn change_page() {
        assert_eq!(ClickEvent::change_page(3), ClickEvent::ChangePage("3".into()));
    }
}
