use pretty_assertions::assert_eq;
use uuid::Uuid;

use super::init_logging;
use crate::prelude::*;
use crate::text::{BinaryTagHolder, Error};

fn chat_message() -> Component {
    let sender = Uuid::from_u128(0x0123_4567_89ab_cdef_0123_4567_89ab_cdef);

    Component::translate(
        "chat.type.text",
        vec![
            "Steve"
                .color(Color::rgb(0x33, 0x99, 0xff))
                .on_hover_show_entity(ident!("player"), sender, Some("Steve".into_component()))
                .on_click_suggest_command("/msg Steve "),
            "look at this ".into_component()
                + "sword"
                    .italic()
                    .on_hover_show_item(
                        ident!("diamond_sword"),
                        1,
                        Some(BinaryTagHolder::new("{Enchantments:[]}")),
                    ),
        ],
    )
}

#[test]
fn json_dialects_interoperate() -> anyhow::Result<()> {
    init_logging();

    let msg = chat_message();
    let lossless = JsonCodec {
        downsample_color: false,
        ..JsonCodec::modern()
    };

    for writer in [lossless, JsonCodec::legacy()] {
        let bytes = writer.marshal(&msg)?;

        for reader in [JsonCodec::modern(), JsonCodec::legacy(), JsonCodec::pre_rgb()] {
            assert_eq!(reader.unmarshal(&bytes)?, msg);
        }
    }

    Ok(())
}

#[test]
fn pre_rgb_clients_get_named_colors() -> anyhow::Result<()> {
    let json = String::from_utf8(JsonCodec::pre_rgb().marshal(&chat_message())?)?;

    assert!(json.contains(r#""color":"blue""#), "{json}");
    assert!(json.contains(r#""clickEvent""#), "{json}");
    assert!(!json.contains('#'), "{json}");

    Ok(())
}

#[test]
fn unknown_events_are_dropped() -> anyhow::Result<()> {
    init_logging();

    let json = br#"{
        "text": "hi",
        "clickEvent": { "action": "twitch_user_info", "value": "x" },
        "hoverEvent": { "action": "show_achievement", "value": "x" }
    }"#;

    assert_eq!(JsonCodec::default().unmarshal(json)?, Component::text("hi"));

    Ok(())
}

#[test]
fn malformed_json_fails_without_partial_result() {
    init_logging();

    let result = JsonCodec::default()
        .unmarshal(br#"{"text":"a","extra":[{"text":"b","color":"nope"}]}"#);
    assert!(matches!(result, Err(Error::InvalidColor(c)) if c == "nope"));
}

#[test]
fn legacy_configuration_strings() -> anyhow::Result<()> {
    init_logging();

    let config = LegacyCodec::ampersand();
    let motd = config.unmarshal(b"&6&lWelcome&r to the server! 100& free")?;

    assert_eq!(motd.to_string(), "Welcome to the server! 100& free");

    let game = LegacyCodec::section().marshal(&motd)?;
    assert_eq!(
        String::from_utf8(game)?,
        "§6§lWelcome§r to the server! 100& free"
    );

    Ok(())
}

#[test]
fn plain_ignores_formatting() -> anyhow::Result<()> {
    let txt = LegacyCodec::ampersand().unmarshal(b"&cred &lbold")?;
    assert_eq!(PlainCodec.marshal(&txt)?, b"red bold");

    Ok(())
}
