use std::io;

use pretty_assertions::assert_eq;
use uuid::Uuid;

use super::*;

fn styled() -> Component {
    styled_with(Color::rgb(0x12, 0x34, 0x56))
}

fn styled_with(bar: Color) -> Component {
    "foo".color(Color::RED).bold().font(DEFAULT_FONT)
        + ("bar".obfuscated().color(bar)
            + "baz"
                .underlined()
                .not_bold()
                .italic()
                .color(Color::BLACK)
                .insertion("baz!"))
        + Component::translate(
            "chat.type.advancement.task",
            vec!["arg1".into_component(), "arg2".strikethrough()],
        )
}

fn interactive() -> Component {
    let entity = Uuid::from_u128(0x8d3c_f9a4_4ee7_4d2f_a3f1_2b1c_9c0c_6a11);

    "links".into_component()
        + "url".on_click_open_url("https://example.com")
        + "run".on_click_run_command("/spawn")
        + "suggest".on_click_suggest_command("/msg ")
        + "page".on_click_change_page(3)
        + "copy".on_click_copy_to_clipboard("copied")
        + "dialog".on_click_show_dialog("mod:menu")
        + "custom".on_click_custom("mod:evt", Some("data"))
        + "tip".on_hover_show_text("hello".italic() + " there")
        + "item".on_hover_show_item(
            ident!("diamond_sword"),
            1,
            Some(BinaryTagHolder::new("{Damage:5}")),
        )
        + "entity".on_hover_show_entity(ident!("pig"), entity, Some("Bob".bold()))
        + "nameless".on_hover_show_entity(ident!("cow"), entity, None)
}

#[test]
fn modern_example() {
    let hello = "Hello".color(Color::AQUA).not_bold();
    let json = JsonCodec::modern().marshal(&hello).unwrap();

    assert_eq!(
        String::from_utf8(json).unwrap(),
        r#"{"bold":false,"color":"aqua","text":"Hello"}"#
    );
}

#[test]
fn every_dialect_round_trips() {
    let flags = [false, true];

    for downsample_color in flags {
        for legacy_hover_duplication in flags {
            for legacy_field_names in flags {
                for legacy_click_structure in flags {
                    for legacy_hover_structure in flags {
                        let codec = JsonCodec {
                            downsample_color,
                            legacy_hover_duplication,
                            legacy_field_names,
                            legacy_click_structure,
                            legacy_hover_structure,
                        };

                        // Downsampling only preserves palette colors.
                        let styled = if downsample_color {
                            styled_with(Color::DARK_AQUA)
                        } else {
                            styled()
                        };

                        for before in [styled, interactive()] {
                            let json = codec.marshal(&before).unwrap();
                            let after = codec.unmarshal(&json).unwrap();
                            assert_eq!(before, after, "{codec:?}");
                        }
                    }
                }
            }
        }
    }
}

#[test]
fn empty_custom_payload_reads_the_same_everywhere() {
    let txt = "x".on_click(ClickEvent::Custom("evt|".into()));

    for codec in [JsonCodec::modern(), JsonCodec::legacy()] {
        let after = codec.unmarshal(&codec.marshal(&txt).unwrap()).unwrap();
        assert_eq!(
            after.style.click_event,
            Some(ClickEvent::custom("evt", None)),
            "{codec:?}"
        );
    }
}

#[test]
fn dialects_read_each_other() {
    let before = interactive();
    let legacy = JsonCodec::legacy().marshal(&before).unwrap();
    let modern = JsonCodec {
        downsample_color: false,
        ..JsonCodec::modern()
    };

    assert_eq!(modern.unmarshal(&legacy).unwrap(), before);
    assert_eq!(
        JsonCodec::legacy()
            .unmarshal(&modern.marshal(&before).unwrap())
            .unwrap(),
        before
    );
}

#[test]
fn downsampling_is_lossy_for_rgb_only() {
    let txt = "a".color(Color::rgb(0x10, 0x10, 0xa0)) + "b".color(Color::GOLD);
    let codec = JsonCodec::modern();
    let after = codec.unmarshal(&codec.marshal(&txt).unwrap()).unwrap();

    assert_eq!(after.children[0].style.color, Some(Color::DARK_BLUE));
    assert_eq!(after.children[1].style.color, Some(Color::GOLD));
}

#[test]
fn non_object_data_types() {
    let input = br#"["foo", true, false, 1.5, 9999]"#;
    let txt = JsonCodec::default().unmarshal(input).unwrap();

    assert_eq!(txt, "foo".into_component() + true + false + 1.5 + 9999);
}

#[test]
fn syntax_errors() {
    assert!(matches!(
        JsonCodec::default().unmarshal(b"{\"text\":"),
        Err(Error::Json(_))
    ));
    assert!(matches!(
        JsonCodec::default().unmarshal(b"{\"text\":\"\",\"font\":\"Bad Font\"}"),
        Err(Error::Ident(_))
    ));
    assert!(matches!(
        JsonCodec::default().unmarshal(
            br#"{"text":"","hover_event":{"action":"show_entity","id":"pig","uuid":"nope"}}"#
        ),
        Err(Error::Uuid(_))
    ));
}

#[test]
fn legacy_and_json_agree() {
    let legacy = LegacyCodec::ampersand();
    let txt = legacy
        .unmarshal(b"  &eHallo, &oich &b&mbin &rstolz!")
        .unwrap();

    assert_eq!(
        String::from_utf8(JsonCodec::modern().marshal(&txt).unwrap()).unwrap(),
        r#"{"extra":[{"color":"yellow","extra":[{"italic":true,"text":"ich "}],"text":"Hallo, "},{"color":"aqua","strikethrough":true,"text":"bin "},{"text":"stolz!"}],"text":"  "}"#
    );
}

#[test]
fn legacy_drops_everything_but_formatting() {
    let codec = LegacyCodec::section();
    let after = codec.unmarshal(&codec.marshal(&styled()).unwrap()).unwrap();

    assert_eq!(after.to_string(), "foobarbaz");
    assert!(after.children.iter().all(|c| c.style.click_event.is_none()));
}

#[test]
fn plain_text() {
    assert_eq!(
        PlainCodec.marshal(&styled()).unwrap(),
        b"foobarbaz".to_vec()
    );
}

struct BrokenPipe;

impl io::Write for BrokenPipe {
    fn write(&mut self, _: &[u8]) -> io::Result<usize> {
        Err(io::ErrorKind::BrokenPipe.into())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn marshal_to_sink() {
    let mut buf = Vec::new();
    JsonCodec::modern()
        .marshal_to(&mut buf, &Component::text("hi"))
        .unwrap();
    assert_eq!(buf, br#"{"text":"hi"}"#);

    assert!(matches!(
        LegacyCodec::section().marshal_to(BrokenPipe, &styled()),
        Err(Error::Io(e)) if e.kind() == io::ErrorKind::BrokenPipe
    ));
}
