use std::hint::black_box;

use chatwire::prelude::*;
use divan::Bencher;
use uuid::Uuid;

pub(crate) fn setup() -> Component {
    let mut txt = "Server".color(Color::GOLD).bold() + " » ";

    for i in 0..32 {
        txt += format!("line {i} ")
            .color(Color::rgb(i * 8, 0x80, 0xff - i * 8))
            .on_click_run_command(format!("/page {i}"))
            .on_hover_show_entity(ident!("player"), Uuid::from_u128(u128::from(i)), None);
    }

    txt + Component::translate("chat.type.text", vec!["Steve".italic(), "hello".into_component()])
}

fn codec(dialect: &str) -> JsonCodec {
    match dialect {
        "legacy" => JsonCodec::legacy(),
        _ => JsonCodec::modern(),
    }
}

#[divan::bench(args = ["modern", "legacy"])]
fn marshal(bencher: Bencher, dialect: &str) {
    let codec = codec(dialect);
    let txt = setup();

    bencher.bench_local(|| black_box(codec.marshal(black_box(&txt))));
}

#[divan::bench(args = ["modern", "legacy"])]
fn unmarshal(bencher: Bencher, dialect: &str) {
    let codec = codec(dialect);
    let bytes = codec.marshal(&setup()).unwrap();

    bencher.bench_local(|| black_box(codec.unmarshal(black_box(&bytes))));
}
