use crate::{Codec, Component, Content, Result};

/// Codec for unstyled text.
///
/// Marshalling concatenates the literal text of every node in document
/// order. Translations have no literal text, so they contribute nothing,
/// though their children still do. Unmarshalling wraps the input in a single
/// text node.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct PlainCodec;

impl PlainCodec {
    pub fn to_plain(&self, component: &Component) -> String {
        fn write(component: &Component, out: &mut String) {
            if let Content::Text(text) = &component.content {
                out.push_str(text);
            }

            for child in &component.children {
                write(child, out);
            }
        }

        let mut out = String::new();
        write(component, &mut out);
        out
    }
}

impl Codec for PlainCodec {
    fn marshal(&self, component: &Component) -> Result<Vec<u8>> {
        Ok(self.to_plain(component).into_bytes())
    }

    fn unmarshal(&self, data: &[u8]) -> Result<Component> {
        Ok(Component::text(String::from_utf8_lossy(data).into_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Color, IntoComponent};

    #[test]
    fn flattens_text() {
        let txt = "Hello".bold()
            + " world".color(Color::RED).on_hover_show_text("ignored")
            + Component::translate("chat.type.text", vec![Component::text("arg")]).add_child("!");

        assert_eq!(PlainCodec.to_plain(&txt), "Hello world!");
    }

    #[test]
    fn unmarshal_is_one_leaf() {
        let txt = PlainCodec.unmarshal("§cnot a code".as_bytes()).unwrap();
        assert_eq!(txt, Component::text("§cnot a code"));
    }
}
