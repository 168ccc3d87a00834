use serde::Deserialize;

use crate::prelude::*;

/// How a host application might embed codec settings in its own config file.
#[derive(Deserialize, Debug)]
struct ServerConfig {
    motd: String,
    #[serde(default)]
    json: JsonCodec,
    #[serde(default)]
    legacy: LegacyCodec,
}

#[test]
fn codecs_from_config_file() -> anyhow::Result<()> {
    let config: ServerConfig = toml::from_str(
        r#"
        motd = "&bA &lMinecraft&r server"

        [json]
        legacy_field_names = true
        legacy_click_structure = true
        legacy_hover_structure = true
        downsample_color = false

        [legacy]
        format_char = "&"
        "#,
    )?;

    assert_eq!(
        config.json,
        JsonCodec {
            legacy_hover_duplication: true,
            ..JsonCodec::legacy()
        }
    );
    assert_eq!(config.legacy, LegacyCodec::ampersand());

    let motd = config.legacy.unmarshal(config.motd.as_bytes())?;
    assert_eq!(motd.to_string(), "A Minecraft server");

    Ok(())
}

#[test]
fn defaults_when_omitted() -> anyhow::Result<()> {
    let config: ServerConfig = toml::from_str(r#"motd = "hi""#)?;

    assert_eq!(config.json, JsonCodec::modern());
    assert_eq!(config.legacy, LegacyCodec::section());
    assert_eq!(config.motd, "hi");

    Ok(())
}
