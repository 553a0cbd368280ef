use std::fs;
use std::path::Path;

use anyhow::Context;
use classic_protocol::builders::{
    build_login_packet, build_message_packet, build_position_packet, build_set_block_packet,
};
use classic_protocol::packets::{
    MessageC2s, PlayerIdentificationC2s, PositionAndOrientationC2s, SetBlockC2s,
};
use classic_protocol::{Packet, SetBlockMode};
use serde::Deserialize;
use tracing::debug;

/// A list of packets to encode, in the order they are sent.
#[derive(Clone, PartialEq, Default, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct Script {
    #[serde(default, rename = "packet")]
    pub(crate) packets: Vec<PacketSpec>,
}

impl Script {
    pub(crate) fn load(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read script {}", path.display()))?;

        let script: Self = toml::from_str(&text)
            .with_context(|| format!("failed to parse script {}", path.display()))?;

        debug!(path = %path.display(), packets = script.packets.len(), "loaded script");

        Ok(script)
    }
}

#[derive(Clone, PartialEq, Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub(crate) enum PacketSpec {
    Login {
        username: String,
        #[serde(default)]
        verification_key: String,
    },
    SetBlock {
        x: i16,
        y: i16,
        z: i16,
        #[serde(default)]
        mode: SetBlockMode,
        block_type: u8,
    },
    Position {
        x: f64,
        y: f64,
        z: f64,
        #[serde(default)]
        yaw: u8,
        #[serde(default)]
        pitch: u8,
    },
    Message {
        text: String,
    },
}

impl PacketSpec {
    pub(crate) fn name(&self) -> &'static str {
        match self {
            PacketSpec::Login { .. } => PlayerIdentificationC2s::NAME,
            PacketSpec::SetBlock { .. } => SetBlockC2s::NAME,
            PacketSpec::Position { .. } => PositionAndOrientationC2s::NAME,
            PacketSpec::Message { .. } => MessageC2s::NAME,
        }
    }

    pub(crate) fn to_bytes(&self) -> Vec<u8> {
        match self {
            PacketSpec::Login {
                username,
                verification_key,
            } => build_login_packet(username, verification_key),
            PacketSpec::SetBlock {
                x,
                y,
                z,
                mode,
                block_type,
            } => build_set_block_packet(*x, *y, *z, *mode, *block_type),
            PacketSpec::Position {
                x,
                y,
                z,
                yaw,
                pitch,
            } => build_position_packet(*x, *y, *z, *yaw, *pitch),
            PacketSpec::Message { text } => build_message_packet(text),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const SCRIPT: &str = r#"
        [[packet]]
        kind = "login"
        username = "notch"

        [[packet]]
        kind = "set_block"
        x = 1
        y = 2
        z = 3
        mode = "delete"
        block_type = 5

        [[packet]]
        kind = "position"
        x = 0.0
        y = 0.0
        z = 0.0
        pitch = 12

        [[packet]]
        kind = "message"
        text = "hi"
    "#;

    #[test]
    fn parses_every_kind() {
        let script: Script = toml::from_str(SCRIPT).unwrap();

        assert_eq!(
            script.packets,
            [
                PacketSpec::Login {
                    username: "notch".into(),
                    verification_key: String::new(),
                },
                PacketSpec::SetBlock {
                    x: 1,
                    y: 2,
                    z: 3,
                    mode: SetBlockMode::Delete,
                    block_type: 5,
                },
                PacketSpec::Position {
                    x: 0.0,
                    y: 0.0,
                    z: 0.0,
                    yaw: 0,
                    pitch: 12,
                },
                PacketSpec::Message { text: "hi".into() },
            ]
        );
    }

    #[test]
    fn mode_defaults_to_create() {
        let script: Script = toml::from_str(
            r#"
            [[packet]]
            kind = "set_block"
            x = 1
            y = 2
            z = 3
            block_type = 5
            "#,
        )
        .unwrap();

        assert_eq!(
            script.packets[0].to_bytes(),
            [0x05, 0x00, 0x01, 0x00, 0x03, 0x00, 0x02, 0x01, 0x05]
        );
    }

    #[test]
    fn empty_script() {
        let script: Script = toml::from_str("").unwrap();
        assert!(script.packets.is_empty());
    }

    #[test]
    fn rejects_unknown_kind() {
        let res = toml::from_str::<Script>(
            r#"
            [[packet]]
            kind = "teleport"
            "#,
        );

        assert!(res.is_err());
    }

    #[test]
    fn rejects_unknown_mode() {
        let res = toml::from_str::<Script>(
            r#"
            [[packet]]
            kind = "set_block"
            x = 1
            y = 2
            z = 3
            mode = "destroy"
            block_type = 5
            "#,
        );

        assert!(res.is_err());
    }

    #[test]
    fn sizes_and_names() {
        let script: Script = toml::from_str(SCRIPT).unwrap();

        let summary: Vec<_> = script
            .packets
            .iter()
            .map(|p| (p.name(), p.to_bytes().len()))
            .collect();

        assert_eq!(
            summary,
            [
                ("PlayerIdentificationC2s", 131),
                ("SetBlockC2s", 9),
                ("PositionAndOrientationC2s", 10),
                ("MessageC2s", 66),
            ]
        );
    }

    #[test]
    fn load_reports_missing_file() {
        let err = Script::load(Path::new("does/not/exist.toml")).unwrap_err();
        assert_eq!(err.to_string(), "failed to read script does/not/exist.toml");
    }
}
