use crate::{
    domain::network::Network,
    error::{Error, Result},
};
use tracing::{debug, warn};

pub const ENTRY_OPEN: &str = "network={";
pub const ENTRY_CLOSE: &str = "}";

const KEY_MGMT_PSK: &str = "WPA-PSK";
const KEY_MGMT_NONE: &str = "NONE";

pub fn escape(val: &str) -> String {
    val.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Strips the surrounding quotes of a string value and reverses [`escape`].
/// Values that do not start with a quote are bare tokens and come back as is.
pub fn unescape(val: &str) -> Result<String> {
    let Some(rest) = val.strip_prefix('"') else {
        return Ok(val.to_string());
    };
    let Some(inner) = rest.strip_suffix('"') else {
        return Err(Error::MalformedValue(val.to_string()));
    };

    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some(next @ ('\\' | '"')) => out.push(next),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    Ok(out)
}

pub fn serialize_entry(network: &Network) -> String {
    let mut out = String::new();
    out.push_str(ENTRY_OPEN);
    out.push('\n');
    if !network.ssid.is_empty() {
        out.push_str(&format!("    ssid=\"{}\"\n", escape(&network.ssid)));
    }

    let key_mgmt = if network.security {
        KEY_MGMT_PSK
    } else {
        KEY_MGMT_NONE
    };
    out.push_str(&format!("    key_mgmt={key_mgmt}\n"));

    if !network.psk.is_empty() {
        out.push_str(&format!("    psk=\"{}\"\n", escape(&network.psk)));
    }
    out.push_str(ENTRY_CLOSE);
    out.push('\n');
    out
}

/// Parses the lines between `network={` and `}`.
pub fn parse_entry<'a, I>(lines: I) -> Result<Network>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut network = Network::default();

    for raw in lines {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        let Some((key, value)) = line.split_once('=') else {
            return Err(Error::MalformedLine(line.to_string()));
        };
        let value = unescape(value)?;

        match key {
            "ssid" => network.ssid = value,
            "psk" => network.psk = value,
            "key_mgmt" => network.security = value == KEY_MGMT_PSK,
            other => debug!("ignoring unknown network key {other:?}"),
        }
    }

    Ok(network)
}

/// Parses every `network={ ... }` block of the generated section. Blocks that
/// fail to parse or hold bytes that are not UTF-8 are logged and skipped.
pub fn parse_section(section: &[u8]) -> Vec<Network> {
    let mut out = Vec::new();
    let mut block: Option<Vec<&str>> = None;
    let mut undecodable = false;

    for (idx, raw) in section.split(|b| *b == b'\n').enumerate() {
        let line = match std::str::from_utf8(raw) {
            Ok(line) => line.trim(),
            Err(e) => {
                warn!("line {}: not valid UTF-8: {e}", idx + 1);
                undecodable |= block.is_some();
                continue;
            }
        };
        if line.is_empty() {
            continue;
        }

        if line == ENTRY_OPEN {
            if block.is_some() {
                warn!("line {}: network block opened before the previous one closed", idx + 1);
            }
            block = Some(Vec::new());
            undecodable = false;
            continue;
        }

        if line == ENTRY_CLOSE {
            let Some(body) = block.take() else {
                warn!("line {}: stray '}}' outside a network block", idx + 1);
                continue;
            };
            if std::mem::take(&mut undecodable) {
                warn!("skipping network block ending at line {}: not valid UTF-8", idx + 1);
                continue;
            }
            match parse_entry(body) {
                Ok(network) => out.push(network),
                Err(e) => warn!("skipping network block ending at line {}: {e}", idx + 1),
            }
            continue;
        }

        match block.as_mut() {
            Some(body) => body.push(line),
            None => warn!("line {}: ignoring text outside a network block", idx + 1),
        }
    }

    if block.is_some() {
        warn!("dropping unterminated network block at end of file");
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_doubles_backslashes_before_quotes() {
        assert_eq!(escape(r#"a\b"c"#), r#"a\\b\"c"#);
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn unescape_handles_bare_and_empty_values() {
        assert_eq!(unescape("").unwrap(), "");
        assert_eq!(unescape("WPA-PSK").unwrap(), "WPA-PSK");
        assert_eq!(unescape("\"Home\"").unwrap(), "Home");
        assert_eq!(unescape("\"\"").unwrap(), "");
    }

    #[test]
    fn unescape_rejects_unbalanced_quotes() {
        assert!(matches!(unescape("\"Home"), Err(Error::MalformedValue(_))));
        assert!(matches!(unescape("\""), Err(Error::MalformedValue(_))));
    }

    #[test]
    fn unescape_reverses_escape() {
        let raw = r#"we\ird "name" \"#;
        let quoted = format!("\"{}\"", escape(raw));
        assert_eq!(unescape(&quoted).unwrap(), raw);
    }

    #[test]
    fn serialize_secured_network() {
        let n = Network::secured("Home", "hunter22");
        assert_eq!(
            serialize_entry(&n),
            "network={\n    ssid=\"Home\"\n    key_mgmt=WPA-PSK\n    psk=\"hunter22\"\n}\n"
        );
    }

    #[test]
    fn serialize_omits_empty_fields() {
        let n = Network::open("");
        assert_eq!(serialize_entry(&n), "network={\n    key_mgmt=NONE\n}\n");
    }

    #[test]
    fn entry_round_trips_through_parse() {
        for n in [
            Network::open("Cafe"),
            Network::secured("Office 5G", "s3cret pass"),
            Network::secured(r#"Quote"And\Slash"#, r#"p\"w"#),
        ] {
            let text = serialize_entry(&n);
            let interior: Vec<&str> = text
                .lines()
                .filter(|l| *l != ENTRY_OPEN && *l != ENTRY_CLOSE)
                .collect();
            assert_eq!(parse_entry(interior).unwrap(), n);
        }
    }

    #[test]
    fn parse_entry_ignores_unknown_keys() {
        let n = parse_entry(["ssid=\"Lab\"", "priority=5", "key_mgmt=NONE"]).unwrap();
        assert_eq!(n, Network::open("Lab"));
    }

    #[test]
    fn parse_entry_splits_on_first_equals() {
        let n = parse_entry(["psk=\"a=b=c\"", "key_mgmt=WPA-PSK"]).unwrap();
        assert_eq!(n.psk, "a=b=c");
        assert!(n.security);
    }

    #[test]
    fn parse_section_skips_malformed_blocks() {
        let text = "\
network={
    ssid=\"Broken
    key_mgmt=NONE
}

network={
    ssid=\"Good\"
    key_mgmt=WPA-PSK
    psk=\"pw\"
}

network={
    ssid=\"Dangling\"
";
        assert_eq!(parse_section(text.as_bytes()), vec![Network::secured("Good", "pw")]);
    }

    #[test]
    fn parse_section_skips_blocks_with_raw_bytes() {
        let mut text = b"network={\n    ssid=\"caf".to_vec();
        text.extend_from_slice(b"\xe9\"\n    key_mgmt=NONE\n}\n\n");
        text.extend_from_slice(b"network={\n    ssid=\"Cafe\"\n    key_mgmt=NONE\n}\n");

        assert_eq!(parse_section(&text), vec![Network::open("Cafe")]);
    }
}
