use crate::{
    backend::command::{self, CommandResult},
    domain::network::ScanEntry,
    error::Result,
};
use std::{collections::HashSet, time::Duration};
use tracing::{info, warn};

const SSID_END_LABEL: &str = "BSSID";
const SECURITY_MARKERS: [&str; 2] = ["WPA<", "RSN<"];

/// Scans with `ifconfig -v <iface> list scan` and restarts through
/// `service netif restart <iface>`.
pub struct IfconfigBackend {
    timeout: Duration,
}

impl IfconfigBackend {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    pub async fn scan(&self, iface: &str) -> Result<Vec<ScanEntry>> {
        let out = command::run("ifconfig", &["-v", iface, "list", "scan"], self.timeout).await?;
        let entries = parse_scan_output(&out.stdout);
        info!("scan on {iface} found {} networks", entries.len());
        Ok(entries)
    }

    /// Like [`scan`](Self::scan) but never fails: errors are logged and come
    /// back as a message next to an empty list.
    pub async fn scan_or_empty(&self, iface: &str) -> (Vec<ScanEntry>, Option<String>) {
        match self.scan(iface).await {
            Ok(entries) => (entries, None),
            Err(e) => {
                warn!("scan on {iface} failed: {e}");
                (Vec::new(), Some(format!("Scan failed: {e}")))
            }
        }
    }

    pub async fn restart(&self, iface: &str) -> Result<CommandResult> {
        command::run("service", &["netif", "restart", iface], self.timeout).await
    }
}

/// Parses column-aligned scan output. The SSID column ends one byte before
/// the `BSSID` header label. Records whose ssid is not valid UTF-8 are skipped,
/// since a lossy name would never match the real network.
pub fn parse_scan_output(raw: &[u8]) -> Vec<ScanEntry> {
    let mut lines = raw
        .split(|b| *b == b'\n')
        .map(|line| line.strip_suffix(b"\r").unwrap_or(line));
    let Some(header) = lines.next() else {
        return Vec::new();
    };
    let ssid_end = match find_bytes(header, SSID_END_LABEL.as_bytes()) {
        Some(pos) if pos > 0 => pos - 1,
        _ => return Vec::new(),
    };

    let mut seen = HashSet::new();
    let mut out = Vec::new();

    for line in lines {
        if line.len() < ssid_end + 1 {
            continue;
        }

        let ssid = match std::str::from_utf8(&line[..ssid_end]) {
            Ok(s) => s.trim_matches(' ').to_string(),
            Err(e) => {
                warn!("skipping scan record with undecodable ssid: {e}");
                continue;
            }
        };
        if ssid.is_empty() || !seen.insert(ssid.clone()) {
            continue;
        }

        let rest = &line[ssid_end..];
        let security = SECURITY_MARKERS
            .iter()
            .any(|m| find_bytes(rest, m.as_bytes()).is_some());
        out.push(ScanEntry { ssid, security });
    }

    out.sort_by(|a, b| a.ssid.cmp(&b.ssid));
    out
}

fn find_bytes(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}
