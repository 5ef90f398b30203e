//! Writes the registry back into the config document.
//!
//! The file is not locked while the session is open: edits made to it by
//! someone else in the meantime are overwritten by the save.

use crate::{config::document::ConfigDocument, error::Result, registry::NetworkRegistry};
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    Unchanged,
    Changed,
}

/// Regenerates the document from `registry` and writes it only when the
/// content differs from what was loaded.
pub fn sync(document: &ConfigDocument, registry: &NetworkRegistry) -> Result<SyncOutcome> {
    let content = document.render(registry);
    if content == document.original() {
        info!("{} unchanged, skipping write", document.path().display());
        return Ok(SyncOutcome::Unchanged);
    }

    document.write_atomic(&content)?;
    info!(
        "{} rewritten with {} networks",
        document.path().display(),
        registry.len()
    );
    Ok(SyncOutcome::Changed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::document::MARKER, domain::network::Network};
    use std::fs;

    #[test]
    fn empty_registry_on_file_without_marker_appends_marker() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wpa_supplicant.conf");
        fs::write(&path, "ctrl_interface=/var/run/wpa_supplicant\n").unwrap();

        let doc = ConfigDocument::load(&path).unwrap();
        let outcome = sync(&doc, &NetworkRegistry::new()).unwrap();

        assert_eq!(outcome, SyncOutcome::Changed);
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            format!("ctrl_interface=/var/run/wpa_supplicant\n{MARKER}\n")
        );
    }

    #[test]
    fn second_sync_is_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wpa_supplicant.conf");
        fs::write(&path, "# mine\n").unwrap();

        let registry = NetworkRegistry::from(vec![
            Network::secured("Home", "pw"),
            Network::open("Cafe"),
        ]);
        let doc = ConfigDocument::load(&path).unwrap();
        assert_eq!(sync(&doc, &registry).unwrap(), SyncOutcome::Changed);

        let reloaded = ConfigDocument::load(&path).unwrap();
        let again = NetworkRegistry::from(reloaded.networks().to_vec());
        assert_eq!(sync(&reloaded, &again).unwrap(), SyncOutcome::Unchanged);
    }

    #[test]
    fn unchanged_sync_does_not_touch_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wpa_supplicant.conf");
        let text = format!("{MARKER}\n");
        fs::write(&path, &text).unwrap();

        let doc = ConfigDocument::load(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(sync(&doc, &NetworkRegistry::new()).unwrap(), SyncOutcome::Unchanged);
        assert!(!path.exists());
    }

    #[test]
    fn non_utf8_preamble_round_trips_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wpa_supplicant.conf");
        let mut bytes = b"# caf\xe9 latin-1 comment\nctrl_interface=/var/run/wpa_supplicant\n".to_vec();
        bytes.extend_from_slice(format!("{MARKER}\nnetwork={{\n    ssid=\"Cafe\"\n    key_mgmt=NONE\n}}\n\n").as_bytes());
        fs::write(&path, &bytes).unwrap();

        let doc = ConfigDocument::load(&path).unwrap();
        let registry = NetworkRegistry::from(doc.networks().to_vec());
        assert_eq!(sync(&doc, &registry).unwrap(), SyncOutcome::Unchanged);

        let mut registry = registry;
        registry.add(Network::open("Lab"));
        assert_eq!(sync(&doc, &registry).unwrap(), SyncOutcome::Changed);
        assert!(fs::read(&path).unwrap().starts_with(b"# caf\xe9 latin-1 comment\n"));
    }
}
