/// A network the supplicant is told to join. `ssid` is the identity key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Network {
    pub ssid: String,
    pub psk: String,
    pub security: bool,
}

impl Network {
    pub fn open(ssid: impl Into<String>) -> Self {
        Self {
            ssid: ssid.into(),
            psk: String::new(),
            security: false,
        }
    }

    pub fn secured(ssid: impl Into<String>, psk: impl Into<String>) -> Self {
        Self {
            ssid: ssid.into(),
            psk: psk.into(),
            security: true,
        }
    }
}

/// One network seen by the most recent scan. Never written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanEntry {
    pub ssid: String,
    pub security: bool,
}

impl ScanEntry {
    pub fn new(ssid: impl Into<String>, security: bool) -> Self {
        Self {
            ssid: ssid.into(),
            security,
        }
    }
}

/// A rendered line of the network list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanRow {
    pub ssid: String,
    pub known: bool,
    pub security: bool,
}
