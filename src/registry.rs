use crate::domain::network::Network;
use std::collections::HashSet;

/// Known networks in insertion order, keyed by ssid.
#[derive(Debug, Clone, Default)]
pub struct NetworkRegistry {
    networks: Vec<Network>,
    ssids: HashSet<String>,
}

impl NetworkRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `network` unless its ssid is already known. The existing entry
    /// always wins; returns whether anything was added.
    pub fn add(&mut self, network: Network) -> bool {
        if !self.ssids.insert(network.ssid.clone()) {
            return false;
        }
        self.networks.push(network);
        true
    }

    /// Removes every entry with this ssid and returns how many were dropped.
    pub fn remove(&mut self, ssid: &str) -> usize {
        if !self.ssids.remove(ssid) {
            return 0;
        }
        let before = self.networks.len();
        self.networks.retain(|n| n.ssid != ssid);
        before - self.networks.len()
    }

    pub fn contains(&self, ssid: &str) -> bool {
        self.ssids.contains(ssid)
    }

    pub fn get(&self, ssid: &str) -> Option<&Network> {
        if !self.contains(ssid) {
            return None;
        }
        self.networks.iter().find(|n| n.ssid == ssid)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Network> {
        self.networks.iter()
    }

    pub fn networks(&self) -> &[Network] {
        &self.networks
    }

    pub fn len(&self) -> usize {
        self.networks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.networks.is_empty()
    }
}

impl From<Vec<Network>> for NetworkRegistry {
    fn from(networks: Vec<Network>) -> Self {
        let mut registry = Self::new();
        for n in networks {
            registry.add(n);
        }
        registry
    }
}

impl<'a> IntoIterator for &'a NetworkRegistry {
    type Item = &'a Network;
    type IntoIter = std::slice::Iter<'a, Network>;

    fn into_iter(self) -> Self::IntoIter {
        self.networks.iter()
    }
}
