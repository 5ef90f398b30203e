use crate::{
    domain::{
        common::{Status, StatusKind, Theme},
        network::{Network, ScanEntry, ScanRow},
    },
    keybinds::Keybinds,
    registry::NetworkRegistry,
    ui::layout::Geometry,
};
use ratatui::widgets::ListState;
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub iface: String,
    pub theme: Theme,
    pub keybinds: Keybinds,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            iface: "wlan0".to_string(),
            theme: Theme::Dark,
            keybinds: Keybinds::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordPrompt {
    pub target: ScanEntry,
    pub buffer: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Browsing,
    PasswordEntry(PasswordPrompt),
    Exit,
}

pub struct App {
    pub mode: Mode,
    pub iface: String,
    pub theme: Theme,
    pub keybinds: Keybinds,

    pub registry: NetworkRegistry,
    pub scan: Vec<ScanEntry>,
    pub rows: Vec<ScanRow>,
    pub list_state: ListState,
    pub geometry: Geometry,

    pub status: Option<Status>,
}

impl App {
    pub fn new(config: AppConfig, registry: NetworkRegistry, scan: Vec<ScanEntry>) -> Self {
        let mut app = Self {
            mode: Mode::Browsing,
            iface: config.iface,
            theme: config.theme,
            keybinds: config.keybinds,
            registry,
            scan,
            rows: Vec::new(),
            list_state: ListState::default(),
            geometry: Geometry::default(),
            status: None,
        };

        app.refresh_rows();
        select_first_if_any(&mut app.list_state, app.rows.len());
        app
    }

    pub fn running(&self) -> bool {
        self.mode != Mode::Exit
    }

    pub fn quit(&mut self) {
        self.mode = Mode::Exit;
    }

    pub fn into_registry(self) -> NetworkRegistry {
        self.registry
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.geometry = Geometry::compute(width, height);
        debug!("resized to {width}x{height}");
    }

    /// Rebuilds the visible rows from the scan list and the current registry.
    pub fn refresh_rows(&mut self) {
        self.rows = self
            .scan
            .iter()
            .map(|entry| ScanRow {
                ssid: entry.ssid.clone(),
                known: self.registry.contains(&entry.ssid),
                security: entry.security,
            })
            .collect();
        clamp_selected(&mut self.list_state, self.rows.len());
    }

    pub fn set_status(&mut self, kind: StatusKind, msg: impl Into<String>) {
        self.status = Some(Status {
            kind,
            msg: msg.into(),
        });
    }

    /// Drops an info or success status. Errors stay up until another status
    /// replaces them.
    pub fn clear_transient_status(&mut self) {
        if self.status.as_ref().is_some_and(|s| s.kind != StatusKind::Error) {
            self.status = None;
        }
    }

    pub fn selected_entry(&self) -> Option<&ScanEntry> {
        self.list_state.selected().and_then(|i| self.scan.get(i))
    }

    pub fn password_prompt(&self) -> Option<&PasswordPrompt> {
        match &self.mode {
            Mode::PasswordEntry(prompt) => Some(prompt),
            _ => None,
        }
    }

    pub fn select_next(&mut self) {
        self.move_selection(1);
    }

    pub fn select_prev(&mut self) {
        self.move_selection(-1);
    }

    pub fn half_page_down(&mut self) {
        self.move_selection((self.geometry.page_size() / 2).max(1) as isize);
    }

    pub fn half_page_up(&mut self) {
        self.move_selection(-((self.geometry.page_size() / 2).max(1) as isize));
    }

    pub fn page_down(&mut self) {
        self.move_selection(self.geometry.page_size() as isize);
    }

    pub fn page_up(&mut self) {
        self.move_selection(-(self.geometry.page_size() as isize));
    }

    pub fn select_first(&mut self) {
        if !self.rows.is_empty() {
            self.list_state.select(Some(0));
        }
    }

    pub fn select_last(&mut self) {
        if !self.rows.is_empty() {
            self.list_state.select(Some(self.rows.len() - 1));
        }
    }

    /// Remembers the selected network. Secure networks go through the
    /// password prompt first.
    pub fn add_selected(&mut self) {
        let Some(entry) = self.selected_entry().cloned() else {
            return;
        };

        if entry.security {
            self.mode = Mode::PasswordEntry(PasswordPrompt {
                target: entry,
                buffer: String::new(),
            });
            return;
        }

        self.remember(Network::open(entry.ssid));
    }

    pub fn delete_selected(&mut self) {
        let Some(ssid) = self.selected_entry().map(|e| e.ssid.clone()) else {
            return;
        };

        if self.registry.remove(&ssid) > 0 {
            info!("forgot network {ssid:?}");
            self.set_status(StatusKind::Success, format!("Forgot {ssid}"));
            self.refresh_rows();
        }
    }

    pub fn password_push(&mut self, c: char) {
        if let Mode::PasswordEntry(prompt) = &mut self.mode {
            prompt.buffer.push(c);
        }
    }

    pub fn password_backspace(&mut self) {
        if let Mode::PasswordEntry(prompt) = &mut self.mode {
            prompt.buffer.pop();
        }
    }

    pub fn password_clear(&mut self) {
        if let Mode::PasswordEntry(prompt) = &mut self.mode {
            prompt.buffer.clear();
        }
    }

    pub fn confirm_password(&mut self) {
        if !matches!(self.mode, Mode::PasswordEntry(_)) {
            return;
        }
        if let Mode::PasswordEntry(prompt) = std::mem::replace(&mut self.mode, Mode::Browsing) {
            self.remember(Network::secured(prompt.target.ssid, prompt.buffer));
        }
    }

    pub fn cancel_password(&mut self) {
        if matches!(self.mode, Mode::PasswordEntry(_)) {
            self.mode = Mode::Browsing;
        }
    }

    fn remember(&mut self, network: Network) {
        let ssid = network.ssid.clone();
        if self.registry.add(network) {
            info!("remembered network {ssid:?}");
            self.set_status(StatusKind::Success, format!("Added {ssid}"));
            self.refresh_rows();
        } else {
            self.set_status(StatusKind::Info, format!("{ssid} is already known"));
        }
    }

    fn move_selection(&mut self, delta: isize) {
        let len = self.rows.len();
        if len == 0 {
            self.list_state.select(None);
            return;
        }
        let current = self.list_state.selected().unwrap_or(0) as isize;
        let next = (current + delta).clamp(0, len as isize - 1);
        self.list_state.select(Some(next as usize));
    }
}

fn select_first_if_any(state: &mut ListState, len: usize) {
    if len == 0 {
        state.select(None);
    } else if state.selected().is_none() {
        state.select(Some(0));
    }
}

fn clamp_selected(state: &mut ListState, len: usize) {
    if len == 0 {
        state.select(None);
        return;
    }
    if let Some(idx) = state.selected() {
        state.select(Some(idx.min(len - 1)));
    }
}
