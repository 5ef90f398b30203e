// Copyright (C) 2026 skibidiandulka

use serde::Deserialize;
use std::{
    env, fs,
    path::{Path, PathBuf},
};
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Keybinds {
    pub quit: char,
    pub up: char,
    pub down: char,
    pub add: char,
    pub delete: char,
}

impl Default for Keybinds {
    fn default() -> Self {
        Self {
            quit: 'q',
            up: 'k',
            down: 'j',
            add: 'a',
            delete: 'x',
        }
    }
}

impl Keybinds {
    /// Reads `~/.config/wpanet/keybinds.toml`, writing the bundled template
    /// there first if it does not exist. Falls back to defaults on any error.
    pub fn load() -> Self {
        let Some(path) = keybinds_path() else {
            return Self::default();
        };

        ensure_default_config_exists(&path);
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Self {
        let Ok(raw) = fs::read_to_string(path) else {
            return Self::default();
        };
        Self::from_toml(&raw)
    }

    pub fn from_toml(raw: &str) -> Self {
        let mut out = Self::default();
        let file = match toml::from_str::<KeybindsFile>(raw) {
            Ok(f) => f,
            Err(e) => {
                warn!("ignoring invalid keybinds file: {e}");
                return out;
            }
        };
        let Some(keys) = file.keys else {
            return out;
        };

        apply_override(&mut out.quit, keys.quit);
        apply_override(&mut out.up, keys.up);
        apply_override(&mut out.down, keys.down);
        apply_override(&mut out.add, keys.add);
        apply_override(&mut out.delete, keys.delete);

        debug!("keybinds: {out:?}");
        out
    }
}

#[derive(Debug, Deserialize)]
struct KeybindsFile {
    keys: Option<KeybindsPartial>,
}

#[derive(Debug, Default, Deserialize)]
struct KeybindsPartial {
    quit: Option<String>,
    up: Option<String>,
    down: Option<String>,
    add: Option<String>,
    delete: Option<String>,
}

fn keybinds_path() -> Option<PathBuf> {
    let home = env::var_os("HOME")?;
    Some(PathBuf::from(home).join(".config/wpanet/keybinds.toml"))
}

fn ensure_default_config_exists(path: &Path) {
    if path.exists() {
        return;
    }
    let Some(parent) = path.parent() else {
        return;
    };
    if fs::create_dir_all(parent).is_err() {
        return;
    }

    let _ = fs::write(path, default_config_template());
}

fn default_config_template() -> &'static str {
    include_str!("../config/keybinds.toml.example")
}

fn apply_override(target: &mut char, value: Option<String>) {
    let Some(raw) = value else {
        return;
    };
    let trimmed = raw.trim();
    let mut chars = trimmed.chars();
    let Some(c) = chars.next() else {
        return;
    };
    if chars.next().is_some() {
        return;
    }
    *target = c;
}
