use crate::domain::common::{StatusKind, Theme};
use ratatui::style::{Color, Style};

#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub border: Style,
    pub title: Style,
    pub text: Style,
    pub selected: Style,
    pub known: Style,
    pub help: Style,
    pub help_key: Style,
    pub password_text: Style,
    pub password_border: Style,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self {
                border: Style::default().fg(Color::White),
                title: Style::default().fg(Color::Black).bg(Color::White),
                text: Style::default().fg(Color::White),
                selected: Style::default().fg(Color::Black).bg(Color::White),
                known: Style::default().fg(Color::LightGreen),
                help: Style::default().fg(Color::White),
                help_key: Style::default().fg(Color::Green),
                password_text: Style::default().fg(Color::LightGreen),
                password_border: Style::default().fg(Color::Green),
            },
            Theme::Light => Self {
                border: Style::default().fg(Color::Black),
                title: Style::default().fg(Color::White).bg(Color::Black),
                text: Style::default().fg(Color::Black),
                selected: Style::default().fg(Color::White).bg(Color::Black),
                known: Style::default().fg(Color::Green),
                help: Style::default().fg(Color::Black),
                help_key: Style::default().fg(Color::Green),
                password_text: Style::default().fg(Color::Green),
                password_border: Style::default().fg(Color::Green),
            },
        }
    }

    pub fn status(&self, kind: StatusKind) -> Style {
        match kind {
            StatusKind::Success => Style::default().fg(Color::Green),
            StatusKind::Error => Style::default().fg(Color::Red),
            StatusKind::Info => Style::default().fg(Color::Cyan),
        }
    }
}
