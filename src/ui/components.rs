use crate::{
    app::{App, PasswordPrompt},
    domain::common::Theme,
    ui::theme::Palette,
};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

pub fn render_status(app: &App, frame: &mut Frame, area: Rect) {
    let Some(status) = &app.status else {
        return;
    };
    let palette = Palette::for_theme(app.theme);
    let p = Paragraph::new(status.msg.as_str()).style(palette.status(status.kind));
    frame.render_widget(p, area);
}

pub fn render_help(app: &App, frame: &mut Frame, area: Rect) {
    let palette = Palette::for_theme(app.theme);

    let keys: Vec<(String, &str)> = if app.password_prompt().is_some() {
        vec![
            ("↵".to_string(), "save"),
            ("esc".to_string(), "cancel"),
            ("^u".to_string(), "clear"),
        ]
    } else {
        vec![
            (app.keybinds.add.to_string(), "add network"),
            (app.keybinds.delete.to_string(), "delete network"),
            (app.keybinds.quit.to_string(), "quit"),
        ]
    };

    let mut spans = Vec::new();
    for (i, (key, action)) in keys.into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(", ", palette.help));
        }
        spans.push(Span::styled(key, palette.help_key));
        spans.push(Span::styled(format!(" - {action}"), palette.help));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

pub fn render_password_prompt(theme: Theme, frame: &mut Frame, area: Rect, prompt: &PasswordPrompt) {
    let palette = Palette::for_theme(theme);
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(Span::styled(
            format!(" Password for {} ", prompt.target.ssid),
            palette.password_text,
        ))
        .borders(Borders::ALL)
        .border_style(palette.password_border);

    let p = Paragraph::new(prompt.buffer.as_str())
        .style(palette.password_text)
        .block(block);
    frame.render_widget(p, area);
}

pub fn render_too_small(app: &App, frame: &mut Frame, area: Rect, min_w: u16, min_h: u16) {
    let palette = Palette::for_theme(app.theme);
    let msg = format!(
        "Terminal is too small.\nMinimum size: {}x{}\nCurrent size: {}x{}",
        min_w, min_h, area.width, area.height
    );

    let p = Paragraph::new(msg)
        .alignment(Alignment::Center)
        .style(palette.text)
        .wrap(Wrap { trim: true });
    frame.render_widget(p, area);
}
