use crate::{app::App, domain::network::ScanRow, ui::theme::Palette};
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

/// Marker, one space and the `WPA` label take this many columns besides the
/// ssid.
const ROW_DECORATION_W: usize = 11;

pub fn render(app: &mut App, frame: &mut Frame, area: Rect) {
    let palette = Palette::for_theme(app.theme);
    let width = app.geometry.row_width();

    let items: Vec<ListItem> = app
        .rows
        .iter()
        .map(|row| {
            let style = if row.known { palette.known } else { palette.text };
            ListItem::new(Line::from(Span::styled(format_row(row, width), style)))
        })
        .collect();

    let title = if app.rows.is_empty() {
        format!(" No networks found on {} ", app.iface)
    } else {
        format!(" WiFi Networks ({}) ", app.iface)
    };

    let list = List::new(items)
        .block(
            Block::default()
                .title(Span::styled(title, palette.title))
                .borders(Borders::ALL)
                .border_style(palette.border),
        )
        .style(palette.text)
        .highlight_style(palette.selected);

    frame.render_stateful_widget(list, area, &mut app.list_state);
}

/// ` [+] <ssid padded> WPA` for a known secure network, `[ ]` when unknown.
pub fn format_row(row: &ScanRow, width: usize) -> String {
    let mark = if row.known { '+' } else { ' ' };
    let label = if row.security { "WPA" } else { "" };
    let ssid_w = width.saturating_sub(ROW_DECORATION_W);
    format!(" [{mark}] {:<ssid_w$} {label}", row.ssid)
        .trim_end()
        .to_string()
}
