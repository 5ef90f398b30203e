use crate::{
    app::App,
    ui::{components, network_list},
};
use ratatui::{Frame, layout::Rect};

const MAX_LIST_W: u16 = 80;
const MAX_LIST_H: u16 = 25;
const MIN_W: u16 = 30;
const MIN_H: u16 = 8;

/// Where each widget goes for a given terminal size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Geometry {
    pub area: Rect,
    pub list: Rect,
    pub status: Rect,
    pub help: Rect,
    pub password: Rect,
}

impl Geometry {
    /// The list is at most 80x25 and centered, with the status and key help
    /// lines right below it. The password box is 3/4 of the list width.
    pub fn compute(width: u16, height: u16) -> Self {
        let area = Rect::new(0, 0, width, height);

        let list_w = width.min(MAX_LIST_W);
        let list_h = height.saturating_sub(3).min(MAX_LIST_H);
        let x = (width - list_w) / 2;
        let y = (height - list_h) / 2;

        let list = Rect::new(x, y, list_w, list_h);
        let status = Rect::new(x, y.saturating_add(list_h), list_w, 1).intersection(area);
        let help = Rect::new(x, y.saturating_add(list_h + 1), list_w, 1).intersection(area);

        let password_w = list_w * 3 / 4;
        let password_h = 3.min(height);
        let password = Rect::new(
            (width - password_w) / 2,
            (height - password_h) / 2,
            password_w,
            password_h,
        );

        Self {
            area,
            list,
            status,
            help,
            password,
        }
    }

    pub fn is_too_small(&self) -> bool {
        self.area.width < MIN_W || self.area.height < MIN_H
    }

    /// Rows visible inside the bordered list.
    pub fn page_size(&self) -> usize {
        usize::from(self.list.height.saturating_sub(2)).max(1)
    }

    /// Columns available for row text inside the list borders.
    pub fn row_width(&self) -> usize {
        usize::from(self.list.width.saturating_sub(2))
    }
}

pub fn render(app: &mut App, frame: &mut Frame) {
    let geometry = app.geometry;
    if geometry.is_too_small() {
        components::render_too_small(app, frame, geometry.area, MIN_W, MIN_H);
        return;
    }

    network_list::render(app, frame, geometry.list);
    components::render_status(app, frame, geometry.status);
    components::render_help(app, frame, geometry.help);

    if let Some(prompt) = app.password_prompt() {
        components::render_password_prompt(app.theme, frame, geometry.password, prompt);
    }
}
