mod components;
pub mod layout;
mod network_list;
pub mod theme;

use crate::app::App;
use ratatui::Frame;

pub use network_list::format_row;

pub fn render(app: &mut App, frame: &mut Frame) {
    layout::render(app, frame);
}
