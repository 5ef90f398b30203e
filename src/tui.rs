use crate::{app::App, event::EventHandler, ui};
use anyhow::Result;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::Backend};
use std::{io, panic};

pub struct Tui<B: Backend> {
    pub terminal: Terminal<B>,
    pub events: EventHandler,
}

impl<B: Backend> Tui<B> {
    pub fn new(terminal: Terminal<B>, events: EventHandler) -> Self {
        Self { terminal, events }
    }

    /// Switches to raw mode and the alternate screen. On failure whatever was
    /// already switched is undone before the error is returned.
    pub fn init(&mut self) -> Result<()> {
        enable_raw_mode()?;
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen) {
            let _ = restore_terminal();
            return Err(e.into());
        }

        let hook = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            let _ = restore_terminal();
            hook(info);
        }));

        if let Err(e) = self.terminal.hide_cursor().and_then(|_| self.terminal.clear()) {
            let _ = restore_terminal();
            return Err(e.into());
        }
        Ok(())
    }

    pub fn draw(&mut self, app: &mut App) -> Result<()> {
        self.terminal.draw(|frame| ui::render(app, frame))?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        restore_terminal()?;
        self.terminal.show_cursor()?;
        Ok(())
    }
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}
