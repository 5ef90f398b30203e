use crate::app::{App, Mode};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub fn handle_key_events(key_event: KeyEvent, app: &mut App) {
    match app.mode {
        Mode::Browsing => handle_browsing(key_event, app),
        Mode::PasswordEntry(_) => handle_password(key_event, app),
        Mode::Exit => {}
    }
}

fn handle_browsing(key_event: KeyEvent, app: &mut App) {
    app.clear_transient_status();
    let ctrl = key_event.modifiers.contains(KeyModifiers::CONTROL);
    let keys = app.keybinds;

    match key_event.code {
        KeyCode::Char('c') if ctrl => app.quit(),
        KeyCode::Char('d') if ctrl => app.half_page_down(),
        KeyCode::Char('u') if ctrl => app.half_page_up(),
        KeyCode::Char('f') if ctrl => app.page_down(),
        KeyCode::Char('b') if ctrl => app.page_up(),
        _ if ctrl => {}

        KeyCode::Char(c) if c == keys.quit => app.quit(),
        KeyCode::Char(c) if c == keys.down => app.select_next(),
        KeyCode::Char(c) if c == keys.up => app.select_prev(),
        KeyCode::Char(c) if c == keys.add => app.add_selected(),
        KeyCode::Char(c) if c == keys.delete => app.delete_selected(),

        KeyCode::Down => app.select_next(),
        KeyCode::Up => app.select_prev(),
        KeyCode::PageDown => app.page_down(),
        KeyCode::PageUp => app.page_up(),
        KeyCode::Home => app.select_first(),
        KeyCode::End => app.select_last(),

        _ => {}
    }
}

fn handle_password(key_event: KeyEvent, app: &mut App) {
    let ctrl = key_event.modifiers.contains(KeyModifiers::CONTROL);

    match key_event.code {
        KeyCode::Char('c') if ctrl => app.cancel_password(),
        KeyCode::Char('u') if ctrl => app.password_clear(),
        KeyCode::Char(_) if ctrl => {}
        KeyCode::Char(c) => app.password_push(c),
        KeyCode::Backspace => app.password_backspace(),
        KeyCode::Enter => app.confirm_password(),
        KeyCode::Esc => app.cancel_password(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        app::AppConfig,
        domain::{
            common::StatusKind,
            network::{Network, ScanEntry},
        },
        registry::NetworkRegistry,
    };

    fn app() -> App {
        let scan = vec![ScanEntry::new("Cafe", false), ScanEntry::new("Home", true)];
        let mut app = App::new(AppConfig::default(), NetworkRegistry::new(), scan);
        app.resize(80, 24);
        app
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_key_events(KeyEvent::new(code, KeyModifiers::NONE), app);
    }

    fn ctrl(app: &mut App, c: char) {
        handle_key_events(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL), app);
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn q_and_ctrl_c_quit_while_browsing() {
        let mut a = app();
        press(&mut a, KeyCode::Char('q'));
        assert_eq!(a.mode, Mode::Exit);

        let mut a = app();
        ctrl(&mut a, 'c');
        assert_eq!(a.mode, Mode::Exit);
    }

    #[test]
    fn vim_and_arrow_navigation() {
        let mut a = app();
        press(&mut a, KeyCode::Char('j'));
        assert_eq!(a.list_state.selected(), Some(1));
        press(&mut a, KeyCode::Up);
        assert_eq!(a.list_state.selected(), Some(0));
        press(&mut a, KeyCode::End);
        assert_eq!(a.list_state.selected(), Some(1));
        ctrl(&mut a, 'u');
        assert_eq!(a.list_state.selected(), Some(0));
    }

    #[test]
    fn add_secure_network_with_typed_password() {
        let mut a = app();
        press(&mut a, KeyCode::Down);
        press(&mut a, KeyCode::Char('a'));
        type_str(&mut a, "q x j");
        press(&mut a, KeyCode::Backspace);
        press(&mut a, KeyCode::Enter);

        assert_eq!(a.mode, Mode::Browsing);
        assert_eq!(a.registry.get("Home"), Some(&Network::secured("Home", "q x ")));
    }

    #[test]
    fn ctrl_u_clears_and_esc_cancels_password() {
        let mut a = app();
        press(&mut a, KeyCode::End);
        press(&mut a, KeyCode::Char('a'));
        type_str(&mut a, "secret");
        ctrl(&mut a, 'u');
        assert_eq!(a.password_prompt().map(|p| p.buffer.as_str()), Some(""));

        press(&mut a, KeyCode::Esc);
        assert_eq!(a.mode, Mode::Browsing);
        assert!(a.registry.is_empty());
    }

    #[test]
    fn ctrl_c_in_prompt_cancels_instead_of_quitting() {
        let mut a = app();
        press(&mut a, KeyCode::End);
        press(&mut a, KeyCode::Char('a'));
        ctrl(&mut a, 'c');
        assert_eq!(a.mode, Mode::Browsing);
    }

    #[test]
    fn x_deletes_and_custom_keybinds_apply() {
        let mut a = app();
        press(&mut a, KeyCode::Char('a'));
        assert!(a.registry.contains("Cafe"));
        press(&mut a, KeyCode::Char('x'));
        assert!(!a.registry.contains("Cafe"));

        a.keybinds.add = 'n';
        press(&mut a, KeyCode::Char('a'));
        assert!(a.registry.is_empty());
        press(&mut a, KeyCode::Char('n'));
        assert!(a.registry.contains("Cafe"));
    }

    #[test]
    fn scan_error_survives_navigation_until_replaced() {
        let mut a = app();
        a.set_status(StatusKind::Error, "Scan failed: ifconfig: no such interface");

        press(&mut a, KeyCode::Down);
        press(&mut a, KeyCode::Home);
        ctrl(&mut a, 'd');
        assert_eq!(a.status.as_ref().map(|s| s.kind), Some(StatusKind::Error));

        press(&mut a, KeyCode::Char('a'));
        assert_eq!(a.status.as_ref().map(|s| s.kind), Some(StatusKind::Success));
        press(&mut a, KeyCode::Down);
        assert!(a.status.is_none());
    }
}
