use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};

use crate::app::App;
use crate::forms::FormError;
use crate::pages::{LandingSection, Page, Route};

/// File written by the export key.
pub const EXPORT_FILE: &str = "ragentech_export.json";

/// Poll for events with a timeout
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Handle a key event
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return;
    }

    // If help is shown, any key closes it
    if app.show_help {
        app.show_help = false;
        return;
    }

    // Text entry swallows plain keys
    match &app.page {
        Page::Login(_) => {
            handle_login_input(app, key);
            return;
        }
        Page::Landing(p) if p.editing => {
            handle_contact_input(app, key);
            return;
        }
        _ => {}
    }

    match key.code {
        KeyCode::Char('q') => app.quit(),
        KeyCode::Char('?') => app.toggle_help(),

        KeyCode::Char('1') => app.navigate(Route::Landing),
        KeyCode::Char('2') => app.navigate(Route::Terms),
        KeyCode::Char('3') => app.navigate(Route::Login),
        KeyCode::Char('4') => app.navigate(Route::Dashboard),

        KeyCode::Char('e') => {
            let export_path = PathBuf::from(EXPORT_FILE);
            match app.export_state(&export_path) {
                Ok(()) => {
                    app.set_status_message(format!("Exported to {}", export_path.display()));
                }
                Err(e) => {
                    app.set_status_message(format!("Export failed: {}", e));
                }
            }
        }

        _ => match app.route() {
            Route::Landing => handle_landing_key(app, key),
            Route::Terms => handle_terms_key(app, key),
            Route::Dashboard => handle_dashboard_key(app, key),
            Route::Login => {}
        },
    }
}

fn handle_landing_key(app: &mut App, key: KeyEvent) {
    let Page::Landing(page) = &mut app.page else {
        return;
    };
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => page.focus = page.focus.prev(),
        KeyCode::Down | KeyCode::Char('j') => page.focus = page.focus.next(),
        KeyCode::Home => page.focus = LandingSection::Hero,
        KeyCode::End => page.focus = LandingSection::Contact,

        KeyCode::Left | KeyCode::Char('h') => page.testimonials.get_mut().prev(),
        KeyCode::Right | KeyCode::Char('l') => page.testimonials.get_mut().next(),

        KeyCode::Char('t') => page.engine.get_mut().toggle_tab(),
        KeyCode::Char('r') => page.devices.get_mut().cycle_region(),
        KeyCode::Char('c') => page.devices.get_mut().cycle_category(),

        KeyCode::Enter => {
            page.focus = LandingSection::Contact;
            page.editing = true;
        }
        _ => {}
    }
}

/// Handle key input while the contact form is being edited
fn handle_contact_input(app: &mut App, key: KeyEvent) {
    if key.code == KeyCode::Enter {
        if let Some(Err(FormError::MissingField(label))) = app.submit_contact() {
            if let Page::Landing(page) = &mut app.page {
                page.contact.fields.focus_label(label);
            }
        }
        return;
    }
    let Page::Landing(page) = &mut app.page else {
        return;
    };
    let form = &mut page.contact;
    match key.code {
        KeyCode::Esc => page.editing = false,
        KeyCode::Tab | KeyCode::Down => form.fields.focus_next(),
        KeyCode::BackTab | KeyCode::Up => form.fields.focus_prev(),
        KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => form.toggle_captcha(),
        KeyCode::Backspace => form.fields.pop(),
        KeyCode::Char(c) => form.fields.push(c),
        _ => {}
    }
}

/// Handle key input on the login page
fn handle_login_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.navigate(Route::Landing);
            return;
        }
        KeyCode::Enter => {
            app.login();
            return;
        }
        _ => {}
    }
    let Page::Login(page) = &mut app.page else {
        return;
    };
    let form = &mut page.form;
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Tab | KeyCode::Down => form.fields.focus_next(),
        KeyCode::BackTab | KeyCode::Up => form.fields.focus_prev(),
        KeyCode::Char('r') if ctrl => form.remember_me = !form.remember_me,
        KeyCode::Char('p') if ctrl => form.show_password = !form.show_password,
        KeyCode::Backspace => form.fields.pop(),
        KeyCode::Char(c) => form.fields.push(c),
        _ => {}
    }
}

fn handle_terms_key(app: &mut App, key: KeyEvent) {
    if key.code == KeyCode::Esc || key.code == KeyCode::Backspace {
        app.navigate(Route::Landing);
        return;
    }
    let Page::Terms(page) = &mut app.page else {
        return;
    };
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => page.scroll_up(1),
        KeyCode::Down | KeyCode::Char('j') => page.scroll_down(1),
        KeyCode::PageUp => page.scroll_up(10),
        KeyCode::PageDown => page.scroll_down(10),
        KeyCode::Home => page.scroll = 0,
        _ => {}
    }
}

fn handle_dashboard_key(app: &mut App, key: KeyEvent) {
    let Page::Dashboard(dash) = &mut app.page else {
        return;
    };
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            let item = dash.menu().prev();
            dash.select(item, &mut app.sim);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            let item = dash.menu().next();
            dash.select(item, &mut app.sim);
        }
        KeyCode::Char('b') => dash.toggle_sidebar(),
        KeyCode::Char('t') => {
            if let crate::pages::ActivePanel::Telemetry(p) = dash.panel_mut() {
                p.get_mut().cycle_time_range();
            }
        }
        KeyCode::Char('m') => {
            if let crate::pages::ActivePanel::Telemetry(p) = dash.panel_mut() {
                p.get_mut().cycle_metric_filter();
            }
        }
        KeyCode::Char('o') => app.logout(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::pages::{MenuItem, PanelKind};
    use crate::sim::{FixedEntropy, ManualClock, Simulator};
    use crate::ui::Theme;

    fn app(route: Route) -> App {
        let sim = Simulator::new(Box::new(ManualClock::new()), Box::new(FixedEntropy::new(0.5)));
        App::new(Settings::default(), sim, route, Theme::dark())
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_key_event(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn ctrl(app: &mut App, c: char) {
        handle_key_event(app, KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL));
    }

    fn focused(app: &App) -> usize {
        let Page::Landing(page) = &app.page else { panic!("expected landing") };
        page.contact.fields.focus()
    }

    fn type_str(app: &mut App, s: &str) {
        s.chars().for_each(|c| press(app, KeyCode::Char(c)));
    }

    #[test]
    fn test_number_keys_switch_routes() {
        let mut app = app(Route::Landing);
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.route(), Route::Terms);
        press(&mut app, KeyCode::Char('4'));
        assert_eq!(app.route(), Route::Dashboard);
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.running);
    }

    #[test]
    fn test_help_closes_on_any_key() {
        let mut app = app(Route::Landing);
        press(&mut app, KeyCode::Char('?'));
        assert!(app.show_help);
        press(&mut app, KeyCode::Char('2'));
        assert!(!app.show_help);
        assert_eq!(app.route(), Route::Landing);
    }

    #[test]
    fn test_login_typing_does_not_trigger_shortcuts() {
        let mut app = app(Route::Login);
        type_str(&mut app, "q1@x.io");
        press(&mut app, KeyCode::Tab);
        type_str(&mut app, "pw");
        assert!(app.running);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.route(), Route::Dashboard);
    }

    #[test]
    fn test_login_empty_stays() {
        let mut app = app(Route::Login);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.route(), Route::Login);
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.route(), Route::Landing);
    }

    #[test]
    fn test_contact_form_flow() {
        let mut app = app(Route::Landing);
        press(&mut app, KeyCode::Enter);
        type_str(&mut app, "Ada");
        press(&mut app, KeyCode::Tab);
        type_str(&mut app, "ada@example.com");
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        type_str(&mut app, "Quote please");

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.get_status_message(), Some("Please verify that you're not a robot."));

        ctrl(&mut app, 'r');
        press(&mut app, KeyCode::Enter);
        let Page::Landing(page) = &app.page else { panic!("expected landing") };
        assert!(!page.editing);
        assert!(page.contact.fields.iter().all(|f| f.value.is_empty()));
    }

    #[test]
    fn test_contact_submit_focuses_missing_field() {
        let mut app = app(Route::Landing);
        press(&mut app, KeyCode::Enter);
        type_str(&mut app, "Ada");
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        assert_eq!(focused(&app), 3);

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.get_status_message(), Some("Email is required"));
        assert_eq!(focused(&app), 1);
    }

    #[test]
    fn test_dashboard_menu_keys() {
        let mut app = app(Route::Dashboard);
        press(&mut app, KeyCode::Down);
        let Page::Dashboard(dash) = &app.page else { panic!("expected dashboard") };
        assert_eq!(dash.menu(), MenuItem::Telemetry);
        assert_eq!(dash.panel().kind(), PanelKind::Telemetry);

        press(&mut app, KeyCode::Char('m'));
        press(&mut app, KeyCode::Char('b'));
        let Page::Dashboard(dash) = &app.page else { panic!("expected dashboard") };
        assert!(dash.collapsed);

        press(&mut app, KeyCode::Char('o'));
        assert_eq!(app.route(), Route::Landing);
    }

    #[test]
    fn test_landing_keys() {
        let mut app = app(Route::Landing);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Char('r'));
        let Page::Landing(page) = &app.page else { panic!("expected landing") };
        assert_eq!(page.focus, LandingSection::Monitoring);
        assert_eq!(page.testimonials.get().index(), 1);
        assert_eq!(page.devices.get().region(), "Building A");
    }

    #[test]
    fn test_ctrl_c_quits_while_typing() {
        let mut app = app(Route::Login);
        ctrl(&mut app, 'c');
        assert!(!app.running);
    }
}
