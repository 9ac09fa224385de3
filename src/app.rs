//! Application state and navigation logic.

use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::Result;
use tracing::info;

use crate::config::Settings;
use crate::forms::FormError;
use crate::pages::{MenuItem, Page, Route};
use crate::sim::Simulator;
use crate::ui::Theme;

/// How long a status bar message stays visible.
const STATUS_TTL: Duration = Duration::from_secs(3);

/// Main application state.
pub struct App {
    pub running: bool,
    pub show_help: bool,

    pub settings: Settings,
    pub sim: Simulator,
    pub page: Page,

    // UI
    pub theme: Theme,

    // Status message (temporary feedback)
    pub status_message: Option<(String, Instant)>,
}

impl App {
    /// Create the app and mount the sections of `route`.
    pub fn new(settings: Settings, mut sim: Simulator, route: Route, theme: Theme) -> Self {
        let page = Page::open(route, &settings.thresholds, &mut sim);
        info!(route = route.path(), "opened");
        Self {
            running: true,
            show_help: false,
            settings,
            sim,
            page,
            theme,
            status_message: None,
        }
    }

    pub fn route(&self) -> Route {
        self.page.route()
    }

    /// Switch routes. The current page's sections are unmounted before the
    /// next page mounts its own.
    pub fn navigate(&mut self, route: Route) {
        if route == self.route() {
            return;
        }
        info!(from = self.route().path(), to = route.path(), "navigate");
        self.page.unmount();
        self.page = Page::open(route, &self.settings.thresholds, &mut self.sim);
    }

    /// Run every section tick that came due since the last call.
    pub fn tick(&mut self) -> u32 {
        self.page.advance(&mut self.sim)
    }

    /// Submit the login form; success lands on the dashboard.
    pub fn login(&mut self) {
        let Page::Login(login) = &self.page else {
            return;
        };
        match login.form.submit() {
            Ok(()) => self.navigate(Route::Dashboard),
            Err(e) => self.set_status_message(format!("{} (any non-empty credentials work)", e)),
        }
    }

    pub fn logout(&mut self) {
        info!("signed out");
        self.navigate(Route::Landing);
    }

    /// Submit the landing page contact form.
    pub fn submit_contact(&mut self) -> Option<Result<(), FormError>> {
        let Page::Landing(landing) = &mut self.page else {
            return None;
        };
        let result = landing.contact.submit().map(|_| ());
        if result.is_ok() {
            landing.editing = false;
        }
        match &result {
            Ok(()) => self.set_status_message("Message sent. We'll be in touch soon.".to_string()),
            Err(e) => self.set_status_message(e.to_string()),
        }
        Some(result)
    }

    /// Highlight a dashboard menu entry.
    pub fn select_menu(&mut self, item: MenuItem) {
        if let Page::Dashboard(dash) = &mut self.page {
            dash.select(item, &mut self.sim);
        }
    }

    /// Set a temporary status message that will be shown for a few seconds.
    pub fn set_status_message(&mut self, message: String) {
        self.status_message = Some((message, Instant::now()));
    }

    /// Get the current status message if it hasn't expired.
    pub fn get_status_message(&self) -> Option<&str> {
        if let Some((msg, time)) = &self.status_message {
            if time.elapsed() < STATUS_TTL {
                return Some(msg);
            }
        }
        None
    }

    /// Toggle the help overlay.
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Quit the application.
    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Current route and the samples of every live section.
    pub fn snapshot(&self) -> serde_json::Value {
        let mut export = serde_json::Map::new();
        export.insert("route".to_string(), serde_json::json!(self.route().path()));
        export.insert(
            "elapsed_ms".to_string(),
            serde_json::json!(self.sim.now().as_millis() as u64),
        );

        let mut sections = serde_json::Map::new();
        for (name, samples) in self.page.reports() {
            sections.insert(name.to_string(), serde_json::json!(samples));
        }
        export.insert("sections".to_string(), serde_json::Value::Object(sections));

        serde_json::Value::Object(export)
    }

    /// Export current state to a JSON file.
    pub fn export_state(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.snapshot())?;
        std::fs::write(path, json)?;
        info!(path = %path.display(), "exported state");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::PanelKind;
    use crate::sim::{FixedEntropy, ManualClock};

    fn create_test_app(route: Route) -> (App, ManualClock) {
        let clock = ManualClock::new();
        let sim = Simulator::new(Box::new(clock.clone()), Box::new(FixedEntropy::new(0.5)));
        (App::new(Settings::default(), sim, route, Theme::dark()), clock)
    }

    #[test]
    fn test_app_initial_state() {
        let (app, _) = create_test_app(Route::Landing);
        assert!(app.running);
        assert!(!app.show_help);
        assert_eq!(app.route(), Route::Landing);
        assert!(app.get_status_message().is_none());
    }

    #[test]
    fn test_quit_and_help() {
        let (mut app, _) = create_test_app(Route::Landing);
        app.toggle_help();
        assert!(app.show_help);
        app.quit();
        assert!(!app.running);
    }

    #[test]
    fn test_navigation_tears_down_sections() {
        let (mut app, clock) = create_test_app(Route::Landing);
        clock.advance(Duration::from_millis(2000));
        assert_eq!(app.tick(), 1);

        app.navigate(Route::Terms);
        clock.advance(Duration::from_secs(30));
        assert_eq!(app.tick(), 0);

        // Returning mounts fresh sections with a fresh schedule
        app.navigate(Route::Landing);
        assert_eq!(app.tick(), 0);
        clock.advance(Duration::from_millis(2000));
        assert_eq!(app.tick(), 1);
    }

    #[test]
    fn test_login_flow() {
        let (mut app, _) = create_test_app(Route::Login);
        app.login();
        assert_eq!(app.route(), Route::Login);
        assert!(app.get_status_message().unwrap().contains("Email is required"));

        if let Page::Login(login) = &mut app.page {
            login.form.fill("ops@ragentech.com", "hunter2");
        }
        app.login();
        assert_eq!(app.route(), Route::Dashboard);

        app.logout();
        assert_eq!(app.route(), Route::Landing);
    }

    #[test]
    fn test_select_menu_only_on_dashboard() {
        let (mut app, _) = create_test_app(Route::Dashboard);
        app.select_menu(MenuItem::Telemetry);
        let Page::Dashboard(dash) = &app.page else { panic!("expected dashboard") };
        assert_eq!(dash.panel().kind(), PanelKind::Telemetry);
    }

    #[test]
    fn test_contact_submit_needs_captcha() {
        let (mut app, _) = create_test_app(Route::Landing);
        let result = app.submit_contact();
        assert!(matches!(result, Some(Err(FormError::MissingField("Name")))));
        assert_eq!(app.get_status_message(), Some("Name is required"));

        let (mut app, _) = create_test_app(Route::Terms);
        assert!(app.submit_contact().is_none());
    }

    #[test]
    fn test_status_message() {
        let (mut app, _) = create_test_app(Route::Landing);
        app.set_status_message("Test message".to_string());
        assert_eq!(app.get_status_message(), Some("Test message"));
    }

    #[test]
    fn test_export_state() {
        let (mut app, clock) = create_test_app(Route::Landing);
        clock.advance(Duration::from_millis(4000));
        app.tick();

        let file = tempfile::NamedTempFile::new().unwrap();
        app.export_state(file.path()).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(file.path()).unwrap()).unwrap();
        assert_eq!(json["route"], "/");
        assert_eq!(json["elapsed_ms"], 4000);
        let monitoring = json["sections"]["monitoring"].as_array().unwrap();
        assert_eq!(monitoring.len(), 4);
        assert_eq!(monitoring[0]["display"], "220.0");
        assert_eq!(monitoring[0]["status"], "Normal");
    }
}
