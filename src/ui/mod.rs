//! Terminal rendering.
//!
//! Every screen shares one layout: header, route tabs, the page body and a
//! status bar. Overlays (help) are drawn last.

pub mod common;
pub mod dashboard;
pub mod landing;
pub mod login;
pub mod terms;
pub mod theme;

pub use theme::Theme;

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::pages::Route;

/// Minimum terminal size for usable display.
pub const MIN_WIDTH: u16 = 80;
pub const MIN_HEIGHT: u16 = 20;

/// Draw one frame.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        let msg = format!(
            "Terminal too small: {}x{}\nMinimum: {}x{}\n\nResize to continue",
            area.width, area.height, MIN_WIDTH, MIN_HEIGHT
        );
        let paragraph = Paragraph::new(msg)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Yellow));
        let centered = Rect::new(0, (area.height / 2).saturating_sub(2), area.width, 5u16.min(area.height));
        frame.render_widget(paragraph, centered);
        return;
    }

    let chunks = Layout::vertical([
        Constraint::Length(1), // Header bar
        Constraint::Length(1), // Route tabs
        Constraint::Min(8),    // Page
        Constraint::Length(1), // Status bar
    ])
    .split(area);

    common::render_header(frame, app, chunks[0]);
    common::render_tabs(frame, app, chunks[1]);

    match app.route() {
        Route::Landing => landing::render(frame, app, chunks[2]),
        Route::Terms => terms::render(frame, app, chunks[2]),
        Route::Login => login::render(frame, app, chunks[2]),
        Route::Dashboard => dashboard::render(frame, app, chunks[2]),
    }

    common::render_status_bar(frame, app, chunks[3]);

    if app.show_help {
        common::render_help(frame, app, area);
    }
}

/// Horizontal fill bar of `width` cells for `value` out of `max`.
pub fn bar(value: f64, max: f64, width: usize) -> String {
    let ratio = if max > 0.0 { (value / max).clamp(0.0, 1.0) } else { 0.0 };
    let filled = (ratio * width as f64).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;
    use crate::config::Settings;
    use crate::pages::{MenuItem, Page};
    use crate::sim::{FixedEntropy, ManualClock, Simulator};

    fn app(route: Route) -> App {
        let sim = Simulator::new(Box::new(ManualClock::new()), Box::new(FixedEntropy::new(0.5)));
        App::new(Settings::default(), sim, route, Theme::dark())
    }

    fn draw(app: &App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_bar() {
        assert_eq!(bar(50.0, 100.0, 10), "█████░░░░░");
        assert_eq!(bar(150.0, 100.0, 4), "████");
        assert_eq!(bar(0.0, 100.0, 4), "░░░░");
    }

    #[test]
    fn test_every_route_renders() {
        for route in Route::ALL {
            let screen = draw(&app(route), 120, 40);
            assert!(screen.contains("RAGENTECH"), "{:?}", route);
        }
    }

    #[test]
    fn test_landing_shows_tagline() {
        let screen = draw(&app(Route::Landing), 120, 40);
        assert!(screen.contains("AI-Powered IoT Management"));
    }

    #[test]
    fn test_every_landing_section_renders() {
        let mut app = app(Route::Landing);
        for _ in 0..crate::pages::LandingSection::ALL.len() {
            if let Page::Landing(p) = &mut app.page {
                p.focus = p.focus.next();
            }
            draw(&app, 120, 40);
        }
    }

    fn focus(app: &mut App, section: crate::pages::LandingSection) {
        if let Page::Landing(p) = &mut app.page {
            p.focus = section;
        }
    }

    #[test]
    fn test_resources_and_footer_render() {
        use crate::pages::LandingSection;

        let mut app = app(Route::Landing);
        focus(&mut app, LandingSection::Resources);
        let screen = draw(&app, 120, 40);
        assert!(screen.contains("AI Content Resource Hub"));
        assert!(screen.contains("Latest AI-Generated Insights"));

        focus(&mut app, LandingSection::Devices);
        assert!(draw(&app, 120, 40).contains("79% avg health"));

        focus(&mut app, LandingSection::Contact);
        assert!(draw(&app, 120, 40).contains("All rights reserved."));
    }

    #[test]
    fn test_dashboard_panels_render() {
        let mut app = app(Route::Dashboard);
        assert!(draw(&app, 120, 40).contains("Devices Online"));
        app.select_menu(MenuItem::Telemetry);
        assert!(draw(&app, 120, 40).contains("Current Values"));
        app.select_menu(MenuItem::Predictive);
        let screen = draw(&app, 120, 40);
        assert!(screen.contains("Failure Predictions"));
        assert!(screen.contains("Recommended Actions"));
        assert!(screen.contains("Schedule immediate bearing replacement"));
        assert!(!screen.contains("Maintenance Schedule"));
    }

    #[test]
    fn test_small_terminal_message() {
        let screen = draw(&app(Route::Landing), 40, 10);
        assert!(screen.contains("Terminal too small"));
    }

    #[test]
    fn test_help_overlay() {
        let mut app = app(Route::Terms);
        app.toggle_help();
        assert!(draw(&app, 120, 40).contains("Keyboard Shortcuts"));
    }
}
