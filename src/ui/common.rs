//! Common UI components shared across routes.
//!
//! This module contains the header bar, route tabs, status bar, and help overlay.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Tabs},
    Frame,
};

use crate::app::App;
use crate::content::BRAND;
use crate::pages::{Page, Route};

/// Render the header bar: brand, current path and simulated uptime.
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let elapsed = app.sim.now().as_secs();
    let mut spans = vec![
        Span::styled(
            format!(" {} ", BRAND.to_uppercase()),
            Style::default().fg(app.theme.highlight).add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!("| {} ", app.route().path())),
        Span::styled(
            format!("| {:02}:{:02}:{:02}", elapsed / 3600, (elapsed / 60) % 60, elapsed % 60),
            app.theme.muted,
        ),
    ];
    if let Page::Landing(landing) = &app.page {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            landing.hero.get().tagline(),
            Style::default().fg(app.theme.accent),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Render the route tabs, highlighting the active route.
pub fn render_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = Route::ALL
        .iter()
        .enumerate()
        .map(|(i, r)| Line::from(format!(" {}:{} ", i + 1, r.label())))
        .collect();

    let selected = Route::ALL.iter().position(|r| *r == app.route()).unwrap_or(0);

    let tabs = Tabs::new(titles)
        .select(selected)
        .style(app.theme.tab_inactive)
        .highlight_style(app.theme.tab_active)
        .divider("|");

    frame.render_widget(tabs, area);
}

/// Context-sensitive key hints for the current page.
fn controls(app: &App) -> &'static str {
    match &app.page {
        Page::Landing(p) if p.editing => {
            "Type to edit | Tab:next field Ctrl+R:captcha Enter:send Esc:done"
        }
        Page::Landing(_) => "↑/↓:section ←/→:cycle t:tab r/c:filter Enter:edit form ?:help q:quit",
        Page::Terms(_) => "↑/↓:scroll PgUp/PgDn:page Esc:home ?:help q:quit",
        Page::Login(_) => "Type credentials | Tab:next field Enter:sign in Esc:home",
        Page::Dashboard(_) => "↑/↓:menu b:sidebar t/m:filters o:logout ?:help q:quit",
    }
}

/// Render the status bar at the bottom.
///
/// Temporary status messages take precedence over key hints.
pub fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    if let Some(msg) = app.get_status_message() {
        let paragraph =
            Paragraph::new(format!(" {} ", msg)).style(Style::default().fg(app.theme.highlight));
        frame.render_widget(paragraph, area);
        return;
    }

    let status = format!(" {} | {}", app.route().label(), controls(app));
    let paragraph = Paragraph::new(status).style(Style::default().add_modifier(Modifier::DIM));
    frame.render_widget(paragraph, area);
}

/// Center a `width` x `height` box inside `area`.
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width.saturating_sub(4));
    let height = height.min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

/// Render the help overlay with keyboard shortcuts.
pub fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let help_text = vec![
        Line::from(vec![Span::styled("Keyboard Shortcuts", app.theme.header)]),
        Line::from(""),
        Line::from(vec![Span::styled(" Global", bold)]),
        Line::from("  1-4         Home / Terms / Login / Dashboard"),
        Line::from("  e           Export state to JSON"),
        Line::from("  ?           Toggle help"),
        Line::from("  q           Quit"),
        Line::from(""),
        Line::from(vec![Span::styled(" Home", bold)]),
        Line::from("  ↑/↓ j/k     Previous/next section"),
        Line::from("  ←/→ h/l     Cycle testimonials"),
        Line::from("  t           Toggle predictions/maintenance"),
        Line::from("  r / c       Cycle region / category filter"),
        Line::from("  Enter       Edit the contact form"),
        Line::from(""),
        Line::from(vec![Span::styled(" Dashboard", bold)]),
        Line::from("  ↑/↓ j/k     Move through the menu"),
        Line::from("  b           Collapse sidebar"),
        Line::from("  t / m       Time range / metric filter"),
        Line::from("  o           Log out"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Press any key to close",
            Style::default().add_modifier(Modifier::DIM),
        )]),
    ];

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.highlight));

    let paragraph = Paragraph::new(help_text).block(block);
    let help_area = centered(area, 52, 25);

    frame.render_widget(Clear, help_area);
    frame.render_widget(paragraph, help_area);
}
