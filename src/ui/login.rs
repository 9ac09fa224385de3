use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Clear, Paragraph},
    Frame,
};

use crate::app::App;
use crate::pages::Page;

use super::common::centered;

/// Render the sign-in card.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let Page::Login(page) = &app.page else {
        return;
    };
    let theme = &app.theme;
    let form = &page.form;

    let values = [form.email().to_string(), form.password_display()];
    let mut lines = vec![
        Line::from(Span::styled("Welcome back", theme.header)),
        Line::from(Span::styled("Sign in to your IoT dashboard", theme.muted)),
        Line::from(""),
    ];
    for (i, (field, value)) in form.fields.iter().zip(values.iter()).enumerate() {
        let focused = i == form.fields.focus();
        let style = if focused { theme.selected } else { Style::default() };
        lines.push(Line::from(Span::styled(field.label, theme.tab_active)));
        lines.push(Line::from(Span::styled(
            format!(" {}{} ", value, if focused { "█" } else { "" }),
            style,
        )));
        lines.push(Line::from(""));
    }
    let check = |on: bool| if on { "[x]" } else { "[ ]" };
    lines.push(Line::from(format!("{} Remember me (Ctrl+R)", check(form.remember_me))));
    lines.push(Line::from(format!("{} Show password (Ctrl+P)", check(form.show_password))));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Demo: any non-empty email and password",
        theme.muted,
    )));

    let card = centered(area, 48, 16);
    frame.render_widget(Clear, card);
    frame.render_widget(Paragraph::new(lines).block(theme.block(" Sign In ")), card);
}
