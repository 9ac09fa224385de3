use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::content::{DEFINITIONS, TERMS};
use crate::pages::Page;

/// Render the scrollable terms and conditions.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let Page::Terms(page) = &app.page else {
        return;
    };
    let theme = &app.theme;

    let mut lines = vec![
        Line::from(Span::styled("Interpretation and Definitions", theme.header)),
        Line::from(""),
    ];
    for (term, meaning) in DEFINITIONS {
        lines.push(Line::from(vec![
            Span::styled(format!("  {}: ", term), theme.tab_active),
            Span::raw(*meaning),
        ]));
    }
    for (title, paragraphs) in TERMS {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(*title, theme.header)));
        lines.extend(paragraphs.iter().map(|p| Line::from(format!("  {}", p))));
    }

    let paragraph = Paragraph::new(lines)
        .block(theme.block(" Terms and Conditions "))
        .wrap(Wrap { trim: false })
        .scroll((page.scroll, 0));
    frame.render_widget(paragraph, area);
}
