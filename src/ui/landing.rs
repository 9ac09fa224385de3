//! Landing page rendering.
//!
//! One block of the page is shown at a time; the section strip above it
//! marks which one.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, Table, Tabs, Wrap},
    Frame,
};

use crate::app::App;
use crate::content::{
    ARCHITECTURE_FLOW, ARCHITECTURE_LAYERS, BLOG_POSTS, BRAND, CONTACT_INFO, COPYRIGHT,
    FOOTER_ADDRESS, HERO_BLURB, HERO_STATS, PLANS, QUICK_LINKS, RESOURCES, SOCIAL_LINKS,
    TESTIMONIALS, USE_CASES,
};
use crate::pages::{LandingPage, LandingSection, Page};
use crate::sections::EngineTab;

use super::{bar, Theme};

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let Page::Landing(page) = &app.page else {
        return;
    };
    let theme = &app.theme;

    let chunks = Layout::vertical([Constraint::Length(1), Constraint::Min(4)]).split(area);

    let titles: Vec<Line> = LandingSection::ALL.iter().map(|s| Line::from(s.label())).collect();
    let selected = LandingSection::ALL.iter().position(|s| *s == page.focus).unwrap_or(0);
    let strip = Tabs::new(titles)
        .select(selected)
        .style(theme.muted)
        .highlight_style(theme.tab_active)
        .divider("·");
    frame.render_widget(strip, chunks[0]);

    let body = chunks[1];
    match page.focus {
        LandingSection::Hero => render_hero(frame, page, theme, body),
        LandingSection::Monitoring => render_monitoring(frame, page, theme, body),
        LandingSection::Engine => render_engine(frame, page, theme, body),
        LandingSection::Devices => render_devices(frame, page, theme, body),
        LandingSection::Architecture => render_architecture(frame, theme, body),
        LandingSection::UseCases => render_use_cases(frame, theme, body),
        LandingSection::Resources => render_resources(frame, theme, body),
        LandingSection::Pricing => render_pricing(frame, theme, body),
        LandingSection::Testimonials => render_testimonials(frame, page, theme, body),
        LandingSection::Contact => render_contact(frame, page, theme, body),
    }
}

fn render_hero(frame: &mut Frame, page: &LandingPage, theme: &Theme, area: Rect) {
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            page.hero.get().tagline(),
            Style::default().fg(theme.highlight).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(HERO_BLURB),
        Line::from(""),
    ];
    lines.push(Line::from(
        HERO_STATS
            .iter()
            .flat_map(|(label, value)| {
                [
                    Span::styled(format!("{} ", value), Style::default().fg(theme.accent)),
                    Span::styled(format!("{}   ", label), theme.muted),
                ]
            })
            .collect::<Vec<_>>(),
    ));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press 3 to log in to the demo dashboard",
        theme.muted,
    )));

    let paragraph = Paragraph::new(lines)
        .block(theme.block(" Ragentech "))
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

fn render_monitoring(frame: &mut Frame, page: &LandingPage, theme: &Theme, area: Rect) {
    let header = Row::new(vec!["Metric", "Value", "Unit", "Status"]).style(theme.header);
    let rows: Vec<Row> = page
        .monitoring
        .get()
        .gauges()
        .map(|g| {
            let status = g.status.map(|s| s.label()).unwrap_or("-");
            let style = g.status.map(|s| theme.status_style(s)).unwrap_or_default();
            Row::new(vec![
                Cell::from(g.label()),
                Cell::from(g.display()),
                Cell::from(g.unit()),
                Cell::from(Span::styled(status, style)),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(14),
            Constraint::Length(10),
            Constraint::Length(6),
            Constraint::Min(10),
        ],
    )
    .header(header)
    .block(theme.block(" Real-time IoT Monitoring "));
    frame.render_widget(table, area);
}

fn render_engine(frame: &mut Frame, page: &LandingPage, theme: &Theme, area: Rect) {
    let engine = page.engine.get();
    let chunks = Layout::vertical([Constraint::Length(1), Constraint::Min(3)]).split(area);

    let tabs = Tabs::new(vec![
        Line::from(EngineTab::Predictions.label()),
        Line::from(EngineTab::Maintenance.label()),
    ])
    .select(match engine.tab() {
        EngineTab::Predictions => 0,
        EngineTab::Maintenance => 1,
    })
    .style(theme.tab_inactive)
    .highlight_style(theme.tab_active)
    .divider("|");
    frame.render_widget(tabs, chunks[0]);

    let table = match engine.tab() {
        EngineTab::Predictions => {
            let rows: Vec<Row> = engine
                .predictions()
                .iter()
                .map(|p| {
                    let confidence = p.confidence.value;
                    Row::new(vec![
                        Cell::from(p.seed.equipment),
                        Cell::from(p.seed.prediction),
                        Cell::from(Span::styled(
                            format!("{}%", p.confidence.display()),
                            theme.tone_style(engine.band(confidence)),
                        )),
                        Cell::from(p.seed.timeframe),
                        Cell::from(p.seed.severity.label()),
                    ])
                })
                .collect();
            Table::new(
                rows,
                [
                    Constraint::Min(18),
                    Constraint::Length(18),
                    Constraint::Length(11),
                    Constraint::Length(10),
                    Constraint::Length(8),
                ],
            )
            .header(
                Row::new(vec!["Equipment", "Prediction", "Confidence", "Timeframe", "Severity"])
                    .style(theme.header),
            )
        }
        EngineTab::Maintenance => {
            let rows: Vec<Row> = crate::content::MAINTENANCE_QUEUE
                .iter()
                .map(|t| Row::new(vec![t.task, t.priority, t.estimated_time, t.cost_savings]))
                .collect();
            Table::new(
                rows,
                [
                    Constraint::Min(30),
                    Constraint::Length(9),
                    Constraint::Length(9),
                    Constraint::Length(10),
                ],
            )
            .header(Row::new(vec!["Task", "Priority", "Time", "Savings"]).style(theme.header))
        }
    };
    frame.render_widget(table.block(theme.block(" Predictive Engine ")), chunks[1]);
}

fn render_devices(frame: &mut Frame, page: &LandingPage, theme: &Theme, area: Rect) {
    let control = page.devices.get();
    let chunks = Layout::vertical([Constraint::Min(4), Constraint::Length(3)]).split(area);
    let rows: Vec<Row> = control
        .filtered()
        .map(|d| {
            let health = d.health.value;
            let style = theme.tone_style(control.band(health));
            Row::new(vec![
                Cell::from(d.seed.name),
                Cell::from(d.seed.location),
                Cell::from(d.seed.state.label()),
                Cell::from(Span::styled(format!("{} {:>3}%", bar(health, 100.0, 10), d.health.display()), style)),
                Cell::from(Span::styled(d.seed.last_update, theme.muted)),
            ])
        })
        .collect();

    let title = format!(
        " System Control | region: {} | category: {} ",
        control.region(),
        control.category()
    );
    let table = Table::new(
        rows,
        [
            Constraint::Min(24),
            Constraint::Length(22),
            Constraint::Length(8),
            Constraint::Length(16),
            Constraint::Length(11),
        ],
    )
    .header(Row::new(vec!["Device", "Location", "Status", "Health", "Updated"]).style(theme.header))
    .block(theme.block(title));
    frame.render_widget(table, chunks[0]);

    let summary = control.summary();
    let stats = Line::from(vec![
        Span::styled(format!(" {} ", summary.online), Style::default().fg(theme.healthy)),
        Span::styled("online   ", theme.muted),
        Span::styled(format!("{} ", summary.warning), Style::default().fg(theme.warning)),
        Span::styled("warning   ", theme.muted),
        Span::styled(format!("{} ", summary.offline), Style::default().fg(theme.critical)),
        Span::styled("offline   ", theme.muted),
        Span::styled(format!("{}% ", summary.average_health), Style::default().fg(theme.accent)),
        Span::styled("avg health", theme.muted),
    ]);
    frame.render_widget(Paragraph::new(stats).block(theme.block(" Overall Statistics ")), chunks[1]);
}

fn render_architecture(frame: &mut Frame, theme: &Theme, area: Rect) {
    let mut lines: Vec<Line> = ARCHITECTURE_LAYERS
        .iter()
        .rev()
        .map(|(title, desc)| {
            Line::from(vec![
                Span::styled(format!("  ▣ {:<20}", title), Style::default().fg(theme.accent)),
                Span::styled(*desc, theme.muted),
            ])
        })
        .collect();
    lines.push(Line::from(""));
    for (i, (title, desc)) in ARCHITECTURE_FLOW.iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(format!("  {}. {} ", i + 1, title), theme.header),
            Span::raw(*desc),
        ]));
    }
    let paragraph = Paragraph::new(lines)
        .block(theme.block(" System Architecture "))
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn render_use_cases(frame: &mut Frame, theme: &Theme, area: Rect) {
    let mut lines = Vec::new();
    for case in USE_CASES {
        lines.push(Line::from(vec![
            Span::styled(case.title, theme.header),
            Span::styled(format!("  {}", case.subtitle), theme.muted),
        ]));
        lines.push(Line::from(format!("  {}", case.description)));
        lines.push(Line::from(""));
    }
    let paragraph = Paragraph::new(lines)
        .block(theme.block(" Use Cases "))
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn render_resources(frame: &mut Frame, theme: &Theme, area: Rect) {
    let chunks = Layout::vertical([
        Constraint::Length(RESOURCES.len() as u16 * 3 + 2),
        Constraint::Min(4),
    ])
    .split(area);

    let mut lines = Vec::new();
    for r in RESOURCES {
        lines.push(Line::from(vec![
            Span::styled(format!("[{}] ", r.category), Style::default().fg(theme.accent)),
            Span::styled(r.title, theme.header),
        ]));
        lines.push(Line::from(format!("  {}", r.description)));
        lines.push(Line::from(Span::styled(
            format!("  {} · {} · {} downloads · {}", r.author, r.read_time, r.downloads, r.kind.label()),
            theme.muted,
        )));
    }
    frame.render_widget(
        Paragraph::new(lines)
            .block(theme.block(" AI Content Resource Hub "))
            .wrap(Wrap { trim: false }),
        chunks[0],
    );

    let posts: Vec<Line> = BLOG_POSTS
        .iter()
        .flat_map(|p| {
            [
                Line::from(vec![
                    Span::styled(p.title, theme.header),
                    Span::styled(format!("  {} · {}", p.category, p.published), theme.muted),
                ]),
                Line::from(format!("  {}", p.summary)),
            ]
        })
        .collect();
    frame.render_widget(
        Paragraph::new(posts)
            .block(theme.block(" Latest AI-Generated Insights "))
            .wrap(Wrap { trim: false }),
        chunks[1],
    );
}

fn render_pricing(frame: &mut Frame, theme: &Theme, area: Rect) {
    let columns = Layout::horizontal(PLANS.iter().map(|_| Constraint::Ratio(1, PLANS.len() as u32)))
        .split(area);
    for (plan, column) in PLANS.iter().zip(columns.iter()) {
        let mut lines = vec![
            Line::from(Span::styled(
                plan.price.to_string(),
                Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(plan.description, theme.muted)),
            Line::from(""),
        ];
        lines.extend(plan.features.iter().map(|f| Line::from(format!("✓ {}", f))));

        let title = if plan.popular {
            format!(" {} ★ Most Popular ", plan.name)
        } else {
            format!(" {} ", plan.name)
        };
        let mut block = theme.block(title);
        if plan.popular {
            block = block.border_style(Style::default().fg(theme.highlight));
        }
        let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, *column);
    }
}

fn render_testimonials(frame: &mut Frame, page: &LandingPage, theme: &Theme, area: Rect) {
    let carousel = page.testimonials.get();
    let t = carousel.current();
    let lines = vec![
        Line::from(Span::styled("★".repeat(t.rating as usize), Style::default().fg(theme.warning))),
        Line::from(""),
        Line::from(format!("\"{}\"", t.quote)),
        Line::from(""),
        Line::from(vec![
            Span::styled(t.name, theme.header),
            Span::styled(format!(", {} at {}", t.position, t.company), theme.muted),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled(t.improvement, Style::default().fg(theme.healthy)),
            Span::raw(format!("  |  {}  |  {}", t.timeframe, t.devices)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            format!("◀ {}/{} ▶", carousel.index() + 1, TESTIMONIALS.len()),
            theme.muted,
        )),
    ];
    let paragraph = Paragraph::new(lines)
        .block(theme.block(" What Our Clients Say "))
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

fn render_contact(frame: &mut Frame, page: &LandingPage, theme: &Theme, area: Rect) {
    let rows = Layout::vertical([Constraint::Min(10), Constraint::Length(6)]).split(area);
    render_footer(frame, theme, rows[1]);

    let columns = Layout::horizontal([Constraint::Percentage(35), Constraint::Percentage(65)]).split(rows[0]);

    let info: Vec<Line> = CONTACT_INFO
        .iter()
        .flat_map(|(title, details, sub)| {
            [
                Line::from(Span::styled(*title, theme.header)),
                Line::from(format!("  {}", details)),
                Line::from(Span::styled(format!("  {}", sub), theme.muted)),
                Line::from(""),
            ]
        })
        .collect();
    frame.render_widget(
        Paragraph::new(info).block(theme.block(" Get In Touch ")),
        columns[0],
    );

    let form = &page.contact;
    let mut lines = Vec::new();
    for (i, field) in form.fields.iter().enumerate() {
        let focused = page.editing && i == form.fields.focus();
        let marker = if focused { "▶ " } else { "  " };
        let required = if field.required { "*" } else { "" };
        let style = if focused { theme.selected } else { Style::default() };
        lines.push(Line::from(vec![
            Span::raw(marker),
            Span::styled(format!("{}{}: ", field.label, required), theme.header),
            Span::styled(format!("{}{}", field.value, if focused { "█" } else { "" }), style),
        ]));
    }
    lines.push(Line::from(""));
    let check = if form.captcha_verified() { "[x]" } else { "[ ]" };
    lines.push(Line::from(vec![
        Span::raw(format!("  {} I'm not a robot  ", check)),
        Span::styled(format!("site key {}", form.site_key()), theme.muted),
    ]));
    lines.push(Line::from(""));
    let hint = if page.editing {
        "Enter to send, Ctrl+R toggles the captcha, Esc to stop editing"
    } else {
        "Press Enter to fill in the form"
    };
    lines.push(Line::from(Span::styled(hint, theme.muted)));

    frame.render_widget(
        Paragraph::new(lines).block(theme.block(" Contact Us ")).wrap(Wrap { trim: false }),
        columns[1],
    );
}

fn render_footer(frame: &mut Frame, theme: &Theme, area: Rect) {
    let links: Vec<Span> = QUICK_LINKS
        .iter()
        .flat_map(|(label, target)| {
            [Span::raw(format!("{} ", label)), Span::styled(format!("({})   ", target), theme.muted)]
        })
        .collect();
    let social: Vec<Span> = SOCIAL_LINKS
        .iter()
        .flat_map(|(network, url)| {
            [Span::styled(format!("{} ", network), theme.header), Span::styled(format!("{}  ", url), theme.muted)]
        })
        .collect();
    let lines = vec![
        Line::from(vec![
            Span::raw(FOOTER_ADDRESS),
            Span::styled(format!("   {}", COPYRIGHT), theme.muted),
        ]),
        Line::from(links),
        Line::from(social),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .block(theme.block(format!(" {} ", BRAND)))
            .wrap(Wrap { trim: true }),
        area,
    );
}
