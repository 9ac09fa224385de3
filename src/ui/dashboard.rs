//! Dashboard rendering: sidebar plus the active panel.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Cell, List, ListItem, Paragraph, Row, Table},
    Frame,
};

use crate::app::App;
use crate::content::AlertKind;
use crate::pages::{ActivePanel, DashboardPage, MenuItem, Page};
use crate::sections::{group_thousands, OverviewPanel, PredictivePanel, TelemetryPanel};

use super::{bar, Theme};

const SIDEBAR_WIDTH: u16 = 26;
const SIDEBAR_COLLAPSED: u16 = 6;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let Page::Dashboard(dash) = &app.page else {
        return;
    };
    let theme = &app.theme;

    let width = if dash.collapsed { SIDEBAR_COLLAPSED } else { SIDEBAR_WIDTH };
    let chunks = Layout::horizontal([Constraint::Length(width), Constraint::Min(20)]).split(area);

    render_sidebar(frame, dash, theme, chunks[0]);
    match dash.panel() {
        ActivePanel::Overview(p) => render_overview(frame, p.get(), theme, chunks[1]),
        ActivePanel::Telemetry(p) => render_telemetry(frame, p.get(), theme, chunks[1]),
        ActivePanel::Predictive(p) => render_predictive(frame, p.get(), theme, chunks[1]),
    }
}

fn render_sidebar(frame: &mut Frame, dash: &DashboardPage, theme: &Theme, area: Rect) {
    let items: Vec<ListItem> = MenuItem::ALL
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let text = if dash.collapsed {
                format!(" {}", i + 1)
            } else {
                format!(" {}", item.label())
            };
            let style = if *item == dash.menu() { theme.selected } else { Style::default() };
            ListItem::new(text).style(style)
        })
        .collect();

    let title = if dash.collapsed { "" } else { " IoT Dashboard " };
    frame.render_widget(List::new(items).block(theme.block(title)), area);
}

fn stat_card(frame: &mut Frame, theme: &Theme, area: Rect, title: &str, value: String, caption: String) {
    let lines = vec![
        Line::from(Span::styled(value, Style::default().fg(theme.accent).add_modifier(Modifier::BOLD))),
        Line::from(Span::styled(caption, theme.muted)),
    ];
    frame.render_widget(Paragraph::new(lines).block(theme.block(format!(" {} ", title))), area);
}

fn render_overview(frame: &mut Frame, panel: &OverviewPanel, theme: &Theme, area: Rect) {
    let rows = Layout::vertical([Constraint::Length(4), Constraint::Min(6), Constraint::Length(5)]).split(area);
    let cards = Layout::horizontal([Constraint::Ratio(1, 4); 4]).split(rows[0]);

    let c = panel.counters();
    stat_card(
        frame,
        theme,
        cards[0],
        "Devices Online",
        group_thousands(c.devices_online),
        format!("of {}", group_thousands(c.devices_total)),
    );
    stat_card(frame, theme, cards[1], "Active Alerts", c.active_alerts.to_string(), "open".to_string());
    stat_card(frame, theme, cards[2], "System Uptime", format!("{:.1}%", c.uptime), "last 30 days".to_string());
    stat_card(
        frame,
        theme,
        cards[3],
        "Data Points",
        group_thousands(c.data_points),
        format!("energy saved {:.1}%", c.energy_saved),
    );

    let realtime: Vec<Row> = panel
        .realtime()
        .iter()
        .map(|s| Row::new(vec![s.label().to_string(), s.display(), s.unit().to_string()]))
        .collect();
    let table = Table::new(realtime, [Constraint::Length(14), Constraint::Length(10), Constraint::Min(6)])
        .header(Row::new(vec!["Metric", "Value", "Unit"]).style(theme.header))
        .block(theme.block(" Real-time Telemetry "));
    frame.render_widget(table, rows[1]);

    let alerts: Vec<ListItem> = panel
        .alerts()
        .iter()
        .map(|a| {
            let color = match a.kind {
                AlertKind::Warning => theme.warning,
                AlertKind::Info => theme.accent,
                AlertKind::Success => theme.healthy,
            };
            ListItem::new(Line::from(vec![
                Span::styled("● ", Style::default().fg(color)),
                Span::raw(a.message),
                Span::styled(format!("  {} · {}", a.device, a.time), theme.muted),
            ]))
        })
        .collect();
    frame.render_widget(List::new(alerts).block(theme.block(" Recent Alerts ")), rows[2]);
}

fn render_telemetry(frame: &mut Frame, panel: &TelemetryPanel, theme: &Theme, area: Rect) {
    let rows = Layout::vertical([Constraint::Length(1), Constraint::Length(9), Constraint::Min(4)]).split(area);

    let filters = Line::from(vec![
        Span::styled(" Time range: ", theme.muted),
        Span::styled(panel.time_range(), theme.tab_active),
        Span::styled("   Metric: ", theme.muted),
        Span::styled(panel.metric_filter(), theme.tab_active),
    ]);
    frame.render_widget(Paragraph::new(filters), rows[0]);

    let current: Vec<Row> = panel
        .current()
        .map(|s| {
            let status = s.status.map(|st| st.label()).unwrap_or("-");
            let style = s.status.map(|st| theme.status_style(st)).unwrap_or_default();
            Row::new(vec![
                Cell::from(s.label()),
                Cell::from(s.display()),
                Cell::from(s.unit()),
                Cell::from(Span::styled(status, style)),
            ])
        })
        .collect();
    let table = Table::new(
        current,
        [
            Constraint::Length(14),
            Constraint::Length(10),
            Constraint::Length(7),
            Constraint::Min(8),
        ],
    )
    .header(Row::new(vec!["Metric", "Value", "Unit", "Status"]).style(theme.header))
    .block(theme.block(" Current Values "));
    frame.render_widget(table, rows[1]);

    let charts: Vec<Row> = panel
        .charts()
        .map(|(key, series)| {
            let fmt = |v: Option<f64>| v.map(|v| format!("{:.1}", v)).unwrap_or_else(|| "-".into());
            Row::new(vec![
                Cell::from(*key),
                Cell::from(Span::styled(series.sparkline(), Style::default().fg(theme.accent))),
                Cell::from(fmt(series.latest())),
                Cell::from(format!("{}–{}", fmt(series.min()), fmt(series.max()))),
            ])
        })
        .collect();
    let table = Table::new(
        charts,
        [
            Constraint::Length(12),
            Constraint::Length(22),
            Constraint::Length(8),
            Constraint::Min(14),
        ],
    )
    .header(Row::new(vec!["Series", "Trend", "Latest", "Range"]).style(theme.header))
    .block(theme.block(" Trends "));
    frame.render_widget(table, rows[2]);
}

fn render_predictive(frame: &mut Frame, panel: &PredictivePanel, theme: &Theme, area: Rect) {
    let rows = Layout::vertical([Constraint::Length(4), Constraint::Min(6), Constraint::Length(6)]).split(area);

    let m = panel.metrics();
    let model = vec![
        Line::from(vec![
            Span::styled(" Accuracy ", theme.muted),
            Span::styled(format!("{}%", panel.accuracy().display()), theme.tab_active),
            Span::styled("   Predictions ", theme.muted),
            Span::raw(group_thousands(m.predictions_made)),
            Span::styled("   Savings ", theme.muted),
            Span::raw(format!("${}", group_thousands(m.cost_savings))),
        ]),
        Line::from(vec![
            Span::styled(" Uptime ", theme.muted),
            Span::raw(format!("{:.1}%", m.uptime)),
            Span::styled("   False positives ", theme.muted),
            Span::raw(format!("{:.1}%", m.false_positives)),
            Span::styled("   Model ", theme.muted),
            Span::raw(format!("v{}", m.model_version)),
        ]),
    ];
    frame.render_widget(Paragraph::new(model).block(theme.block(" AI Model ")), rows[0]);

    let predictions: Vec<Row> = panel
        .predictions()
        .iter()
        .map(|p| {
            let confidence = p.confidence.value;
            Row::new(vec![
                Cell::from(p.seed.equipment),
                Cell::from(p.seed.prediction),
                Cell::from(Span::styled(
                    format!("{} {}%", bar(confidence, 100.0, 8), p.confidence.display()),
                    theme.tone_style(panel.band(confidence)),
                )),
                Cell::from(p.seed.timeframe),
                Cell::from(p.seed.severity.label()),
            ])
        })
        .collect();
    let table = Table::new(
        predictions,
        [
            Constraint::Min(28),
            Constraint::Length(18),
            Constraint::Length(13),
            Constraint::Length(9),
            Constraint::Length(8),
        ],
    )
    .header(
        Row::new(vec!["Equipment", "Prediction", "Confidence", "When", "Severity"])
            .style(theme.header),
    )
    .block(theme.block(" Failure Predictions "));
    frame.render_widget(table, rows[1]);

    let actions: Vec<ListItem> = panel
        .predictions()
        .iter()
        .map(|p| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("{}: ", p.seed.equipment), theme.header),
                Span::raw(p.seed.recommendation),
                Span::styled(format!("  cost impact {}", p.seed.cost_impact), theme.muted),
            ]))
        })
        .collect();
    frame.render_widget(List::new(actions).block(theme.block(" Recommended Actions ")), rows[2]);
}
