//! The demo dashboard: a sidebar and a single live panel.

use tracing::info;

use crate::config::Thresholds;
use crate::sections::{OverviewPanel, PredictivePanel, Report, TelemetryPanel};
use crate::sim::{Mounted, SampleReport, Section, Simulator};

/// Sidebar entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuItem {
    #[default]
    Overview,
    Telemetry,
    Predictive,
    DeviceControl,
    AiAnalytics,
    DeviceLogs,
    DeviceMap,
    AlertLogs,
}

impl MenuItem {
    pub const ALL: [MenuItem; 8] = [
        MenuItem::Overview,
        MenuItem::Telemetry,
        MenuItem::Predictive,
        MenuItem::DeviceControl,
        MenuItem::AiAnalytics,
        MenuItem::DeviceLogs,
        MenuItem::DeviceMap,
        MenuItem::AlertLogs,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            MenuItem::Overview => "overview",
            MenuItem::Telemetry => "telemetry",
            MenuItem::Predictive => "predictive",
            MenuItem::DeviceControl => "device-control",
            MenuItem::AiAnalytics => "ai-analytics",
            MenuItem::DeviceLogs => "device-logs",
            MenuItem::DeviceMap => "device-map",
            MenuItem::AlertLogs => "alert-logs",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuItem::Overview => "Overview",
            MenuItem::Telemetry => "Telemetry Data",
            MenuItem::Predictive => "Predictive Maintenance",
            MenuItem::DeviceControl => "Device Control",
            MenuItem::AiAnalytics => "AI Analytics",
            MenuItem::DeviceLogs => "Device Logs",
            MenuItem::DeviceMap => "Device Map",
            MenuItem::AlertLogs => "Alert Logs",
        }
    }

    /// Panel rendered for this entry. Entries without their own panel show Overview.
    pub fn panel(&self) -> PanelKind {
        match self {
            MenuItem::Telemetry => PanelKind::Telemetry,
            MenuItem::Predictive => PanelKind::Predictive,
            _ => PanelKind::Overview,
        }
    }

    fn position(self) -> usize {
        Self::ALL.iter().position(|m| *m == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.position() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelKind {
    Overview,
    Telemetry,
    Predictive,
}

/// The one panel currently mounted.
#[derive(Debug)]
pub enum ActivePanel {
    Overview(Mounted<OverviewPanel>),
    Telemetry(Mounted<TelemetryPanel>),
    Predictive(Mounted<PredictivePanel>),
}

impl ActivePanel {
    fn mount(kind: PanelKind, thresholds: &Thresholds, sim: &mut Simulator) -> Self {
        match kind {
            PanelKind::Overview => ActivePanel::Overview(Mounted::mount(OverviewPanel::new(), sim)),
            PanelKind::Telemetry => {
                let panel = TelemetryPanel::new(thresholds, sim);
                ActivePanel::Telemetry(Mounted::mount(panel, sim))
            }
            PanelKind::Predictive => {
                ActivePanel::Predictive(Mounted::mount(PredictivePanel::new(thresholds), sim))
            }
        }
    }

    pub fn kind(&self) -> PanelKind {
        match self {
            ActivePanel::Overview(_) => PanelKind::Overview,
            ActivePanel::Telemetry(_) => PanelKind::Telemetry,
            ActivePanel::Predictive(_) => PanelKind::Predictive,
        }
    }

    fn advance(&mut self, sim: &mut Simulator) -> u32 {
        match self {
            ActivePanel::Overview(p) => p.advance(sim),
            ActivePanel::Telemetry(p) => p.advance(sim),
            ActivePanel::Predictive(p) => p.advance(sim),
        }
    }

    fn unmount(&mut self) {
        match self {
            ActivePanel::Overview(p) => p.unmount(),
            ActivePanel::Telemetry(p) => p.unmount(),
            ActivePanel::Predictive(p) => p.unmount(),
        }
    }

    fn report(&self) -> (&'static str, Vec<SampleReport>) {
        match self {
            ActivePanel::Overview(p) => (p.get().name(), p.get().samples()),
            ActivePanel::Telemetry(p) => (p.get().name(), p.get().samples()),
            ActivePanel::Predictive(p) => (p.get().name(), p.get().samples()),
        }
    }
}

#[derive(Debug)]
pub struct DashboardPage {
    menu: MenuItem,
    panel: ActivePanel,
    thresholds: Thresholds,
    pub collapsed: bool,
}

impl DashboardPage {
    pub fn new(thresholds: &Thresholds, sim: &mut Simulator) -> Self {
        let menu = MenuItem::default();
        Self {
            panel: ActivePanel::mount(menu.panel(), thresholds, sim),
            menu,
            thresholds: thresholds.clone(),
            collapsed: false,
        }
    }

    pub fn menu(&self) -> MenuItem {
        self.menu
    }

    pub fn panel(&self) -> &ActivePanel {
        &self.panel
    }

    pub fn panel_mut(&mut self) -> &mut ActivePanel {
        &mut self.panel
    }

    /// Highlight `item`. The panel is remounted from its baselines only when
    /// the rendered panel changes.
    pub fn select(&mut self, item: MenuItem, sim: &mut Simulator) {
        if item == self.menu {
            return;
        }
        info!(from = self.menu.id(), to = item.id(), "dashboard panel selected");
        self.menu = item;
        if item.panel() != self.panel.kind() {
            self.panel.unmount();
            self.panel = ActivePanel::mount(item.panel(), &self.thresholds, sim);
        }
    }

    pub fn toggle_sidebar(&mut self) {
        self.collapsed = !self.collapsed;
    }

    pub fn advance(&mut self, sim: &mut Simulator) -> u32 {
        self.panel.advance(sim)
    }

    pub fn unmount(&mut self) {
        self.panel.unmount();
    }

    pub fn reports(&self) -> Vec<(&'static str, Vec<SampleReport>)> {
        vec![self.panel.report()]
    }
}
