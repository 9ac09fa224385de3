//! The marketing landing page.

use crate::config::Thresholds;
use crate::forms::ContactForm;
use crate::sections::{DeviceControl, Hero, Monitoring, PredictiveEngine, Report, Testimonials};
use crate::sim::{Mounted, SampleReport, Section, Simulator};

/// Landing page blocks in scroll order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LandingSection {
    #[default]
    Hero,
    Monitoring,
    Engine,
    Devices,
    Architecture,
    UseCases,
    Resources,
    Pricing,
    Testimonials,
    Contact,
}

impl LandingSection {
    pub const ALL: [LandingSection; 10] = [
        LandingSection::Hero,
        LandingSection::Monitoring,
        LandingSection::Engine,
        LandingSection::Devices,
        LandingSection::Architecture,
        LandingSection::UseCases,
        LandingSection::Resources,
        LandingSection::Pricing,
        LandingSection::Testimonials,
        LandingSection::Contact,
    ];

    fn position(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.position() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    pub fn label(&self) -> &'static str {
        match self {
            LandingSection::Hero => "Home",
            LandingSection::Monitoring => "Monitoring",
            LandingSection::Engine => "Predictive Engine",
            LandingSection::Devices => "Device Control",
            LandingSection::Architecture => "Architecture",
            LandingSection::UseCases => "Use Cases",
            LandingSection::Resources => "Resources",
            LandingSection::Pricing => "Pricing",
            LandingSection::Testimonials => "Testimonials",
            LandingSection::Contact => "Contact",
        }
    }
}

/// Every animated landing section, mounted together.
#[derive(Debug)]
pub struct LandingPage {
    pub hero: Mounted<Hero>,
    pub monitoring: Mounted<Monitoring>,
    pub engine: Mounted<PredictiveEngine>,
    pub devices: Mounted<DeviceControl>,
    pub testimonials: Mounted<Testimonials>,
    pub focus: LandingSection,
    pub contact: ContactForm,
    /// Keys go to the contact form while set.
    pub editing: bool,
}

impl LandingPage {
    pub fn new(thresholds: &Thresholds, sim: &Simulator) -> Self {
        Self {
            hero: Mounted::mount(Hero::new(), sim),
            monitoring: Mounted::mount(Monitoring::new(thresholds), sim),
            engine: Mounted::mount(PredictiveEngine::new(thresholds), sim),
            devices: Mounted::mount(DeviceControl::new(thresholds), sim),
            testimonials: Mounted::mount(Testimonials::new(), sim),
            focus: LandingSection::default(),
            contact: ContactForm::new(),
            editing: false,
        }
    }

    pub fn advance(&mut self, sim: &mut Simulator) -> u32 {
        self.hero.advance(sim)
            + self.monitoring.advance(sim)
            + self.engine.advance(sim)
            + self.devices.advance(sim)
            + self.testimonials.advance(sim)
    }

    pub fn unmount(&mut self) {
        self.hero.unmount();
        self.monitoring.unmount();
        self.engine.unmount();
        self.devices.unmount();
        self.testimonials.unmount();
    }

    pub fn reports(&self) -> Vec<(&'static str, Vec<SampleReport>)> {
        vec![
            (self.monitoring.get().name(), self.monitoring.get().samples()),
            (self.engine.get().name(), self.engine.get().samples()),
            (self.devices.get().name(), self.devices.get().samples()),
        ]
    }
}
