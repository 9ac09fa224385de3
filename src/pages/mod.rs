//! Routes and the pages behind them.
//!
//! A [`Page`] owns the mounted sections of one route. Replacing the page
//! unmounts everything it owned, so sections of a route that is no longer
//! shown never tick.

mod dashboard;
mod landing;

pub use dashboard::{ActivePanel, DashboardPage, MenuItem, PanelKind};
pub use landing::{LandingPage, LandingSection};

use crate::config::Thresholds;
use crate::content::TERMS;
use crate::forms::LoginForm;
use crate::sim::{SampleReport, Simulator};

/// Top-level routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Landing,
    Terms,
    Login,
    Dashboard,
}

impl Route {
    pub const ALL: [Route; 4] = [Route::Landing, Route::Terms, Route::Login, Route::Dashboard];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Landing => "/",
            Route::Terms => "/terms",
            Route::Login => "/login",
            Route::Dashboard => "/dashboard",
        }
    }

    /// Parse a path; a trailing slash is ignored.
    pub fn from_path(path: &str) -> Option<Route> {
        let trimmed = path.trim();
        let trimmed = if trimmed.len() > 1 { trimmed.trim_end_matches('/') } else { trimmed };
        Self::ALL.into_iter().find(|r| r.path() == trimmed)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Route::Landing => "Home",
            Route::Terms => "Terms",
            Route::Login => "Login",
            Route::Dashboard => "Dashboard",
        }
    }
}

/// Scroll position through the terms text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermsPage {
    pub scroll: u16,
}

impl TermsPage {
    pub fn scroll_down(&mut self, n: u16) {
        let max = (TERMS.len() * 4) as u16;
        self.scroll = self.scroll.saturating_add(n).min(max);
    }

    pub fn scroll_up(&mut self, n: u16) {
        self.scroll = self.scroll.saturating_sub(n);
    }
}

#[derive(Debug, Clone, Default)]
pub struct LoginPage {
    pub form: LoginForm,
}

/// The page behind the current route.
#[derive(Debug)]
pub enum Page {
    Landing(Box<LandingPage>),
    Terms(TermsPage),
    Login(LoginPage),
    Dashboard(Box<DashboardPage>),
}

impl Page {
    /// Build and mount the page for `route`.
    pub fn open(route: Route, thresholds: &Thresholds, sim: &mut Simulator) -> Self {
        match route {
            Route::Landing => Page::Landing(Box::new(LandingPage::new(thresholds, sim))),
            Route::Terms => Page::Terms(TermsPage::default()),
            Route::Login => Page::Login(LoginPage::default()),
            Route::Dashboard => Page::Dashboard(Box::new(DashboardPage::new(thresholds, sim))),
        }
    }

    pub fn route(&self) -> Route {
        match self {
            Page::Landing(_) => Route::Landing,
            Page::Terms(_) => Route::Terms,
            Page::Login(_) => Route::Login,
            Page::Dashboard(_) => Route::Dashboard,
        }
    }

    /// Run every due section tick.
    pub fn advance(&mut self, sim: &mut Simulator) -> u32 {
        match self {
            Page::Landing(p) => p.advance(sim),
            Page::Dashboard(p) => p.advance(sim),
            Page::Terms(_) | Page::Login(_) => 0,
        }
    }

    pub fn unmount(&mut self) {
        match self {
            Page::Landing(p) => p.unmount(),
            Page::Dashboard(p) => p.unmount(),
            Page::Terms(_) | Page::Login(_) => {}
        }
    }

    /// Samples of every live section, keyed by section name.
    pub fn reports(&self) -> Vec<(&'static str, Vec<SampleReport>)> {
        match self {
            Page::Landing(p) => p.reports(),
            Page::Dashboard(p) => p.reports(),
            Page::Terms(_) | Page::Login(_) => Vec::new(),
        }
    }
}
