//! # ragentech-console
//!
//! A terminal rendition of the Ragentech marketing site and demo dashboard.
//! Every number on screen is synthetic: hard-coded baselines jittered by
//! bounded random deltas on fixed intervals, then classified into status
//! labels by configurable thresholds.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                         Application                          │
//! │  ┌─────────┐    ┌──────────┐    ┌──────────┐    ┌─────────┐  │
//! │  │  app    │───▶│  pages   │───▶│    ui    │───▶│Terminal │  │
//! │  │ (state) │    │ (routes) │    │(rendering)    │         │  │
//! │  └────┬────┘    └────┬─────┘    └──────────┘    └─────────┘  │
//! │       │              │                                       │
//! │       ▼              ▼                                       │
//! │  ┌─────────┐    ┌──────────┐                                 │
//! │  │ events  │    │ sections │◀── Mounted<S> / Feed<S>         │
//! │  │ (keys)  │    │ (state)  │                                 │
//! │  └─────────┘    └────┬─────┘                                 │
//! │                      ▼                                       │
//! │                 ┌──────────┐                                 │
//! │                 │   sim    │◀── Clock + Entropy              │
//! │                 └──────────┘                                 │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! - **[`sim`]**: Tick arithmetic, clamps, threshold classification, timers
//!   and the injectable [`Simulator`]
//! - **[`sections`]**: Landing sections and dashboard panels
//! - **[`pages`]**: Routes and the sections each one mounts
//! - **[`content`]**: Immutable copy, plans, testimonials and baselines
//! - **[`forms`]**: Contact and login forms
//! - **[`config`]**: Thresholds, seed and theme from TOML and environment
//! - **[`ui`]**: Terminal rendering with ratatui
//!
//! ## Usage
//!
//! ### As a CLI tool
//!
//! ```bash
//! # Interactive console starting on the dashboard
//! ragentech --route /dashboard
//!
//! # Reproducible headless snapshot after 10 ticks of simulated time
//! ragentech --seed 7 --export state.json --ticks 10
//!
//! # Stream monitoring samples as NDJSON
//! ragentech --stream --ticks 5
//! ```
//!
//! ### As a library
//!
//! ```
//! use std::time::Duration;
//! use ragentech_console::{App, Route, Settings, Simulator};
//! use ragentech_console::sim::{ManualClock, SeededEntropy};
//! use ragentech_console::ui::Theme;
//!
//! let clock = ManualClock::new();
//! let sim = Simulator::new(Box::new(clock.clone()), Box::new(SeededEntropy::new(7)));
//! let mut app = App::new(Settings::default(), sim, Route::Landing, Theme::dark());
//!
//! clock.advance(Duration::from_secs(6));
//! assert!(app.tick() > 0);
//! ```

pub mod app;
pub mod config;
pub mod content;
pub mod events;
pub mod forms;
pub mod pages;
pub mod sections;
pub mod sim;
pub mod ui;

// Re-export main types for convenience
pub use app::App;
pub use config::{ConfigError, Settings, ThemeMode, Thresholds};
pub use forms::{ContactForm, FormError, LoginForm};
pub use pages::{Page, Route};
pub use sim::{MetricSample, Simulator};
