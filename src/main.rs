use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::Event,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;
use tracing_subscriber::EnvFilter;

use ragentech_console::events;
use ragentech_console::sections::{Monitoring, Report};
use ragentech_console::sim::{Entropy, Feed, ManualClock, SeededEntropy, Simulator, SystemClock};
use ragentech_console::ui::{self, Theme};
use ragentech_console::{App, Route, Settings, ThemeMode};

/// Simulated time covered by one `--ticks` step in export mode.
const EXPORT_STEP: Duration = Duration::from_secs(1);

/// How long to wait for input before running due ticks and redrawing.
const FRAME: Duration = Duration::from_millis(100);

#[derive(Parser, Debug)]
#[command(name = "ragentech")]
#[command(about = "Terminal demo of the Ragentech IoT site and dashboard, driven by synthetic telemetry")]
struct Args {
    /// TOML settings file (thresholds, seed, theme)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Route to open: /, /terms, /login or /dashboard
    #[arg(short, long, default_value = "/")]
    route: String,

    /// Seed for the random draws; overrides the settings file
    #[arg(long)]
    seed: Option<u64>,

    /// Color theme; overrides the settings file
    #[arg(long, value_enum)]
    theme: Option<ThemeMode>,

    /// Write logs to this file while the interactive UI is running
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Export a snapshot after --ticks simulated seconds and exit
    #[arg(short, long, conflicts_with = "stream")]
    export: Option<PathBuf>,

    /// Print monitoring samples as NDJSON, one line per update (--ticks lines, 0 = until Ctrl+C)
    #[arg(long)]
    stream: bool,

    /// Simulated seconds for --export, or number of lines for --stream
    #[arg(long, default_value = "10")]
    ticks: u32,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let headless = args.export.is_some() || args.stream;
    init_tracing(args.log_file.as_deref(), headless)?;

    let mut settings = Settings::load(args.config.as_deref())?;
    if args.seed.is_some() {
        settings.seed = args.seed;
    }
    if let Some(theme) = args.theme {
        settings.theme = theme;
    }

    let route = Route::from_path(&args.route)
        .with_context(|| format!("unknown route {:?} (expected /, /terms, /login or /dashboard)", args.route))?;

    if let Some(ref path) = args.export {
        return export_to_file(settings, route, path, args.ticks);
    }

    if args.stream {
        return stream_monitoring(&settings, args.ticks);
    }

    let sim = match settings.seed {
        Some(seed) => Simulator::seeded(seed),
        None => Simulator::system(),
    };
    run_tui(settings, sim, route)
}

/// Logs go to stderr in headless modes and to `--log-file` under the UI,
/// where the terminal is taken.
fn init_tracing(log_file: Option<&Path>, headless: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match log_file {
        Some(path) => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("cannot create log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None if headless => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(io::stderr)
                .init();
        }
        None => {}
    }
    Ok(())
}

fn entropy(seed: Option<u64>) -> Box<dyn Entropy> {
    match seed {
        Some(seed) => Box::new(SeededEntropy::new(seed)),
        None => Box::new(SeededEntropy::from_os()),
    }
}

/// Run the TUI until the user quits
fn run_tui(settings: Settings, sim: Simulator, route: Route) -> Result<()> {
    let theme = Theme::from_mode(settings.theme);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Setup panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic);
    }));

    let mut app = App::new(settings, sim, route, theme);
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    while app.running {
        terminal.draw(|frame| ui::render(frame, app))?;

        if let Some(Event::Key(key)) = events::poll_event(FRAME)? {
            events::handle_key_event(app, key);
        }

        // Due section ticks run to completion before the next draw
        app.tick();
    }

    info!("quit");
    Ok(())
}

/// Advance a fresh page through simulated time and write its snapshot
fn export_to_file(settings: Settings, route: Route, path: &Path, ticks: u32) -> Result<()> {
    let clock = ManualClock::new();
    let sim = Simulator::new(Box::new(clock.clone()), entropy(settings.seed));
    let mut app = App::new(settings, sim, route, Theme::dark());

    for _ in 0..ticks {
        clock.advance(EXPORT_STEP);
        app.tick();
    }

    app.export_state(path)?;
    println!("Exported {} after {}s to: {}", route.path(), ticks, path.display());
    Ok(())
}

/// Tick the monitoring section on a tokio interval and print each update
fn stream_monitoring(settings: &Settings, ticks: u32) -> Result<()> {
    let rt = tokio::runtime::Runtime::new()?;
    let sim = Simulator::new(Box::new(SystemClock::new()), entropy(settings.seed));
    let section = Monitoring::new(&settings.thresholds);

    rt.block_on(async move {
        let mut feed = Feed::spawn(section, sim);
        let started = tokio::time::Instant::now();
        let mut stdout = io::stdout();
        let mut printed = 0;

        while ticks == 0 || printed < ticks {
            let snapshot = tokio::select! {
                s = feed.changed() => s,
                _ = tokio::signal::ctrl_c() => None,
            };
            let Some(monitoring) = snapshot else { break };

            let line = serde_json::json!({
                "elapsed_ms": started.elapsed().as_millis() as u64,
                "samples": monitoring.samples(),
            });
            writeln!(stdout, "{}", line)?;
            stdout.flush()?;
            printed += 1;
        }

        feed.cancel();
        info!(lines = printed, "stream finished");
        Ok::<(), anyhow::Error>(())
    })
}
