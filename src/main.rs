//! orgportal - Student Organization Portal
//!
//! A TUI for organization members.
//!
//! Features:
//! - View and edit your profile (with cancel that really reverts)
//! - Change your password, with per-field show/hide
//! - Notification bell with unread badge and dropdown
//!
//! Usage: orgportal [--fail network|auth] [--verbose]

mod app;
mod components;
mod config;
mod error;
mod portal;
mod types;
mod ui;

use anyhow::{bail, Context, Result};
use app::App;
use config::{BackendOptions, Config, FailureMode};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{self, disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use portal::{PortalData, SimulatedBackend};
use ratatui::prelude::*;
use std::fs::{self, File};
use std::io::stdout;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Parsed command line
#[derive(Debug, Default)]
struct Args {
    failure: Option<FailureMode>,
    verbose: bool,
}

impl Args {
    fn parse(args: &[String]) -> Result<Self> {
        let mut parsed = Args::default();
        let mut iter = args.iter().skip(1);

        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--fail" | "-f" => {
                    let mode = iter.next().context("--fail needs a value (network|auth|none)")?;
                    match FailureMode::parse(mode) {
                        Some(mode) => parsed.failure = Some(mode),
                        None => bail!("Unknown failure mode: {}", mode),
                    }
                }
                "--verbose" | "-V" => parsed.verbose = true,
                other => bail!("Unknown argument: {}", other),
            }
        }

        Ok(parsed)
    }

    /// Backend settings for this run. `--fail` applies here only and never
    /// reaches the saved config.
    fn backend_options(&self, config: &Config) -> BackendOptions {
        let mut options = config.backend.clone();
        if let Some(failure) = self.failure {
            options.failure = failure;
        }
        options
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_help();
        return Ok(());
    }

    if args.iter().any(|a| a == "--version" || a == "-v") {
        println!("orgportal {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let args = Args::parse(&args)?;

    if let Err(e) = run_app(args) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn print_help() {
    println!(
        r#"orgportal - Student Organization Portal

USAGE:
    orgportal [OPTIONS]

OPTIONS:
    -f, --fail <MODE>    Make the simulated API fail: network, auth or none
    -V, --verbose        Debug logging
    -h, --help           Print help information
    -v, --version        Print version information

KEYBINDINGS:
    F1 / F2          Profile / Password tab
    Left / Right     Switch tabs
    e                Edit profile
    Enter            Save profile / update password
    Esc              Cancel edit / clear password form
    Up / Down / Tab  Move between fields
    Ctrl+T           Show/hide focused password
    n, Ctrl+B        Open/close notifications
    a / s            Mark all read / see all (notifications open)
    t                Cycle theme
    q, Ctrl+C        Quit

CONFIG:
    ~/.config/orgportal/config.toml

LOG:
    ~/.config/orgportal/orgportal.log (RUST_LOG overrides the level)
"#
    );
}

/// Log to a file; the terminal belongs to the UI
fn tracing_init(verbose: bool) -> Result<()> {
    let log_path = Config::log_path()?;
    if let Some(parent) = log_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory {:?}", parent))?;
    }
    let log_file = File::create(&log_path)
        .with_context(|| format!("Failed to create log file {:?}", log_path))?;

    let default_directive = if verbose { "orgportal=debug" } else { "orgportal=info" };
    let filter = EnvFilter::builder()
        .with_default_directive(default_directive.parse()?)
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_ansi(false)
        .with_env_filter(filter)
        .with_writer(Mutex::new(log_file))
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to set up logging: {}", e))?;

    Ok(())
}

fn run_app(args: Args) -> Result<()> {
    tracing_init(args.verbose)?;

    let config = Config::load().context("Failed to load configuration")?;
    let options = args.backend_options(&config);

    let data = PortalData::load_or_demo(config.data_file.as_deref())
        .context("Failed to load portal data")?;
    info!(
        notifications = data.notifications.len(),
        failure = ?options.failure,
        "starting orgportal"
    );

    let backend = Arc::new(SimulatedBackend::new(
        data.profile.clone(),
        data.password.clone(),
        &options,
    ));
    let mut app = App::new(config, data, backend);

    let (width, height) = terminal::size().context("Failed to read terminal size")?;
    app.resize(width, height);

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to setup terminal")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    // Run main loop
    let result = main_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    info!("orgportal exited");
    result
}

fn main_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|frame| {
            ui::render(frame, app);
        })?;

        // Flash expiry and finished API calls
        app.tick();

        // Poll for events with timeout (for spinner and task updates)
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                Event::Resize(width, height) => app.resize(width, height),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(args: &[&str]) -> Vec<String> {
        std::iter::once("orgportal")
            .chain(args.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_help_does_not_panic() {
        print_help();
    }

    #[test]
    fn test_parse_args() {
        let args = Args::parse(&argv(&["--fail", "network", "-V"])).unwrap();
        assert_eq!(args.failure, Some(FailureMode::Network));
        assert!(args.verbose);

        let args = Args::parse(&argv(&[])).unwrap();
        assert_eq!(args.failure, None);
        assert!(!args.verbose);
    }

    #[test]
    fn test_fail_flag_leaves_config_untouched() {
        let config = Config::default();
        let args = Args::parse(&argv(&["--fail", "auth"])).unwrap();

        assert_eq!(args.backend_options(&config).failure, FailureMode::Auth);
        assert_eq!(config.backend.failure, FailureMode::None);

        let args = Args::parse(&argv(&[])).unwrap();
        assert_eq!(args.backend_options(&config).failure, FailureMode::None);
    }

    #[test]
    fn test_parse_args_rejects_unknown() {
        assert!(Args::parse(&argv(&["--fail"])).is_err());
        assert!(Args::parse(&argv(&["--fail", "disk"])).is_err());
        assert!(Args::parse(&argv(&["--bogus"])).is_err());
    }
}
