use anyhow::{bail, Result};
use clap::Parser;

use mimuni::app::App;
use mimuni::cli::Cli;
use mimuni::config::Config;
use mimuni::utils;

/// Set up panic hook to restore terminal state on panic
fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Restore terminal state before handling panic
        // This ensures the terminal is usable after a panic
        let _ = crossterm::terminal::disable_raw_mode();
        let _ = crossterm::execute!(
            std::io::stdout(),
            crossterm::terminal::LeaveAlternateScreen
        );
        // Call the original panic hook to show the panic message
        original_hook(panic_info);
    }));
}

fn main() -> Result<()> {
    setup_panic_hook();

    // Logs go to a file; stdout belongs to the TUI
    let log_dir = utils::log_dir();
    std::fs::create_dir_all(&log_dir)?;
    let log_file = log_dir.join("mimuni.log");

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let file_appender = tracing_appender::rolling::never(&log_dir, "mimuni.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(non_blocking)
        .with_ansi(false) // Disable ANSI colors in file
        .init();

    let cli = Cli::parse();
    let config_path = utils::config_path();
    let mut config = Config::load_or_create(&config_path)?;
    cli.apply(&mut config);

    if config.mail.as_deref().unwrap_or_default().trim().is_empty() {
        bail!(
            "No account mail configured. Pass --mail <address> or set `mail` in {:?}",
            config_path
        );
    }

    // Print log location before the TUI takes over the terminal
    eprintln!("Logs are being written to: {:?}", log_file);

    let mut app = App::new(config)?;
    let result = app.run();

    drop(guard);

    result
}
