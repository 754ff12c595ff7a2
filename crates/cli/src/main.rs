use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use libris_app::{Console, Library};
use libris_kernel::settings::Settings;

/// Interactive in-memory library catalog.
#[derive(Debug, Parser)]
#[command(name = "libris", version, about)]
struct Cli {
    /// Directory holding base.toml and the per-environment overlay.
    #[arg(long, env = "LIBRIS_CONFIG_DIR")]
    config_dir: Option<PathBuf>,

    /// Do not reprint the menu before each prompt.
    #[arg(long)]
    no_menu: bool,

    /// Raise log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut settings =
        Settings::load(cli.config_dir.as_deref()).with_context(|| "failed to load Libris settings")?;
    if cli.no_menu {
        settings.console.show_menu = false;
    }

    libris_telemetry::init(&settings.telemetry, cli.verbose)?;

    tracing::info!(
        env = ?settings.environment,
        show_menu = settings.console.show_menu,
        "libris session starting"
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console =
        Console::new(Library::new(), stdin.lock(), stdout.lock()).with_settings(settings.console);
    console.run()?;

    let library = console.library();
    tracing::info!(
        books = library.books().count(),
        members = library.members().count(),
        transactions = library.transactions().count(),
        "libris session finished"
    );
    Ok(())
}
