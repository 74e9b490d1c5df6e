use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;

use linqkeun::config::{LinqkeunPaths, Settings};
use linqkeun::logging::init_file_logging;
use linqkeun::tui::run_tui;

#[derive(Parser)]
#[command(
    name = "linqkeun",
    version,
    about = "Terminal client for the Linqkeun Mini ERP",
    long_about = "Linqkeun is a terminal client for a small business backend. \
                  It lists and creates customers, products and invoices over \
                  the backend's REST API."
)]
struct Cli {
    /// Backend base URL (overrides the settings file)
    #[arg(long, env = "LINQKEUN_BACKEND_URL", global = true)]
    backend_url: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI (default)
    #[command(alias = "ui")]
    Tui,

    /// Show current configuration and paths
    Config,

    /// Write the effective settings to the settings file
    Init,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = LinqkeunPaths::new()?;
    let settings = Settings::load_or_default(&paths)?.with_backend_url(cli.backend_url);

    match cli.command {
        Some(Commands::Config) => {
            let backend_url = settings.validated_backend_url()?;
            println!("Linqkeun Configuration");
            println!("======================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Log file:         {}", paths.log_file().display());
            println!();
            println!("Settings:");
            println!("  Backend URL: {}", backend_url);
            println!("  Tick rate:   {} ms", settings.tick_rate_ms);
            println!("  Log filter:  {}", settings.log_filter);
        }
        Some(Commands::Init) => {
            let backend_url = settings.validated_backend_url()?;
            let settings = settings.with_backend_url(Some(backend_url));
            settings.save(&paths)?;
            println!("Settings written to: {}", paths.settings_file().display());
        }
        Some(Commands::Tui) | None => {
            init_file_logging(&paths.log_file(), &settings.log_filter)?;
            info!(
                config_dir = %paths.base_dir().display(),
                backend_url = %settings.backend_url,
                "Loaded configuration"
            );
            run_tui(&settings)?;
        }
    }

    Ok(())
}
