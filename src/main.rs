// Allow panic/unwrap/expect in tests (denied globally via Cargo.toml lints)
#![cfg_attr(
    test,
    allow(
        clippy::panic,
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic_in_result_fn,
        clippy::unwrap_in_result,
        clippy::arithmetic_side_effects,
        clippy::indexing_slicing
    )
)]

mod cli;

use campus_lostfound::logging::{self, init_logging, parse_rotation, LogConfig};
use campus_lostfound::user_config::{self, UserConfig};
use campus_lostfound::utils::format_display_path;
use clap::Parser;
use cli::Args;
use color_eyre::eyre::Result;
use tracing::warn;

#[tokio::main]
async fn main() -> Result<()> {
    // Install color-eyre error hooks for colored error output
    color_eyre::install()?;

    // Parse CLI arguments first (before logging, so we can use log config)
    let args = Args::parse();

    let log_config = LogConfig {
        log_dir: args.log_dir.clone().unwrap_or_else(logging::default_log_dir),
        json_format: args.log_json,
        rotation: parse_rotation(&args.log_rotation),
        ..Default::default()
    };
    let log_file = log_config.log_file();

    if let Err(e) = init_logging(log_config) {
        eprintln!();
        eprintln!("Error: Failed to initialize logging: {e}");
        eprintln!(
            "Logs: {}",
            format_display_path(&log_file.to_string_lossy())
        );
        eprintln!();
        return Err(e);
    }

    // ~/.lostfound/config.toml is optional; flags win over it.
    let mut config = user_config::load_user_config().unwrap_or_else(|e| {
        warn!("Failed to load user config, using defaults: {e}");
        UserConfig::default()
    });
    if let Some(dir) = args.data_dir {
        config.storage.data_dir = Some(dir);
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    cli::run(args.command, &config, &mut out).await
}
