//! esp-bmgr - ESP board manager component resolver
//!
//! Entry point for the esp-bmgr command-line application.

use clap::Parser;

use esp_bmgr::cli::output::{display_error, OutputConfig};
use esp_bmgr::cli::Cli;
use esp_bmgr::config::settings::Settings;
use esp_bmgr::infra::environment::MemoryEnvironment;

fn main() {
    let cli = Cli::parse();
    let settings = Settings::from_environment(&MemoryEnvironment::from_process());

    let output_config = OutputConfig::new(cli.quiet, cli.json, cli.verbose);

    // Logs go to stderr so `esp-bmgr env` output stays eval-able
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(output_config.log_level(settings.debug).into()),
        )
        .with_writer(std::io::stderr)
        .init();

    output_config.apply_global();

    match cli.run(&settings) {
        Ok(0) => {}
        Ok(code) => std::process::exit(code),
        Err(e) => {
            display_error(&e);
            std::process::exit(1);
        }
    }
}
