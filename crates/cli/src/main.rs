//! AgriSense Converter - Main Entry Point

use clap::Parser;
use csv_pipeline::{convert, ConvertOptions};
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

mod args;
mod settings;

use args::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    info!("AgriSense converter v{}", env!("CARGO_PKG_VERSION"));

    let settings = match settings::load(cli.config.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            error!("{:#}", e);
            std::process::exit(2);
        }
    };

    let options = ConvertOptions {
        ranges: settings.ranges,
        precision: settings.precision,
        policy: cli.policy.map(Into::into).unwrap_or(settings.policy),
        append: cli.append,
        expect_rows: cli.expect_rows,
    };

    match convert(&cli.input, &cli.output, &options) {
        Ok(report) => {
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                report.print_summary();
            }
            Ok(())
        }
        Err(e) => {
            error!("{}", e);
            std::process::exit(e.exit_code());
        }
    }
}

/// Initialize logging
fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");
}
