use std::process::ExitCode;

use clap::Parser;
use log::LevelFilter;

use dollarshop::cli::{self, CliArgs};
use dollarshop::logger;
use dollarshop::settings::AppSettings;

fn main() -> ExitCode {
    let args = CliArgs::parse();
    let settings = AppSettings::load();

    let level = if args.verbose {
        settings.log_level.max(LevelFilter::Debug)
    } else {
        settings.log_level
    };
    logger::init(level);
    log::info!("DollarShop {} starting", env!("CARGO_PKG_VERSION"));
    if let Some(path) = logger::log_path() {
        log::debug!("Logging to {}", path.display());
    }

    let code = cli::run(args, settings);
    log::logger().flush();
    code
}
