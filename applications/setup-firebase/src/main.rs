//! Generates `firebase_options.dart` from the `google-services.json` handed out by the Firebase console.

use std::process::ExitCode;

use log::{debug, error, info};
use pico_args::Arguments;

mod config;
mod error;
mod logging;
mod setup;

use config::{Command, USAGE};
use error::USAGE_EXIT_CODE;

fn main() -> ExitCode {
    logging::init_logger();

    let config = match Command::parse(Arguments::from_env()) {
        Ok(Command::Run(config)) => config,
        Ok(Command::Help) => {
            info!("{USAGE}");
            return ExitCode::SUCCESS;
        }
        Err(error) => {
            error!("{error:#}");
            info!("{USAGE}");
            return ExitCode::from(USAGE_EXIT_CODE);
        }
    };

    match setup::run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            debug!("setup failed: {error}");
            error.into()
        }
    }
}
