use firebase_options_bindgen::update_options_file;
use lib_google_services::extract_firebase_config;
use log::info;

use crate::{
    config::Config,
    error::{SetupError, SetupResult},
};

/// Extracts the options from the input file and regenerates the output file from them.
pub(crate) fn run(config: &Config) -> SetupResult<()> {
    info!("🔥 Firebase configuration from {}", config.input.display());
    info!("");

    let options =
        extract_firebase_config(&config.input).ok_or_else(|| SetupError::NoConfiguration {
            input: config.input.clone(),
        })?;

    info!("✅ Configuration extracted successfully!");
    info!("   Project ID: {}", options.project_id);

    if update_options_file(&config.output, Some(&options), &config.bindgen) {
        Ok(())
    } else {
        Err(SetupError::WriteFailed {
            output: config.output.clone(),
        })
    }
}
