use std::path::PathBuf;

use anyhow::{bail, Context};
use pico_args::Arguments;

/// Where the Firebase console's Android configuration is expected.
pub(crate) const DEFAULT_INPUT: &str = "android/app/google-services.json";
/// Where the Flutter app looks for its options.
pub(crate) const DEFAULT_OUTPUT: &str = "mobile/lib/core/firebase/firebase_options.dart";

pub(crate) const USAGE: &str = "\
Usage: setup-firebase [--input <path>] [--output <path>]

Generates the Dart options file of the mobile app from google-services.json.

Options:
  --input <path>   credentials file [default: android/app/google-services.json]
  --output <path>  generated file [default: mobile/lib/core/firebase/firebase_options.dart]
  -h, --help       print this help";

pub(crate) struct Config {
    pub(crate) input: PathBuf,
    pub(crate) output: PathBuf,
    pub(crate) bindgen: firebase_options_bindgen::Config,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: DEFAULT_INPUT.into(),
            output: DEFAULT_OUTPUT.into(),
            bindgen: firebase_options_bindgen::Config::default(),
        }
    }
}

pub(crate) enum Command {
    Run(Config),
    Help,
}

impl Command {
    pub(crate) fn parse(mut args: Arguments) -> anyhow::Result<Self> {
        if args.contains(["-h", "--help"]) {
            return Ok(Self::Help);
        }

        let mut config = Config::default();
        // only the `FromStr` based getters accept `--key=value`
        if let Some(input) = args
            .opt_value_from_str::<_, PathBuf>("--input")
            .context("invalid --input")?
        {
            config.input = input;
        }
        if let Some(output) = args
            .opt_value_from_str::<_, PathBuf>("--output")
            .context("invalid --output")?
        {
            config.output = output;
        }

        let remaining = args.finish();
        if !remaining.is_empty() {
            bail!("unexpected arguments: {remaining:?}");
        }

        Ok(Self::Run(config))
    }
}
