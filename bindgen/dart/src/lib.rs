//! Generates the Dart source of a `DefaultFirebaseOptions` class, the file
//! Flutter apps pass to `Firebase.initializeApp`.
//!
//! Rendering is split from persisting: [`generate`] writes into any [`Write`],
//! while [`write_options_file`] and [`update_options_file`] put the result on disk.

mod file;
mod literal;
mod platform;

pub use file::{update_options_file, write_options_file};
pub use literal::DartLiteral;
pub use platform::{TargetPlatform, Variant};

use lib_google_services::FirebaseOptions;
use std::{
    borrow::Cow,
    io::{self, Write},
};

/// Bundle identifier of the iOS and macOS apps.
pub const DEFAULT_IOS_BUNDLE_ID: &str = "com.kivugreen.actionapp";

/// Generator settings that do not come from the credentials document.
pub struct Config {
    /// Written verbatim into the `ios` and `macos` variants, independent of the extracted options.
    pub ios_bundle_id: Cow<'static, str>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ios_bundle_id: Cow::Borrowed(DEFAULT_IOS_BUNDLE_ID),
        }
    }
}

/// Writes the complete options file.
///
/// The output only depends on `options` and `config`.
///
/// # Errors
///
/// Forwards any error of `out`.
pub fn generate(
    out: &mut impl Write,
    options: &FirebaseOptions,
    config: &Config,
) -> io::Result<()> {
    writeln!(
        out,
        "// File generated automatically from google-services.json"
    )?;
    writeln!(
        out,
        "import 'package:firebase_core/firebase_core.dart' show FirebaseOptions;"
    )?;
    writeln!(out, "import 'package:flutter/foundation.dart'")?;
    writeln!(
        out,
        "    show defaultTargetPlatform, kIsWeb, TargetPlatform;"
    )?;
    writeln!(out)?;

    writeln!(out, "class DefaultFirebaseOptions {{")?;
    generate_current_platform(out)?;

    for variant in Variant::ALL {
        writeln!(out)?;
        generate_variant(out, variant, options, config)?;
    }

    writeln!(out, "}}")?;

    Ok(())
}

/// Renders the options file into a string.
#[must_use]
#[expect(
    clippy::expect_used,
    clippy::missing_panics_doc,
    reason = "writing into a `Vec` does not fail"
)]
pub fn render(options: &FirebaseOptions, config: &Config) -> String {
    let mut out = Vec::new();
    generate(&mut out, options, config).expect("write into memory");
    String::from_utf8_lossy(&out).into_owned()
}

/// The `currentPlatform` getter choosing a variant at the app's run time.
///
/// # Errors
///
/// Forwards any error of `out`.
pub fn generate_current_platform(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "  static FirebaseOptions get currentPlatform {{")?;
    writeln!(out, "    if (kIsWeb) {{")?;
    writeln!(out, "      return {web};", web = Variant::Web.field())?;
    writeln!(out, "    }}")?;
    writeln!(out, "    switch (defaultTargetPlatform) {{")?;

    for platform in TargetPlatform::ALL {
        writeln!(
            out,
            "      case TargetPlatform.{name}:",
            name = platform.dart_name()
        )?;
        match platform.variant() {
            Some(variant) => writeln!(out, "        return {field};", field = variant.field())?,
            None => {
                writeln!(out, "        throw UnsupportedError(")?;
                writeln!(
                    out,
                    "          'DefaultFirebaseOptions have not been configured for {name} - '",
                    name = platform.dart_name()
                )?;
                writeln!(
                    out,
                    "          'you can reconfigure this by running the FlutterFire CLI again.',"
                )?;
                writeln!(out, "        );")?;
            }
        }
    }

    writeln!(out, "      default:")?;
    writeln!(out, "        throw UnsupportedError(")?;
    writeln!(
        out,
        "          'DefaultFirebaseOptions are not supported for this platform.',"
    )?;
    writeln!(out, "        );")?;
    writeln!(out, "    }}")?;
    writeln!(out, "  }}")?;

    Ok(())
}

/// A single `static const FirebaseOptions` field.
///
/// # Errors
///
/// Forwards any error of `out`.
pub fn generate_variant(
    out: &mut impl Write,
    variant: Variant,
    options: &FirebaseOptions,
    config: &Config,
) -> io::Result<()> {
    let FirebaseOptions {
        ref api_key,
        ref app_id,
        ref messaging_sender_id,
        ref project_id,
        ref storage_bucket,
    } = *options;

    writeln!(
        out,
        "  static const FirebaseOptions {field} = FirebaseOptions(",
        field = variant.field()
    )?;
    generate_argument(out, "apiKey", api_key)?;
    generate_argument(out, "appId", app_id)?;
    generate_argument(out, "messagingSenderId", messaging_sender_id)?;
    generate_argument(out, "projectId", project_id)?;
    if variant.has_auth_domain() {
        generate_argument(out, "authDomain", &options.auth_domain())?;
    }
    generate_argument(out, "storageBucket", storage_bucket)?;
    if variant.has_bundle_id() {
        generate_argument(out, "iosBundleId", &config.ios_bundle_id)?;
    }
    writeln!(out, "  );")?;

    Ok(())
}

fn generate_argument(out: &mut impl Write, name: &str, value: &str) -> io::Result<()> {
    writeln!(out, "    {name}: {value},", value = value.dart_string())
}
