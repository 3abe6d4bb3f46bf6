use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};

use lib_google_services::FirebaseOptions;
use log::{debug, error, info};

use crate::{generate, Config};

/// Replaces the file at `path` with freshly generated options.
///
/// The file is truncated before writing; its previous content is not inspected.
/// Parent directories are not created.
///
/// # Errors
///
/// Returns any error raised while creating, writing or flushing the file.
pub fn write_options_file(
    path: &Path,
    options: &FirebaseOptions,
    config: &Config,
) -> io::Result<()> {
    let mut out = new_out_file(path)?;
    generate(&mut out, options, config)?;
    out.flush()
}

/// Writes the options file and reports the outcome on the console.
///
/// Returns `true` if the file has been written. Without any `options` nothing is touched.
pub fn update_options_file(
    path: &Path,
    options: Option<&FirebaseOptions>,
    config: &Config,
) -> bool {
    let Some(options) = options else {
        debug!("no options available, leaving {} untouched", path.display());
        return false;
    };

    match write_options_file(path, options, config) {
        Ok(()) => {
            info!("✅ File {} updated successfully!", path.display());
            true
        }
        Err(error) => {
            error!("❌ Error while writing {}: {error}", path.display());
            false
        }
    }
}

fn new_out_file(path: &Path) -> io::Result<BufWriter<File>> {
    let out_file = File::create(path)?;
    Ok(BufWriter::new(out_file))
}
