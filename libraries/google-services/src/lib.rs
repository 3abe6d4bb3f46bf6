//! Reads the Firebase client configuration out of a `google-services.json` file.
//!
//! The Firebase console hands out this file for Android apps. It contains
//! everything a `FirebaseOptions` value needs on the other platforms as well,
//! which is why the options file generator starts from here.

mod document;
mod error;

pub use document::{ApiKey, Client, ClientInfo, ProjectInfo, RawCredentialsDocument};
pub use error::ExtractError;

use log::{error, info};
use std::{fs, io, path::Path};

/// The flat set of values extracted from a credentials document.
///
/// Every field holds the JSON value verbatim or an empty string if it was absent.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FirebaseOptions {
    /// Taken from the first api key of the first client.
    pub api_key: String,
    /// Taken from `client_info.mobilesdk_app_id` of the first client.
    pub app_id: String,
    /// Taken from `project_info.project_number`.
    pub messaging_sender_id: String,
    /// Taken from `project_info.project_id`.
    pub project_id: String,
    /// Taken from `project_info.storage_bucket`.
    pub storage_bucket: String,
}

impl FirebaseOptions {
    /// The hosting domain used for web authentication, derived from the project id.
    ///
    /// An empty project id still yields `.firebaseapp.com`.
    #[must_use]
    pub fn auth_domain(&self) -> String {
        format!("{}.firebaseapp.com", self.project_id)
    }
}

/// Reads and flattens the credentials document at `path`.
///
/// # Errors
///
/// Returns [`ExtractError::Missing`] if there is no such file,
/// [`ExtractError::Read`] for any other I/O failure and
/// [`ExtractError::Parse`] if the content is not a valid credentials document.
pub fn read_google_services(path: &Path) -> Result<FirebaseOptions, ExtractError> {
    let json = fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => ExtractError::Missing {
            path: path.to_owned(),
        },
        _ => ExtractError::Read {
            path: path.to_owned(),
            source,
        },
    })?;

    let document: RawCredentialsDocument =
        serde_json::from_str(&json).map_err(|source| ExtractError::Parse {
            path: path.to_owned(),
            source,
        })?;

    Ok(document.options())
}

/// Like [`read_google_services`], but reports failures on the console instead of returning them.
///
/// A missing file comes with instructions on where to get it and where to put it.
/// Returns `None` whenever no options could be extracted.
#[must_use]
pub fn extract_firebase_config(path: &Path) -> Option<FirebaseOptions> {
    match read_google_services(path) {
        Ok(options) => Some(options),
        Err(ExtractError::Missing { path }) => {
            error!("❌ File {} not found!", path.display());
            info!("");
            info!("📋 Instructions:");
            info!("1. Download google-services.json from the Firebase console");
            info!("2. Place it at: {}", path.display());
            info!("3. Run this tool again");
            None
        }
        Err(error) => {
            error!("❌ Error while reading the file: {error}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{fs, path::PathBuf};

    fn fixture() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/google-services.json")
    }

    #[test]
    fn reads_fixture() {
        let options = read_google_services(&fixture()).unwrap();

        assert_eq!(
            options,
            FirebaseOptions {
                api_key: "AIzaSyDemoKey".into(),
                app_id: "1:123:android:abc".into(),
                messaging_sender_id: "123".into(),
                project_id: "demo-1".into(),
                storage_bucket: "demo-1.appspot.com".into(),
            }
        );
        assert_eq!(options.auth_domain(), "demo-1.firebaseapp.com");
    }

    #[test]
    fn auth_domain_of_empty_project() {
        assert_eq!(FirebaseOptions::default().auth_domain(), ".firebaseapp.com");
    }

    #[test]
    fn missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("google-services.json");

        let error = read_google_services(&path).unwrap_err();
        assert!(
            matches!(error, ExtractError::Missing { .. }),
            "unexpected error: {error:?}"
        );
        assert_eq!(error.path(), path.as_path());
        assert_eq!(extract_firebase_config(&path), None);
    }

    #[test]
    fn invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("google-services.json");
        fs::write(&path, "{ \"project_info\": ").unwrap();

        let error = read_google_services(&path).unwrap_err();
        assert!(
            matches!(error, ExtractError::Parse { .. }),
            "unexpected error: {error:?}"
        );
        assert!(error.to_string().starts_with("failed to parse"));
        assert_eq!(extract_firebase_config(&path), None);
    }

    #[test]
    fn directory_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();

        let error = read_google_services(dir.path()).unwrap_err();
        assert!(
            matches!(error, ExtractError::Read { .. }),
            "unexpected error: {error:?}"
        );
    }

    #[test]
    fn extract_returns_options() {
        assert_eq!(
            extract_firebase_config(&fixture()).map(|options| options.project_id),
            Some("demo-1".to_owned())
        );
    }
}
