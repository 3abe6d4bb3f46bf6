//! Serde model of the parts of `google-services.json` we care about.
//!
//! Every field is optional: a missing key, a `null` value and an empty array all
//! end up as an empty string once [`RawCredentialsDocument::options`] flattens the
//! document. Keys not listed here are ignored. Leaves are kept as raw JSON values,
//! so an unexpected type never rejects the whole document.

use serde::Deserialize;
use serde_json::Value;

use crate::FirebaseOptions;

/// The parsed contents of a `google-services.json` file.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RawCredentialsDocument {
    /// Values shared by all apps of the Firebase project.
    pub project_info: Option<ProjectInfo>,
    /// One entry per registered app. Only the first one is used.
    pub client: Option<Vec<Client>>,
}

/// The `project_info` object.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ProjectInfo {
    /// Becomes the messaging sender id.
    pub project_number: Option<Value>,
    /// Technical name of the project.
    pub project_id: Option<Value>,
    /// Default Cloud Storage bucket.
    pub storage_bucket: Option<Value>,
}

/// An entry of the `client` array.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Client {
    /// Identifies the app.
    pub client_info: Option<ClientInfo>,
    /// Only `current_key` of the first entry is used.
    pub api_key: Option<Vec<ApiKey>>,
}

/// The `client_info` object of a client.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ClientInfo {
    /// Becomes the app id.
    pub mobilesdk_app_id: Option<Value>,
}

/// An entry of the `api_key` array of a client.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ApiKey {
    /// Becomes the api key.
    pub current_key: Option<Value>,
}

impl RawCredentialsDocument {
    /// Flattens the document into the values the generated options file needs.
    #[must_use]
    pub fn options(&self) -> FirebaseOptions {
        let project_info = self.project_info.as_ref();
        let client = self.client.as_deref().and_then(<[Client]>::first);

        let api_key = client
            .and_then(|client| client.api_key.as_deref())
            .and_then(<[ApiKey]>::first)
            .and_then(|api_key| api_key.current_key.as_ref());
        let app_id = client
            .and_then(|client| client.client_info.as_ref())
            .and_then(|client_info| client_info.mobilesdk_app_id.as_ref());

        FirebaseOptions {
            api_key: text(api_key),
            app_id: text(app_id),
            messaging_sender_id: text(project_info.and_then(|info| info.project_number.as_ref())),
            project_id: text(project_info.and_then(|info| info.project_id.as_ref())),
            storage_bucket: text(project_info.and_then(|info| info.storage_bucket.as_ref())),
        }
    }
}

/// Strings are taken verbatim, `null` becomes empty, anything else its JSON text.
fn text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(value)) => value.clone(),
        Some(other) => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> RawCredentialsDocument {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn copies_values_verbatim() {
        let document = parse(
            r#"{
                "project_info": {
                    "project_number": " 123 ",
                    "project_id": "demo-1",
                    "storage_bucket": "demo-1.appspot.com"
                },
                "client": [{
                    "client_info": { "mobilesdk_app_id": "1:123:android:abc" },
                    "api_key": [{ "current_key": "AIza..." }]
                }]
            }"#,
        );

        assert_eq!(
            document.options(),
            FirebaseOptions {
                api_key: "AIza...".into(),
                app_id: "1:123:android:abc".into(),
                messaging_sender_id: " 123 ".into(),
                project_id: "demo-1".into(),
                storage_bucket: "demo-1.appspot.com".into(),
            }
        );
    }

    #[test]
    fn empty_document_yields_empty_strings() {
        assert_eq!(parse("{}").options(), FirebaseOptions::default());
    }

    #[test]
    fn missing_app_id_is_empty() {
        let options = parse(
            r#"{
                "project_info": { "project_id": "demo-1" },
                "client": [{ "client_info": {}, "api_key": [{ "current_key": "key" }] }]
            }"#,
        )
        .options();

        assert_eq!(options.app_id, "");
        assert_eq!(options.api_key, "key");
        assert_eq!(options.project_id, "demo-1");
    }

    #[test]
    fn empty_sequences_are_not_fatal() {
        let options = parse(r#"{ "client": [] }"#).options();
        assert_eq!(options, FirebaseOptions::default());

        let options = parse(r#"{ "client": [{ "api_key": [] }] }"#).options();
        assert_eq!(options.api_key, "");
    }

    #[test]
    fn null_values_are_empty() {
        let options = parse(
            r#"{
                "project_info": { "project_number": null, "project_id": "p" },
                "client": null
            }"#,
        )
        .options();

        assert_eq!(options.messaging_sender_id, "");
        assert_eq!(options.project_id, "p");
        assert_eq!(options.api_key, "");
    }

    #[test]
    fn only_the_first_client_is_used() {
        let options = parse(
            r#"{
                "client": [
                    { "api_key": [{ "current_key": "first" }, { "current_key": "ignored" }] },
                    { "api_key": [{ "current_key": "second" }] }
                ]
            }"#,
        )
        .options();

        assert_eq!(options.api_key, "first");
    }

    #[test]
    fn non_string_leaves_are_rendered() {
        let options = parse(
            r#"{
                "project_info": { "project_number": 123, "project_id": "demo-1" },
                "client": [{ "client_info": { "mobilesdk_app_id": true } }]
            }"#,
        )
        .options();

        assert_eq!(options.messaging_sender_id, "123");
        assert_eq!(options.project_id, "demo-1");
        assert_eq!(options.app_id, "true");
        assert_eq!(options.api_key, "");
    }
}
