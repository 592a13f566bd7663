//! GraphQL control-plane client using reqwest (blocking).
//!
//! Every call posts `{query, variables}` to a single endpoint. The response
//! envelope is decoded by pure functions so that error mapping can be tested
//! without a network.

use std::time::Duration;

use appctl_core::{
    application::ports::RemoteOperations,
    domain::{Organization, RemoteApplication, RemoteError, RemoteErrorEntry, RemoteResult},
};
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use serde::{Deserialize, de::DeserializeOwned};
use serde_json::{Value, json};
use thiserror::Error;
use tracing::{debug, warn};

/// Public control-plane endpoint used when none is configured.
pub const DEFAULT_ENDPOINT: &str = "https://api.fly.io/graphql";

const TIMEOUT: Duration = Duration::from_secs(30);

const APP_FIELDS: &str = "id name appUrl hostname sharedIpAddress organization { id slug }";

/// Errors raised while building a client. Call failures are [`RemoteError`]s.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("API token contains characters not allowed in a header")]
    InvalidToken,

    #[error("Failed to create HTTP client: {0}")]
    Build(#[from] reqwest::Error),
}

/// Production implementation of [`RemoteOperations`].
#[derive(Debug, Clone)]
pub struct GraphqlClient {
    http: reqwest::blocking::Client,
    endpoint: String,
}

impl GraphqlClient {
    /// Create a client for `endpoint`, authenticating with `token` if given.
    pub fn new(endpoint: impl Into<String>, token: Option<&str>) -> Result<Self, ClientError> {
        let mut headers = HeaderMap::new();
        if let Some(token) = token.filter(|t| !t.is_empty()) {
            let mut value = HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|_| ClientError::InvalidToken)?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let http = reqwest::blocking::Client::builder()
            .timeout(TIMEOUT)
            .user_agent(concat!("appctl/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Run one query and decode its `data` member.
    fn execute<T: DeserializeOwned>(
        &self,
        operation: &str,
        query: &str,
        variables: Value,
    ) -> RemoteResult<T> {
        debug!(operation, endpoint = %self.endpoint, "GraphQL request");

        let response = self
            .http
            .post(&self.endpoint)
            .json(&json!({ "query": query, "variables": variables }))
            .send()
            .map_err(|e| {
                warn!(operation, error = %e, "GraphQL request failed");
                RemoteError::transport(format!("HTTP request failed: {e}"))
            })?;

        let status = response.status();
        let body = response.text().map_err(|e| {
            warn!(operation, error = %e, "Failed to read GraphQL response");
            RemoteError::transport(format!("Failed to read response body: {e}"))
        })?;

        decode_response(status.as_u16(), &body)
    }
}

impl RemoteOperations for GraphqlClient {
    fn resolve_default_organization(&self) -> RemoteResult<Organization> {
        let data: ViewerData = self.execute(
            "personalOrganization",
            "query { viewer { personalOrganization { id slug name } } }",
            json!({}),
        )?;
        Ok(data.viewer.personal_organization)
    }

    fn resolve_organization(&self, slug: &str) -> RemoteResult<String> {
        let data: OrganizationData = self.execute(
            "organization",
            "query($slug: String!) { organization(slug: $slug) { id } }",
            json!({ "slug": slug }),
        )?;
        data.organization
            .map(|org| org.id)
            .ok_or_else(|| RemoteError::single("Could not resolve organization", "organization"))
    }

    fn create_application(
        &self,
        name: &str,
        organization_id: &str,
    ) -> RemoteResult<RemoteApplication> {
        let query = format!(
            "mutation($input: CreateAppInput!) {{ createApp(input: $input) {{ app {{ {APP_FIELDS} }} }} }}"
        );
        let data: CreateAppData = self.execute(
            "createApp",
            &query,
            json!({ "input": { "name": name, "organizationId": organization_id } }),
        )?;
        Ok(data.create_app.app)
    }

    fn fetch_application(&self, name: &str) -> RemoteResult<RemoteApplication> {
        let query = format!("query($name: String!) {{ app(name: $name) {{ {APP_FIELDS} }} }}");
        let data: AppData = self.execute("app", &query, json!({ "name": name }))?;
        Ok(data.app)
    }

    fn delete_application(&self, name: &str) -> RemoteResult<()> {
        let _: Value = self.execute(
            "deleteApp",
            "mutation($appId: ID!) { deleteApp(appId: $appId) { organization { id } } }",
            json!({ "appId": name }),
        )?;
        Ok(())
    }
}

// ============================================================================
// Response decoding
// ============================================================================

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<GraphqlError>,
}

#[derive(Debug, Deserialize)]
struct GraphqlError {
    message: String,
    #[serde(default)]
    path: Vec<Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ViewerData {
    viewer: Viewer,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Viewer {
    personal_organization: Organization,
}

#[derive(Debug, Deserialize)]
struct OrganizationData {
    organization: Option<OrganizationId>,
}

#[derive(Debug, Deserialize)]
struct OrganizationId {
    id: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateAppData {
    create_app: CreatedApp,
}

#[derive(Debug, Deserialize)]
struct CreatedApp {
    app: RemoteApplication,
}

#[derive(Debug, Deserialize)]
struct AppData {
    app: RemoteApplication,
}

/// Decode a GraphQL response body.
///
/// A non-empty `errors` array always wins, whatever the HTTP status. Anything
/// else that prevents reading `data` is a transport failure.
pub(crate) fn decode_response<T: DeserializeOwned>(status: u16, body: &str) -> RemoteResult<T> {
    let envelope: Envelope<Value> = match serde_json::from_str(body) {
        Ok(envelope) => envelope,
        Err(e) if (200..300).contains(&status) => {
            return Err(RemoteError::transport(format!(
                "Failed to decode response: {e}"
            )));
        }
        Err(_) => return Err(RemoteError::transport(format!("HTTP {status}: {body}"))),
    };

    if !envelope.errors.is_empty() {
        return Err(RemoteError::Failed(
            envelope
                .errors
                .into_iter()
                .map(|e| RemoteErrorEntry::new(e.message, render_path(&e.path)))
                .collect(),
        ));
    }

    if !(200..300).contains(&status) {
        return Err(RemoteError::transport(format!("HTTP {status}: {body}")));
    }

    match envelope.data {
        Some(data) if !data.is_null() => serde_json::from_value(data)
            .map_err(|e| RemoteError::transport(format!("Failed to decode response data: {e}"))),
        _ => Err(RemoteError::transport("Response contained no data")),
    }
}

/// Render a GraphQL error path: `["app", "machines", 0]` becomes `app.machines[0]`.
pub(crate) fn render_path(path: &[Value]) -> String {
    let mut rendered = String::new();
    for segment in path {
        match segment {
            Value::Number(n) => rendered.push_str(&format!("[{n}]")),
            Value::String(s) => {
                if !rendered.is_empty() {
                    rendered.push('.');
                }
                rendered.push_str(s);
            }
            other => {
                if !rendered.is_empty() {
                    rendered.push('.');
                }
                rendered.push_str(&other.to_string());
            }
        }
    }
    rendered
}

#[cfg(test)]
mod tests {
    use appctl_core::domain::NOT_FOUND_MESSAGE;

    use super::*;

    #[test]
    fn path_rendering() {
        assert_eq!(render_path(&[]), "");
        assert_eq!(render_path(&[json!("app")]), "app");
        assert_eq!(
            render_path(&[json!("app"), json!("machines"), json!(0), json!("id")]),
            "app.machines[0].id"
        );
    }

    #[test]
    fn decodes_app_payload() {
        let body = r#"{"data":{"app":{
            "id":"app_123","name":"demo-app","appUrl":"demo-app.example",
            "hostname":"demo-app.fly.dev","sharedIpAddress":"",
            "organization":{"id":"org_1","slug":"acme"}}}}"#;

        let data: AppData = decode_response(200, body).unwrap();
        assert_eq!(data.app.id, "app_123");
        assert_eq!(data.app.app_url, "demo-app.example");
        assert_eq!(data.app.organization.slug, "acme");
    }

    #[test]
    fn errors_become_structured_failure() {
        let body = format!(
            r#"{{"data":null,"errors":[
                {{"message":"{NOT_FOUND_MESSAGE}","path":["app"]}},
                {{"message":"Internal server error","path":["app","organization"]}}]}}"#
        );

        let err = decode_response::<AppData>(200, &body).unwrap_err();
        assert_eq!(
            err,
            RemoteError::Failed(vec![
                RemoteErrorEntry::new(NOT_FOUND_MESSAGE, "app"),
                RemoteErrorEntry::new("Internal server error", "app.organization"),
            ])
        );
    }

    #[test]
    fn errors_win_over_http_status() {
        let body = r#"{"errors":[{"message":"Unauthorized"}]}"#;
        let err = decode_response::<AppData>(401, body).unwrap_err();
        assert_eq!(err, RemoteError::single("Unauthorized", ""));
    }

    #[test]
    fn non_json_error_page_is_transport() {
        let err = decode_response::<AppData>(502, "Bad Gateway").unwrap_err();
        assert_eq!(err, RemoteError::transport("HTTP 502: Bad Gateway"));
    }

    #[test]
    fn malformed_success_body_is_transport() {
        let err = decode_response::<AppData>(200, "{not json").unwrap_err();
        assert!(matches!(err, RemoteError::Transport(_)));
    }

    #[test]
    fn missing_data_is_transport() {
        let err = decode_response::<AppData>(200, r#"{"data":null}"#).unwrap_err();
        assert_eq!(err, RemoteError::transport("Response contained no data"));
    }

    #[test]
    fn null_organization_decodes_to_none() {
        let data: OrganizationData =
            decode_response(200, r#"{"data":{"organization":null}}"#).unwrap();
        assert!(data.organization.is_none());
    }

    #[test]
    fn personal_organization_decodes() {
        let body = r#"{"data":{"viewer":{"personalOrganization":
            {"id":"org_1","slug":"personal","name":"acme"}}}}"#;
        let data: ViewerData = decode_response(200, body).unwrap();
        assert_eq!(data.viewer.personal_organization.id, "org_1");
        assert_eq!(data.viewer.personal_organization.name, "acme");
    }

    #[test]
    fn client_rejects_token_with_newline() {
        let err = GraphqlClient::new(DEFAULT_ENDPOINT, Some("abc\ndef")).unwrap_err();
        assert!(matches!(err, ClientError::InvalidToken));
    }

    #[test]
    fn client_without_token_builds() {
        let client = GraphqlClient::new("http://localhost:1/graphql", None).unwrap();
        assert_eq!(client.endpoint(), "http://localhost:1/graphql");
    }
}
