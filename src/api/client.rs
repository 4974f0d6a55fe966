//! anchnet Client
//!
//! Owns the endpoint, credentials and zone, and sends typed requests.

use super::action::Action;
use super::auth::Credentials;
use super::common::{ApiRequest, ApiResponse, RequestCommon};
use super::error::{Error, Result};
use super::http::AnchnetHttpClient;
use super::signature::sign;

/// Default endpoint
pub const DEFAULT_ENDPOINT: &str = "http://api.51idc.com/cloud/api/iaas";

/// Default zone. ac1 is mainland China, ac2 is Asia-Pacific.
pub const DEFAULT_ZONE: &str = "ac1";

/// Main anchnet client
#[derive(Clone)]
pub struct Client {
    http: AnchnetHttpClient,
    credentials: Credentials,
    endpoint: String,
    zone: String,
}

impl Client {
    /// Create a new client using the default zone
    pub fn new(endpoint: &str, credentials: Credentials) -> Result<Self> {
        Ok(Self::with_http(AnchnetHttpClient::new()?, endpoint, credentials))
    }

    /// Create a client around an existing HTTP client
    pub fn with_http(http: AnchnetHttpClient, endpoint: &str, credentials: Credentials) -> Self {
        Self {
            http,
            credentials,
            endpoint: endpoint.to_string(),
            zone: DEFAULT_ZONE.to_string(),
        }
    }

    /// Switch to a different zone for all subsequent requests
    pub fn set_zone(&mut self, zone: &str) {
        self.zone = zone.to_string();
    }

    pub fn zone(&self) -> &str {
        &self.zone
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn http(&self) -> &AnchnetHttpClient {
        &self.http
    }

    /// Send a request to anchnet and decode the reply into `response`.
    ///
    /// The request is never modified; the header is set on a private copy.
    /// If the server answers with a nonzero code, `response` is still
    /// filled in and [`Error::Api`] is returned.
    pub async fn send_request<R: ApiRequest>(
        &self,
        request: &R,
        response: &mut R::Response,
    ) -> Result<()> {
        let action = Action::resolve(request.action_name())?;
        let prepared = inject_common(request, &self.credentials, &self.zone, action);

        let body = serde_json::to_vec(&prepared).map_err(Error::Serialize)?;
        let signature = sign(&body, self.credentials.private_key.as_bytes());

        tracing::debug!(action = %action, zone = %self.zone, "sending request");
        let raw = self.http.post(&self.endpoint, body, &signature).await?;

        decode_response(&raw, response)
    }
}

/// Copy `request` and stamp the common header onto the copy
pub fn inject_common<R: ApiRequest>(
    request: &R,
    credentials: &Credentials,
    zone: &str,
    action: Action,
) -> R {
    request.clone().with_common(RequestCommon {
        action: action.as_str().to_string(),
        token: credentials.public_key.clone(),
        zone: zone.to_string(),
        project: credentials.project_id.clone(),
    })
}

/// Decode a raw response body into `response` and check its status code
pub fn decode_response<T: ApiResponse>(body: &[u8], response: &mut T) -> Result<()> {
    *response = serde_json::from_slice(body).map_err(Error::Decode)?;

    let common = response.common();
    tracing::debug!(action = %common.action, code = common.code, "received response");

    if common.code != 0 {
        return Err(Error::Api {
            code: common.code,
            message: common.message.clone(),
        });
    }

    Ok(())
}
