use crate::parse::parse_address;
use crate::request::HttpRequest;
use crate::runtime::{self, HttpResponse};
use ddg_core::error::DdgError;
use ddg_core::types::GeneratedEmail;

pub const ADDRESSES_ENDPOINT: &str = "https://quack.duckduckgo.com/api/email/addresses";

pub fn build_address_request(endpoint: &str, api_key: &str) -> HttpRequest {
    HttpRequest {
        method: "POST".into(),
        url: endpoint.to_string(),
        headers: vec![("Authorization".into(), format!("Bearer {api_key}"))],
    }
}

/// Maps a raw response onto the generated address or a typed failure.
///
/// A 401 never surfaces the body; other non-2xx statuses only carry the code.
pub fn interpret_response(resp: HttpResponse) -> Result<GeneratedEmail, DdgError> {
    if resp.status == 401 {
        return Err(DdgError::InvalidCredential);
    }
    if !resp.is_success() {
        return Err(DdgError::RemoteError {
            status: resp.status,
        });
    }

    let local_part = parse_address(&resp.body)?;
    Ok(GeneratedEmail::from_local_part(&local_part, resp.body))
}

#[derive(Debug, Clone)]
pub struct DuckClient {
    endpoint: String,
}

impl Default for DuckClient {
    fn default() -> Self {
        Self::new()
    }
}

impl DuckClient {
    pub fn new() -> Self {
        Self {
            endpoint: ADDRESSES_ENDPOINT.to_string(),
        }
    }

    /// Points the client at another server. Only used against mock servers.
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub async fn request_email(&self, api_key: &str) -> Result<GeneratedEmail, DdgError> {
        let req = build_address_request(&self.endpoint, api_key);
        log::debug!("requesting address: {req:?}");

        let resp = runtime::execute(&req)
            .await
            .map_err(|e| DdgError::Transport(format!("{e:#}")))?;

        interpret_response(resp)
    }
}
