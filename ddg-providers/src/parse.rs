use ddg_core::error::DdgError;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct AddressResponse {
    #[serde(default)]
    address: Option<String>,
}

/// Extracts the local-part from an address-creation response body.
pub fn parse_address(body: &[u8]) -> Result<String, DdgError> {
    let resp: AddressResponse = serde_json::from_slice(body)
        .map_err(|e| DdgError::MalformedResponse(format!("decode error: {e}")))?;

    resp.address
        .filter(|a| !a.is_empty())
        .ok_or_else(|| DdgError::MalformedResponse("no address in response".into()))
}
