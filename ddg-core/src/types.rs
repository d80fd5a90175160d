/// Fixed domain every generated local-part is appended to.
pub const EMAIL_DOMAIN: &str = "duck.com";

/// A freshly issued private address plus the raw response it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedEmail {
    pub address: String,
    pub raw_body: Vec<u8>,
}

impl GeneratedEmail {
    pub fn from_local_part(local_part: &str, raw_body: Vec<u8>) -> Self {
        Self {
            address: format!("{local_part}@{EMAIL_DOMAIN}"),
            raw_body,
        }
    }
}
