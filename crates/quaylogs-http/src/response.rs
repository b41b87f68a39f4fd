//! Raw registry response.

/// Status and untouched body of a registry response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// Numeric HTTP status code.
    pub status: u16,
    /// Value of the `error` response header, if the registry set one.
    pub error_header: Option<String>,
    /// Body bytes exactly as received.
    pub body: Vec<u8>,
}

impl RawResponse {
    /// True for exactly `200 OK`.
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }

    /// The body bytes.
    pub fn body(&self) -> &[u8] {
        &self.body
    }
}
