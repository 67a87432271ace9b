//! Typed errors at the identity boundary.

/// Error from the identity provider.
///
/// `Api` carries the upstream status and message verbatim; the REST layer
/// forwards the message to clients unredacted, so nothing is rewritten
/// here.
#[derive(Debug, thiserror::Error)]
pub enum IdentityError {
    /// The HTTP request itself failed (network, DNS, TLS).
    #[error("identity request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The provider returned a non-2xx response.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// The provider returned a 2xx body this client could not decode.
    #[error("unexpected identity response: {0}")]
    Decode(#[from] serde_json::Error),
}
