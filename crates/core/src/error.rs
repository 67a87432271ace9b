/// Domain-level errors shared across the workspace.
///
/// The API layer maps these onto HTTP statuses; the message text is what
/// clients receive in the `{"error": ...}` body, so wording here is part
/// of the boundary contract.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A mutation matched zero rows. Wrong id and wrong owner are
    /// deliberately indistinguishable.
    #[error("{entity} not found or permission denied.")]
    NotFound { entity: &'static str },

    /// A required field is missing or malformed.
    #[error("{0}")]
    Validation(String),

    /// Missing or unverifiable credentials.
    #[error("{0}")]
    Unauthorized(String),

    /// Something that should not happen given valid upstream data.
    #[error("{0}")]
    Internal(String),
}
